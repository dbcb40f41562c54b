//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest loading and validation errors
//! - [`service`]: Service provisioning errors
//! - [`fs`]: File system and process execution errors

pub mod manifest;
pub mod service;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
///
/// Every variant is fatal: it aborts the application being installed and the
/// bulk run around it. Waiting on a dependency is not an error, see
/// [`crate::installer::InstallOutcome::Deferred`].
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // Manifest errors
    #[error("Instructions file not found in: {path}")]
    #[diagnostic(code(vendor_installer::manifest::not_found))]
    ManifestNotFound { path: String },

    #[error("Instructions file in wrong format: {path}: {reason}")]
    #[diagnostic(
        code(vendor_installer::manifest::malformed),
        help("The instructions file must contain a JSON object")
    )]
    ManifestMalformed { path: String, reason: String },

    #[error("Instructions are required for '{path}'")]
    #[diagnostic(
        code(vendor_installer::manifest::required),
        help("Provide an install-instructions.json file or pass instructions explicitly")
    )]
    InstructionsRequired { path: String },

    #[error("'require' must be a list of application names")]
    #[diagnostic(code(vendor_installer::manifest::require))]
    RequireMalformed,

    #[error("'sys-bin-files' must be a list of file names")]
    #[diagnostic(code(vendor_installer::manifest::sys_bin_files))]
    SysBinFilesMalformed,

    #[error("'service' must be a list of service descriptors")]
    #[diagnostic(code(vendor_installer::manifest::service))]
    ServiceMalformed,

    #[error("Config error in service index {index}: {reason}")]
    #[diagnostic(
        code(vendor_installer::service::config),
        help("Every service needs at least 'name' and 'bin'")
    )]
    ServiceConfig { index: usize, reason: String },

    #[error("App name could not be determined for: {path}")]
    #[diagnostic(code(vendor_installer::app::name))]
    AppNameUndetermined { path: String },

    #[error("Invalid exclusions: {message}")]
    #[diagnostic(
        code(vendor_installer::config::exclusions),
        help("Each application may be either skipped (force) or installed in basic mode, not both")
    )]
    ExclusionsInvalid { message: String },

    // Resource errors
    #[error("'pbin' folder does not exist on: {path}")]
    #[diagnostic(code(vendor_installer::app::bin_dir))]
    BinDirNotFound { path: String },

    #[error("Post installation file does not exist: {path}")]
    #[diagnostic(code(vendor_installer::app::post_install))]
    PostInstallFile { path: String },

    #[error("Binary '{bin}' not found in: {path}")]
    #[diagnostic(code(vendor_installer::symlink::source_missing))]
    SymlinkSourceMissing { bin: String, path: String },

    #[error("Failed to search installable apps in: {path}: {reason}")]
    #[diagnostic(code(vendor_installer::discovery::failed))]
    DiscoveryFailed { path: String, reason: String },

    // Execution errors
    #[error("Error while installing '{bin}': {output}")]
    #[diagnostic(code(vendor_installer::symlink::failed))]
    SymlinkFailed { bin: String, output: String },

    #[error("Error while creating service '{service}': {reason}")]
    #[diagnostic(code(vendor_installer::service::creation))]
    ServiceCreation { service: String, reason: String },

    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(code(vendor_installer::process::failed))]
    CommandFailed { program: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(vendor_installer::fs::io_error))]
    Io { message: String },
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        InstallError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InstallError {
    fn from(err: serde_json::Error) -> Self {
        InstallError::ManifestMalformed {
            path: "inline".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for InstallError {
    fn from(err: serde_yaml::Error) -> Self {
        InstallError::ExclusionsInvalid {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
