//! Application descriptor
//!
//! An application lives in a vendor tree as:
//!
//! ```text
//! <app>/
//!   installation/               <- root_dir
//!     install-instructions.json
//!   pbin/                       <- bin_dir (default)
//! ```

use std::path::{Path, PathBuf};

use crate::error::fs::io_at;
use crate::error::{InstallError, Result};
use crate::manifest::{InstructionsSource, Manifest};

/// Name of the default binaries directory, a sibling of `installation/`
pub const DEFAULT_BIN_DIR: &str = "pbin";

/// Overrides for [`Application::with_options`]
#[derive(Debug, Clone, Default)]
pub struct ApplicationOptions {
    /// Binaries directory; defaults to `<root_dir>/../pbin`
    pub bin_dir: Option<PathBuf>,
    /// Instructions; default to `<root_dir>/install-instructions.json`
    pub instructions: Option<InstructionsSource>,
    /// Accept a missing default manifest as empty
    pub allow_missing_manifest: bool,
}

/// One discovered installable unit
#[derive(Debug, Clone)]
pub struct Application {
    root_dir: PathBuf,
    bin_dir: PathBuf,
    manifest: Manifest,
    name: String,
}

impl Application {
    /// Open the application whose `installation/` directory is `root_dir`,
    /// using default binaries directory and instructions file.
    pub fn open(root_dir: &Path) -> Result<Self> {
        Self::with_options(root_dir, ApplicationOptions::default())
    }

    pub fn with_options(root_dir: &Path, options: ApplicationOptions) -> Result<Self> {
        let root_dir = dunce::canonicalize(root_dir).map_err(|e| io_at(root_dir, &e))?;
        let name = app_name(&root_dir)?;

        let bin_dir = options
            .bin_dir
            .unwrap_or_else(|| root_dir.join("..").join(DEFAULT_BIN_DIR));
        if !bin_dir.is_dir() {
            return Err(InstallError::BinDirNotFound {
                path: bin_dir.display().to_string(),
            });
        }
        let bin_dir = dunce::canonicalize(&bin_dir).map_err(|e| io_at(&bin_dir, &e))?;

        let manifest = Manifest::load(
            options.instructions,
            &root_dir,
            options.allow_missing_manifest,
        )?;

        Ok(Self {
            root_dir,
            bin_dir,
            manifest,
            name,
        })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Registry key: the folder holding `installation/`
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Name of the directory containing `root_dir`.
pub fn app_name(root_dir: &Path) -> Result<String> {
    root_dir
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| InstallError::AppNameUndetermined {
            path: root_dir.display().to_string(),
        })
}
