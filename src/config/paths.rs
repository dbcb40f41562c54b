//! Host locations touched by an install

use std::path::{Path, PathBuf};

/// Directory receiving binary symlinks
pub const DEFAULT_SBIN_DIR: &str = "/usr/sbin";

/// Directory receiving generated unit files
pub const DEFAULT_UNIT_DIR: &str = "/etc/systemd/system";

/// PID file directory on kernels 5.x and newer
pub const DEFAULT_RUNTIME_DIR: &str = "/run";

/// PID file directory on older kernels
pub const LEGACY_RUNTIME_DIR: &str = "/var/run";

/// Directories searched, in order, for the service shell
pub const DEFAULT_SHELL_DIRS: &[&str] = &["/bin", "/sbin", "/usr/bin", "/usr/sbin"];

/// Linked from every generated unit
pub const DOCUMENTATION_URL: &str = "https://github.com/vendor-installer/vendor-installer";

/// Service manager executable
pub const SYSTEMCTL: &str = "systemctl";

/// Host paths and programs, overridable for non-standard hosts and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPaths {
    pub sbin_dir: PathBuf,
    pub unit_dir: PathBuf,
    pub runtime_dir: PathBuf,
    pub legacy_runtime_dir: PathBuf,
    pub shell_dirs: Vec<PathBuf>,
    pub systemctl: String,
    pub documentation_url: String,
}

impl Default for SystemPaths {
    fn default() -> Self {
        Self {
            sbin_dir: PathBuf::from(DEFAULT_SBIN_DIR),
            unit_dir: PathBuf::from(DEFAULT_UNIT_DIR),
            runtime_dir: PathBuf::from(DEFAULT_RUNTIME_DIR),
            legacy_runtime_dir: PathBuf::from(LEGACY_RUNTIME_DIR),
            shell_dirs: DEFAULT_SHELL_DIRS.iter().map(PathBuf::from).collect(),
            systemctl: SYSTEMCTL.to_string(),
            documentation_url: DOCUMENTATION_URL.to_string(),
        }
    }
}

impl SystemPaths {
    #[must_use]
    pub fn with_sbin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sbin_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_unit_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.unit_dir = dir.into();
        self
    }

    /// Path of the unit file for `service`
    pub fn unit_file(&self, service: &str) -> PathBuf {
        self.unit_dir.join(format!("{service}.service"))
    }

    /// Path of the symlink exposing `target`
    pub fn sbin_link(&self, target: &str) -> PathBuf {
        self.sbin_dir.join(target)
    }

    /// PID file directory for a kernel of the given major version
    pub fn runtime_dir_for(&self, kernel_major: Option<u32>) -> &Path {
        match kernel_major {
            Some(major) if major >= 5 => &self.runtime_dir,
            _ => &self.legacy_runtime_dir,
        }
    }
}
