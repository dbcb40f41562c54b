//! Common test utilities for vendor installer integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A vendor tree plus redirected system directories
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Vendor tree root passed to the binary
    pub root: PathBuf,
    /// Directory receiving binary symlinks
    pub sbin: PathBuf,
    /// Directory receiving unit files
    pub units: PathBuf,
}

impl TestWorkspace {
    /// Create an empty vendor tree and system directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("vendor");
        let sbin = temp.path().join("sbin");
        let units = temp.path().join("units");
        for dir in [&root, &sbin, &units] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            root,
            sbin,
            units,
        }
    }

    /// Create `<root>/<vendor>/<name>/{installation,pbin}` with the given manifest
    pub fn create_app(&self, vendor: &str, name: &str, manifest: &str) -> PathBuf {
        let app = self.root.join(vendor).join(name);
        std::fs::create_dir_all(app.join("installation")).expect("Failed to create installation");
        std::fs::create_dir_all(app.join("pbin")).expect("Failed to create pbin");
        std::fs::write(
            app.join("installation").join("install-instructions.json"),
            manifest,
        )
        .expect("Failed to write manifest");
        app
    }

    /// Write a file relative to the vendor tree root
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a file outside the vendor tree
    pub fn write_outside(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Symlink target in the redirected sbin directory
    pub fn link_target(&self, name: &str) -> Option<PathBuf> {
        std::fs::read_link(self.sbin.join(name)).ok()
    }

    /// `install` command against this workspace's vendor tree and system dirs
    pub fn install_cmd(&self) -> Command {
        let mut cmd = vendor_installer_cmd();
        cmd.arg("install")
            .arg(&self.root)
            .arg("--sbin-dir")
            .arg(&self.sbin)
            .arg("--unit-dir")
            .arg(&self.units);
        cmd
    }

    /// `list` command against this workspace's vendor tree
    pub fn list_cmd(&self) -> Command {
        let mut cmd = vendor_installer_cmd();
        cmd.arg("list").arg(&self.root);
        cmd
    }
}

/// Path to the vendor-installer binary
pub fn vendor_installer_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vendor-installer"))
}

/// Command for the binary with a clean environment for root and log settings
pub fn vendor_installer_cmd() -> Command {
    let mut cmd = Command::new(vendor_installer_bin());
    cmd.env_remove("VENDOR_INSTALLER_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Canonical form of a path for comparing symlink targets
pub fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
