//! Install step engine
//!
//! This module handles one application at a time, in fixed order:
//! 1. Requirement gate against the satisfaction registry
//! 2. Install mode (full or basic) from the registry
//! 3. Binary permission fix-up
//! 4. System-path symlinks (basic installs stop here)
//! 5. Service provisioning
//! 6. Post-installation hook
//!
//! Any step may fail fatally; only the requirement gate defers.

pub mod binaries;
pub mod post_install;
pub mod service;
pub mod unit;


use tracing::info;

use crate::config::SystemPaths;
use crate::domain::{Application, SatisfactionRegistry};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::shell::CommandRunner;

use service::ServiceProvisioner;

/// Result of a non-failing install attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every applicable step ran
    Completed,
    /// Waiting on the named dependency; nothing was changed
    Deferred(String),
}

/// Which steps an install runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Full,
    /// Permissions and symlinks only
    Basic,
}

/// First `require` entry not yet present in `satisfied`.
pub fn missing_requirement(manifest: &Manifest, satisfied: &SatisfactionRegistry) -> Option<String> {
    manifest
        .require
        .iter()
        .find(|name| !satisfied.contains(name))
        .cloned()
}

/// Runs install steps against the host
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    paths: &'a SystemPaths,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner, paths: &'a SystemPaths) -> Self {
        Self { runner, paths }
    }

    /// Install `app` given the names satisfied so far.
    pub fn install(
        &self,
        app: &Application,
        satisfied: &SatisfactionRegistry,
    ) -> Result<InstallOutcome> {
        if let Some(missing) = missing_requirement(app.manifest(), satisfied) {
            info!(
                "Aborting {} installation, required {missing} not installed.",
                app.name()
            );
            return Ok(InstallOutcome::Deferred(missing));
        }

        let mode = if satisfied.is_basic(app.name()) {
            InstallMode::Basic
        } else {
            InstallMode::Full
        };

        match mode {
            InstallMode::Full => info!("Starting {} installation", app.name()),
            InstallMode::Basic => info!("Starting {} basic installation", app.name()),
        }

        let mut worked = binaries::make_executable(app.bin_dir())? > 0;
        worked |= binaries::install_symlinks(self.runner, self.paths, app)? > 0;

        if mode == InstallMode::Full {
            let manifest = app.manifest();
            if manifest.has_services() {
                ServiceProvisioner::new(self.runner, self.paths).provision_all(app)?;
                worked = true;
            }
            if let Some(entry) = &manifest.post_installation {
                post_install::run(self.runner, app, entry)?;
                worked = true;
            }
        }

        if worked {
            info!("Done.");
        } else {
            info!("Nothing to do, check your configuration.");
        }

        Ok(InstallOutcome::Completed)
    }
}
