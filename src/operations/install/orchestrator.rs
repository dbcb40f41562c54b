//! Main orchestrator for install operation
//! Installs every discovered application in dependency order

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::{Exclusions, SystemPaths};
use crate::discovery::{self, Discovery};
use crate::domain::{Application, Satisfaction, SatisfactionRegistry};
use crate::error::Result;
use crate::installer::{InstallOutcome, Installer};
use crate::shell::CommandRunner;

/// Outcome of a bulk install run
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Number of candidates discovered
    pub found: usize,
    /// Names installed, in installation order
    pub installed: Vec<String>,
    /// Candidates left waiting on a dependency when the run stalled
    pub pending: Vec<PathBuf>,
    /// Final satisfaction registry
    pub registry: SatisfactionRegistry,
}

impl InstallReport {
    /// Whether any installable application was found
    pub fn found_any(&self) -> bool {
        self.found > 0
    }

    /// Whether the run stopped with unresolved dependencies
    pub fn is_deadlocked(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Names of pending candidates, best effort
    pub fn pending_names(&self) -> Vec<String> {
        self.pending
            .iter()
            .map(|p| crate::domain::application::app_name(p).unwrap_or_else(|_| p.display().to_string()))
            .collect()
    }
}

/// Drives discovery and the install step engine to a fixpoint
pub struct InstallOperation<'a> {
    runner: &'a dyn CommandRunner,
    paths: &'a SystemPaths,
}

impl<'a> InstallOperation<'a> {
    pub fn new(runner: &'a dyn CommandRunner, paths: &'a SystemPaths) -> Self {
        Self { runner, paths }
    }

    /// Install everything under `root`; `false` when nothing was found.
    ///
    /// A dependency deadlock is logged and still counts as success.
    #[allow(dead_code)] // used in tests
    pub fn install_all(&self, root: &Path, exclusions: &Exclusions) -> Result<bool> {
        Ok(self.run(root, exclusions)?.found_any())
    }

    /// Install everything under `root` and report what happened.
    pub fn run(&self, root: &Path, exclusions: &Exclusions) -> Result<InstallReport> {
        let Discovery {
            candidates,
            markers,
        } = discovery::discover(root, exclusions)?;

        self.install_candidates(candidates, markers)
    }

    /// Install `candidates` in passes until each is done or none can progress.
    ///
    /// `registry` holds markers recorded before the first pass.
    pub fn install_candidates(
        &self,
        candidates: Vec<PathBuf>,
        registry: SatisfactionRegistry,
    ) -> Result<InstallReport> {
        let mut report = InstallReport {
            found: candidates.len(),
            registry,
            ..InstallReport::default()
        };

        if candidates.is_empty() {
            info!("No one app to install");
            return Ok(report);
        }
        info!("Found {} apps", candidates.len());

        let installer = Installer::new(self.runner, self.paths);
        let mut pending = candidates;

        loop {
            let before = pending.len();
            let mut deferred = Vec::new();

            for root_dir in pending {
                let app = Application::open(&root_dir)?;
                match installer.install(&app, &report.registry)? {
                    InstallOutcome::Completed => {
                        report.registry.record(app.name(), Satisfaction::Full);
                        report.installed.push(app.name().to_string());
                    }
                    InstallOutcome::Deferred(_) => deferred.push(root_dir),
                }
            }

            if deferred.is_empty() {
                break;
            }
            if deferred.len() == before {
                error!("Critical error, could not install: {}", deferred.len());
                report.pending = deferred;
                break;
            }

            info!("Retry installation of: {}", deferred.len());
            pending = deferred;
        }

        Ok(report)
    }
}
