//! Service provisioning
//!
//! Re-installing a service is idempotent: a running unit is stopped, its
//! unit file rewritten, the manager reloaded (or the unit enabled when it was
//! never registered) and the unit started again if it had been running.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::SystemPaths;
use crate::domain::Application;
use crate::error::Result;
use crate::error::service::{config, creation};
use crate::installer::binaries::set_mode;
use crate::installer::unit::{UnitContext, render_unit, resolve_shell};
use crate::manifest::ServiceSpec;
use crate::shell::CommandRunner;

/// Unit file permissions, rw-r--r--
pub const UNIT_FILE_MODE: u32 = 0o644;

/// `systemctl status` exit code for a unit that does not exist
pub const UNIT_NOT_FOUND_EXIT: i32 = 4;

/// Service manager view of a unit before it is reinstalled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Running,
    /// Known to the manager but not active
    Registered,
    NotRegistered,
}

impl ServiceState {
    pub fn is_registered(self) -> bool {
        !matches!(self, ServiceState::NotRegistered)
    }
}

/// Query whether `unit` is running, registered, or unknown.
pub fn detect_state(runner: &dyn CommandRunner, systemctl: &str, unit: &str) -> Result<ServiceState> {
    if runner.run(systemctl, &["is-active", unit])?.success() {
        return Ok(ServiceState::Running);
    }

    let status = runner.run(systemctl, &["status", unit])?;
    if status.code == UNIT_NOT_FOUND_EXIT {
        Ok(ServiceState::NotRegistered)
    } else {
        Ok(ServiceState::Registered)
    }
}

/// Major version of the running kernel, from `uname -r`.
pub fn kernel_major(runner: &dyn CommandRunner) -> Option<u32> {
    let output = match runner.run("uname", &["-r"]) {
        Ok(output) if output.success() => output,
        Ok(output) => {
            warn!("Could not query kernel version: {}", output.text());
            return None;
        }
        Err(e) => {
            warn!("Could not query kernel version: {e}");
            return None;
        }
    };
    parse_kernel_major(output.lines.first()?)
}

/// Leading integer of a kernel release such as `5.15.0-91-generic`.
pub fn parse_kernel_major(release: &str) -> Option<u32> {
    release.trim().split('.').next()?.parse().ok()
}

/// Installs the services of one application
pub struct ServiceProvisioner<'a> {
    runner: &'a dyn CommandRunner,
    paths: &'a SystemPaths,
    kernel_major: Option<u32>,
}

impl<'a> ServiceProvisioner<'a> {
    /// Create a provisioner, querying the kernel version once.
    pub fn new(runner: &'a dyn CommandRunner, paths: &'a SystemPaths) -> Self {
        Self {
            runner,
            paths,
            kernel_major: kernel_major(runner),
        }
    }

    /// Provision every service declared by `app`, in order.
    pub fn provision_all(&self, app: &Application) -> Result<()> {
        info!("Installing and configuring services:");
        for (index, spec) in app.manifest().services.iter().enumerate() {
            self.provision(app.bin_dir(), index, spec)?;
        }
        Ok(())
    }

    /// Provision the service at `index`.
    pub fn provision(&self, bin_dir: &Path, index: usize, spec: &ServiceSpec) -> Result<()> {
        let unit = spec.unit_name();
        info!("\t- {unit}");

        let systemctl = self.paths.systemctl.as_str();
        let state = detect_state(self.runner, systemctl, &unit)?;

        // Resolve everything that can fail on configuration before touching
        // a running unit.
        let shell = resolve_shell(spec.shell, &self.paths.shell_dirs).ok_or_else(|| {
            config(
                index,
                format!("no '{}' shell found for service '{}'", spec.shell.program(), spec.name),
            )
        })?;
        let runtime_dir = self.paths.runtime_dir_for(self.kernel_major);
        let content = render_unit(
            spec,
            &UnitContext {
                bin_dir,
                runtime_dir,
                shell: &shell,
                documentation_url: &self.paths.documentation_url,
            },
        );

        if state == ServiceState::Running {
            match self.runner.run(systemctl, &["stop", unit.as_str()]) {
                Ok(out) if out.success() => info!("Service {unit} stopped for reinstall"),
                Ok(out) => warn!("Could not stop service {unit}: {}", out.text()),
                Err(e) => warn!("Could not stop service {unit}: {e}"),
            }
        }

        self.write_unit(spec, &content, state)?;

        if state == ServiceState::Running {
            match self.runner.run(systemctl, &["start", unit.as_str()]) {
                Ok(out) if out.success() => info!("Service {unit} started"),
                Ok(out) => warn!("Could not start service {unit}: {}", out.text()),
                Err(e) => warn!("Could not start service {unit}: {e}"),
            }
        }

        Ok(())
    }

    /// Replace the unit file and make the manager pick it up.
    fn write_unit(&self, spec: &ServiceSpec, content: &str, state: ServiceState) -> Result<()> {
        let unit = spec.unit_name();
        let unit_file = self.paths.unit_file(&spec.name);

        if fs::symlink_metadata(&unit_file).is_ok() {
            fs::remove_file(&unit_file).map_err(|e| creation(&unit, e.to_string()))?;
        }
        fs::write(&unit_file, content).map_err(|e| creation(&unit, e.to_string()))?;
        set_mode(&unit_file, UNIT_FILE_MODE).map_err(|e| creation(&unit, e.to_string()))?;

        let systemctl = self.paths.systemctl.as_str();
        let (action, result) = if state.is_registered() {
            ("daemon-reload", self.runner.run(systemctl, &["daemon-reload"]))
        } else {
            ("enable", self.runner.run(systemctl, &["enable", unit.as_str()]))
        };
        let output = result.map_err(|e| creation(&unit, e.to_string()))?;
        if !output.success() {
            return Err(creation(
                &unit,
                format!(
                    "{systemctl} {action} exited with {}: {}",
                    output.code,
                    output.text()
                ),
            ));
        }

        Ok(())
    }
}
