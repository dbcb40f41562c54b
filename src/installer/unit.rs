//! systemd unit rendering
//!
//! Rendering is pure: every host lookup (shell location, runtime directory)
//! is resolved by the caller and passed in through [`UnitContext`].

use std::path::{Path, PathBuf};

use crate::manifest::{ServiceSpec, ShellKind};

/// Installs units into the normal multi-user boot target
pub const WANTED_BY: &str = "multi-user.target";

/// Identifies generated units in their default description
pub const LIBRARY_NAME: &str = env!("CARGO_PKG_NAME");

/// Host facts a unit depends on
#[derive(Debug, Clone, Copy)]
pub struct UnitContext<'a> {
    /// Absolute binaries directory of the owning application
    pub bin_dir: &'a Path,
    /// Directory for PID files
    pub runtime_dir: &'a Path,
    /// Absolute path of the resolved shell
    pub shell: &'a Path,
    pub documentation_url: &'a str,
}

pub fn default_description(service: &str) -> String {
    format!("{service} service installed by {LIBRARY_NAME}")
}

pub fn pid_file(runtime_dir: &Path, service: &str) -> PathBuf {
    runtime_dir.join(format!("{service}.pid"))
}

/// First `<dir>/<shell>` that exists, searching `dirs` in order.
pub fn resolve_shell(shell: ShellKind, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(shell.program()))
        .find(|candidate| candidate.exists())
}

/// Render the unit file for `spec`.
pub fn render_unit(spec: &ServiceSpec, ctx: &UnitContext<'_>) -> String {
    let pid_file = pid_file(ctx.runtime_dir, &spec.name);
    let mut lines = Vec::new();

    lines.push("[Unit]".to_string());
    let description = spec
        .description
        .clone()
        .unwrap_or_else(|| default_description(&spec.name));
    lines.push(format!("Description={description}"));
    if let Some(requires) = &spec.require_service {
        lines.push(format!("Requires={requires}"));
    }
    if let Some(after) = &spec.exec_only_after {
        lines.push(format!("After={after}"));
    }
    lines.push(format!("Documentation={}", ctx.documentation_url));
    lines.push(String::new());

    lines.push("[Install]".to_string());
    lines.push(format!("WantedBy={WANTED_BY}"));
    lines.push(String::new());

    lines.push("[Service]".to_string());
    let mut command = ctx.bin_dir.join(&spec.bin).display().to_string();
    if spec.control_by_pid {
        command.push_str(&format!(" & echo $! > {}", pid_file.display()));
    }
    lines.push(format!("ExecStart={} -c '{command}'", ctx.shell.display()));
    if spec.kill_child == Some(false) {
        lines.push("KillMode=process".to_string());
    }
    if spec.control_by_pid {
        lines.push(format!("PIDFile={}", pid_file.display()));
    }
    lines.push("KillSignal=SIGTERM".to_string());
    // Never escalate to SIGKILL
    lines.push("SendSIGKILL=no".to_string());
    if spec.restart_on_abort {
        lines.push("Restart=on-abort".to_string());
        lines.push("RestartSec=5s".to_string());
    }

    let mut content = lines.join("\n");
    content.push('\n');
    content
}
