//! Synchronous process execution
//!
//! Every host command the installer issues (`ln`, `systemctl`, `uname`,
//! post-installation scripts) goes through [`CommandRunner`] so tests can
//! substitute canned results without touching the service manager.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Result;
use crate::error::fs::command_failed;

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `-1` when the process was terminated by a signal
    pub code: i32,
    /// Output lines, stdout first then stderr
    pub lines: Vec<String>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// All captured lines joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Generic command execution.
///
/// The production implementation spawns real processes; test doubles can
/// return canned results.
pub trait CommandRunner {
    /// Run a command to completion and capture its output.
    ///
    /// A non-zero exit code is not an error; only a failure to spawn is.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Run a command with inherited stdio and extra environment variables,
    /// returning its exit code.
    fn run_streaming(&self, program: &str, args: &[&str], envs: &[(&str, &str)]) -> Result<i32>;
}

/// Production `CommandRunner` backed by `std::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("$ {program} {}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| command_failed(program, e.to_string()))?;

        let lines = String::from_utf8_lossy(&output.stdout)
            .lines()
            .chain(String::from_utf8_lossy(&output.stderr).lines())
            .map(str::to_string)
            .collect();

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            lines,
        })
    }

    fn run_streaming(&self, program: &str, args: &[&str], envs: &[(&str, &str)]) -> Result<i32> {
        debug!("$ {program} {}", args.join(" "));

        let status = Command::new(program)
            .args(args)
            .envs(envs.iter().copied())
            .status()
            .map_err(|e| command_failed(program, e.to_string()))?;

        Ok(status.code().unwrap_or(-1))
    }
}
