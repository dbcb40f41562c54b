//! Test fixtures for building vendor trees and faking host commands.
//!
//! # Usage
//!
//! ```ignore
//! let temp = TempDir::new().unwrap();
//! let app = AppFixture::new(temp.path(), "billing")
//!     .manifest(&json!({"sys-bin-files": ["billing.php"]}))
//!     .bin("billing.php", "#!/bin/sh\n");
//!
//! let runner = FakeRunner::new();
//! let paths = test_paths(temp.path());
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::SystemPaths;
use crate::error::Result;
use crate::manifest::MANIFEST_FILE;
use crate::shell::{CommandOutput, CommandRunner};

/// An application laid out as `<base>/<name>/{installation,pbin}`
pub struct AppFixture {
    app_dir: PathBuf,
}

impl AppFixture {
    /// Create the directories and an empty `{}` manifest.
    pub fn new(base: &Path, name: &str) -> Self {
        let app_dir = base.join(name);
        std::fs::create_dir_all(app_dir.join("installation")).expect("create installation dir");
        std::fs::create_dir_all(app_dir.join("pbin")).expect("create pbin dir");
        std::fs::write(app_dir.join("installation").join(MANIFEST_FILE), "{}")
            .expect("write manifest");
        Self { app_dir }
    }

    pub fn manifest(self, manifest: &Value) -> Self {
        std::fs::write(
            self.installation_dir().join(MANIFEST_FILE),
            serde_json::to_string_pretty(manifest).expect("serialize manifest"),
        )
        .expect("write manifest");
        self
    }

    pub fn bin(self, name: &str, content: &str) -> Self {
        std::fs::write(self.bin_dir().join(name), content).expect("write binary");
        self
    }

    /// Write a file relative to the installation directory.
    pub fn installation_file(self, relative: &str, content: &str) -> Self {
        let path = self.installation_dir().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, content).expect("write installation file");
        self
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn installation_dir(&self) -> PathBuf {
        self.app_dir.join("installation")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.app_dir.join("pbin")
    }
}

/// System paths redirected under `base`, with fake `sh` and `bash` shells.
pub fn test_paths(base: &Path) -> SystemPaths {
    let host = base.join("host");
    let shells = host.join("bin");
    for dir in ["sbin", "units", "run", "var-run", "bin"] {
        std::fs::create_dir_all(host.join(dir)).expect("create host dir");
    }
    std::fs::write(shells.join("sh"), "").expect("write fake sh");
    std::fs::write(shells.join("bash"), "").expect("write fake bash");

    SystemPaths {
        sbin_dir: host.join("sbin"),
        unit_dir: host.join("units"),
        runtime_dir: host.join("run"),
        legacy_runtime_dir: host.join("var-run"),
        shell_dirs: vec![shells],
        ..SystemPaths::default()
    }
}

/// A streamed invocation captured by [`FakeRunner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamedCall {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

/// Scripted `CommandRunner`.
///
/// - `ln -s SRC DST` creates a real symlink unless a failure is scripted
/// - `uname -r` answers the configured kernel release
/// - `systemctl is-active` defaults to 3 (inactive), `systemctl status` to 4
///   (unit not found), everything else to 0
pub struct FakeRunner {
    calls: RefCell<Vec<String>>,
    streamed: RefCell<Vec<StreamedCall>>,
    codes: HashMap<String, i32>,
    kernel_release: String,
    ln_failure: Option<CommandOutput>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            streamed: RefCell::new(Vec::new()),
            codes: HashMap::new(),
            kernel_release: "6.1.0-test".to_string(),
            ln_failure: None,
        }
    }

    /// Script the exit code of a command line such as `systemctl is-active web.service`.
    #[must_use]
    pub fn with_code(mut self, command_line: &str, code: i32) -> Self {
        self.codes.insert(command_line.to_string(), code);
        self
    }

    #[must_use]
    pub fn with_kernel(mut self, release: &str) -> Self {
        self.kernel_release = release.to_string();
        self
    }

    #[must_use]
    pub fn with_ln_failure(mut self, lines: &[&str]) -> Self {
        self.ln_failure = Some(CommandOutput {
            code: 1,
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
        });
        self
    }

    /// Every captured command line, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Captured command lines starting with `prefix`
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn streamed(&self) -> Vec<StreamedCall> {
        self.streamed.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());

        if let Some(code) = self.codes.get(&line) {
            return Ok(CommandOutput {
                code: *code,
                lines: Vec::new(),
            });
        }

        match (program, args) {
            ("ln", ["-s", source, target]) => {
                if let Some(failure) = &self.ln_failure {
                    return Ok(failure.clone());
                }
                std::os::unix::fs::symlink(source, target)?;
                Ok(CommandOutput::default())
            }
            ("uname", ["-r"]) => Ok(CommandOutput {
                code: 0,
                lines: vec![self.kernel_release.clone()],
            }),
            (_, ["is-active", ..]) => Ok(CommandOutput {
                code: 3,
                lines: vec!["inactive".to_string()],
            }),
            (_, ["status", ..]) => Ok(CommandOutput {
                code: 4,
                lines: Vec::new(),
            }),
            _ => Ok(CommandOutput::default()),
        }
    }

    fn run_streaming(&self, program: &str, args: &[&str], envs: &[(&str, &str)]) -> Result<i32> {
        self.streamed.borrow_mut().push(StreamedCall {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
            envs: envs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        });
        Ok(0)
    }
}
