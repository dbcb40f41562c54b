//! Post-installation hook

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::Application;
use crate::error::{InstallError, Result};
use crate::installer::binaries::{EXECUTABLE_MODE, set_mode};
use crate::shell::CommandRunner;

/// Environment variable exposing the application's root directory to the script
pub const INSTALL_DIR_ENV: &str = "INSTALL_DIR";

/// Resolve a `post-installation` entry against the application root.
///
/// Entries are written as `/post-install.sh` or `post-install.sh`; both are
/// relative to `root_dir`.
pub fn script_path(root_dir: &Path, entry: &str) -> PathBuf {
    root_dir.join(entry.trim_start_matches('/'))
}

/// Make the script executable and run it with inherited output.
///
/// Only a missing script is an error. The exit code is reported, not checked.
pub fn run(runner: &dyn CommandRunner, app: &Application, entry: &str) -> Result<()> {
    let script = script_path(app.root_dir(), entry);
    if !script.is_file() {
        return Err(InstallError::PostInstallFile {
            path: script.display().to_string(),
        });
    }

    info!("Running post script: {entry}");
    set_mode(&script, EXECUTABLE_MODE)?;

    let program = script.to_string_lossy();
    let root = app.root_dir().to_string_lossy();
    match runner.run_streaming(program.as_ref(), &[], &[(INSTALL_DIR_ENV, root.as_ref())]) {
        Ok(code) => debug!("Post script {entry} exited with {code}"),
        Err(e) => warn!("Post script {entry} could not be run: {e}"),
    }

    Ok(())
}
