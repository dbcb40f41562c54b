//! Binary permissions and system-path symlinks
//!
//! Runs in both full and basic installs.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::info;

use crate::config::SystemPaths;
use crate::domain::Application;
use crate::error::fs::io_at;
use crate::error::{InstallError, Result};
use crate::shell::CommandRunner;

/// rwxr-xr-x
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Extension dropped from symlink names
const SCRIPT_EXTENSION: &str = ".php";

/// Set every entry of `bin_dir` to [`EXECUTABLE_MODE`].
///
/// Returns the number of entries touched.
pub fn make_executable(bin_dir: &Path) -> Result<usize> {
    info!("Make binaries executable:");

    let mut count = 0;
    for entry in fs::read_dir(bin_dir).map_err(|e| io_at(bin_dir, &e))? {
        let path = entry.map_err(|e| io_at(bin_dir, &e))?.path();
        info!("\t- {}", path.file_name().unwrap_or_default().to_string_lossy());
        set_mode(&path, EXECUTABLE_MODE)?;
        count += 1;
    }
    Ok(count)
}

/// Apply a permission mode to `path`.
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| io_at(path, &e))
}

/// Symlink name for a `sys-bin-files` entry: its file name without `.php`.
pub fn link_name(entry: &str) -> String {
    let file_name = Path::new(entry)
        .file_name()
        .map_or_else(|| entry.to_string(), |n| n.to_string_lossy().into_owned());

    match file_name.strip_suffix(SCRIPT_EXTENSION) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// Link every `sys-bin-files` entry of `app` into the sbin directory,
/// replacing whatever is already there.
///
/// Returns the number of links created.
pub fn install_symlinks(
    runner: &dyn CommandRunner,
    paths: &SystemPaths,
    app: &Application,
) -> Result<usize> {
    let entries = &app.manifest().sys_bin_files;
    if entries.is_empty() {
        return Ok(0);
    }

    info!("Installing binaries:");

    for entry in entries {
        let source = app.bin_dir().join(entry);
        if fs::symlink_metadata(&source).is_err() {
            return Err(InstallError::SymlinkSourceMissing {
                bin: entry.clone(),
                path: app.bin_dir().display().to_string(),
            });
        }

        let link = paths.sbin_link(&link_name(entry));
        if fs::symlink_metadata(&link).is_ok() {
            fs::remove_file(&link).map_err(|e| io_at(&link, &e))?;
        }

        let source_arg = source.to_string_lossy();
        let link_arg = link.to_string_lossy();
        let output = runner.run("ln", &["-s", source_arg.as_ref(), link_arg.as_ref()])?;
        if !output.success() {
            return Err(InstallError::SymlinkFailed {
                bin: entry.clone(),
                output: output.text(),
            });
        }

        info!("\t- {entry}");
    }

    Ok(entries.len())
}
