//! File system and process errors

use std::path::Path;

use super::InstallError;

/// Creates an IO error carrying the path it happened on
pub fn io_at(path: &Path, err: &std::io::Error) -> InstallError {
    InstallError::Io {
        message: format!("{}: {err}", path.display()),
    }
}

/// Creates a command failure error for a process that could not be spawned
pub fn command_failed(program: impl Into<String>, reason: impl Into<String>) -> InstallError {
    InstallError::CommandFailed {
        program: program.into(),
        reason: reason.into(),
    }
}
