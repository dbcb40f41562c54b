//! Command helper utilities

use std::path::PathBuf;

use crate::error::{InstallError, Result};

/// Resolve the vendor tree root from an optional argument
///
/// If a root is provided, use it. Otherwise, resolve to the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| InstallError::Io {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}
