//! Manifest errors

use super::InstallError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> InstallError {
    InstallError::ManifestNotFound { path: path.into() }
}

/// Creates a malformed manifest error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> InstallError {
    InstallError::ManifestMalformed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an instructions required error
pub fn required(path: impl Into<String>) -> InstallError {
    InstallError::InstructionsRequired { path: path.into() }
}
