//! Service provisioning errors

use super::InstallError;

/// Creates a service config error for the service at `index`
pub fn config(index: usize, reason: impl Into<String>) -> InstallError {
    InstallError::ServiceConfig {
        index,
        reason: reason.into(),
    }
}

/// Creates a service creation error
pub fn creation(service: impl Into<String>, reason: impl Into<String>) -> InstallError {
    InstallError::ServiceCreation {
        service: service.into(),
        reason: reason.into(),
    }
}
