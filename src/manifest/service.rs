//! Service descriptors declared under `service` in a manifest

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::error::service::config;

/// Shell used to launch a service binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    #[default]
    Sh,
    Bash,
}

impl ShellKind {
    pub fn program(self) -> &'static str {
        match self {
            ShellKind::Sh => "sh",
            ShellKind::Bash => "bash",
        }
    }
}

/// One long-running process to register with the service manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceSpec {
    /// Unit name, without the `.service` suffix
    pub name: String,

    /// Executable relative to the application's binaries directory
    pub bin: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Units this one `Requires=`
    #[serde(default)]
    pub require_service: Option<String>,

    /// Units this one starts `After=`
    #[serde(default)]
    pub exec_only_after: Option<String>,

    #[serde(default)]
    pub shell: ShellKind,

    /// Write `$!` to a PID file and point systemd at it
    #[serde(default)]
    pub control_by_pid: bool,

    /// `Some(false)` restricts stop signals to the main process
    #[serde(default)]
    pub kill_child: Option<bool>,

    #[serde(default)]
    pub restart_on_abort: bool,
}

impl ServiceSpec {
    /// Full unit name as understood by `systemctl`
    pub fn unit_name(&self) -> String {
        format!("{}.service", self.name)
    }

    /// Validate and convert the service entry at `index`.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(config(index, "service entry must be an object"));
        };

        for field in ["name", "bin"] {
            match object.get(field) {
                Some(Value::String(s)) if !s.trim().is_empty() => {}
                Some(Value::String(_)) => {
                    return Err(config(index, format!("'{field}' must not be empty")));
                }
                Some(Value::Null) | None => {
                    return Err(config(index, format!("missing required field '{field}'")));
                }
                Some(_) => return Err(config(index, format!("'{field}' must be a string"))),
            }
        }

        serde_json::from_value(value.clone()).map_err(|e| config(index, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;
    use serde_json::json;

    #[test]
    fn test_minimal_service_defaults() {
        let spec = ServiceSpec::from_value(0, &json!({"name": "worker", "bin": "worker"})).unwrap();
        assert_eq!(spec.shell, ShellKind::Sh);
        assert!(!spec.control_by_pid);
        assert!(!spec.restart_on_abort);
        assert_eq!(spec.kill_child, None);
        assert_eq!(spec.unit_name(), "worker.service");
    }

    #[test]
    fn test_full_service() {
        let spec = ServiceSpec::from_value(
            0,
            &json!({
                "name": "worker",
                "bin": "worker.php",
                "description": "Queue worker",
                "require-service": "redis.service",
                "exec-only-after": "network.target",
                "shell": "bash",
                "control-by-pid": true,
                "kill-child": false,
                "restart-on-abort": true
            }),
        )
        .unwrap();
        assert_eq!(spec.shell, ShellKind::Bash);
        assert_eq!(spec.require_service.as_deref(), Some("redis.service"));
        assert_eq!(spec.kill_child, Some(false));
        assert!(spec.control_by_pid);
    }

    #[test]
    fn test_missing_bin_names_index() {
        let err = ServiceSpec::from_value(3, &json!({"name": "worker"})).unwrap_err();
        assert!(matches!(err, InstallError::ServiceConfig { index: 3, .. }));
        assert!(err.to_string().contains("service index 3"));
    }

    #[test]
    fn test_unknown_shell_rejected() {
        let err =
            ServiceSpec::from_value(0, &json!({"name": "w", "bin": "w", "shell": "zsh"}))
                .unwrap_err();
        assert!(matches!(err, InstallError::ServiceConfig { index: 0, .. }));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = ServiceSpec::from_value(1, &json!("worker")).unwrap_err();
        assert!(matches!(err, InstallError::ServiceConfig { index: 1, .. }));
    }
}
