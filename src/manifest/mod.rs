//! Install instructions (`install-instructions.json`)
//!
//! Instructions are read as loosely typed JSON and validated field by field
//! into a [`Manifest`], so shape errors surface when an application is
//! loaded rather than halfway through its install.

pub mod service;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::manifest::{malformed, not_found, required};
use crate::error::{InstallError, Result};

pub use service::{ServiceSpec, ShellKind};

/// File name of the manifest inside an `installation/` directory
pub const MANIFEST_FILE: &str = "install-instructions.json";

/// Where instructions come from
#[derive(Debug, Clone)]
#[allow(dead_code)] // used in tests
pub enum InstructionsSource {
    /// Already-parsed instructions
    Inline(Value),
    /// Path to a JSON file
    File(PathBuf),
}

/// Validated install instructions for one application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Applications that must be satisfied first, trimmed
    pub require: Vec<String>,
    /// Binaries exposed through the system path
    pub sys_bin_files: Vec<String>,
    pub services: Vec<ServiceSpec>,
    /// Script relative to the application's root directory
    pub post_installation: Option<String>,
}

impl Manifest {
    /// Resolve instructions for an application rooted at `root_dir`.
    ///
    /// Without an explicit source the default `<root_dir>/install-instructions.json`
    /// is used. When that is missing too, `allow_missing` decides between an
    /// empty manifest and [`InstallError::InstructionsRequired`].
    pub fn load(
        source: Option<InstructionsSource>,
        root_dir: &Path,
        allow_missing: bool,
    ) -> Result<Self> {
        match source {
            Some(InstructionsSource::Inline(value)) => Self::from_value(&value, "inline"),
            Some(InstructionsSource::File(path)) => Self::from_file(&path),
            None => {
                let default_path = root_dir.join(MANIFEST_FILE);
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else if allow_missing {
                    Ok(Self::default())
                } else {
                    Err(required(root_dir.display().to_string()))
                }
            }
        }
    }

    /// Read and validate a JSON manifest file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }

        let origin = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| malformed(&origin, e.to_string()))?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| malformed(&origin, e.to_string()))?;

        Self::from_value(&value, &origin)
    }

    /// Validate parsed instructions. `origin` names the source in errors.
    pub fn from_value(value: &Value, origin: &str) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(malformed(origin, "top level must be an object"));
        };

        Ok(Self {
            require: string_list(object, "require")
                .ok_or(InstallError::RequireMalformed)?
                .into_iter()
                .map(|name| name.trim().to_string())
                .collect(),
            sys_bin_files: string_list(object, "sys-bin-files")
                .ok_or(InstallError::SysBinFilesMalformed)?,
            services: parse_services(object)?,
            post_installation: parse_post_installation(object)?,
        })
    }

    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }
}

/// Read an optional list of strings; `None` when the field has the wrong shape.
fn string_list(object: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(_) => None,
    }
}

fn parse_services(object: &Map<String, Value>) -> Result<Vec<ServiceSpec>> {
    match object.get("service") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| ServiceSpec::from_value(index, entry))
            .collect(),
        Some(_) => Err(InstallError::ServiceMalformed),
    }
}

fn parse_post_installation(object: &Map<String, Value>) -> Result<Option<String>> {
    match object.get("post-installation") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(path)) => Ok(Some(path.clone())),
        Some(other) => Err(InstallError::PostInstallFile {
            path: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inline_manifest() {
        let manifest = Manifest::load(
            Some(InstructionsSource::Inline(json!({
                "require": [" core ", "db"],
                "sys-bin-files": ["tool.php"],
                "post-installation": "/post.sh"
            }))),
            Path::new("/nowhere"),
            false,
        )
        .unwrap();

        assert_eq!(manifest.require, vec!["core", "db"]);
        assert_eq!(manifest.sys_bin_files, vec!["tool.php"]);
        assert_eq!(manifest.post_installation.as_deref(), Some("/post.sh"));
        assert!(!manifest.has_services());
    }

    #[test]
    fn test_default_file_location() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{"service": [{"name": "svc", "bin": "svc"}]}"#,
        )
        .unwrap();

        let manifest = Manifest::load(None, temp.path(), false).unwrap();
        assert_eq!(manifest.services.len(), 1);
        assert_eq!(manifest.services[0].name, "svc");
    }

    #[test]
    fn test_missing_default_requires_instructions() {
        let temp = TempDir::new().unwrap();
        let result = Manifest::load(None, temp.path(), false);
        assert!(matches!(
            result,
            Err(InstallError::InstructionsRequired { .. })
        ));
    }

    #[test]
    fn test_missing_default_allowed() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::load(None, temp.path(), true).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_explicit_file_not_found() {
        let result = Manifest::load(
            Some(InstructionsSource::File(PathBuf::from("/nonexistent/x.json"))),
            Path::new("/nowhere"),
            true,
        );
        assert!(matches!(result, Err(InstallError::ManifestNotFound { .. })));
    }

    #[test]
    fn test_non_object_file_is_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            Manifest::from_file(&path),
            Err(InstallError::ManifestMalformed { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Manifest::from_file(&path),
            Err(InstallError::ManifestMalformed { .. })
        ));
    }

    #[test]
    fn test_require_must_be_list() {
        let result = Manifest::from_value(&json!({"require": "core"}), "inline");
        assert!(matches!(result, Err(InstallError::RequireMalformed)));
    }

    #[test]
    fn test_sys_bin_files_must_be_list_of_strings() {
        let result = Manifest::from_value(&json!({"sys-bin-files": [1, 2]}), "inline");
        assert!(matches!(result, Err(InstallError::SysBinFilesMalformed)));
    }

    #[test]
    fn test_service_must_be_list() {
        let result = Manifest::from_value(&json!({"service": {"name": "x"}}), "inline");
        assert!(matches!(result, Err(InstallError::ServiceMalformed)));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let manifest = Manifest::from_value(
            &json!({"require": null, "service": null, "post-installation": null}),
            "inline",
        )
        .unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let manifest = Manifest::from_value(&json!({"version": "1.2.0"}), "inline").unwrap();
        assert_eq!(manifest, Manifest::default());
    }
}
