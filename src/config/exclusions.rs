//! Exclusion registry
//!
//! Loaded from a YAML mapping of application name to directive:
//!
//! ```yaml
//! legacy-daemon: force
//! reporting: basic
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InstallError, Result};

/// What to do with a discovered application before installing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionDirective {
    /// Never install, but treat as present for dependents
    Force,
    /// Install binaries and symlinks only
    Basic,
}

impl ExclusionDirective {
    pub fn as_str(self) -> &'static str {
        match self {
            ExclusionDirective::Force => "force",
            ExclusionDirective::Basic => "basic",
        }
    }
}

/// Immutable-after-construction mapping of application name to directive.
///
/// A name carries at most one directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exclusions {
    directives: BTreeMap<String, ExclusionDirective>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directive, rejecting a conflicting one for the same name.
    pub fn insert(&mut self, name: impl Into<String>, directive: ExclusionDirective) -> Result<()> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(InstallError::ExclusionsInvalid {
                message: "application name must not be empty".to_string(),
            });
        }

        match self.directives.get(&name) {
            Some(existing) if *existing != directive => Err(InstallError::ExclusionsInvalid {
                message: format!(
                    "'{name}' is registered as both {} and {}",
                    existing.as_str(),
                    directive.as_str()
                ),
            }),
            _ => {
                self.directives.insert(name, directive);
                Ok(())
            }
        }
    }

    /// Merge another registry into this one.
    pub fn merge(&mut self, other: Exclusions) -> Result<()> {
        for (name, directive) in other.directives {
            self.insert(name, directive)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<ExclusionDirective> {
        self.directives.get(name).copied()
    }

    #[allow(dead_code)] // used in tests
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    #[allow(dead_code)] // used in tests
    pub fn iter(&self) -> impl Iterator<Item = (&str, ExclusionDirective)> {
        self.directives.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Parse a YAML mapping. An empty document is an empty registry.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let parsed: Exclusions = serde_yaml::from_str(yaml)?;

        // Re-insert to apply name normalization
        let mut exclusions = Self::new();
        exclusions.merge(parsed)?;
        Ok(exclusions)
    }

    /// Load a YAML exclusions file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(InstallError::ExclusionsInvalid {
                message: format!("file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::fs::io_at(path, &e))?;
        Self::from_yaml_str(&content)
    }
}
