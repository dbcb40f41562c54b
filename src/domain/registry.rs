//! Satisfaction registry
//!
//! Records, for one orchestration run, which application names count as
//! present for `require` checks and how they got there.

use std::collections::BTreeMap;
use std::fmt;

/// How an application name came to be satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfaction {
    /// Installed with every step
    Full,
    /// Installed (or scheduled) with binaries and symlinks only
    Basic,
    /// Skipped on request; still satisfies dependents
    NotInstall,
}

impl Satisfaction {
    pub fn as_str(self) -> &'static str {
        match self {
            Satisfaction::Full => "full",
            Satisfaction::Basic => "basic",
            Satisfaction::NotInstall => "not-install",
        }
    }
}

impl fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grow-only map of application name to [`Satisfaction`].
///
/// There is no removal API: once a name is satisfied it stays satisfied for
/// the rest of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SatisfactionRegistry {
    entries: BTreeMap<String, Satisfaction>,
}

impl SatisfactionRegistry {
    #[allow(dead_code)] // used in tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`, keeping an existing marker if there is one.
    ///
    /// Returns the marker in effect after the call.
    pub fn record(&mut self, name: impl Into<String>, marker: Satisfaction) -> Satisfaction {
        *self.entries.entry(name.into()).or_insert(marker)
    }

    pub fn get(&self, name: &str) -> Option<Satisfaction> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_basic(&self, name: &str) -> bool {
        self.get(name) == Some(Satisfaction::Basic)
    }

    #[allow(dead_code)] // used in tests
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // used in tests
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Satisfaction)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
