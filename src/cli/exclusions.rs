use std::path::PathBuf;

use clap::Args;

use crate::config::{ExclusionDirective, Exclusions};
use crate::error::Result;

/// Exclusion flags shared by `install` and `list`
#[derive(Args, Debug, Clone, Default)]
pub struct ExclusionArgs {
    /// Never install this application; dependents still treat it as present
    #[arg(long = "skip", value_name = "NAME")]
    pub skip: Vec<String>,

    /// Install only binaries and symlinks for this application
    #[arg(long = "basic", value_name = "NAME")]
    pub basic: Vec<String>,

    /// YAML file mapping application names to `force` or `basic`
    #[arg(long, value_name = "FILE")]
    pub exclusions: Option<PathBuf>,
}

impl ExclusionArgs {
    /// Build the exclusion registry from the file and the flags.
    pub fn to_exclusions(&self) -> Result<Exclusions> {
        let mut exclusions = match &self.exclusions {
            Some(path) => Exclusions::load(path)?,
            None => Exclusions::new(),
        };
        for name in &self.skip {
            exclusions.insert(name.as_str(), ExclusionDirective::Force)?;
        }
        for name in &self.basic {
            exclusions.insert(name.as_str(), ExclusionDirective::Basic)?;
        }
        Ok(exclusions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;
    use tempfile::TempDir;

    #[test]
    fn test_flags_build_registry() {
        let args = ExclusionArgs {
            skip: vec!["old".to_string()],
            basic: vec!["lite".to_string()],
            exclusions: None,
        };
        let exclusions = args.to_exclusions().unwrap();
        assert_eq!(exclusions.get("old"), Some(ExclusionDirective::Force));
        assert_eq!(exclusions.get("lite"), Some(ExclusionDirective::Basic));
    }

    #[test]
    fn test_file_merged_with_flags() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("exclusions.yaml");
        std::fs::write(&file, "legacy: force\n").unwrap();

        let args = ExclusionArgs {
            basic: vec!["lite".to_string()],
            exclusions: Some(file),
            ..ExclusionArgs::default()
        };
        let exclusions = args.to_exclusions().unwrap();
        assert_eq!(exclusions.get("legacy"), Some(ExclusionDirective::Force));
        assert_eq!(exclusions.get("lite"), Some(ExclusionDirective::Basic));
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let args = ExclusionArgs {
            skip: vec!["web".to_string()],
            basic: vec!["web".to_string()],
            exclusions: None,
        };
        assert!(matches!(
            args.to_exclusions(),
            Err(InstallError::ExclusionsInvalid { .. })
        ));
    }
}
