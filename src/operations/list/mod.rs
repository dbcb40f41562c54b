//! List operation module
//!
//! Runs discovery only and describes what an install would do, without
//! touching the host.

pub mod display;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Exclusions;
use crate::discovery;
use crate::domain::application::app_name;
use crate::domain::Satisfaction;
use crate::error::{InstallError, Result};
use crate::manifest::{MANIFEST_FILE, Manifest};

/// Configuration options for list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub json: bool,
}

/// One discovered candidate
#[derive(Debug, Clone, Serialize)]
pub struct ListedApp {
    pub name: String,
    pub path: PathBuf,
    /// `full` or `basic`
    pub mode: String,
    pub require: Vec<String>,
    pub binaries: Vec<String>,
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_installation: Option<String>,
}

/// Discovery result ready for display
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub root: PathBuf,
    pub apps: Vec<ListedApp>,
    /// Applications registered to not install
    pub skipped: Vec<String>,
}

/// High-level list operation
pub struct ListOperation<'a> {
    exclusions: &'a Exclusions,
}

impl<'a> ListOperation<'a> {
    pub fn new(exclusions: &'a Exclusions) -> Self {
        Self { exclusions }
    }

    /// Discover candidates under `root` and read their manifests.
    pub fn collect(&self, root: &Path) -> Result<Listing> {
        let found = discovery::discover(root, self.exclusions)?;

        let mut apps = Vec::with_capacity(found.candidates.len());
        for root_dir in &found.candidates {
            let name = app_name(root_dir)?;
            let manifest = Manifest::from_file(&root_dir.join(MANIFEST_FILE))?;
            let mode = if found.markers.is_basic(&name) {
                Satisfaction::Basic
            } else {
                Satisfaction::Full
            };
            apps.push(ListedApp {
                path: root_dir.clone(),
                mode: mode.to_string(),
                require: manifest.require,
                binaries: manifest.sys_bin_files,
                services: manifest.services.into_iter().map(|s| s.name).collect(),
                post_installation: manifest.post_installation,
                name,
            });
        }

        let skipped = found
            .markers
            .iter()
            .filter(|(_, marker)| *marker == Satisfaction::NotInstall)
            .map(|(name, _)| name.to_string())
            .collect();

        Ok(Listing {
            root: dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf()),
            apps,
            skipped,
        })
    }

    /// Execute list operation
    pub fn execute(&self, root: &Path, options: &ListOptions) -> Result<()> {
        let listing = self.collect(root)?;
        if options.json {
            let json = serde_json::to_string_pretty(&listing).map_err(|e| InstallError::Io {
                message: format!("Failed to serialize listing: {e}"),
            })?;
            println!("{json}");
        } else {
            display::print_listing(&listing);
        }
        Ok(())
    }
}
