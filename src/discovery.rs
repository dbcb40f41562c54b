//! Application discovery in a vendor tree
//!
//! Any directory named `installation` anchors an application named after
//! its parent directory. The anchor yields a candidate only when it holds an
//! `install-instructions.json` directly inside it. Anchors are never
//! descended into; everything else is searched recursively in directory
//! listing order. Symlinked directories are followed, and an application is
//! named after its resolved location.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{ExclusionDirective, Exclusions};
use crate::domain::application::app_name;
use crate::domain::{Satisfaction, SatisfactionRegistry};
use crate::error::{InstallError, Result};
use crate::manifest::MANIFEST_FILE;

/// Directory name marking an installable application
pub const ANCHOR_DIR: &str = "installation";

/// What discovery does with an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction {
    /// Register as `not-install` and skip
    Skip,
    /// Register as `basic`, then consider as a candidate
    Basic,
    /// Consider as a candidate
    Install,
}

impl AnchorAction {
    /// Marker to pre-record for the application, if any
    pub fn marker(self) -> Option<Satisfaction> {
        match self {
            AnchorAction::Skip => Some(Satisfaction::NotInstall),
            AnchorAction::Basic => Some(Satisfaction::Basic),
            AnchorAction::Install => None,
        }
    }
}

/// Decide what to do with the application `name`.
pub fn classify(name: &str, exclusions: &Exclusions) -> AnchorAction {
    match exclusions.get(name) {
        Some(ExclusionDirective::Force) => AnchorAction::Skip,
        Some(ExclusionDirective::Basic) => AnchorAction::Basic,
        None => AnchorAction::Install,
    }
}

/// Result of scanning a vendor tree
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// `installation/` directories to install, in discovery order
    pub candidates: Vec<PathBuf>,
    /// Markers recorded from exclusions
    pub markers: SatisfactionRegistry,
}

/// Scan `root` for installable applications.
pub fn discover(root: &Path, exclusions: &Exclusions) -> Result<Discovery> {
    let root = dunce::canonicalize(root).map_err(|e| InstallError::DiscoveryFailed {
        path: root.display().to_string(),
        reason: e.to_string(),
    })?;
    if !root.is_dir() {
        return Err(InstallError::DiscoveryFailed {
            path: root.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }

    info!("Searching installable apps in {}", root.display());

    let mut discovery = Discovery::default();
    let mut seen = HashSet::new();
    let mut walker = WalkDir::new(&root).min_depth(1).follow_links(true).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable path: {e}");
                continue;
            }
        };
        if !entry.file_type().is_dir() || entry.file_name() != ANCHOR_DIR {
            continue;
        }
        walker.skip_current_dir();

        // Name and path come from the resolved location, as the descriptor's do
        let anchor = match dunce::canonicalize(entry.path()) {
            Ok(anchor) => anchor,
            Err(e) => {
                warn!("Skipping {}: {e}", entry.path().display());
                continue;
            }
        };
        if !seen.insert(anchor.clone()) {
            debug!("Already found {} through another path", anchor.display());
            continue;
        }

        let Ok(name) = app_name(&anchor) else {
            warn!("Skipping {}: app name could not be determined", anchor.display());
            continue;
        };

        let action = classify(&name, exclusions);
        if let Some(marker) = action.marker() {
            discovery.markers.record(name.as_str(), marker);
        }
        if action == AnchorAction::Skip {
            info!("Aborting {name} installation. Registered to not install.");
            continue;
        }

        if anchor.join(MANIFEST_FILE).is_file() {
            debug!("Found {name} at {}", anchor.display());
            discovery.candidates.push(anchor);
        } else {
            debug!("Ignoring {}: no {MANIFEST_FILE}", anchor.display());
        }
    }

    Ok(discovery)
}
