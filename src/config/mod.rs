//! Installer configuration
//!
//! - [`exclusions`]: per-application skip/basic directives supplied before discovery
//! - [`paths`]: host locations the installer writes to

pub mod exclusions;
pub mod paths;

pub use exclusions::{ExclusionDirective, Exclusions};
pub use paths::SystemPaths;
