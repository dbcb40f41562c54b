//! High-level operations
//!
//! - InstallOperation: discovery plus dependency-ordered installation
//! - ListOperation: discovery only, no host changes

pub mod install;
pub mod list;

pub use install::InstallOperation;
pub use list::{ListOperation, ListOptions};
