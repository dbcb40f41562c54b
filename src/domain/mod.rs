//! Domain models for the installer
//!
//! This module contains the entities the install pipeline passes around:
//! discovered applications and the run-scoped record of what is satisfied.

pub mod application;
pub mod registry;

pub use application::Application;
pub use registry::{Satisfaction, SatisfactionRegistry};
