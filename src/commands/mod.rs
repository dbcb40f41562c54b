//! Command implementations for the vendor installer CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
