//! List command implementation
//!
//! Shows the applications an install would pick up, with their mode,
//! dependencies, binaries and services.

use crate::cli::ListArgs;
use crate::commands::helpers::resolve_root;
use crate::error::Result;
use crate::operations::{ListOperation, ListOptions};

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let root = resolve_root(args.root)?;
    let exclusions = args.exclusions.to_exclusions()?;
    let options = ListOptions { json: args.json };

    ListOperation::new(&exclusions).execute(&root, &options)
}
