use std::path::PathBuf;

use clap::Parser;

use super::{ExclusionArgs, ROOT_ENV};

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List applications under the current directory:\n    vendor-installer list\n\n\
                  Preview with exclusions applied:\n    vendor-installer list --skip legacy-daemon\n\n\
                  Machine-readable output:\n    vendor-installer list --json")]
pub struct ListArgs {
    /// Vendor tree to scan (defaults to the current directory)
    #[arg(env = ROOT_ENV)]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub exclusions: ExclusionArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
