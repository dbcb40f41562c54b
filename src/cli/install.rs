use std::path::PathBuf;

use clap::Parser;

use super::{ExclusionArgs, ROOT_ENV};

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install everything under the current directory:\n    vendor-installer install\n\n\
                   Install from a vendor tree:\n    vendor-installer install /srv/app/vendor\n\n\
                   Skip one application and install another without services:\n    \
                   vendor-installer install --skip legacy-daemon --basic reports\n\n\
                   Link binaries somewhere other than /usr/sbin:\n    \
                   vendor-installer install --sbin-dir /usr/local/sbin")]
pub struct InstallArgs {
    /// Vendor tree to scan (defaults to the current directory)
    #[arg(env = ROOT_ENV)]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub exclusions: ExclusionArgs,

    /// Directory receiving binary symlinks
    #[arg(long, value_name = "DIR")]
    pub sbin_dir: Option<PathBuf>,

    /// Directory receiving systemd unit files
    #[arg(long, value_name = "DIR")]
    pub unit_dir: Option<PathBuf>,
}
