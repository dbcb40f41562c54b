//! CLI definitions using clap derive API
//!
//! Argument types live in one submodule per command:
//! - install: Install command arguments
//! - list: List command arguments
//! - completions: Completions command arguments
//! - exclusions: Exclusion flags shared by install and list

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod exclusions;
pub mod install;
pub mod list;

pub use completions::CompletionsArgs;
pub use exclusions::ExclusionArgs;
pub use install::InstallArgs;
pub use list::ListArgs;

/// Environment variable naming the vendor tree to scan
pub const ROOT_ENV: &str = "VENDOR_INSTALLER_ROOT";

/// Vendor installer
///
/// Install applications shipped inside a vendor tree in dependency order.
#[derive(Parser, Debug)]
#[command(
    name = "vendor-installer",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install applications from a vendor tree in dependency order",
    long_about = "Scans a vendor tree for `installation/install-instructions.json` manifests and \
                  installs every application found: binaries are made executable and linked into \
                  the system path, systemd units are generated and enabled, and post-installation \
                  hooks are run. Applications are retried until their `require` dependencies are met.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  vendor-installer install /srv/app/vendor          \x1b[90m# Install everything found\x1b[0m\n   \
                  vendor-installer install --skip legacy-daemon     \x1b[90m# Never install one application\x1b[0m\n   \
                  vendor-installer install --basic reports          \x1b[90m# Binaries and symlinks only\x1b[0m\n   \
                  vendor-installer list /srv/app/vendor             \x1b[90m# Show what would be installed\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install every application found under a vendor tree
    Install(InstallArgs),

    /// List installable applications without installing them
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
