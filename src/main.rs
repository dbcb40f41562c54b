//! Vendor installer
//!
//! Installs applications shipped inside a vendor tree: binaries are linked into
//! the system path, systemd units are generated, and post-installation hooks are
//! run, in the order their `require` dependencies allow.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod discovery;
mod domain;
mod error;
mod installer;
mod manifest;
mod operations;
mod shell;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Filter used when `RUST_LOG` is unset
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "vendor_installer=debug,warn"
    } else {
        "vendor_installer=info,warn"
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
