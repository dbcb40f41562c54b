//! Install command implementation
//!
//! 1. Resolve the vendor tree root
//! 2. Build exclusions from the file and flags
//! 3. Apply system directory overrides
//! 4. Run the install operation against the host
//! 5. Print a summary

use crate::cli::InstallArgs;
use crate::commands::helpers::resolve_root;
use crate::config::SystemPaths;
use crate::error::Result;
use crate::operations::install::display::print_install_summary;
use crate::operations::InstallOperation;
use crate::shell::SystemRunner;

/// Run install command
pub fn run(args: InstallArgs) -> Result<()> {
    let root = resolve_root(args.root)?;
    let exclusions = args.exclusions.to_exclusions()?;
    let paths = system_paths(args.sbin_dir, args.unit_dir);

    let runner = SystemRunner;
    let report = InstallOperation::new(&runner, &paths).run(&root, &exclusions)?;

    print_install_summary(&report);
    Ok(())
}

fn system_paths(
    sbin_dir: Option<std::path::PathBuf>,
    unit_dir: Option<std::path::PathBuf>,
) -> SystemPaths {
    let mut paths = SystemPaths::default();
    if let Some(dir) = sbin_dir {
        paths = paths.with_sbin_dir(dir);
    }
    if let Some(dir) = unit_dir {
        paths = paths.with_unit_dir(dir);
    }
    paths
}
