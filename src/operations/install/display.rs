//! Display functions for install operation
//! Prints the end-of-run summary

use console::Style;

use super::InstallReport;
use crate::domain::Satisfaction;

/// Print installation summary
pub fn print_install_summary(report: &InstallReport) {
    if !report.found_any() {
        println!("No installable applications found.");
        return;
    }

    println!(
        "Installed {} of {} application(s)",
        report.installed.len(),
        report.found
    );
    for name in &report.installed {
        let mode = match report.registry.get(name) {
            Some(Satisfaction::Basic) => " (basic)",
            _ => "",
        };
        println!("  {} {name}{mode}", Style::new().green().apply_to("✓"));
    }

    let skipped: Vec<&str> = report
        .registry
        .iter()
        .filter(|(_, marker)| *marker == Satisfaction::NotInstall)
        .map(|(name, _)| name)
        .collect();
    for name in skipped {
        println!("  {} {name} (not installed)", Style::new().dim().apply_to("-"));
    }

    if report.is_deadlocked() {
        println!();
        println!(
            "{}",
            Style::new()
                .bold()
                .red()
                .apply_to("Unresolved dependencies, not installed:")
        );
        for name in report.pending_names() {
            println!("  {} {name}", Style::new().red().apply_to("✗"));
        }
    }
}
