//! Display functions for list operation

use console::Style;

use super::{ListedApp, Listing};

/// Print discovered applications
pub fn print_listing(listing: &Listing) {
    if listing.apps.is_empty() && listing.skipped.is_empty() {
        println!("No installable applications found in {}", listing.root.display());
        return;
    }

    println!("Installable applications ({}):", listing.apps.len());
    println!();
    for app in &listing.apps {
        display_app(app);
    }

    if !listing.skipped.is_empty() {
        println!("{}", Style::new().bold().apply_to("Registered to not install:"));
        for name in &listing.skipped {
            println!("  {}", Style::new().dim().apply_to(name));
        }
    }
}

fn display_app(app: &ListedApp) {
    let label = Style::new().bold();
    if app.mode == "basic" {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&app.name),
            Style::new().dim().apply_to("(basic)")
        );
    } else {
        println!("  {}", Style::new().bold().yellow().apply_to(&app.name));
    }
    println!("    {} {}", label.apply_to("Path:"), app.path.display());
    display_list(&label, "Requires:", &app.require);
    display_list(&label, "Binaries:", &app.binaries);
    display_list(&label, "Services:", &app.services);
    if let Some(post) = &app.post_installation {
        println!("    {} {post}", label.apply_to("Post-installation:"));
    }
    println!();
}

fn display_list(label: &Style, title: &str, items: &[String]) {
    if !items.is_empty() {
        println!("    {} {}", label.apply_to(title), items.join(", "));
    }
}
