//! CLI command implementations.

use colored::Colorize;
use spectr_core::{DiscoveryOptions, WorkspaceRoot};
use spectr_discovery::{list_changes, list_specs, RootFinder, ARCHIVE_DIR};
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize a Spectr workspace in a directory.
pub fn init(path: &Path, options: &DiscoveryOptions) -> Result<()> {
    let workspace = path.join(&options.marker_dir);

    if workspace.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(workspace.join("specs"))?;
    fs::create_dir_all(workspace.join("changes").join(ARCHIVE_DIR))?;

    println!("{} Initialized Spectr in {}", "✓".green(), path.display());
    if !spectr_discovery::has_vcs_marker(path, &options.vcs_marker) {
        println!(
            "  {} no {} here; discovery only reports workspaces next to one",
            "⚠".yellow(),
            options.vcs_marker
        );
    }

    Ok(())
}

/// Print every discovered root.
pub fn roots(finder: &RootFinder, path: &Path, json: bool) -> Result<()> {
    let roots = finder.find_roots(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&roots)?);
        return Ok(());
    }

    if roots.is_empty() {
        println!("No Spectr workspaces found from {}", path.display());
        return Ok(());
    }

    for root in &roots {
        println!(
            "  {} {}",
            root.relative_to().cyan(),
            format!("({})", root.path().display()).dimmed()
        );
        if let Some(boundary) = root.boundary_root() {
            if boundary != root.path() {
                println!("    {} {}", "repository:".dimmed(), boundary.display());
            }
        }
    }

    Ok(())
}

/// Print the closest root's path.
pub fn root(finder: &RootFinder, path: &Path) -> Result<()> {
    match finder.closest_root(path)? {
        Some(root) => {
            println!("{}", root.path().display());
            Ok(())
        }
        None => Err(format!(
            "no Spectr workspace found from {} (run `spectr init` in your repository root)",
            path.display()
        )
        .into()),
    }
}

/// List active changes (or specs) across all discovered roots.
pub fn list(finder: &RootFinder, path: &Path, specs: bool, json: bool) -> Result<()> {
    let roots = finder.find_roots(path)?;
    let kind = if specs { "specs" } else { "changes" };

    let mut listing = Vec::with_capacity(roots.len());
    for root in &roots {
        let items = if specs {
            list_specs(root)?
        } else {
            list_changes(root)?
        };
        listing.push((root, items));
    }

    if json {
        let value: Vec<_> = listing
            .iter()
            .map(|(root, items)| {
                serde_json::json!({
                    "root": root.path(),
                    "relative_to": root.relative_to(),
                    kind: items,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if listing.is_empty() {
        println!("No Spectr workspaces found from {}", path.display());
        return Ok(());
    }

    let show_headers = listing.len() > 1;
    for (root, items) in &listing {
        if show_headers {
            print_root_header(root);
        }
        if items.is_empty() {
            println!("  {}", format!("No {}", kind).dimmed());
            continue;
        }
        for item in items {
            println!("  {}", item);
        }
    }

    Ok(())
}

fn print_root_header(root: &WorkspaceRoot) {
    println!(
        "{} {}",
        root.relative_to().cyan().bold(),
        format!("({})", root.path().display()).dimmed()
    );
}
