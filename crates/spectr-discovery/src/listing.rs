//! Listing of changes and specs inside a discovered root.
//!
//! These only look at directory names and the presence of the expected
//! entry file; nothing is parsed.

use spectr_core::{DiscoveryError, Result, WorkspaceRoot};
use std::io::ErrorKind;
use std::path::Path;

/// Name of the directory holding completed changes.
pub const ARCHIVE_DIR: &str = "archive";

/// Active change IDs: directories under `changes/` with a `proposal.md`,
/// excluding the archive.
pub fn list_changes(root: &WorkspaceRoot) -> Result<Vec<String>> {
    list_entries(&root.changes_dir(), "proposal.md", |name| name != ARCHIVE_DIR)
}

/// Spec IDs: directories under `specs/` with a `spec.md`.
pub fn list_specs(root: &WorkspaceRoot) -> Result<Vec<String>> {
    list_entries(&root.specs_dir(), "spec.md", |_| true)
}

fn list_entries(
    dir: &Path,
    required_file: &str,
    keep: impl Fn(&str) -> bool,
) -> Result<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(DiscoveryError::directory_read(dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::directory_read(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with('.') || !keep(&name) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() && path.join(required_file).is_file() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
