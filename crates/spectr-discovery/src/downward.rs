//! Downward search: a bounded walk of the start directory's subtree.
//!
//! Depth is counted from the search root, which sits at depth 0; its
//! children are at depth 1. A directory deeper than `max_depth` is never
//! visited, so markers inside it are never reported.

use crate::boundary::has_vcs_marker;
use crate::search::{is_workspace_root, RootSearch, SearchContext};
use spectr_core::{DiscoveryError, Result, WorkspaceRoot};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Bounded pre-order walk of the start directory's subtree.
#[derive(Debug, Clone, Copy)]
pub struct DownwardSearch {
    pub max_depth: usize,
}

impl DownwardSearch {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl RootSearch for DownwardSearch {
    fn name(&self) -> &'static str {
        "downward"
    }

    fn search(&self, ctx: &SearchContext<'_>) -> Result<Vec<WorkspaceRoot>> {
        walk_down(ctx, ctx.start, ctx.start, self.max_depth)
    }
}

/// Collects every workspace root under `search_root`, displayed relative to
/// `display_base`.
///
/// Skip-listed names are never entered. A nested repository (a directory
/// other than `search_root` holding the VCS marker) is reported if it
/// qualifies, but not descended into. Unreadable directories are logged
/// and skipped; only a failure on `search_root` itself is returned.
pub fn walk_down(
    ctx: &SearchContext<'_>,
    search_root: &Path,
    display_base: &Path,
    max_depth: usize,
) -> Result<Vec<WorkspaceRoot>> {
    let mut roots = Vec::new();
    let mut visited = 0usize;

    let mut walker = WalkDir::new(search_root)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return false;
            }
            let name = entry.file_name().to_string_lossy();
            if ctx.skip.should_skip(&name) {
                debug!("Skipping {}", entry.path().display());
                return false;
            }
            true
        });

    loop {
        let entry = match walker.next() {
            None => break,
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| search_root.to_path_buf());
                let depth = err.depth();
                let io = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                let err = DiscoveryError::directory_read(path, io);
                if depth == 0 {
                    return Err(err);
                }
                warn!("{}, skipping", err);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }
        visited += 1;

        let dir = entry.path();
        if is_workspace_root(dir, ctx.options) {
            debug!("Downward match at depth {}: {}", entry.depth(), dir.display());
            roots.push(ctx.root_at(dir, display_base));
        }

        if entry.depth() > 0 && has_vcs_marker(dir, &ctx.options.vcs_marker) {
            debug!("Not descending into nested repository {}", dir.display());
            walker.skip_current_dir();
        }
    }

    debug!(
        "Downward walk of {} visited {} directories, found {} roots",
        search_root.display(),
        visited,
        roots.len()
    );

    Ok(roots)
}
