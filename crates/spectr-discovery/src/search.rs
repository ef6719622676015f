//! Shared pieces of the two search directions.

use crate::boundary::{has_vcs_marker, BoundaryCache};
use crate::skip::SkipPolicy;
use spectr_core::{DiscoveryOptions, Result, WorkspaceRoot};
use std::path::Path;

/// Everything a search strategy needs to know about the current call.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    /// Absolute, normalized start directory.
    pub start: &'a Path,

    /// Boundary enclosing `start`, resolved once per call.
    pub boundary: Option<&'a Path>,

    pub options: &'a DiscoveryOptions,
    pub boundaries: &'a BoundaryCache,
    pub skip: &'a SkipPolicy,
}

impl SearchContext<'_> {
    /// Whether `start` is itself the boundary root (or has none at all).
    ///
    /// Only then does a downward search make sense: inside a repository
    /// the upward pass already found the authoritative root.
    pub fn allows_downward(&self) -> bool {
        match self.boundary {
            None => true,
            Some(boundary) => boundary == self.start,
        }
    }

    /// Builds a root for `dir`, displayed relative to `display_base`.
    pub fn root_at(&self, dir: &Path, display_base: &Path) -> WorkspaceRoot {
        let boundary = self.boundaries.find_boundary(dir);
        WorkspaceRoot::new(dir, &self.options.marker_dir, display_base, boundary)
    }
}

/// A strategy that emits candidate roots for a start directory.
pub trait RootSearch {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Returns candidates in the strategy's natural order.
    fn search(&self, ctx: &SearchContext<'_>) -> Result<Vec<WorkspaceRoot>>;
}

/// Whether `dir` qualifies as a workspace root.
///
/// The marker must be a directory. With `require_vcs_marker` set, the VCS
/// marker must sit in the same directory; this keeps fixture and example
/// trees inside a repository from being reported.
pub fn is_workspace_root(dir: &Path, options: &DiscoveryOptions) -> bool {
    if !dir.join(&options.marker_dir).is_dir() {
        return false;
    }
    !options.require_vcs_marker || has_vcs_marker(dir, &options.vcs_marker)
}
