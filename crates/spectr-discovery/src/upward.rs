//! Upward search: the start directory and its ancestors.

use crate::search::{is_workspace_root, RootSearch, SearchContext};
use spectr_core::{Result, WorkspaceRoot};
use tracing::debug;

/// Walks from the start directory toward the filesystem root, stopping at
/// the enclosing boundary when there is one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpwardSearch;

impl RootSearch for UpwardSearch {
    fn name(&self) -> &'static str {
        "upward"
    }

    /// Returns matches closest-first. All of them share the start's boundary.
    fn search(&self, ctx: &SearchContext<'_>) -> Result<Vec<WorkspaceRoot>> {
        let mut roots = Vec::new();
        let mut current = ctx.start;

        loop {
            if is_workspace_root(current, ctx.options) {
                debug!("Upward match: {}", current.display());
                roots.push(WorkspaceRoot::new(
                    current,
                    &ctx.options.marker_dir,
                    ctx.start,
                    ctx.boundary.map(|b| b.to_path_buf()),
                ));
            }

            if ctx.boundary == Some(current) {
                break;
            }

            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => break,
            }
        }

        Ok(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryCache;
    use crate::skip::SkipPolicy;
    use spectr_core::DiscoveryOptions;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn run(start: &Path, options: &DiscoveryOptions) -> Vec<WorkspaceRoot> {
        let cache = BoundaryCache::new(options.vcs_marker.clone());
        let skip = SkipPolicy::default();
        let boundary = cache.find_boundary(start);
        let ctx = SearchContext {
            start,
            boundary: boundary.as_deref(),
            options,
            boundaries: &cache,
            skip: &skip,
        };
        UpwardSearch.search(&ctx).unwrap()
    }

    #[test]
    fn test_finds_repo_root_from_subdir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("spectr")).unwrap();
        let sub = dir.path().join("src").join("deep");
        fs::create_dir_all(&sub).unwrap();

        let roots = run(&sub, &DiscoveryOptions::default());
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].path(), dir.path());
        assert_eq!(roots[0].relative_to(), "../..");
        assert_eq!(roots[0].boundary_root(), Some(dir.path()));
    }

    #[test]
    fn test_stops_at_boundary() {
        let dir = tempdir().unwrap();
        // Outer workspace above the inner repository.
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("spectr")).unwrap();
        let inner = dir.path().join("inner");
        fs::create_dir_all(inner.join(".git")).unwrap();
        let sub = inner.join("src");
        fs::create_dir(&sub).unwrap();

        let roots = run(&sub, &DiscoveryOptions::default());
        assert!(roots.is_empty());
    }

    #[test]
    fn test_closest_first_without_boundary() {
        let dir = tempdir().unwrap();
        let outer = dir.path().join("outer");
        let inner = outer.join("inner");
        fs::create_dir_all(inner.join("spectr")).unwrap();
        fs::create_dir_all(outer.join("spectr")).unwrap();

        let options = DiscoveryOptions {
            require_vcs_marker: false,
            ..Default::default()
        };
        let roots = run(&inner, &options);
        let found: Vec<&str> = roots.iter().map(|r| r.relative_to()).collect();
        // Anything further up belongs to the host machine, not the fixture.
        assert_eq!(&found[..2], &[".", ".."]);
        assert_eq!(roots[0].path(), inner.as_path());
        assert_eq!(roots[1].path(), outer.as_path());
    }

    #[test]
    fn test_ignores_marker_without_vcs() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let fixture = dir.path().join("fixture");
        fs::create_dir_all(fixture.join("spectr")).unwrap();

        let roots = run(&fixture, &DiscoveryOptions::default());
        assert!(roots.is_empty());
    }
}
