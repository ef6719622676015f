//! Root assembly: override, upward, downward, dedupe, rank.

use crate::boundary::BoundaryCache;
use crate::downward::DownwardSearch;
use crate::env_override::resolve_override;
use crate::search::{RootSearch, SearchContext};
use crate::skip::SkipPolicy;
use crate::upward::UpwardSearch;
use spectr_core::paths::absolutize;
use spectr_core::{DiscoveryOptions, Result, WorkspaceRoot};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Locates workspace roots for a start directory.
///
/// A finder owns (or shares) the boundary cache, so keep one around for
/// the life of the process rather than building one per lookup.
///
/// # Example
///
/// ```no_run
/// use spectr_discovery::RootFinder;
/// use spectr_core::DiscoveryOptions;
/// use std::path::Path;
///
/// let finder = RootFinder::new(DiscoveryOptions::default());
/// for root in finder.find_roots(Path::new(".")).unwrap() {
///     println!("{} -> {}", root.relative_to(), root.path().display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RootFinder {
    options: DiscoveryOptions,
    boundaries: Arc<BoundaryCache>,
    skip: SkipPolicy,
}

impl RootFinder {
    /// Creates a finder with its own boundary cache.
    pub fn new(options: DiscoveryOptions) -> Self {
        let boundaries = Arc::new(BoundaryCache::new(options.vcs_marker.clone()));
        Self::with_cache(options, boundaries)
    }

    /// Creates a finder sharing an existing boundary cache.
    ///
    /// The cache's VCS marker wins over `options.vcs_marker`.
    pub fn with_cache(mut options: DiscoveryOptions, boundaries: Arc<BoundaryCache>) -> Self {
        if options.vcs_marker != boundaries.vcs_marker() {
            debug!(
                "Using VCS marker '{}' from shared cache instead of '{}'",
                boundaries.vcs_marker(),
                options.vcs_marker
            );
            options.vcs_marker = boundaries.vcs_marker().to_string();
        }
        let skip = SkipPolicy::new(
            options
                .extra_skip_dirs
                .iter()
                .cloned()
                .chain(std::iter::once(options.vcs_marker.clone())),
        );
        Self {
            options,
            boundaries,
            skip,
        }
    }

    pub fn options(&self) -> &DiscoveryOptions {
        &self.options
    }

    /// The boundary cache this finder populates.
    pub fn boundaries(&self) -> &Arc<BoundaryCache> {
        &self.boundaries
    }

    /// Finds every workspace root reachable from `start`, closest first.
    ///
    /// Reads the override variable named in the options; when it is set
    /// and non-empty, the result is that single root or an error.
    pub fn find_roots(&self, start: &Path) -> Result<Vec<WorkspaceRoot>> {
        let value = std::env::var_os(&self.options.override_var);
        self.find_roots_with_override(start, value)
    }

    /// Like `find_roots`, with the override value supplied by the caller.
    pub fn find_roots_with_override(
        &self,
        start: &Path,
        override_value: Option<OsString>,
    ) -> Result<Vec<WorkspaceRoot>> {
        let start = absolutize(start)?;

        if let Some(value) = override_value.filter(|v| !v.is_empty()) {
            let root = resolve_override(&value, &start, &self.options, &self.boundaries)?;
            return Ok(vec![root]);
        }

        self.discover(&start)
    }

    /// The first (closest) root, if any.
    ///
    /// Ties in upward distance are broken by plain string order of the
    /// relative path, so a subdirectory whose name sorts before `.` (such
    /// as `-pkg` or `+x`) comes ahead of the start directory's own root.
    pub fn closest_root(&self, start: &Path) -> Result<Option<WorkspaceRoot>> {
        Ok(self.find_roots(start)?.into_iter().next())
    }

    /// Runs both search directions from an absolute, normalized start.
    fn discover(&self, start: &Path) -> Result<Vec<WorkspaceRoot>> {
        let began = Instant::now();
        let boundary = self.boundaries.find_boundary(start);
        let ctx = SearchContext {
            start,
            boundary: boundary.as_deref(),
            options: &self.options,
            boundaries: &self.boundaries,
            skip: &self.skip,
        };

        let upward = UpwardSearch;
        let mut roots = upward.search(&ctx)?;
        debug!("{} search found {} roots", upward.name(), roots.len());

        if ctx.allows_downward() {
            let downward = DownwardSearch::new(self.options.max_depth);
            match downward.search(&ctx) {
                Ok(found) => {
                    debug!("{} search found {} roots", downward.name(), found.len());
                    roots.extend(found);
                }
                Err(e) => warn!("{} search failed: {}", downward.name(), e),
            }
        }

        let roots = rank(dedupe(roots));

        info!(
            "Found {} workspace roots from {} in {:?}",
            roots.len(),
            start.display(),
            began.elapsed()
        );

        Ok(roots)
    }
}

impl Default for RootFinder {
    fn default() -> Self {
        Self::new(DiscoveryOptions::default())
    }
}

/// Drops repeated paths, keeping the first occurrence.
pub fn dedupe(roots: Vec<WorkspaceRoot>) -> Vec<WorkspaceRoot> {
    let mut seen = HashSet::new();
    roots
        .into_iter()
        .filter(|root| seen.insert(root.path().to_path_buf()))
        .collect()
}

/// Sorts by upward distance, then by relative path.
pub fn rank(mut roots: Vec<WorkspaceRoot>) -> Vec<WorkspaceRoot> {
    roots.sort_by(WorkspaceRoot::rank_cmp);
    roots
}
