//! Version-control boundary detection.
//!
//! A boundary is the nearest ancestor (inclusive) holding the VCS marker.
//! Lookups are memoized in a `BoundaryCache` owned by whoever drives
//! discovery; the filesystem layout under a fixed path is assumed not to
//! change for the cache's lifetime, so entries are never evicted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Memoized boundary lookups, safe to share between threads.
#[derive(Debug)]
pub struct BoundaryCache {
    vcs_marker: String,
    entries: RwLock<HashMap<PathBuf, Option<PathBuf>>>,
}

impl BoundaryCache {
    /// Creates an empty cache for the given VCS marker name.
    pub fn new(vcs_marker: impl Into<String>) -> Self {
        Self {
            vcs_marker: vcs_marker.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The marker this cache probes for.
    pub fn vcs_marker(&self) -> &str {
        &self.vcs_marker
    }

    /// Returns the nearest boundary at or above `path`, or `None` when the
    /// filesystem root is reached without finding one.
    ///
    /// `path` should be absolute and normalized; it's used as the cache key.
    pub fn find_boundary(&self, path: &Path) -> Option<PathBuf> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = entries.get(path) {
                return cached.clone();
            }
        }

        let boundary = locate_boundary(path, &self.vcs_marker);
        debug!(
            "Boundary for {}: {}",
            path.display(),
            boundary
                .as_deref()
                .map(|b| b.display().to_string())
                .unwrap_or_else(|| "<none>".to_string())
        );

        // Concurrent misses race here; they all computed the same value.
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), boundary.clone());

        boundary
    }

    /// Number of memoized lookups.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been looked up yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BoundaryCache {
    fn default() -> Self {
        Self::new(spectr_core::options::DEFAULT_VCS_MARKER)
    }
}

/// Whether `dir` directly contains the VCS marker (directory or file).
///
/// Stat failures count as "absent".
pub fn has_vcs_marker(dir: &Path, vcs_marker: &str) -> bool {
    dir.join(vcs_marker).symlink_metadata().is_ok()
}

/// Uncached ancestor walk.
fn locate_boundary(path: &Path, vcs_marker: &str) -> Option<PathBuf> {
    let mut current = Some(path);
    while let Some(dir) = current {
        if has_vcs_marker(dir, vcs_marker) {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}
