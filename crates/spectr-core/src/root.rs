//! Workspace root representation.
//!
//! A WorkspaceRoot is a directory holding the workspace marker. Roots are
//! built fresh by every discovery call and never mutated afterwards.

use crate::paths::{relative_display, upward_distance};
use serde::Serialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A discovered workspace root.
///
/// Identity is the absolute `path` alone. Two roots reached from
/// different start directories compare equal.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceRoot {
    /// Absolute path of the directory containing the marker.
    path: PathBuf,

    /// `path` relative to the directory discovery started from.
    relative_to: String,

    /// Nearest enclosing version-control boundary, if any.
    boundary_root: Option<PathBuf>,

    /// Absolute path of the marker directory itself.
    marker_path: PathBuf,
}

impl WorkspaceRoot {
    /// Creates a root for `path`, displayed relative to `display_base`.
    pub fn new(
        path: impl Into<PathBuf>,
        marker_dir: &str,
        display_base: &Path,
        boundary_root: Option<PathBuf>,
    ) -> Self {
        let path = path.into();
        let relative_to = relative_display(&path, display_base);
        let marker_path = path.join(marker_dir);
        Self {
            path,
            relative_to,
            boundary_root,
            marker_path,
        }
    }

    /// Absolute path of the workspace root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The root's path relative to the discovery start directory.
    pub fn relative_to(&self) -> &str {
        &self.relative_to
    }

    /// The nearest enclosing version-control boundary.
    pub fn boundary_root(&self) -> Option<&Path> {
        self.boundary_root.as_deref()
    }

    /// The marker directory (`<path>/spectr` by default).
    pub fn marker_path(&self) -> &Path {
        &self.marker_path
    }

    /// Directory holding capability specs.
    pub fn specs_dir(&self) -> PathBuf {
        self.marker_path.join("specs")
    }

    /// Directory holding change proposals.
    pub fn changes_dir(&self) -> PathBuf {
        self.marker_path.join("changes")
    }

    /// Number of upward steps from the start directory to this root.
    pub fn distance(&self) -> usize {
        upward_distance(&self.relative_to)
    }

    /// Ranking order: fewer upward steps first, then by relative path.
    ///
    /// The tie-break is plain string order, so a descendant named `-pkg`
    /// or `+x` ranks ahead of `.` at the same distance.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.distance()
            .cmp(&other.distance())
            .then_with(|| self.relative_to.cmp(&other.relative_to))
    }
}

impl PartialEq for WorkspaceRoot {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for WorkspaceRoot {}

impl Hash for WorkspaceRoot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl std::fmt::Display for WorkspaceRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.relative_to, self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(path: &str, base: &str) -> WorkspaceRoot {
        WorkspaceRoot::new(path, "spectr", Path::new(base), None)
    }

    #[test]
    fn test_relative_and_subdirs() {
        let r = root("/work/repo", "/work/repo/pkg");
        assert_eq!(r.relative_to(), "..");
        assert_eq!(r.distance(), 1);
        assert_eq!(r.marker_path(), Path::new("/work/repo/spectr"));
        assert_eq!(r.specs_dir(), PathBuf::from("/work/repo/spectr/specs"));
        assert_eq!(r.changes_dir(), PathBuf::from("/work/repo/spectr/changes"));
    }

    #[test]
    fn test_identity_is_path_only() {
        let a = WorkspaceRoot::new("/work/repo", "spectr", Path::new("/work/repo"), None);
        let b = WorkspaceRoot::new(
            "/work/repo",
            "spectr",
            Path::new("/work"),
            Some(PathBuf::from("/work/repo")),
        );
        assert_eq!(a, b);
        assert_ne!(a.relative_to(), b.relative_to());
    }

    #[test]
    fn test_rank_cmp_groups_by_distance() {
        let base = "/a/b/c";
        let mut roots = vec![
            root("/a/other", base),
            root("/a/b", base),
            root("/a/b/lib", base),
            root("/a/b/c", base),
            root("/a", base),
        ];
        roots.sort_by(WorkspaceRoot::rank_cmp);

        let order: Vec<&str> = roots.iter().map(|r| r.relative_to()).collect();
        assert_eq!(order, vec![".", "..", "../lib", "../..", "../../other"]);
    }

    #[test]
    fn test_rank_cmp_tie_break_is_string_order() {
        let base = "/a";
        let mut roots = vec![root("/a", base), root("/a/-pkg", base), root("/a/pkg", base)];
        roots.sort_by(WorkspaceRoot::rank_cmp);

        let order: Vec<&str> = roots.iter().map(|r| r.relative_to()).collect();
        assert_eq!(order, vec!["-pkg", ".", "pkg"]);
    }

    #[test]
    fn test_serializes_paths() {
        let r = WorkspaceRoot::new(
            "/work/repo",
            "spectr",
            Path::new("/work/repo"),
            Some(PathBuf::from("/work/repo")),
        );
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["relative_to"], ".");
        assert_eq!(json["boundary_root"], "/work/repo");
    }
}
