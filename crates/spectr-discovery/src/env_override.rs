//! Explicit root override.
//!
//! When the override variable is set, no searching happens at all: the
//! named directory is the one and only root, provided it has the marker.

use crate::boundary::BoundaryCache;
use spectr_core::paths::resolve_against;
use spectr_core::{DiscoveryError, DiscoveryOptions, Result, WorkspaceRoot};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;

/// Resolves an override value into a single root.
///
/// Relative values are resolved against `start`, which must already be
/// absolute. The VCS gating rule does not apply: an explicit path is
/// trusted as long as the marker directory exists.
pub fn resolve_override(
    value: &OsStr,
    start: &Path,
    options: &DiscoveryOptions,
    boundaries: &BoundaryCache,
) -> Result<WorkspaceRoot> {
    let resolved = resolve_against(Path::new(value), start);

    if !resolved.join(&options.marker_dir).is_dir() {
        return Err(DiscoveryError::root_not_found(
            resolved,
            options.marker_dir.clone(),
        ));
    }

    info!(
        "Using {} from {}",
        resolved.display(),
        options.override_var
    );

    let boundary = boundaries.find_boundary(&resolved);
    Ok(WorkspaceRoot::new(
        resolved,
        &options.marker_dir,
        start,
        boundary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_absolute_override() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("project");
        fs::create_dir_all(project.join("spectr")).unwrap();
        let start = dir.path().join("elsewhere");

        let root = resolve_override(
            project.as_os_str(),
            &start,
            &DiscoveryOptions::default(),
            &BoundaryCache::default(),
        )
        .unwrap();

        assert_eq!(root.path(), project.as_path());
        assert_eq!(root.relative_to(), "../project");
    }

    #[test]
    fn test_relative_override_resolves_against_start() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("spectr")).unwrap();
        let start = dir.path().join("pkg").join("a");
        fs::create_dir_all(&start).unwrap();

        let root = resolve_override(
            OsStr::new("../.."),
            &start,
            &DiscoveryOptions::default(),
            &BoundaryCache::default(),
        )
        .unwrap();

        assert_eq!(root.path(), dir.path());
        assert_eq!(root.relative_to(), "../..");
        assert_eq!(root.boundary_root(), Some(dir.path()));
    }

    #[test]
    fn test_override_without_marker_fails() {
        let dir = tempdir().unwrap();

        let err = resolve_override(
            OsStr::new("nowhere"),
            dir.path(),
            &DiscoveryOptions::default(),
            &BoundaryCache::default(),
        )
        .unwrap_err();

        let expected: PathBuf = dir.path().join("nowhere");
        match &err {
            DiscoveryError::RootNotFound { path, .. } => assert_eq!(path, &expected),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn test_override_skips_vcs_gating() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("spectr")).unwrap();

        let root = resolve_override(
            dir.path().as_os_str(),
            dir.path(),
            &DiscoveryOptions::default(),
            &BoundaryCache::default(),
        )
        .unwrap();
        assert_eq!(root.relative_to(), ".");
    }
}
