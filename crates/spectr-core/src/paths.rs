//! Path helpers shared by every search direction.
//!
//! Everything here is lexical. Symlinks are not resolved, so a path
//! reached through a link keeps the spelling the caller used.

use crate::error::{DiscoveryError, Result};
use std::path::{Component, Path, PathBuf};

/// Resolves `path` to an absolute, normalized path.
///
/// Relative paths are joined onto the process working directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = std::env::current_dir().map_err(|e| DiscoveryError::resolution(path, e))?;
    Ok(normalize(&cwd.join(path)))
}

/// Resolves `path` against `base` (which should already be absolute).
pub fn resolve_against(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Removes `.` segments and folds `..` into the preceding segment.
///
/// A `..` above the filesystem root is dropped; a leading `..` on a
/// relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped =
                    matches!(out.components().next_back(), Some(Component::Normal(_))) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Expresses `path` relative to `base` using `/` separators.
///
/// Returns `.` when the two are the same directory.
pub fn relative_display(path: &Path, base: &Path) -> String {
    let relative = match pathdiff::diff_paths(path, base) {
        Some(rel) => rel,
        None => return path.display().to_string(),
    };

    let segments: Vec<String> = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// Counts the leading `..` segments of a relative path.
///
/// This is the ranking metric: how far upward from the start directory
/// a result lives. `.` and plain descendants score 0.
pub fn upward_distance(relative: &str) -> usize {
    relative
        .split(['/', '\\'])
        .take_while(|segment| *segment == "..")
        .count()
}
