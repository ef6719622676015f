//! Error types for workspace discovery.
//!
//! Only two of these ever reach a caller of root discovery: a start path
//! that can't be made absolute, and an override that doesn't point at a
//! workspace. Unreadable directories are logged and skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type for functions that can fail during discovery.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Things that can go wrong when locating workspace roots.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The start directory (or override path) couldn't be made absolute.
    #[error("failed to resolve path '{path}': {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicit override names a directory without the workspace marker.
    #[error("no '{marker}' directory found at '{path}'")]
    RootNotFound { path: PathBuf, marker: String },

    /// A directory couldn't be listed. The downward walk recovers from
    /// this locally; listing helpers surface it.
    #[error("failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing or malformed.
    #[error("invalid configuration in '{path}': {message}")]
    Config { path: PathBuf, message: String },
}

impl DiscoveryError {
    /// Creates a path resolution error with the offending path.
    pub fn resolution(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PathResolution {
            path: path.into(),
            source,
        }
    }

    /// Creates a directory read error with the offending path.
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a root-not-found error for a resolved override path.
    pub fn root_not_found(path: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self::RootNotFound {
            path: path.into(),
            marker: marker.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_names_path() {
        let err = DiscoveryError::root_not_found("/work/project", "spectr");
        let msg = err.to_string();
        assert!(msg.contains("/work/project"));
        assert!(msg.contains("spectr"));
    }

    #[test]
    fn test_resolution_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DiscoveryError::resolution("relative/dir", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("relative/dir"));
    }
}
