//! Discovery configuration.
//!
//! All fields have defaults, so an empty JSON object (or no file at all)
//! gives the standard `spectr/` + `.git` layout.

use crate::error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default workspace marker directory name.
pub const DEFAULT_MARKER_DIR: &str = "spectr";

/// Default version-control marker name.
pub const DEFAULT_VCS_MARKER: &str = ".git";

/// Environment variable that pins discovery to a single root.
pub const DEFAULT_OVERRIDE_VAR: &str = "SPECTR_ROOT";

/// Default bound for the downward search.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Options controlling root discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryOptions {
    /// Subdirectory whose presence marks a workspace root.
    pub marker_dir: String,

    /// Version-control marker. May be a directory or a file
    /// (linked working trees use a `.git` file).
    pub vcs_marker: String,

    /// Environment variable consulted before any search.
    pub override_var: String,

    /// Deepest directory level the downward search visits.
    /// The start directory is level 0.
    pub max_depth: usize,

    /// Only accept a marker that sits next to a VCS marker.
    pub require_vcs_marker: bool,

    /// Additional directory names the downward search never enters.
    pub extra_skip_dirs: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            marker_dir: DEFAULT_MARKER_DIR.to_string(),
            vcs_marker: DEFAULT_VCS_MARKER.to_string(),
            override_var: DEFAULT_OVERRIDE_VAR.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            require_vcs_marker: true,
            extra_skip_dirs: Vec::new(),
        }
    }
}

impl DiscoveryOptions {
    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DiscoveryError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&content).map_err(|e| match e {
            DiscoveryError::Config { message, .. } => DiscoveryError::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parses options from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(content).map_err(|e| DiscoveryError::Config {
            path: Default::default(),
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("marker_dir", &self.marker_dir),
            ("vcs_marker", &self.vcs_marker),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) {
                return Err(DiscoveryError::Config {
                    path: Default::default(),
                    message: format!("{field} must be a single directory name, got '{value}'"),
                });
            }
        }
        Ok(())
    }
}
