//! Spectr Core - workspace root model and discovery options
//!
//! This crate holds the types every Spectr subsystem shares when it
//! talks about workspaces: the `WorkspaceRoot` value produced by
//! discovery, the options that shape a search, and the error taxonomy.
//!
//! # Example
//!
//! ```
//! use spectr_core::{DiscoveryOptions, WorkspaceRoot};
//! use std::path::Path;
//!
//! let options = DiscoveryOptions::default();
//! let root = WorkspaceRoot::new("/work/repo", &options.marker_dir, Path::new("/work/repo/pkg"), None);
//! assert_eq!(root.relative_to(), "..");
//! assert_eq!(root.distance(), 1);
//! ```

pub mod error;
pub mod options;
pub mod paths;
pub mod root;

pub use error::{DiscoveryError, Result};
pub use options::DiscoveryOptions;
pub use root::WorkspaceRoot;
