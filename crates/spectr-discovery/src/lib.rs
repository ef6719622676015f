//! Spectr Discovery - locating workspace roots
//!
//! This crate finds the directories holding a `spectr/` workspace:
//! - Walking up from the start directory to the enclosing repository
//! - Walking down (bounded) to find nested projects in a monorepo
//! - Honoring an explicit `SPECTR_ROOT` override
//!
//! Results are deduplicated and ranked by how far upward they sit from
//! the start directory. The search is read-only and never fails on an
//! unreadable subdirectory.

mod boundary;
mod downward;
mod env_override;
mod finder;
mod listing;
mod search;
mod skip;
mod upward;

pub use boundary::{has_vcs_marker, BoundaryCache};
pub use downward::{walk_down, DownwardSearch};
pub use env_override::resolve_override;
pub use finder::{dedupe, rank, RootFinder};
pub use listing::{list_changes, list_specs, ARCHIVE_DIR};
pub use search::{is_workspace_root, RootSearch, SearchContext};
pub use skip::{should_skip, SkipPolicy, DEFAULT_SKIP_DIRS};
pub use upward::UpwardSearch;
