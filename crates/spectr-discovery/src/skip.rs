//! Directories the downward search never enters.
//!
//! Dependency caches and build outputs routinely dwarf the source tree,
//! and any markers inside them belong to someone else's project.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Directory names skipped by default.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    // VCS internals
    ".git",
    ".hg",
    ".svn",
    // Package manager caches
    "node_modules",
    "bower_components",
    "jspm_packages",
    "vendor",
    ".pnpm-store",
    ".yarn",
    // Python
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    // Build outputs
    "target",
    "dist",
    "build",
    "out",
    "_build",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".gradle",
    ".terraform",
    "zig-cache",
    "zig-out",
    // Coverage and reports
    "coverage",
    ".nyc_output",
    "htmlcov",
    // IDE and tool caches
    ".idea",
    ".vscode",
    ".cache",
    ".direnv",
];

static DEFAULT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DEFAULT_SKIP_DIRS.iter().copied().collect());

/// Whether `name` is skipped under the default policy.
pub fn should_skip(name: &str) -> bool {
    DEFAULT_SET.contains(name) || name.starts_with('.')
}

/// Skip classifier extended with caller-supplied names.
#[derive(Debug, Clone, Default)]
pub struct SkipPolicy {
    extra: HashSet<String>,
}

impl SkipPolicy {
    /// Builds a policy that also skips every name in `extra`.
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra: extra.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the downward search should leave `name` alone.
    ///
    /// Hidden directories are always skipped; `.git` falls under the
    /// boundary rule as well, but never needs to be walked either way.
    pub fn should_skip(&self, name: &str) -> bool {
        should_skip(name) || self.extra.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_known_dirs() {
        for name in ["node_modules", "target", "dist", "__pycache__", "vendor", "coverage"] {
            assert!(should_skip(name), "{name} should be skipped");
        }
    }

    #[test]
    fn test_skips_hidden_and_vcs() {
        assert!(should_skip(".git"));
        assert!(should_skip(".hidden"));
        assert!(should_skip(".config"));
    }

    #[test]
    fn test_keeps_source_dirs() {
        for name in ["src", "packages", "apps", "spectr", "lib", "docs"] {
            assert!(!should_skip(name), "{name} should be walked");
        }
    }

    #[test]
    fn test_extra_names() {
        let policy = SkipPolicy::new(["fixtures", "testdata"]);
        assert!(policy.should_skip("fixtures"));
        assert!(policy.should_skip("node_modules"));
        assert!(!policy.should_skip("src"));
        assert!(!SkipPolicy::default().should_skip("fixtures"));
    }
}
