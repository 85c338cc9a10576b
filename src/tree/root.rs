//! Data root discovery.

use std::path::{Component, Path, PathBuf};

/// Directory, relative to a candidate base, that holds the material tree.
pub const DATA_DIR: &str = "public/data";

/// Absolute fallback candidate tried after the working-directory candidates.
pub const ABSOLUTE_DATA_DIR: &str = "/public/data";

/// Whether `key` names exactly one child directory.
///
/// Rejects empty keys, `.`, `..`, absolute paths and anything containing a
/// separator, so a key joined onto a directory never leaves it.
pub fn is_child_key(key: &str) -> bool {
    let mut components = Path::new(key).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Candidate data roots for a working directory, in priority order.
///
/// `<cwd>/public/data`, `<cwd>/../public/data`, `/public/data`. The parent
/// candidate is resolved lexically; at the filesystem root it is the root.
pub fn candidate_roots(cwd: &Path) -> Vec<PathBuf> {
    let parent = cwd.parent().unwrap_or(cwd);
    vec![
        cwd.join(DATA_DIR),
        parent.join(DATA_DIR),
        PathBuf::from(ABSOLUTE_DATA_DIR),
    ]
}

/// Resolve the data root against an explicit working directory.
///
/// Returns the first candidate that exists. When none does, the first
/// candidate comes back anyway; callers treat a missing root as "no data".
pub fn resolve_data_root_from(cwd: &Path) -> PathBuf {
    let candidates = candidate_roots(cwd);
    for candidate in &candidates {
        if candidate.exists() {
            tracing::debug!("Using data root {}", candidate.display());
            return candidate.clone();
        }
    }
    let fallback = cwd.join(DATA_DIR);
    tracing::debug!(
        "No data root candidate exists, defaulting to {}",
        fallback.display()
    );
    fallback
}

/// Resolve the data root against the current working directory.
///
/// Recomputed on every call; nothing is cached between calls.
pub fn resolve_data_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!("Failed to read current directory: {}", e);
        PathBuf::from(".")
    });
    resolve_data_root_from(&cwd)
}

/// Where the scanner takes its data root from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootLocator {
    /// Run candidate discovery against the working directory on every call.
    Discover,
    /// Use this directory verbatim.
    Fixed(PathBuf),
}

impl RootLocator {
    pub fn resolve(&self) -> PathBuf {
        match self {
            RootLocator::Discover => resolve_data_root(),
            RootLocator::Fixed(root) => root.clone(),
        }
    }
}

impl Default for RootLocator {
    fn default() -> Self {
        RootLocator::Discover
    }
}
