//! Header index data types.

use std::path::{Path, PathBuf};

use inctrack_core::config::ScanConfig;
use inctrack_core::types::FxHashMap;

/// Walk options for building a [`HeaderIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    pub follow_symlinks: bool,
    pub respect_gitignore: bool,
}

impl From<&ScanConfig> for IndexOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            follow_symlinks: config.effective_follow_symlinks(),
            respect_gitignore: config.effective_respect_gitignore(),
        }
    }
}

/// Mapping from bare header filename to the single path it resolves to.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    entries: FxHashMap<String, PathBuf>,
    shadowed: usize,
}

impl HeaderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register headers in exactly the order given. Non-header paths are
    /// skipped, duplicates keep the first path.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut index = Self::new();
        for path in paths {
            let path = path.into();
            if super::is_header_file(&path) {
                index.register(path);
            }
        }
        index
    }

    /// Insert `path` under its bare filename unless that name is taken.
    /// Returns `true` when the path became the resolution target.
    pub(crate) fn register(&mut self, path: PathBuf) -> bool {
        let Some(name) = bare_filename(&path) else {
            return false;
        };
        match self.entries.get(&name) {
            Some(existing) => {
                tracing::debug!(
                    header = %name,
                    kept = %existing.display(),
                    shadowed = %path.display(),
                    "duplicate header basename"
                );
                self.shadowed += 1;
                false
            }
            None => {
                self.entries.insert(name, path);
                true
            }
        }
    }

    /// Resolve a bare filename to its indexed path.
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of headers dropped because their basename was already indexed.
    pub fn shadowed_count(&self) -> usize {
        self.shadowed
    }

    /// Indexed names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Filename component of `path` as an owned string, directories discarded.
///
/// Returns `None` for paths without a filename (`"dir/"`, `".."`, `""`).
pub fn bare_filename(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
