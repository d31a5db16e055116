//! Directory walk that populates a [`HeaderIndex`].

use std::path::Path;

use ignore::WalkBuilder;
use inctrack_core::errors::ScanError;

use super::types::{HeaderIndex, IndexOptions};

/// Extensions that count as headers. Fixed and case-sensitive.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "inl"];

/// Whether `path` has one of the header extensions.
pub fn is_header_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext))
}

impl HeaderIndex {
    /// Walk `root` recursively and index every header file.
    ///
    /// Entries inside a directory are visited sorted by file name, depth
    /// first, so the winner among duplicate basenames is the one reached
    /// first in that order. Unreadable entries below the root are skipped.
    pub fn build(root: &Path, options: &IndexOptions) -> Result<Self, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .ignore(options.respect_gitignore)
            .parents(options.respect_gitignore)
            .require_git(false)
            .follow_links(options.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut index = HeaderIndex::new();
        let mut skipped = 0usize;

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) if err.depth() == Some(0) => {
                    return Err(ScanError::Walk {
                        path: root.to_path_buf(),
                        message: err.to_string(),
                    });
                }
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    skipped += 1;
                    continue;
                }
            };

            // Without link following, the entry's own type is the link's.
            let is_file = if entry.path_is_symlink() {
                std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
            } else {
                entry.file_type().is_some_and(|ft| ft.is_file())
            };
            if is_file && is_header_file(entry.path()) {
                index.register(entry.into_path());
            }
        }

        tracing::info!(
            root = %root.display(),
            headers = index.len(),
            shadowed = index.shadowed_count(),
            skipped,
            "header index built"
        );
        Ok(index)
    }
}
