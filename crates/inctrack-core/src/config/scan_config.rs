//! Header index scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the directory walk that builds the header index.
///
/// The header extension whitelist is fixed and deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links during the walk. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Skip files matched by `.gitignore`/`.ignore` rules. Default: false.
    pub respect_gitignore: Option<bool>,
}

impl ScanConfig {
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(false)
    }
}
