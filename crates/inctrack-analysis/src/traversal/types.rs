//! Traversal result types.

use std::collections::BTreeSet;

use inctrack_core::Depth;
use serde::Serialize;

/// Counters collected while a traversal runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Rounds that actually executed (≤ the depth budget).
    pub rounds: u32,
    /// Frontier entries that resolved through the index and were scanned.
    pub expanded: usize,
    /// Frontier entries with no match in the index.
    pub unresolved: usize,
    /// Resolved headers that could not be opened.
    pub unreadable: usize,
}

/// Everything reachable from one root header within a depth budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludeClosure {
    /// Bare filename of the root header.
    pub root: String,
    pub depth: Depth,
    /// Every bare filename discovered, ordered lexicographically.
    pub discovered: BTreeSet<String>,
    pub stats: TraversalStats,
}

impl IncludeClosure {
    /// Number of distinct headers pulled in transitively.
    pub fn count(&self) -> usize {
        self.discovered.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.discovered.contains(name)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.discovered.iter().map(String::as_str)
    }
}
