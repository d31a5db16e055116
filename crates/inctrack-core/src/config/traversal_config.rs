//! Traversal configuration.

use serde::{Deserialize, Serialize};

use crate::types::Depth;

/// Configuration for the BFS include traversal.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TraversalConfig {
    /// Round budget. Positive bounds the traversal, zero or negative means
    /// unbounded. Default: 5.
    pub depth: Option<i64>,
}

impl TraversalConfig {
    pub fn effective_depth(&self) -> Depth {
        self.depth.map(Depth::from_signed).unwrap_or_default()
    }
}
