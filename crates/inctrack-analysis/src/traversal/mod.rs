//! Frontier traversal — depth-bounded, round-based BFS over quoted includes.
//!
//! Each round expands the whole current frontier and collects newly seen
//! names into the next one. Names are deduplicated by bare filename across
//! all rounds, which is what makes cyclic includes terminate.

pub mod frontier;
pub mod types;

pub use frontier::{trace_includes, trace_includes_with};
pub use types::{IncludeClosure, TraversalStats};
