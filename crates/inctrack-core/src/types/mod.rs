//! Shared data types for inctrack.
//! Collection re-exports and the traversal depth budget.

pub mod collections;
pub mod depth;

pub use collections::FxHashMap;
pub use depth::Depth;
