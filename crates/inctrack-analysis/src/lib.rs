//! inctrack-analysis: header fan-out estimation without a compiler
//!
//! Pipeline:
//!
//! ```text
//! Header Index → Frontier Traversal ⇄ Include Extractor → Report
//!   (ignore        (round-based BFS,     (regex over       (count,
//!    walk)          BTreeSet dedup)       file lines)       list, JSON)
//! ```

pub mod extractor;
pub mod index;
pub mod report;
pub mod traversal;

pub use extractor::{extract_includes, IncludeIter, IncludeScan};
pub use index::{is_header_file, HeaderIndex, IndexOptions};
pub use report::{render_json, render_list, render_summary};
pub use traversal::{trace_includes, IncludeClosure, TraversalStats};
