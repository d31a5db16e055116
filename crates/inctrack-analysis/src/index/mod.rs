//! Header index: bare filename → path resolution table.
//!
//! Built once per run by walking the supplied directory tree, read-only
//! afterwards. When two headers share a basename the first one registered
//! wins and later ones are only counted as shadowed.

pub mod builder;
pub mod types;

pub use builder::is_header_file;
pub use types::{bare_filename, HeaderIndex, IndexOptions};
