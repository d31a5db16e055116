//! Include extractor: quoted `#include` directives → bare filenames.
//!
//! Extraction is lazy. A file is opened once, read line by line, and the
//! handle is released as soon as the iterator is exhausted or dropped.

pub mod include_scan;
pub mod line_matcher;

pub use include_scan::{extract_includes, IncludeIter, IncludeScan};
pub use line_matcher::{match_include_line, strip_leading_whitespace};
