//! Text and JSON renderers.

use inctrack_core::errors::ReportError;
use serde::Serialize;

use crate::traversal::{IncludeClosure, TraversalStats};

/// `"<root> includes transitively <n> headers."`, plus the recursion depth
/// when the traversal was bounded.
pub fn render_summary(closure: &IncludeClosure) -> String {
    match closure.depth.rounds() {
        Some(depth) => format!(
            "{} includes transitively {} headers. Recursion depth: {}",
            closure.root,
            closure.count(),
            depth
        ),
        None => format!(
            "{} includes transitively {} headers.",
            closure.root,
            closure.count()
        ),
    }
}

/// One discovered header per line, sorted, each followed by a newline.
pub fn render_list(closure: &IncludeClosure) -> String {
    let mut out = String::new();
    for header in closure.headers() {
        out.push_str(header);
        out.push('\n');
    }
    out
}

/// Machine-readable report shape.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub root: &'a str,
    /// `null` when unbounded.
    pub depth: Option<u32>,
    pub count: usize,
    pub headers: Vec<&'a str>,
    pub stats: TraversalStats,
}

impl<'a> From<&'a IncludeClosure> for JsonReport<'a> {
    fn from(closure: &'a IncludeClosure) -> Self {
        Self {
            root: &closure.root,
            depth: closure.depth.rounds(),
            count: closure.count(),
            headers: closure.headers().collect(),
            stats: closure.stats,
        }
    }
}

/// Pretty-printed JSON report.
pub fn render_json(closure: &IncludeClosure) -> Result<String, ReportError> {
    serde_json::to_string_pretty(&JsonReport::from(closure)).map_err(|e| {
        ReportError::Serialization {
            message: e.to_string(),
        }
    })
}
