//! Reporting — renders an [`IncludeClosure`](crate::traversal::IncludeClosure)
//! as a one-line summary, a sorted list, or JSON.

pub mod render;

pub use render::{render_json, render_list, render_summary, JsonReport};
