//! inctrack-core: shared foundations for the include tracker
//!
//! This crate holds everything the analysis engine and the CLI both need:
//! - Errors: one `thiserror` enum per subsystem plus the aggregate `TrackError`
//! - Config: TOML-based layered configuration (`inctrack.toml`)
//! - Tracing: `tracing-subscriber` setup driven by `INCTRACK_LOG`
//! - Types: collection re-exports and the `Depth` budget type

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{CliOverrides, InctrackConfig};
pub use errors::{InctrackErrorCode, TrackError};
pub use types::Depth;
