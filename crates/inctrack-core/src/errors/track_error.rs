//! Top-level error for a tracker run.

use super::{ConfigError, InctrackErrorCode, InputError, ReportError, ScanError};

/// Errors that abort a run. Aggregates subsystem errors via `From`.
///
/// Unreadable headers and unresolved include names never show up here:
/// the traversal absorbs them as counters on its result.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl TrackError {
    /// Process exit code for this error. Every fatal error maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl InctrackErrorCode for TrackError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
