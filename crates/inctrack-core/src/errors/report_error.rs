//! Reporting errors.

use super::error_code::{self, InctrackErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {message}")]
    Serialization { message: String },
}

impl InctrackErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
