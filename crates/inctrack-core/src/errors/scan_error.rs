//! Header index scan errors.

use std::path::PathBuf;

use super::error_code::{self, InctrackErrorCode};

/// Errors that can occur while building the header index.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan root is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Walk failed under {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },
}

impl InctrackErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
