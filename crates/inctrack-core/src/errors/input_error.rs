//! Input validation errors raised before any scanning happens.

use std::path::PathBuf;

use super::error_code::{self, InctrackErrorCode};

/// Rejections of the root file or directory arguments.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("\"{}\" is either not a C++ header or it does not exist.", .path.display())]
    NotAHeader { path: PathBuf },

    #[error("\"{}\" is not a directory.", .path.display())]
    NotADirectory { path: PathBuf },
}

impl InctrackErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
