//! Argument checks performed before any scanning.

use std::path::Path;

use inctrack_core::errors::InputError;

/// The root must be an existing regular file with extension exactly `h`.
pub fn validate_header(path: &Path) -> Result<(), InputError> {
    let is_h = path.extension().is_some_and(|ext| ext == "h");
    if !is_h || !path.is_file() {
        return Err(InputError::NotAHeader {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

pub fn validate_directory(path: &Path) -> Result<(), InputError> {
    if !path.is_dir() {
        return Err(InputError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
