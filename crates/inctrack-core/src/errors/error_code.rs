//! InctrackErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human message.
pub trait InctrackErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
