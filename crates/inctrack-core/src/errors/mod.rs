//! Error handling for inctrack.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod report_error;
pub mod scan_error;
pub mod track_error;

pub use config_error::ConfigError;
pub use error_code::InctrackErrorCode;
pub use input_error::InputError;
pub use report_error::ReportError;
pub use scan_error::ScanError;
pub use track_error::TrackError;
