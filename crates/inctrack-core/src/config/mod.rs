//! Configuration system for inctrack.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod inctrack_config;
pub mod scan_config;
pub mod traversal_config;

pub use inctrack_config::{CliOverrides, InctrackConfig};
pub use scan_config::ScanConfig;
pub use traversal_config::TraversalConfig;
