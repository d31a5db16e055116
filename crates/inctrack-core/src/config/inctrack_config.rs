//! Top-level inctrack configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ScanConfig, TraversalConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the scanned directory.
pub const PROJECT_CONFIG_FILE: &str = "inctrack.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`INCTRACK_*`)
/// 3. Project config (`inctrack.toml` in the scanned directory)
/// 4. User config (`~/.inctrack/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InctrackConfig {
    pub scan: ScanConfig,
    pub traversal: TraversalConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub depth: Option<i64>,
    pub follow_symlinks: Option<bool>,
}

impl InctrackConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.is_file() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        ::tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.inctrack/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".inctrack").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut InctrackConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: InctrackConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut InctrackConfig, other: &InctrackConfig) {
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
        if other.scan.respect_gitignore.is_some() {
            base.scan.respect_gitignore = other.scan.respect_gitignore;
        }
        if other.traversal.depth.is_some() {
            base.traversal.depth = other.traversal.depth;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut InctrackConfig) {
        if let Ok(val) = std::env::var("INCTRACK_DEPTH") {
            if let Ok(v) = val.trim().parse::<i64>() {
                config.traversal.depth = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INCTRACK_FOLLOW_SYMLINKS") {
            if let Ok(v) = val.trim().parse::<bool>() {
                config.scan.follow_symlinks = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INCTRACK_RESPECT_GITIGNORE") {
            if let Ok(v) = val.trim().parse::<bool>() {
                config.scan.respect_gitignore = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut InctrackConfig, cli: &CliOverrides) {
        if let Some(v) = cli.depth {
            config.traversal.depth = Some(v);
        }
        if let Some(v) = cli.follow_symlinks {
            config.scan.follow_symlinks = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
