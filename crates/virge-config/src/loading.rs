//! Configuration loading.
//!
//! Two paths:
//!
//! 1. **Strict** - [`load_from_path`] for embedders that manage the config
//!    location themselves. Parse and validation failures are errors.
//! 2. **Lenient** - [`load_lenient`] (exposed as `Config::load()`): resolves
//!    `$VIRGE_CONFIG`, then `~/.virge/config.toml`. Missing file, parse
//!    failure, and validation failure all warn and fall back to defaults,
//!    so startup never blocks on a bad config file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::types::Config;
use crate::validation::validate_config;

/// Environment variable naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "VIRGE_CONFIG";

/// Load and validate a configuration file from the given path.
///
/// # Errors
///
/// Returns `ConfigError::IoError` if the file cannot be read,
/// `ConfigError::ConfigParseError` on invalid TOML, and
/// `ConfigError::InvalidConfiguration` if validation rejects a value.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration, falling back to defaults on any failure.
pub(crate) fn load_lenient() -> Config {
    let Some(path) = config_path() else {
        tracing::debug!(
            event = "config.load.no_path",
            "No home directory and no $VIRGE_CONFIG - using defaults"
        );
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!(
            event = "config.load.file_missing",
            path = %path.display()
        );
        return Config::default();
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(
                event = "config.load.loaded",
                path = %path.display()
            );
            config
        }
        Err(e) => {
            tracing::warn!(
                event = "config.load.failed",
                path = %path.display(),
                error = %e,
                "Config file unusable - falling back to defaults"
            );
            Config::default()
        }
    }
}

/// Resolve the config file path: `$VIRGE_CONFIG` wins, else the user file.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".virge").join("config.toml"))
}
