//! Configuration validation logic.
//!
//! Runs as the final step of both loading paths, so code downstream of a
//! loaded `Config` can rely on every accessor returning a usable value.

use virge_platform::Locale;

use crate::errors::ConfigError;
use crate::types::Config;

/// Validate a Config, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `refresh.poll_interval_secs` must be at least 1
/// - `ui.default_locale` must be a supported locale code
/// - `session.demo_param` and `session.mode_storage_key` must be non-empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.refresh.poll_interval_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "refresh.poll_interval_secs must be at least 1".to_string(),
        });
    }

    if let Err(e) = config.ui.default_locale().parse::<Locale>() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("Invalid ui.default_locale: {}", e),
        });
    }

    if config.session.demo_param().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "session.demo_param must not be empty".to_string(),
        });
    }

    if config.session.mode_storage_key().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "session.mode_storage_key must not be empty".to_string(),
        });
    }

    Ok(())
}
