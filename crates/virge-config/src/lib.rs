//! # virge-config
//!
//! TOML configuration for VIRGE: types, loading, and validation.
//!
//! Single source of truth for the `Config` type. Depends only on
//! `virge-platform` (for locale validation).

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod types;

pub use errors::ConfigError;
pub use loading::load_from_path;
pub use types::{Config, RefreshConfig, SessionConfig, UiConfig};
pub use validation::validate_config;

impl Config {
    /// Load configuration leniently.
    ///
    /// Reads the file named by `$VIRGE_CONFIG`, falling back to
    /// `~/.virge/config.toml`. Never returns an error - a missing file,
    /// parse failure, or validation failure warns and falls back to
    /// defaults. See [`loading::load_lenient`] for details.
    pub fn load() -> Self {
        loading::load_lenient()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for the rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
