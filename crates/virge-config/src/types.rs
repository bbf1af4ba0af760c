use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Top-level VIRGE configuration.
///
/// All fields are optional in the TOML file; accessor methods apply the
/// built-in defaults, so `Config::default()` is always a complete, valid
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub refresh: RefreshConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
}

/// `[refresh]` section - refresh coordinator tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub poll_interval_secs: Option<u64>,
}

impl RefreshConfig {
    /// Poll interval in seconds for the timer fallback trigger (default 60).
    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs
            .unwrap_or(defaults::POLL_INTERVAL_SECS)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs())
    }
}

/// `[session]` section - session-mode bootstrap knobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub demo_param: Option<String>,
    pub mode_storage_key: Option<String>,
}

impl SessionConfig {
    /// Query parameter that requests demo mode (default `demo`).
    pub fn demo_param(&self) -> &str {
        self.demo_param.as_deref().unwrap_or(defaults::DEMO_PARAM)
    }

    /// Session-store key the decided mode is recorded under.
    pub fn mode_storage_key(&self) -> &str {
        self.mode_storage_key
            .as_deref()
            .unwrap_or(defaults::MODE_STORAGE_KEY)
    }
}

/// `[ui]` section - shared UI state defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_locale: Option<String>,
}

impl UiConfig {
    /// Locale code active before the user switches (default `en`).
    ///
    /// Guaranteed to parse as a supported locale once the config has been
    /// validated.
    pub fn default_locale(&self) -> &str {
        self.default_locale
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOCALE)
    }
}
