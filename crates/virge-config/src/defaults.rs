//! Built-in fallback values for every configurable knob.

/// Fallback poll interval for the refresh coordinator's timer trigger.
pub const POLL_INTERVAL_SECS: u64 = 60;

/// Query parameter that requests demo mode.
pub const DEMO_PARAM: &str = "demo";

/// Session-store key under which the decided mode is recorded.
pub const MODE_STORAGE_KEY: &str = "virge.session_mode";

/// Display locale used until the user switches.
pub const DEFAULT_LOCALE: &str = "en";
