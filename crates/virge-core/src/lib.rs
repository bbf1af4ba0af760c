//! # virge-core
//!
//! Freshness and session-mode coordination for embedded report views.
//!
//! This crate decides *when* a displayed report should refresh and *what
//! session mode* is active. It never fetches data and never renders - the
//! embedding shell injects the platform surface (see `virge-platform`) and
//! consumes the signals produced here.
//!
//! # Main Entry Points
//!
//! - [`refresh`] - translate lifecycle events into a refresh generation counter
//! - [`session`] - one-shot demo-mode bootstrap with a guarded full reload
//! - [`locale`] - shared display-language state
//! - [`reload`] - the at-most-once full-reload handle

pub mod locale;
pub mod logging;
pub mod refresh;
pub mod reload;
pub mod session;

pub use locale::LocaleStore;
pub use refresh::{POLL_INTERVAL, RefreshCoordinator, RefreshTrigger};
pub use reload::ReloadHandle;
pub use session::{BootstrapDecision, SessionModeBootstrapper};

// Re-export shared domain types and config so embedders can depend on this
// crate alone
pub use virge_config::{Config, ConfigError};
pub use virge_platform::{Locale, LocaleParseError, SessionMode};

// Re-export logging initialization
pub use logging::init_logging;
