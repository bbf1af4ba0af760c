//! Session-mode bootstrap.
//!
//! Decides once per page load whether the session runs in demo mode, and
//! guarantees every module observes a consistent mode by forcing a single
//! full reload the first time a session transitions into demo.

mod bootstrap;
pub mod types;

pub use bootstrap::SessionModeBootstrapper;
pub use types::BootstrapDecision;
