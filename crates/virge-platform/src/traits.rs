//! Host interface traits.
//!
//! The embedding shell implements these against the real platform (browser
//! APIs, a webview bridge, a desktop host). `virge-core` only ever sees the
//! traits, which keeps the coordination logic synchronous, deterministic,
//! and testable against the in-memory host in [`crate::memory`].

use std::rc::Rc;
use std::time::Duration;

use crate::events::{EventKind, LifecycleEvent};
use crate::subscription::Subscription;

/// Callback invoked with each lifecycle event on a subscribed channel.
pub type EventHandler = Rc<dyn Fn(&LifecycleEvent)>;

/// Callback invoked on each repeating-timer tick.
pub type TickHandler = Rc<dyn Fn()>;

/// The host's lifecycle event stream.
///
/// # Semantics
///
/// - **Ordering**: handlers run in the order the host dispatches the
///   underlying events. No ordering is guaranteed across channels.
/// - **Threading**: dispatch is single-threaded; a handler returns before
///   the next event is delivered.
/// - **Teardown**: dropping the returned [`Subscription`] removes the
///   handler. A host that does not support a channel may return an inert
///   subscription - degraded coverage, not a failure.
pub trait LifecycleEvents {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription;
}

/// The host's repeating timer facility.
pub trait IntervalScheduler {
    /// Invoke `handler` every `period` until the subscription is dropped.
    fn every(&self, period: Duration, handler: TickHandler) -> Subscription;
}

/// Session-scoped key/value storage.
///
/// Contents survive reloads within a browser-tab session and are cleared
/// when the session ends. Writes may be rejected by the host (quota,
/// disabled storage); readers treat a missing key as "never written".
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Query parameters of the current navigation entry.
pub trait NavigationQuery {
    /// The first value recorded for `name`, if present. A parameter given
    /// without a value (`?demo`) yields an empty string.
    fn param(&self, name: &str) -> Option<String>;
}

/// The host facility that replaces the current page with a fresh load.
///
/// Calling this abandons the current page instance; callers must treat it
/// as a terminal action. The at-most-once discipline lives in
/// `virge-core::reload`, not here.
pub trait PageReloader {
    fn reload(&self);
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session storage rejected write for key '{key}': {message}")]
    WriteRejected { key: String, message: String },
}
