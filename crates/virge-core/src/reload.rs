//! The full-reload primitive.
//!
//! A reload replaces the page instance - "restart the world". Components
//! share one [`ReloadHandle`] per page load so the at-most-once guarantee
//! is enforced in a single place instead of replicated at every call site.

use std::cell::Cell;
use std::rc::Rc;

use virge_platform::PageReloader;

/// At-most-once wrapper around the host reload facility.
///
/// The first [`request`](Self::request) delegates to the host; every later
/// call on the same handle is suppressed with a warning. One handle spans
/// one page load - the reload itself produces a fresh handle.
pub struct ReloadHandle {
    reloader: Rc<dyn PageReloader>,
    requested: Cell<bool>,
}

impl ReloadHandle {
    pub fn new(reloader: Rc<dyn PageReloader>) -> Self {
        Self {
            reloader,
            requested: Cell::new(false),
        }
    }

    /// Request a full page reload, once.
    pub fn request(&self) {
        if self.requested.replace(true) {
            tracing::warn!(
                event = "reload.duplicate_suppressed",
                "Reload already requested for this page load"
            );
            return;
        }
        tracing::info!(event = "reload.requested");
        self.reloader.reload();
    }

    pub fn was_requested(&self) -> bool {
        self.requested.get()
    }
}
