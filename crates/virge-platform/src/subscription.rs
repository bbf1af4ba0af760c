//! Subscription teardown guard and observer registry.
//!
//! Every registration in VIRGE - host event listeners, interval timers,
//! store observers - hands back a [`Subscription`]. Dropping the guard is
//! the unsubscribe; holding a `Vec<Subscription>` and clearing it is how a
//! component tears down everything it registered, symmetrically and in one
//! place.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// RAII handle for a registration. Unsubscribes on drop.
///
/// Must be kept alive for as long as the registration should stay active.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a cancel closure. The closure runs exactly once, on drop,
    /// unless the subscription is detached first.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Keep the registration alive for the lifetime of its source.
    ///
    /// Deliberately leaks the teardown. Only for registrations that should
    /// survive the guard, such as process-lifetime observers.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Id-keyed callback registry shared by the stores in `virge-core`.
///
/// Single-threaded: callbacks run synchronously on the registering thread.
/// `notify` clones the callback list before invoking, so a callback may
/// remove itself (or register new observers) mid-dispatch without holding
/// a borrow across the call.
pub struct ObserverSet<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Rc<dyn Fn(T)>)>>,
}

impl<T: Copy> ObserverSet<T> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Register an observer and return its id for later removal.
    pub fn insert(&self, observer: Rc<dyn Fn(T)>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, observer));
        id
    }

    /// Remove an observer by id. Removing an unknown id is a no-op.
    pub fn remove(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }

    /// Invoke every registered observer with `value`, synchronously.
    pub fn notify(&self, value: T) {
        let observers: Vec<Rc<dyn Fn(T)>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T: Copy> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
