//! In-memory host implementations.
//!
//! Single-threaded stand-ins for the real platform surface: an event bus
//! with manually fired intervals, a `HashMap`-backed session store, a
//! parsed query string, and a reload recorder. The core test suite runs
//! entirely against these; embedders can also use them to drive the layer
//! headlessly.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::events::{EventKind, LifecycleEvent};
use crate::subscription::Subscription;
use crate::traits::{
    EventHandler, IntervalScheduler, LifecycleEvents, NavigationQuery, PageReloader, SessionStore,
    StoreError, TickHandler,
};

struct Listener {
    id: u64,
    kind: EventKind,
    handler: EventHandler,
}

struct Interval {
    id: u64,
    period: Duration,
    handler: TickHandler,
}

#[derive(Default)]
struct HostInner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
    intervals: RefCell<Vec<Interval>>,
}

impl HostInner {
    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

/// In-memory lifecycle event bus and interval scheduler.
///
/// Events are delivered synchronously by [`MemoryHost::emit`]; intervals
/// never fire on their own - tests call [`MemoryHost::fire_intervals`] to
/// simulate the timer elapsing. Listener and interval counts are observable
/// so teardown tests can assert nothing leaked.
#[derive(Default)]
pub struct MemoryHost {
    inner: Rc<HostInner>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every listener on its channel.
    ///
    /// The handler list is cloned before dispatch, so a handler may
    /// subscribe or unsubscribe without poisoning the borrow.
    pub fn emit(&self, event: &LifecycleEvent) {
        let handlers: Vec<EventHandler> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == event.kind())
            .map(|listener| listener.handler.clone())
            .collect();
        tracing::trace!(
            event = "platform.memory.dispatch",
            kind = ?event.kind(),
            listeners = handlers.len()
        );
        for handler in handlers {
            handler(event);
        }
    }

    /// Fire every registered interval once, as if its period elapsed.
    pub fn fire_intervals(&self) {
        let handlers: Vec<TickHandler> = self
            .inner
            .intervals
            .borrow()
            .iter()
            .map(|interval| interval.handler.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn interval_count(&self) -> usize {
        self.inner.intervals.borrow().len()
    }

    /// The period of the most recently registered interval, if any.
    pub fn last_interval_period(&self) -> Option<Duration> {
        self.inner
            .intervals
            .borrow()
            .last()
            .map(|interval| interval.period)
    }
}

impl LifecycleEvents for MemoryHost {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription {
        let id = self.inner.next_id();
        self.inner
            .listeners
            .borrow_mut()
            .push(Listener { id, kind, handler });

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .listeners
                    .borrow_mut()
                    .retain(|listener| listener.id != id);
            }
        })
    }
}

impl IntervalScheduler for MemoryHost {
    fn every(&self, period: Duration, handler: TickHandler) -> Subscription {
        let id = self.inner.next_id();
        self.inner.intervals.borrow_mut().push(Interval {
            id,
            period,
            handler,
        });

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .intervals
                    .borrow_mut()
                    .retain(|interval| interval.id != id);
            }
        })
    }
}

/// `HashMap`-backed session store.
///
/// `reject_writes(true)` makes every `set` fail, for exercising the
/// degraded storage path.
#[derive(Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes.get() {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
                message: "writes disabled".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Parsed `key=value` navigation query pairs.
///
/// Accepts the raw query with or without the leading `?`. No percent
/// decoding - the parameters this layer reads are plain ASCII flags.
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    params: Vec<(String, String)>,
}

impl QueryString {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (name.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Self { params }
    }
}

impl NavigationQuery for QueryString {
    fn param(&self, name: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(param_name, _)| param_name == name)
            .map(|(_, value)| value.clone())
    }
}

/// Counts reload requests instead of replacing any page.
#[derive(Default)]
pub struct RecordingReloader {
    count: Cell<usize>,
}

impl RecordingReloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload_count(&self) -> usize {
        self.count.get()
    }
}

impl PageReloader for RecordingReloader {
    fn reload(&self) {
        self.count.set(self.count.get() + 1);
    }
}
