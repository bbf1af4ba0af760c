//! Shared display-language state.
//!
//! One writer action (the user's language toggle), any number of readers.
//! All mutation goes through [`LocaleStore::set`]; propagation to observers
//! is synchronous, so a reader never sees a stale value after `set`
//! returns.

use std::cell::Cell;
use std::rc::Rc;

use virge_config::UiConfig;
use virge_platform::{Locale, ObserverSet, Subscription};

struct LocaleInner {
    current: Cell<Locale>,
    observers: ObserverSet<Locale>,
}

/// Tab-lifetime store for the active display language.
///
/// Handles are cheap clones over shared state; hand one to every component
/// that reads or switches the locale. Nothing is persisted - a reload comes
/// back up on the configured default.
pub struct LocaleStore {
    inner: Rc<LocaleInner>,
}

impl LocaleStore {
    pub fn new(default: Locale) -> Self {
        tracing::debug!(event = "locale.initialized", locale = %default);
        Self {
            inner: Rc::new(LocaleInner {
                current: Cell::new(default),
                observers: ObserverSet::new(),
            }),
        }
    }

    /// Build from validated config. An unparseable configured locale falls
    /// back to English; validation rejects that config before it gets here.
    pub fn from_config(config: &UiConfig) -> Self {
        let locale = config.default_locale().parse().unwrap_or_else(|e| {
            tracing::warn!(event = "locale.invalid_default", error = %e);
            Locale::En
        });
        Self::new(locale)
    }

    pub fn get(&self) -> Locale {
        self.inner.current.get()
    }

    /// Switch the active locale and notify observers synchronously.
    ///
    /// Setting the current value again is a no-op - no notification, no
    /// state change.
    pub fn set(&self, locale: Locale) {
        if self.inner.current.get() == locale {
            tracing::trace!(event = "locale.set.unchanged", locale = %locale);
            return;
        }
        self.inner.current.set(locale);
        tracing::debug!(event = "locale.changed", locale = %locale);
        self.inner.observers.notify(locale);
    }

    /// Notify `observer` on every locale change.
    pub fn observe(&self, observer: impl Fn(Locale) + 'static) -> Subscription {
        let id = self.inner.observers.insert(Rc::new(observer));
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.observers.remove(id);
            }
        })
    }
}

impl Clone for LocaleStore {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_reads_track_latest_set() {
        let store = LocaleStore::new(Locale::En);
        assert_eq!(store.get(), Locale::En);
        store.set(Locale::Et);
        assert_eq!(store.get(), Locale::Et);
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let store = LocaleStore::new(Locale::En);
        let reader = store.clone();
        store.set(Locale::Et);
        assert_eq!(reader.get(), Locale::Et);
    }

    #[test]
    fn test_observers_notified_synchronously() {
        let store = LocaleStore::new(Locale::En);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.observe(move |locale| sink.borrow_mut().push(locale));

        store.set(Locale::Et);
        store.set(Locale::En);

        assert_eq!(*seen.borrow(), vec![Locale::Et, Locale::En]);
    }

    #[test]
    fn test_same_value_set_emits_no_duplicate_notification() {
        let store = LocaleStore::new(Locale::En);
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let _sub = store.observe(move |_| counter.set(counter.get() + 1));

        store.set(Locale::Et);
        store.set(Locale::Et);

        assert_eq!(calls.get(), 1);
        assert_eq!(store.get(), Locale::Et);
    }

    #[test]
    fn test_dropped_observer_stops_receiving() {
        let store = LocaleStore::new(Locale::En);
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let sub = store.observe(move |_| counter.set(counter.get() + 1));

        store.set(Locale::Et);
        drop(sub);
        store.set(Locale::En);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_from_config_uses_configured_default() {
        let config = UiConfig {
            default_locale: Some("et".to_string()),
        };
        assert_eq!(LocaleStore::from_config(&config).get(), Locale::Et);
    }

    #[test]
    fn test_from_config_falls_back_on_garbage() {
        let config = UiConfig {
            default_locale: Some("xx".to_string()),
        };
        assert_eq!(LocaleStore::from_config(&config).get(), Locale::En);
    }
}
