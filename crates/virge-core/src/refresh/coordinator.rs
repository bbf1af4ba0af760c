use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use virge_platform::{
    EventKind, IntervalScheduler, LifecycleEvent, LifecycleEvents, ObserverSet, Subscription,
};

/// The trigger source that advanced the generation. Logging and observer
/// metadata only - every trigger has the same effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    VisibilityGained,
    PageRestored,
    ConnectivityRegained,
    IntervalElapsed,
}

struct CoordinatorState {
    generation: Cell<u64>,
    active: Cell<bool>,
    observers: ObserverSet<u64>,
}

impl CoordinatorState {
    fn handle(&self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::VisibilityChanged { visible: true } => {
                self.advance(RefreshTrigger::VisibilityGained)
            }
            LifecycleEvent::PageShow { persisted: true } => {
                self.advance(RefreshTrigger::PageRestored)
            }
            LifecycleEvent::Online => self.advance(RefreshTrigger::ConnectivityRegained),
            // Tab going hidden and fresh (non-restored) page shows carry no
            // staleness risk.
            LifecycleEvent::VisibilityChanged { visible: false }
            | LifecycleEvent::PageShow { persisted: false } => {
                tracing::trace!(
                    event = "refresh.trigger.not_qualifying",
                    lifecycle = ?event
                );
            }
        }
    }

    fn advance(&self, trigger: RefreshTrigger) {
        if !self.active.get() {
            // A leaked host handler fired after unmount. The counter is
            // frozen; the stray delivery is dropped.
            tracing::debug!(
                event = "refresh.trigger.after_unmount",
                trigger = ?trigger
            );
            return;
        }

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        tracing::debug!(
            event = "refresh.generation.advanced",
            trigger = ?trigger,
            generation
        );
        self.observers.notify(generation);
    }
}

/// Translates lifecycle signals into a refresh generation counter.
///
/// On mount, four trigger subscriptions are registered together:
/// visibility regained, page restored from history cache, connectivity
/// regained, and a repeating timer. Each qualifying delivery advances the
/// generation by exactly one - triggers are deliberately never debounced or
/// coalesced, accepting an extra refresh cycle over the risk of missing one
/// after a long suspend.
///
/// Consumers treat any change of [`generation`](Self::generation) (not its
/// magnitude) as the refresh signal, either by polling it as a dependency
/// key or through [`observe`](Self::observe).
///
/// [`unmount`](Self::unmount) (or drop) tears down all four registrations
/// and freezes the counter; no increment ever happens afterward, even if a
/// misbehaving host keeps dispatching.
pub struct RefreshCoordinator {
    state: Rc<CoordinatorState>,
    /// Trigger subscription guards. Cleared as one unit on unmount.
    subscriptions: RefCell<Vec<Subscription>>,
}

impl RefreshCoordinator {
    /// Subscribe to all four triggers and start counting from 0.
    pub fn mount(
        events: &dyn LifecycleEvents,
        timer: &dyn IntervalScheduler,
        poll_interval: Duration,
    ) -> Self {
        let state = Rc::new(CoordinatorState {
            generation: Cell::new(0),
            active: Cell::new(true),
            observers: ObserverSet::new(),
        });

        let mut subscriptions = Vec::with_capacity(4);
        for kind in [EventKind::Visibility, EventKind::PageShow, EventKind::Online] {
            let weak = Rc::downgrade(&state);
            subscriptions.push(events.subscribe(
                kind,
                Rc::new(move |event| {
                    if let Some(state) = weak.upgrade() {
                        state.handle(event);
                    }
                }),
            ));
        }
        let weak = Rc::downgrade(&state);
        subscriptions.push(timer.every(
            poll_interval,
            Rc::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.advance(RefreshTrigger::IntervalElapsed);
                }
            }),
        ));

        tracing::debug!(
            event = "refresh.coordinator.mounted",
            poll_interval_secs = poll_interval.as_secs()
        );

        Self {
            state,
            subscriptions: RefCell::new(subscriptions),
        }
    }

    /// Current refresh generation. 0 until the first trigger fires; stays
    /// readable (and frozen) after unmount.
    pub fn generation(&self) -> u64 {
        self.state.generation.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.active.get()
    }

    /// Notify `observer` synchronously on every generation advance.
    pub fn observe(&self, observer: impl Fn(u64) + 'static) -> Subscription {
        let id = self.state.observers.insert(Rc::new(observer));
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.observers.remove(id);
            }
        })
    }

    /// Drop all trigger subscriptions and freeze the counter.
    ///
    /// Idempotent. After this returns, no event - including one delivered
    /// through a leaked host handler - mutates the generation.
    pub fn unmount(&self) {
        if !self.state.active.replace(false) {
            tracing::debug!(event = "refresh.coordinator.already_unmounted");
            return;
        }
        self.subscriptions.borrow_mut().clear();
        tracing::debug!(
            event = "refresh.coordinator.unmounted",
            generation = self.generation()
        );
    }
}

impl Drop for RefreshCoordinator {
    fn drop(&mut self) {
        // Subscriptions drop with the struct; the flag covers handlers a
        // host failed to release.
        self.state.active.set(false);
    }
}
