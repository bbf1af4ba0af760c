//! End-to-end lifecycle scenarios against the in-memory host.
//!
//! Each test walks a full "page load" the way the embedding shell would:
//! bootstrap first (it may request a reload and short-circuit), then mount
//! the refresh coordinator and locale store, then feed lifecycle events.

use std::rc::Rc;

use virge_config::Config;
use virge_core::{
    BootstrapDecision, LocaleStore, RefreshCoordinator, ReloadHandle, SessionModeBootstrapper,
};
use virge_platform::{
    LifecycleEvent, Locale, MemoryHost, MemorySessionStore, QueryString, RecordingReloader,
    SessionMode,
};

#[test]
fn generation_tracks_lifecycle_events_until_unmount() {
    let host = MemoryHost::new();
    let config = Config::default();
    let coordinator =
        RefreshCoordinator::mount(&host, &host, config.refresh.poll_interval());
    assert_eq!(coordinator.generation(), 0);

    host.emit(&LifecycleEvent::VisibilityChanged { visible: true });
    assert_eq!(coordinator.generation(), 1);

    host.emit(&LifecycleEvent::PageShow { persisted: true });
    assert_eq!(coordinator.generation(), 2);

    coordinator.unmount();
    host.emit(&LifecycleEvent::Online);
    assert_eq!(coordinator.generation(), 2);
}

#[test]
fn mixed_event_burst_counts_every_qualifying_delivery() {
    let host = MemoryHost::new();
    let coordinator = RefreshCoordinator::mount(&host, &host, virge_core::POLL_INTERVAL);

    // A resume-from-suspend burst: restore, visibility, reconnect, then the
    // poll timer - four qualifying deliveries plus two that are not.
    host.emit(&LifecycleEvent::PageShow { persisted: true });
    host.emit(&LifecycleEvent::VisibilityChanged { visible: true });
    host.emit(&LifecycleEvent::VisibilityChanged { visible: false });
    host.emit(&LifecycleEvent::Online);
    host.emit(&LifecycleEvent::PageShow { persisted: false });
    host.fire_intervals();

    assert_eq!(coordinator.generation(), 4);
}

#[test]
fn demo_bootstrap_reloads_once_across_page_loads() {
    let config = Config::default();
    let bootstrapper = SessionModeBootstrapper::from_config(&config.session);
    // Session storage survives the reload; the reloader and handle do not.
    let store = MemorySessionStore::new();
    let reloader = Rc::new(RecordingReloader::new());

    // First load: ?demo=1, nothing recorded yet.
    let reload = ReloadHandle::new(reloader.clone());
    let decision = bootstrapper.bootstrap(&QueryString::parse("?demo=1"), &store, &reload);
    assert_eq!(decision, BootstrapDecision::DemoPendingReload);
    assert_eq!(reloader.reload_count(), 1);

    // Second load (after the reload): same query, record now present.
    let reload = ReloadHandle::new(reloader.clone());
    let decision = bootstrapper.bootstrap(&QueryString::parse("?demo=1"), &store, &reload);
    assert_eq!(decision, BootstrapDecision::DecidedDemo);
    assert_eq!(reloader.reload_count(), 1);

    // Later navigation within the session, demo signal gone: mode sticks.
    let reload = ReloadHandle::new(reloader.clone());
    let decision = bootstrapper.bootstrap(&QueryString::parse("?report=7"), &store, &reload);
    assert_eq!(decision, BootstrapDecision::DecidedDemo);
    assert_eq!(bootstrapper.current_mode(&store), SessionMode::Demo);
    assert_eq!(reloader.reload_count(), 1);
}

#[test]
fn normal_page_load_brings_up_all_components() {
    let config = Config::default();
    let host = MemoryHost::new();
    let store = MemorySessionStore::new();
    let reloader = Rc::new(RecordingReloader::new());
    let reload = ReloadHandle::new(reloader.clone());

    // Bootstrap first; no demo signal means everything else proceeds.
    let bootstrapper = SessionModeBootstrapper::from_config(&config.session);
    let decision = bootstrapper.bootstrap(&QueryString::parse("?report=7"), &store, &reload);
    assert_eq!(decision, BootstrapDecision::DecidedNormal);
    assert!(!decision.reload_requested());

    let coordinator =
        RefreshCoordinator::mount(&host, &host, config.refresh.poll_interval());
    let locale = LocaleStore::from_config(&config.ui);
    assert_eq!(locale.get(), Locale::En);

    // The data layer re-fetches per generation; the header re-renders per
    // locale change. Simulate both consumers.
    let fetches = Rc::new(std::cell::Cell::new(0u32));
    let counter = fetches.clone();
    let _refetch = coordinator.observe(move |_| counter.set(counter.get() + 1));

    host.emit(&LifecycleEvent::VisibilityChanged { visible: true });
    host.fire_intervals();
    locale.set(Locale::Et);

    assert_eq!(coordinator.generation(), 2);
    assert_eq!(fetches.get(), 2);
    assert_eq!(locale.get(), Locale::Et);
    assert_eq!(reloader.reload_count(), 0);

    // Teardown: the host holds nothing once the view unmounts.
    coordinator.unmount();
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.interval_count(), 0);
}
