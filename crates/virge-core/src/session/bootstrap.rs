use virge_config::SessionConfig;
use virge_platform::{NavigationQuery, SessionMode, SessionStore};

use crate::reload::ReloadHandle;
use crate::session::types::BootstrapDecision;

/// One-shot demo-mode decision for a page load.
///
/// Run before anything else initializes: a `DemoPendingReload` result means
/// the page is being replaced and callers should stop. The session record
/// makes the decision idempotent across loads - repeated loads with the
/// demo signal never reload more than once per session - and the
/// [`ReloadHandle`] independently suppresses duplicates within one load.
pub struct SessionModeBootstrapper {
    demo_param: String,
    storage_key: String,
}

impl SessionModeBootstrapper {
    pub fn new() -> Self {
        Self::from_config(&SessionConfig::default())
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            demo_param: config.demo_param().to_string(),
            storage_key: config.mode_storage_key().to_string(),
        }
    }

    /// Decide the session mode for this page load.
    ///
    /// Writes the session record and requests a reload only on the first
    /// load that carries the demo signal. Later loads - with or without the
    /// signal - take no action. A navigation without the signal never
    /// clears an existing demo record; exiting demo mode means ending the
    /// tab session.
    pub fn bootstrap(
        &self,
        query: &dyn NavigationQuery,
        store: &dyn SessionStore,
        reload: &ReloadHandle,
    ) -> BootstrapDecision {
        let requested = self.demo_requested(query);
        let recorded = self.current_mode(store) == SessionMode::Demo;

        match (requested, recorded) {
            (true, false) => {
                if let Err(e) = store.set(&self.storage_key, SessionMode::Demo.as_str()) {
                    // Without the record the reload repeats on every load
                    // carrying the demo signal. Tolerable; the alternative
                    // is a session stuck half-switched.
                    tracing::warn!(
                        event = "session.mode.record_failed",
                        key = %self.storage_key,
                        error = %e,
                    );
                }
                tracing::info!(
                    event = "session.mode.demo_entered",
                    param = %self.demo_param
                );
                reload.request();
                BootstrapDecision::DemoPendingReload
            }
            (true, true) => {
                tracing::debug!(event = "session.mode.demo_already_recorded");
                BootstrapDecision::DecidedDemo
            }
            (false, true) => BootstrapDecision::DecidedDemo,
            (false, false) => BootstrapDecision::DecidedNormal,
        }
    }

    /// The mode recorded for this session, `Normal` when nothing is
    /// recorded.
    pub fn current_mode(&self, store: &dyn SessionStore) -> SessionMode {
        match store.get(&self.storage_key) {
            Some(value) if value == SessionMode::Demo.as_str() => SessionMode::Demo,
            _ => SessionMode::Normal,
        }
    }

    /// A bare `demo` parameter, `demo=1`, or `demo=true` (any case)
    /// requests demo mode. Other values are ignored rather than treated as
    /// present, so `demo=0` does what it reads like.
    fn demo_requested(&self, query: &dyn NavigationQuery) -> bool {
        query.param(&self.demo_param).is_some_and(|value| {
            value.is_empty() || value == "1" || value.eq_ignore_ascii_case("true")
        })
    }
}

impl Default for SessionModeBootstrapper {
    fn default() -> Self {
        Self::new()
    }
}
