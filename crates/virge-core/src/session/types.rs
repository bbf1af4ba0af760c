use virge_platform::SessionMode;

/// Terminal state of one bootstrap run.
///
/// The bootstrap state machine is `unchecked → DecidedNormal`,
/// `unchecked → DecidedDemo`, or `unchecked → DemoPendingReload`; the last
/// transition's entry action is the one-time reload request, after which the
/// decision logic re-runs from a clean slate and lands on `DecidedDemo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapDecision {
    /// No demo signal, no demo record: run normally.
    DecidedNormal,
    /// A demo record exists for this session: stay in demo mode.
    DecidedDemo,
    /// Demo was just recorded and a full reload requested. The current page
    /// instance is on its way out; callers should stop initializing.
    DemoPendingReload,
}

impl BootstrapDecision {
    /// The session mode this decision settles on (after any pending reload).
    pub fn mode(&self) -> SessionMode {
        match self {
            BootstrapDecision::DecidedNormal => SessionMode::Normal,
            BootstrapDecision::DecidedDemo | BootstrapDecision::DemoPendingReload => {
                SessionMode::Demo
            }
        }
    }

    pub fn reload_requested(&self) -> bool {
        matches!(self, BootstrapDecision::DemoPendingReload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_mode_mapping() {
        assert_eq!(BootstrapDecision::DecidedNormal.mode(), SessionMode::Normal);
        assert_eq!(BootstrapDecision::DecidedDemo.mode(), SessionMode::Demo);
        assert_eq!(
            BootstrapDecision::DemoPendingReload.mode(),
            SessionMode::Demo
        );
    }

    #[test]
    fn test_only_pending_reload_requests_reload() {
        assert!(BootstrapDecision::DemoPendingReload.reload_requested());
        assert!(!BootstrapDecision::DecidedNormal.reload_requested());
        assert!(!BootstrapDecision::DecidedDemo.reload_requested());
    }
}
