use serde::{Deserialize, Serialize};

/// Platform lifecycle notifications, as delivered by the host.
///
/// Each variant describes _what the host observed_, flags included, not
/// whether anything should happen in response. Qualification (for example,
/// "only a restore with the persisted flag counts") is the consumer's call.
///
/// Events use plain owned data so they can be serialized, logged, and
/// replayed in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// The tab's visibility state changed. `visible` is the state after
    /// the change.
    VisibilityChanged { visible: bool },
    /// A page instance was shown. `persisted` is true when the instance
    /// was restored from the history cache rather than freshly loaded.
    PageShow { persisted: bool },
    /// Network connectivity was regained.
    Online,
}

impl LifecycleEvent {
    /// The subscription channel this event is delivered on.
    pub fn kind(&self) -> EventKind {
        match self {
            LifecycleEvent::VisibilityChanged { .. } => EventKind::Visibility,
            LifecycleEvent::PageShow { .. } => EventKind::PageShow,
            LifecycleEvent::Online => EventKind::Online,
        }
    }
}

/// The three lifecycle event channels a host exposes.
///
/// Subscriptions are per-channel: a listener registered for `Visibility`
/// never sees `Online` deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Visibility,
    PageShow,
    Online,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(
            LifecycleEvent::VisibilityChanged { visible: true }.kind(),
            EventKind::Visibility
        );
        assert_eq!(
            LifecycleEvent::PageShow { persisted: false }.kind(),
            EventKind::PageShow
        );
        assert_eq!(LifecycleEvent::Online.kind(), EventKind::Online);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let events = [
            LifecycleEvent::VisibilityChanged { visible: true },
            LifecycleEvent::VisibilityChanged { visible: false },
            LifecycleEvent::PageShow { persisted: true },
            LifecycleEvent::PageShow { persisted: false },
            LifecycleEvent::Online,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: LifecycleEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }
}
