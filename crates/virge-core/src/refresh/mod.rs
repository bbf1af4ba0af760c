//! Lifecycle-driven refresh signaling.
//!
//! Translates heterogeneous host lifecycle signals (visibility regained,
//! history-cache restore, connectivity regained, a repeating timer) into a
//! single monotonically increasing refresh generation that data-consuming
//! views re-fetch on.

mod coordinator;

pub use coordinator::{RefreshCoordinator, RefreshTrigger};

use std::time::Duration;

/// Fallback poll interval - lifecycle events handle most refresh
/// opportunities. This catches staleness after a long suspend where no
/// event was delivered.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);
