//! # virge-platform
//!
//! Shared vocabulary and host interface surface for VIRGE.
//!
//! The coordination logic in `virge-core` never talks to a browser (or any
//! other host) directly. Everything it consumes - lifecycle events, a
//! repeating timer, session-scoped storage, navigation query parameters,
//! the full-reload facility - arrives through the traits defined here, and
//! everything it hands back out rides on the [`Subscription`] teardown
//! guard.
//!
//! The [`memory`] module provides single-threaded in-memory implementations
//! of every trait, used by the core test suite and by embedders that drive
//! the layer headlessly.

pub mod events;
pub mod memory;
pub mod subscription;
pub mod traits;
pub mod types;

pub use events::{EventKind, LifecycleEvent};
pub use memory::{MemoryHost, MemorySessionStore, QueryString, RecordingReloader};
pub use subscription::{ObserverSet, Subscription};
pub use traits::{
    EventHandler, IntervalScheduler, LifecycleEvents, NavigationQuery, PageReloader, SessionStore,
    StoreError, TickHandler,
};
pub use types::{Locale, LocaleParseError, SessionMode};
