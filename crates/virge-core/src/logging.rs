//! Logging initialization for embedders and dev harnesses.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// Filter comes from the environment (`RUST_LOG`). Safe to call more than
/// once - later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
