//! Configuration for the poll loop.

use std::time::Duration;

/// Contract value: the fixed pause between poll cycles.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(600);

/// Configuration for `HomeworkWatcher` (parameters only; the clients are
/// passed to `HomeworkWatcher::new`).
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Pause between poll cycles
    pub retry_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            retry_interval: RETRY_INTERVAL,
        }
    }
}
