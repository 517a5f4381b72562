//! Time source for the poll loop.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Clock seam for the poll loop. Injectable so tests can run many cycles
/// without real time passing.
#[allow(async_fn_in_trait)]
pub trait Clock {
    /// Current Unix time in seconds.
    fn now(&self) -> i64;

    /// Pauses the loop for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Wall clock and real sleeping.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or_default()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
