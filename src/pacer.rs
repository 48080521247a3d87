use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Paces outbound requests to a fixed ceiling rate.
///
/// Every caller of an external service goes through `wait` before sending,
/// which suspends until the next tick of the underlying interval. The first
/// tick is a full period after construction, so even the very first request
/// is delayed — the ceiling holds regardless of how many pages or chunks a
/// run fetches.
pub struct RequestPacer {
    interval: Interval,
}

impl RequestPacer {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        // If a slow response eats past a tick, delay rather than burst
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// Suspend until the next request slot.
    pub async fn wait(&mut self) {
        self.interval.tick().await;
    }
}
