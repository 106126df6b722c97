//! Time source for the animation loop.
//!
//! The loop only needs a monotonic "now" and a way to wait. On hardware that is the embassy
//! time driver ([`EmbassyClock`]); host tests use [`ManualClock`], which moves virtual time
//! forward instead of sleeping.

use embassy_time::{Duration, Instant};

/// Monotonic time plus a delay primitive.
pub trait Clock {
    /// Current monotonic time.
    fn now(&self) -> Instant;

    /// Wait for `duration`.
    async fn sleep(&mut self, duration: Duration);
}

/// [`Clock`] backed by the embassy time driver.
#[cfg(not(feature = "host"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

#[cfg(not(feature = "host"))]
impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&mut self, duration: Duration) {
        embassy_time::Timer::after(duration).await;
    }
}

/// Virtual [`Clock`] for host tests: `sleep` returns at once and advances `now`.
///
/// An optional per-sleep overhead stands in for time spent elsewhere in the loop.
#[cfg(feature = "host")]
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Instant,
    overhead: Duration,
    sleeps: std::vec::Vec<Duration>,
}

#[cfg(feature = "host")]
impl ManualClock {
    /// Start at time zero with no overhead.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Instant::from_ticks(0),
            overhead: Duration::from_ticks(0),
            sleeps: std::vec::Vec::new(),
        }
    }

    /// Add `overhead` on top of every requested sleep.
    #[must_use]
    pub const fn with_overhead(mut self, overhead: Duration) -> Self {
        self.overhead = overhead;
        self
    }

    /// Move time forward without sleeping.
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }

    /// Every duration passed to [`Clock::sleep`], in order.
    #[must_use]
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }
}

#[cfg(feature = "host")]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "host")]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }

    async fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.now += duration + self.overhead;
    }
}
