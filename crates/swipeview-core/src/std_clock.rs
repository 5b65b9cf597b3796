//! Clock implementations.

use crate::Clock;
use std::cell::Cell;

/// Clock backed by the platform's monotonic time.
///
/// Uses `web-time` so the same code runs on wasm targets.
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = web_time::Instant;

    fn now(&self) -> Self::Instant {
        web_time::Instant::now()
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        let elapsed = self.now().saturating_duration_since(since);
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock whose time only moves when told to.
///
/// Instants are plain milliseconds. Headless hosts and tests use this to
/// replay gestures with exact timestamps.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now_millis: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now_millis: Cell::new(start_millis),
        }
    }

    /// Moves time forward and returns the new time.
    pub fn advance(&self, millis: u64) -> u64 {
        let next = self.now_millis.get().saturating_add(millis);
        self.now_millis.set(next);
        next
    }

    /// Jumps to `millis`; time never runs backwards.
    pub fn set(&self, millis: u64) {
        if millis > self.now_millis.get() {
            self.now_millis.set(millis);
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.now_millis.get()
    }
}

impl Clock for ManualClock {
    type Instant = u64;

    fn now(&self) -> u64 {
        self.now_millis.get()
    }

    fn elapsed_millis(&self, since: u64) -> u64 {
        self.now_millis.get().saturating_sub(since)
    }
}
