//! Timing boundary: a monotonic millisecond clock.
//!
//! Cooldowns and spawn timers compare against `now_ms` values supplied by the
//! caller. [`SystemClock`] reads the real monotonic clock; [`ManualClock`] is
//! advanced by hand for tests and fixed-step headless runs.

use std::time::Instant;

/// Source of monotonic milliseconds.
pub trait Clock {
    /// Milliseconds since the clock's origin. Never decreases.
    fn now_ms(&self) -> u64;
}

/// Monotonic clock backed by [`Instant`], starting at 0 when created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    /// Creates a clock reading `start_ms`.
    #[must_use]
    pub const fn starting_at(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    /// Moves the clock forward by `ms`.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    /// Sets the clock to `ms` if that is not in the past.
    pub fn set(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
