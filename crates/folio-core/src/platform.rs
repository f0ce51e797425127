//! Platform clock abstraction.
//!
//! The deck never reads the wall clock itself. Hosts own a [`Clock`] and
//! pass `now` into every operation, which keeps the state machine
//! deterministic under test.

use std::cell::Cell;

use web_time::Instant;

use crate::Millis;

/// Provides timing information for the runtime.
pub trait Clock {
    /// Returns the current time in milliseconds since the clock's origin.
    fn now_millis(&self) -> Millis;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Millis) -> Millis {
        (self.now_millis() - since).max(0.0)
    }
}

/// Monotonic clock backed by `web_time::Instant`.
///
/// On wasm this resolves to `performance.now()`, natively to the OS clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
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
    fn now_millis(&self) -> Millis {
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}

/// Hand-driven clock for headless runs and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock forward. Negative steps are ignored so time stays monotonic.
    pub fn advance(&self, millis: Millis) -> Millis {
        let next = self.now.get() + millis.max(0.0);
        self.now.set(next);
        next
    }

    pub fn set(&self, now: Millis) {
        if now < self.now.get() {
            log::warn!(
                "ManualClock moved backwards ({} -> {}), ignoring",
                self.now.get(),
                now
            );
            return;
        }
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> Millis {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
