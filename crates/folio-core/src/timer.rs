//! Cancellable one-shot deadline.
//!
//! Replaces ad-hoc `setTimeout` chains: the owner arms a [`Timer`] when it
//! enters a state that needs a timeout, disarms it on the way out, and polls
//! it with [`Timer::fire`] whenever the host hands in a new timestamp.

use crate::Millis;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Timer {
    deadline: Option<Millis>,
}

impl Timer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer `delay` milliseconds after `now`, replacing any
    /// previously armed deadline.
    pub fn arm(&mut self, now: Millis, delay: Millis) {
        self.deadline = Some(now + delay.max(0.0));
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Returns `true` exactly once when `now` has reached the deadline, and
    /// disarms the timer in the same step.
    pub fn fire(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
