//! Coalesced retargeting for high-frequency writes.
//!
//! Every call to [`QuickTo::retarget`] replaces the running tween with a
//! fresh one from the current value to the new target, so a burst of wheel
//! events produces one smooth glide instead of a queue of animations.

use folio_core::Millis;

use crate::animation::AnimationSpec;
use crate::tween::Tween;

#[derive(Debug, Clone)]
pub struct QuickTo {
    spec: AnimationSpec,
    active: Option<(Tween<f32>, Millis)>,
}

impl QuickTo {
    pub fn new(spec: AnimationSpec) -> Self {
        Self { spec, active: None }
    }

    pub fn retarget(&mut self, current: f32, target: f32, now: Millis) {
        self.active = Some((Tween::new(current, target, self.spec), now));
    }

    pub fn target(&self) -> Option<f32> {
        self.active.as_ref().map(|(tween, _)| *tween.to())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current value of the glide, or `None` when idle. The tween is dropped
    /// once it reports its end value.
    pub fn sample(&mut self, now: Millis) -> Option<f32> {
        let (tween, started) = self.active.as_ref()?;
        let elapsed = (now - started).max(0.0);
        let value = tween.value_at(elapsed);
        if tween.is_finished_at(elapsed) {
            self.active = None;
        }
        Some(value)
    }

    pub fn kill(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
#[path = "tests/quick_to_tests.rs"]
mod tests;
