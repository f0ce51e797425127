//! Single-property tween.

use crate::animation::{AnimationSpec, Lerp};

/// Interpolates from `from` to `to` following an [`AnimationSpec`].
///
/// A tween is a pure function of elapsed time; whoever owns it decides how
/// elapsed time is measured (scaled, paused, etc).
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T: Lerp + Clone> {
    from: T,
    to: T,
    spec: AnimationSpec,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, spec: AnimationSpec) -> Self {
        Self { from, to, spec }
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Linear progress in [0, 1] after `elapsed` milliseconds.
    pub fn linear_progress(&self, elapsed: f64) -> f32 {
        let delay = self.spec.delay_millis as f64;
        if elapsed < delay {
            return 0.0;
        }
        let duration = (self.spec.duration_millis as f64).max(1.0);
        ((elapsed - delay) / duration).clamp(0.0, 1.0) as f32
    }

    /// Eased value after `elapsed` milliseconds. Lands exactly on `to` at the end.
    pub fn value_at(&self, elapsed: f64) -> T {
        let linear = self.linear_progress(elapsed);
        if linear >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.spec.easing.transform(linear))
    }

    pub fn is_finished_at(&self, elapsed: f64) -> bool {
        elapsed >= self.spec.total_millis()
    }
}
