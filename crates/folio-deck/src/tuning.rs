//! Slide tuning: every speed, threshold and opacity the deck uses.
//!
//! Durations are in milliseconds, distances in CSS pixels, offsets in
//! percent of the element's own height.

use folio_animation::{AnimationSpec, Easing};

/// User preference for motion, as reported by `prefers-reduced-motion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideEasing {
    pub drag: Easing,
    pub deck: Easing,
    pub fade_out: Easing,
    pub reveal_in: Easing,
    pub snap: Easing,
    /// Deck easing when motion is reduced.
    pub reduced_deck: Easing,
}

impl Default for SlideEasing {
    fn default() -> Self {
        Self {
            drag: Easing::Power2Out,
            deck: Easing::Power3InOut,
            fade_out: Easing::Power1Out,
            reveal_in: Easing::Power2Out,
            snap: Easing::Power2Out,
            reduced_deck: Easing::Power2Out,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTuning {
    /// Deck smoothing while a gesture previews.
    pub drag_smooth_ms: u64,
    /// Base deck duration between slides.
    pub deck_base_ms: u64,
    pub deck_min_ms: u64,
    pub deck_max_ms: u64,
    /// Milliseconds shaved off the deck duration per unit of gesture velocity.
    pub velocity_weight_ms: f32,
    pub velocity_cap: f32,
    pub snap_deck_ms: u64,
    pub snap_reveal_ms: u64,
    pub fade_out_ms: u64,
    pub reveal_in_ms: u64,
    pub reduced_fade_out_ms: u64,
    pub reduced_reveal_in_ms: u64,
    /// Quiet wheel period after which an uncommitted preview snaps back.
    pub wheel_idle_ms: u64,
    /// Quiet period that ends a physical gesture once animation has settled.
    pub gesture_unlock_ms: u64,
    /// Playback rate applied when input keeps arriving during a transition.
    pub accelerated_time_scale: f64,
    pub threshold_floor_px: f32,
    pub threshold_viewport_ratio: f32,
    pub rubber_band_scale: f32,
    pub rubber_band_limit: f32,
    /// Opacity of content on slides that are not in view.
    pub reveal_floor: f32,
    pub preview_fade_out_slope: f32,
    pub preview_fade_in_base: f32,
    pub preview_fade_in_slope: f32,
    pub commit_fade_out_opacity: f32,
    pub commit_reveal_min_opacity: f32,
    pub commit_lift_percent: f32,
    pub swipe_deadzone_px: f32,
    pub swipe_axis_ratio: f32,
    pub easing: SlideEasing,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            drag_smooth_ms: 280,
            deck_base_ms: 650,
            deck_min_ms: 450,
            deck_max_ms: 950,
            velocity_weight_ms: 120.0,
            velocity_cap: 1.2,
            snap_deck_ms: 450,
            snap_reveal_ms: 350,
            fade_out_ms: 100,
            reveal_in_ms: 100,
            reduced_fade_out_ms: 400,
            reduced_reveal_in_ms: 500,
            wheel_idle_ms: 120,
            gesture_unlock_ms: 50,
            accelerated_time_scale: 1.75,
            threshold_floor_px: 160.0,
            threshold_viewport_ratio: 0.22,
            rubber_band_scale: 0.4,
            rubber_band_limit: 0.35,
            reveal_floor: 0.08,
            preview_fade_out_slope: 0.92,
            preview_fade_in_base: 0.18,
            preview_fade_in_slope: 0.82,
            commit_fade_out_opacity: 0.1,
            commit_reveal_min_opacity: 0.2,
            commit_lift_percent: 10.0,
            swipe_deadzone_px: 6.0,
            swipe_axis_ratio: 1.25,
            easing: SlideEasing::default(),
        }
    }
}

impl SlideTuning {
    /// Accumulated input needed to commit: `max(floor, ratio * viewport)`.
    pub fn threshold(&self, viewport_height: f32) -> f32 {
        let scaled = (viewport_height * self.threshold_viewport_ratio).floor();
        self.threshold_floor_px.max(scaled)
    }

    /// Deck duration for a committed transition. Faster gestures are shorter,
    /// bounded by `deck_min_ms..=deck_max_ms`.
    pub fn commit_duration_ms(&self, velocity: f32, motion: MotionPreference) -> u64 {
        if motion.is_reduced() {
            return self.deck_base_ms;
        }
        let speed = velocity.abs().min(self.velocity_cap);
        let raw = self.deck_base_ms as f32 - speed * self.velocity_weight_ms;
        raw.clamp(self.deck_min_ms as f32, self.deck_max_ms as f32)
            .round() as u64
    }

    pub fn drag_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.drag_smooth_ms, self.easing.drag)
    }

    pub fn deck_spec(&self, velocity: f32, motion: MotionPreference) -> AnimationSpec {
        let easing = if motion.is_reduced() {
            self.easing.reduced_deck
        } else {
            self.easing.deck
        };
        AnimationSpec::tween(self.commit_duration_ms(velocity, motion), easing)
    }

    pub fn fade_out_spec(&self, motion: MotionPreference) -> AnimationSpec {
        let duration = if motion.is_reduced() {
            self.reduced_fade_out_ms
        } else {
            self.fade_out_ms
        };
        AnimationSpec::tween(duration, self.easing.fade_out)
    }

    pub fn reveal_in_spec(&self, motion: MotionPreference) -> AnimationSpec {
        let duration = if motion.is_reduced() {
            self.reduced_reveal_in_ms
        } else {
            self.reveal_in_ms
        };
        AnimationSpec::tween(duration, self.easing.reveal_in)
    }

    pub fn snap_deck_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.snap_deck_ms, self.easing.snap)
    }

    pub fn snap_reveal_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.snap_reveal_ms, self.easing.snap)
    }

    /// Directional offset incoming content starts from; zero under reduced motion.
    pub fn commit_lift(&self, forward: bool, motion: MotionPreference) -> f32 {
        if motion.is_reduced() {
            0.0
        } else if forward {
            self.commit_lift_percent
        } else {
            -self.commit_lift_percent
        }
    }
}

#[cfg(test)]
#[path = "tests/tuning_tests.rs"]
mod tests;
