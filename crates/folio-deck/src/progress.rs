//! Progress model: how far a gesture has travelled toward a neighbour.
//!
//! A raw fraction of `accumulated / threshold` is clamped to [-1, 1] when a
//! neighbour exists in that direction. At either end of the deck it is
//! scaled down and clamped to a small rubber-band range instead, so the
//! deck gives a little but can never commit past the edge.

use crate::slide::SlideSet;
use crate::tuning::SlideTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices (content moves up).
    Forward,
    Backward,
}

impl Direction {
    pub fn of(fraction: f32) -> Self {
        if fraction >= 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Unclamped `accumulated / threshold`.
    pub raw: f32,
    /// Displacement fraction actually shown.
    pub fraction: f32,
    pub direction: Direction,
    pub neighbor: Option<usize>,
}

impl Progress {
    pub fn resolve(raw: f32, current: usize, slides: &SlideSet, tuning: &SlideTuning) -> Self {
        let direction = Direction::of(raw);
        let neighbor = slides.neighbor(current, direction.is_forward());
        let fraction = if neighbor.is_some() {
            raw.clamp(-1.0, 1.0)
        } else {
            (raw * tuning.rubber_band_scale)
                .clamp(-tuning.rubber_band_limit, tuning.rubber_band_limit)
        };
        Self {
            raw,
            fraction,
            direction,
            neighbor,
        }
    }

    /// Neighbour to commit to, once the gesture has crossed the threshold
    /// toward one that exists.
    pub fn commit_target(&self) -> Option<usize> {
        self.neighbor.filter(|_| self.raw.abs() >= 1.0)
    }

    pub fn amount(&self) -> f32 {
        self.fraction.abs().min(1.0)
    }

    /// Preview opacity of the slide being left.
    pub fn current_opacity(&self, tuning: &SlideTuning) -> f32 {
        (1.0 - self.amount() * tuning.preview_fade_out_slope).max(tuning.reveal_floor)
    }

    /// Preview opacity of the neighbour, when there is one.
    pub fn neighbor_opacity(&self, tuning: &SlideTuning) -> Option<f32> {
        self.neighbor.map(|_| {
            (tuning.preview_fade_in_base + self.amount() * tuning.preview_fade_in_slope).min(1.0)
        })
    }
}

/// Deck translation for `index` displaced by `fraction` of a viewport.
pub fn deck_position(index: usize, fraction: f32, viewport_height: f32) -> f32 {
    -(index as f32) * viewport_height - fraction * viewport_height
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
