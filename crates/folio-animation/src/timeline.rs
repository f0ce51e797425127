//! Grouped tweens with a shared clock.
//!
//! A [`Timeline`] plays several property tweens in parallel against one
//! playhead. The playhead advances by host time multiplied by the time
//! scale, so raising the scale mid-flight speeds up only the remainder.
//! Dropping a timeline kills it; there is no detached playback.

use folio_core::Millis;

use crate::animation::AnimationSpec;
use crate::tween::Tween;

#[derive(Debug, Clone)]
struct Track<K> {
    key: K,
    tween: Tween<f32>,
}

#[derive(Debug, Clone)]
pub struct Timeline<K> {
    tracks: Vec<Track<K>>,
    last_tick: Millis,
    playhead: f64,
    time_scale: f64,
}

impl<K: Copy> Timeline<K> {
    /// Creates an empty timeline whose playhead starts at `now`.
    pub fn new(now: Millis) -> Self {
        Self {
            tracks: Vec::new(),
            last_tick: now,
            playhead: 0.0,
            time_scale: 1.0,
        }
    }

    /// Adds a tween of `key` from `from` to `to`, starting at position zero.
    pub fn to(mut self, key: K, from: f32, to: f32, spec: AnimationSpec) -> Self {
        self.add(key, Tween::new(from, to, spec));
        self
    }

    pub fn add(&mut self, key: K, tween: Tween<f32>) {
        self.tracks.push(Track { key, tween });
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Sets the playback rate. Non-positive or non-finite rates are rejected.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.time_scale = scale;
        } else {
            log::warn!("ignoring invalid timeline time scale {scale}");
        }
    }

    /// Raises the playback rate to at least `scale`; never slows down.
    pub fn accelerate(&mut self, scale: f64) {
        if scale > self.time_scale {
            self.set_time_scale(scale);
        }
    }

    /// Unscaled length of the longest track.
    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(|track| track.tween.spec().total_millis())
            .fold(0.0, f64::max)
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn is_finished(&self) -> bool {
        self.playhead >= self.duration()
    }

    /// Moves the playhead to host time `now` and reports every track's value.
    ///
    /// Returns `true` once all tracks have reached their end values.
    pub fn advance(&mut self, now: Millis, mut apply: impl FnMut(K, f32)) -> bool {
        let delta = (now - self.last_tick).max(0.0);
        self.last_tick = self.last_tick.max(now);
        self.playhead = (self.playhead + delta * self.time_scale).min(self.duration());
        for track in &self.tracks {
            apply(track.key, track.tween.value_at(self.playhead));
        }
        self.is_finished()
    }

    /// Jumps straight to the end, reporting final values.
    pub fn finish(&mut self, mut apply: impl FnMut(K, f32)) {
        self.playhead = self.duration();
        for track in &self.tracks {
            apply(track.key, *track.tween.to());
        }
    }
}

#[cfg(test)]
#[path = "tests/timeline_tests.rs"]
mod tests;
