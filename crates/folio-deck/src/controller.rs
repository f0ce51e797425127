//! Slide deck controller.
//!
//! Maps continuous wheel and touch input onto discrete slide transitions:
//!
//! - While a gesture is below the commit threshold the deck shows a live
//!   preview (deck displaced, content cross-fading). Nothing is committed.
//! - The instant the threshold is crossed toward an existing neighbour the
//!   deck commits, and the gesture is locked so the same physical gesture
//!   cannot trigger a second transition.
//! - The lock only releases after a quiet period measured once the
//!   transition has finished animating.
//! - A gesture that ends short of the threshold snaps back.
//!
//! The current index, active dot and URL fragment change only when a
//! transition completes.

use folio_animation::{QuickTo, Timeline};
use folio_core::{Millis, Timer};

use crate::dots::DotNav;
use crate::gesture::{PointerId, SwipeTracker};
use crate::location::Location;
use crate::progress::{deck_position, Progress};
use crate::render::{DeckFrame, DeckRenderer, RevealStyle};
use crate::slide::SlideSet;
use crate::state::{DeckPhase, DeckProperty, Phase};
use crate::tuning::{MotionPreference, SlideTuning};

/// Height assumed until the host reports a usable viewport.
const FALLBACK_VIEWPORT_HEIGHT: f32 = 800.0;

fn is_usable_height(height: f32) -> bool {
    height.is_finite() && height > 0.0
}

pub struct DeckController<R, L> {
    slides: SlideSet,
    tuning: SlideTuning,
    motion: MotionPreference,
    viewport_height: f32,
    current: usize,
    accumulated_delta: f32,
    gesture_locked: bool,
    phase: Phase,
    deck_y: f32,
    reveals: Vec<RevealStyle>,
    deck_glide: QuickTo,
    idle_timer: Timer,
    unlock_timer: Timer,
    swipe: SwipeTracker,
    dots: DotNav,
    renderer: R,
    location: L,
}

impl<R: DeckRenderer, L: Location> DeckController<R, L> {
    /// Builds the deck and positions it on the slide named by the URL
    /// fragment (or the first slide), without animating. The fragment is
    /// normalized to the resolved slide's canonical form.
    pub fn new(
        slides: SlideSet,
        tuning: SlideTuning,
        motion: MotionPreference,
        viewport_height: f32,
        renderer: R,
        location: L,
    ) -> Self {
        let viewport_height = if is_usable_height(viewport_height) {
            viewport_height
        } else {
            log::warn!(
                "invalid viewport height {viewport_height}, assuming {FALLBACK_VIEWPORT_HEIGHT}"
            );
            FALLBACK_VIEWPORT_HEIGHT
        };
        let fragment = location.fragment();
        let current = slides.index_of(&fragment).unwrap_or(0);
        let reveals = vec![RevealStyle::visible(); slides.len()];
        let dots = DotNav::from_slides(&slides, current);

        let mut deck = Self {
            deck_glide: QuickTo::new(tuning.drag_spec()),
            slides,
            tuning,
            motion,
            viewport_height,
            current,
            accumulated_delta: 0.0,
            gesture_locked: false,
            phase: Phase::Idle,
            deck_y: 0.0,
            reveals,
            idle_timer: Timer::new(),
            unlock_timer: Timer::new(),
            swipe: SwipeTracker::new(),
            dots,
            renderer,
            location,
        };

        deck.settle();
        deck.renderer.set_active_dot(current);
        deck.render();
        deck.sync_location();
        log::info!(
            "deck ready: {} slides, starting at {} ({:?} motion)",
            deck.slides.len(),
            current,
            motion
        );
        deck
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase.view()
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    pub fn is_gesture_locked(&self) -> bool {
        self.gesture_locked
    }

    pub fn accumulated_delta(&self) -> f32 {
        self.accumulated_delta
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn threshold(&self) -> f32 {
        self.tuning.threshold(self.viewport_height)
    }

    pub fn deck_y(&self) -> f32 {
        self.deck_y
    }

    pub fn reveals(&self) -> &[RevealStyle] {
        &self.reveals
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn tuning(&self) -> &SlideTuning {
        &self.tuning
    }

    pub fn dots(&self) -> &DotNav {
        &self.dots
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Playback rate of the in-flight transition, if any.
    pub fn time_scale(&self) -> Option<f64> {
        self.phase.timeline().map(Timeline::time_scale)
    }

    /// True while an animation, the preview glide, or a timer is live.
    pub fn needs_frame(&self) -> bool {
        self.phase.is_animating()
            || self.deck_glide.is_active()
            || self.idle_timer.is_armed()
            || self.unlock_timer.is_armed()
    }

    /// Advances animations and due timers to `now`.
    pub fn tick(&mut self, now: Millis) {
        let mut dirty = false;
        if let Some(y) = self.deck_glide.sample(now) {
            self.deck_y = y;
            dirty = true;
        }

        let finished = {
            let Self {
                phase,
                deck_y,
                reveals,
                ..
            } = self;
            match phase.timeline_mut() {
                Some(timeline) => {
                    dirty = true;
                    timeline.advance(now, |key, value| {
                        apply_property(deck_y, reveals, key, value)
                    })
                }
                None => false,
            }
        };

        if finished {
            self.complete_transition();
        } else if dirty {
            self.render();
        }

        self.run_timers(now);
    }

    /// Wheel input. `delta_y` is positive when scrolling toward later slides.
    pub fn wheel(&mut self, delta_y: f32, now: Millis) {
        self.tick(now);
        if self.phase.is_animating() {
            self.accelerate_transition();
            self.arm_unlock(now);
            return;
        }
        if self.gesture_locked {
            self.arm_unlock(now);
            return;
        }

        self.accumulated_delta += delta_y;
        let raw = self.accumulated_delta / self.threshold();
        let progress = Progress::resolve(raw, self.current, &self.slides, &self.tuning);

        if let Some(next) = progress.commit_target() {
            self.idle_timer.disarm();
            self.accumulated_delta = 0.0;
            self.lock_gesture(now);
            self.commit_to(next, raw.abs(), now);
            return;
        }

        self.apply_progress(progress, now);
        self.idle_timer.arm(now, self.tuning.wheel_idle_ms as Millis);
    }

    pub fn pointer_down(&mut self, pointer: Option<PointerId>, x: f32, y: f32, now: Millis) {
        self.tick(now);
        self.swipe.begin(pointer, x, y);
        self.idle_timer.disarm();
    }

    pub fn pointer_move(&mut self, pointer: Option<PointerId>, x: f32, y: f32, now: Millis) {
        self.tick(now);
        if !self.swipe.accepts(pointer) {
            return;
        }
        if self.phase.is_animating() || self.gesture_locked {
            self.swipe.follow(x, y);
            self.accelerate_transition();
            self.arm_unlock(now);
            return;
        }

        let Some(travel) = self.swipe.track(
            x,
            y,
            self.tuning.swipe_deadzone_px,
            self.tuning.swipe_axis_ratio,
        ) else {
            return;
        };

        let raw = travel / self.threshold();
        let progress = Progress::resolve(raw, self.current, &self.slides, &self.tuning);
        if let Some(next) = progress.commit_target() {
            self.lock_gesture(now);
            self.commit_to(next, raw.abs(), now);
            return;
        }
        self.apply_progress(progress, now);
    }

    /// Pointer release or cancellation. An uncommitted preview snaps back.
    pub fn pointer_up(&mut self, pointer: Option<PointerId>, now: Millis) {
        self.tick(now);
        if !self.swipe.accepts(pointer) {
            return;
        }
        if !self.gesture_locked && matches!(self.phase, Phase::Previewing { .. }) {
            self.accumulated_delta = 0.0;
            self.snap_back(now);
        }
        self.swipe.end();
    }

    /// Programmatic navigation. Out of range, redundant, or mid-animation
    /// requests are ignored.
    pub fn go_to_index(&mut self, index: usize, now: Millis) {
        self.tick(now);
        if index >= self.slides.len() || index == self.current || self.phase.is_animating() {
            log::debug!(
                "ignoring navigation to {index} (current {}, animating {})",
                self.current,
                self.phase.is_animating()
            );
            return;
        }
        self.commit_to(index, 0.0, now);
    }

    pub fn go_to_id(&mut self, id: &str, now: Millis) {
        match self.slides.index_of(id) {
            Some(index) => self.go_to_index(index, now),
            None => log::debug!("ignoring navigation to unknown slide `{id}`"),
        }
    }

    /// Re-measures the viewport and re-positions the deck without animating.
    ///
    /// A live preview is abandoned because its baseline was measured against
    /// the old height; a running transition is finished on the spot.
    pub fn resize(&mut self, viewport_height: f32, now: Millis) {
        self.tick(now);
        if !is_usable_height(viewport_height) {
            log::warn!("ignoring resize to invalid viewport height {viewport_height}");
            return;
        }
        self.viewport_height = viewport_height;

        match self.phase.view() {
            DeckPhase::Committing { .. } | DeckPhase::SnappingBack => {
                self.finish_transition();
                return;
            }
            DeckPhase::Previewing { .. } => {
                log::debug!("resize during preview, abandoning gesture");
                self.accumulated_delta = 0.0;
                self.idle_timer.disarm();
                self.phase = Phase::Idle;
            }
            DeckPhase::Idle => {}
        }
        self.deck_glide.kill();
        self.settle();
        self.render();
    }

    fn apply_progress(&mut self, progress: Progress, now: Millis) {
        self.phase = Phase::Idle;
        let target = deck_position(self.current, progress.fraction, self.viewport_height);
        self.deck_glide.retarget(self.deck_y, target, now);

        self.reveals[self.current].opacity = progress.current_opacity(&self.tuning);
        if let (Some(neighbor), Some(opacity)) =
            (progress.neighbor, progress.neighbor_opacity(&self.tuning))
        {
            self.reveals[neighbor].opacity = opacity;
        }

        self.phase = Phase::Previewing {
            fraction: progress.fraction,
        };
        self.render();
    }

    fn commit_to(&mut self, to: usize, velocity: f32, now: Millis) {
        if let Phase::Committing { to: heading, .. } = self.phase {
            if heading == to {
                return;
            }
        }
        if to == self.current {
            self.snap_back(now);
            return;
        }

        self.deck_glide.kill();
        let from = self.current;
        let forward = to > from;
        let motion = self.motion;
        let incoming = self.reveals[to]
            .opacity
            .max(self.tuning.commit_reveal_min_opacity);
        let lift = self.tuning.commit_lift(forward, motion);
        self.reveals[to] = RevealStyle {
            opacity: incoming,
            offset_percent: lift,
        };

        let reveal_spec = self.tuning.reveal_in_spec(motion);
        let deck_spec = self.tuning.deck_spec(velocity, motion);
        let timeline = Timeline::new(now)
            .to(
                DeckProperty::DeckY,
                self.deck_y,
                deck_position(to, 0.0, self.viewport_height),
                deck_spec,
            )
            .to(
                DeckProperty::RevealOpacity(from),
                self.reveals[from].opacity,
                self.tuning.commit_fade_out_opacity,
                self.tuning.fade_out_spec(motion),
            )
            .to(DeckProperty::RevealOpacity(to), incoming, 1.0, reveal_spec)
            .to(DeckProperty::RevealOffset(to), lift, 0.0, reveal_spec);

        log::debug!(
            "commit {from} -> {to} over {}ms (velocity {velocity:.2})",
            deck_spec.duration_millis
        );
        self.phase = Phase::Committing { to, timeline };
        self.render();
    }

    fn snap_back(&mut self, now: Millis) {
        self.deck_glide.kill();
        let current = self.current;
        let timeline = Timeline::new(now)
            .to(
                DeckProperty::DeckY,
                self.deck_y,
                deck_position(current, 0.0, self.viewport_height),
                self.tuning.snap_deck_spec(),
            )
            .to(
                DeckProperty::RevealOpacity(current),
                self.reveals[current].opacity,
                1.0,
                self.tuning.snap_reveal_spec(),
            );
        let floor = self.tuning.reveal_floor;
        let neighbors: Vec<(usize, f32)> = self
            .reveals
            .iter()
            .enumerate()
            .filter(|(index, reveal)| *index != current && reveal.opacity != floor)
            .map(|(index, reveal)| (index, reveal.opacity))
            .collect();
        let timeline = neighbors
            .into_iter()
            .fold(timeline, |timeline, (index, opacity)| {
                timeline.to(
                    DeckProperty::RevealOpacity(index),
                    opacity,
                    floor,
                    self.tuning.snap_reveal_spec(),
                )
            });
        log::debug!("snap back to {current}");
        self.phase = Phase::SnappingBack { timeline };
    }

    fn finish_transition(&mut self) {
        let Self {
            phase,
            deck_y,
            reveals,
            ..
        } = self;
        if let Some(timeline) = phase.timeline_mut() {
            timeline.finish(|key, value| apply_property(deck_y, reveals, key, value));
        }
        self.complete_transition();
    }

    fn complete_transition(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Committing { to, .. } => {
                self.current = to;
                self.accumulated_delta = 0.0;
                self.settle();
                self.dots.set_active(to);
                self.renderer.set_active_dot(to);
                self.render();
                self.sync_location();
                log::debug!("settled on slide {to}");
            }
            Phase::SnappingBack { .. } => {
                self.accumulated_delta = 0.0;
                self.settle();
                self.renderer.set_active_dot(self.current);
                self.render();
            }
            other => self.phase = other,
        }
    }

    fn run_timers(&mut self, now: Millis) {
        if self.idle_timer.fire(now) && matches!(self.phase, Phase::Previewing { .. }) {
            self.accumulated_delta = 0.0;
            self.snap_back(now);
        }
        if self.unlock_timer.fire(now) {
            if self.phase.is_animating() {
                // Momentum must not slip through before the transition settles.
                self.arm_unlock(now);
            } else {
                self.gesture_locked = false;
                self.accumulated_delta = 0.0;
                // A finger still down must cross the threshold again.
                self.swipe.rebase();
            }
        }
    }

    fn lock_gesture(&mut self, now: Millis) {
        self.gesture_locked = true;
        self.arm_unlock(now);
    }

    fn arm_unlock(&mut self, now: Millis) {
        self.unlock_timer
            .arm(now, self.tuning.gesture_unlock_ms as Millis);
    }

    fn accelerate_transition(&mut self) {
        let scale = self.tuning.accelerated_time_scale;
        if let Some(timeline) = self.phase.timeline_mut() {
            timeline.accelerate(scale);
        }
    }

    /// Rest state for the current slide: deck aligned, current content fully
    /// visible, every other slide dimmed to the floor.
    fn settle(&mut self) {
        self.deck_y = deck_position(self.current, 0.0, self.viewport_height);
        let floor = self.tuning.reveal_floor;
        for (index, reveal) in self.reveals.iter_mut().enumerate() {
            *reveal = if index == self.current {
                RevealStyle::visible()
            } else {
                RevealStyle::dimmed(floor)
            };
        }
    }

    fn render(&mut self) {
        let frame = DeckFrame {
            deck_y: self.deck_y,
            reveals: &self.reveals,
        };
        self.renderer.render(&frame);
    }

    fn sync_location(&mut self) {
        let fragment = self.slides.fragment_for(self.current);
        if let Err(err) = self.location.replace_fragment(&fragment) {
            log::warn!("could not update URL fragment to {fragment}: {err}");
        }
    }
}

fn apply_property(deck_y: &mut f32, reveals: &mut [RevealStyle], key: DeckProperty, value: f32) {
    match key {
        DeckProperty::DeckY => *deck_y = value,
        DeckProperty::RevealOpacity(index) => {
            if let Some(reveal) = reveals.get_mut(index) {
                reveal.opacity = value;
            }
        }
        DeckProperty::RevealOffset(index) => {
            if let Some(reveal) = reveals.get_mut(index) {
                reveal.offset_percent = value;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
