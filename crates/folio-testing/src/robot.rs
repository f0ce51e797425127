//! Robot-style harness that drives a [`DeckController`] headlessly.
//!
//! The robot owns a [`ManualClock`] and advances it in display-frame steps,
//! so tests read like a user session:
//!
//! ```
//! use folio_testing::DeckRobot;
//!
//! let mut robot = DeckRobot::with_ids(&["intro", "work"], 800.0, "");
//! robot.wheel_burst(60.0, 6, 16.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.deck().current_index(), 1);
//! ```

use folio_core::{Clock, ManualClock, Millis};
use folio_deck::{
    DeckController, DeckFrame, DeckRenderer, HeroRenderer, MemoryLocation, MotionPreference,
    PointerId, RevealStyle, Slide, SlideSet, SlideTuning,
};

/// Step used by [`DeckRobot::advance_time`], roughly one 60 Hz frame.
pub const FRAME_MILLIS: Millis = 16.0;

/// Upper bound for [`DeckRobot::wait_for_idle`].
const IDLE_TIMEOUT_MILLIS: Millis = 10_000.0;

const TOUCH_ID: PointerId = 1;
const TOUCH_X: f32 = 180.0;

/// One rendered frame as the host would have painted it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub deck_y: f32,
    pub reveals: Vec<RevealStyle>,
}

/// Renderer that keeps every frame and dot update.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<RecordedFrame>,
    active_dots: Vec<usize>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    /// Every index passed to `set_active_dot`, oldest first.
    pub fn active_dot_history(&self) -> &[usize] {
        &self.active_dots
    }

    /// Smallest and largest deck translation painted so far.
    pub fn deck_y_range(&self) -> Option<(f32, f32)> {
        self.frames.iter().map(|f| f.deck_y).fold(None, |range, y| {
            Some(match range {
                None => (y, y),
                Some((lo, hi)) => (lo.min(y), hi.max(y)),
            })
        })
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.active_dots.clear();
    }
}

impl DeckRenderer for RecordingRenderer {
    fn render(&mut self, frame: &DeckFrame<'_>) {
        self.frames.push(RecordedFrame {
            deck_y: frame.deck_y,
            reveals: frame.reveals.to_vec(),
        });
    }

    fn set_active_dot(&mut self, index: usize) {
        self.active_dots.push(index);
    }
}

/// Hero renderer that records every write.
#[derive(Debug, Default)]
pub struct RecordingHero {
    pub actions_revealed: usize,
    pub subtexts: Vec<(String, bool)>,
    pub opacities: Vec<f32>,
}

impl RecordingHero {
    pub fn subtext(&self) -> Option<&str> {
        self.subtexts.last().map(|(text, _)| text.as_str())
    }

    pub fn is_typing(&self) -> bool {
        self.subtexts.last().is_some_and(|(_, typing)| *typing)
    }
}

impl HeroRenderer for RecordingHero {
    fn reveal_actions(&mut self) {
        self.actions_revealed += 1;
    }

    fn set_subtext(&mut self, text: &str, typing: bool) {
        self.subtexts.push((text.to_owned(), typing));
    }

    fn set_subtext_opacity(&mut self, opacity: f32) {
        self.opacities.push(opacity);
    }
}

/// Headless deck session driven by simulated input and a manual clock.
pub struct DeckRobot {
    clock: ManualClock,
    deck: DeckController<RecordingRenderer, MemoryLocation>,
}

impl DeckRobot {
    pub fn new(
        slides: SlideSet,
        viewport_height: f32,
        location: MemoryLocation,
        motion: MotionPreference,
    ) -> Self {
        let deck = DeckController::new(
            slides,
            SlideTuning::default(),
            motion,
            viewport_height,
            RecordingRenderer::default(),
            location,
        );
        Self {
            clock: ManualClock::new(0.0),
            deck,
        }
    }

    /// Deck of slides with the given ids, loaded with `fragment` in the URL.
    pub fn with_ids(ids: &[&str], viewport_height: f32, fragment: &str) -> Self {
        Self::new(
            slide_set(ids),
            viewport_height,
            MemoryLocation::new(fragment),
            MotionPreference::Full,
        )
    }

    pub fn now(&self) -> Millis {
        self.clock.now_millis()
    }

    pub fn deck(&self) -> &DeckController<RecordingRenderer, MemoryLocation> {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut DeckController<RecordingRenderer, MemoryLocation> {
        &mut self.deck
    }

    pub fn renderer(&self) -> &RecordingRenderer {
        self.deck.renderer()
    }

    pub fn location(&self) -> &MemoryLocation {
        self.deck.location()
    }

    /// Advances the clock in frame-sized steps, ticking the deck each frame.
    pub fn advance_time(&mut self, millis: Millis) {
        let target = self.now() + millis.max(0.0);
        while self.now() < target {
            let step = FRAME_MILLIS.min(target - self.now());
            let now = self.clock.advance(step);
            self.deck.tick(now);
        }
    }

    /// Runs frames until nothing is animating and no timer is pending.
    /// Returns the simulated time that passed.
    pub fn wait_for_idle(&mut self) -> Millis {
        let start = self.now();
        while self.deck.needs_frame() {
            if self.now() - start > IDLE_TIMEOUT_MILLIS {
                log::warn!("deck still busy after {IDLE_TIMEOUT_MILLIS}ms");
                break;
            }
            self.advance_time(FRAME_MILLIS);
        }
        self.now() - start
    }

    pub fn wheel(&mut self, delta_y: f32) {
        let now = self.now();
        self.deck.wheel(delta_y, now);
    }

    /// `count` wheel events of `delta_y`, `interval` milliseconds apart.
    pub fn wheel_burst(&mut self, delta_y: f32, count: usize, interval: Millis) {
        for _ in 0..count {
            self.wheel(delta_y);
            self.advance_time(interval);
        }
    }

    /// Touch drag from `from_y` to `to_y`, one move per frame, then release.
    pub fn touch_drag(&mut self, from_y: f32, to_y: f32, steps: usize) {
        self.touch_drag_path(TOUCH_X, from_y, TOUCH_X, to_y, steps);
    }

    pub fn touch_drag_path(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32, steps: usize) {
        let now = self.now();
        self.deck.pointer_down(Some(TOUCH_ID), from_x, from_y, now);

        let steps = steps.max(1);
        for i in 1..=steps {
            self.advance_time(FRAME_MILLIS);
            let t = i as f32 / steps as f32;
            let x = from_x + (to_x - from_x) * t;
            let y = from_y + (to_y - from_y) * t;
            let now = self.now();
            self.deck.pointer_move(Some(TOUCH_ID), x, y, now);
        }

        let now = self.now();
        self.deck.pointer_up(Some(TOUCH_ID), now);
    }

    pub fn click_dot(&mut self, index: usize) {
        let now = self.now();
        self.deck.go_to_index(index, now);
    }

    pub fn go_to_id(&mut self, id: &str) {
        let now = self.now();
        self.deck.go_to_id(id, now);
    }

    pub fn resize(&mut self, viewport_height: f32) {
        let now = self.now();
        self.deck.resize(viewport_height, now);
    }
}

/// Builds a slide set from ids. Panics on an empty list.
pub fn slide_set(ids: &[&str]) -> SlideSet {
    SlideSet::new(ids.iter().map(|id| Slide::new(*id)).collect())
        .unwrap_or_else(|err| panic!("invalid test deck {ids:?}: {err}"))
}
