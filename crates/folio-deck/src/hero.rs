//! Hero intro: staggered action reveal and the typed subtext line.
//!
//! Runs once per page load. With full motion the actions appear after the
//! title's entrance animation ends (or a fallback delay, whichever is
//! first) and the subtext types itself in. With reduced motion everything
//! is shown immediately and nothing is typed.

use folio_animation::{AnimationSpec, Easing, Tween};
use folio_core::{Millis, Timer};

use crate::tuning::MotionPreference;

/// Delay before the intro starts if the title never reports its animation end.
pub const INTRO_FALLBACK_MS: u64 = 2_000;
/// Pause before the first character appears.
pub const TYPING_START_DELAY_MS: u64 = 220;
pub const TYPING_CHAR_MS: u64 = 22;
/// Extra pause after punctuation and separators.
pub const TYPING_PUNCTUATION_MS: u64 = 110;
pub const SUBTEXT_FADE_MS: u64 = 600;

const PAUSE_AFTER: [char; 6] = ['.', ',', ';', ':', '!', '\u{2022}'];

/// Writes hero intro state to the host.
pub trait HeroRenderer {
    /// Makes the action links visible.
    fn reveal_actions(&mut self);
    /// Replaces the subtext; `typing` toggles the typing caret style.
    fn set_subtext(&mut self, text: &str, typing: bool);
    fn set_subtext_opacity(&mut self, opacity: f32);
}

/// Character-by-character reveal of a line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingEffect {
    chars: Vec<char>,
    shown: usize,
    next: Timer,
}

impl TypingEffect {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.trim().chars().collect(),
            shown: 0,
            next: Timer::new(),
        }
    }

    pub fn start(&mut self, now: Millis) {
        self.shown = 0;
        self.next.arm(now, TYPING_START_DELAY_MS as Millis);
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn is_running(&self) -> bool {
        self.next.is_armed()
    }

    /// Reveals every character that is due by `now`. Returns `true` when the
    /// visible text changed. Deadlines chain from the previous deadline, not
    /// from `now`, so coarse frame ticks don't slow the typing down.
    pub fn tick(&mut self, now: Millis) -> bool {
        let mut changed = false;
        while let Some(deadline) = self.next.deadline() {
            if !self.next.fire(now) {
                break;
            }
            self.shown = (self.shown + 1).min(self.chars.len());
            changed = true;
            if !self.is_finished() {
                let previous = self.chars[self.shown - 1];
                self.next.arm(deadline, Self::delay_after(previous));
            }
        }
        changed
    }

    fn delay_after(previous: char) -> Millis {
        let extra = if PAUSE_AFTER.contains(&previous) {
            TYPING_PUNCTUATION_MS
        } else {
            0
        };
        (TYPING_CHAR_MS + extra) as Millis
    }
}

pub struct HeroIntro<R> {
    renderer: R,
    fallback: Timer,
    started: bool,
    typing: Option<TypingEffect>,
    fade: Option<(Tween<f32>, Millis)>,
}

impl<R: HeroRenderer> HeroIntro<R> {
    /// `subtext` is the line's original text, if the page has one.
    pub fn new(
        renderer: R,
        subtext: Option<&str>,
        motion: MotionPreference,
        now: Millis,
    ) -> Self {
        let typing = subtext
            .map(TypingEffect::new)
            .filter(|effect| !effect.chars.is_empty());
        let mut intro = Self {
            renderer,
            fallback: Timer::new(),
            started: false,
            typing: None,
            fade: None,
        };

        if motion.is_reduced() {
            intro.started = true;
            intro.renderer.reveal_actions();
            intro.renderer.set_subtext_opacity(1.0);
        } else {
            intro.typing = typing;
            intro.fallback.arm(now, INTRO_FALLBACK_MS as Millis);
        }
        intro
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn needs_frame(&self) -> bool {
        self.fallback.is_armed()
            || self.fade.is_some()
            || self.typing.as_ref().is_some_and(TypingEffect::is_running)
    }

    /// The hero title finished its entrance animation.
    pub fn title_animation_ended(&mut self, now: Millis) {
        self.start(now);
    }

    pub fn tick(&mut self, now: Millis) {
        if self.fallback.fire(now) {
            self.start(now);
        }

        if let Some((tween, started)) = &self.fade {
            let elapsed = now - started;
            self.renderer.set_subtext_opacity(tween.value_at(elapsed));
            if tween.is_finished_at(elapsed) {
                self.fade = None;
            }
        }

        if let Some(typing) = self.typing.as_mut() {
            if typing.tick(now) {
                let finished = typing.is_finished();
                self.renderer.set_subtext(&typing.visible_text(), !finished);
                if finished {
                    self.typing = None;
                }
            }
        }
    }

    fn start(&mut self, now: Millis) {
        if self.started {
            return;
        }
        self.started = true;
        self.fallback.disarm();
        self.renderer.reveal_actions();

        if let Some(typing) = self.typing.as_mut() {
            log::debug!("typing hero subtext ({} chars)", typing.chars.len());
            self.renderer.set_subtext_opacity(0.0);
            self.renderer.set_subtext("", true);
            self.fade = Some((
                Tween::new(
                    0.0,
                    1.0,
                    AnimationSpec::tween(SUBTEXT_FADE_MS, Easing::Power1Out),
                ),
                now,
            ));
            typing.start(now);
        }
    }
}

#[cfg(test)]
#[path = "tests/hero_tests.rs"]
mod tests;
