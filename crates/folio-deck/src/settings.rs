//! Deck configuration.

use crate::tuning::{MotionPreference, SlideTuning};

/// Configuration for mounting a deck onto a page.
#[derive(Clone, Debug)]
pub struct DeckSettings {
    /// Id of the element whose children are the slides.
    pub deck_id: String,
    /// Id of the dot navigation container (optional on the page).
    pub dots_id: String,
    /// Id of the hero action link container (optional on the page).
    pub hero_nav_id: String,
    /// Selector for the hero title whose `animationend` starts the intro.
    pub hero_title_selector: String,
    /// Selector for the typed subtext line.
    pub subtext_selector: String,
    /// Selector, relative to a slide, for the block whose opacity is animated.
    pub reveal_selector: String,
    pub tuning: SlideTuning,
    /// Forces a motion preference instead of asking the platform.
    pub motion_override: Option<MotionPreference>,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            deck_id: "deck".into(),
            dots_id: "slideDots".into(),
            hero_nav_id: "heroNav".into(),
            hero_title_selector: "[data-hero-name]".into(),
            subtext_selector: ".subtext".into(),
            reveal_selector: "[data-reveal]".into(),
            tuning: SlideTuning::default(),
            motion_override: None,
        }
    }
}

impl DeckSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deck_id(mut self, id: impl Into<String>) -> Self {
        self.deck_id = id.into();
        self
    }

    pub fn with_dots_id(mut self, id: impl Into<String>) -> Self {
        self.dots_id = id.into();
        self
    }

    pub fn with_hero_nav_id(mut self, id: impl Into<String>) -> Self {
        self.hero_nav_id = id.into();
        self
    }

    pub fn with_tuning(mut self, tuning: SlideTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion_override = Some(motion);
        self
    }

    /// Resolves the motion preference, preferring the override.
    pub fn motion(&self, platform_prefers_reduced: impl FnOnce() -> bool) -> MotionPreference {
        self.motion_override
            .unwrap_or_else(|| MotionPreference::from_reduced(platform_prefers_reduced()))
    }
}
