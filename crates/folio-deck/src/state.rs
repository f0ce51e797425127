//! Deck phases.
//!
//! The in-flight animation lives inside the phase that owns it, so a deck
//! can hold at most one transition at a time: entering any other phase
//! drops (kills) the previous timeline.

use folio_animation::Timeline;

/// Animated deck properties addressed by timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DeckProperty {
    DeckY,
    RevealOpacity(usize),
    RevealOffset(usize),
}

#[derive(Debug)]
pub(crate) enum Phase {
    Idle,
    Previewing {
        fraction: f32,
    },
    Committing {
        to: usize,
        timeline: Timeline<DeckProperty>,
    },
    SnappingBack {
        timeline: Timeline<DeckProperty>,
    },
}

impl Phase {
    pub(crate) fn is_animating(&self) -> bool {
        matches!(self, Phase::Committing { .. } | Phase::SnappingBack { .. })
    }

    pub(crate) fn timeline(&self) -> Option<&Timeline<DeckProperty>> {
        match self {
            Phase::Committing { timeline, .. } | Phase::SnappingBack { timeline } => Some(timeline),
            Phase::Idle | Phase::Previewing { .. } => None,
        }
    }

    pub(crate) fn timeline_mut(&mut self) -> Option<&mut Timeline<DeckProperty>> {
        match self {
            Phase::Committing { timeline, .. } | Phase::SnappingBack { timeline } => Some(timeline),
            Phase::Idle | Phase::Previewing { .. } => None,
        }
    }

    pub(crate) fn view(&self) -> DeckPhase {
        match self {
            Phase::Idle => DeckPhase::Idle,
            Phase::Previewing { fraction } => DeckPhase::Previewing {
                fraction: *fraction,
            },
            Phase::Committing { to, .. } => DeckPhase::Committing { to: *to },
            Phase::SnappingBack { .. } => DeckPhase::SnappingBack,
        }
    }
}

/// Observable phase of the deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckPhase {
    /// At rest on the current slide.
    Idle,
    /// A gesture is showing a live, uncommitted preview.
    Previewing { fraction: f32 },
    /// Animating to slide `to`; the current index changes when this ends.
    Committing { to: usize },
    /// Animating back to the current slide's rest state.
    SnappingBack,
}
