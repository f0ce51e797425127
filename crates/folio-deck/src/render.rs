//! Render seam between deck intent and the host's element styles.

/// Visual state of one slide's content block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    /// Vertical offset in percent of the content's own height.
    pub offset_percent: f32,
}

impl RevealStyle {
    pub const fn visible() -> Self {
        Self {
            opacity: 1.0,
            offset_percent: 0.0,
        }
    }

    pub const fn dimmed(opacity: f32) -> Self {
        Self {
            opacity,
            offset_percent: 0.0,
        }
    }
}

/// Everything a host needs to paint the deck for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckFrame<'a> {
    /// Vertical translation of the deck in CSS pixels.
    pub deck_y: f32,
    pub reveals: &'a [RevealStyle],
}

/// Writes deck state to the host.
pub trait DeckRenderer {
    fn render(&mut self, frame: &DeckFrame<'_>);

    /// Called once at load and after every settled transition.
    fn set_active_dot(&mut self, index: usize);
}
