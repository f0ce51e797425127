//! Slides and their navigation metadata.
//!
//! Order is fixed when the set is built; index is the only key the
//! controller uses internally. Ids exist for the URL fragment.

use crate::error::DeckError;

/// Text sources for a slide's accessible navigation label, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelHints {
    /// Explicit label attribute on the slide itself.
    pub explicit: Option<String>,
    /// Text of a descendant carrying the label attribute.
    pub labeled_descendant: Option<String>,
    /// Text of the slide's first heading.
    pub heading: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    pub id: Option<String>,
    pub hints: LabelHints,
}

impl Slide {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            hints: LabelHints::default(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_hints(mut self, hints: LabelHints) -> Self {
        self.hints = hints;
        self
    }

    /// Resolves the navigation label, falling back to "Slide N" (1-based).
    pub fn nav_label(&self, index: usize) -> String {
        [
            self.hints.explicit.as_deref(),
            self.hints.labeled_descendant.as_deref(),
            self.hints.heading.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Slide {}", index + 1))
    }
}

/// Ordered, non-empty list of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::NoSlides);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// First slide whose id equals `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        self.slides
            .iter()
            .position(|slide| slide.id.as_deref() == Some(id))
    }

    /// Canonical fragment for a slide: `#id`, or a bare `#` for slides without one.
    pub fn fragment_for(&self, index: usize) -> String {
        match self.get(index).and_then(|slide| slide.id.as_deref()) {
            Some(id) if !id.is_empty() => format!("#{id}"),
            _ => "#".to_owned(),
        }
    }

    /// Index one step from `index`, if it stays within the deck.
    pub fn neighbor(&self, index: usize, forward: bool) -> Option<usize> {
        if forward {
            let next = index + 1;
            (next < self.len()).then_some(next)
        } else {
            index.checked_sub(1)
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.slides
            .iter()
            .enumerate()
            .map(|(index, slide)| slide.nav_label(index))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/slide_tests.rs"]
mod tests;
