//! Dot navigation model: one labelled control per slide, one active.

use crate::slide::SlideSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotNav {
    labels: Vec<String>,
    active: usize,
}

impl DotNav {
    pub fn from_slides(slides: &SlideSet, active: usize) -> Self {
        Self {
            labels: slides.labels(),
            active: active.min(slides.len().saturating_sub(1)),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn set_active(&mut self, index: usize) {
        if index < self.labels.len() {
            self.active = index;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Value for the dot's `aria-current` attribute.
    pub fn aria_current(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "page"
        } else {
            "false"
        }
    }
}
