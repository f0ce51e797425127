//! Swipe axis disambiguation.
//!
//! A drag only drives the deck once it is clearly vertical: it must leave a
//! small deadzone, and the vertical travel must beat the horizontal travel
//! by a fixed ratio. Horizontal-dominant drags are ignored for the rest of
//! the gesture; there is no horizontal paging.

pub type PointerId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwipeAxis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeTracker {
    active: bool,
    pointer: Option<PointerId>,
    start_x: f32,
    start_y: f32,
    last_x: f32,
    last_y: f32,
    axis: Option<SwipeAxis>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, pointer: Option<PointerId>, x: f32, y: f32) {
        self.active = true;
        self.pointer = pointer;
        self.start_x = x;
        self.start_y = y;
        self.last_x = x;
        self.last_y = y;
        self.axis = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Records the latest pointer position without measuring travel.
    pub fn follow(&mut self, x: f32, y: f32) {
        if self.active {
            self.last_x = x;
            self.last_y = y;
        }
    }

    /// Restarts travel from the latest position. The axis decision stands.
    pub fn rebase(&mut self) {
        self.start_x = self.last_x;
        self.start_y = self.last_y;
    }

    /// Whether an event from `pointer` belongs to the swipe in progress.
    pub fn accepts(&self, pointer: Option<PointerId>) -> bool {
        if !self.active {
            return false;
        }
        match (self.pointer, pointer) {
            (Some(owner), Some(pointer)) => owner == pointer,
            _ => true,
        }
    }

    /// Vertical travel toward the next slide (finger moving up is positive),
    /// or `None` while intent is unclear or the swipe is horizontal.
    pub fn track(&mut self, x: f32, y: f32, deadzone: f32, axis_ratio: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.follow(x, y);
        let dx = x - self.start_x;
        let dy = self.start_y - y;

        if self.axis.is_none() {
            let (ax, ay) = (dx.abs(), dy.abs());
            if ax < deadzone && ay < deadzone {
                return None;
            }
            if ay > ax * axis_ratio {
                self.axis = Some(SwipeAxis::Vertical);
            } else if ax > ay * axis_ratio {
                self.axis = Some(SwipeAxis::Horizontal);
            } else {
                return None;
            }
            log::debug!("swipe axis locked: {:?}", self.axis);
        }

        match self.axis {
            Some(SwipeAxis::Vertical) => Some(dy),
            _ => None,
        }
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
