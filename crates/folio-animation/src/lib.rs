//! Animation engine for the Folio slide deck.
//!
//! Provides eased tweens over numeric properties, grouped timelines with a
//! completion signal and adjustable playback rate, and a coalescing
//! [`QuickTo`] helper for high-frequency property writes.

mod animation;
mod quick_to;
mod timeline;
mod tween;

pub use animation::{AnimationSpec, Easing, Lerp};
pub use quick_to::QuickTo;
pub use timeline::Timeline;
pub use tween::Tween;
