//! Headless slide deck controller.
//!
//! Turns wheel bursts and touch drags into discrete, animated slide
//! transitions. All state lives in [`DeckController`]; hosts feed it input
//! and timestamps, and receive frames through [`DeckRenderer`] and fragment
//! rewrites through [`Location`].

mod controller;
mod dots;
mod error;
mod gesture;
mod hero;
mod location;
mod progress;
mod render;
mod settings;
mod slide;
mod state;
mod tuning;

pub use controller::DeckController;
pub use dots::DotNav;
pub use error::{DeckError, LocationError};
pub use gesture::{PointerId, SwipeTracker};
pub use hero::{HeroIntro, HeroRenderer, TypingEffect};
pub use location::{Location, MemoryLocation};
pub use progress::{deck_position, Direction, Progress};
pub use render::{DeckFrame, DeckRenderer, RevealStyle};
pub use settings::DeckSettings;
pub use slide::{LabelHints, Slide, SlideSet};
pub use state::DeckPhase;
pub use tuning::{MotionPreference, SlideEasing, SlideTuning};
