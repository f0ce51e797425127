//! Core runtime services for the Folio slide deck.
//!
//! Everything in the deck runs on a single UI thread and is driven by the
//! host: input handlers and animation frames hand in a timestamp, and the
//! types here turn those timestamps into elapsed time and deadlines.

mod platform;
mod timer;

pub use platform::{Clock, ManualClock, SystemClock};
pub use timer::Timer;

/// Milliseconds on the host's monotonic timeline (`performance.now()` domain).
pub type Millis = f64;
