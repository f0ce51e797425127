//! Testing utilities and headless harness for the Folio deck.

pub mod robot;
pub mod robot_assertions;

pub use robot::*;

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub mod prelude {
    pub use crate::init_test_logging;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use folio_deck::{DeckPhase, MotionPreference, RevealStyle};
}
