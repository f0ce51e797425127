//! Assertion helpers for robot tests.

use folio_deck::{DeckController, DeckPhase, DeckRenderer, Location, RevealStyle};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the deck is settled on its current slide: idle, aligned,
/// current content fully visible and every other slide at the floor.
pub fn assert_at_rest<R: DeckRenderer, L: Location>(deck: &DeckController<R, L>, msg: &str) {
    assert_eq!(deck.phase(), DeckPhase::Idle, "{}: deck not idle", msg);

    let current = deck.current_index();
    let expected_y = -(current as f32) * deck.viewport_height();
    assert_approx_eq(deck.deck_y(), expected_y, 0.5, &format!("{} - deck_y", msg));

    let floor = deck.tuning().reveal_floor;
    for (index, reveal) in deck.reveals().iter().enumerate() {
        let expected = if index == current {
            RevealStyle::visible()
        } else {
            RevealStyle::dimmed(floor)
        };
        assert_eq!(*reveal, expected, "{}: reveal {} not settled", msg, index);
    }
    assert_eq!(
        deck.dots().active(),
        current,
        "{}: active dot out of sync",
        msg
    );
}

/// Assert that a sequence only ever holds consecutive values of one step,
/// i.e. no slide was skipped.
pub fn assert_no_skips(history: &[usize], msg: &str) {
    for pair in history.windows(2) {
        assert!(
            pair[0].abs_diff(pair[1]) <= 1,
            "{}: jumped from {} to {} in {:?}",
            msg,
            pair[0],
            pair[1],
            history
        );
    }
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}
