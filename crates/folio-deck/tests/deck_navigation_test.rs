//! End-to-end navigation through a three slide deck: wheel sessions, deep
//! links, dot clicks, edge rubber-banding, resizes and reduced motion.

use folio_deck::{Location, MemoryLocation, MotionPreference};
use folio_testing::prelude::*;
use folio_testing::robot_assertions::{assert_at_rest, assert_count, assert_no_skips};

const IDS: [&str; 3] = ["intro", "work", "contact"];

#[test]
fn test_wheel_sessions_visit_each_slide_in_order() {
    init_test_logging();
    let mut robot = DeckRobot::with_ids(&IDS, 800.0, "");

    robot.wheel_burst(60.0, 40, 16.0);
    robot.wait_for_idle();
    assert_eq!(robot.deck().current_index(), 1);
    assert_at_rest(robot.deck(), "after first session");

    robot.wheel_burst(60.0, 40, 16.0);
    robot.wait_for_idle();
    assert_eq!(robot.deck().current_index(), 2);
    assert_at_rest(robot.deck(), "after second session");

    assert_eq!(robot.renderer().active_dot_history(), [0, 1, 2]);
    assert_no_skips(robot.renderer().active_dot_history(), "dot history");
    assert_eq!(
        robot.location().replacements(),
        ["#intro", "#work", "#contact"]
    );
}

#[test]
fn test_deep_link_then_dot_jump() {
    let mut robot = DeckRobot::with_ids(&IDS, 800.0, "#contact");
    assert_eq!(robot.deck().current_index(), 2);
    assert_at_rest(robot.deck(), "deep link");

    robot.click_dot(0);
    robot.wait_for_idle();
    assert_eq!(robot.deck().current_index(), 0);
    assert_eq!(robot.location().fragment(), "intro");
    assert_eq!(robot.renderer().active_dot_history(), [2, 0]);
}

#[test]
fn test_navigation_by_slide_id() {
    let mut robot = DeckRobot::with_ids(&IDS, 800.0, "");
    robot.go_to_id("work");
    robot.wait_for_idle();
    assert_eq!(robot.deck().current_index(), 1);

    robot.go_to_id("nope");
    robot.wait_for_idle();
    assert_eq!(robot.deck().current_index(), 1);
}

#[test]
fn test_first_slide_rubber_band_is_bounded() {
    let mut robot = DeckRobot::with_ids(&IDS, 800.0, "");
    robot.wheel_burst(-120.0, 10, 16.0);
    robot.wait_for_idle();

    let (lo, hi) = robot.renderer().deck_y_range().expect("frames");
    assert!(lo >= -0.01, "deck moved forward: {lo}");
    assert!(hi <= 0.35 * 800.0 + 0.01, "deck overscrolled: {hi}");
    assert!(hi > 0.0, "deck gave a little");
    assert_eq!(robot.deck().current_index(), 0);
    assert_at_rest(robot.deck(), "after rubber band");
}

#[test]
fn test_last_slide_rubber_band_is_bounded() {
    let mut robot = DeckRobot::with_ids(&IDS, 800.0, "#contact");
    robot.wheel_burst(120.0, 10, 16.0);
    robot.wait_for_idle();

    let (lo, hi) = robot.renderer().deck_y_range().expect("frames");
    assert!(lo >= -1_600.0 - 280.0 - 0.01, "deck overscrolled: {lo}");
    assert!(hi <= -1_600.0 + 0.01, "deck moved backward: {hi}");
    assert_eq!(robot.deck().current_index(), 2);
    assert_eq!(robot.location().replacements(), ["#contact"]);
}

#[test]
fn test_resize_realigns_the_deck() {
    let mut robot = DeckRobot::with_ids(&IDS, 800.0, "#work");
    robot.resize(600.0);
    assert_at_rest(robot.deck(), "idle resize");
    assert_eq!(robot.deck().deck_y(), -600.0);

    robot.click_dot(2);
    robot.advance_time(100.0);
    robot.resize(500.0);
    assert_eq!(robot.deck().current_index(), 2);
    assert_at_rest(robot.deck(), "resize mid-transition");
    assert_eq!(robot.deck().deck_y(), -1_000.0);
}

#[test]
fn test_reduced_motion_keeps_content_in_place() {
    let mut robot = DeckRobot::new(
        slide_set(&IDS),
        800.0,
        MemoryLocation::new(""),
        MotionPreference::Reduced,
    );
    robot.click_dot(1);
    let elapsed = robot.wait_for_idle();

    assert!(
        (650.0..700.0).contains(&elapsed),
        "reduced transition took {elapsed}ms"
    );
    assert!(robot
        .renderer()
        .frames()
        .iter()
        .flat_map(|frame| frame.reveals.iter())
        .all(|reveal| reveal.offset_percent == 0.0));
    assert_at_rest(robot.deck(), "reduced motion");
}

#[test]
fn test_refused_fragment_writes_are_not_fatal() {
    let mut robot = DeckRobot::new(
        slide_set(&IDS),
        800.0,
        MemoryLocation::new("#work").refusing_writes(),
        MotionPreference::Full,
    );
    robot.click_dot(2);
    robot.wait_for_idle();
    assert_eq!(robot.deck().current_index(), 2);
    assert_count(robot.location().replacements(), 0, "no writes landed");
}
