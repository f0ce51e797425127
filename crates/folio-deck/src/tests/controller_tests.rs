use super::*;
use crate::location::MemoryLocation;
use crate::slide::Slide;

#[derive(Default)]
struct Frames {
    last: Option<(f32, Vec<RevealStyle>)>,
    renders: usize,
    dots: Vec<usize>,
}

impl DeckRenderer for Frames {
    fn render(&mut self, frame: &DeckFrame<'_>) {
        self.renders += 1;
        self.last = Some((frame.deck_y, frame.reveals.to_vec()));
    }

    fn set_active_dot(&mut self, index: usize) {
        self.dots.push(index);
    }
}

const VIEWPORT: f32 = 800.0;

fn slides() -> SlideSet {
    SlideSet::new(vec![
        Slide::new("intro"),
        Slide::new("work"),
        Slide::new("contact"),
    ])
    .expect("slides")
}

fn deck_with(
    location: MemoryLocation,
    motion: MotionPreference,
) -> DeckController<Frames, MemoryLocation> {
    DeckController::new(
        slides(),
        SlideTuning::default(),
        motion,
        VIEWPORT,
        Frames::default(),
        location,
    )
}

fn deck(fragment: &str) -> DeckController<Frames, MemoryLocation> {
    deck_with(MemoryLocation::new(fragment), MotionPreference::Full)
}

#[test]
fn loads_on_the_slide_named_by_the_fragment() {
    let deck = deck("#work");
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert!(!deck.needs_frame(), "no animation at load");
    assert_eq!(deck.deck_y(), -VIEWPORT);
    assert_eq!(deck.dots().active(), 1);
    assert_eq!(deck.renderer().dots, vec![1]);
    assert_eq!(deck.location().replacements(), ["#work"]);

    let opacities: Vec<f32> = deck.reveals().iter().map(|r| r.opacity).collect();
    assert_eq!(opacities, vec![0.08, 1.0, 0.08]);
}

#[test]
fn unknown_fragment_falls_back_to_first_slide_and_is_normalized() {
    let deck = deck("#nowhere");
    assert_eq!(deck.current_index(), 0);
    assert_eq!(deck.location().fragment(), "intro");
}

#[test]
fn wheel_past_threshold_commits_without_waiting_for_gesture_end() {
    let mut deck = deck("#work");
    assert_eq!(deck.threshold(), 176.0);

    deck.wheel(100.0, 0.0);
    assert!(matches!(deck.phase(), DeckPhase::Previewing { .. }));
    assert_eq!(deck.current_index(), 1, "preview never moves the index");

    deck.wheel(100.0, 16.0);
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 2 });
    assert!(deck.is_gesture_locked());
    assert_eq!(deck.accumulated_delta(), 0.0);
    assert_eq!(deck.current_index(), 1, "index changes on completion only");
    assert_eq!(deck.dots().active(), 1);

    deck.tick(1_000.0);
    assert_eq!(deck.current_index(), 2);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert_eq!(deck.deck_y(), -2.0 * VIEWPORT);
    assert_eq!(deck.dots().active(), 2);
    assert_eq!(deck.location().fragment(), "contact");
    assert_eq!(deck.location().replacements(), ["#work", "#contact"]);
}

#[test]
fn incoming_content_starts_lifted_and_partially_visible() {
    let mut deck = deck("#intro");
    deck.wheel(200.0, 0.0);
    let incoming = deck.reveals()[1];
    assert_eq!(incoming.offset_percent, 10.0);
    assert!(incoming.opacity >= 0.2);

    deck.tick(50.0);
    assert!(deck.reveals()[0].opacity < 1.0, "outgoing content fades");
    deck.tick(2_000.0);
    assert_eq!(deck.reveals()[1], RevealStyle::visible());
    assert_eq!(deck.reveals()[0].opacity, 0.08);
}

#[test]
fn reduced_motion_suppresses_the_directional_lift() {
    let mut deck = deck_with(MemoryLocation::new("#intro"), MotionPreference::Reduced);
    deck.wheel(200.0, 0.0);
    assert_eq!(deck.reveals()[1].offset_percent, 0.0);
    deck.tick(2_000.0);
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn idle_wheel_preview_snaps_back() {
    let mut deck = deck("#work");
    deck.wheel(80.0, 0.0);
    deck.tick(60.0);
    assert!(deck.deck_y() < -VIEWPORT, "deck glides toward the preview");
    assert!(deck.reveals()[1].opacity < 1.0);

    deck.tick(130.0);
    assert_eq!(deck.phase(), DeckPhase::SnappingBack);
    deck.tick(1_000.0);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.deck_y(), -VIEWPORT);
    assert_eq!(deck.reveals()[1], RevealStyle::visible());
    assert_eq!(deck.accumulated_delta(), 0.0);
    assert_eq!(deck.location().replacements(), ["#work"]);
}

#[test]
fn input_during_a_transition_accelerates_it_instead_of_queuing() {
    let mut deck = deck("#intro");
    deck.wheel(200.0, 0.0);
    assert_eq!(deck.time_scale(), Some(1.0));

    deck.wheel(40.0, 16.0);
    assert_eq!(deck.time_scale(), Some(1.75));
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 1 });

    deck.wheel(400.0, 32.0);
    assert_eq!(deck.time_scale(), Some(1.75), "never slows down");
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 1 });
}

#[test]
fn one_physical_gesture_advances_exactly_one_slide() {
    let mut deck = deck("#intro");
    let mut now = 0.0;
    while now <= 1_500.0 {
        deck.wheel(100.0, now);
        now += 16.0;
    }
    assert_eq!(deck.current_index(), 1);
    assert!(deck.is_gesture_locked(), "momentum keeps the lock alive");

    deck.tick(now + 100.0);
    assert!(!deck.is_gesture_locked());
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn unlock_waits_for_the_transition_to_finish() {
    let mut deck = deck("#intro");
    deck.wheel(200.0, 0.0);
    deck.tick(100.0);
    assert!(deck.is_animating());
    assert!(deck.is_gesture_locked(), "quiet period elapsed mid-animation re-arms");

    deck.tick(700.0);
    assert!(!deck.is_animating());
    assert!(!deck.is_gesture_locked());
}

#[test]
fn first_slide_rubber_bands_without_committing() {
    let mut deck = deck("#intro");
    let limit = 0.35 * VIEWPORT;
    let mut now = 0.0;
    for _ in 0..6 {
        deck.wheel(-400.0, now);
        now += 16.0;
        assert!(deck.deck_y() <= limit + 1e-3 && deck.deck_y() >= 0.0);
    }
    assert_eq!(deck.current_index(), 0);
    assert_eq!(deck.phase(), DeckPhase::Previewing { fraction: -0.35 });

    deck.tick(now + 1_000.0);
    deck.tick(now + 2_000.0);
    assert_eq!(deck.current_index(), 0);
    assert_eq!(deck.deck_y(), 0.0);
}

#[test]
fn last_slide_rubber_bands_without_committing() {
    let mut deck = deck("#contact");
    deck.wheel(5_000.0, 0.0);
    assert_eq!(deck.phase(), DeckPhase::Previewing { fraction: 0.35 });
    assert_eq!(deck.current_index(), 2);
    assert!(!deck.is_gesture_locked());
}

#[test]
fn go_to_index_ignores_redundant_and_out_of_range_requests() {
    let mut deck = deck("#work");
    deck.go_to_index(1, 0.0);
    deck.go_to_index(7, 0.0);
    assert_eq!(deck.phase(), DeckPhase::Idle);

    deck.go_to_index(0, 0.0);
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 0 });
    deck.go_to_index(2, 10.0);
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 0 }, "busy decks ignore requests");

    deck.tick(1_000.0);
    assert_eq!(deck.current_index(), 0);
    assert_eq!(deck.location().fragment(), "intro");
}

#[test]
fn go_to_id_can_jump_several_slides() {
    let mut deck = deck("#intro");
    deck.go_to_id("contact", 0.0);
    deck.go_to_id("missing", 1.0);
    deck.tick(1_000.0);
    assert_eq!(deck.current_index(), 2);
    assert_eq!(deck.renderer().dots, vec![0, 2]);
}

#[test]
fn vertical_swipe_commits_mid_drag() {
    let mut deck = deck("#intro");
    deck.pointer_down(Some(7), 200.0, 700.0, 0.0);
    deck.pointer_move(Some(7), 201.0, 650.0, 16.0);
    assert!(matches!(deck.phase(), DeckPhase::Previewing { .. }));

    deck.pointer_move(Some(7), 203.0, 500.0, 32.0);
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 1 });

    deck.pointer_move(Some(7), 203.0, 100.0, 48.0);
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 1 });
    deck.pointer_up(Some(7), 64.0);
    deck.tick(2_000.0);
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn short_swipe_snaps_back_on_release() {
    let mut deck = deck("#work");
    deck.pointer_down(Some(1), 200.0, 400.0, 0.0);
    deck.pointer_move(Some(1), 200.0, 450.0, 16.0);
    assert!(matches!(deck.phase(), DeckPhase::Previewing { .. }));

    deck.pointer_up(Some(1), 32.0);
    assert_eq!(deck.phase(), DeckPhase::SnappingBack);
    deck.tick(1_000.0);
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.deck_y(), -VIEWPORT);
    assert_eq!(deck.reveals()[1].opacity, 1.0);
}

#[test]
fn holding_a_committed_swipe_past_the_unlock_does_not_advance_again() {
    let mut deck = deck("#intro");
    deck.pointer_down(Some(3), 200.0, 600.0, 0.0);
    deck.pointer_move(Some(3), 200.0, 590.0, 16.0);
    deck.pointer_move(Some(3), 200.0, 400.0, 32.0);
    assert_eq!(deck.phase(), DeckPhase::Committing { to: 1 });

    deck.tick(1_000.0);
    deck.tick(1_100.0);
    assert_eq!(deck.current_index(), 1);
    assert!(!deck.is_gesture_locked());

    deck.pointer_move(Some(3), 200.0, 399.0, 1_116.0);
    assert!(matches!(deck.phase(), DeckPhase::Previewing { .. }));
    deck.pointer_up(Some(3), 1_132.0);
    deck.tick(3_000.0);
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.location().replacements(), ["#intro", "#work"]);
}

#[test]
fn snap_back_fades_the_previewed_neighbor_down_gradually() {
    let mut deck = deck("#work");
    deck.pointer_down(Some(1), 200.0, 400.0, 0.0);
    deck.pointer_move(Some(1), 200.0, 480.0, 16.0);
    let previewed = deck.reveals()[0].opacity;
    assert!(previewed > 0.08);

    deck.pointer_up(Some(1), 32.0);
    deck.tick(32.0 + 175.0);
    let mid = deck.reveals()[0].opacity;
    assert!(mid < previewed && mid > 0.08, "neighbour fades, got {mid}");

    deck.tick(1_000.0);
    assert_eq!(deck.reveals()[0].opacity, 0.08);
    assert_eq!(deck.reveals()[2].opacity, 0.08);
}

#[test]
fn unusable_viewport_height_falls_back_at_construction() {
    for height in [0.0, -20.0, f32::NAN] {
        let deck = DeckController::new(
            slides(),
            SlideTuning::default(),
            MotionPreference::Full,
            height,
            Frames::default(),
            MemoryLocation::new("#work"),
        );
        assert_eq!(deck.viewport_height(), 800.0);
        assert_eq!(deck.deck_y(), -800.0);
        assert_eq!(deck.threshold(), 176.0);
    }
}

#[test]
fn horizontal_swipes_and_foreign_pointers_are_ignored() {
    let mut deck = deck("#work");
    deck.pointer_down(Some(1), 200.0, 400.0, 0.0);
    deck.pointer_move(Some(2), 200.0, 100.0, 8.0);
    assert_eq!(deck.phase(), DeckPhase::Idle);

    deck.pointer_move(Some(1), 400.0, 390.0, 16.0);
    deck.pointer_move(Some(1), 400.0, 100.0, 32.0);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    deck.pointer_up(Some(1), 48.0);
    assert_eq!(deck.phase(), DeckPhase::Idle, "taps and horizontal swipes do nothing");
}

#[test]
fn resize_repositions_at_rest_without_animating() {
    let mut deck = deck("#work");
    deck.resize(600.0, 0.0);
    assert_eq!(deck.deck_y(), -600.0);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert_eq!(deck.threshold(), 160.0);
}

#[test]
fn resize_abandons_a_live_preview() {
    let mut deck = deck("#work");
    deck.wheel(120.0, 0.0);
    deck.resize(1_000.0, 10.0);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert_eq!(deck.accumulated_delta(), 0.0);
    assert_eq!(deck.deck_y(), -1_000.0);
    assert_eq!(deck.reveals()[2].opacity, 0.08);
}

#[test]
fn resize_finishes_a_running_commit() {
    let mut deck = deck("#work");
    deck.go_to_index(2, 0.0);
    deck.resize(500.0, 30.0);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert_eq!(deck.current_index(), 2);
    assert_eq!(deck.deck_y(), -1_000.0);
    assert_eq!(deck.location().fragment(), "contact");
}

#[test]
fn refused_fragment_writes_do_not_break_navigation() {
    let mut deck = deck_with(
        MemoryLocation::new("#work").refusing_writes(),
        MotionPreference::Full,
    );
    assert_eq!(deck.current_index(), 1);
    deck.go_to_index(2, 0.0);
    deck.tick(1_000.0);
    assert_eq!(deck.current_index(), 2);
    assert!(deck.location().replacements().is_empty());
}
