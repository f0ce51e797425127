use super::*;
use crate::slide::Slide;

fn three() -> SlideSet {
    SlideSet::new(vec![Slide::new("a"), Slide::new("b"), Slide::new("c")]).expect("slides")
}

#[test]
fn fraction_clamps_when_a_neighbor_exists() {
    let tuning = SlideTuning::default();
    let progress = Progress::resolve(0.5, 1, &three(), &tuning);
    assert_eq!(progress.fraction, 0.5);
    assert_eq!(progress.neighbor, Some(2));
    assert_eq!(progress.commit_target(), None);

    let past = Progress::resolve(1.4, 1, &three(), &tuning);
    assert_eq!(past.fraction, 1.0);
    assert_eq!(past.commit_target(), Some(2));

    let back = Progress::resolve(-1.0, 1, &three(), &tuning);
    assert_eq!(back.direction, Direction::Backward);
    assert_eq!(back.commit_target(), Some(0));
}

#[test]
fn edges_rubber_band_and_never_commit() {
    let tuning = SlideTuning::default();
    let first = Progress::resolve(-5.0, 0, &three(), &tuning);
    assert_eq!(first.neighbor, None);
    assert_eq!(first.fraction, -0.35);
    assert_eq!(first.commit_target(), None);

    let gentle = Progress::resolve(-0.5, 0, &three(), &tuning);
    assert!((gentle.fraction + 0.2).abs() < 1e-6);

    let last = Progress::resolve(3.0, 2, &three(), &tuning);
    assert_eq!(last.fraction, 0.35);
    assert_eq!(last.commit_target(), None);
}

#[test]
fn preview_opacities_cross_fade() {
    let tuning = SlideTuning::default();
    let rest = Progress::resolve(0.0, 0, &three(), &tuning);
    assert_eq!(rest.current_opacity(&tuning), 1.0);
    assert!((rest.neighbor_opacity(&tuning).unwrap() - 0.18).abs() < 1e-6);

    let half = Progress::resolve(0.5, 0, &three(), &tuning);
    assert!((half.current_opacity(&tuning) - 0.54).abs() < 1e-5);
    assert!((half.neighbor_opacity(&tuning).unwrap() - 0.59).abs() < 1e-5);

    let full = Progress::resolve(0.999, 0, &three(), &tuning);
    assert!(full.current_opacity(&tuning) >= tuning.reveal_floor);

    let edge = Progress::resolve(-1.0, 0, &three(), &tuning);
    assert_eq!(edge.neighbor_opacity(&tuning), None);
}

#[test]
fn deck_position_stacks_slides_upwards() {
    assert_eq!(deck_position(0, 0.0, 800.0), 0.0);
    assert_eq!(deck_position(2, 0.0, 800.0), -1600.0);
    assert_eq!(deck_position(1, 0.25, 800.0), -1000.0);
    assert_eq!(deck_position(1, -0.25, 800.0), -600.0);
}
