use super::*;
use crate::Tween;

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::Power1Out,
        Easing::Power2Out,
        Easing::Power3InOut,
        Easing::CubicBezier(0.42, 0.0, 0.58, 1.0),
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (end - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn out_curves_lead_linear_progress() {
    assert!(Easing::Power1Out.transform(0.3) > 0.3);
    assert!(Easing::Power2Out.transform(0.3) > Easing::Power1Out.transform(0.3));
}

#[test]
fn power3_in_out_is_symmetric_around_midpoint() {
    let easing = Easing::Power3InOut;
    assert!((easing.transform(0.5) - 0.5).abs() < 1e-6);
    let low = easing.transform(0.2);
    let high = easing.transform(0.8);
    assert!((low + high - 1.0).abs() < 1e-5);
    assert!(low < 0.2, "slow start");
}

#[test]
fn easing_clamps_out_of_range_fractions() {
    assert_eq!(Easing::Power2Out.transform(-0.5), 0.0);
    assert_eq!(Easing::Power2Out.transform(1.5), 1.0);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::Power2Out);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn tween_respects_delay_and_lands_on_target() {
    let tween = Tween::new(0.0f32, 10.0, AnimationSpec::linear(100).with_delay(50));
    assert_eq!(tween.value_at(25.0), 0.0);
    assert!((tween.value_at(100.0) - 5.0).abs() < 1e-4);
    assert_eq!(tween.value_at(150.0), 10.0);
    assert!(!tween.is_finished_at(149.0));
    assert!(tween.is_finished_at(150.0));
}

#[test]
fn zero_duration_tween_jumps_to_target() {
    let tween = Tween::new(3.0f64, 7.0, AnimationSpec::linear(0));
    assert_eq!(tween.value_at(0.0), 3.0);
    assert_eq!(tween.value_at(1.0), 7.0);
}
