use super::*;
use crate::Easing;

#[test]
fn idle_quick_to_reports_nothing() {
    let mut quick = QuickTo::new(AnimationSpec::tween(280, Easing::Power2Out));
    assert!(!quick.is_active());
    assert_eq!(quick.sample(10.0), None);
}

#[test]
fn retarget_restarts_from_current_value() {
    let mut quick = QuickTo::new(AnimationSpec::linear(100));
    quick.retarget(0.0, 100.0, 0.0);
    let mid = quick.sample(50.0).expect("active");
    assert!((mid - 50.0).abs() < 1e-4);

    quick.retarget(mid, 0.0, 50.0);
    assert_eq!(quick.target(), Some(0.0));
    let value = quick.sample(100.0).expect("active");
    assert!((value - 25.0).abs() < 1e-4);

    assert_eq!(quick.sample(150.0), Some(0.0));
    assert!(!quick.is_active(), "finished glide is dropped");
}

#[test]
fn kill_drops_the_glide() {
    let mut quick = QuickTo::new(AnimationSpec::linear(100));
    quick.retarget(0.0, 1.0, 0.0);
    quick.kill();
    assert_eq!(quick.sample(50.0), None);
}
