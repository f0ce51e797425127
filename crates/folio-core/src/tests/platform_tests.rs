use super::*;

#[test]
fn manual_clock_advances_monotonically() {
    let clock = ManualClock::new(10.0);
    assert_eq!(clock.now_millis(), 10.0);
    assert_eq!(clock.advance(16.0), 26.0);
    assert_eq!(clock.advance(-5.0), 26.0);
    clock.set(20.0);
    assert_eq!(clock.now_millis(), 26.0);
    clock.set(40.0);
    assert_eq!(clock.elapsed_millis(26.0), 14.0);
}

#[test]
fn system_clock_is_non_decreasing() {
    let clock = SystemClock::new();
    let first = clock.now_millis();
    let second = clock.now_millis();
    assert!(second >= first);
    assert!(clock.elapsed_millis(second + 1_000.0) >= 0.0);
}
