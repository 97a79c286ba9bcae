mod harness;

use ::common::{Direction, TickClock};
use harness::*;

#[test]
fn test_first_frame_only_anchors() {
    let mut clock = TickClock::new(10);
    assert!(!clock.poll(1000.0));
    assert!(!clock.poll(1099.0));
    assert!(clock.poll(1100.0));
    assert!(!clock.poll(1150.0));
    assert!(clock.poll(1200.0));
}

#[test]
fn test_rate_is_clamped() {
    let mut clock = TickClock::new(0);
    assert_eq!(clock.tick_rate(), 2);
    assert_eq!(clock.interval_ms(), 500.0);

    clock.set_tick_rate(50);
    assert_eq!(clock.tick_rate(), 20);
    assert_eq!(clock.interval_ms(), 50.0);
}

#[test]
fn test_rate_change_applies_to_next_frame() {
    let mut clock = TickClock::new(2);
    clock.poll(0.0);
    assert!(!clock.poll(100.0));

    clock.set_tick_rate(10);
    assert!(clock.poll(100.0));
}

#[test]
fn test_engine_ticks_only_when_due() {
    let mut engine = running(20, &[(5, 5)], Direction::Right, (15, 15));
    engine.set_tick_rate(10);

    assert!(engine.tick(0.0).is_none());
    assert!(engine.tick(40.0).is_none());
    assert_eq!(engine.state().snake().head(), pos(5, 5));

    let events = engine.tick(100.0).expect("a tick is due after 100ms");
    assert_eq!(events.len(), 1);
    assert_eq!(engine.state().snake().head(), pos(6, 5));

    // Late frames still commit a single tick
    assert!(engine.tick(450.0).is_some());
    assert_eq!(engine.state().snake().head(), pos(7, 5));
}

#[test]
fn test_paused_engine_does_not_tick() {
    let mut engine = running(20, &[(5, 5)], Direction::Right, (15, 15));
    engine.set_tick_rate(10);
    engine.tick(0.0);

    engine.pause();
    assert!(engine.tick(1000.0).is_none());
    assert_eq!(engine.state().snake().head(), pos(5, 5));

    // Resuming re-anchors instead of firing immediately for the paused time
    engine.start();
    assert!(engine.tick(5000.0).is_none());
    assert!(engine.tick(5100.0).is_some());
    assert_eq!(engine.state().snake().head(), pos(6, 5));
}

#[test]
fn test_game_over_stops_ticking() {
    let mut engine = running(20, &[(19, 5)], Direction::Right, (15, 15));
    engine.tick(0.0);
    assert!(engine.tick(1000.0).is_some());
    assert!(engine.state().is_game_over());
    assert!(engine.tick(2000.0).is_none());
}

#[test]
fn test_toggle_between_frames_re_anchors() {
    let mut engine = running(20, &[(5, 5)], Direction::Right, (15, 15));
    engine.set_tick_rate(10);
    engine.tick(0.0);

    engine.toggle_run();
    engine.toggle_run();
    assert!(engine.tick(3000.0).is_none());
    assert!(engine.tick(3100.0).is_some());
}
