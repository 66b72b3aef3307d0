//! Phase Clock & Progress Tests
//!
//! Tests for:
//! - PhaseClock configuration validation
//! - Loop wrap, OneShot completion, Triggered start/reset
//! - Timer monotonicity
//! - ProgressEvaluator raw/shaped progress and derivative

use timelapse::TimelapseError;
use timelapse::animation::clock::{PhaseClock, PhaseEvent, PhaseStatus, TimingMode};
use timelapse::animation::curve::Curve;
use timelapse::animation::presets::PresetLibrary;
use timelapse::animation::progress::ProgressEvaluator;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Advances one frame the way the controller does: advance, record the
/// shaped value, then apply the end-of-cycle rule.
fn step(clock: &mut PhaseClock, dt: f32, shaped: f32) -> Option<PhaseEvent> {
    if clock.advance(dt) {
        clock.record_shaped_value(shaped);
    }
    clock.finish_frame()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn clock_rejects_non_positive_duration() {
    for duration in [0.0, -5.0, f32::NAN, f32::INFINITY] {
        let result = PhaseClock::new(duration, TimingMode::Loop);
        assert!(
            matches!(result, Err(TimelapseError::InvalidConfiguration(_))),
            "duration {duration} accepted"
        );
    }
}

#[test]
fn clock_initial_status_depends_on_mode() {
    let looping = PhaseClock::new(10.0, TimingMode::Loop).unwrap();
    let once = PhaseClock::new(10.0, TimingMode::OneShot).unwrap();
    let triggered = PhaseClock::new(10.0, TimingMode::Triggered { repeat: false }).unwrap();

    assert_eq!(looping.status(), PhaseStatus::Running);
    assert_eq!(once.status(), PhaseStatus::Running);
    assert_eq!(triggered.status(), PhaseStatus::Idle);
    assert_eq!(looping.timer(), 0.0);
}

#[test]
fn timing_mode_repeat_rules() {
    assert!(TimingMode::Loop.repeats());
    assert!(!TimingMode::OneShot.repeats());
    assert!(TimingMode::Triggered { repeat: true }.repeats());
    assert!(!TimingMode::Triggered { repeat: false }.repeats());
}

// ============================================================================
// Loop
// ============================================================================

#[test]
fn loop_wraps_timer_and_last_shaped_value() {
    let mut clock = PhaseClock::new(10.0, TimingMode::Loop).unwrap();

    for i in 1..10 {
        assert_eq!(step(&mut clock, 1.0, i as f32 / 10.0), None);
    }
    assert_eq!(clock.timer(), 9.0);

    assert_eq!(step(&mut clock, 1.0, 1.0), Some(PhaseEvent::Wrapped));
    assert_eq!(clock.timer(), 0.0);
    assert_eq!(clock.last_shaped_value(), 0.0);
    assert_eq!(clock.status(), PhaseStatus::Running);
}

#[test]
fn loop_keeps_running_across_many_cycles() {
    let mut clock = PhaseClock::new(2.0, TimingMode::Loop).unwrap();
    let mut wraps = 0;
    for _ in 0..20 {
        if step(&mut clock, 0.5, 0.5) == Some(PhaseEvent::Wrapped) {
            wraps += 1;
        }
        assert!(clock.timer() >= 0.0);
    }
    assert_eq!(wraps, 5);
}

// ============================================================================
// OneShot
// ============================================================================

#[test]
fn one_shot_completes_and_stops() {
    let mut clock = PhaseClock::new(10.0, TimingMode::OneShot).unwrap();
    for _ in 0..9 {
        assert_eq!(step(&mut clock, 1.0, 0.0), None);
    }
    assert_eq!(step(&mut clock, 1.0, 1.0), Some(PhaseEvent::Completed));
    assert_eq!(clock.status(), PhaseStatus::Completed);

    // Completed is terminal: advancing is a no-op.
    assert!(!clock.advance(1.0));
    assert_eq!(clock.timer(), 10.0);
    assert_eq!(clock.finish_frame(), None);
}

#[test]
fn one_shot_ignores_trigger() {
    let mut clock = PhaseClock::new(10.0, TimingMode::OneShot).unwrap();
    clock.advance(3.0);
    assert_eq!(clock.trigger(), None);
    assert_eq!(clock.timer(), 3.0);
}

// ============================================================================
// Triggered
// ============================================================================

#[test]
fn triggered_waits_for_trigger() {
    let mut clock = PhaseClock::new(10.0, TimingMode::Triggered { repeat: false }).unwrap();
    assert!(!clock.advance(1.0));
    assert_eq!(clock.timer(), 0.0);

    assert_eq!(clock.trigger(), Some(PhaseEvent::Started));
    assert_eq!(clock.status(), PhaseStatus::Running);
    assert!(clock.advance(1.0));
    assert_eq!(clock.timer(), 1.0);
}

#[test]
fn triggered_second_trigger_resets() {
    let mut clock = PhaseClock::new(10.0, TimingMode::Triggered { repeat: false }).unwrap();
    clock.trigger();
    step(&mut clock, 4.0, 0.4);

    assert_eq!(clock.trigger(), Some(PhaseEvent::Reset));
    assert_eq!(clock.status(), PhaseStatus::Idle);
    assert_eq!(clock.timer(), 0.0);
    assert_eq!(clock.last_shaped_value(), 0.0);
}

#[test]
fn triggered_one_shot_completes_then_resets() {
    let mut clock = PhaseClock::new(2.0, TimingMode::Triggered { repeat: false }).unwrap();
    clock.trigger();
    assert_eq!(step(&mut clock, 2.0, 1.0), Some(PhaseEvent::Completed));
    assert_eq!(clock.trigger(), Some(PhaseEvent::Reset));
    assert_eq!(clock.trigger(), Some(PhaseEvent::Started));
    assert_eq!(clock.status(), PhaseStatus::Running);
}

#[test]
fn triggered_repeating_wraps() {
    let mut clock = PhaseClock::new(2.0, TimingMode::Triggered { repeat: true }).unwrap();
    clock.trigger();
    assert_eq!(step(&mut clock, 2.0, 1.0), Some(PhaseEvent::Wrapped));
    assert_eq!(clock.status(), PhaseStatus::Running);
}

// ============================================================================
// Timer monotonicity
// ============================================================================

#[test]
fn negative_and_non_finite_deltas_do_not_rewind() {
    let mut clock = PhaseClock::new(10.0, TimingMode::Loop).unwrap();
    clock.advance(2.0);
    clock.advance(-1.0);
    clock.advance(f32::NAN);
    assert_eq!(clock.timer(), 2.0);
}

// ============================================================================
// ProgressEvaluator
// ============================================================================

#[test]
fn raw_progress_is_clamped() {
    assert!(approx(ProgressEvaluator::raw_progress(5.0, 10.0), 0.5));
    assert!(approx(ProgressEvaluator::raw_progress(15.0, 10.0), 1.0));
    assert!(approx(ProgressEvaluator::raw_progress(0.0, 10.0), 0.0));
}

#[test]
fn evaluate_shapes_raw_progress() {
    let curve = PresetLibrary::get(3).unwrap().curve.clone(); // SlowIn: u^2
    let sample = ProgressEvaluator::evaluate(5.0, 10.0, &curve, 0.0, 1.0);
    assert!(approx(sample.raw_t, 0.5));
    assert!(approx(sample.shaped_t, 0.25));
    assert!(approx(sample.shaped_derivative, 0.25));
}

#[test]
fn derivative_uses_previous_shaped_value() {
    let curve = Curve::default();
    let sample = ProgressEvaluator::evaluate(6.0, 10.0, &curve, 0.5, 0.5);
    assert!(approx(sample.shaped_derivative, 0.2), "got {}", sample.shaped_derivative);
}

#[test]
fn zero_delta_yields_zero_derivative() {
    let curve = Curve::default();
    let sample = ProgressEvaluator::evaluate(3.0, 10.0, &curve, 0.0, 0.0);
    assert_eq!(sample.shaped_derivative, 0.0);
    assert!(approx(sample.shaped_t, 0.3));
}
