//! End-to-end poll flow of the device-activity timer widget, driven with
//! synthetic samples instead of a live API.

use dotboard::client::Sample;
use dotboard::state::AppState;
use dotboard::tasks::device_timer::apply_outcome;
use dotboard::widgets::{ActivityClassifier, TimerController};

const STALE_THRESHOLD_MS: u64 = 3000;

fn sample(value: f64, context_seconds: u64, timestamp_ms: i64) -> Sample {
    Sample {
        value,
        context_seconds: Some(context_seconds),
        timestamp_ms,
    }
}

/// One poll cycle: classify, step the state machine, apply to shared state.
fn poll(
    state: &AppState,
    controller: &mut TimerController,
    classifier: &ActivityClassifier,
    sample: Sample,
    now_ms: i64,
) {
    let active = classifier.is_active(&sample, now_ms);
    let outcome = controller.step(&sample, active);
    apply_outcome(state, &sample, &outcome).unwrap();
}

#[test]
fn first_active_poll_seeds_and_renders_everything() {
    let state = AppState::new(0, "127.0.0.1".to_string(), false);
    let classifier = ActivityClassifier::new(STALE_THRESHOLD_MS);
    let mut controller = TimerController::new();

    // Dot recorded 1s ago: device is active.
    poll(&state, &mut controller, &classifier, sample(2.0, 65, 9_000), 10_000);

    let surfaces = state.get_timer_surfaces().unwrap();
    assert_eq!(surfaces.value_text, "2");
    assert_eq!(surfaces.seconds_text, "65");
    assert_eq!(surfaces.device_text, "El device está activo");

    let timer = state.get_timer_state().unwrap();
    assert!(timer.running);
    assert_eq!(timer.elapsed_seconds, 65);
}

#[test]
fn stale_sample_stops_and_resynchronizes_seconds() {
    let state = AppState::new(0, "127.0.0.1".to_string(), false);
    let classifier = ActivityClassifier::new(STALE_THRESHOLD_MS);
    let mut controller = TimerController::new();

    poll(&state, &mut controller, &classifier, sample(2.0, 65, 9_000), 10_000);
    // Same dot, 5s later: past the threshold, device idle.
    poll(&state, &mut controller, &classifier, sample(2.0, 70, 9_000), 14_000);

    let surfaces = state.get_timer_surfaces().unwrap();
    assert_eq!(surfaces.device_text, "El device está inactivo");
    assert_eq!(surfaces.seconds_text, "70");
    assert_eq!(surfaces.timer_text, "00:00:00");

    let timer = state.get_timer_state().unwrap();
    assert!(!timer.running);
    assert_eq!(timer.elapsed_seconds, 0);
}

#[test]
fn unchanged_active_polls_never_reset_the_counter() {
    let state = AppState::new(0, "127.0.0.1".to_string(), false);
    let classifier = ActivityClassifier::new(STALE_THRESHOLD_MS);
    let mut controller = TimerController::new();

    poll(&state, &mut controller, &classifier, sample(2.0, 65, 9_000), 10_000);
    for i in 0..4 {
        let now = 10_000 + (i + 1) * 1_500;
        poll(&state, &mut controller, &classifier, sample(2.0, 65, now - 500), now);
    }

    let timer = state.get_timer_state().unwrap();
    assert!(timer.running);
    assert_eq!(timer.elapsed_seconds, 65);
}

#[test]
fn value_change_during_a_run_resets_even_while_active() {
    let state = AppState::new(0, "127.0.0.1".to_string(), false);
    let classifier = ActivityClassifier::new(STALE_THRESHOLD_MS);
    let mut controller = TimerController::new();

    poll(&state, &mut controller, &classifier, sample(2.0, 65, 9_000), 10_000);
    // Fresh dot with a different value: run ends despite the device being active.
    poll(&state, &mut controller, &classifier, sample(3.0, 65, 11_000), 11_500);

    let timer = state.get_timer_state().unwrap();
    assert!(!timer.running);
    assert_eq!(timer.elapsed_seconds, 0);
    assert_eq!(state.get_timer_surfaces().unwrap().timer_text, "00:00:00");

    // The next active poll with the now-current value resumes from zero
    // without re-seeding from context seconds.
    poll(&state, &mut controller, &classifier, sample(3.0, 65, 13_000), 13_500);
    let timer = state.get_timer_state().unwrap();
    assert!(timer.running);
    assert_eq!(timer.elapsed_seconds, 0);
}

#[test]
fn reactivation_resumes_without_reseeding() {
    let state = AppState::new(0, "127.0.0.1".to_string(), false);
    let classifier = ActivityClassifier::new(STALE_THRESHOLD_MS);
    let mut controller = TimerController::new();

    poll(&state, &mut controller, &classifier, sample(2.0, 65, 9_000), 10_000);
    poll(&state, &mut controller, &classifier, sample(2.0, 70, 9_000), 14_000);
    // Device comes back with a new dot, same value.
    poll(&state, &mut controller, &classifier, sample(2.0, 90, 15_000), 15_500);

    let timer = state.get_timer_state().unwrap();
    assert!(timer.running);
    // The seed latch fired on the first poll of the session; reactivation
    // continues from the reset counter instead of context seconds.
    assert_eq!(timer.elapsed_seconds, 0);
}
