//! Poll loop of the device-activity timer widget

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::{
    client::{Sample, UbidotsClient},
    state::AppState,
    widgets::{render, ActivityClassifier, StepOutcome, TimerCommand, TimerController},
};

/// Background task that polls the timer widget's variable and drives the
/// activity classifier and timer state machine with each sample.
///
/// A failed fetch or a malformed payload skips the cycle and leaves all
/// state untouched; the next poll overwrites whatever the failed one would
/// have. There is deliberately no retry or backoff beyond the fixed cadence.
pub async fn device_timer_task(
    state: Arc<AppState>,
    client: UbidotsClient,
    variable_id: String,
    poll_interval_ms: u64,
    stale_threshold_ms: u64,
) {
    info!(
        "Starting device timer poll task for variable {} every {}ms",
        variable_id, poll_interval_ms
    );

    let classifier = ActivityClassifier::new(stale_threshold_ms);
    let mut controller = TimerController::new();
    let mut ticker = interval(Duration::from_millis(poll_interval_ms));

    loop {
        ticker.tick().await;

        let sample = match client.last_dot(&variable_id).await {
            Ok(sample) => sample,
            Err(e) => {
                debug!("Poll of variable {} skipped: {:#}", variable_id, e);
                continue;
            }
        };

        let device_active = classifier.is_active(&sample, Utc::now().timestamp_millis());
        let outcome = controller.step(&sample, device_active);

        if let Err(e) = apply_outcome(&state, &sample, &outcome) {
            error!("Failed to apply poll result: {}", e);
        }
    }
}

/// Apply one evaluated poll to the shared state: refresh the widget's
/// display surfaces and execute the timer command, if any.
pub fn apply_outcome(
    state: &AppState,
    sample: &Sample,
    outcome: &StepOutcome,
) -> Result<(), String> {
    let seconds_text = outcome
        .show_context_seconds
        .then(|| sample.context_seconds.unwrap_or(0).to_string());

    state.set_timer_reading(
        render::format_value(sample.value),
        outcome.device_active,
        seconds_text,
    )?;

    match outcome.command {
        Some(TimerCommand::Start { seed }) => state.start_timer(seed),
        Some(TimerCommand::Stop) => state.stop_timer(),
        None => Ok(()),
    }
}
