//! Poll loop of the patient-position widget

use std::{sync::Arc, time::Duration};

use tokio::time::interval;
use tracing::{debug, error, info};

use crate::{
    client::UbidotsClient,
    state::AppState,
    widgets::{render, Position},
};

/// Background task that polls the position variable and swaps the
/// background image when the code changes.
///
/// Change detection: the first fetched value always renders, later ones
/// only when they differ from the last observed value. Failed polls are
/// skipped with no retry.
pub async fn position_poller_task(
    state: Arc<AppState>,
    client: UbidotsClient,
    variable_id: String,
    poll_interval_ms: u64,
) {
    info!(
        "Starting position poll task for variable {} every {}ms",
        variable_id, poll_interval_ms
    );

    let mut last_value: Option<f64> = None;
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

        if last_value.is_some_and(|value| value == sample.value) {
            state.touch_position_poll();
            continue;
        }
        last_value = Some(sample.value);

        let position = Position::from_code(sample.value);
        debug!("Position changed to {:?} (code {})", position, sample.value);

        if let Err(e) =
            state.set_position_reading(render::format_value(sample.value), position.image_url())
        {
            error!("Failed to apply position update: {}", e);
        }
    }
}
