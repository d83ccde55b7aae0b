//! One-second tick task of the elapsed-time counter

use std::{sync::Arc, time::Duration};

use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that drives the one-second tick while the timer runs.
///
/// The task idles on the run signal; on RUNNING it enters a tick loop that
/// renders and increments the counter once per second, independent of the
/// poll cadence. A STOPPED signal cancels the loop; the stop path has
/// already reset and re-rendered the counter.
pub async fn tick_task(state: Arc<AppState>) {
    info!("Starting timer tick task");

    let mut run_rx = state.timer_run_tx.subscribe();

    loop {
        // Idle until the timer is running.
        while !*run_rx.borrow_and_update() {
            if run_rx.changed().await.is_err() {
                debug!("Run signal closed, tick task exiting");
                return;
            }
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        // The first interval tick completes immediately; consume it so the
        // first rendered tick lands one second after the start.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = state.tick_timer() {
                        error!("Failed to tick timer: {}", e);
                    }
                }
                changed = run_rx.changed() => {
                    if changed.is_err() {
                        debug!("Run signal closed, tick task exiting");
                        return;
                    }
                    if !*run_rx.borrow_and_update() {
                        debug!("Timer stopped, cancelling tick loop");
                        break;
                    }
                    // A re-send of RUNNING (e.g. a seeded restart) keeps the
                    // current tick loop going.
                }
            }
        }
    }
}
