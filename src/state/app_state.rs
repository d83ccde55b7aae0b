//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::widgets::render;

use super::{PositionSurfaces, TimerSurfaces, TimerState};

/// Main application state shared between the poll tasks, the tick task and
/// the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Display surfaces of the device-activity timer widget
    pub timer_surfaces: Arc<Mutex<TimerSurfaces>>,
    /// Display surfaces of the patient-position widget
    pub position_surfaces: Arc<Mutex<PositionSurfaces>>,
    /// Elapsed-time counter, owned here and mutated only through the
    /// start/stop/tick methods below
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Whether the position widget was configured at startup
    pub position_enabled: bool,
    /// Wall-clock time of the last successful poll per widget
    pub last_timer_poll: Arc<Mutex<Option<DateTime<Utc>>>>,
    pub last_position_poll: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel signalling the tick task whether the timer is running
    pub timer_run_tx: watch::Sender<bool>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_run_rx: watch::Receiver<bool>,
}

impl AppState {
    /// Create a new AppState with nothing rendered and the timer stopped
    pub fn new(port: u16, host: String, position_enabled: bool) -> Self {
        let (timer_run_tx, timer_run_rx) = watch::channel(false);

        Self {
            timer_surfaces: Arc::new(Mutex::new(TimerSurfaces::new())),
            position_surfaces: Arc::new(Mutex::new(PositionSurfaces::new())),
            timer_state: Arc::new(Mutex::new(TimerState::new())),
            start_time: Instant::now(),
            port,
            host,
            position_enabled,
            last_timer_poll: Arc::new(Mutex::new(None)),
            last_position_poll: Arc::new(Mutex::new(None)),
            timer_run_tx,
            _timer_run_rx: timer_run_rx,
        }
    }

    /// Start (or resume) the timer, optionally seeding the counter, and
    /// signal the tick task
    pub fn start_timer(&self, seed: Option<u64>) -> Result<(), String> {
        let mut timer_state = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        if let Some(seconds) = seed {
            timer_state.elapsed_seconds = seconds;
            info!("Timer started, seeded at {} seconds", seconds);
        } else {
            info!("Timer resumed at {} seconds", timer_state.elapsed_seconds);
        }
        timer_state.running = true;
        drop(timer_state);

        if let Err(e) = self.timer_run_tx.send(true) {
            warn!("Failed to signal tick task: {}", e);
        }

        Ok(())
    }

    /// Stop the timer, reset the counter to zero, render the zeroed display
    /// and signal the tick task
    pub fn stop_timer(&self) -> Result<(), String> {
        let mut timer_state = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        timer_state.elapsed_seconds = 0;
        timer_state.running = false;
        drop(timer_state);

        let mut surfaces = self.timer_surfaces.lock()
            .map_err(|e| format!("Failed to lock timer surfaces: {}", e))?;
        surfaces.timer_text = render::format_hms(0);
        drop(surfaces);

        if let Err(e) = self.timer_run_tx.send(false) {
            warn!("Failed to signal tick task: {}", e);
        }

        info!("Timer stopped and reset");
        Ok(())
    }

    /// One tick of the running timer: render the current count, then
    /// increment it. A tick on a stopped timer is a no-op; the stop path
    /// already rendered the zeroed display.
    pub fn tick_timer(&self) -> Result<(), String> {
        let mut timer_state = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        if !timer_state.running {
            return Ok(());
        }
        let shown = timer_state.elapsed_seconds;
        timer_state.elapsed_seconds += 1;
        drop(timer_state);

        let mut surfaces = self.timer_surfaces.lock()
            .map_err(|e| format!("Failed to lock timer surfaces: {}", e))?;
        surfaces.timer_text = render::format_hms(shown);

        Ok(())
    }

    /// Apply one poll's display updates for the timer widget
    pub fn set_timer_reading(
        &self,
        value_text: String,
        device_active: bool,
        seconds_text: Option<String>,
    ) -> Result<(), String> {
        let mut surfaces = self.timer_surfaces.lock()
            .map_err(|e| format!("Failed to lock timer surfaces: {}", e))?;

        surfaces.value_text = value_text;
        surfaces.device_text = render::device_state_text(device_active).to_string();
        if let Some(seconds) = seconds_text {
            surfaces.seconds_text = seconds;
        }
        drop(surfaces);

        if let Ok(mut last) = self.last_timer_poll.lock() {
            *last = Some(Utc::now());
        }

        Ok(())
    }

    /// Apply one poll's display updates for the position widget
    pub fn set_position_reading(&self, value_text: String, image_url: &str) -> Result<(), String> {
        let mut surfaces = self.position_surfaces.lock()
            .map_err(|e| format!("Failed to lock position surfaces: {}", e))?;

        surfaces.value_text = value_text;
        surfaces.background_image = image_url.to_string();
        drop(surfaces);

        if let Ok(mut last) = self.last_position_poll.lock() {
            *last = Some(Utc::now());
        }

        Ok(())
    }

    /// Record a position poll that fetched successfully but changed nothing
    pub fn touch_position_poll(&self) {
        if let Ok(mut last) = self.last_position_poll.lock() {
            *last = Some(Utc::now());
        }
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Get current timer widget surfaces
    pub fn get_timer_surfaces(&self) -> Result<TimerSurfaces, String> {
        self.timer_surfaces.lock()
            .map(|surfaces| surfaces.clone())
            .map_err(|e| format!("Failed to lock timer surfaces: {}", e))
    }

    /// Get current position widget surfaces
    pub fn get_position_surfaces(&self) -> Result<PositionSurfaces, String> {
        self.position_surfaces.lock()
            .map(|surfaces| surfaces.clone())
            .map_err(|e| format!("Failed to lock position surfaces: {}", e))
    }

    /// Get the last successful poll times of both widgets
    pub fn get_last_polls(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let timer = self.last_timer_poll.lock().ok().and_then(|t| *t);
        let position = self.last_position_poll.lock().ok().and_then(|t| *t);
        (timer, position)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
