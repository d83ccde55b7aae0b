//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{PositionSurfaces, TimerSurfaces, TimerState};

/// Status of the device-activity timer widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerWidgetStatus {
    pub surfaces: TimerSurfaces,
    pub timer: TimerState,
    pub last_poll: Option<DateTime<Utc>>,
}

/// Status of the patient-position widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionWidgetStatus {
    pub surfaces: PositionSurfaces,
    pub last_poll: Option<DateTime<Utc>>,
}

/// Full status response served by `GET /status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer_widget: TimerWidgetStatus,
    /// Absent when no position variable was configured
    pub position_widget: Option<PositionWidgetStatus>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
