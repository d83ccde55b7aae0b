//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::error;

use crate::state::AppState;

use super::responses::{HealthResponse, PositionWidgetStatus, StatusResponse, TimerWidgetStatus};

/// Handle GET /status - Return both widgets' surfaces and timer state
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let timer_surfaces = match state.get_timer_surfaces() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get timer surfaces: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let timer_state = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_timer_poll, last_position_poll) = state.get_last_polls();

    let position_widget = if state.position_enabled {
        match state.get_position_surfaces() {
            Ok(surfaces) => Some(PositionWidgetStatus {
                surfaces,
                last_poll: last_position_poll,
            }),
            Err(e) => {
                error!("Failed to get position surfaces: {}", e);
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    } else {
        None
    };

    Ok(Json(StatusResponse {
        timer_widget: TimerWidgetStatus {
            surfaces: timer_surfaces,
            timer: timer_state,
            last_poll: last_timer_poll,
        },
        position_widget,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
