//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, TimerSnapshot};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Run a control operation, record it and wrap the resulting snapshot
fn control(
    state: &AppState,
    action: &str,
    message: &str,
    result: Result<TimerSnapshot, String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(snapshot) => {
            state.record_action(action);
            info!("{} endpoint called - timer {} at {}", action, snapshot.run_state.as_str(), snapshot.display());
            Ok(Json(ApiResponse::new(message.to_string(), snapshot)))
        }
        Err(e) => {
            error!("Failed to {} timer: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.timer.start();
    control(&state, "start", "Timer running", result)
}

/// Handle POST /pause - Freeze the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.timer.pause();
    control(&state, "pause", "Timer paused", result)
}

/// Handle POST /reset - Pause and restore the full duration
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.timer.reset();
    control(&state, "reset", "Timer reset", result)
}

/// Handle GET /status - Return the current display and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.timer.snapshot() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        display: timer.display(),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
