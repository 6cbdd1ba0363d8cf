//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::events::ScreeningEvent;
use crate::state::AppState;

use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /screening/start - Leave the intro screen and begin playback
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    if let Err(e) = state.dispatch(ScreeningEvent::StartScreening) {
        error!("Failed to request screening start: {}", e);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    info!("Start endpoint called - screening start requested");
    respond_ok(&state, "Screening start requested")
}

/// Handle POST /playback/toggle - Toggle play/pause
pub async fn playback_toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    if let Err(e) = state.dispatch(ScreeningEvent::PlaybackToggle) {
        error!("Failed to request playback toggle: {}", e);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    info!("Playback endpoint called - play/pause toggle requested");
    respond_ok(&state, "Play/pause toggle requested")
}

/// Handle POST /interval/toggle - Manually toggle the intermission
///
/// Rejected unless the daemon was started with the manual toggle enabled;
/// production kiosks only ever run the scheduled intermission.
pub async fn interval_toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    if !state.manual_toggle {
        warn!("Interval endpoint called but the manual toggle is disabled");
        return Err(StatusCode::FORBIDDEN);
    }

    if let Err(e) = state.dispatch(ScreeningEvent::IntervalToggle) {
        error!("Failed to request intermission toggle: {}", e);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    info!("Interval endpoint called - intermission toggle requested");
    respond_ok(&state, "Intermission toggle requested")
}

/// Handle GET /status - Return current screening status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let screening = match state.snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get screening state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let countdown = match state.get_countdown() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to get countdown state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        screening,
        interval_threshold_seconds: state.threshold_seconds,
        interval_duration_seconds: state.duration_seconds,
        countdown_active: countdown.is_active(),
        countdown_remaining_seconds: countdown.remaining_seconds(),
        countdown_display: countdown.display(),
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

fn respond_ok(state: &AppState, message: &str) -> Result<Json<ApiResponse>, StatusCode> {
    match state.snapshot() {
        Ok(screening) => Ok(Json(ApiResponse::ok(message.to_string(), screening))),
        Err(e) => {
            error!("Failed to read screening state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
