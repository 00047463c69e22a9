//! Probe endpoints for container orchestration.
//!
//! `/health` is the liveness probe and `/ready` the readiness probe. The
//! service has no dependencies to check, so both answer 200 whenever the
//! process can respond to HTTP.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub version: String,
    pub timestamp: String,
}

/// Liveness probe handler.
pub async fn health(State(state): State<AppState>) -> Json<ProbeResponse> {
    Json(probe(&state, "healthy"))
}

/// Readiness probe handler.
pub async fn ready(State(state): State<AppState>) -> Json<ProbeResponse> {
    Json(probe(&state, "ready"))
}

fn probe(state: &AppState, status: &'static str) -> ProbeResponse {
    ProbeResponse {
        status,
        version: state.config.version.clone(),
        timestamp: state.clock.timestamp(),
    }
}
