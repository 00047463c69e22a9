//! Welcome endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to InfraForge Simple API! 🚀";

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub version: String,
    pub build: String,
    pub environment: String,
    pub timestamp: String,
}

pub async fn index(State(state): State<AppState>) -> Json<HomeResponse> {
    let config = &state.config;
    Json(HomeResponse {
        message: WELCOME_MESSAGE,
        version: config.version.clone(),
        build: config.build_id.clone(),
        environment: config.environment.clone(),
        timestamp: state.clock.timestamp(),
    })
}
