//! Build and deployment identification.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// `rustc --version` of the compiler that built this binary
pub const RUST_VERSION: &str = env!("SIMPLE_API_RUSTC_VERSION");

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub build_id: String,
    pub environment: String,
    pub rust_version: &'static str,
    pub timestamp: String,
}

pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    let config = &state.config;
    Json(VersionResponse {
        version: config.version.clone(),
        build_id: config.build_id.clone(),
        environment: config.environment.clone(),
        rust_version: RUST_VERSION,
        timestamp: state.clock.timestamp(),
    })
}
