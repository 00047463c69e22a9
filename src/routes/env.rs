//! Environment listing with sensitive variables removed.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::environment;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EnvResponse {
    pub environment: BTreeMap<String, String>,
    pub count: usize,
}

pub async fn list(State(state): State<AppState>) -> Json<EnvResponse> {
    let vars = environment::filtered(state.env.as_ref());
    tracing::debug!(count = vars.len(), "Listing environment");

    Json(EnvResponse {
        count: vars.len(),
        environment: vars,
    })
}
