//! HTTP route handlers.
//!
//! The routing table is fixed at startup: six JSON routes plus a JSON 404
//! fallback. A path that exists with the wrong method gets the router's 405.
//! Every response is marked `Cache-Control: no-store`.
//!
//! Request tracing is enabled via middleware that assigns a request ID to
//! each incoming request, allowing correlation of all logs within a request.

pub mod echo;
pub mod env;
pub mod health;
pub mod home;
pub mod version;

use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Probes - polled by the orchestrator
    let probe_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    // Deployment identification
    let info_routes = Router::new()
        .route("/", get(home::index))
        .route("/version", get(version::version))
        .route("/env", get(env::list));

    let echo_routes = Router::new().route("/echo", post(echo::echo));

    Router::new()
        .merge(probe_routes)
        .merge(info_routes)
        .merge(echo_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
