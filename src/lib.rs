//! Simple API: a small JSON service for smoke-testing deployments.
//!
//! Exposes liveness and readiness probes, build/version identification, a
//! request echo and a filtered environment listing. All configuration comes
//! from environment variables read once at startup.

pub mod clock;
pub mod config;
pub mod environment;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
