//! Shared application state for request handlers.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::environment::{EnvSource, ProcessEnv};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything here is read-only after startup, so handlers never coordinate.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    /// State backed by the wall clock and the process environment.
    pub fn new(config: AppConfig) -> Self {
        Self::with_sources(config, SystemClock, ProcessEnv)
    }

    /// State with an explicit clock and environment source.
    pub fn with_sources(
        config: AppConfig,
        clock: impl Clock + 'static,
        env: impl EnvSource + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            clock: Arc::new(clock),
            env: Arc::new(env),
        }
    }
}
