//! Configuration loading and constants.
//!
//! All settings come from environment variables read once at startup. Each
//! option falls back to a default when unset. `AppConfig` is the immutable
//! snapshot handed to the router; nothing re-reads these variables later.

use const_format::formatcp;
use std::str::FromStr;

use crate::environment::{EnvSource, ProcessEnv};

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_BUILD_ID: &str = "BUILD_ID";
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
pub const ENV_PORT: &str = "PORT";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_BUILD_ID: &str = "local";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_PORT: u16 = 8080;

/// Interface the listener binds to
pub const LISTEN_HOST: [u8; 4] = [0, 0, 0, 0];

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// `Cache-Control` value for every response (probes must never be cached)
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", LOG_TARGET);

/// Log filter when RUST_LOG is not set and DEBUG is on
pub const DEBUG_LOG_FILTER: &str = formatcp!("{}=debug,tower_http=debug", LOG_TARGET);

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Explicit filter directive from RUST_LOG, if any
    pub filter: Option<String>,
}

// =============================================================================
// Application Configuration
// =============================================================================

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Reported as `version`
    pub version: String,
    /// Reported as `build` / `build_id`
    pub build_id: String,
    /// Reported as `environment`
    pub environment: String,
    pub port: u16,
    /// Verbose logging
    pub debug: bool,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_APP_VERSION.to_string(),
            build_id: DEFAULT_BUILD_ID.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_source(source: &dyn EnvSource) -> Result<Self, ConfigError> {
        let port = match source.get(ENV_PORT) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(err) => return Err(ConfigError::InvalidPort { value: raw, source: err }),
            },
            None => DEFAULT_PORT,
        };

        let format = source
            .get(ENV_LOG_FORMAT)
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            version: source
                .get(ENV_APP_VERSION)
                .unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            build_id: source
                .get(ENV_BUILD_ID)
                .unwrap_or_else(|| DEFAULT_BUILD_ID.to_string()),
            environment: source
                .get(ENV_ENVIRONMENT)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            port,
            debug: source.get(ENV_DEBUG).is_some_and(|v| parse_flag(&v)),
            logging: LoggingConfig {
                format,
                filter: source.get(ENV_LOG_FILTER).filter(|f| !f.trim().is_empty()),
            },
        })
    }

    /// Effective tracing filter: RUST_LOG if set, otherwise chosen by the debug flag.
    pub fn log_filter(&self) -> &str {
        match &self.logging.filter {
            Some(filter) => filter.as_str(),
            None if self.debug => DEBUG_LOG_FILTER,
            None => DEFAULT_LOG_FILTER,
        }
    }
}

/// Only a case-insensitive "true" turns a flag on.
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("Invalid LOG_FORMAT value {0:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}
