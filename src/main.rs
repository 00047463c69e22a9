//! Simple API entry point.
//!
//! Loads configuration from the environment, initializes tracing, logs the
//! startup banner, builds the router and serves until a shutdown signal.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use simple_api::config::LogFormat;
use simple_api::http::start_server;
use simple_api::{create_router, AppConfig, AppState};

/// Simple API: a demo JSON service for validating deployment pipelines.
///
/// All settings are read from the environment: APP_VERSION, BUILD_ID,
/// ENVIRONMENT, PORT, DEBUG, LOG_FORMAT and RUST_LOG.
#[derive(Parser, Debug)]
#[command(name = "simple-api", version, about)]
struct Args {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    let config = AppConfig::from_env()?;

    init_tracing(&config);

    tracing::info!(
        version = %config.version,
        build = %config.build_id,
        environment = %config.environment,
        port = config.port,
        debug = config.debug,
        "Starting InfraForge Simple API v{}",
        config.version
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::new(config.log_filter());
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
