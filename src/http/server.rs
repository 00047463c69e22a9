//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, LISTEN_HOST};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to serve on {addr}: {source}")]
    Serve {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Start the HTTP server on the configured port.
///
/// Blocks until the server shuts down. Fails if the port cannot be bound.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from((LISTEN_HOST, config.port));
    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    shutdown::setup_shutdown_handler(handle.clone());

    let watcher = handle.clone();
    tokio::spawn(async move {
        if let Some(bound) = watcher.listening().await {
            tracing::info!(addr = %bound, "Listening for requests");
        }
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|source| ServerError::Serve { addr, source })?;

    tracing::info!("Server stopped");
    Ok(())
}
