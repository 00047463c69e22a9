//! HTTP server module.
//!
//! Serves plain HTTP on `0.0.0.0:<port>`; TLS is left to whatever sits in
//! front of the service. The server drains in-flight requests on
//! SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
