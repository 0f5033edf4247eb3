//! HTTP server startup with lifecycle management.
//!
//! This module provides a clean API for starting the HTTP server with
//! error handling and graceful shutdown.

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "cryptotools_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "cryptotools_cli::server::shutdown";

mod error;
mod http_server;
mod shutdown;

use axum::Router;
pub use error::{Result, ServerError};
use http_server::serve_http;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Starts the HTTP server with graceful shutdown.
///
/// # Arguments
///
/// * `app` - The Axum router to serve
/// * `config` - Server configuration that determines binding and timeouts
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> Result<()> {
    serve_http(app, config).await.inspect_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            code = err.error_code(),
            recoverable = err.is_recoverable(),
            suggestion = err.suggestion(),
            "server terminated with error"
        );
    })
}
