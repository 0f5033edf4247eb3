//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides middleware for:
//! - Error handling (panics, timeouts, tower service errors)
//! - Observability (tracing, request IDs)
//! - Security (CORS, compression, body limits)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use axum::Router;
//! use cryptotools_server::middleware::RouterExt;
//!
//! let app: Router = Router::new()
//!     .with_default_security_layer()
//!     .with_observability_layer()
//!     .with_error_handling_layer(Duration::from_secs(30));
//! ```

mod error_handling;
mod extensions;
mod observability;
pub mod security;

pub use extensions::RouterExt;
pub use security::CorsConfig;
