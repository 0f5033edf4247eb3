//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! Each resource module exposes a `routes()` function; [`routes`] merges
//! them into the complete API router with a not-found fallback.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod caesar;
mod digests;
mod error;
mod monitors;
mod request;
mod response;
mod vigenere;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Fallback for unknown endpoints.
#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all API routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(state: ServiceState) -> Router {
    Router::new()
        .merge(caesar::routes())
        .merge(vigenere::routes())
        .merge(digests::routes())
        .merge(monitors::routes())
        .fallback(handler)
        .with_state(state)
}
