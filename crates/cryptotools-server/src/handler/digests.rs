//! Digest computation handlers.

use axum::Router;
use axum::routing::post;
use cryptotools_core::digest::{self, DigestAlgorithm};

use crate::extract::{Json, Path};
use crate::handler::Result;
use crate::handler::request::DigestRequest;
use crate::handler::response::DigestResponse;
use crate::service::ServiceState;

/// Tracing target for digest operations.
const TRACING_TARGET: &str = "cryptotools_server::handler::digests";

#[tracing::instrument(skip_all, fields(algorithm = %algorithm))]
async fn compute_digest(
    Path(algorithm): Path<DigestAlgorithm>,
    Json(request): Json<DigestRequest>,
) -> Result<Json<DigestResponse>> {
    let text = request.into_text()?;
    let hash = digest::hex_digest(algorithm, &text);

    tracing::debug!(
        target: TRACING_TARGET,
        algorithm = %algorithm,
        bytes = text.len(),
        "digest computed"
    );

    Ok(Json(DigestResponse::new(algorithm, text, hash)))
}

/// Returns a [`Router`] with all digest routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/api/hash/{algorithm}", post(compute_digest))
}
