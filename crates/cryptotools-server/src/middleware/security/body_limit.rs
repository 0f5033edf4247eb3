//! Request body size limiting.

use tower_http::limit::RequestBodyLimitLayer;

/// Creates a layer that rejects request bodies larger than `max_bytes`.
pub fn create_body_limit_layer(max_bytes: usize) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(max_bytes)
}
