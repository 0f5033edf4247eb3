//! Observability middleware for monitoring and debugging.
//!
//! This module provides middleware for:
//! - Distributed tracing with request IDs
//! - Structured logging

use axum::http::header;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

/// Creates request ID maker for generating unique request IDs.
pub fn create_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(
        header::HeaderName::from_static("x-request-id"),
        MakeRequestUuid,
    )
}

/// Creates trace layer for HTTP logging.
pub fn create_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Creates sensitive headers layer to redact auth info from logs.
pub fn create_sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    SetSensitiveRequestHeadersLayer::new([header::AUTHORIZATION, header::COOKIE])
}

/// Creates request ID propagation layer.
pub fn create_propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(header::HeaderName::from_static("x-request-id"))
}
