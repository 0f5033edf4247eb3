//! Extension traits for `axum::Router` to easily apply middleware layers.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;

use crate::middleware::error_handling::{catch_panic, handle_error};
use crate::middleware::observability::{
    create_propagate_request_id_layer, create_request_id_layer, create_sensitive_headers_layer,
    create_trace_layer,
};
use crate::middleware::security::{CorsConfig, create_body_limit_layer, create_cors_layer};

/// Maximum accepted request body size in bytes (1MB).
///
/// Every payload this API accepts is a short JSON document; anything larger
/// is rejected before it reaches a handler.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Extension trait for `axum::`[`Router`] for layering middleware.
///
/// This trait provides convenient methods to add common middleware stacks
/// to your Axum router in a composable way.
pub trait RouterExt<S> {
    /// Layers [`HandleError`], [`CatchPanic`] and [`Timeout`] middlewares.
    ///
    /// This middleware stack handles various error conditions:
    /// - Request timeouts
    /// - Panics in handlers
    /// - Tower service errors
    ///
    /// # Arguments
    ///
    /// * `timeout` - Maximum duration to wait for a request to complete
    ///
    /// [`HandleError`]: axum::error_handling::HandleErrorLayer
    /// [`CatchPanic`]: tower_http::catch_panic::CatchPanicLayer
    /// [`Timeout`]: tower::timeout::TimeoutLayer
    fn with_error_handling_layer(self, timeout: Duration) -> Self;

    /// Layers [`SetRequestId`], [`Trace`] and [`PropagateRequestId`] middlewares.
    ///
    /// This middleware stack provides observability features:
    /// - Generates unique request IDs
    /// - Adds structured logging for requests
    /// - Propagates request IDs through the request lifecycle
    /// - Marks sensitive headers for redaction
    ///
    /// [`SetRequestId`]: tower_http::request_id::SetRequestIdLayer
    /// [`Trace`]: tower_http::trace::TraceLayer
    /// [`PropagateRequestId`]: tower_http::request_id::PropagateRequestIdLayer
    fn with_observability_layer(self) -> Self;

    /// Layers security middlewares: CORS, compression, and body limits.
    ///
    /// # Arguments
    ///
    /// * `cors_config` - CORS configuration
    fn with_security_layer(self, cors_config: CorsConfig) -> Self;

    /// Layers security middlewares with default configurations.
    ///
    /// This is a convenience method that uses default security settings.
    /// For production use, prefer `with_security_layer` with custom configs.
    fn with_default_security_layer(self) -> Self;
}

impl<S> RouterExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_error_handling_layer(self, timeout: Duration) -> Self {
        let middlewares = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_error))
            .layer(CatchPanicLayer::custom(catch_panic))
            .layer(TimeoutLayer::new(timeout));

        self.layer(middlewares)
    }

    fn with_observability_layer(self) -> Self {
        // Apply layers in reverse order (last layer wraps first)
        self.layer(create_propagate_request_id_layer())
            .layer(create_sensitive_headers_layer())
            .layer(create_trace_layer())
            .layer(create_request_id_layer())
    }

    fn with_security_layer(self, cors_config: CorsConfig) -> Self {
        self.layer(create_body_limit_layer(MAX_BODY_SIZE))
            .layer(CompressionLayer::new())
            .layer(create_cors_layer(&cors_config))
    }

    fn with_default_security_layer(self) -> Self {
        self.with_security_layer(CorsConfig::default())
    }
}
