use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::handler::ErrorKind;

/// Tracing target for panic recovery.
const TRACING_TARGET: &str = "cryptotools_server::middleware::panic";

type Panic = Box<dyn Any + Send + 'static>;

/// Transforms any panic into an internal server error [`Response`].
pub fn catch_panic(err: Panic) -> Response {
    if let Some(panic) = err.downcast_ref::<String>() {
        tracing::error!(
            target: TRACING_TARGET,
            "service panic: {}", panic,
        );
    } else if let Some(panic) = err.downcast_ref::<&str>() {
        tracing::error!(
            target: TRACING_TARGET,
            "service panic: {}", panic,
        );
    } else {
        tracing::error!(
            target: TRACING_TARGET,
            "service panic: unknown panic type",
        );
    }

    ErrorKind::InternalServerError.into_response()
}
