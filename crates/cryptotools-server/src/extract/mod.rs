//! Enhanced HTTP request extractors with improved error handling.
//!
//! Drop-in replacements for their standard Axum counterparts whose
//! rejections map into the handler error type, so malformed requests
//! produce the same JSON error shape as every other failure:
//!
//! - [`Json`] - JSON body extraction; rejections become `bad_request`
//! - [`Path`] - path parameter extraction; rejections become `not_found`

mod json;
mod path;

pub use crate::extract::json::Json;
pub use crate::extract::path::Path;
