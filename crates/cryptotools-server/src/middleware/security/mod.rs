//! Security middleware (CORS, body limits).

mod body_limit;
mod cors;

pub use body_limit::create_body_limit_layer;
pub use cors::{CorsConfig, create_cors_layer};
