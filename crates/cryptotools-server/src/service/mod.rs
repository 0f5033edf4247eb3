//! Application state and dependency injection.

mod config;

use jiff::Timestamp;

pub use crate::service::config::ServiceConfig;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    /// Service name reported by the health endpoint.
    pub service_name: String,
    /// Moment the state was created, i.e. process startup.
    pub started_at: Timestamp,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
            started_at: Timestamp::now(),
        }
    }
}
