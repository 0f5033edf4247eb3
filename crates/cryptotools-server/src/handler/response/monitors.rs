//! Health monitoring response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response returned by the health endpoint.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatusResponse {
    /// Reported service status; always `"OK"`.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
    /// Moment the status was produced (ISO-8601).
    pub timestamp: Timestamp,
}

impl HealthStatusResponse {
    /// Creates a new instance of [`HealthStatusResponse`].
    pub fn new(service_name: &str) -> Self {
        Self {
            status: "OK".to_owned(),
            message: format!("{service_name} API is operational"),
            timestamp: Timestamp::now(),
        }
    }
}
