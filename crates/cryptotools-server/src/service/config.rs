//! App [`state`] configuration.
//!
//! [`state`]: crate::service::ServiceState

use serde::{Deserialize, Serialize};

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Service name reported by the health endpoint and startup logs.
    #[serde(default = "default_service_name")]
    #[cfg_attr(
        feature = "config",
        arg(long, env = "SERVICE_NAME", default_value = "cryptotools")
    )]
    pub service_name: String,
}

/// Default service name.
fn default_service_name() -> String {
    "cryptotools".to_owned()
}

impl ServiceConfig {
    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the service name is empty.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.service_name.is_empty() {
            return Err(anyhow::anyhow!("Service name cannot be empty"));
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
        }
    }
}
