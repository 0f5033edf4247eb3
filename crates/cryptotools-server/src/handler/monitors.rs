//! System health monitoring and status check handlers.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use jiff::Timestamp;

use crate::extract::Json;
use crate::handler::response::HealthStatusResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "cryptotools_server::handler::monitors";

#[tracing::instrument(skip_all)]
async fn health_status(State(state): State<ServiceState>) -> Json<HealthStatusResponse> {
    let response = HealthStatusResponse::new(&state.service_name);
    let uptime_secs = Timestamp::now().as_second() - state.started_at.as_second();

    tracing::debug!(
        target: TRACING_TARGET,
        uptime_secs,
        "health status reported"
    );

    Json(response)
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/api/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::handler::response::HealthStatusResponse;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn reports_ok_status() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body = response.json::<HealthStatusResponse>();
        assert_eq!(body.status, "OK");
        assert!(body.message.contains("cryptotools"));

        Ok(())
    }

    #[tokio::test]
    async fn timestamp_is_recent() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body = response.json::<HealthStatusResponse>();
        let age = Timestamp::now().as_second() - body.timestamp.as_second();
        assert!(age < 60, "health timestamp should be recent");

        Ok(())
    }
}
