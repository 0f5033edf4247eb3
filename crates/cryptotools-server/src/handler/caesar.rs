//! Caesar cipher handlers.

use axum::Router;
use axum::routing::post;
use cryptotools_core::cipher::{self, Mode};

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::request::CaesarRequest;
use crate::handler::response::{CaesarDecryptResponse, CaesarEncryptResponse};
use crate::service::ServiceState;

/// Tracing target for Caesar cipher operations.
const TRACING_TARGET: &str = "cryptotools_server::handler::caesar";

#[tracing::instrument(skip_all)]
async fn caesar_encrypt(
    Json(request): Json<CaesarRequest>,
) -> Result<Json<CaesarEncryptResponse>> {
    let (text, shift) = request.into_parts()?;
    let encrypted = cipher::caesar(&text, shift, Mode::Encrypt);

    tracing::debug!(
        target: TRACING_TARGET,
        mode = %Mode::Encrypt,
        shift,
        chars = text.chars().count(),
        "caesar transform applied"
    );

    Ok(Json(CaesarEncryptResponse::new(text, encrypted, shift)))
}

#[tracing::instrument(skip_all)]
async fn caesar_decrypt(
    Json(request): Json<CaesarRequest>,
) -> Result<Json<CaesarDecryptResponse>> {
    let (text, shift) = request.into_parts()?;
    let decrypted = cipher::caesar(&text, shift, Mode::Decrypt);

    tracing::debug!(
        target: TRACING_TARGET,
        mode = %Mode::Decrypt,
        shift,
        chars = text.chars().count(),
        "caesar transform applied"
    );

    Ok(Json(CaesarDecryptResponse::new(text, decrypted, shift)))
}

/// Returns a [`Router`] with all Caesar cipher routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/api/caesar/encrypt", post(caesar_encrypt))
        .route("/api/caesar/decrypt", post(caesar_decrypt))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handler::response::{CaesarDecryptResponse, CaesarEncryptResponse};
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn encrypts_text() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/encrypt")
            .json(&json!({ "text": "Hello", "shift": 3 }))
            .await;
        response.assert_status_ok();

        let body = response.json::<CaesarEncryptResponse>();
        assert_eq!(body.original, "Hello");
        assert_eq!(body.encrypted, "KHOOR");
        assert_eq!(body.shift, 3);
        assert_eq!(body.algorithm, "Caesar Cipher");

        Ok(())
    }

    #[tokio::test]
    async fn decrypts_text() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/decrypt")
            .json(&json!({ "text": "KHOOR 123!", "shift": 3 }))
            .await;
        response.assert_status_ok();

        let body = response.json::<CaesarDecryptResponse>();
        assert_eq!(body.encrypted, "KHOOR 123!");
        assert_eq!(body.decrypted, "HELLO 123!");
        assert_eq!(body.algorithm, "Caesar Cipher");

        Ok(())
    }

    #[tokio::test]
    async fn normalizes_large_shifts() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/encrypt")
            .json(&json!({ "text": "A", "shift": 1000 }))
            .await;
        response.assert_status_ok();

        let body = response.json::<CaesarEncryptResponse>();
        assert_eq!(body.encrypted, "M");

        Ok(())
    }

    #[tokio::test]
    async fn accepts_zero_shift() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/encrypt")
            .json(&json!({ "text": "Hello", "shift": 0 }))
            .await;
        response.assert_status_ok();

        let body = response.json::<CaesarEncryptResponse>();
        assert_eq!(body.encrypted, "HELLO");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_missing_text() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/encrypt")
            .json(&json!({ "shift": 3 }))
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "missing_field");
        assert_eq!(body["resource"], "text");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_missing_shift() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/decrypt")
            .json(&json!({ "text": "KHOOR" }))
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "missing_field");
        assert_eq!(body["resource"], "shift");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_empty_text() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/encrypt")
            .json(&json!({ "text": "", "shift": 3 }))
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "missing_field");
        assert_eq!(body["resource"], "text");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_malformed_json() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/caesar/encrypt")
            .content_type("application/json")
            .text("{not json")
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "bad_request");

        Ok(())
    }
}
