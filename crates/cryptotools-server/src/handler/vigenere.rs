//! Vigenère cipher handlers.

use axum::Router;
use axum::routing::post;
use cryptotools_core::cipher::{self, Mode};

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::request::VigenereRequest;
use crate::handler::response::{VigenereDecryptResponse, VigenereEncryptResponse};
use crate::service::ServiceState;

/// Tracing target for Vigenère cipher operations.
const TRACING_TARGET: &str = "cryptotools_server::handler::vigenere";

#[tracing::instrument(skip_all)]
async fn vigenere_encrypt(
    Json(request): Json<VigenereRequest>,
) -> Result<Json<VigenereEncryptResponse>> {
    let (text, key) = request.into_parts()?;
    let encrypted = cipher::vigenere(&text, &key, Mode::Encrypt);

    tracing::debug!(
        target: TRACING_TARGET,
        mode = %Mode::Encrypt,
        key_chars = key.chars().count(),
        chars = text.chars().count(),
        "vigenere transform applied"
    );

    Ok(Json(VigenereEncryptResponse::new(text, encrypted, key)))
}

#[tracing::instrument(skip_all)]
async fn vigenere_decrypt(
    Json(request): Json<VigenereRequest>,
) -> Result<Json<VigenereDecryptResponse>> {
    let (text, key) = request.into_parts()?;
    let decrypted = cipher::vigenere(&text, &key, Mode::Decrypt);

    tracing::debug!(
        target: TRACING_TARGET,
        mode = %Mode::Decrypt,
        key_chars = key.chars().count(),
        chars = text.chars().count(),
        "vigenere transform applied"
    );

    Ok(Json(VigenereDecryptResponse::new(text, decrypted, key)))
}

/// Returns a [`Router`] with all Vigenère cipher routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/api/vigenere/encrypt", post(vigenere_encrypt))
        .route("/api/vigenere/decrypt", post(vigenere_decrypt))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handler::response::{VigenereDecryptResponse, VigenereEncryptResponse};
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn encrypts_text() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/vigenere/encrypt")
            .json(&json!({ "text": "Hello", "key": "KEY" }))
            .await;
        response.assert_status_ok();

        let body = response.json::<VigenereEncryptResponse>();
        assert_eq!(body.original, "Hello");
        assert_eq!(body.encrypted, "RIJVS");
        assert_eq!(body.key, "KEY");
        assert_eq!(body.algorithm, "Vigenère Cipher");

        Ok(())
    }

    #[tokio::test]
    async fn decrypts_text() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/vigenere/decrypt")
            .json(&json!({ "text": "RIJVS", "key": "KEY" }))
            .await;
        response.assert_status_ok();

        let body = response.json::<VigenereDecryptResponse>();
        assert_eq!(body.encrypted, "RIJVS");
        assert_eq!(body.decrypted, "HELLO");
        assert_eq!(body.algorithm, "Vigenère Cipher");

        Ok(())
    }

    #[tokio::test]
    async fn repeats_short_keys() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/vigenere/encrypt")
            .json(&json!({ "text": "HELLO WORLD", "key": "ABC" }))
            .await;
        response.assert_status_ok();

        let body = response.json::<VigenereEncryptResponse>();
        assert_eq!(body.encrypted, "HFNLP YOSND");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_missing_key() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/vigenere/encrypt")
            .json(&json!({ "text": "HELLO" }))
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "missing_field");
        assert_eq!(body["resource"], "key");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_empty_key() -> anyhow::Result<()> {
        let server = create_test_server()?;

        // The boundary treats an empty key as missing; only the core
        // transform defines empty-key behavior.
        let response = server
            .post("/api/vigenere/decrypt")
            .json(&json!({ "text": "HELLO", "key": "" }))
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "missing_field");
        assert_eq!(body["resource"], "key");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_missing_text() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/vigenere/decrypt")
            .json(&json!({ "key": "KEY" }))
            .await;
        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "missing_field");
        assert_eq!(body["resource"], "text");

        Ok(())
    }
}
