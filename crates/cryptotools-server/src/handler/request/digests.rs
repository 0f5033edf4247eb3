//! Digest request types.

use serde::{Deserialize, Serialize};

use super::required_text;
use crate::handler::Result;

/// Request payload for the digest endpoint.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestRequest {
    /// Text to digest. An empty string counts as missing.
    pub text: Option<String>,
}

impl DigestRequest {
    /// Validates field presence and returns the text to digest.
    pub fn into_text(self) -> Result<String> {
        required_text(self.text, "text")
    }
}
