//! Digest response types.

use cryptotools_core::DigestAlgorithm;
use serde::{Deserialize, Serialize};

/// Response returned after computing a digest.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestResponse {
    /// Text exactly as submitted.
    pub original: String,
    /// Lowercase hex-encoded digest.
    pub hash: String,
    /// Human-readable algorithm name.
    pub algorithm: String,
    /// Length of the hex digest in characters (32 for MD5, 64 for SHA-256).
    pub length: usize,
}

impl DigestResponse {
    /// Creates a new instance of [`DigestResponse`].
    pub fn new(algorithm: DigestAlgorithm, original: String, hash: String) -> Self {
        let length = hash.len();
        Self {
            original,
            hash,
            algorithm: algorithm.name().to_owned(),
            length,
        }
    }
}
