//! Cipher response types.

use serde::{Deserialize, Serialize};

/// Algorithm name reported by the Caesar endpoints.
pub const CAESAR_ALGORITHM: &str = "Caesar Cipher";

/// Algorithm name reported by the Vigenère endpoints.
pub const VIGENERE_ALGORITHM: &str = "Vigenère Cipher";

/// Response returned after encrypting with the Caesar cipher.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaesarEncryptResponse {
    /// Text exactly as submitted, before normalization.
    pub original: String,
    /// Uppercased ciphertext.
    pub encrypted: String,
    /// Shift the transform was applied with.
    pub shift: i64,
    /// Human-readable algorithm name.
    pub algorithm: String,
}

impl CaesarEncryptResponse {
    /// Creates a new instance of [`CaesarEncryptResponse`].
    pub fn new(original: String, encrypted: String, shift: i64) -> Self {
        Self {
            original,
            encrypted,
            shift,
            algorithm: CAESAR_ALGORITHM.to_owned(),
        }
    }
}

/// Response returned after decrypting with the Caesar cipher.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaesarDecryptResponse {
    /// Ciphertext exactly as submitted.
    pub encrypted: String,
    /// Uppercased plaintext.
    pub decrypted: String,
    /// Shift the transform was applied with.
    pub shift: i64,
    /// Human-readable algorithm name.
    pub algorithm: String,
}

impl CaesarDecryptResponse {
    /// Creates a new instance of [`CaesarDecryptResponse`].
    pub fn new(encrypted: String, decrypted: String, shift: i64) -> Self {
        Self {
            encrypted,
            decrypted,
            shift,
            algorithm: CAESAR_ALGORITHM.to_owned(),
        }
    }
}

/// Response returned after encrypting with the Vigenère cipher.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VigenereEncryptResponse {
    /// Text exactly as submitted, before normalization.
    pub original: String,
    /// Uppercased ciphertext.
    pub encrypted: String,
    /// Keyword exactly as submitted.
    pub key: String,
    /// Human-readable algorithm name.
    pub algorithm: String,
}

impl VigenereEncryptResponse {
    /// Creates a new instance of [`VigenereEncryptResponse`].
    pub fn new(original: String, encrypted: String, key: String) -> Self {
        Self {
            original,
            encrypted,
            key,
            algorithm: VIGENERE_ALGORITHM.to_owned(),
        }
    }
}

/// Response returned after decrypting with the Vigenère cipher.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VigenereDecryptResponse {
    /// Ciphertext exactly as submitted.
    pub encrypted: String,
    /// Uppercased plaintext.
    pub decrypted: String,
    /// Keyword exactly as submitted.
    pub key: String,
    /// Human-readable algorithm name.
    pub algorithm: String,
}

impl VigenereDecryptResponse {
    /// Creates a new instance of [`VigenereDecryptResponse`].
    pub fn new(encrypted: String, decrypted: String, key: String) -> Self {
        Self {
            encrypted,
            decrypted,
            key,
            algorithm: VIGENERE_ALGORITHM.to_owned(),
        }
    }
}
