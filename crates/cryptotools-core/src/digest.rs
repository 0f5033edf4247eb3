//! Cryptographic digest computation.
//!
//! Digests are delegated to the RustCrypto implementations; this module
//! only selects the algorithm and hex-encodes the result.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Digest algorithms supported by the service.
///
/// The serde names (`md5`, `sha256`) are the identifiers used on the wire,
/// e.g. as URL path segments.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Canonical human-readable name of the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha256 => "SHA-256",
        }
    }

    /// Length of the hex-encoded digest in characters.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }
}

/// Computes the hex-encoded digest of `text` under `algorithm`.
///
/// The input is hashed as UTF-8 bytes. The output is lowercase hex and
/// always exactly [`DigestAlgorithm::hex_len`] characters, regardless of
/// input length or content.
pub fn hex_digest(algorithm: DigestAlgorithm, text: &str) -> String {
    match algorithm {
        DigestAlgorithm::Md5 => hex::encode(Md5::digest(text.as_bytes())),
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(text.as_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_known_vector() {
        assert_eq!(
            hex_digest(DigestAlgorithm::Md5, "Hello World"),
            "b10a8db164e0754105b7a99be72e3fe5"
        );
    }

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            hex_digest(DigestAlgorithm::Sha256, "Hello World"),
            "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e"
        );
    }

    #[test]
    fn empty_input_vectors() {
        assert_eq!(
            hex_digest(DigestAlgorithm::Md5, ""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            hex_digest(DigestAlgorithm::Sha256, ""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn output_length_is_fixed() {
        for text in ["", "a", "Hello World", "çok gizli mesaj 🔒"] {
            assert_eq!(hex_digest(DigestAlgorithm::Md5, text).len(), 32);
            assert_eq!(hex_digest(DigestAlgorithm::Sha256, text).len(), 64);
        }
    }

    #[test]
    fn output_is_lowercase_hex() {
        let hash = hex_digest(DigestAlgorithm::Sha256, "Hello World");
        assert!(hash.chars().all(|ch| ch.is_ascii_hexdigit()));
        assert_eq!(hash, hash.to_lowercase());
    }

    #[test]
    fn wire_names_round_trip() {
        assert_eq!(DigestAlgorithm::Md5.to_string(), "md5");
        assert_eq!(DigestAlgorithm::Sha256.to_string(), "sha256");

        let parsed: DigestAlgorithm = serde_json::from_str("\"sha256\"").unwrap();
        assert_eq!(parsed, DigestAlgorithm::Sha256);
        assert_eq!(parsed.name(), "SHA-256");
        assert_eq!(parsed.hex_len(), 64);
    }
}
