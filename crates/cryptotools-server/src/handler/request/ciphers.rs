//! Cipher request types.

use serde::{Deserialize, Serialize};

use super::required_text;
use crate::handler::{ErrorKind, Result};

/// Request payload for the Caesar cipher endpoints.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaesarRequest {
    /// Text to transform. An empty string counts as missing.
    pub text: Option<String>,
    /// Number of alphabet positions to shift by. Zero is valid.
    pub shift: Option<i64>,
}

impl CaesarRequest {
    /// Validates field presence and splits the request into its parts.
    pub fn into_parts(self) -> Result<(String, i64)> {
        let text = required_text(self.text, "text")?;
        let shift = self
            .shift
            .ok_or_else(|| ErrorKind::MissingField.with_resource("shift"))?;

        Ok((text, shift))
    }
}

/// Request payload for the Vigenère cipher endpoints.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VigenereRequest {
    /// Text to transform. An empty string counts as missing.
    pub text: Option<String>,
    /// Cipher keyword. An empty string counts as missing.
    pub key: Option<String>,
}

impl VigenereRequest {
    /// Validates field presence and splits the request into its parts.
    pub fn into_parts(self) -> Result<(String, String)> {
        let text = required_text(self.text, "text")?;
        let key = required_text(self.key, "key")?;

        Ok((text, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caesar_request_accepts_zero_shift() {
        let request = CaesarRequest {
            text: Some("HELLO".to_owned()),
            shift: Some(0),
        };

        let (text, shift) = request.into_parts().unwrap();
        assert_eq!(text, "HELLO");
        assert_eq!(shift, 0);
    }

    #[test]
    fn caesar_request_rejects_missing_shift() {
        let request = CaesarRequest {
            text: Some("HELLO".to_owned()),
            shift: None,
        };

        let error = request.into_parts().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingField);
        assert_eq!(error.resource(), Some("shift"));
    }

    #[test]
    fn caesar_request_rejects_empty_text() {
        let request = CaesarRequest {
            text: Some(String::new()),
            shift: Some(3),
        };

        let error = request.into_parts().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingField);
        assert_eq!(error.resource(), Some("text"));
    }

    #[test]
    fn vigenere_request_rejects_empty_key() {
        let request = VigenereRequest {
            text: Some("HELLO".to_owned()),
            key: Some(String::new()),
        };

        let error = request.into_parts().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingField);
        assert_eq!(error.resource(), Some("key"));
    }
}
