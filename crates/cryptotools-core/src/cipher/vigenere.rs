//! Vigenère cipher: polyalphabetic substitution keyed by a repeating
//! keyword.

use super::{Mode, letter_index, rotate};

/// Applies the Vigenère cipher to `text` with the given `key`.
///
/// Text and key are both normalized to uppercase. Each letter of the text
/// rotates by the alphabet index of the current key letter; the key cursor
/// advances only when a letter is consumed, so the key aligns against
/// letters and skips punctuation, digits and whitespace, which pass through
/// unchanged.
///
/// An empty key applies no shift: the output is the uppercase-normalized
/// input. Key characters outside the alphabet also apply no shift (the
/// cursor still consumes them). Encrypt and decrypt with the same key are
/// exact inverses.
pub fn vigenere(text: &str, key: &str, mode: Mode) -> String {
    let key: Vec<char> = key.to_uppercase().chars().collect();
    // Each call owns its cursor; state never escapes the loop.
    let mut cursor = 0usize;

    text.to_uppercase()
        .chars()
        .map(|ch| {
            if letter_index(ch).is_none() {
                return ch;
            }

            let key_shift = if key.is_empty() {
                0
            } else {
                letter_index(key[cursor % key.len()]).unwrap_or(0)
            };
            cursor += 1;

            rotate(ch, mode.effective_offset(i64::from(key_shift)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypts_with_key() {
        assert_eq!(vigenere("HELLO", "KEY", Mode::Encrypt), "RIJVS");
    }

    #[test]
    fn decrypts_with_key() {
        assert_eq!(vigenere("RIJVS", "KEY", Mode::Decrypt), "HELLO");
    }

    #[test]
    fn key_shorter_than_text_repeats() {
        assert_eq!(
            vigenere("HELLO WORLD", "ABC", Mode::Encrypt),
            "HFNLP YOSND"
        );
    }

    #[test]
    fn key_longer_than_text() {
        assert_eq!(vigenere("HELLO", "ABCDEFGHIJK", Mode::Encrypt), "HFNOS");
    }

    #[test]
    fn empty_key_is_identity() {
        assert_eq!(vigenere("Hello", "", Mode::Encrypt), "HELLO");
        assert_eq!(vigenere("Hello", "", Mode::Decrypt), "HELLO");
        assert_eq!(vigenere("HELLO 123!", "", Mode::Encrypt), "HELLO 123!");
    }

    #[test]
    fn non_alphabetic_key_characters_apply_no_shift() {
        // 'A' and a digit both leave their letter untouched.
        assert_eq!(vigenere("HELLO", "A1A1A", Mode::Encrypt), "HELLO");
        let encrypted = vigenere("HELLO", "K3Y", Mode::Encrypt);
        assert_eq!(vigenere(&encrypted, "K3Y", Mode::Decrypt), "HELLO");
    }

    #[test]
    fn preserves_non_alphabetic_characters() {
        assert_eq!(vigenere("HELLO 123!", "KEY", Mode::Encrypt), "RIJVS 123!");
    }

    #[test]
    fn cursor_skips_non_alphabetic_text() {
        // The space does not consume a key letter: W continues from where
        // O left off ("KEYKE" + "YKEYK"), not one position later.
        assert_eq!(
            vigenere("HELLO WORLD", "KEY", Mode::Encrypt),
            "RIJVS UYVJN"
        );
    }

    #[test]
    fn lowercase_key_matches_uppercase_key() {
        assert_eq!(
            vigenere("HELLO", "key", Mode::Encrypt),
            vigenere("HELLO", "KEY", Mode::Encrypt)
        );
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(vigenere("", "KEY", Mode::Encrypt), "");
    }

    #[test]
    fn decrypt_inverts_encrypt() {
        let text = "Attack at dawn, 04:00 sharp!";
        for key in ["K", "KEY", "LEMON", "crypto"] {
            let encrypted = vigenere(text, key, Mode::Encrypt);
            let decrypted = vigenere(&encrypted, key, Mode::Decrypt);
            assert_eq!(decrypted, text.to_uppercase(), "key {key}");
        }
    }
}
