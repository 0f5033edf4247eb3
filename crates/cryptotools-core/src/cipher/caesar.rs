//! Caesar cipher: fixed-offset substitution over the Latin alphabet.

use super::{Mode, rotate};

/// Applies the Caesar cipher to `text`.
///
/// The input is normalized to uppercase, then every letter rotates by
/// `shift` positions: forward when encrypting, backward when decrypting.
/// Characters outside the alphabet are preserved at their original
/// positions.
///
/// Any `i64` shift is valid; the offset is reduced modulo the alphabet
/// length, so `shift`, `shift + 26` and `shift - 26` produce identical
/// output. Encrypt and decrypt with the same shift are exact inverses.
///
/// # Example
///
/// ```rust
/// use cryptotools_core::cipher::{Mode, caesar};
///
/// assert_eq!(caesar("Hello, World!", 3, Mode::Encrypt), "KHOOR, ZRUOG!");
/// assert_eq!(caesar("KHOOR, ZRUOG!", 3, Mode::Decrypt), "HELLO, WORLD!");
/// ```
pub fn caesar(text: &str, shift: i64, mode: Mode) -> String {
    let offset = mode.effective_offset(shift);

    text.to_uppercase()
        .chars()
        .map(|ch| rotate(ch, offset))
        .collect()
}
