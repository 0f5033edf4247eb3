#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod cipher;
pub mod digest;

// Re-export key types for convenience
pub use cipher::{Mode, caesar, vigenere};
pub use digest::{DigestAlgorithm, hex_digest};
