//! Request types for HTTP handlers.
//!
//! Every field is optional at the deserialization layer so that absence can
//! be reported as a `missing_field` error naming the field, instead of a
//! generic deserialization failure. Presence is checked by the `into_*`
//! methods: a string field counts as missing when absent or empty, while an
//! integer field only counts as missing when absent (zero is valid).

mod ciphers;
mod digests;

pub use ciphers::*;
pub use digests::*;

use crate::handler::{ErrorKind, Result};

/// Returns the field value when present and non-empty.
fn required_text(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ErrorKind::MissingField.with_resource(field))
}
