//! Lenient decoding for client input. Browser forms send `null` or `""` for
//! empty inputs; those must reach validation instead of failing to decode.

use serde::{Deserialize, Deserializer};

/// `null` decodes as an empty string.
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}
