//! JSON decoding using serde_json.

use serde::de::IgnoredAny;
use serde_json::Value;

/// Decode one JSON document.
pub fn decode(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Check that `text` is one complete JSON document without building it.
pub(crate) fn validate(text: &str) -> Result<(), serde_json::Error> {
    serde_json::from_str::<IgnoredAny>(text).map(|_| ())
}
