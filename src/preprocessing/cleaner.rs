//! Lenient decoding of caller-supplied fields.
//!
//! Clients send loosely shaped JSON. A missing or non-string question is
//! read as the empty string instead of failing the request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::router::Mode;

pub struct Cleaner;

impl Cleaner {
    /// Returns the text of a string value, or `""` for anything else.
    pub fn text(value: Option<Value>) -> String {
        match value {
            Some(Value::String(s)) => s,
            _ => String::new(),
        }
    }

    /// Treats a blank query parameter the same as a missing one.
    pub fn present(param: Option<String>) -> Option<String> {
        param.filter(|p| !p.is_empty())
    }
}

/// `deserialize_with` adapter for free-text fields.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(Cleaner::text(value))
}

/// `deserialize_with` adapter for the optional explicit mode.
pub fn explicit_mode<'de, D>(deserializer: D) -> Result<Option<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Mode::from_value))
}
