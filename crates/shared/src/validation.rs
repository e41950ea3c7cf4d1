//! Common validation and deserialization helpers.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Deserializes a boolean flag that clients may send as `true`/`false`,
/// `0`/`1`, or the strings `"0"`, `"1"`, `"true"`, `"false"`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(value) => Ok(value),
        FlagRepr::Int(0) => Ok(false),
        FlagRepr::Int(1) => Ok(true),
        FlagRepr::Int(other) => Err(de::Error::custom(format!(
            "invalid flag {}: expected 0 or 1",
            other
        ))),
        FlagRepr::Text(text) => parse_flag(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid flag '{}'", text))),
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Validates that an identifier is a positive database id.
pub fn validate_positive_id(id: i64) -> Result<(), validator::ValidationError> {
    if id > 0 {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("positive_id");
        err.message = Some("Identifier must be a positive integer".into());
        Err(err)
    }
}
