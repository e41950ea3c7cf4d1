//! Timestamp and duration handling for detection records.
//!
//! Detection and video dates are stored as `TIMESTAMP` (no time zone) and
//! rendered as `YYYY-MM-DD HH:MM:SS`. Video lengths are stored as `TIME` and
//! rendered as `HH:MM:SS`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Output format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output format for durations.
pub const DURATION_FORMAT: &str = "%H:%M:%S";

const NAIVE_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Invalid timestamp '{0}': expected YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or RFC 3339")]
    InvalidTimestamp(String),

    #[error("Invalid duration '{0}': expected HH:MM:SS")]
    InvalidDuration(String),
}

/// Parses a detection timestamp.
///
/// Accepts a bare date (midnight is assumed), a date-time with a space or
/// `T` separator, or an RFC 3339 string (converted to UTC).
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_utc());
    }

    for format in NAIVE_INPUT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TimestampError::InvalidTimestamp(input.to_string()))
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a `HH:MM:SS` duration.
pub fn parse_duration(input: &str) -> Result<NaiveTime, TimestampError> {
    NaiveTime::parse_from_str(input.trim(), DURATION_FORMAT)
        .map_err(|_| TimestampError::InvalidDuration(input.to_string()))
}

pub fn format_duration(value: &NaiveTime) -> String {
    value.format(DURATION_FORMAT).to_string()
}

/// Serde adapter for `NaiveDateTime` fields using [`TIMESTAMP_FORMAT`].
pub mod serde_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `NaiveTime` durations using [`DURATION_FORMAT`].
pub mod serde_duration {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_duration(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}
