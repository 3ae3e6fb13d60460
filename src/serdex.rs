// std imports
use std::time::Duration;

// third-party imports
use serde::{Deserialize, Deserializer, Serializer, de};

/// Serializes a duration as a floating point number of milliseconds.
pub fn millis<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(value.as_nanos() as f64 / 1e6)
}

/// Serializes an optional duration as a floating point number of milliseconds or `null`.
pub fn opt_millis<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => millis(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Deserializes a human readable duration like `250ms` or `1s 500ms`.
pub fn duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    humantime::parse_duration(&value).map_err(de::Error::custom)
}
