//! Lenient deserializers for selection parameters.
//!
//! The portal front end sends the semester sometimes as a number and
//! sometimes as a string, and leaves unset dropdowns as empty strings. These
//! helpers fold all of those shapes into `Option`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Accepts `3`, `"3"`, `""`, `null` or a missing field.
pub fn deserialize_optional_semester<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrString> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Trims the value and treats blank strings as absent.
pub fn deserialize_optional_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
