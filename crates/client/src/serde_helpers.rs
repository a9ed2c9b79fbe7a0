//! Serde helpers for the CZDS API's loose timestamp encoding.
//!
//! Responsibilities:
//! - Deserialize optional timestamps that arrive as RFC 3339 strings, as
//!   offset strings without a colon, as empty strings, or as JSON null.
//! - Keep parsing behavior centralized so model definitions stay readable.
//!
//! Explicitly does NOT handle:
//! - The "epoch-or-earlier means not applicable" display rule; that belongs
//!   to the formatter. Parsed values are preserved as-is.
//!
//! Invariants / assumptions:
//! - Absent field, null, and empty/whitespace strings all mean "no value".
//! - A non-empty string that fails both accepted formats is a parse error.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::Error as _;

fn parse_api_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Deserialize an `Option<DateTime<Utc>>` from the timestamp shapes the CZDS
/// API actually produces. Use with `#[serde(default)]` so that an absent
/// field also maps to `None`.
pub fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_api_datetime(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {s}"))),
    }
}
