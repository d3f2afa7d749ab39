use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Parse a meeting date from any of the formats the backend emits
///
/// Accepts RFC3339 (`2023-04-05T17:30:00Z`), naive ISO datetimes with optional
/// fractional seconds (`2023-04-05T00:00:00`), or plain dates (`2023-04-05`).
pub fn parse_meeting_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Custom deserializer for `meeting_date` that accepts datetime or date strings
pub fn deserialize_meeting_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_meeting_date(&s).ok_or_else(|| Error::custom(format!("invalid meeting date: '{}'", s)))
}
