//! Shared parsing utilities for crime data sources.
//!
//! Incident dates are parsed permissively: anything that does not match a
//! known format becomes `None` instead of failing the whole load.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Date-time formats tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only formats, taken as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses an incident timestamp in any of the supported formats.
///
/// Timestamps with a UTC offset keep their local wall-clock time. Returns
/// `None` for blank or unrecognized input.
#[must_use]
pub fn parse_incident_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parses the `date` field of a raw record. Anything other than a
/// parseable string (missing, `null`, numbers) is `None`.
#[must_use]
pub fn parse_date_value(value: Option<&Value>) -> Option<NaiveDateTime> {
    value.and_then(Value::as_str).and_then(parse_incident_date)
}
