#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The typed incident record produced from a fetched crime table.
//!
//! Every fetched row becomes one [`Incident`]. The four date-derived values
//! (year, month, calendar day, hour) are computed once when the incident is
//! built and never change afterwards.

use chrono::{Datelike as _, NaiveDate, NaiveDateTime, Timelike as _};
use crime_sample_crime_models::ViolentCrimeType;
use serde::Serialize;

/// Values derived from a successfully parsed incident timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateParts {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar date with the time of day dropped.
    pub day: NaiveDate,
    /// Hour of day, 0-23.
    pub hour: u32,
}

impl DateParts {
    /// Splits a timestamp into its derived parts.
    #[must_use]
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.date(),
            hour: dt.hour(),
        }
    }
}

/// One reported crime.
///
/// Coordinates stay as the raw strings the portal sent; they are only
/// converted to numbers when a map is built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Portal row ID.
    pub id: Option<String>,
    /// Police case number.
    pub case_number: Option<String>,
    /// When the crime occurred. `None` when the `date` field was missing
    /// or could not be parsed.
    pub occurred_at: Option<NaiveDateTime>,
    /// Crime-type label (e.g. `"BATTERY"`).
    pub primary_type: Option<String>,
    /// Type of location (e.g. `"STREET"`, `"RESIDENCE"`).
    pub location_description: Option<String>,
    /// Latitude as sent by the source.
    pub latitude: Option<String>,
    /// Longitude as sent by the source.
    pub longitude: Option<String>,
    date_parts: Option<DateParts>,
}

impl Incident {
    /// Builds an incident and derives its date parts from `occurred_at`.
    #[must_use]
    pub fn new(
        id: Option<String>,
        case_number: Option<String>,
        occurred_at: Option<NaiveDateTime>,
        primary_type: Option<String>,
        location_description: Option<String>,
        latitude: Option<String>,
        longitude: Option<String>,
    ) -> Self {
        let date_parts = occurred_at.as_ref().map(DateParts::from_datetime);
        Self {
            id,
            case_number,
            occurred_at,
            primary_type,
            location_description,
            latitude,
            longitude,
            date_parts,
        }
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.date_parts.map(|p| p.year)
    }

    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.date_parts.map(|p| p.month)
    }

    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        self.date_parts.map(|p| p.day)
    }

    #[must_use]
    pub fn hour(&self) -> Option<u32> {
        self.date_parts.map(|p| p.hour)
    }

    /// Whether both latitude and longitude are present. Says nothing about
    /// whether they are numeric.
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// The violent-crime type for this incident's label, if any.
    #[must_use]
    pub fn violent_type(&self) -> Option<ViolentCrimeType> {
        self.primary_type
            .as_deref()
            .and_then(ViolentCrimeType::from_label)
    }
}
