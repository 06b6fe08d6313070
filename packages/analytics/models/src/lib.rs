#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for descriptive crime statistics.
//!
//! These are plain data: frequency tables keyed by label or hour, a daily
//! time series, and the [`CrimeSummary`] that bundles them for reporting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Count of incidents sharing one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// The label (crime type or location description).
    pub category: String,
    /// Number of incidents.
    pub count: u64,
}

/// Count of incidents that occurred during one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourCount {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Number of incidents.
    pub count: u64,
}

/// A daily time-series data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    /// Calendar date.
    pub day: NaiveDate,
    /// Number of incidents reported on this date.
    pub count: u64,
}

/// Descriptive statistics for one batch of incidents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeSummary {
    /// Number of incidents summarized.
    pub total: u64,
    /// Most frequent crime types, most frequent first.
    pub top_crime_types: Vec<CategoryCount>,
    /// Most frequent location descriptions, most frequent first.
    pub top_locations: Vec<CategoryCount>,
    /// Incidents per hour of day, in ascending hour order.
    pub by_hour: Vec<HourCount>,
    /// Incidents per calendar date, oldest first.
    pub daily: Vec<DailyCount>,
    /// Number of incidents whose crime type is in the violent set.
    pub violent_count: u64,
}
