#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Descriptive statistics over normalized incidents.
//!
//! All counting excludes missing values: an incident without a crime type
//! does not appear in the crime-type table, and an incident whose date did
//! not parse does not appear in the hourly or daily tables.

pub mod counts;

use crime_sample_analytics_models::CrimeSummary;
use crime_sample_source_models::Incident;

pub use counts::{
    daily_counts, hourly_profile, top_crime_types, top_locations, value_counts, violent_incidents,
};

/// Number of rows kept in the crime-type and location tables.
pub const TOP_N: usize = 10;

/// Computes every statistic the report needs in one call.
#[must_use]
pub fn summarize(incidents: &[Incident], top_n: usize) -> CrimeSummary {
    let summary = CrimeSummary {
        total: incidents.len() as u64,
        top_crime_types: top_crime_types(incidents, top_n),
        top_locations: top_locations(incidents, top_n),
        by_hour: hourly_profile(incidents),
        daily: daily_counts(incidents),
        violent_count: violent_incidents(incidents).len() as u64,
    };

    log::debug!(
        "Summarized {} incidents: {} crime types, {} hours, {} days, {} violent",
        summary.total,
        summary.top_crime_types.len(),
        summary.by_hour.len(),
        summary.daily.len(),
        summary.violent_count
    );

    summary
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn incident(date: Option<&str>, primary_type: Option<&str>) -> Incident {
        let occurred_at = date.map(|d| {
            chrono::NaiveDateTime::parse_from_str(d, "%Y-%m-%dT%H:%M:%S").unwrap()
        });
        Incident::new(
            None,
            None,
            occurred_at,
            primary_type.map(str::to_string),
            Some("STREET".to_string()),
            None,
            None,
        )
    }

    #[test]
    fn summarizes_mixed_batch() {
        let incidents = vec![
            incident(Some("2024-01-01T09:00:00"), Some("BATTERY")),
            incident(None, Some("THEFT")),
            incident(Some("2024-01-02T21:30:00"), Some("ASSAULT")),
        ];

        let summary = summarize(&incidents, TOP_N);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.top_crime_types.len(), 3);
        assert_eq!(summary.top_locations[0].count, 3);
        assert_eq!(summary.by_hour.len(), 2);
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily[0].day, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(summary.violent_count, 2);
    }

    #[test]
    fn summarizes_empty_batch() {
        let summary = summarize(&[], TOP_N);
        assert_eq!(summary.total, 0);
        assert!(summary.top_crime_types.is_empty());
        assert!(summary.by_hour.is_empty());
        assert!(summary.daily.is_empty());
        assert_eq!(summary.violent_count, 0);
    }
}
