//! Grouping and counting primitives.

use std::collections::{BTreeMap, HashMap};

use crime_sample_analytics_models::{CategoryCount, DailyCount, HourCount};
use crime_sample_source_models::Incident;

/// Counts occurrences of each distinct label, skipping `None`.
///
/// The result is sorted by count descending. Labels with equal counts keep
/// the order in which they were first encountered.
#[must_use]
pub fn value_counts<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values.into_iter().flatten() {
        if let Some(&i) = index.get(value) {
            counts[i].count += 1;
        } else {
            index.insert(value, counts.len());
            counts.push(CategoryCount {
                category: value.to_string(),
                count: 1,
            });
        }
    }

    // Stable, so ties stay in encounter order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` most frequent crime types.
#[must_use]
pub fn top_crime_types(incidents: &[Incident], n: usize) -> Vec<CategoryCount> {
    let mut counts = value_counts(incidents.iter().map(|i| i.primary_type.as_deref()));
    counts.truncate(n);
    counts
}

/// The `n` most frequent location descriptions.
#[must_use]
pub fn top_locations(incidents: &[Incident], n: usize) -> Vec<CategoryCount> {
    let mut counts = value_counts(incidents.iter().map(|i| i.location_description.as_deref()));
    counts.truncate(n);
    counts
}

/// Incidents per hour of day, ordered by hour rather than by count.
///
/// Hours with no incidents are omitted.
#[must_use]
pub fn hourly_profile(incidents: &[Incident]) -> Vec<HourCount> {
    let mut by_hour: BTreeMap<u32, u64> = BTreeMap::new();
    for hour in incidents.iter().filter_map(Incident::hour) {
        *by_hour.entry(hour).or_default() += 1;
    }
    by_hour
        .into_iter()
        .map(|(hour, count)| HourCount { hour, count })
        .collect()
}

/// Incidents per calendar date, oldest first. Undated incidents are
/// skipped.
#[must_use]
pub fn daily_counts(incidents: &[Incident]) -> Vec<DailyCount> {
    let mut by_day = BTreeMap::new();
    for day in incidents.iter().filter_map(Incident::day) {
        *by_day.entry(day).or_insert(0u64) += 1;
    }
    by_day
        .into_iter()
        .map(|(day, count)| DailyCount { day, count })
        .collect()
}

/// Incidents whose crime type is exactly one of the violent labels, in
/// their original order.
#[must_use]
pub fn violent_incidents(incidents: &[Incident]) -> Vec<&Incident> {
    incidents
        .iter()
        .filter(|i| i.violent_type().is_some())
        .collect()
}
