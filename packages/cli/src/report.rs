//! Console report formatting.

use std::fmt::Write as _;

use crime_sample_analytics_models::{CategoryCount, CrimeSummary, HourCount};

/// Formats one two-column frequency table with a header row naming the
/// grouped column. Counts are right-aligned.
fn table(header: &str, rows: impl Iterator<Item = (String, u64)>) -> String {
    let rows: Vec<(String, u64)> = rows.collect();
    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    let count_width = rows
        .iter()
        .map(|(_, c)| c.to_string().len())
        .max()
        .unwrap_or(1)
        .max("count".len());

    let mut out = String::new();
    writeln!(out, "{header:<key_width$}  {:>count_width$}", "count").ok();
    for (key, count) in &rows {
        writeln!(out, "{key:<key_width$}  {count:>count_width$}").ok();
    }
    out
}

#[must_use]
pub fn category_table(header: &str, counts: &[CategoryCount]) -> String {
    table(header, counts.iter().map(|c| (c.category.clone(), c.count)))
}

#[must_use]
pub fn hour_table(counts: &[HourCount]) -> String {
    table("hour", counts.iter().map(|h| (h.hour.to_string(), h.count)))
}

/// The three frequency tables with their section headings.
#[must_use]
pub fn frequency_tables(summary: &CrimeSummary) -> String {
    let mut out = String::new();
    writeln!(out, "\n🔹 Top 10 Crime Types:").ok();
    out.push_str(&category_table("primary_type", &summary.top_crime_types));
    writeln!(out, "\n🔹 Most Common Locations:").ok();
    out.push_str(&category_table(
        "location_description",
        &summary.top_locations,
    ));
    writeln!(out, "\n🔹 Crimes by Hour of Day:").ok();
    out.push_str(&hour_table(&summary.by_hour));
    out
}

#[must_use]
pub fn violent_line(count: u64) -> String {
    format!("🔍 Violent Crimes Found: {count}")
}
