//! Socrata SODA API fetcher.
//!
//! Requests a single page from a Socrata dataset using the `$limit` query
//! parameter. No offset, ordering, or retry is applied.

use crate::progress::ProgressCallback;
use crate::{FetchOptions, SourceError};

/// Configuration for a Socrata fetch operation.
pub struct SocrataConfig<'a> {
    /// Base API URL (e.g., `"https://data.cityofchicago.org/resource/ijzp-q8t2.json"`).
    pub api_url: &'a str,
    /// Label for log messages (e.g., `"Chicago"`).
    pub label: &'a str,
}

/// Builds the request URL for one page of at most `limit` records.
#[must_use]
pub fn page_url(api_url: &str, limit: Option<u64>) -> String {
    limit.map_or_else(|| api_url.to_string(), |limit| format!("{api_url}?$limit={limit}"))
}

/// Fetches the first page of records from a Socrata dataset.
///
/// [`FetchOptions::api_url`] takes precedence over [`SocrataConfig::api_url`].
///
/// # Errors
///
/// Returns [`SourceError`] if the request fails, the status is not a
/// success, or the body is not a JSON array.
pub async fn fetch_socrata(
    config: &SocrataConfig<'_>,
    options: &FetchOptions,
    progress: &dyn ProgressCallback,
) -> Result<Vec<serde_json::Value>, SourceError> {
    let api_url = options.api_url.as_deref().unwrap_or(config.api_url);
    let url = page_url(api_url, options.limit);

    log::info!("Fetching {} data: {url}", config.label);
    progress.set_message(format!("Fetching {} records...", config.label));

    let client = reqwest::Client::new();
    let response = client.get(&url).send().await?.error_for_status()?;
    let body = response.text().await?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;

    let count = records.len() as u64;
    progress.set_total(count);
    progress.inc(count);
    progress.finish(format!("Fetched {count} {} records", config.label));

    log::info!("Downloaded {count} {} records", config.label);
    Ok(records)
}
