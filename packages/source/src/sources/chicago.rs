//! Chicago Police Department crime data source.
//!
//! Uses the City of Chicago's Socrata Open Data API to fetch crime incidents.
//! Dataset: <https://data.cityofchicago.org/resource/ijzp-q8t2>

use async_trait::async_trait;
use crime_sample_source_models::Incident;
use serde_json::{Map, Value};

use crate::parsing::parse_date_value;
use crate::progress::ProgressCallback;
use crate::socrata::{SocrataConfig, fetch_socrata};
use crate::table::cell_text;
use crate::{CrimeSource, FetchOptions, RawTable, SourceError};

/// Socrata API endpoint for Chicago crime data.
pub const CHICAGO_API_URL: &str = "https://data.cityofchicago.org/resource/ijzp-q8t2.json";

/// Number of records requested when no limit is given.
pub const DEFAULT_LIMIT: u64 = 1000;

/// Columns normalization reads. Every Chicago record set must carry them.
const REQUIRED_COLUMNS: &[&str] = &["date", "primary_type", "location_description"];

/// Columns only the map needs. Socrata omits null fields, so a page with no
/// geocoded rows has neither; callers check them when they first map.
pub const COORDINATE_COLUMNS: &[&str] = &["latitude", "longitude"];

/// Chicago PD crime data source.
pub struct ChicagoSource;

impl ChicagoSource {
    /// Creates a new Chicago data source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ChicagoSource {
    fn default() -> Self {
        Self::new()
    }
}

fn text_field(row: &Map<String, Value>, column: &str) -> Option<String> {
    row.get(column).and_then(cell_text)
}

fn normalize_row(row: &Map<String, Value>) -> Incident {
    Incident::new(
        text_field(row, "id"),
        text_field(row, "case_number"),
        parse_date_value(row.get("date")),
        text_field(row, "primary_type"),
        text_field(row, "location_description"),
        text_field(row, "latitude"),
        text_field(row, "longitude"),
    )
}

#[async_trait]
impl CrimeSource for ChicagoSource {
    fn name(&self) -> &'static str {
        "Chicago Police Department"
    }

    async fn fetch(
        &self,
        options: &FetchOptions,
        progress: &dyn ProgressCallback,
    ) -> Result<Vec<Value>, SourceError> {
        let options = FetchOptions {
            api_url: options.api_url.clone(),
            limit: Some(options.limit.unwrap_or(DEFAULT_LIMIT)),
        };
        fetch_socrata(
            &SocrataConfig {
                api_url: CHICAGO_API_URL,
                label: "Chicago",
            },
            &options,
            progress,
        )
        .await
    }

    fn normalize(&self, table: &RawTable) -> Result<Vec<Incident>, SourceError> {
        table.require_columns(REQUIRED_COLUMNS)?;

        let incidents: Vec<Incident> = table.rows().iter().map(normalize_row).collect();

        let undated = incidents.iter().filter(|i| i.occurred_at.is_none()).count();
        if undated > 0 {
            log::warn!(
                "{undated} of {} Chicago records have a missing or unparseable date",
                incidents.len()
            );
        }
        log::info!("Normalized {} Chicago incidents", incidents.len());

        Ok(incidents)
    }
}
