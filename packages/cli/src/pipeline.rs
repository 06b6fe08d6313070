//! The report pipeline, run top to bottom once per invocation.
//!
//! Every step blocks until it finishes and any error aborts the run. The
//! only recovered failure is an unparseable incident date, which becomes a
//! missing value during normalization.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crime_sample_analytics::{TOP_N, summarize};
use crime_sample_analytics_models::CrimeSummary;
use crime_sample_chart::{
    DAILY_TREND_CHART, TOP_CRIME_TYPES_CHART, render_bar_chart, render_line_chart,
};
use crime_sample_cli_utils::{IndicatifProgress, MultiProgress};
use crime_sample_map::{CHICAGO_CENTER, CrimeMap, DEFAULT_ZOOM, MapError};
use crime_sample_source::sources::chicago::{COORDINATE_COLUMNS, ChicagoSource};
use crime_sample_source::{CrimeSource, FetchOptions, RawTable, SourceError};
use crime_sample_source_models::Incident;

use crate::Cli;
use crate::report;

/// Where each output file is written.
pub struct OutputPaths {
    data_dir: PathBuf,
    images_dir: PathBuf,
}

impl OutputPaths {
    #[must_use]
    pub fn new(data_dir: &Path, images_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            images_dir: images_dir.to_path_buf(),
        }
    }

    /// Creates both output directories if they are missing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a directory cannot be created.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.images_dir)
    }

    #[must_use]
    pub fn csv(&self) -> PathBuf {
        self.data_dir.join("chicago_crime_sample.csv")
    }

    #[must_use]
    pub fn map_html(&self) -> PathBuf {
        self.data_dir.join("chicago_map.html")
    }

    #[must_use]
    pub fn bar_chart(&self) -> PathBuf {
        self.images_dir.join("top_crime_types.png")
    }

    #[must_use]
    pub fn line_chart(&self) -> PathBuf {
        self.images_dir.join("daily_crime_trend.png")
    }
}

/// Loads fetched records into a table and writes it verbatim as CSV.
///
/// # Errors
///
/// Returns [`SourceError`] if a record is not an object or the file cannot
/// be written.
pub fn save_table(records: Vec<serde_json::Value>, path: &Path) -> Result<RawTable, SourceError> {
    let table = RawTable::from_records(records)?;
    table.write_csv(path)?;
    Ok(table)
}

/// Builds the incident map and writes it as HTML. Returns the number of
/// markers drawn.
///
/// # Errors
///
/// Returns [`MapError`] if a mapped incident has a non-numeric coordinate
/// or the file cannot be written.
pub fn save_map(incidents: &[Incident], limit: usize, path: &Path) -> Result<usize, MapError> {
    let mut map = CrimeMap::new(CHICAGO_CENTER, DEFAULT_ZOOM);
    map.add_incidents(incidents, limit)?;
    map.save(path)?;
    Ok(map.markers.len())
}

/// Runs every step that follows the fetch: CSV, normalization, console
/// tables, both charts, the map, and the violent-crime count.
///
/// The coordinate columns are only required once the map is built, so a
/// page without any geocoded rows still gets its CSV, tables, and charts.
///
/// # Errors
///
/// Returns the first error from any step.
pub fn run_report(
    source: &dyn CrimeSource,
    records: Vec<serde_json::Value>,
    paths: &OutputPaths,
    map_limit: usize,
) -> Result<CrimeSummary, Box<dyn std::error::Error>> {
    let csv_path = paths.csv();
    let table = save_table(records, &csv_path)?;
    println!("✅ Data saved to {}", csv_path.display());

    let incidents = source.normalize(&table)?;
    let summary = summarize(&incidents, TOP_N);
    print!("{}", report::frequency_tables(&summary));

    let bar_path = paths.bar_chart();
    render_bar_chart(&TOP_CRIME_TYPES_CHART, &summary.top_crime_types, &bar_path)?;
    println!("📊 Bar chart saved to {}", bar_path.display());

    let line_path = paths.line_chart();
    render_line_chart(&DAILY_TREND_CHART, &summary.daily, &line_path)?;
    println!("📈 Line chart saved to {}", line_path.display());

    table.require_columns(COORDINATE_COLUMNS)?;
    let map_path = paths.map_html();
    let markers = save_map(&incidents, map_limit, &map_path)?;
    log::debug!("Drew {markers} map markers");
    println!("🗺️ Map saved to {}", map_path.display());

    println!();
    println!("{}", report::violent_line(summary.violent_count));

    Ok(summary)
}

/// Runs the whole report.
///
/// # Errors
///
/// Returns the first error from any step.
pub async fn run(cli: &Cli, multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let paths = OutputPaths::new(&cli.data_dir, &cli.images_dir);
    paths.ensure_dirs()?;

    let source = ChicagoSource::new();
    let options = FetchOptions {
        api_url: Some(cli.url.clone()),
        limit: Some(cli.limit),
    };
    let progress = IndicatifProgress::spinner(multi, &format!("Fetching {}...", source.name()));
    let records = source.fetch(&options, &progress).await?;

    let summary = run_report(&source, records, &paths, cli.map_limit)?;

    log::info!(
        "Report for {} incidents finished in {:.1}s",
        summary.total,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    /// Row A: violent, dated, geocoded. Row B: not violent, bad date, no
    /// coordinates. Row C: violent, dated, geocoded.
    fn three_records() -> Vec<serde_json::Value> {
        vec![
            json!({
                "id": "1",
                "case_number": "JH100001",
                "date": "2024-07-04T13:15:00.000",
                "primary_type": "BATTERY",
                "location_description": "STREET",
                "latitude": "41.881",
                "longitude": "-87.632"
            }),
            json!({
                "id": "2",
                "case_number": "JH100002",
                "date": "not-a-date",
                "primary_type": "THEFT",
                "location_description": "RESIDENCE"
            }),
            json!({
                "id": "3",
                "case_number": "JH100003",
                "date": "2024-07-05T02:40:00.000",
                "primary_type": "ASSAULT",
                "location_description": "STREET",
                "latitude": "41.752",
                "longitude": "-87.601"
            }),
        ]
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::new(&dir.path().join("CrimeData"), &dir.path().join("images"));
        paths.ensure_dirs().unwrap();
        paths.ensure_dirs().unwrap();
        assert!(dir.path().join("CrimeData").is_dir());
        assert!(dir.path().join("images").is_dir());
    }

    #[test]
    fn output_file_names_are_fixed() {
        let paths = OutputPaths::new(Path::new("CrimeData"), Path::new("images"));
        assert_eq!(paths.csv(), Path::new("CrimeData/chicago_crime_sample.csv"));
        assert_eq!(paths.map_html(), Path::new("CrimeData/chicago_map.html"));
        assert_eq!(paths.bar_chart(), Path::new("images/top_crime_types.png"));
        assert_eq!(paths.line_chart(), Path::new("images/daily_crime_trend.png"));
    }

    #[test]
    fn three_row_report_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::new(&dir.path().join("CrimeData"), &dir.path().join("images"));
        paths.ensure_dirs().unwrap();

        let summary = run_report(&ChicagoSource::new(), three_records(), &paths, 100).unwrap();

        for path in [
            paths.csv(),
            paths.bar_chart(),
            paths.line_chart(),
            paths.map_html(),
        ] {
            assert!(path.is_file(), "{} was not written", path.display());
        }

        let reader = csv::Reader::from_path(paths.csv()).unwrap();
        assert_eq!(reader.into_records().count(), 3);

        let html = std::fs::read_to_string(paths.map_html()).unwrap();
        assert_eq!(html.matches("L.circleMarker(").count(), 2);
        assert!(html.contains(".bindPopup(\"BATTERY\")"));
        assert!(html.contains(".bindPopup(\"ASSAULT\")"));
        assert!(!html.contains("THEFT"));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.violent_count, 2);
        assert_eq!(summary.by_hour.len(), 2);
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.top_crime_types.len(), 3);
    }

    #[test]
    fn unparseable_date_gives_null_derived_values() {
        let dir = tempfile::tempdir().unwrap();
        let table = save_table(three_records(), &dir.path().join("sample.csv")).unwrap();
        let incidents = ChicagoSource::new().normalize(&table).unwrap();

        let b = &incidents[1];
        assert_eq!(b.year(), None);
        assert_eq!(b.month(), None);
        assert_eq!(b.day(), None);
        assert_eq!(b.hour(), None);

        let a = &incidents[0];
        assert_eq!(a.year(), Some(2024));
        assert_eq!(a.month(), Some(7));
        assert_eq!(a.day(), NaiveDate::from_ymd_opt(2024, 7, 4));
        assert_eq!(a.hour(), Some(13));
    }

    #[test]
    fn page_without_coordinates_still_writes_tables_and_charts() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::new(&dir.path().join("CrimeData"), &dir.path().join("images"));
        paths.ensure_dirs().unwrap();

        let records = vec![
            json!({
                "date": "2024-07-04T13:15:00.000",
                "primary_type": "BATTERY",
                "location_description": "STREET"
            }),
            json!({
                "date": "2024-07-05T09:00:00.000",
                "primary_type": "THEFT",
                "location_description": "RESIDENCE"
            }),
        ];
        let err = run_report(&ChicagoSource::new(), records, &paths, 100).unwrap_err();
        match err.downcast_ref::<SourceError>() {
            Some(SourceError::MissingColumn { column }) => assert_eq!(column, "latitude"),
            other => panic!("expected missing latitude column, got {other:?}"),
        }

        assert!(paths.csv().is_file());
        assert!(paths.bar_chart().is_file());
        assert!(paths.line_chart().is_file());
        assert!(!paths.map_html().exists());
    }

    #[test]
    fn csv_is_written_before_a_bad_coordinate_aborts_the_map() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::new(&dir.path().join("CrimeData"), &dir.path().join("images"));
        paths.ensure_dirs().unwrap();

        let table = save_table(
            vec![json!({
                "date": "2024-07-04T13:15:00.000",
                "primary_type": "ROBBERY",
                "location_description": "ALLEY",
                "latitude": "n/a",
                "longitude": "-87.6"
            })],
            &paths.csv(),
        )
        .unwrap();
        assert!(paths.csv().exists());

        let incidents = ChicagoSource::new().normalize(&table).unwrap();
        let err = save_map(&incidents, 100, &paths.map_html()).unwrap_err();
        assert!(matches!(err, MapError::InvalidCoordinate { field: "latitude", .. }));
        assert!(!paths.map_html().exists());
    }
}
