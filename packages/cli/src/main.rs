#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chicago crime sample report.
//!
//! Fetches one page of incidents from the City of Chicago open-data API,
//! saves them as CSV, prints frequency tables, renders two PNG charts and
//! an HTML map, and counts the violent incidents. Running with no arguments
//! reproduces the fixed report; the flags only exist to point it elsewhere.
//!
//! Uses `indicatif-log-bridge` (via [`crime_sample_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and the fetch spinner never fight for the terminal.

mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;
use crime_sample_map::DEFAULT_MARKER_LIMIT;
use crime_sample_source::sources::chicago::{CHICAGO_API_URL, DEFAULT_LIMIT};

#[derive(Debug, Parser)]
#[command(
    name = "crime_sample",
    about = "Fetch, summarize, chart, and map a sample of Chicago crime reports"
)]
struct Cli {
    /// Socrata endpoint to fetch incidents from
    #[arg(long, default_value = CHICAGO_API_URL)]
    url: String,
    /// Maximum number of records to fetch (first page only)
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u64,
    /// Directory for the CSV and HTML map
    #[arg(long, default_value = "CrimeData")]
    data_dir: PathBuf,
    /// Directory for the PNG charts
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,
    /// Maximum number of incidents drawn on the map
    #[arg(long, default_value_t = DEFAULT_MARKER_LIMIT)]
    map_limit: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = crime_sample_cli_utils::init_logger();
    let cli = Cli::parse();
    log::debug!("{cli:?}");

    pipeline::run(&cli, &multi).await
}
