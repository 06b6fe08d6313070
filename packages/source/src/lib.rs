#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime data source trait and normalization logic.
//!
//! A data provider implements the [`CrimeSource`] trait to define how raw
//! records are fetched and how the resulting [`RawTable`] is mapped to typed
//! [`Incident`] records.

pub mod parsing;
pub mod progress;
pub mod socrata;
pub mod sources;
pub mod table;

use async_trait::async_trait;
use crime_sample_source_models::Incident;

use crate::progress::ProgressCallback;
pub use crate::table::RawTable;

/// Errors that can occur during data source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A column the normalizer depends on is absent from every record.
    #[error("Missing column: {column}")]
    MissingColumn {
        /// Name of the absent column.
        column: String,
    },

    /// Data normalization error.
    #[error("Normalization error: {message}")]
    Normalization {
        /// Description of what went wrong.
        message: String,
    },
}

/// Configuration for fetching data from a source.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Overrides the source's built-in endpoint.
    pub api_url: Option<String>,
    /// Maximum number of records to fetch. Only the first page is ever
    /// requested.
    pub limit: Option<u64>,
}

/// Trait that all crime data sources must implement.
///
/// Each source knows how to fetch its raw records and normalize them into
/// [`Incident`]s.
#[async_trait]
pub trait CrimeSource: Send + Sync {
    /// Returns the human-readable name of this source.
    fn name(&self) -> &str;

    /// Downloads the raw records as JSON objects.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the request fails, the server responds
    /// with a non-success status, or the body is not a JSON array.
    async fn fetch(
        &self,
        options: &FetchOptions,
        progress: &dyn ProgressCallback,
    ) -> Result<Vec<serde_json::Value>, SourceError>;

    /// Normalizes a loaded table into typed incidents, one per row.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingColumn`] if the table lacks a column
    /// the source depends on.
    fn normalize(&self, table: &RawTable) -> Result<Vec<Incident>, SourceError>;
}
