#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive incident maps.
//!
//! A [`CrimeMap`] is a center, a zoom level, and a list of
//! [`CircleMarker`]s. It renders to a single self-contained HTML document
//! that loads Leaflet from a CDN and draws one circle per marker.

pub mod html;

use std::path::Path;

use crime_sample_source_models::Incident;
use serde::Serialize;

/// Approximate center of Chicago as `(latitude, longitude)`.
pub const CHICAGO_CENTER: (f64, f64) = (41.8781, -87.6298);

/// Initial zoom level for city-wide maps.
pub const DEFAULT_ZOOM: u8 = 11;

/// Maximum number of incidents drawn on one map.
pub const DEFAULT_MARKER_LIMIT: usize = 100;

/// Errors that can occur while building or saving a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A coordinate string is not a finite number.
    #[error("Invalid {field} value: {value:?}")]
    InvalidCoordinate {
        /// `"latitude"` or `"longitude"`.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// I/O error (file write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Drawing style shared by every marker on a map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Circle radius in pixels.
    pub radius: f64,
    /// Stroke and fill color (any CSS color).
    pub color: String,
    /// Whether the circle is filled.
    pub fill: bool,
    /// Fill opacity, 0.0-1.0.
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            color: "crimson".to_string(),
            fill: true,
            fill_opacity: 0.7,
        }
    }
}

/// One circle on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Plain text shown when the marker is clicked.
    pub popup: Option<String>,
}

/// A map ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct CrimeMap {
    /// Initial center as `(latitude, longitude)`.
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u8,
    /// Style applied to every marker.
    pub style: MarkerStyle,
    /// Markers in drawing order.
    pub markers: Vec<CircleMarker>,
}

impl CrimeMap {
    /// Creates an empty map with the default marker style.
    #[must_use]
    pub fn new(center: (f64, f64), zoom: u8) -> Self {
        Self {
            center,
            zoom,
            style: MarkerStyle::default(),
            markers: Vec::new(),
        }
    }

    /// Adds one marker per incident that has both coordinates, taking at
    /// most `limit` such incidents in their original order. Incidents
    /// without coordinates are skipped and do not count toward `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCoordinate`] if a selected incident's
    /// latitude or longitude is not a number.
    pub fn add_incidents(&mut self, incidents: &[Incident], limit: usize) -> Result<(), MapError> {
        for incident in incidents.iter().filter(|i| i.has_coordinates()).take(limit) {
            self.markers.push(marker_for(incident)?);
        }
        log::debug!("Map now has {} markers", self.markers.len());
        Ok(())
    }

    /// Renders the map as a standalone HTML document.
    #[must_use]
    pub fn to_html(&self) -> String {
        html::render_map(self)
    }

    /// Writes the HTML document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MapError> {
        std::fs::write(path, self.to_html())?;
        log::info!(
            "Wrote map with {} markers to {}",
            self.markers.len(),
            path.display()
        );
        Ok(())
    }
}

fn parse_coordinate(field: &'static str, value: Option<&str>) -> Result<f64, MapError> {
    let raw = value.unwrap_or_default();
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MapError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        })
}

fn marker_for(incident: &Incident) -> Result<CircleMarker, MapError> {
    Ok(CircleMarker {
        latitude: parse_coordinate("latitude", incident.latitude.as_deref())?,
        longitude: parse_coordinate("longitude", incident.longitude.as_deref())?,
        popup: incident.primary_type.clone(),
    })
}
