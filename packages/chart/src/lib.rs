#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PNG chart rendering for crime statistics.
//!
//! Charts are drawn with `plotters` onto a bitmap backend and written
//! straight to disk, replacing any file already at the target path.

pub mod bar;
pub mod line;

use std::path::Path;

pub use bar::render_bar_chart;
pub use line::render_line_chart;
use plotters::style::RGBColor;

/// Errors that can occur while rendering a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The drawing backend failed (font lookup, rasterization, encoding).
    #[error("Chart drawing failed: {message}")]
    Draw {
        /// Backend error description.
        message: String,
    },

    /// I/O error (output location).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed presentation settings for one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions<'a> {
    /// Caption drawn above the plot.
    pub title: &'a str,
    /// X axis description.
    pub x_desc: &'a str,
    /// Y axis description. Empty for none.
    pub y_desc: &'a str,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// Top crime types as horizontal bars.
pub const TOP_CRIME_TYPES_CHART: ChartOptions<'static> = ChartOptions {
    title: "Top 10 Crime Types",
    x_desc: "Number of Reports",
    y_desc: "",
    width: 800,
    height: 500,
};

/// Reports per day as a line.
pub const DAILY_TREND_CHART: ChartOptions<'static> = ChartOptions {
    title: "Daily Crime Reports",
    x_desc: "Date",
    y_desc: "Reports",
    width: 1000,
    height: 500,
};

const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Upper bound of a count axis with some headroom above the largest value.
#[must_use]
pub const fn count_axis_max(max: u64) -> u64 {
    max + max / 10 + 1
}

fn draw_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw {
        message: err.to_string(),
    }
}

/// Fails early with an I/O error if the chart's directory does not exist,
/// instead of after the whole image has been rasterized.
fn check_output_dir(path: &Path) -> Result<(), ChartError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::metadata(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_axis_leaves_headroom() {
        assert_eq!(count_axis_max(0), 1);
        assert_eq!(count_axis_max(9), 10);
        assert_eq!(count_axis_max(250), 276);
    }

    #[test]
    fn output_dir_check_accepts_bare_file_names() {
        assert!(check_output_dir(Path::new("chart.png")).is_ok());
    }

    #[test]
    fn output_dir_check_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("chart.png");
        assert!(matches!(check_output_dir(&path), Err(ChartError::Io(_))));
    }
}
