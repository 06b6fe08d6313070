//! Line chart of a daily time series.

use std::ops::Range;
use std::path::Path;

use chrono::NaiveDate;
use crime_sample_analytics_models::DailyCount;
use plotters::prelude::*;

use crate::{ChartError, ChartOptions, SERIES_COLOR, check_output_dir, count_axis_max, draw_error};

/// X axis range covering every point. Points must be in date order.
///
/// A single date (or no data at all) still gets a one-day-wide axis.
#[must_use]
pub fn date_axis(points: &[DailyCount]) -> Range<NaiveDate> {
    let start = points.first().map_or_else(NaiveDate::default, |p| p.day);
    let last = points.last().map_or(start, |p| p.day);
    let end = if last > start {
        last
    } else {
        last.succ_opt().unwrap_or(last)
    };
    start..end
}

/// Renders `points` as a single line ordered by date.
///
/// # Errors
///
/// Returns [`ChartError`] if the output directory is missing or the
/// backend fails to draw or encode the image.
pub fn render_line_chart(
    options: &ChartOptions<'_>,
    points: &[DailyCount],
    path: &Path,
) -> Result<(), ChartError> {
    check_output_dir(path)?;

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let y_max = count_axis_max(points.iter().map(|p| p.count).max().unwrap_or(0));

    let mut chart = ChartBuilder::on(&root)
        .caption(options.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(date_axis(points), 0u64..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc(options.x_desc)
        .y_desc(options.y_desc)
        .x_labels(8)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.day, p.count)),
            &SERIES_COLOR,
        ))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    log::info!("Wrote line chart with {} points to {}", points.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn axis_spans_first_to_last_day() {
        let points = vec![
            DailyCount { day: day(2024, 1, 3), count: 4 },
            DailyCount { day: day(2024, 1, 9), count: 1 },
        ];
        assert_eq!(date_axis(&points), day(2024, 1, 3)..day(2024, 1, 9));
    }

    #[test]
    fn single_day_axis_is_one_day_wide() {
        let points = vec![DailyCount { day: day(2024, 2, 29), count: 7 }];
        assert_eq!(date_axis(&points), day(2024, 2, 29)..day(2024, 3, 1));
    }

    #[test]
    fn empty_series_still_has_an_axis() {
        let axis = date_axis(&[]);
        assert!(axis.start < axis.end);
    }

    #[test]
    fn renders_png_for_daily_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daily_crime_trend.png");
        let points = vec![
            DailyCount { day: day(2024, 7, 4), count: 2 },
            DailyCount { day: day(2024, 7, 5), count: 6 },
            DailyCount { day: day(2024, 7, 8), count: 1 },
        ];
        render_line_chart(&crate::DAILY_TREND_CHART, &points, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn renders_png_with_no_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daily_crime_trend.png");
        render_line_chart(&crate::DAILY_TREND_CHART, &[], &path).unwrap();
        assert!(path.is_file());
    }
}
