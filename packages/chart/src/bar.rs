//! Horizontal bar chart of a frequency table.

use std::path::Path;

use crime_sample_analytics_models::CategoryCount;
use plotters::prelude::*;

use crate::{ChartError, ChartOptions, SERIES_COLOR, check_output_dir, count_axis_max, draw_error};

/// Width of the label area needed to fit the longest category label.
#[must_use]
pub fn label_area_width(rows: &[CategoryCount]) -> u32 {
    let longest = rows
        .iter()
        .map(|r| r.category.chars().count())
        .max()
        .unwrap_or(0);
    u32::try_from(longest * 8 + 20).unwrap_or(u32::MAX).clamp(60, 280)
}

/// Renders `rows` as horizontal bars, one per category.
///
/// The first row is drawn at the bottom of the chart, so a table sorted by
/// count descending puts the most frequent category at the bottom.
///
/// # Errors
///
/// Returns [`ChartError`] if the output directory is missing or the
/// backend fails to draw or encode the image.
pub fn render_bar_chart(
    options: &ChartOptions<'_>,
    rows: &[CategoryCount],
    path: &Path,
) -> Result<(), ChartError> {
    check_output_dir(path)?;

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let x_max = count_axis_max(rows.iter().map(|r| r.count).max().unwrap_or(0));
    let slots = rows.len().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(options.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(label_area_width(rows))
        .build_cartesian_2d(0u64..x_max, (0..slots).into_segmented())
        .map_err(draw_error)?;

    let category_label = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(i) => rows
            .get(*i)
            .map(|r| r.category.clone())
            .unwrap_or_default(),
        SegmentValue::Exact(_) | SegmentValue::Last => String::new(),
    };

    let mut mesh = chart.configure_mesh();
    mesh.disable_y_mesh()
        .x_desc(options.x_desc)
        .y_labels(slots)
        .y_label_formatter(&category_label);
    if !options.y_desc.is_empty() {
        mesh.y_desc(options.y_desc);
    }
    mesh.draw().map_err(draw_error)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, row)| {
            let mut bar = Rectangle::new(
                [
                    (0, SegmentValue::Exact(i)),
                    (row.count, SegmentValue::Exact(i + 1)),
                ],
                SERIES_COLOR.filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    log::info!("Wrote bar chart with {} bars to {}", rows.len(), path.display());
    Ok(())
}
