// tailplot - chart/mod.rs
//
// Chart rendering collaborator: consumes the finished time series and writes
// the raster image. Everything in here is presentation; the aggregation
// pipeline never depends on this module.
//
// Backend is plotters' BitMapBackend, which selects the raster format from
// the output path's extension. Plotters' error types are generic over the
// backend, so failures are captured as `RenderError::Backend` with the
// output path for context at the boundary.

pub mod palette;

use crate::core::model::TimeSeries;
use crate::util::constants::{
    AXIS_FONT_SIZE, LEGEND_MARGIN, PIXELS_PER_CM, TICK_DATE_FORMAT, TITLE_FONT_SIZE,
    TREND_DASH_GAP, TREND_DASH_SIZE, Y_RANGE_PADDING,
};
use crate::util::error::RenderError;
use chrono::DateTime;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Styling and layout configuration for one rendered chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Series label prefix; column i is labelled "<prefix> i+1".
    pub series_label: String,
    /// Physical output dimensions in centimetres.
    pub width_cm: u32,
    pub height_cm: u32,
    /// Draw the dashed running-mean companion line for every column.
    pub with_trend: bool,
}

/// Render `series` to a raster image at `output`, overwriting any existing
/// file. The caller guarantees at least one timestamped row.
pub fn render(series: &TimeSeries, config: &ChartConfig, output: &Path) -> Result<(), RenderError> {
    let width_px = cm_to_px(config.width_cm);
    let height_px = cm_to_px(config.height_cm);

    let (x_range, y_range) = axis_ranges(series, config.with_trend);

    tracing::debug!(
        output = %output.display(),
        width_px,
        height_px,
        columns = series.columns.len(),
        points = series.timestamps.len(),
        "Rendering chart"
    );

    let root = BitMapBackend::new(output, (width_px, height_px)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| backend(output, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| backend(output, e))?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .axis_desc_style(("sans-serif", AXIS_FONT_SIZE))
        .x_label_formatter(&format_tick_date)
        .draw()
        .map_err(|e| backend(output, e))?;

    for (i, column) in series.columns.iter().enumerate() {
        let color = palette::color_for(i);

        if config.with_trend {
            let trend_points = series
                .timestamps
                .iter()
                .copied()
                .zip(column.trend.iter().copied());
            chart
                .draw_series(DashedLineSeries::new(
                    trend_points,
                    TREND_DASH_SIZE,
                    TREND_DASH_GAP,
                    color.stroke_width(1),
                ))
                .map_err(|e| backend(output, e))?;
        }

        let raw_points = series
            .timestamps
            .iter()
            .copied()
            .zip(column.raw.iter().copied());
        chart
            .draw_series(LineSeries::new(raw_points, color.stroke_width(1)))
            .map_err(|e| backend(output, e))?
            .label(format!("{} {}", config.series_label, i + 1))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(LEGEND_MARGIN)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()
        .map_err(|e| backend(output, e))?;

    root.present().map_err(|e| backend(output, e))?;

    Ok(())
}

/// Capture a backend failure with the output path for context.
fn backend(path: &Path, err: impl std::fmt::Display) -> RenderError {
    RenderError::Backend {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Convert a physical dimension to backend pixels, never collapsing to zero.
fn cm_to_px(cm: u32) -> u32 {
    ((f64::from(cm) * PIXELS_PER_CM).round() as u32).max(1)
}

/// Format a numeric instant (epoch seconds) as a calendar date tick label.
fn format_tick_date(instant: &f64) -> String {
    DateTime::from_timestamp(*instant as i64, 0)
        .map(|dt| dt.format(TICK_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Compute padded axis ranges. Degenerate spans (a single point, or a flat
/// series) are widened so plotters always receives a non-empty range.
fn axis_ranges(
    series: &TimeSeries,
    with_trend: bool,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let x_min = series.timestamps.first().copied().unwrap_or(0.0);
    let mut x_max = series.timestamps.last().copied().unwrap_or(0.0);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for column in &series.columns {
        for &v in &column.raw {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        if with_trend {
            for &v in &column.trend {
                y_min = y_min.min(v);
                y_max = y_max.max(v);
            }
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if y_max <= y_min {
        y_max = y_min + 1.0;
    }
    let pad = (y_max - y_min) * Y_RANGE_PADDING;

    (x_min..x_max, (y_min - pad)..(y_max + pad))
}

// =============================================================================
// Tests
// =============================================================================
