//! SVG line charts of benchmark timings against vertex count.

use std::io;
use std::path::Path;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

const CHART_SIZE: (u32, u32) = (800, 480);
const PALETTE: [RGBColor; 2] = [BLUE, RED];

/// One plotted line: `(n, seconds)` points under a legend label.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    /// Legend label.
    pub label: &'static str,
    /// Points in ascending `n`.
    pub points: Vec<(usize, f64)>,
}

/// Errors raised while rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// No line carries any point.
    #[error("nothing to plot")]
    NoSamples,
    /// The drawing backend failed.
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

/// Draws `lines` as an SVG chart titled `title` at `path`.
///
/// The x axis spans the vertex counts present; the y axis starts at zero.
///
/// # Errors
/// Returns [`ChartError::NoSamples`] when every line is empty and
/// [`ChartError::Draw`] when the file cannot be written.
pub fn write_chart(path: &Path, title: &str, lines: &[ChartLine]) -> Result<(), ChartError> {
    let points = || lines.iter().flat_map(|line| line.points.iter().copied());
    let (Some(first), Some(last)) = (
        points().map(|(n, _)| n).min(),
        points().map(|(n, _)| n).max(),
    ) else {
        return Err(ChartError::NoSamples);
    };
    let slowest = points().map(|(_, seconds)| seconds).fold(0.0, f64::max);
    let y_top = slowest.max(f64::EPSILON) * 1.1;

    draw(path, title, lines, first..last.max(first + 1), y_top)
        .map_err(|err| ChartError::Draw(err.to_string()))
}

fn draw(
    path: &Path,
    title: &str,
    lines: &[ChartLine],
    x_range: std::ops::Range<usize>,
    y_top: f64,
) -> Result<(), DrawingAreaErrorKind<io::Error>> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, 0.0..y_top)?;
    chart
        .configure_mesh()
        .x_desc("vertices (n)")
        .y_desc("seconds")
        .draw()?;

    for (line, color) in lines
        .iter()
        .filter(|line| !line.points.is_empty())
        .zip(PALETTE.into_iter().cycle())
    {
        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
