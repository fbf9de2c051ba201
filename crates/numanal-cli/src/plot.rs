//! Plotting sink for timing curves.
//!
//! [`PlotSink`] is the seam the workflow hands a finished [`Chart`] to.
//! [`SvgPlotter`] renders connected point-marker lines with a legend into an
//! SVG file using `plotters`.

use std::fmt::Display;
use std::ops::Range;
use std::path::PathBuf;

use plotters::prelude::*;
use tracing::info;

use numanal_core::Timing;

/// Line colors, cycled per series.
const SERIES_COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

/// Errors raised while rendering a chart.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// The chart has no points to draw.
    #[error("nothing to plot")]
    Empty,

    /// The drawing backend failed (I/O, layout).
    #[error("failed to render plot: {0}")]
    Render(String),
}

/// One labelled curve of `(problem_size, seconds)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(u64, f64)>,
}

impl Series {
    pub fn from_timings(label: impl Into<String>, timings: &[Timing]) -> Self {
        Series {
            label: label.into(),
            points: timings.iter().map(|t| (t.problem_size, t.time)).collect(),
        }
    }
}

/// A multi-curve chart with titles.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    /// An empty timing-vs-problem-size chart.
    pub fn timings() -> Self {
        Chart {
            title: "Timing vs Problem Size".to_string(),
            x_label: "problem size".to_string(),
            y_label: "timing (seconds)".to_string(),
            series: Vec::new(),
        }
    }

    /// Axis ranges covering every point, or `None` when there are none.
    ///
    /// The y axis starts at zero; degenerate ranges are widened so the
    /// backend always gets a non-empty span.
    pub fn bounds(&self) -> Option<(Range<f64>, Range<f64>)> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let &(x0, y0) = points.next()?;
        let (mut x_min, mut x_max, mut y_max) = (x0 as f64, x0 as f64, y0);
        for &(x, y) in points {
            x_min = x_min.min(x as f64);
            x_max = x_max.max(x as f64);
            y_max = y_max.max(y);
        }
        if x_max <= x_min {
            x_min = (x_min - 1.0).max(0.0);
            x_max += 1.0;
        }
        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
        Some((x_min..x_max, 0.0..y_max))
    }
}

/// Destination for finished charts.
pub trait PlotSink {
    /// Renders `chart`. Returns the file written, if the sink writes one.
    fn plot(&mut self, chart: &Chart) -> Result<Option<PathBuf>, PlotError>;
}

/// Writes charts as SVG files.
#[derive(Debug, Clone)]
pub struct SvgPlotter {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgPlotter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SvgPlotter {
            path: path.into(),
            size: (1024, 768),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

fn render_err(e: impl Display) -> PlotError {
    PlotError::Render(e.to_string())
}

impl PlotSink for SvgPlotter {
    fn plot(&mut self, chart: &Chart) -> Result<Option<PathBuf>, PlotError> {
        let (x_range, y_range) = chart.bounds().ok_or(PlotError::Empty)?;

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_err)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .draw()
            .map_err(render_err)?;

        for (index, series) in chart.series.iter().enumerate() {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|&(x, y)| (x as f64, y))
                .collect();

            ctx.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(render_err)?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            ctx.draw_series(
                points
                    .into_iter()
                    .map(|point| Circle::new(point, 4, color.filled())),
            )
            .map_err(render_err)?;
        }

        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        info!(path = %self.path.display(), series = chart.series.len(), "plot written");
        Ok(Some(self.path.clone()))
    }
}
