//! Line charts comparing first-fit against best-fit.
//!
//! A [`Figure`] is a plain value: it owns its title, labels, lines and
//! canvas size, and knows how to draw itself onto any plotters drawing
//! area. Nothing is shared between figures, so the three charts are built
//! and drawn independently.

use crate::errors::*;
use crate::series::Series;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;

/// Fraction of the data span added on both ends of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Points per inch; font sizes and strokes are given in points.
const POINTS_PER_INCH: f64 = 72.0;

const FONT: &str = "sans-serif";
const TITLE_PT: f64 = 12.0;
const LABEL_PT: f64 = 10.0;
const LINE_PT: f64 = 1.5;

const BLUE_LINE: RGBColor = RGBColor(0, 0, 255);
const GREEN_LINE: RGBColor = RGBColor(0, 128, 0);
const RED_LINE: RGBColor = RGBColor(255, 0, 0);
const PURPLE_LINE: RGBColor = RGBColor(128, 0, 128);
const ORANGE_LINE: RGBColor = RGBColor(255, 165, 0);
const CYAN_LINE: RGBColor = RGBColor(0, 255, 255);

/// The fixed visual contract of one chart: where it goes, what it says, and
/// the label and color of its two lines (first-fit, then best-fit).
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    /// Output file name.
    pub file_name: &'static str,
    /// Caption above the plot.
    pub title: &'static str,
    /// Y axis description.
    pub y_label: &'static str,
    /// Legend label and color per line.
    pub lines: [(&'static str, RGBColor); 2],
}

/// Fragments per request.
pub const FRAGMENTS: ChartSpec = ChartSpec {
    file_name: "fragments_vs_request_id.png",
    title: "First vs Best Fit Fragments",
    y_label: "Fragments",
    lines: [
        ("First Fit Fragments", BLUE_LINE),
        ("Best Fit Fragments", GREEN_LINE),
    ],
};

/// Free-list nodes visited per request.
pub const NODES_TRAVERSED: ChartSpec = ChartSpec {
    file_name: "nodes_traversed.png",
    title: "First vs Best Fit Nodes Traversed",
    y_label: "Nodes Traversed",
    lines: [
        ("First Fit Nodes Traversed", RED_LINE),
        ("Best Fit Nodes Traversed", PURPLE_LINE),
    ],
};

/// Running total of fragments.
pub const CUMULATIVE_FRAGMENTS: ChartSpec = ChartSpec {
    file_name: "cumulative_fragments.png",
    title: "Cumulative Sum of Fragments vs Request ID",
    y_label: "Cumulative Fragments",
    lines: [
        ("Cumulative First Fit Fragments", ORANGE_LINE),
        ("Cumulative Best Fit Fragments", CYAN_LINE),
    ],
};

/// Physical canvas of a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches.
    pub height_in: f64,
    /// Pixels per inch.
    pub dpi: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            width_in: 10.0,
            height_in: 5.0,
            dpi: 300,
        }
    }
}

impl Canvas {
    /// Size of the raster in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    /// Converts typographic points into pixels at this resolution.
    fn px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / POINTS_PER_INCH
    }

    /// Like `px`, rounded to a whole (at least one) pixel.
    fn px_size(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    label: String,
    color: RGBColor,
    points: Vec<(f64, f64)>,
}

impl Line {
    /// Legend label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stroke color.
    pub fn color(&self) -> RGBColor {
        self.color
    }

    /// `(request_id, value)` pairs in table order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// A chart ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    x_label: String,
    y_label: String,
    canvas: Canvas,
    x_range: Range<f64>,
    y_range: Range<f64>,
    lines: Vec<Line>,
}

fn render_error<E: Display>(e: E) -> Error {
    ErrorKind::Render(e.to_string()).into()
}

/// Axis range covering `values` plus a margin. A single value (or a
/// constant series) still yields a non-empty range. Both the bounds and
/// their distance stay finite, since the mesh cannot be laid out over an
/// infinite range.
fn axis_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return 0.0..1.0;
    }
    // halved first so the span itself cannot overflow
    let half_span = max / 2.0 - min / 2.0;
    let pad = if half_span > 0.0 {
        half_span * 2.0 * AXIS_MARGIN
    } else {
        (min.abs() * AXIS_MARGIN).max(0.5)
    };
    let lo = (min - pad).max(f64::MIN);
    let hi = (max + pad).min(f64::MAX);
    if (hi - lo).is_finite() {
        lo..hi
    } else if (max - min).is_finite() {
        min..max
    } else {
        let limit = f64::MAX / 2.0;
        min.max(-limit)..max.min(limit)
    }
}

/// Tick label for the request-id axis; ids are whole numbers.
fn request_id_label(v: &f64) -> String {
    format!("{:.0}", v)
}

/// Builds the figure for `spec`, plotting `ys[i]` against `x` with the
/// style of `spec.lines[i]`.
pub fn render(spec: &ChartSpec, canvas: Canvas, x: &Series, ys: [&Series; 2]) -> Result<Figure> {
    if x.is_empty() {
        bail!(ErrorKind::EmptySeries(x.name().to_string()));
    }
    for y in ys.iter() {
        if y.is_empty() {
            bail!(ErrorKind::EmptySeries(y.name().to_string()));
        }
        if y.len() != x.len() {
            bail!(ErrorKind::MisalignedSeries(
                y.name().to_string(),
                x.len(),
                y.len()
            ));
        }
    }

    let lines = spec
        .lines
        .iter()
        .zip(ys.iter())
        .map(|(&(label, color), y)| Line {
            label: label.to_string(),
            color: color,
            points: x
                .values()
                .iter()
                .cloned()
                .zip(y.values().iter().cloned())
                .collect(),
        })
        .collect::<Vec<_>>();

    let x_range = axis_range(x.values().iter().cloned());
    let y_range = axis_range(ys.iter().flat_map(|y| y.values().iter().cloned()));
    debug!(
        "rendered '{}': {} points, x {:?}, y {:?}",
        spec.title,
        x.len(),
        x_range,
        y_range
    );

    Ok(Figure {
        title: spec.title.to_string(),
        x_label: "Request ID".to_string(),
        y_label: spec.y_label.to_string(),
        canvas: canvas,
        x_range: x_range,
        y_range: y_range,
        lines: lines,
    })
}

impl Figure {
    /// Caption above the plot.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The plotted lines, first-fit first.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Visible x range.
    pub fn x_range(&self) -> Range<f64> {
        self.x_range.clone()
    }

    /// Visible y range.
    pub fn y_range(&self) -> Range<f64> {
        self.y_range.clone()
    }

    /// Size of the raster in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        self.canvas.pixel_size()
    }

    /// Draws the whole chart (background, grid, axes, lines, legend) onto
    /// `area`. The caller decides where the pixels end up.
    pub fn draw_on<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()> {
        let canvas = self.canvas;
        let label_font = (FONT, canvas.px(LABEL_PT));
        let stroke = canvas.px_size(LINE_PT);
        let legend_len = canvas.px_size(20.0) as i32;

        area.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(area)
            .caption(self.title.as_str(), (FONT, canvas.px(TITLE_PT)))
            .margin(canvas.px_size(8.0))
            .x_label_area_size(canvas.px_size(30.0))
            .y_label_area_size(canvas.px_size(50.0))
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .x_label_formatter(&request_id_label)
            .label_style(label_font)
            .axis_desc_style(label_font)
            .bold_line_style(BLACK.mix(0.15))
            .light_line_style(WHITE)
            .draw()
            .map_err(render_error)?;

        for line in &self.lines {
            let style = line.color.stroke_width(stroke);
            chart
                .draw_series(LineSeries::new(line.points.iter().cloned(), style))
                .map_err(render_error)?
                .label(line.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
        }

        chart
            .configure_series_labels()
            .legend_area_size(legend_len + stroke as i32)
            .label_font(label_font)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(render_error)?;

        trace!("drew '{}' with {} lines", self.title, self.lines.len());
        Ok(())
    }
}
