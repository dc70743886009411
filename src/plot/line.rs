//! Time-series line chart scene builder.
//!
//! Rating-like values persist between races, so series are drawn with
//! step-after interpolation: a value holds until the next sample. The
//! x-domain always extends to at least "now" so a chart of purely
//! historical points shows the held value running up to the present.

use chrono::{DateTime, Utc};

use crate::color::Rgb;
use crate::plot::series_color;

/// One sample of a time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }

    /// Plot-space x coordinate (unix seconds).
    pub fn x(&self) -> f64 {
        self.time.timestamp() as f64
    }
}

/// A horizontal background band, e.g. a license tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalLane {
    pub min: f64,
    pub max: f64,
    pub color: Rgb,
}

/// Recognized style options for [`build_line_scene`]. Unset fields fall
/// back to the documented defaults; there is no hidden option bag.
#[derive(Clone, Debug, Default)]
pub struct LineStyle {
    /// Background bands, clipped to the y-domain before rendering.
    pub horizontal_lanes: Vec<HorizontalLane>,
    /// Per-series colors; missing entries use the shared palette.
    pub line_colors: Vec<Rgb>,
    pub show_horizontal_grid: bool,
    pub show_vertical_grid: bool,
    /// Legend entries, matched to series by position. Empty = no legend.
    pub legend_labels: Vec<String>,
}

/// One rendered polyline.
#[derive(Clone, Debug)]
pub struct LineSeries {
    pub color: Rgb,
    pub points: Vec<DataPoint>,
}

impl LineSeries {
    /// Expand the samples into a step-after path, holding the last value
    /// out to `x_end` (the right edge of the x-domain).
    pub fn step_path(&self, x_end: f64) -> Vec<[f64; 2]> {
        let mut path = Vec::with_capacity(self.points.len() * 2 + 1);
        for window in self.points.windows(2) {
            let (current, next) = (window[0], window[1]);
            path.push([current.x(), current.value]);
            path.push([next.x(), current.value]);
        }
        if let Some(last) = self.points.last() {
            path.push([last.x(), last.value]);
            if x_end > last.x() {
                path.push([x_end, last.value]);
            }
        }
        path
    }
}

/// Computed line chart description.
#[derive(Clone, Debug)]
pub struct LineScene {
    /// Unix-second x extent across all series, extended to at least `now`.
    pub x_domain: (f64, f64),
    /// Value extent across all series.
    pub y_domain: (f64, f64),
    /// Lanes clipped to the y-domain; fully out-of-domain lanes dropped.
    pub lanes: Vec<HorizontalLane>,
    pub series: Vec<LineSeries>,
    /// Label/color pairs, present only when the style provided labels.
    pub legend: Vec<(String, Rgb)>,
    pub show_horizontal_grid: bool,
    pub show_vertical_grid: bool,
}

/// Build a line chart scene from one or more parallel series.
///
/// Returns `None` when every series is empty; the renderer shows a
/// "No data" placeholder in that case.
pub fn build_line_scene(
    series: &[Vec<DataPoint>],
    style: &LineStyle,
    now: DateTime<Utc>,
) -> Option<LineScene> {
    let points = series.iter().flatten();
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any = false;

    for point in points {
        any = true;
        x_min = x_min.min(point.x());
        x_max = x_max.max(point.x());
        y_min = y_min.min(point.value);
        y_max = y_max.max(point.value);
    }

    if !any {
        return None;
    }

    // Keep showing the held value up to the present
    x_max = x_max.max(now.timestamp() as f64);

    let lanes = style
        .horizontal_lanes
        .iter()
        .filter(|lane| lane.max > y_min && lane.min < y_max)
        .map(|lane| HorizontalLane {
            min: lane.min.max(y_min),
            max: lane.max.min(y_max),
            color: lane.color,
        })
        .collect();

    let series: Vec<LineSeries> = series
        .iter()
        .enumerate()
        .map(|(i, points)| LineSeries {
            color: series_color(i, &style.line_colors),
            points: points.clone(),
        })
        .collect();

    let legend = style
        .legend_labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), series_color(i, &style.line_colors)))
        .collect();

    Some(LineScene {
        x_domain: (x_min, x_max),
        y_domain: (y_min, y_max),
        lanes,
        series,
        legend,
        show_horizontal_grid: style.show_horizontal_grid,
        show_vertical_grid: style.show_vertical_grid,
    })
}
