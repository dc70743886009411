//! The chart engine.
//!
//! Each chart is split into a pure scene builder (this module tree) and an
//! egui renderer (`crate::ui`). Builders transform fully-materialized
//! in-memory records into a scene description: axis domains, color scales,
//! calendar buckets, sorted matrices and per-mark annotations. They do no
//! I/O and hold no UI types, so every domain rule is unit-testable without
//! a window.
//!
//! - [`line`] - multi-series step-after time series with threshold lanes
//! - [`bar`] - sorted horizontal ranking bars
//! - [`frequency`] - calendar heatmap of per-day activity
//! - [`heatmap`] - 2D categorical matrix heatmap
//!
//! Empty input always yields `None` ("no data"), never an empty
//! coordinate system.

pub mod bar;
pub mod frequency;
pub mod heatmap;
pub mod line;

use crate::color::Rgb;

/// Default palette for multi-series line charts.
pub const SERIES_COLORS: &[Rgb] = &[
    [191, 78, 48],   // Rust orange
    [71, 108, 155],  // Blue
    [159, 166, 119], // Sage green
    [253, 193, 73],  // Amber
    [204, 121, 167], // Reddish purple
    [0, 158, 115],   // Bluish green
];

/// Pick the color for series `index`: explicit style colors first, then
/// the default palette.
pub fn series_color(index: usize, explicit: &[Rgb]) -> Rgb {
    if index < explicit.len() {
        explicit[index]
    } else {
        SERIES_COLORS[index % SERIES_COLORS.len()]
    }
}
