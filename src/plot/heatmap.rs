//! Categorical matrix heatmap scene builder.
//!
//! Renders one cell per `(x, y)` category pair, colored by a single scale
//! over the whole matrix's occupied min/max. Rows and columns are drawn
//! in the order given - sorting by marginal sums is the aggregation
//! layer's job (see `aggregate::matrix`).

use crate::color::ColorScale;

/// Computed matrix heatmap description.
///
/// `matrix[x][y]` must be dense over `x_labels.len() * y_labels.len()`;
/// `None` marks a combination with no data.
#[derive(Clone, Debug)]
pub struct HeatScene {
    pub matrix: Vec<Vec<Option<f64>>>,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub scale: ColorScale,
    pub format_value: fn(f64) -> String,
}

impl HeatScene {
    pub fn width(&self) -> usize {
        self.x_labels.len()
    }

    pub fn height(&self) -> usize {
        self.y_labels.len()
    }

    /// Tooltip: both axis labels plus the formatted value.
    pub fn tooltip_text(&self, x: usize, y: usize) -> String {
        let value = match self.matrix[x][y] {
            Some(value) => (self.format_value)(value),
            None => super::frequency::NO_ACTIVITY_TEXT.to_string(),
        };
        format!("{} @ {}: {}", self.x_labels[x], self.y_labels[y], value)
    }

    pub fn legend_min_label(&self) -> String {
        (self.format_value)(self.scale.min())
    }

    pub fn legend_max_label(&self) -> String {
        (self.format_value)(self.scale.max())
    }
}

/// Build a matrix heatmap scene.
///
/// Returns `None` when the matrix has no cells or no occupied cell.
pub fn build_heat_scene(
    matrix: Vec<Vec<Option<f64>>>,
    x_labels: Vec<String>,
    y_labels: Vec<String>,
    format_value: fn(f64) -> String,
) -> Option<HeatScene> {
    if matrix.is_empty() || y_labels.is_empty() {
        return None;
    }
    debug_assert_eq!(matrix.len(), x_labels.len());
    debug_assert!(matrix.iter().all(|col| col.len() == y_labels.len()));

    let occupied: Vec<f64> = matrix.iter().flatten().filter_map(|v| *v).collect();
    if occupied.is_empty() {
        return None;
    }

    let min = occupied.iter().copied().fold(f64::INFINITY, f64::min);
    let max = occupied.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(HeatScene {
        matrix,
        x_labels,
        y_labels,
        scale: ColorScale::heat(min, max),
        format_value,
    })
}
