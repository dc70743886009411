//! Ranking bar chart scene builder.
//!
//! Renders one horizontal bar per entity, sized proportionally to its
//! value, with the formatted value annotated at the bar's end. The caller
//! decides the order (descending by value is the convention throughout
//! the reports). Chart height grows with the entity count so a long tail
//! of categories never compresses into unreadable slivers.

use crate::color::Rgb;

/// Fill used by the usage charts.
pub const DEFAULT_BAR_FILL: Rgb = [110, 181, 255];

/// Height of one bar row in pixels, including padding.
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

fn default_value_format(value: f64) -> String {
    format!("{:.1}", value)
}

/// Recognized format options for [`build_bar_scene`].
#[derive(Clone, Copy, Debug)]
pub struct BarFormat {
    /// Formats the value annotation and axis ticks.
    pub value_format: fn(f64) -> String,
    pub fill: Rgb,
    pub row_height: f32,
}

impl Default for BarFormat {
    fn default() -> Self {
        Self {
            value_format: default_value_format,
            fill: DEFAULT_BAR_FILL,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

/// One entity to rank.
#[derive(Clone, Debug)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
}

/// One computed bar row.
#[derive(Clone, Debug)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    /// Bar length as a fraction of the axis maximum, in `[0, 1]`.
    pub fraction: f64,
    /// Pre-formatted annotation drawn at the bar's end.
    pub value_text: String,
}

/// Computed ranking chart description.
#[derive(Clone, Debug)]
pub struct BarScene {
    pub rows: Vec<BarRow>,
    pub max_value: f64,
    pub row_height: f32,
    pub fill: Rgb,
}

impl BarScene {
    /// Total chart height: fixed per-row height, not a fixed chart size.
    pub fn chart_height(&self) -> f32 {
        self.rows.len() as f32 * self.row_height
    }
}

/// Build a ranking chart in the order the entries were given.
///
/// Returns `None` for an empty entry list.
pub fn build_bar_scene(entries: &[BarEntry], format: &BarFormat) -> Option<BarScene> {
    if entries.is_empty() {
        return None;
    }

    let max_value = entries.iter().map(|e| e.value).fold(0.0_f64, f64::max);

    let rows = entries
        .iter()
        .map(|entry| BarRow {
            label: entry.label.clone(),
            value: entry.value,
            fraction: if max_value > 0.0 {
                (entry.value / max_value).clamp(0.0, 1.0)
            } else {
                0.0
            },
            value_text: (format.value_format)(entry.value),
        })
        .collect();

    Some(BarScene {
        rows,
        max_value,
        row_height: format.row_height,
        fill: format.fill,
    })
}
