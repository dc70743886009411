//! Report views. Each chart module renders a pre-computed scene from
//! `plot`; no view touches session data directly.

use eframe::egui;

use crate::color::{ColorScale, Rgb};
use crate::model::LookupError;

pub mod bar_chart;
pub mod frequency_map;
pub mod heatmap;
pub mod line_plot;
pub mod session_list;
pub mod stats_panel;
pub mod tab_bar;

/// Number of swatches in a gradient legend.
const LEGEND_STEPS: usize = 32;

/// Height of the gradient legend bar.
const LEGEND_HEIGHT: f32 = 12.0;

/// Width of the gradient legend bar.
const LEGEND_WIDTH: f32 = 160.0;

pub(crate) fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Placeholder shown when a report's scene builder returned nothing.
pub fn render_no_data(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("No data")
                .size(20.0)
                .color(egui::Color32::GRAY),
        );
    });
}

/// Shown when a session references a car or track missing from the
/// reference tables. Loud on purpose: this means stale reference data.
pub fn render_data_error(ui: &mut egui::Ui, error: &LookupError) {
    tracing::error!("reference lookup failed: {}", error);
    ui.colored_label(
        egui::Color32::from_rgb(191, 78, 48),
        format!("Data error: {}", error),
    );
}

/// Gradient legend bar with min/max labels at each end.
pub(crate) fn render_scale_legend(
    ui: &mut egui::Ui,
    scale: &ColorScale,
    min_label: &str,
    max_label: &str,
) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(min_label)
                .size(11.0)
                .color(egui::Color32::from_rgb(200, 200, 200)),
        );

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(LEGEND_WIDTH, LEGEND_HEIGHT),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        let stops = scale.legend_stops(LEGEND_STEPS);
        let step_width = rect.width() / stops.len() as f32;
        for (i, stop) in stops.iter().enumerate() {
            let swatch = egui::Rect::from_min_size(
                egui::pos2(rect.left() + i as f32 * step_width, rect.top()),
                egui::vec2(step_width + 0.5, rect.height()),
            );
            painter.rect_filled(swatch, 0.0, to_color32(*stop));
        }

        ui.label(
            egui::RichText::new(max_label)
                .size(11.0)
                .color(egui::Color32::from_rgb(200, 200, 200)),
        );
    });
}
