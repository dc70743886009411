//! Step-line chart view backed by `egui_plot`.

use chrono::DateTime;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Polygon};

use crate::plot::line::LineScene;
use crate::ui::to_color32;

/// Alpha applied to background lanes so the series stay readable.
const LANE_ALPHA: u8 = 70;

const CHART_HEIGHT: f32 = 420.0;

/// Render a line chart scene. `plot_id` keeps pan/zoom state separate
/// between the different line reports.
pub fn show(ui: &mut egui::Ui, scene: &LineScene, plot_id: &str) {
    let plot = Plot::new(plot_id.to_owned())
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .show_grid([scene.show_vertical_grid, scene.show_horizontal_grid])
        .allow_zoom([true, false])
        .allow_drag([true, false])
        .x_axis_formatter(|mark, _range| format_date_tick(mark.value))
        .label_formatter(|name, point| {
            if name.is_empty() {
                format_date_tick(point.x)
            } else {
                format!("{}\n{}: {:.0}", format_date_tick(point.x), name, point.y)
            }
        });

    let (x_min, x_max) = scene.x_domain;
    plot.show(ui, |plot_ui| {
        // Lanes first so series draw on top
        for lane in &scene.lanes {
            let color = to_color32(lane.color).gamma_multiply(LANE_ALPHA as f32 / 255.0);
            let corners = vec![
                [x_min, lane.min],
                [x_max, lane.min],
                [x_max, lane.max],
                [x_min, lane.max],
            ];
            plot_ui.polygon(
                Polygon::new("", PlotPoints::new(corners))
                    .fill_color(color)
                    .stroke(egui::Stroke::NONE),
            );
        }

        for (i, series) in scene.series.iter().enumerate() {
            let path = series.step_path(x_max);
            let name = scene
                .legend
                .get(i)
                .map(|(label, _)| label.as_str())
                .unwrap_or("");
            plot_ui.line(
                Line::new(name.to_owned(), PlotPoints::new(path))
                    .color(to_color32(series.color))
                    .width(1.5),
            );
        }
    });
}

fn format_date_tick(unix_seconds: f64) -> String {
    match DateTime::from_timestamp(unix_seconds as i64, 0) {
        Some(time) => time.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}
