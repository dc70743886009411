//! Calendar heatmap view: one 7-row grid per year, newest year first.

use eframe::egui;

use crate::color::NO_DATA_FILL;
use crate::plot::frequency::{FrequencyScene, YearGrid};
use crate::state::{HEATMAP_CELL_GAP, HEATMAP_CELL_SIZE};
use crate::ui::{render_scale_legend, to_color32};

/// Left margin for the weekday row labels.
const WEEKDAY_LABEL_WIDTH: f32 = 36.0;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_SEPARATOR_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 100, 100);

pub fn show(ui: &mut egui::Ui, scene: &FrequencyScene) {
    render_scale_legend(
        ui,
        &scene.scale,
        &scene.legend_min_label(),
        &scene.legend_max_label(),
    );
    ui.add_space(8.0);

    for grid in scene.years.iter().rev() {
        ui.label(
            egui::RichText::new(grid.year.to_string())
                .size(14.0)
                .strong(),
        );
        ui.add_space(2.0);
        render_year(ui, scene, grid);
        ui.add_space(12.0);
    }
}

fn render_year(ui: &mut egui::Ui, scene: &FrequencyScene, grid: &YearGrid) {
    let step = HEATMAP_CELL_SIZE + HEATMAP_CELL_GAP;
    let grid_size = egui::vec2(
        WEEKDAY_LABEL_WIDTH + grid.weeks as f32 * step,
        7.0 * step,
    );
    let (rect, _response) = ui.allocate_exact_size(grid_size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let origin = egui::pos2(rect.left() + WEEKDAY_LABEL_WIDTH, rect.top());

    for (row, label) in WEEKDAY_LABELS.iter().enumerate() {
        painter.text(
            egui::pos2(rect.left(), origin.y + row as f32 * step + HEATMAP_CELL_SIZE / 2.0),
            egui::Align2::LEFT_CENTER,
            *label,
            egui::FontId::proportional(9.0),
            egui::Color32::from_rgb(160, 160, 160),
        );
    }

    for cell in &grid.cells {
        let cell_pos = egui::pos2(
            origin.x + cell.week as f32 * step,
            origin.y + cell.weekday as f32 * step,
        );
        let cell_rect = egui::Rect::from_min_size(
            cell_pos,
            egui::vec2(HEATMAP_CELL_SIZE, HEATMAP_CELL_SIZE),
        );

        let fill = match cell.value {
            Some(value) => to_color32(scene.scale.color(value)),
            None => to_color32(NO_DATA_FILL),
        };
        painter.rect_filled(cell_rect, 2.0, fill);

        if cell.month_start {
            painter.line_segment(
                [
                    egui::pos2(cell_rect.left() - HEATMAP_CELL_GAP / 2.0, cell_rect.top()),
                    egui::pos2(
                        cell_rect.left() - HEATMAP_CELL_GAP / 2.0,
                        cell_rect.bottom(),
                    ),
                ],
                egui::Stroke::new(1.0, MONTH_SEPARATOR_COLOR),
            );
        }

        let response = ui.interact(
            cell_rect,
            ui.id().with((grid.year, cell.week, cell.weekday)),
            egui::Sense::hover(),
        );
        if response.hovered() {
            response.on_hover_text(scene.tooltip_text(cell));
        }
    }
}
