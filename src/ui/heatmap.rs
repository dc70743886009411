//! Categorical matrix heatmap view (car columns, track rows).

use eframe::egui;
use eframe::egui::epaint::TextShape;

use crate::color::NO_DATA_FILL;
use crate::plot::heatmap::HeatScene;
use crate::state::{HEATMAP_CELL_GAP, HEATMAP_CELL_SIZE};
use crate::ui::{render_scale_legend, to_color32};

/// Left margin for the row labels.
const ROW_LABEL_WIDTH: f32 = 220.0;

/// Top margin for the rotated column labels.
const COLUMN_LABEL_HEIGHT: f32 = 130.0;

/// Matrix cells are larger than calendar cells; the labels need room.
const CELL_SIZE: f32 = HEATMAP_CELL_SIZE + 4.0;

const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);

pub fn show(ui: &mut egui::Ui, scene: &HeatScene) {
    render_scale_legend(
        ui,
        &scene.scale,
        &scene.legend_min_label(),
        &scene.legend_max_label(),
    );
    ui.add_space(8.0);

    let step = CELL_SIZE + HEATMAP_CELL_GAP;
    let grid_size = egui::vec2(
        ROW_LABEL_WIDTH + scene.width() as f32 * step,
        COLUMN_LABEL_HEIGHT + scene.height() as f32 * step,
    );
    let (rect, _response) = ui.allocate_exact_size(grid_size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let origin = egui::pos2(
        rect.left() + ROW_LABEL_WIDTH,
        rect.top() + COLUMN_LABEL_HEIGHT,
    );

    // Rotated column labels, anchored just above their column
    for (x, label) in scene.x_labels.iter().enumerate() {
        let galley = painter.layout_no_wrap(
            label.clone(),
            egui::FontId::proportional(10.0),
            LABEL_COLOR,
        );
        let pos = egui::pos2(
            origin.x + x as f32 * step + CELL_SIZE / 2.0,
            origin.y - 6.0,
        );
        painter.add(
            TextShape::new(pos, galley, LABEL_COLOR)
                .with_angle(-std::f32::consts::FRAC_PI_4),
        );
    }

    for (y, label) in scene.y_labels.iter().enumerate() {
        painter.text(
            egui::pos2(
                origin.x - 8.0,
                origin.y + y as f32 * step + CELL_SIZE / 2.0,
            ),
            egui::Align2::RIGHT_CENTER,
            label,
            egui::FontId::proportional(10.0),
            LABEL_COLOR,
        );
    }

    for x in 0..scene.width() {
        for y in 0..scene.height() {
            let cell_rect = egui::Rect::from_min_size(
                egui::pos2(origin.x + x as f32 * step, origin.y + y as f32 * step),
                egui::vec2(CELL_SIZE, CELL_SIZE),
            );

            let fill = match scene.matrix[x][y] {
                Some(value) => to_color32(scene.scale.color(value)),
                None => to_color32(NO_DATA_FILL),
            };
            painter.rect_filled(cell_rect, 2.0, fill);

            let response = ui.interact(
                cell_rect,
                ui.id().with(("matrix_cell", x, y)),
                egui::Sense::hover(),
            );
            if response.hovered() {
                response.on_hover_text(scene.tooltip_text(x, y));
            }
        }
    }
}
