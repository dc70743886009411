//! Ranking bar chart view.

use eframe::egui;

use crate::plot::bar::BarScene;
use crate::state::BAR_LABEL_WIDTH;
use crate::ui::to_color32;

/// Horizontal padding between a bar and its value annotation.
const VALUE_TEXT_GAP: f32 = 6.0;

/// Space reserved to the right of the bars for the annotation text.
const VALUE_TEXT_WIDTH: f32 = 70.0;

pub fn show(ui: &mut egui::Ui, scene: &BarScene) {
    let available_width = ui.available_width();
    let chart_size = egui::vec2(available_width, scene.chart_height());
    let (rect, _response) = ui.allocate_exact_size(chart_size, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let bar_area_width =
        (rect.width() - BAR_LABEL_WIDTH - VALUE_TEXT_WIDTH).max(40.0);
    let fill = to_color32(scene.fill);
    let text_color = egui::Color32::from_rgb(220, 220, 220);

    for (i, row) in scene.rows.iter().enumerate() {
        let row_top = rect.top() + i as f32 * scene.row_height;
        let row_center_y = row_top + scene.row_height / 2.0;

        // Right-aligned label in the left margin
        painter.text(
            egui::pos2(rect.left() + BAR_LABEL_WIDTH - 8.0, row_center_y),
            egui::Align2::RIGHT_CENTER,
            &row.label,
            egui::FontId::proportional(12.0),
            text_color,
        );

        let bar_width = bar_area_width * row.fraction as f32;
        let bar_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left() + BAR_LABEL_WIDTH, row_top + 2.0),
            egui::vec2(bar_width, scene.row_height - 4.0),
        );
        painter.rect_filled(bar_rect, 2.0, fill);

        painter.text(
            egui::pos2(bar_rect.right() + VALUE_TEXT_GAP, row_center_y),
            egui::Align2::LEFT_CENTER,
            &row.value_text,
            egui::FontId::proportional(11.0),
            text_color,
        );
    }
}
