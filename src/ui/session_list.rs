//! Tabular race result list.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::aggregate::table::SessionRow;

const ROW_HEIGHT: f32 = 20.0;

const GAIN_COLOR: egui::Color32 = egui::Color32::from_rgb(113, 120, 78);
const LOSS_COLOR: egui::Color32 = egui::Color32::from_rgb(191, 78, 48);

pub fn show(ui: &mut egui::Ui, rows: &[SessionRow]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(90.0)) // date
        .column(Column::remainder().at_least(160.0)) // series
        .column(Column::remainder().at_least(140.0)) // car
        .column(Column::remainder().at_least(140.0)) // track
        .column(Column::auto().at_least(40.0)) // position
        .column(Column::auto().at_least(60.0)) // irating delta
        .column(Column::auto().at_least(60.0)) // new irating
        .column(Column::auto().at_least(80.0)) // category
        .header(22.0, |mut header| {
            for title in [
                "Date", "Series", "Car", "Track", "Pos", "IR Δ", "IR", "Category",
            ] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut table_row| {
                let row = &rows[table_row.index()];
                table_row.col(|ui| {
                    ui.label(row.start_time.format("%Y-%m-%d").to_string());
                });
                table_row.col(|ui| {
                    ui.label(&row.series_name);
                });
                table_row.col(|ui| {
                    ui.label(&row.car_name);
                });
                table_row.col(|ui| {
                    ui.label(&row.track_name);
                });
                table_row.col(|ui| {
                    ui.label(row.finish_position_in_class.to_string());
                });
                table_row.col(|ui| {
                    let delta = row.irating_delta;
                    let color = if delta >= 0 { GAIN_COLOR } else { LOSS_COLOR };
                    ui.colored_label(color, format!("{:+}", delta));
                });
                table_row.col(|ui| {
                    ui.label(row.new_irating.to_string());
                });
                table_row.col(|ui| {
                    ui.label(row.license_category.nice_name());
                });
            });
        });
}
