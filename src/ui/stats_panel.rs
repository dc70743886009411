//! Driver summary panel.

use eframe::egui;

use crate::aggregate::stats::DriverStats;
use crate::units;

pub fn show(ui: &mut egui::Ui, driver_name: &str, stats: &DriverStats) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(driver_name).size(22.0).strong());
    ui.add_space(12.0);

    egui::Grid::new("driver_summary_grid")
        .num_columns(2)
        .spacing([24.0, 8.0])
        .show(ui, |ui| {
            ui.label("Laps completed");
            ui.label(stats.laps.to_string());
            ui.end_row();

            ui.label("Time on track");
            ui.label(units::format_hours(units::to_hours(stats.time)));
            ui.end_row();

            ui.label("Distance driven");
            ui.label(format!("{} km", units::round_to(stats.distance, 1)));
            ui.end_row();

            ui.label("Corners taken");
            ui.label(stats.corners.to_string());
            ui.end_row();

            ui.label("Incidents");
            ui.label(stats.incidents.to_string());
            ui.end_row();

            ui.label("Corners per incident");
            ui.label(units::format_cpi(stats.cpi()));
            ui.end_row();
        });
}
