//! Driver and report tab bars.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::IrStatsApp;
use crate::report::ReportType;

impl IrStatsApp {
    /// Render the top bar: one tab per driver plus the add-driver field.
    pub fn render_driver_bar(&mut self, ui: &mut egui::Ui) {
        let mut tab_to_activate: Option<usize> = None;
        let mut tab_to_close: Option<usize> = None;

        // Collect tab info to avoid borrow issues
        let tab_info: Vec<(String, bool)> = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| (tab.driver_name.clone(), self.active_tab == i))
            .collect();

        ui.horizontal(|ui| {
            for (i, (name, is_active)) in tab_info.iter().enumerate() {
                let tab_color = if *is_active {
                    egui::Color32::from_rgb(60, 60, 60)
                } else {
                    egui::Color32::from_rgb(40, 40, 40)
                };

                let text_color = if *is_active {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::from_rgb(180, 180, 180)
                };

                let border_color = if *is_active {
                    egui::Color32::from_rgb(71, 108, 155)
                } else {
                    egui::Color32::from_rgb(60, 60, 60)
                };

                egui::Frame::NONE
                    .fill(tab_color)
                    .corner_radius(egui::CornerRadius {
                        nw: 6,
                        ne: 6,
                        sw: 0,
                        se: 0,
                    })
                    .stroke(egui::Stroke::new(
                        if *is_active { 2.0 } else { 1.0 },
                        border_color,
                    ))
                    .inner_margin(egui::Margin {
                        left: 12,
                        right: 8,
                        top: 6,
                        bottom: 6,
                    })
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let label_response = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(name).color(text_color).size(13.0),
                                )
                                .sense(egui::Sense::click()),
                            );

                            if label_response.clicked() {
                                tab_to_activate = Some(i);
                            }
                            if label_response.hovered() {
                                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            }

                            ui.add_space(4.0);

                            let close_btn = ui.add(
                                egui::Label::new(
                                    egui::RichText::new("x")
                                        .color(egui::Color32::from_rgb(150, 150, 150))
                                        .size(14.0),
                                )
                                .sense(egui::Sense::click()),
                            );

                            if close_btn.clicked() {
                                tab_to_close = Some(i);
                            }
                            if close_btn.hovered() {
                                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            }
                        });
                    });

                ui.add_space(2.0);
            }

            ui.add_space(8.0);

            // Add-driver field; Enter submits
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.driver_input)
                    .hint_text("Add driver...")
                    .desired_width(160.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted || ui.button("+").clicked() {
                let name = std::mem::take(&mut self.driver_input);
                self.add_driver(name);
            }

            if !self.tabs.is_empty() && ui.button("⟳").on_hover_text("Refresh").clicked() {
                self.refresh_active_driver();
            }
        });

        if let Some(index) = tab_to_activate {
            self.active_tab = index;
        }
        if let Some(index) = tab_to_close {
            self.close_driver(index);
        }
    }

    /// Render the second bar: report selection for the active driver.
    pub fn render_report_bar(&mut self, ui: &mut egui::Ui) {
        if self.tabs.is_empty() {
            return;
        }
        let index = self.active_tab.min(self.tabs.len() - 1);
        let tab = &mut self.tabs[index];

        ui.horizontal(|ui| {
            for report in ReportType::iter() {
                if ui
                    .selectable_label(tab.report == report, report.title())
                    .clicked()
                {
                    tab.report = report;
                }
            }
        });

        let last_report = tab.report;
        if self.settings.last_report != last_report.name() {
            self.settings.last_report = last_report.name().to_string();
            if let Err(e) = self.settings.save() {
                tracing::warn!("failed to save settings: {}", e);
            }
        }
    }
}
