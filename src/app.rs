//! Main application state and eframe::App implementation.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use chrono::Utc;
use eframe::egui;

use crate::aggregate::{history, matrix, stats, table, usage};
use crate::api::ApiClient;
use crate::model::{CategoryType, ReferenceData, Session};
use crate::plot::bar::{build_bar_scene, BarEntry, BarFormat};
use crate::plot::frequency::build_frequency_scene;
use crate::plot::heatmap::build_heat_scene;
use crate::plot::line::{build_line_scene, DataPoint, LineStyle};
use crate::report::ReportType;
use crate::settings::UserSettings;
use crate::state::{cpi_lanes, DriverData, DriverTab, FetchState, SELECTABLE_CATEGORIES};
use crate::ui;
use crate::units;

/// Result of a background fetch, delivered over the app channel.
pub enum AppMessage {
    ReferenceLoaded(Result<ReferenceData, String>),
    SessionsLoaded {
        driver_name: String,
        generation: u64,
        result: Result<Vec<Session>, String>,
    },
}

/// Main application state
pub struct IrStatsApp {
    pub(crate) settings: UserSettings,
    pub(crate) client: ApiClient,
    /// Load-once car/track lookup tables; charts wait for these.
    pub(crate) refdata: Option<ReferenceData>,
    pub(crate) refdata_error: Option<String>,
    /// One tab per driver.
    pub(crate) tabs: Vec<DriverTab>,
    pub(crate) active_tab: usize,
    /// Text buffer for the add-driver field.
    pub(crate) driver_input: String,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
}

impl IrStatsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, extra_drivers: Vec<String>) -> Self {
        let settings = UserSettings::load();
        let client = ApiClient::new(settings.backend_url.clone());
        let (tx, rx) = channel();

        let mut drivers = settings.drivers.clone();
        for driver in extra_drivers {
            if !drivers.contains(&driver) {
                drivers.push(driver);
            }
        }

        let mut app = Self {
            settings,
            client,
            refdata: None,
            refdata_error: None,
            tabs: Vec::new(),
            active_tab: 0,
            driver_input: String::new(),
            tx,
            rx,
        };

        app.spawn_reference_fetch();
        for driver in drivers {
            app.add_driver(driver);
        }
        app
    }

    fn spawn_reference_fetch(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = client
                .fetch_reference_data()
                .map_err(|e| e.to_string());
            // Receiver is dropped only on shutdown
            let _ = tx.send(AppMessage::ReferenceLoaded(result));
        });
    }

    fn spawn_session_fetch(&mut self, tab_index: usize) {
        let tab = &mut self.tabs[tab_index];
        tab.generation += 1;
        tab.state = FetchState::Loading;

        let driver_name = tab.driver_name.clone();
        let generation = tab.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            tracing::info!(driver = %driver_name, "fetching sessions");
            let result = client
                .fetch_driver_sessions(&driver_name)
                .map_err(|e| e.to_string());
            let _ = tx.send(AppMessage::SessionsLoaded {
                driver_name,
                generation,
                result,
            });
        });
    }

    /// Add a driver tab and start fetching its sessions.
    pub fn add_driver(&mut self, driver_name: String) {
        let driver_name = driver_name.trim().to_string();
        if driver_name.is_empty()
            || self.tabs.iter().any(|t| t.driver_name == driver_name)
        {
            return;
        }
        let mut tab = DriverTab::new(driver_name);
        tab.report = ReportType::from_name(&self.settings.last_report);
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.active_tab = index;
        self.spawn_session_fetch(index);
        self.persist_drivers();
    }

    pub fn close_driver(&mut self, tab_index: usize) {
        if tab_index < self.tabs.len() {
            self.tabs.remove(tab_index);
            if self.active_tab >= self.tabs.len() && self.active_tab > 0 {
                self.active_tab = self.tabs.len() - 1;
            }
            self.persist_drivers();
        }
    }

    pub fn refresh_active_driver(&mut self) {
        if self.active_tab < self.tabs.len() {
            self.spawn_session_fetch(self.active_tab);
        }
    }

    fn persist_drivers(&mut self) {
        self.settings.drivers = self.tabs.iter().map(|t| t.driver_name.clone()).collect();
        if let Err(e) = self.settings.save() {
            tracing::warn!("failed to save settings: {}", e);
        }
    }

    /// Drain fetch results. Responses whose generation no longer matches
    /// the tab's current one are stale and dropped (last-write-wins).
    fn process_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            match message {
                AppMessage::ReferenceLoaded(Ok(refdata)) => {
                    self.refdata = Some(refdata);
                    self.refdata_error = None;
                }
                AppMessage::ReferenceLoaded(Err(error)) => {
                    tracing::error!("reference data fetch failed: {}", error);
                    self.refdata_error = Some(error);
                }
                AppMessage::SessionsLoaded {
                    driver_name,
                    generation,
                    result,
                } => {
                    let Some(tab) = self
                        .tabs
                        .iter_mut()
                        .find(|t| t.driver_name == driver_name)
                    else {
                        continue; // tab was closed while the fetch ran
                    };
                    if tab.generation != generation {
                        tracing::debug!(driver = %driver_name, "dropping stale fetch result");
                        continue;
                    }
                    tab.state = match result {
                        Ok(sessions) => {
                            tracing::info!(
                                driver = %driver_name,
                                sessions = sessions.len(),
                                "sessions loaded"
                            );
                            FetchState::Loaded(DriverData { sessions })
                        }
                        Err(error) => FetchState::Failed(error),
                    };
                }
            }
        }
    }

    // ========================================================================
    // Report rendering
    // ========================================================================

    fn render_active_report(&mut self, ui: &mut egui::Ui) {
        if self.tabs.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Add a driver to get started")
                        .size(20.0)
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        }

        let tab_index = self.active_tab.min(self.tabs.len() - 1);

        match &self.tabs[tab_index].state {
            FetchState::Idle | FetchState::Loading => {
                ui.spinner();
                ui.label(format!(
                    "Loading sessions for {}...",
                    self.tabs[tab_index].driver_name
                ));
                return;
            }
            FetchState::Failed(error) => {
                ui.colored_label(
                    egui::Color32::from_rgb(191, 78, 48),
                    format!("Fetch failed: {}", error),
                );
                if ui.button("Retry").clicked() {
                    self.spawn_session_fetch(tab_index);
                }
                return;
            }
            FetchState::Loaded(_) => {}
        }

        if self.refdata.is_none() {
            match self.refdata_error.clone() {
                Some(error) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(191, 78, 48),
                        format!("Reference data failed: {}", error),
                    );
                    if ui.button("Retry").clicked() {
                        self.refdata_error = None;
                        self.spawn_reference_fetch();
                    }
                }
                None => {
                    ui.spinner();
                    ui.label("Loading reference data...");
                }
            }
            return;
        }

        // Selector mutates the tab, so it runs before the data borrows below
        let report = self.tabs[tab_index].report;
        let category = self.tabs[tab_index].category;
        if matches!(report, ReportType::IRatingHistory | ReportType::CpiHistory) {
            self.render_category_selector(ui);
        }

        // Shared borrows only from here on; the session data is not copied
        let tab = &self.tabs[tab_index];
        let FetchState::Loaded(data) = &tab.state else {
            return;
        };
        let sessions = &data.sessions;
        let Some(refdata) = &self.refdata else {
            return;
        };

        match report {
            ReportType::Summary => {
                Self::render_summary(ui, sessions, refdata, &tab.driver_name)
            }
            ReportType::IRatingHistory => {
                Self::render_history(ui, sessions, refdata, category, HistoryKind::Rating)
            }
            ReportType::CpiHistory => {
                Self::render_history(ui, sessions, refdata, category, HistoryKind::Cpi)
            }
            ReportType::TrackUsage => Self::render_track_usage(ui, sessions, refdata),
            ReportType::CarUsage => Self::render_car_usage(ui, sessions, refdata),
            ReportType::SessionList => Self::render_session_list(ui, sessions, refdata),
            ReportType::ActivityHistory => Self::render_activity(ui, sessions),
            ReportType::CarTrackMatrix => Self::render_matrix(ui, sessions, refdata),
        }
    }

    fn render_summary(
        ui: &mut egui::Ui,
        sessions: &[Session],
        refdata: &ReferenceData,
        driver_name: &str,
    ) {
        match stats::collect_driver_stats(sessions, refdata) {
            Ok(stats) => ui::stats_panel::show(ui, driver_name, &stats),
            Err(error) => ui::render_data_error(ui, &error),
        }
    }

    fn render_history(
        ui: &mut egui::Ui,
        sessions: &[Session],
        refdata: &ReferenceData,
        category: CategoryType,
        kind: HistoryKind,
    ) {
        let series = match kind {
            HistoryKind::Rating => history::rating_history(sessions, refdata, category),
            HistoryKind::Cpi => history::cpi_history(sessions, refdata, category),
        };
        let series = match series {
            Ok(series) => series,
            Err(error) => {
                ui::render_data_error(ui, &error);
                return;
            }
        };

        let style = LineStyle {
            horizontal_lanes: match kind {
                HistoryKind::Rating => Vec::new(),
                HistoryKind::Cpi => cpi_lanes(),
            },
            show_horizontal_grid: true,
            legend_labels: series.iter().map(|s| s.label.clone()).collect(),
            ..Default::default()
        };
        let points: Vec<Vec<DataPoint>> = series.into_iter().map(|s| s.points).collect();

        match build_line_scene(&points, &style, Utc::now()) {
            Some(scene) => ui::line_plot::show(ui, &scene, kind.plot_id()),
            None => ui::render_no_data(ui),
        }
    }

    fn render_car_usage(ui: &mut egui::Ui, sessions: &[Session], refdata: &ReferenceData) {
        match usage::collect_car_usage(sessions, refdata) {
            Ok(entries) => Self::render_usage_bars(ui, &entries),
            Err(error) => ui::render_data_error(ui, &error),
        }
    }

    fn render_track_usage(ui: &mut egui::Ui, sessions: &[Session], refdata: &ReferenceData) {
        match usage::collect_track_usage(sessions, refdata) {
            Ok(entries) => Self::render_usage_bars(ui, &entries),
            Err(error) => ui::render_data_error(ui, &error),
        }
    }

    fn render_usage_bars(ui: &mut egui::Ui, entries: &[usage::UsageEntry]) {
        let bars: Vec<BarEntry> = entries
            .iter()
            .map(|e| BarEntry {
                label: e.label.clone(),
                value: e.time as f64,
            })
            .collect();
        let format = BarFormat {
            value_format: units::format_duration_f64,
            ..Default::default()
        };
        match build_bar_scene(&bars, &format) {
            Some(scene) => ui::bar_chart::show(ui, &scene),
            None => ui::render_no_data(ui),
        }
    }

    fn render_session_list(ui: &mut egui::Ui, sessions: &[Session], refdata: &ReferenceData) {
        match table::session_rows(sessions, refdata) {
            Ok(rows) if rows.is_empty() => ui::render_no_data(ui),
            Ok(rows) => ui::session_list::show(ui, &rows),
            Err(error) => ui::render_data_error(ui, &error),
        }
    }

    fn render_activity(ui: &mut egui::Ui, sessions: &[Session]) {
        let scene = build_frequency_scene(
            sessions,
            |s| s.start_time,
            |s| s.time_in_session() as f64,
            units::format_duration_f64,
        );
        match scene {
            Some(scene) => ui::frequency_map::show(ui, &scene),
            None => ui::render_no_data(ui),
        }
    }

    fn render_matrix(ui: &mut egui::Ui, sessions: &[Session], refdata: &ReferenceData) {
        let usage = match matrix::build_usage_matrix(sessions, refdata) {
            Ok(usage) => usage,
            Err(error) => {
                ui::render_data_error(ui, &error);
                return;
            }
        };
        let scene = build_heat_scene(
            usage.matrix,
            usage.x_labels,
            usage.y_labels,
            units::format_duration_f64,
        );
        match scene {
            Some(scene) => ui::heatmap::show(ui, &scene),
            None => ui::render_no_data(ui),
        }
    }

    fn render_category_selector(&mut self, ui: &mut egui::Ui) {
        let tab = &mut self.tabs[self.active_tab];
        ui.horizontal(|ui| {
            ui.label("Category:");
            for &category in SELECTABLE_CATEGORIES {
                let selected = tab.category == category;
                if ui
                    .selectable_label(selected, category.nice_name())
                    .clicked()
                {
                    tab.category = category;
                }
            }
        });
        ui.add_space(4.0);
    }
}

#[derive(Copy, Clone)]
enum HistoryKind {
    Rating,
    Cpi,
}

impl HistoryKind {
    fn plot_id(&self) -> &'static str {
        match self {
            HistoryKind::Rating => "irating_history",
            HistoryKind::Cpi => "cpi_history",
        }
    }
}

impl eframe::App for IrStatsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        egui::TopBottomPanel::top("driver_tabs").show(ctx, |ui| {
            self.render_driver_bar(ui);
        });

        egui::TopBottomPanel::top("report_tabs").show(ctx, |ui| {
            self.render_report_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_active_report(ui);
                });
        });

        // Keep polling while fetches are in flight
        let loading = self.refdata.is_none()
            || self
                .tabs
                .iter()
                .any(|t| matches!(t.state, FetchState::Loading | FetchState::Idle));
        if loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
