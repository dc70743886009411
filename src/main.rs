//! irstats - a desktop dashboard for iRacing driver statistics

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use irstats::app::IrStatsApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Any driver names on the command line open as extra tabs
    let drivers: Vec<String> = std::env::args().skip(1).collect();

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("irstats - Driver Statistics")
            .with_app_id("irstats"),
        ..Default::default()
    };

    eframe::run_native(
        "irstats",
        native_options,
        Box::new(|cc| Ok(Box::new(IrStatsApp::new(cc, drivers)))),
    )
}
