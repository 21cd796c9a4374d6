//! Macrodash - Economic Dashboard Viewer
//!
//! Fetches published CSV datasets, derives comparison metrics and renders
//! them as interactive charts with PNG/JSON export.

mod charts;
mod config;
mod dashboards;
mod data;
mod gui;
mod series;

use gui::MacrodashApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("Macrodash - Economic Dashboard Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Macrodash",
        options,
        Box::new(|cc| Ok(Box::new(MacrodashApp::new(cc)))),
    )
}
