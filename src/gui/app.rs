//! Macrodash Main Application
//! Main window wiring the control panel, background dashboard loads and the
//! chart viewer together.

use crate::charts::{ChartSpec, StaticChartRenderer};
use crate::config::DataSources;
use crate::dashboards::{DashboardKind, DashboardView};
use crate::data::DataFetcher;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Dashboard load result from a background thread.
///
/// Tagged with the generation that started it: a completed load older than
/// the current generation is discarded, so an abandoned load can never
/// replace a newer result with older data.
struct LoadResult {
    generation: u64,
    kind: DashboardKind,
    outcome: Result<DashboardView, String>,
}

/// Main application window.
pub struct MacrodashApp {
    sources: DataSources,
    control_panel: ControlPanel,
    view: Option<DashboardView>,
    load_rx: Option<Receiver<LoadResult>>,
    generation: u64,
}

impl MacrodashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let sources = DataSources::from_env();
        let mut app = Self {
            control_panel: ControlPanel::new(sources.base_url().to_string()),
            sources,
            view: None,
            load_rx: None,
            generation: 0,
        };
        app.start_load(DashboardKind::Indicators);
        app
    }

    /// Kick off a background load for one dashboard.
    fn start_load(&mut self, kind: DashboardKind) {
        self.generation += 1;
        let generation = self.generation;

        // Discard the previous artifact before any new output is shown.
        self.view = None;
        self.control_panel.is_loading = true;
        self.control_panel.export_enabled = false;
        self.control_panel
            .set_status(&format!("Loading {}...", kind.title()));

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let sources = self.sources.clone();

        thread::spawn(move || {
            let fetcher = DataFetcher::new();
            let outcome = kind.load(&fetcher, &sources).map_err(|e| e.to_string());
            let _ = tx.send(LoadResult {
                generation,
                kind,
                outcome,
            });
        });
    }

    /// Check for background load results.
    fn check_load_results(&mut self) {
        // Take the receiver temporarily to avoid borrow issues
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                if result.generation != self.generation {
                    // Stale load; last completed result wins.
                    continue;
                }

                match result.outcome {
                    Ok(view) => {
                        self.control_panel.export_enabled =
                            !matches!(view.kind(), DashboardKind::Timeline);
                        self.view = Some(view);
                        self.control_panel
                            .set_status(&format!("Loaded {}", result.kind.title()));
                    }
                    Err(error) => {
                        self.view = None;
                        self.control_panel.set_status(&format!("Error: {}", error));
                    }
                }
                self.control_panel.is_loading = false;
                should_keep_receiver = false;
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// The chart offered for export, if the current view has one.
    fn export_chart(&self) -> Option<&ChartSpec> {
        match self.view.as_ref()? {
            DashboardView::Indicators(dash) => Some(&dash.chart),
            DashboardView::Trade(dash) => Some(&dash.chart),
            DashboardView::Investment(dash) => Some(&dash.chart),
            DashboardView::Retail(dash) => Some(&dash.chart),
            DashboardView::Timeline(_) => None,
        }
    }

    fn handle_export_png(&mut self) {
        let Some(chart) = self.export_chart() else {
            self.control_panel.set_status("Nothing to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("macrodash_chart.png")
            .save_file()
        else {
            return; // User cancelled
        };

        match StaticChartRenderer::render_to_png(chart, &path, 1400, 900) {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Exported chart to {}", path.display()));
                let _ = open::that(&path);
            }
            Err(e) => {
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn handle_export_json(&mut self) {
        let Some(chart) = self.export_chart() else {
            self.control_panel.set_status("Nothing to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("macrodash_series.json")
            .save_file()
        else {
            return;
        };

        let result = serde_json::to_string_pretty(chart)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));

        match result {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Exported series to {}", path.display()));
            }
            Err(e) => {
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for MacrodashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.control_panel.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(240.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::SelectDashboard(kind) => self.start_load(kind),
                        ControlPanelAction::Reload => {
                            let kind = self.control_panel.selected;
                            self.start_load(kind);
                        }
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::ExportJson => self.handle_export_json(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartViewer::show(ui, self.view.as_mut());
        });
    }
}
