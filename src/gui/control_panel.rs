//! Control Panel Widget
//! Left side panel: dashboard picker, reload and export controls, status.

use crate::dashboards::DashboardKind;
use egui::{Color32, RichText};

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectDashboard(DashboardKind),
    Reload,
    ExportPng,
    ExportJson,
}

/// Left side control panel.
pub struct ControlPanel {
    pub selected: DashboardKind,
    pub status: String,
    pub is_loading: bool,
    pub export_enabled: bool,
    base_url: String,
}

impl ControlPanel {
    pub fn new(base_url: String) -> Self {
        Self {
            selected: DashboardKind::Indicators,
            status: "Ready".to_string(),
            is_loading: false,
            export_enabled: false,
            base_url,
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Macrodash")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Economic Dashboard Viewer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Dashboard Section =====
        ui.label(RichText::new("📁 Dashboards").size(14.0).strong());
        ui.add_space(5.0);

        for kind in DashboardKind::ALL {
            if ui
                .selectable_label(self.selected == kind, kind.title())
                .clicked()
                && self.selected != kind
            {
                self.selected = kind;
                action = ControlPanelAction::SelectDashboard(kind);
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("🌐 Data Source").size(14.0).strong());
        ui.add_space(5.0);
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&self.base_url).size(11.0).color(Color32::GRAY));
            });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(!self.is_loading, |ui| {
                let button = egui::Button::new(RichText::new("⟳ Reload").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Reload;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.label(RichText::new("📄 Export").size(14.0).strong());
        ui.add_space(5.0);
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let png_button = egui::Button::new(RichText::new("🖼 Chart PNG").size(13.0))
                    .min_size(egui::vec2(150.0, 28.0));
                if ui.add(png_button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
                ui.add_space(5.0);
                let json_button = egui::Button::new(RichText::new("{} Series JSON").size(13.0))
                    .min_size(egui::vec2(150.0, 28.0));
                if ui.add(json_button).clicked() {
                    action = ControlPanelAction::ExportJson;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.horizontal(|ui| {
            if self.is_loading {
                ui.spinner();
            }
            let status_color = if self.status.contains("Error") {
                Color32::from_rgb(220, 53, 69)
            } else if self.status.contains("Loaded") || self.status.contains("Exported") {
                Color32::from_rgb(40, 167, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        });

        action
    }
}
