//! Chart Viewer Widget
//! Central panel: per-dashboard selectors, legend toggles, charts, KPI row
//! and the timeline card strip.

use crate::charts::{ChartPlotter, ChartSpec};
use crate::dashboards::{
    indicators::IndicatorMetric, retail::RetailView, timeline::TimelineEvent, trade::Sector,
    DashboardView, Kpi,
};
use egui::{Color32, ComboBox, RichText, ScrollArea};

const CHART_HEIGHT: f32 = 420.0;
const CARD_WIDTH: f32 = 280.0;

/// Draws the currently loaded dashboard.
pub struct ChartViewer;

impl ChartViewer {
    pub fn show(ui: &mut egui::Ui, view: Option<&mut DashboardView>) {
        let Some(view) = view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match view {
                DashboardView::Indicators(dash) => {
                    let mut metric = dash.metric;
                    ui.horizontal(|ui| {
                        ui.label("Indicator:");
                        ComboBox::from_id_salt("indicator_metric")
                            .selected_text(metric.label())
                            .show_ui(ui, |ui| {
                                for option in IndicatorMetric::ALL {
                                    ui.selectable_value(&mut metric, option, option.label());
                                }
                            });
                    });
                    dash.set_metric(metric);

                    Self::legend_row(ui, "indicators", &mut dash.chart);
                    Self::chart_card(ui, &dash.chart);
                }
                DashboardView::Trade(dash) => {
                    let mut sector = dash.sector;
                    ui.horizontal(|ui| {
                        ui.label("Sector:");
                        ComboBox::from_id_salt("trade_sector")
                            .selected_text(sector.label())
                            .show_ui(ui, |ui| {
                                for option in Sector::ALL {
                                    ui.selectable_value(&mut sector, option, option.label());
                                }
                            });
                    });
                    dash.set_sector(sector);

                    Self::chart_card(ui, &dash.chart);
                    ui.add_space(8.0);
                    ui.label(RichText::new(dash.conclusion()).size(12.0).italics());
                }
                DashboardView::Investment(dash) => {
                    if let Some(badge) = &dash.badge {
                        let (color, sign) = if badge.percent >= 0.0 {
                            (Color32::from_rgb(40, 167, 69), "+")
                        } else {
                            (Color32::from_rgb(220, 53, 69), "")
                        };
                        ui.label(
                            RichText::new(format!(
                                "FDI {}: {}{:.1}%",
                                badge.year, sign, badge.percent
                            ))
                            .size(13.0)
                            .strong()
                            .color(color),
                        );
                        ui.add_space(5.0);
                    }
                    Self::chart_card(ui, &dash.chart);
                }
                DashboardView::Retail(dash) => {
                    Self::kpi_row(ui, &dash.kpis);
                    ui.add_space(10.0);

                    let mut retail_view = dash.view;
                    ui.horizontal(|ui| {
                        ui.label("View:");
                        ComboBox::from_id_salt("retail_view")
                            .selected_text(retail_view.label())
                            .show_ui(ui, |ui| {
                                for option in RetailView::ALL {
                                    ui.selectable_value(&mut retail_view, option, option.label());
                                }
                            });
                    });
                    dash.set_view(retail_view);

                    Self::legend_row(ui, "retail", &mut dash.chart);
                    Self::chart_card(ui, &dash.chart);
                    ui.add_space(12.0);
                    Self::chart_card(ui, &dash.efficiency);
                }
                DashboardView::Timeline(dash) => {
                    Self::timeline_strip(ui, &dash.events);
                }
            });
    }

    /// Clickable legend; toggling dims the button and hides the series.
    /// Buttons are keyed by the series' stable index.
    fn legend_row(ui: &mut egui::Ui, id: &str, chart: &mut ChartSpec) {
        ui.horizontal_wrapped(|ui| {
            for index in 0..chart.series.len() {
                let visible = chart.is_visible(index);
                let color = ChartPlotter::color32(chart.series[index].style.color);
                let (swatch, text) = if visible {
                    (color, ui.visuals().text_color())
                } else {
                    (color.gamma_multiply(0.25), Color32::GRAY)
                };

                let name = chart.series[index].name.clone();
                ui.push_id((id, index), |ui| {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
                    ui.painter().rect_filled(rect, 3.0, swatch);
                    let label =
                        ui.add(egui::Label::new(RichText::new(name).size(12.0).color(text))
                            .sense(egui::Sense::click()));
                    if response.clicked() || label.clicked() {
                        chart.toggle(index);
                    }
                });
                ui.add_space(10.0);
            }
        });
        ui.add_space(6.0);
    }

    fn chart_card(ui: &mut egui::Ui, chart: &ChartSpec) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&chart.title).size(16.0).strong());
                ui.add_space(6.0);
                ChartPlotter::draw(ui, chart, CHART_HEIGHT);
            });
    }

    fn kpi_row(ui: &mut egui::Ui, kpis: &[Kpi]) {
        ui.horizontal(|ui| {
            for kpi in kpis {
                egui::Frame::none()
                    .rounding(8.0)
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&kpi.label).size(11.0).color(Color32::GRAY),
                            );
                            ui.label(RichText::new(&kpi.value).size(18.0).strong());
                        });
                    });
                ui.add_space(10.0);
            }
        });
    }

    /// Horizontally scrollable event cards; drag to scroll like the source
    /// timeline widget.
    fn timeline_strip(ui: &mut egui::Ui, events: &[TimelineEvent]) {
        if events.is_empty() {
            ui.label(RichText::new("No events loaded").color(Color32::GRAY));
            return;
        }

        ScrollArea::horizontal()
            .drag_to_scroll(true)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for event in events {
                        let accent = ChartPlotter::color32(event.accent());
                        egui::Frame::none()
                            .rounding(8.0)
                            .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
                            .fill(ui.visuals().widgets.noninteractive.bg_fill)
                            .inner_margin(12.0)
                            .show(ui, |ui| {
                                ui.set_width(CARD_WIDTH);
                                ui.vertical(|ui| {
                                    ui.horizontal(|ui| {
                                        let (rect, _) = ui.allocate_exact_size(
                                            egui::vec2(10.0, 10.0),
                                            egui::Sense::hover(),
                                        );
                                        ui.painter().circle_filled(rect.center(), 5.0, accent);
                                        let when = if event.date.is_empty() {
                                            event.year.clone()
                                        } else {
                                            format!("{} - {}", event.year, event.date)
                                        };
                                        ui.label(
                                            RichText::new(when)
                                                .size(11.0)
                                                .strong()
                                                .color(Color32::GRAY),
                                        );
                                    });
                                    ui.label(RichText::new(&event.title).size(14.0).strong());
                                    ui.label(RichText::new(&event.description).size(12.0));
                                    ui.add_space(4.0);
                                    ui.label(
                                        RichText::new(event.category.to_uppercase())
                                            .size(10.0)
                                            .color(accent),
                                    );
                                });
                            });
                        ui.add_space(12.0);
                    }
                });
            });
    }
}
