//! Chart Plotter Module
//! Draws a ChartSpec interactively using egui_plot.

use crate::charts::{ChartSpec, Rgb, SeriesKind};
use egui::Color32;
use egui_plot::{Bar, BarChart, Line, LineStyle, Plot, PlotPoints};

// Accent colors shared by the dashboards (visual hints are chosen by the
// dashboard builders, not by the pipeline).
pub const PRIMARY: Rgb = Rgb(22, 110, 233);
pub const AMBER: Rgb = Rgb(245, 158, 11);
pub const SKY: Rgb = Rgb(14, 165, 233);
pub const VIOLET: Rgb = Rgb(139, 92, 246);
pub const SLATE: Rgb = Rgb(148, 163, 184);
pub const EMERALD: Rgb = Rgb(16, 185, 129);
pub const ROSE: Rgb = Rgb(251, 113, 133);
pub const RED: Rgb = Rgb(239, 68, 68);

/// Split a slotted series into contiguous runs of present values, so a
/// missing slot renders as a gap instead of an interpolated line.
pub fn segments(values: &[Option<f64>]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (t, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push([t as f64, *v]),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Draws ChartSpecs with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color32(rgb: Rgb) -> Color32 {
        Color32::from_rgb(rgb.0, rgb.1, rgb.2)
    }

    /// Draw the chart; hidden series (legend toggles) are skipped.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
        let labels = spec.axis_labels.clone();
        let bar_series: Vec<usize> = spec
            .series
            .iter()
            .enumerate()
            .filter(|(i, s)| s.style.kind == SeriesKind::Bar && spec.is_visible(*i))
            .map(|(i, _)| i)
            .collect();
        let bar_count = bar_series.len().max(1);
        let bar_width = 0.8 / bar_count as f64;

        Plot::new(format!("chart_{}", spec.title))
            .height(height)
            .allow_scroll(false)
            .y_axis_label(spec.y_label.clone())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for (slot, &series_idx) in bar_series.iter().enumerate() {
                    let series = &spec.series[series_idx];
                    let color = Self::color32(series.style.color);
                    let offset = (slot as f64 - (bar_count as f64 - 1.0) / 2.0) * bar_width;
                    let bars: Vec<Bar> = series
                        .values
                        .iter()
                        .enumerate()
                        .filter_map(|(t, v)| {
                            v.map(|v| Bar::new(t as f64 + offset, v).width(bar_width * 0.9))
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).color(color).name(&series.name));
                }

                for (i, series) in spec.series.iter().enumerate() {
                    if series.style.kind != SeriesKind::Line || !spec.is_visible(i) {
                        continue;
                    }
                    let color = Self::color32(series.style.color);
                    for run in segments(&series.values) {
                        let points = PlotPoints::from_iter(run.iter().copied());
                        let mut line = Line::new(points)
                            .color(color)
                            .width(2.0)
                            .name(&series.name);
                        if series.style.dashed {
                            line = line.style(LineStyle::Dashed { length: 8.0 });
                        }
                        if series.style.fill {
                            line = line.fill(0.0);
                        }
                        plot_ui.line(line);
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_at_gaps() {
        let values = vec![Some(1.0), Some(2.0), None, Some(4.0)];
        let runs = segments(&values);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![[0.0, 1.0], [1.0, 2.0]]);
        assert_eq!(runs[1], vec![[3.0, 4.0]]);
    }

    #[test]
    fn all_missing_yields_no_segments() {
        let values = vec![None, None];
        assert!(segments(&values).is_empty());
    }

    #[test]
    fn trailing_run_is_kept() {
        let values = vec![None, Some(5.0), Some(6.0)];
        let runs = segments(&values);
        assert_eq!(runs, vec![vec![[1.0, 5.0], [2.0, 6.0]]]);
    }
}
