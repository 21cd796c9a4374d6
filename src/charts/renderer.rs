//! Static Chart Renderer
//! Renders a ChartSpec to a PNG file with plotters, mirroring what the
//! interactive viewer shows (gap-split lines, grouped bars, legend).

use crate::charts::{ChartSpec, Rgb, SeriesKind};
use crate::charts::plotter::segments;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart rendering failed: {0}")]
    Draw(String),
    #[error("Chart has no visible data")]
    Empty,
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart to `path` as a PNG of the given size.
    pub fn render_to_png(
        spec: &ChartSpec,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let (y_min, y_max) = Self::y_bounds(spec).ok_or(RenderError::Empty)?;
        let x_max = spec.axis_labels.len().max(1) as f64 - 0.5;

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 24))
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 36)
            .build_cartesian_2d(-0.5..x_max, y_min..y_max)
            .map_err(draw_err)?;

        let labels = spec.axis_labels.clone();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc(&spec.y_label)
            .x_labels(labels.len().min(13))
            .x_label_formatter(&move |v| {
                let idx = v.round();
                if idx < 0.0 || (v - idx).abs() > 1e-6 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .label_style(("sans-serif", 13))
            .draw()
            .map_err(draw_err)?;

        let bar_count = spec
            .series
            .iter()
            .enumerate()
            .filter(|(i, s)| s.style.kind == SeriesKind::Bar && spec.is_visible(*i))
            .count()
            .max(1);
        let bar_width = 0.8 / bar_count as f64;
        let mut bar_slot = 0usize;

        for (i, series) in spec.series.iter().enumerate() {
            if !spec.is_visible(i) {
                continue;
            }
            let color = rgb(series.style.color);

            match series.style.kind {
                SeriesKind::Bar => {
                    let offset =
                        (bar_slot as f64 - (bar_count as f64 - 1.0) / 2.0) * bar_width;
                    bar_slot += 1;
                    let base = y_min.max(0.0).min(y_max);
                    chart
                        .draw_series(series.values.iter().enumerate().filter_map(|(t, v)| {
                            v.map(|v| {
                                let x = t as f64 + offset;
                                Rectangle::new(
                                    [(x - bar_width * 0.45, base), (x + bar_width * 0.45, v)],
                                    color.filled(),
                                )
                            })
                        }))
                        .map_err(draw_err)?
                        .label(&series.name)
                        .legend(move |(x, y)| {
                            Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                        });
                }
                SeriesKind::Line => {
                    let runs = segments(&series.values);
                    for (run_idx, run) in runs.iter().enumerate() {
                        let points = run.iter().map(|p| (p[0], p[1]));
                        let drawn = if series.style.dashed {
                            chart
                                .draw_series(DashedLineSeries::new(
                                    points,
                                    6,
                                    4,
                                    color.stroke_width(2),
                                ))
                                .map_err(draw_err)?
                        } else {
                            chart
                                .draw_series(LineSeries::new(points, color.stroke_width(2)))
                                .map_err(draw_err)?
                        };
                        // One legend entry per series, not per gap segment.
                        if run_idx == 0 {
                            drawn.label(&series.name).legend(move |(x, y)| {
                                PathElement::new(vec![(x, y), (x + 12, y)], color.stroke_width(2))
                            });
                        }
                    }
                }
            }
        }

        chart
            .configure_series_labels()
            .border_style(RGBColor(200, 200, 200))
            .background_style(WHITE.mix(0.85))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }

    /// Y range over visible, present values with a 10% pad; bars anchor the
    /// range to zero.
    fn y_bounds(spec: &ChartSpec) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any_bar = false;
        for (i, series) in spec.series.iter().enumerate() {
            if !spec.is_visible(i) {
                continue;
            }
            if series.style.kind == SeriesKind::Bar {
                any_bar = true;
            }
            for v in series.values.iter().flatten() {
                min = min.min(*v);
                max = max.max(*v);
            }
        }
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        if any_bar {
            min = min.min(0.0);
        }
        if (max - min).abs() < f64::EPSILON {
            max = min + 1.0;
        }
        let pad = (max - min) * 0.1;
        Some((min - pad, max + pad))
    }
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::SeriesStyle;

    #[test]
    fn y_bounds_span_visible_values_and_anchor_bars_at_zero() {
        let mut spec = ChartSpec::new("t", vec!["a".into(), "b".into()]);
        spec.push_series(
            "bars",
            vec![Some(5.0), Some(9.0)],
            SeriesStyle::bar(Rgb(0, 0, 0)),
        );
        let (lo, hi) = StaticChartRenderer::y_bounds(&spec).unwrap();
        assert!(lo <= 0.0);
        assert!(hi > 9.0);
    }

    #[test]
    fn y_bounds_missing_for_all_gap_chart() {
        let mut spec = ChartSpec::new("t", vec!["a".into()]);
        spec.push_series("line", vec![None], SeriesStyle::line(Rgb(0, 0, 0)));
        assert!(StaticChartRenderer::y_bounds(&spec).is_none());
    }
}
