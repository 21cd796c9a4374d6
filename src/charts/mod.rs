//! Charts module - renderer-agnostic chart specs and the two sinks

pub mod plotter;
mod renderer;
mod spec;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use spec::{ChartSpec, Rgb, SeriesKind, SeriesSpec, SeriesStyle};
