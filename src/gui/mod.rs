//! GUI module containing the application shell and its widgets.

mod app;
mod chart_viewer;
mod control_panel;

pub use app::MacrodashApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
