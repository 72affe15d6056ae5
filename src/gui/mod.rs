//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod grid_view;

pub use app::SignalLabApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction, StatusLevel, StatusLine};
pub use grid_view::{GridViewAction, PixelGridView};
