//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, AXIS_COLOR, FUNCTION_TITLE, LINE_COLOR};
pub use renderer::{ChartFormat, ExportError, StaticChartRenderer, MAX_EXPORT_SIDE};
