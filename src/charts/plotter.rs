//! Chart Plotter Module
//! Interactive function chart using egui_plot.

use crate::function::SamplePoint;
use egui::Color32;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, Points, VLine};

/// Curve colour
pub const LINE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
/// Zero axes
pub const AXIS_COLOR: Color32 = Color32::from_rgb(127, 140, 141); // Grey

/// Above this many samples the markers are hidden and only the line is drawn.
const MAX_MARKERS: usize = 200;

pub const FUNCTION_TITLE: &str = "y(x) = a₁·sin(b₁·x) + a₂·sin(b₂·x) + a₃·sin(b₃·x)";

/// Draws the sampled function with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw y(x) as a line with markers, plus the x and y zero axes.
    pub fn draw_function_chart(ui: &mut egui::Ui, points: &[SamplePoint], height: f32) {
        Plot::new("function_chart")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("x")
            .y_axis_label("y(x)")
            .x_axis_formatter(|mark, _range| format!("{:.2}", mark.value))
            .y_axis_formatter(|mark, _range| format!("{:.2}", mark.value))
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.hline(HLine::new(0.0).color(AXIS_COLOR).width(1.0));
                plot_ui.vline(VLine::new(0.0).color(AXIS_COLOR).width(1.0));

                if points.is_empty() {
                    return;
                }

                let series: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(series.iter().copied()))
                        .color(LINE_COLOR)
                        .width(2.0)
                        .name("y(x)"),
                );

                if series.len() <= MAX_MARKERS {
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(series.iter().copied()))
                            .radius(2.5)
                            .color(LINE_COLOR.gamma_multiply(0.8)),
                    );
                }
            });
    }
}
