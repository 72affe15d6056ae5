//! Chart Viewer Widget
//! Central area of the plotter: interactive chart above the table of values.

use crate::charts::ChartPlotter;
use crate::data::SampleTable;
use crate::function::SamplePoint;
use egui::{RichText, ScrollArea};

const ROW_HEIGHT: f32 = 18.0;
const COLUMN_WIDTH: f32 = 140.0;
/// Share of the available height given to the chart
const CHART_FRACTION: f32 = 0.6;

/// Chart and value table for the latest calculation.
#[derive(Default)]
pub struct ChartViewer {
    pub table: SampleTable,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn set_points(&mut self, points: Vec<SamplePoint>) {
        self.table = SampleTable::new(points);
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.table.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        // Summary
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} points", self.table.len())).strong());
            if let Some((lo, hi)) = self.table.y_range() {
                ui.separator();
                ui.label(format!("min y = {:.4}", lo));
                ui.separator();
                ui.label(format!("max y = {:.4}", hi));
            }
        });
        ui.add_space(6.0);

        let chart_height = (ui.available_height() * CHART_FRACTION).max(200.0);
        ChartPlotter::draw_function_chart(ui, self.table.points(), chart_height);

        ui.add_space(8.0);
        ui.separator();
        self.draw_table(ui);
    }

    fn draw_table(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for header in ["x", "y(x)"] {
                ui.add_sized(
                    [COLUMN_WIDTH, ROW_HEIGHT],
                    egui::Label::new(RichText::new(header).strong()),
                );
            }
        });

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, ROW_HEIGHT, self.table.len(), |ui, row_range| {
                for row in row_range {
                    if let Some((x, y)) = self.table.display_row(row) {
                        ui.horizontal(|ui| {
                            ui.add_sized([COLUMN_WIDTH, ROW_HEIGHT], egui::Label::new(x));
                            ui.add_sized([COLUMN_WIDTH, ROW_HEIGHT], egui::Label::new(y));
                        });
                    }
                }
            });
    }
}
