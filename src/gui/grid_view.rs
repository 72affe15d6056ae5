//! Pixel Grid Widget
//! Draws the median filter demo image and its controls.

use crate::filter::{Boundary, FilterSession, Grid};
use crate::gui::StatusLine;
use egui::{Color32, ComboBox, RichText, Sense, Stroke};

const CELL_SIZE: f32 = 20.0;
const CELL_GAP: f32 = 1.0;
const BORDER_COLOR: Color32 = Color32::GRAY;

/// Border policies offered in the selector.
const BOUNDARY_CHOICES: [(Boundary<u8>, &str); 4] = [
    (Boundary::Constant(0), "Pad with 0 (off)"),
    (Boundary::Constant(1), "Pad with 1 (on)"),
    (Boundary::Nearest, "Clamp to edge"),
    (Boundary::Wrap, "Wrap around"),
];

fn boundary_label(boundary: Boundary<u8>) -> String {
    BOUNDARY_CHOICES
        .iter()
        .find(|(b, _)| *b == boundary)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("{:?}", boundary))
}

/// Median filter tab
#[derive(Default)]
pub struct PixelGridView {
    pub status: StatusLine,
}

impl PixelGridView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &FilterSession) -> GridViewAction {
        let mut action = GridViewAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("▦ Median Filter: Letter \"O\"")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.add_space(10.0);

            Self::draw_grid(ui, session.current());

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("▶ Apply median filter").size(14.0))
                    .clicked()
                {
                    action = GridViewAction::Apply;
                }
                if ui.button("↺ Reset to original").clicked() {
                    action = GridViewAction::Reset;
                }
                if ui.button("🖼 Export PNG").clicked() {
                    action = GridViewAction::ExportPng;
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Border:");
                let current = session.boundary();
                ComboBox::from_id_salt("boundary")
                    .width(160.0)
                    .selected_text(boundary_label(current))
                    .show_ui(ui, |ui| {
                        for (boundary, label) in BOUNDARY_CHOICES {
                            if ui.selectable_label(current == boundary, label).clicked()
                                && current != boundary
                            {
                                action = GridViewAction::BoundaryChanged(boundary);
                            }
                        }
                    });
            });

            ui.add_space(8.0);
            let mut summary = format!("Passes: {}", session.passes());
            if let Some(changed) = session.last_changed() {
                summary.push_str(&format!("  |  last pass changed {} cells", changed));
            }
            ui.label(summary);
            if session.passes() > 0 && session.is_converged() {
                ui.label(
                    RichText::new("Converged: further passes change nothing")
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            }

            ui.add_space(4.0);
            self.status.show(ui);
        });

        action
    }

    fn draw_grid(ui: &mut egui::Ui, grid: &Grid<u8>) {
        let pitch = CELL_SIZE + CELL_GAP;
        let size = egui::vec2(grid.cols() as f32 * pitch, grid.rows() as f32 * pitch);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.min;

        for (r, row) in grid.iter_rows().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let min = origin + egui::vec2(c as f32 * pitch, r as f32 * pitch);
                let rect = egui::Rect::from_min_size(min, egui::vec2(CELL_SIZE, CELL_SIZE));
                let fill = if value != 0 {
                    Color32::WHITE
                } else {
                    Color32::BLACK
                };
                painter.rect_filled(rect, 0.0, fill);
                painter.rect_stroke(rect, 0.0, Stroke::new(1.0, BORDER_COLOR));
            }
        }
    }
}

/// Actions triggered by the grid view
#[derive(Debug, Clone, PartialEq)]
pub enum GridViewAction {
    None,
    Apply,
    Reset,
    ExportPng,
    BoundaryChanged(Boundary<u8>),
}
