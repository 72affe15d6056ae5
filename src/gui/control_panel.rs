//! Control Panel Widget
//! Left side panel with the plotter's coefficient and range inputs.

use crate::function::{Coefficients, PlotInputs, SampleRange};
use egui::{Color32, RichText};

const LABEL_WIDTH: f32 = 60.0;
const FIELD_WIDTH: f32 = 90.0;

/// Colour class of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// One-line status shown under a panel's controls.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub level: StatusLevel,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: "Ready".to_string(),
            level: StatusLevel::Info,
        }
    }
}

impl StatusLine {
    pub fn set(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.level = level;
        self.text = text.into();
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let color = match self.level {
            StatusLevel::Error => Color32::from_rgb(220, 53, 69),
            StatusLevel::Success => Color32::from_rgb(40, 167, 69),
            StatusLevel::Info => Color32::GRAY,
        };
        ui.label(RichText::new(&self.text).size(11.0).color(color));
    }
}

/// Left side control panel for the function plotter.
pub struct ControlPanel {
    pub inputs: PlotInputs,
    pub status: StatusLine,
    pub export_enabled: bool,
}

impl ControlPanel {
    pub fn new(coefficients: &Coefficients, range: &SampleRange) -> Self {
        Self {
            inputs: PlotInputs::from_values(coefficients, range),
            status: StatusLine::default(),
            export_enabled: false,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 Function Plotter")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("y(x) = a₁·sin(b₁·x) + a₂·sin(b₂·x) + a₃·sin(b₃·x)")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Coefficients Section =====
        ui.label(RichText::new("⚙️ Coefficients").size(14.0).strong());
        ui.add_space(5.0);

        let inputs = &mut self.inputs;
        let terms = [
            ("Term 1", ("a₁", &mut inputs.a1), ("b₁", &mut inputs.b1)),
            ("Term 2", ("a₂", &mut inputs.a2), ("b₂", &mut inputs.b2)),
            ("Term 3", ("a₃", &mut inputs.a3), ("b₃", &mut inputs.b3)),
        ];
        for (title, (a_label, a), (b_label, b)) in terms {
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(title).size(12.0).strong());
                    Self::field(ui, a_label, a);
                    Self::field(ui, b_label, b);
                });
            ui.add_space(4.0);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Range Section =====
        ui.label(RichText::new("📏 Range").size(14.0).strong());
        ui.add_space(5.0);
        Self::field(ui, "x₀", &mut self.inputs.x0);
        Self::field(ui, "xₖ", &mut self.inputs.xk);
        Self::field(ui, "Δx", &mut self.inputs.dx);

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("▶ Calculate").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::Calculate;
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("🗑 Clear").clicked() {
                    action = ControlPanelAction::Clear;
                }
                if ui.button("↺ Defaults").clicked() {
                    action = ControlPanelAction::ResetDefaults;
                }
            });

            ui.add_space(8.0);
            ui.add_enabled_ui(self.export_enabled, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("📄 Export CSV").clicked() {
                        action = ControlPanelAction::ExportCsv;
                    }
                    if ui.button("🖼 Export chart").clicked() {
                        action = ControlPanelAction::ExportChart;
                    }
                });
            });

            ui.add_space(6.0);
            if ui.small_button("💾 Save settings").clicked() {
                action = ControlPanelAction::SaveSettings;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        self.status.show(ui);

        action
    }

    fn field(ui: &mut egui::Ui, label: &str, value: &mut String) {
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(label));
            ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH));
        });
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Calculate,
    Clear,
    ResetDefaults,
    ExportCsv,
    ExportChart,
    SaveSettings,
}
