//! Signal Lab Main Application
//! Main window with the function plotter and the median filter demo as tabs.

use crate::charts::StaticChartRenderer;
use crate::config::AppConfig;
use crate::filter::FilterSession;
use crate::function::{evaluate, InputError, PlotInputs};
use crate::gui::{
    ChartViewer, ControlPanel, ControlPanelAction, GridViewAction, PixelGridView, StatusLevel,
};
use anyhow::{Context, Result};
use egui::SidePanel;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Plotter,
    MedianFilter,
}

/// Main application window.
pub struct SignalLabApp {
    config: AppConfig,
    config_path: PathBuf,
    tab: Tab,

    // Plotter tab
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Median filter tab
    session: FilterSession,
    grid_view: PixelGridView,
}

impl SignalLabApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        config_path: PathBuf,
        session: FilterSession,
    ) -> Self {
        Self {
            control_panel: ControlPanel::new(&config.plot.coefficients, &config.plot.range),
            chart_viewer: ChartViewer::new(),
            config,
            config_path,
            tab: Tab::Plotter,
            session,
            grid_view: PixelGridView::new(),
        }
    }

    /// Parse the form, sample the function and refresh table and chart.
    fn handle_calculate(&mut self) {
        let result = self
            .control_panel
            .inputs
            .parse()
            .and_then(|(coefficients, range)| evaluate(&coefficients, &range));

        match result {
            Ok(points) => {
                let count = points.len();
                self.chart_viewer.set_points(points);
                self.control_panel.export_enabled = true;
                self.control_panel
                    .status
                    .set(StatusLevel::Success, format!("Complete! {} points", count));
                info!("Calculated {} samples", count);
            }
            Err(e) => {
                self.control_panel
                    .status
                    .set(StatusLevel::Error, format!("Error: {}", e));
                error!("Calculation failed: {}", e);
            }
        }
    }

    fn handle_clear(&mut self) {
        self.control_panel.inputs.clear();
        self.chart_viewer.clear();
        self.control_panel.export_enabled = false;
        self.control_panel.status.set(StatusLevel::Info, "Cleared");
    }

    fn handle_reset_defaults(&mut self) {
        self.control_panel.inputs =
            PlotInputs::from_values(&self.config.plot.coefficients, &self.config.plot.range);
        self.control_panel
            .status
            .set(StatusLevel::Info, "Defaults restored");
    }

    fn handle_export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("samples.csv")
            .save_file()
        else {
            return; // User cancelled
        };

        let result = self
            .chart_viewer
            .table
            .write_csv(&path)
            .with_context(|| format!("writing table to {}", path.display()));
        self.finish_plot_export(result.map(|_| path), "Table");
    }

    fn handle_export_chart(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .add_filter("PNG", &["png"])
            .set_file_name("plot.svg")
            .save_file()
        else {
            return;
        };

        let export = &self.config.export;
        let result = StaticChartRenderer::render_function_chart(
            self.chart_viewer.table.points(),
            &path,
            export.chart_width,
            export.chart_height,
        )
        .with_context(|| format!("rendering chart to {}", path.display()));
        self.finish_plot_export(result.map(|_| path), "Chart");
    }

    fn finish_plot_export(&mut self, result: Result<PathBuf>, what: &str) {
        match result {
            Ok(path) => {
                info!("{} exported to {}", what, path.display());
                self.control_panel.status.set(
                    StatusLevel::Success,
                    format!("{} exported: {}", what, path.display()),
                );
                self.open_if_enabled(&path);
            }
            Err(e) => {
                error!("{:#}", e);
                self.control_panel
                    .status
                    .set(StatusLevel::Error, format!("Error: {:#}", e));
            }
        }
    }

    /// Store the current form values and border policy as the new defaults.
    fn handle_save_settings(&mut self) {
        let plot_error = match self.control_panel.inputs.parse() {
            Ok((coefficients, range)) => {
                self.config.plot.coefficients = coefficients;
                self.config.plot.range = range;
                None
            }
            Err(e) => {
                warn!("Plot defaults not updated: {}", e);
                Some(e)
            }
        };
        self.config.grid.boundary = self.session.boundary();

        match self.config.save(&self.config_path) {
            Ok(()) => {
                info!("Settings saved to {}", self.config_path.display());
                let (level, text) = save_status(&self.config_path, plot_error.as_ref());
                self.control_panel.status.set(level, text);
            }
            Err(e) => {
                error!("Saving settings failed: {}", e);
                self.control_panel
                    .status
                    .set(StatusLevel::Error, format!("Error: {}", e));
            }
        }
    }

    fn handle_grid_action(&mut self, action: GridViewAction) {
        match action {
            GridViewAction::Apply => {
                let changed = self.session.apply();
                info!(
                    "Median filter pass {} changed {} cells",
                    self.session.passes(),
                    changed
                );
                self.grid_view.status.set(
                    StatusLevel::Success,
                    format!("Pass {} applied", self.session.passes()),
                );
            }
            GridViewAction::Reset => {
                self.session.reset();
                self.grid_view
                    .status
                    .set(StatusLevel::Info, "Original image restored");
            }
            GridViewAction::BoundaryChanged(boundary) => {
                self.session.set_boundary(boundary);
                info!("Border policy set to {:?}", boundary);
                self.grid_view.status.set(
                    StatusLevel::Info,
                    "Border policy applies from the next pass",
                );
            }
            GridViewAction::ExportPng => self.handle_export_grid(),
            GridViewAction::None => {}
        }
    }

    fn handle_export_grid(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("letter_o.png")
            .save_file()
        else {
            return;
        };

        let result = StaticChartRenderer::save_grid_png(
            self.session.current(),
            &path,
            self.config.export.cell_px,
        )
        .with_context(|| format!("writing image to {}", path.display()));

        match result {
            Ok(()) => {
                info!("Grid exported to {}", path.display());
                self.grid_view.status.set(
                    StatusLevel::Success,
                    format!("Image exported: {}", path.display()),
                );
                self.open_if_enabled(&path);
            }
            Err(e) => {
                error!("{:#}", e);
                self.grid_view
                    .status
                    .set(StatusLevel::Error, format!("Error: {:#}", e));
            }
        }
    }

    fn open_if_enabled(&self, path: &Path) {
        if self.config.export.open_after_export {
            if let Err(e) = open::that(path) {
                warn!("Could not open {}: {}", path.display(), e);
            }
        }
    }
}

/// Status shown after a successful save. A form that failed to parse keeps the
/// previous plot defaults, and the message says so.
fn save_status(path: &Path, plot_error: Option<&InputError>) -> (StatusLevel, String) {
    match plot_error {
        None => (
            StatusLevel::Success,
            format!("Settings saved to {}", path.display()),
        ),
        Some(e) => (
            StatusLevel::Error,
            format!(
                "Only border policy saved to {}; plot defaults kept: {}",
                path.display(),
                e
            ),
        ),
    }
}

impl eframe::App for SignalLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Plotter, "📈 Function Plotter");
                ui.selectable_value(&mut self.tab, Tab::MedianFilter, "▦ Median Filter");
            });
        });

        match self.tab {
            Tab::Plotter => {
                // Left panel - Control Panel
                SidePanel::left("control_panel")
                    .min_width(280.0)
                    .max_width(330.0)
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical().show(ui, |ui| {
                            let action = self.control_panel.show(ui);

                            match action {
                                ControlPanelAction::Calculate => self.handle_calculate(),
                                ControlPanelAction::Clear => self.handle_clear(),
                                ControlPanelAction::ResetDefaults => self.handle_reset_defaults(),
                                ControlPanelAction::ExportCsv => self.handle_export_csv(),
                                ControlPanelAction::ExportChart => self.handle_export_chart(),
                                ControlPanelAction::SaveSettings => self.handle_save_settings(),
                                ControlPanelAction::None => {}
                            }
                        });
                    });

                // Central panel - Chart Viewer
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.chart_viewer.show(ui);
                });
            }
            Tab::MedianFilter => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::both().show(ui, |ui| {
                        let action = self.grid_view.show(ui, &self.session);
                        self.handle_grid_action(action);
                    });
                });
            }
        }
    }
}
