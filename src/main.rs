//! Signal Lab - Function Plotter & Median Filter Demo
//!
//! A Rust application that samples and charts a sum of three sines, and
//! demonstrates a 3x3 median filter on a pixel-drawn letter "O".

use anyhow::{anyhow, Context};
use eframe::egui;
use log::info;
use signal_lab::config::AppConfig;
use signal_lab::filter::{letter_o, FilterSession, MedianFilter};
use signal_lab::gui::SignalLabApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = AppConfig::default_path();
    let config = AppConfig::load_or_default(&config_path);

    let image = letter_o(config.grid.size).context("building the demo image")?;
    let session = FilterSession::new(image, MedianFilter::new(config.grid.boundary));

    info!(
        "Starting Signal Lab ({}x{} grid, border {:?})",
        config.grid.size, config.grid.size, config.grid.boundary
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Signal Lab"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Signal Lab",
        options,
        Box::new(move |cc| {
            Ok(Box::new(SignalLabApp::new(
                cc,
                config,
                config_path,
                session,
            )))
        }),
    )
    .map_err(|e| anyhow!("{e}"))
}
