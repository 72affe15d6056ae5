//! Application configuration
//! Loaded from a JSON file at startup; every field has a default.

use crate::charts::MAX_EXPORT_SIDE;
use crate::filter::{Boundary, LETTER_MIN_SIZE};
use crate::function::{Coefficients, InputError, SampleRange};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "SIGNAL_LAB_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "signal_lab.json";
/// Largest letter image side accepted from config.
pub const MAX_GRID_SIZE: usize = 256;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Grid size {0} is below the minimum of {min}", min = LETTER_MIN_SIZE)]
    GridTooSmall(usize),
    #[error("Grid size {0} exceeds the maximum of {max}", max = MAX_GRID_SIZE)]
    GridTooLarge(usize),
    #[error("Export sizes must be positive")]
    ZeroExportSize,
    #[error("{what} of {size} px exceeds the maximum of {max}", max = MAX_EXPORT_SIDE)]
    ExportTooLarge { what: &'static str, size: u64 },
    #[error("Default plot range: {0}")]
    PlotRange(#[from] InputError),
}

/// Median filter demo settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Side of the letter "O" image
    pub size: usize,
    pub boundary: Boundary<u8>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: crate::filter::DEFAULT_LETTER_SIZE,
            boundary: Boundary::Constant(0),
        }
    }
}

/// Values the plotter form starts with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub coefficients: Coefficients,
    pub range: SampleRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub chart_width: u32,
    pub chart_height: u32,
    /// Pixels per grid cell in exported PNGs
    pub cell_px: u32,
    pub open_after_export: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            chart_width: 1200,
            chart_height: 800,
            cell_px: 20,
            open_after_export: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridSettings,
    pub plot: PlotSettings,
    pub export: ExportSettings,
}

impl AppConfig {
    /// Config path: `$SIGNAL_LAB_CONFIG` if set, else `signal_lab.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            warn!("Config {} not found, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                error!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.size < LETTER_MIN_SIZE {
            return Err(ConfigError::GridTooSmall(self.grid.size));
        }
        if self.grid.size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid.size));
        }
        let export = &self.export;
        if export.chart_width == 0 || export.chart_height == 0 || export.cell_px == 0 {
            return Err(ConfigError::ZeroExportSize);
        }
        let sides = [
            ("Chart width", u64::from(export.chart_width)),
            ("Chart height", u64::from(export.chart_height)),
            ("Grid image side", self.grid.size as u64 * u64::from(export.cell_px)),
        ];
        for (what, size) in sides {
            if size > u64::from(MAX_EXPORT_SIDE) {
                return Err(ConfigError::ExportTooLarge { what, size });
            }
        }
        self.plot.coefficients.validate()?;
        self.plot.range.validate()?;
        Ok(())
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
