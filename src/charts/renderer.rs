//! Static Chart Renderer
//! Writes the function chart (plotters) and the pixel grid (image) to files.
//!
//! The chart backend follows the file extension: `.svg` produces vector output,
//! anything else a PNG bitmap.

use crate::charts::plotter::FUNCTION_TITLE;
use crate::filter::Grid;
use crate::function::{y_extent, SamplePoint};
use image::{GrayImage, Luma};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Nothing to export")]
    NoData,
    #[error("Export size must be positive")]
    ZeroSize,
    #[error("Export size {width}x{height} exceeds {max} pixels per side")]
    TooLarge { width: u64, height: u64, max: u32 },
}

// Colors
const LINE_COLOR: RGBColor = RGBColor(231, 76, 60);
const GRID_COLOR: RGBColor = RGBColor(204, 204, 204);

// Grid image pixel values
const PIXEL_ON: u8 = 255;
const PIXEL_OFF: u8 = 0;
const PIXEL_BORDER: u8 = 128;
/// Cells smaller than this are drawn without the grey cell border.
const MIN_BORDERED_CELL: u32 = 4;
/// Largest width or height of any exported image.
pub const MAX_EXPORT_SIDE: u32 = 16_384;

/// Output format chosen from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Svg,
    Png,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartFormat::Svg,
            _ => ChartFormat::Png,
        }
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the sampled function to `path` at `width` x `height` pixels.
    pub fn render_function_chart(
        points: &[SamplePoint],
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<ChartFormat, ExportError> {
        if points.is_empty() {
            return Err(ExportError::NoData);
        }
        if width == 0 || height == 0 {
            return Err(ExportError::ZeroSize);
        }
        check_side_limit(width.into(), height.into())?;

        let format = ChartFormat::from_path(path);
        let result = match format {
            ChartFormat::Svg => {
                let root = SVGBackend::new(path, (width, height)).into_drawing_area();
                Self::draw_function(&root, points).map_err(|e| e.to_string())
            }
            ChartFormat::Png => {
                let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
                Self::draw_function(&root, points).map_err(|e| e.to_string())
            }
        };

        result.map_err(ExportError::Render)?;
        Ok(format)
    }

    fn draw_function<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        points: &[SamplePoint],
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let ((x_min, x_max), (y_min, y_max)) = Self::chart_bounds(points);

        let mut chart = ChartBuilder::on(root)
            .caption(FUNCTION_TITLE, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("y(x)")
            .x_label_formatter(&|v| format!("{:.2}", v))
            .y_label_formatter(&|v| format!("{:.2}", v))
            .light_line_style(&GRID_COLOR)
            .draw()?;

        // Zero axes, when visible
        if y_min <= 0.0 && y_max >= 0.0 {
            chart.draw_series(LineSeries::new(vec![(x_min, 0.0), (x_max, 0.0)], &BLACK))?;
        }
        if x_min <= 0.0 && x_max >= 0.0 {
            chart.draw_series(LineSeries::new(vec![(0.0, y_min), (0.0, y_max)], &BLACK))?;
        }

        chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.x, p.y)),
            LINE_COLOR.stroke_width(2),
        ))?;

        root.present()?;
        Ok(())
    }

    /// ((x_min, x_max), (y_min, y_max)) with 10% vertical padding.
    /// A flat curve gets a unit band so the axis range is never empty.
    pub fn chart_bounds(points: &[SamplePoint]) -> ((f64, f64), (f64, f64)) {
        let x_min = points.first().map(|p| p.x).unwrap_or(0.0);
        let x_max = points.last().map(|p| p.x).unwrap_or(1.0);
        let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };

        let (lo, hi) = y_extent(points).unwrap_or((0.0, 0.0));
        let span = hi - lo;
        if span <= f64::EPSILON {
            return ((x_min, x_max), (lo - 1.0, hi + 1.0));
        }

        let pad = span * 0.1;
        ((x_min, x_max), (lo - pad, hi + pad))
    }

    /// Rasterize a binary grid: on = white, off = black, each cell `cell_px` square
    /// with a grey one-pixel border.
    pub fn render_grid_image(grid: &Grid<u8>, cell_px: u32) -> Result<GrayImage, ExportError> {
        if cell_px == 0 {
            return Err(ExportError::ZeroSize);
        }

        let width = grid.cols() as u64 * u64::from(cell_px);
        let height = grid.rows() as u64 * u64::from(cell_px);
        check_side_limit(width, height)?;
        let (width, height) = (width as u32, height as u32);
        let bordered = cell_px >= MIN_BORDERED_CELL;

        Ok(GrayImage::from_fn(width, height, |x, y| {
            if bordered && (x % cell_px == 0 || y % cell_px == 0) {
                return Luma([PIXEL_BORDER]);
            }
            let cell = grid[((y / cell_px) as usize, (x / cell_px) as usize)];
            Luma([if cell != 0 { PIXEL_ON } else { PIXEL_OFF }])
        }))
    }

    /// Save a binary grid as PNG.
    pub fn save_grid_png(grid: &Grid<u8>, path: &Path, cell_px: u32) -> Result<(), ExportError> {
        let img = Self::render_grid_image(grid, cell_px)?;
        img.save(path)?;
        Ok(())
    }
}

fn check_side_limit(width: u64, height: u64) -> Result<(), ExportError> {
    let max = MAX_EXPORT_SIDE;
    if width > u64::from(max) || height > u64::from(max) {
        return Err(ExportError::TooLarge { width, height, max });
    }
    Ok(())
}
