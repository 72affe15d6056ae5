//! Sample Table Module
//! Tabular view of sampled (x, y) values and CSV export using Polars.

use crate::function::{y_extent, SamplePoint};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("No samples to export")]
    NoData,
}

/// Decimal places shown in the on-screen table.
pub const DISPLAY_DECIMALS: usize = 4;

/// Sampled values of one calculation.
#[derive(Debug, Clone, Default)]
pub struct SampleTable {
    points: Vec<SamplePoint>,
}

impl SampleTable {
    pub fn new(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// (min y, max y) over all rows.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        y_extent(&self.points)
    }

    /// Row `i` formatted for display as (x, y).
    pub fn display_row(&self, i: usize) -> Option<(String, String)> {
        self.points.get(i).map(|p| {
            (
                format!("{:.*}", DISPLAY_DECIMALS, p.x),
                format!("{:.*}", DISPLAY_DECIMALS, p.y),
            )
        })
    }

    /// Two-column DataFrame: ["x", "y"].
    pub fn to_dataframe(&self) -> Result<DataFrame, TableError> {
        let xs: Vec<f64> = self.points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = self.points.iter().map(|p| p.y).collect();

        let df = DataFrame::new(vec![
            Column::new("x".into(), xs),
            Column::new("y".into(), ys),
        ])?;

        Ok(df)
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv(&self, path: &Path) -> Result<(), TableError> {
        if self.is_empty() {
            return Err(TableError::NoData);
        }

        let mut df = self.to_dataframe()?;
        let mut file = File::create(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{evaluate, Coefficients, SampleRange};

    fn default_table() -> SampleTable {
        SampleTable::new(evaluate(&Coefficients::default(), &SampleRange::default()).unwrap())
    }

    #[test]
    fn test_dataframe_shape() {
        let df = default_table().to_dataframe().unwrap();
        assert_eq!(df.height(), 101);
        assert_eq!(df.width(), 2);
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_display_row_uses_four_decimals() {
        let table = default_table();
        let (x, y) = table.display_row(10).unwrap();
        assert_eq!(x, "1.0000");
        assert_eq!(y, format!("{:.4}", Coefficients::default().value_at(1.0)));
        assert_eq!(table.display_row(101), None);
    }

    #[test]
    fn test_write_csv() {
        let dir = std::env::temp_dir().join("signal_lab_table_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("samples.csv");

        default_table().write_csv(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("x,y"));
        assert_eq!(lines.count(), 101);
    }

    #[test]
    fn test_empty_table_refuses_export() {
        let path = std::env::temp_dir().join("signal_lab_empty.csv");
        assert!(matches!(
            SampleTable::default().write_csv(&path),
            Err(TableError::NoData)
        ));
    }

    #[test]
    fn test_y_range() {
        let table = default_table();
        let (lo, hi) = table.y_range().unwrap();
        assert!(lo < 0.0 && hi > 0.0);
        assert!(hi <= 1.8);
        assert_eq!(SampleTable::default().y_range(), None);
    }
}
