//! Grid Module
//! Rectangular row-major buffer used as filter input and output.

use std::ops::Index;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one row and one column")]
    Empty,
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Grid size {found} is below the minimum of {min}")]
    TooSmall { min: usize, found: usize },
}

/// Fixed-dimension two-dimensional grid, stored row by row.
///
/// A `Grid` is never zero-sized or ragged; both constructors reject such input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a `rows` x `cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let expected = rows.first().map(|r| r.len()).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * expected);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols: expected,
            cells,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Set a cell. Returns false when (row, col) is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col] = value;
        true
    }

    /// Fill the inclusive rectangle [r0, r1] x [c0, c1], clipped to the grid.
    pub fn fill_rect(&mut self, r0: usize, c0: usize, r1: usize, c1: usize, value: T) {
        for r in r0..=r1.min(self.rows - 1) {
            for c in c0..=c1.min(self.cols - 1) {
                self.cells[r * self.cols + c] = value;
            }
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols)
    }

    /// Raw row-major cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// New grid of the same shape with each cell computed from its (row, col).
    pub fn map_indexed<U>(&self, mut f: impl FnMut(usize, usize) -> U) -> Grid<U> {
        let cells = (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();

        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// Panics when (row, col) is outside the grid, like slice indexing.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Number of cells equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|v| *v == value).count()
    }

    /// Number of cells that differ from `other`. Grids of different shape differ everywhere.
    pub fn diff_count(&self, other: &Grid<T>) -> usize {
        if self.dims() != other.dims() {
            return self.cells.len().max(other.cells.len());
        }
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dims() {
        assert_eq!(Grid::new(0, 3, 0u8), Err(GridError::Empty));
        assert_eq!(Grid::new(3, 0, 0u8), Err(GridError::Empty));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![0u8, 1, 0], vec![1, 1]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(Grid::<u8>::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::<u8>::from_rows(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn test_row_major_access() {
        let grid = Grid::from_rows(vec![vec![1u8, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.dims(), (2, 3));
        assert_eq!(grid.get(1, 0), Some(&4));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.row(1), Some(&[4u8, 5, 6][..]));
        assert_eq!(grid.iter_rows().count(), 2);
    }

    #[test]
    fn test_set_out_of_range_is_rejected() {
        let mut grid = Grid::new(2, 2, 0u8).unwrap();
        assert!(grid.set(1, 1, 1));
        assert!(!grid.set(2, 0, 1));
        assert_eq!(grid.count(&1), 1);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut grid = Grid::new(4, 4, 0u8).unwrap();
        grid.fill_rect(2, 2, 10, 10, 1);
        assert_eq!(grid.count(&1), 4);
    }

    #[test]
    fn test_map_indexed_keeps_shape() {
        let grid = Grid::new(2, 3, 0u8).unwrap();
        let mapped = grid.map_indexed(|r, c| r * 10 + c);
        assert_eq!(mapped.dims(), (2, 3));
        assert_eq!(mapped[(1, 2)], 12);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let grid = Grid::new(2, 2, 0u8).unwrap();
        let _ = grid[(0, 2)];
    }

    #[test]
    fn test_diff_count() {
        let a = Grid::new(3, 3, 0u8).unwrap();
        let mut b = a.clone();
        b.set(0, 0, 1);
        b.set(2, 2, 1);
        assert_eq!(a.diff_count(&b), 2);
        assert_eq!(a.diff_count(&a), 0);
    }
}
