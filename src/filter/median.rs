//! Median Filter Module
//! 3x3 rank filter over a `Grid`, with configurable border handling.

use crate::filter::grid::Grid;
use serde::{Deserialize, Serialize};

/// Side length of the filter window.
pub const WINDOW_SIDE: usize = 3;
/// Cells in one window.
pub const WINDOW_LEN: usize = WINDOW_SIDE * WINDOW_SIDE;
/// Index of the median in a sorted window.
pub const MEDIAN_INDEX: usize = WINDOW_LEN / 2;

/// How a neighbour position outside the grid is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary<T> {
    /// Pad with a constant value: k k | a b c d | k k
    Constant(T),
    /// Nearest edge value: a a | a b c d | d d
    Nearest,
    /// Wrap (periodic): c d | a b c d | a b
    Wrap,
}

impl<T: Default> Default for Boundary<T> {
    fn default() -> Self {
        Boundary::Constant(T::default())
    }
}

impl<T: Copy> Boundary<T> {
    /// Read (row, col) from `grid`, resolving positions outside it by this policy.
    fn read(&self, grid: &Grid<T>, row: isize, col: isize) -> T {
        let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
        match self {
            Boundary::Constant(pad) => {
                if (0..rows).contains(&row) && (0..cols).contains(&col) {
                    grid[(row as usize, col as usize)]
                } else {
                    *pad
                }
            }
            Boundary::Nearest => grid[(
                row.clamp(0, rows - 1) as usize,
                col.clamp(0, cols - 1) as usize,
            )],
            Boundary::Wrap => grid[(
                row.rem_euclid(rows) as usize,
                col.rem_euclid(cols) as usize,
            )],
        }
    }
}

/// Collect the 3x3 window centred on (row, col), row by row.
pub fn neighborhood<T: Copy>(
    grid: &Grid<T>,
    row: usize,
    col: usize,
    boundary: Boundary<T>,
) -> [T; WINDOW_LEN] {
    std::array::from_fn(|k| {
        let r = row as isize + (k / WINDOW_SIDE) as isize - 1;
        let c = col as isize + (k % WINDOW_SIDE) as isize - 1;
        boundary.read(grid, r, c)
    })
}

/// Apply a 3x3 median filter to `grid`.
///
/// Every output cell is the 5th smallest of its nine-cell window, read from the
/// untouched input. The output has the same dimensions as the input.
pub fn apply_median_filter<T: Copy + Ord>(grid: &Grid<T>, boundary: Boundary<T>) -> Grid<T> {
    grid.map_indexed(|r, c| {
        let mut window = neighborhood(grid, r, c, boundary);
        window.sort_unstable();
        window[MEDIAN_INDEX]
    })
}

/// Median filter with a stored border policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MedianFilter<T> {
    pub boundary: Boundary<T>,
}

impl<T: Copy + Ord> MedianFilter<T> {
    pub fn new(boundary: Boundary<T>) -> Self {
        Self { boundary }
    }

    pub fn apply(&self, grid: &Grid<T>) -> Grid<T> {
        apply_median_filter(grid, self.boundary)
    }
}
