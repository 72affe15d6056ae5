//! Letter "O" bitmap used as the demo filter input.

use crate::filter::grid::{Grid, GridError};

/// Smallest side for which the ring and its hole are both visible.
pub const LETTER_MIN_SIZE: usize = 8;
/// Side of the reference demo image.
pub const DEFAULT_LETTER_SIZE: usize = 16;

pub const ON: u8 = 1;
pub const OFF: u8 = 0;

/// Draw a `size` x `size` letter "O": a filled square of ones with a square hole,
/// on a background of zeros.
///
/// For size 16 the ring spans rows/cols 2..=13 and the hole 6..=9.
pub fn letter_o(size: usize) -> Result<Grid<u8>, GridError> {
    if size < LETTER_MIN_SIZE {
        return Err(GridError::TooSmall {
            min: LETTER_MIN_SIZE,
            found: size,
        });
    }

    let margin = size / 8;
    let hole = 3 * size / 8;

    let mut grid = Grid::new(size, size, OFF)?;
    grid.fill_rect(margin, margin, size - 1 - margin, size - 1 - margin, ON);
    grid.fill_rect(hole, hole, size - 1 - hole, size - 1 - hole, OFF);

    Ok(grid)
}
