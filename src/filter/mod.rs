//! Filter module - median filtering of pixel grids

mod grid;
mod letter;
mod median;
mod session;

pub use grid::{Grid, GridError};
pub use letter::{letter_o, DEFAULT_LETTER_SIZE, LETTER_MIN_SIZE, OFF, ON};
pub use median::{apply_median_filter, neighborhood, Boundary, MedianFilter};
pub use session::FilterSession;
