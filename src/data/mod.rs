//! Data module - sample table and CSV export

mod table;

pub use table::{SampleTable, TableError, DISPLAY_DECIMALS};
