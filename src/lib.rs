//! Signal Lab
//!
//! Two small signal-processing exercises behind one desktop window:
//!
//! - [`function`] samples y(x) = a1·sin(b1·x) + a2·sin(b2·x) + a3·sin(b3·x)
//! - [`filter`] applies a 3x3 median filter to a binary pixel grid
//!
//! The filter and the sampler are pure and have no GUI dependency; [`gui`] only
//! calls them and displays the results.

pub mod charts;
pub mod config;
pub mod data;
pub mod filter;
pub mod function;
pub mod gui;
