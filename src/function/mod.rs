//! Function module - sampling of the three-term sine sum

mod input;
mod sampler;

pub use input::{parse_field, PlotInputs};
pub use sampler::{
    evaluate, evaluate_raw, y_extent, Coefficients, InputError, SampleRange, SamplePoint,
    MAX_SAMPLES,
};
