mod bucketing;
mod color_scale;
mod errors;
mod labels;
pub mod structures;

pub use crate::bucketing::{bucketize, parse_timestamp};
pub use crate::color_scale::{ColorScale, DiscreteScale, GradientScale};
pub use crate::errors::HeatmapError;
pub use crate::labels::hour_label;
