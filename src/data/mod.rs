//! Dataset preparation
//!
//! Turns raw image data into the form the trainer consumes: pixel
//! intensities scaled into [0, 1], images flattened to feature rows, and
//! integer labels one-hot encoded over a fixed class count.

mod dataset;
mod prepare;

pub use dataset::{Dataset, Split};
pub use prepare::{decode_one_hot, flatten_images, one_hot, prepare, RawDataset};
