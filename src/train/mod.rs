//! Training loop
//!
//! Provides the fit half of the pipeline:
//! - Mini-batch iteration over a prepared dataset
//! - Categorical cross-entropy loss and accuracy
//! - A [`Trainer`] running a fixed-epoch loop with an explicit
//!   learning-rate schedule applied at pass boundaries
//! - A per-epoch [`History`] of training and validation metrics

mod batch;
mod history;
mod loss;
mod metrics;
mod trainer;

pub use batch::Batches;
pub use history::{EpochRecord, History};
pub use loss::cross_entropy;
pub use metrics::accuracy;
pub use trainer::Trainer;
