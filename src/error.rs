//! Crate-level error types

use thiserror::Error;

/// Errors raised across the tuning pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Sample count or dimensionality mismatch, or a label outside the class range
    #[error("data shape error: {0}")]
    DataShape(String),

    /// Empty search space, invalid hyperparameter value, or too few folds
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Loss became non-finite during a training pass
    #[error("training diverged at epoch {epoch}: loss = {loss}")]
    Divergence {
        /// Epoch index of the failing pass
        epoch: usize,
        /// The non-finite loss value observed
        loss: f32,
    },

    /// Topology or weights files unreadable or mismatched
    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tuning operations
pub type Result<T> = std::result::Result<T, Error>;
