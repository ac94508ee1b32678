//! Hyperparameter configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Initializer;
use crate::optim::{OptimizerKind, Schedule};
use crate::{Error, Result};

/// One concrete hyperparameter assignment
///
/// Every recognized option is an explicit field, so an unknown
/// hyperparameter name cannot be expressed; deserialization rejects unknown
/// keys for the same reason. Created by the search driver per trial (or by
/// hand), consumed by the model builder and trainer, never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    pub initializer: Initializer,
    pub optimizer: OptimizerKind,
    pub learning_rate: f32,
    pub schedule: Schedule,
    pub hidden_width: usize,
    pub input_dim: usize,
    pub output_dim: usize,
    pub batch_size: usize,
    pub epochs: usize,
}

impl Configuration {
    /// Check every field for a usable value
    pub fn validate(&self) -> Result<()> {
        if self.input_dim == 0 {
            return Err(Error::Configuration("input dimension must be positive".to_string()));
        }
        if self.output_dim == 0 {
            return Err(Error::Configuration("output dimension must be positive".to_string()));
        }
        if self.hidden_width == 0 {
            return Err(Error::Configuration("hidden width must be positive".to_string()));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(Error::Configuration(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.batch_size == 0 {
            return Err(Error::Configuration("batch size must be positive".to_string()));
        }
        if self.epochs == 0 {
            return Err(Error::Configuration("epoch count must be positive".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "init={:?} opt={:?} lr={} schedule={:?} width={} batch={} epochs={}",
            self.initializer,
            self.optimizer,
            self.learning_rate,
            self.schedule,
            self.hidden_width,
            self.batch_size,
            self.epochs
        )
    }
}
