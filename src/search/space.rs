//! Grid definition for hyperparameter search

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::model::Initializer;
use crate::optim::{OptimizerKind, Schedule};
use crate::{Error, Result};

/// Candidate values per hyperparameter axis
///
/// Every axis must hold at least one candidate; pin an axis by giving it a
/// single value. The set of fields is the set of recognized hyperparameters,
/// so an unknown axis cannot be expressed, and deserialization rejects
/// unknown keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSpace {
    pub initializers: Vec<Initializer>,
    pub optimizers: Vec<OptimizerKind>,
    pub learning_rates: Vec<f32>,
    pub schedules: Vec<Schedule>,
    pub hidden_widths: Vec<usize>,
    pub batch_sizes: Vec<usize>,
    pub epoch_counts: Vec<usize>,
}

impl SearchSpace {
    /// Space with every axis pinned to a single baseline candidate
    pub fn baseline() -> Self {
        Self {
            initializers: vec![Initializer::GlorotUniform],
            optimizers: vec![OptimizerKind::Sgd { momentum: 0.0 }],
            learning_rates: vec![0.1],
            schedules: vec![Schedule::Constant],
            hidden_widths: vec![512],
            batch_sizes: vec![128],
            epoch_counts: vec![10],
        }
    }

    pub fn with_initializers(mut self, candidates: Vec<Initializer>) -> Self {
        self.initializers = candidates;
        self
    }

    pub fn with_optimizers(mut self, candidates: Vec<OptimizerKind>) -> Self {
        self.optimizers = candidates;
        self
    }

    pub fn with_learning_rates(mut self, candidates: Vec<f32>) -> Self {
        self.learning_rates = candidates;
        self
    }

    pub fn with_schedules(mut self, candidates: Vec<Schedule>) -> Self {
        self.schedules = candidates;
        self
    }

    pub fn with_hidden_widths(mut self, candidates: Vec<usize>) -> Self {
        self.hidden_widths = candidates;
        self
    }

    pub fn with_batch_sizes(mut self, candidates: Vec<usize>) -> Self {
        self.batch_sizes = candidates;
        self
    }

    pub fn with_epoch_counts(mut self, candidates: Vec<usize>) -> Self {
        self.epoch_counts = candidates;
        self
    }

    /// Number of configurations in the grid
    pub fn combinations(&self) -> usize {
        self.initializers.len()
            * self.optimizers.len()
            * self.learning_rates.len()
            * self.schedules.len()
            * self.hidden_widths.len()
            * self.batch_sizes.len()
            * self.epoch_counts.len()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.combinations() == 0 {
            return Err(Error::Configuration(
                "search space has an empty axis; nothing to search".to_string(),
            ));
        }
        Ok(())
    }

    /// Enumerate the full Cartesian product in declared axis order
    ///
    /// Deterministic: fixed nesting over the fields in declaration order,
    /// candidates in their given order.
    pub fn enumerate(&self, input_dim: usize, output_dim: usize) -> Vec<Configuration> {
        let mut configs = Vec::with_capacity(self.combinations());
        for &initializer in &self.initializers {
            for &optimizer in &self.optimizers {
                for &learning_rate in &self.learning_rates {
                    for &schedule in &self.schedules {
                        for &hidden_width in &self.hidden_widths {
                            for &batch_size in &self.batch_sizes {
                                for &epochs in &self.epoch_counts {
                                    configs.push(Configuration {
                                        initializer,
                                        optimizer,
                                        learning_rate,
                                        schedule,
                                        hidden_width,
                                        input_dim,
                                        output_dim,
                                        batch_size,
                                        epochs,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
        configs
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::baseline()
    }
}
