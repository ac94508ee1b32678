//! Optimizers and learning-rate schedules
//!
//! Provides the optimization side of "compiling" a model: an [`Optimizer`]
//! trait over flat parameter views, SGD with momentum, Adam, and pure
//! epoch-indexed learning-rate schedules.

mod adam;
mod schedule;
mod sgd;

pub use adam::Adam;
pub use schedule::Schedule;
pub use sgd::Sgd;

use serde::{Deserialize, Serialize};

/// A flat parameter buffer paired with its gradient
pub struct ParamView<'a> {
    pub data: &'a mut [f32],
    pub grad: &'a [f32],
}

/// Trait for optimization algorithms
pub trait Optimizer {
    /// Apply one update step to every parameter
    fn step(&mut self, params: &mut [ParamView<'_>]);

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}

/// Optimizer choice plus its fixed hyperparameters
///
/// The learning rate is supplied separately so it can be searched as its own
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    Sgd { momentum: f32 },
    Adam { beta1: f32, beta2: f32 },
}

impl OptimizerKind {
    /// Standard Adam parameters (beta1 = 0.9, beta2 = 0.999)
    pub fn adam_default() -> Self {
        OptimizerKind::Adam {
            beta1: 0.9,
            beta2: 0.999,
        }
    }

    /// Construct the optimizer at the given initial learning rate
    pub fn build(self, lr: f32) -> Box<dyn Optimizer> {
        match self {
            OptimizerKind::Sgd { momentum } => Box::new(Sgd::new(lr, momentum)),
            OptimizerKind::Adam { beta1, beta2 } => Box::new(Adam::new(lr, beta1, beta2, 1e-8)),
        }
    }
}
