//! Stochastic Gradient Descent optimizer

use super::{Optimizer, ParamView};

/// SGD optimizer with optional momentum
pub struct Sgd {
    lr: f32,
    momentum: f32,
    velocities: Vec<Option<Vec<f32>>>,
}

impl Sgd {
    /// Create a new SGD optimizer
    pub fn new(lr: f32, momentum: f32) -> Self {
        Self {
            lr,
            momentum,
            velocities: Vec::new(),
        }
    }

    /// Initialize velocity slots if needed
    fn ensure_velocities(&mut self, n: usize) {
        if self.velocities.is_empty() {
            self.velocities = vec![None; n];
        }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &mut [ParamView<'_>]) {
        self.ensure_velocities(params.len());

        for (i, param) in params.iter_mut().enumerate() {
            if self.momentum > 0.0 {
                let velocity =
                    self.velocities[i].get_or_insert_with(|| vec![0.0; param.grad.len()]);

                // v = momentum * v - lr * grad; param += v
                for ((d, v), &g) in param.data.iter_mut().zip(velocity.iter_mut()).zip(param.grad)
                {
                    *v = self.momentum * *v - self.lr * g;
                    *d += *v;
                }
            } else {
                // Simple SGD: param -= lr * grad
                for (d, &g) in param.data.iter_mut().zip(param.grad) {
                    *d -= self.lr * g;
                }
            }
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
