//! Adam optimizer

use super::{Optimizer, ParamView};

/// Adam optimizer with bias-corrected first and second moments
pub struct Adam {
    lr: f32,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    t: u64,
    m: Vec<Option<Vec<f32>>>,
    v: Vec<Option<Vec<f32>>>,
}

impl Adam {
    /// Create a new Adam optimizer
    pub fn new(lr: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self {
            lr,
            beta1,
            beta2,
            epsilon,
            t: 0,
            m: Vec::new(),
            v: Vec::new(),
        }
    }

    /// Create Adam with the standard parameters
    pub fn default_params(lr: f32) -> Self {
        Self::new(lr, 0.9, 0.999, 1e-8)
    }

    /// Initialize moment slots if needed
    fn ensure_moments(&mut self, n: usize) {
        if self.m.is_empty() {
            self.m = vec![None; n];
            self.v = vec![None; n];
        }
    }
}

impl Optimizer for Adam {
    fn step(&mut self, params: &mut [ParamView<'_>]) {
        self.ensure_moments(params.len());
        self.t += 1;

        // Bias correction folded into the step size
        let lr_t = self.lr
            * ((1.0 - self.beta2.powi(self.t as i32)).sqrt()
                / (1.0 - self.beta1.powi(self.t as i32)));

        for (i, param) in params.iter_mut().enumerate() {
            let len = param.grad.len();
            let m = self.m[i].get_or_insert_with(|| vec![0.0; len]);
            let v = self.v[i].get_or_insert_with(|| vec![0.0; len]);

            for (((d, m_i), v_i), &g) in param
                .data
                .iter_mut()
                .zip(m.iter_mut())
                .zip(v.iter_mut())
                .zip(param.grad)
            {
                *m_i = self.beta1 * *m_i + (1.0 - self.beta1) * g;
                *v_i = self.beta2 * *v_i + (1.0 - self.beta2) * g * g;
                *d -= lr_t * *m_i / (v_i.sqrt() + self.epsilon);
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
