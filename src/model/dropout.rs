//! Inverted dropout layer

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::Rng;

/// Inverted dropout: surviving units are scaled by 1/(1-rate) at train time
/// so inference is a plain pass-through
#[derive(Debug, Clone)]
pub struct Dropout {
    rate: f32,
    scale: f32,
    mask: Array2<f32>,
}

impl Dropout {
    pub fn new(rate: f32) -> Self {
        assert!((0.0..1.0).contains(&rate), "dropout rate must be in [0, 1)");
        Self {
            rate,
            scale: 1.0 / (1.0 - rate),
            mask: Array2::zeros((0, 0)),
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Training-mode forward pass: draws a fresh mask from `rng`
    pub fn forward(&mut self, x: &Array2<f32>, rng: &mut StdRng) -> Array2<f32> {
        self.mask = Array2::from_shape_fn(x.dim(), |_| {
            if rng.random::<f32>() >= self.rate {
                self.scale
            } else {
                0.0
            }
        });
        x * &self.mask
    }

    /// Backward pass reuses the mask drawn in the forward pass
    pub fn backward(&self, grad_out: &Array2<f32>) -> Array2<f32> {
        grad_out * &self.mask
    }
}
