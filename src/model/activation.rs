//! Layer activations

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Activation applied by a dense layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Relu,
    Softmax,
}

impl Activation {
    /// Apply the activation to a batch of pre-activations
    pub fn forward(self, z: &Array2<f32>) -> Array2<f32> {
        match self {
            Activation::Relu => z.mapv(|v| v.max(0.0)),
            Activation::Softmax => softmax_rows(z),
        }
    }

    /// Elementwise derivative with respect to the pre-activation
    ///
    /// Softmax has no elementwise derivative; its gradient is handled fused
    /// with the cross-entropy loss at the output layer, so the identity is
    /// returned here.
    pub fn derivative(self, z: f32) -> f32 {
        match self {
            Activation::Relu => {
                if z > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Softmax => 1.0,
        }
    }
}

/// Row-wise softmax with max subtraction for numerical stability
pub(crate) fn softmax_rows(z: &Array2<f32>) -> Array2<f32> {
    let mut out = z.clone();
    for mut row in out.axis_iter_mut(Axis(0)) {
        let max = row.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row.mapv_inplace(|v| v / sum);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    #[test]
    fn test_relu_forward() {
        let z = arr2(&[[-1.0, 0.0, 2.5]]);
        let out = Activation::Relu.forward(&z);
        assert_eq!(out, arr2(&[[0.0, 0.0, 2.5]]));
    }

    #[test]
    fn test_relu_derivative() {
        assert_eq!(Activation::Relu.derivative(3.0), 1.0);
        assert_eq!(Activation::Relu.derivative(0.0), 0.0);
        assert_eq!(Activation::Relu.derivative(-2.0), 0.0);
    }

    #[test]
    fn test_softmax_rows_sum_to_one() {
        let z = arr2(&[[1.0, 2.0, 3.0], [0.0, 0.0, 0.0]]);
        let probs = Activation::Softmax.forward(&z);

        for row in probs.rows() {
            assert_relative_eq!(row.sum(), 1.0, epsilon = 1e-5);
        }
        // Uniform logits produce uniform probabilities
        assert_relative_eq!(probs[[1, 0]], 1.0 / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_softmax_numerical_stability() {
        // Large values that would overflow exp() without max subtraction
        let z = arr2(&[[1000.0, 1001.0, 1002.0]]);
        let probs = softmax_rows(&z);

        let sum: f32 = probs.row(0).sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
        for &p in probs.iter() {
            assert!(p.is_finite());
            assert!(p >= 0.0);
        }
    }

    #[test]
    fn test_softmax_is_row_independent() {
        let z = arr2(&[[5.0, 1.0], [1.0, 5.0]]);
        let probs = softmax_rows(&z);
        assert_relative_eq!(probs[[0, 0]], probs[[1, 1]], epsilon = 1e-6);
        assert!(probs[[0, 0]] > probs[[0, 1]]);
    }
}
