//! Fully connected layer

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;

use crate::optim::ParamView;

use super::{Activation, Initializer};

/// Fully connected layer with cached forward state for backprop
///
/// Weights are stored (inputs x outputs) so a batch forward pass is a single
/// `x.dot(&weights)` product.
#[derive(Debug, Clone)]
pub struct Dense {
    weights: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
    initializer: Initializer,
    input_cache: Array2<f32>,
    preact_cache: Array2<f32>,
    weight_grads: Array2<f32>,
    bias_grads: Array1<f32>,
}

impl Dense {
    /// Create a layer with weights drawn from `initializer` and zero bias
    pub fn new(
        inputs: usize,
        outputs: usize,
        activation: Activation,
        initializer: Initializer,
        rng: &mut StdRng,
    ) -> Self {
        Self {
            weights: initializer.sample(inputs, outputs, rng),
            bias: Array1::zeros(outputs),
            activation,
            initializer,
            input_cache: Array2::zeros((0, 0)),
            preact_cache: Array2::zeros((0, 0)),
            weight_grads: Array2::zeros((inputs, outputs)),
            bias_grads: Array1::zeros(outputs),
        }
    }

    pub fn inputs(&self) -> usize {
        self.weights.nrows()
    }

    pub fn outputs(&self) -> usize {
        self.weights.ncols()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn initializer(&self) -> Initializer {
        self.initializer
    }

    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    pub fn bias(&self) -> &Array1<f32> {
        &self.bias
    }

    pub(crate) fn weights_mut(&mut self) -> &mut Array2<f32> {
        &mut self.weights
    }

    pub(crate) fn bias_mut(&mut self) -> &mut Array1<f32> {
        &mut self.bias
    }

    /// Forward pass caching input and pre-activation for the backward pass
    pub fn forward(&mut self, x: &Array2<f32>) -> Array2<f32> {
        assert_eq!(x.ncols(), self.inputs(), "input width does not match layer");
        let z = x.dot(&self.weights) + &self.bias;
        let out = self.activation.forward(&z);
        self.input_cache = x.clone();
        self.preact_cache = z;
        out
    }

    /// Inference-mode forward pass; no state is recorded
    pub fn infer(&self, x: &Array2<f32>) -> Array2<f32> {
        let z = x.dot(&self.weights) + &self.bias;
        self.activation.forward(&z)
    }

    /// Backward pass: stores parameter gradients, returns gradient w.r.t. input
    ///
    /// For a softmax layer `grad_out` must already be the fused
    /// softmax/cross-entropy gradient (probabilities minus targets), so no
    /// activation derivative is applied.
    pub fn backward(&mut self, grad_out: &Array2<f32>) -> Array2<f32> {
        let dz = match self.activation {
            Activation::Softmax => grad_out.clone(),
            _ => {
                let derivative = self.preact_cache.mapv(|z| self.activation.derivative(z));
                grad_out * &derivative
            }
        };
        self.weight_grads = self.input_cache.t().dot(&dz);
        self.bias_grads = dz.sum_axis(Axis(0));
        dz.dot(&self.weights.t())
    }

    /// Parameter views (weights, then bias) for the optimizer
    pub(crate) fn params(&mut self) -> Vec<ParamView<'_>> {
        vec![
            ParamView {
                data: self
                    .weights
                    .as_slice_mut()
                    .expect("weight array is contiguous"),
                grad: self
                    .weight_grads
                    .as_slice()
                    .expect("gradient array is contiguous"),
            },
            ParamView {
                data: self.bias.as_slice_mut().expect("bias array is contiguous"),
                grad: self
                    .bias_grads
                    .as_slice()
                    .expect("gradient array is contiguous"),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;
    use rand::SeedableRng;

    fn layer(inputs: usize, outputs: usize, activation: Activation) -> Dense {
        let mut rng = StdRng::seed_from_u64(11);
        Dense::new(inputs, outputs, activation, Initializer::GlorotUniform, &mut rng)
    }

    #[test]
    fn test_forward_shape() {
        let mut dense = layer(3, 2, Activation::Relu);
        let x = arr2(&[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]);
        let out = dense.forward(&x);
        assert_eq!(out.dim(), (2, 2));
    }

    #[test]
    fn test_infer_matches_forward_for_relu() {
        let mut dense = layer(4, 3, Activation::Relu);
        let x = arr2(&[[0.1, -0.2, 0.3, 0.7]]);
        let trained = dense.forward(&x);
        let inferred = dense.infer(&x);
        assert_eq!(trained, inferred);
    }

    #[test]
    fn test_backward_gradient_shapes() {
        let mut dense = layer(3, 2, Activation::Relu);
        let x = arr2(&[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]);
        dense.forward(&x);

        let grad_out = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        let grad_in = dense.backward(&grad_out);

        assert_eq!(grad_in.dim(), (2, 3));
        assert_eq!(dense.weight_grads.dim(), (3, 2));
        assert_eq!(dense.bias_grads.len(), 2);
    }

    #[test]
    fn test_backward_numerical_gradient() {
        // Finite-difference check on a single weight; positive weights keep
        // the ReLU in its linear region
        let mut dense = layer(2, 1, Activation::Relu);
        dense.weights[[0, 0]] = 0.4;
        dense.weights[[1, 0]] = 0.3;
        let x = arr2(&[[0.5, 0.25]]);

        dense.forward(&x);
        let grad_out = arr2(&[[1.0]]);
        dense.backward(&grad_out);
        let analytic = dense.weight_grads[[0, 0]];

        let eps = 1e-3;
        let base = dense.weights[[0, 0]];
        dense.weights[[0, 0]] = base + eps;
        let plus = dense.infer(&x)[[0, 0]];
        dense.weights[[0, 0]] = base - eps;
        let minus = dense.infer(&x)[[0, 0]];
        dense.weights[[0, 0]] = base;

        let numeric = (plus - minus) / (2.0 * eps);
        assert_relative_eq!(analytic, numeric, epsilon = 1e-2);
    }

    #[test]
    fn test_params_order_and_lengths() {
        let mut dense = layer(3, 2, Activation::Relu);
        let views = dense.params();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].data.len(), 6);
        assert_eq!(views[1].data.len(), 2);
    }
}
