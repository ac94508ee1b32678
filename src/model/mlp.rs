//! Three-layer feed-forward classifier with dropout

use ndarray::Array2;
use rand::rngs::StdRng;

use crate::optim::ParamView;
use crate::{Error, Result};

use super::{Activation, Dense, Dropout, Initializer};

/// Feed-forward network: two ReLU hidden layers with dropout after each,
/// softmax output over the class count
#[derive(Debug, Clone)]
pub struct Mlp {
    pub(crate) hidden1: Dense,
    pub(crate) drop1: Dropout,
    pub(crate) hidden2: Dense,
    pub(crate) drop2: Dropout,
    pub(crate) output: Dense,
}

impl Mlp {
    /// Construct with freshly initialized weights drawn from `rng`
    pub fn new(
        input_dim: usize,
        hidden_width: usize,
        output_dim: usize,
        initializer: Initializer,
        dropout_rate: f32,
        rng: &mut StdRng,
    ) -> Self {
        Self {
            hidden1: Dense::new(input_dim, hidden_width, Activation::Relu, initializer, rng),
            drop1: Dropout::new(dropout_rate),
            hidden2: Dense::new(hidden_width, hidden_width, Activation::Relu, initializer, rng),
            drop2: Dropout::new(dropout_rate),
            output: Dense::new(hidden_width, output_dim, Activation::Softmax, initializer, rng),
        }
    }

    pub fn input_dim(&self) -> usize {
        self.hidden1.inputs()
    }

    pub fn hidden_width(&self) -> usize {
        self.hidden1.outputs()
    }

    pub fn output_dim(&self) -> usize {
        self.output.outputs()
    }

    /// Training-mode forward pass: dropout masks are drawn from `rng` and
    /// layer state is cached for [`Mlp::backward`]
    pub fn forward_train(&mut self, x: &Array2<f32>, rng: &mut StdRng) -> Array2<f32> {
        let h1 = self.hidden1.forward(x);
        let d1 = self.drop1.forward(&h1, rng);
        let h2 = self.hidden2.forward(&d1);
        let d2 = self.drop2.forward(&h2, rng);
        self.output.forward(&d2)
    }

    /// Inference-mode forward pass: dropout is a pass-through, no state is
    /// recorded. Returns class probabilities, one row per sample.
    pub fn predict(&self, x: &Array2<f32>) -> Array2<f32> {
        let h1 = self.hidden1.infer(x);
        let h2 = self.hidden2.infer(&h1);
        self.output.infer(&h2)
    }

    /// Backward pass from the fused softmax/cross-entropy gradient
    /// (probabilities minus targets, already averaged over the batch)
    pub fn backward(&mut self, grad_logits: &Array2<f32>) {
        let g = self.output.backward(grad_logits);
        let g = self.drop2.backward(&g);
        let g = self.hidden2.backward(&g);
        let g = self.drop1.backward(&g);
        self.hidden1.backward(&g);
    }

    /// Parameter views in a stable order for the optimizer
    pub fn params(&mut self) -> Vec<ParamView<'_>> {
        let mut views = self.hidden1.params();
        views.extend(self.hidden2.params());
        views.extend(self.output.params());
        views
    }

    /// Parameter tensors keyed by name, flattened row-major, in layer order
    pub fn named_parameters(&self) -> Vec<(&'static str, Vec<f32>)> {
        let flat2 = |a: &Array2<f32>| a.iter().copied().collect::<Vec<f32>>();
        vec![
            ("hidden1.weight", flat2(self.hidden1.weights())),
            ("hidden1.bias", self.hidden1.bias().to_vec()),
            ("hidden2.weight", flat2(self.hidden2.weights())),
            ("hidden2.bias", self.hidden2.bias().to_vec()),
            ("output.weight", flat2(self.output.weights())),
            ("output.bias", self.output.bias().to_vec()),
        ]
    }

    /// Overwrite one parameter tensor by name; the value count must match
    pub fn set_parameter(&mut self, name: &str, values: &[f32]) -> Result<()> {
        let target: &mut [f32] = match name {
            "hidden1.weight" => slice_of(self.hidden1.weights_mut())?,
            "hidden1.bias" => self.hidden1.bias_mut().as_slice_mut().ok_or_else(contiguity)?,
            "hidden2.weight" => slice_of(self.hidden2.weights_mut())?,
            "hidden2.bias" => self.hidden2.bias_mut().as_slice_mut().ok_or_else(contiguity)?,
            "output.weight" => slice_of(self.output.weights_mut())?,
            "output.bias" => self.output.bias_mut().as_slice_mut().ok_or_else(contiguity)?,
            _ => {
                return Err(Error::Persistence(format!("unknown parameter key: {name}")));
            }
        };
        if target.len() != values.len() {
            return Err(Error::Persistence(format!(
                "parameter {name} expects {} values, got {}",
                target.len(),
                values.len()
            )));
        }
        target.copy_from_slice(values);
        Ok(())
    }
}

fn slice_of(a: &mut Array2<f32>) -> Result<&mut [f32]> {
    a.as_slice_mut().ok_or_else(contiguity)
}

fn contiguity() -> Error {
    Error::Persistence("parameter array is not contiguous".to_string())
}
