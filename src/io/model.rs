//! Topology description for persistence

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::model::{Activation, Initializer, Mlp};
use crate::{Error, Result};

/// Human-readable architecture description saved alongside the weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    /// Model name/identifier
    pub name: String,
    /// Layers in forward order
    pub layers: Vec<LayerInfo>,
}

/// One layer entry in a topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerInfo {
    Dense {
        name: String,
        inputs: usize,
        outputs: usize,
        activation: Activation,
        initializer: Initializer,
    },
    Dropout {
        name: String,
        rate: f32,
    },
}

impl Topology {
    /// Describe a network's architecture
    pub fn describe(name: impl Into<String>, model: &Mlp) -> Self {
        let dense = |layer_name: &str, layer: &crate::model::Dense| LayerInfo::Dense {
            name: layer_name.to_string(),
            inputs: layer.inputs(),
            outputs: layer.outputs(),
            activation: layer.activation(),
            initializer: layer.initializer(),
        };
        let dropout = |layer_name: &str, layer: &crate::model::Dropout| LayerInfo::Dropout {
            name: layer_name.to_string(),
            rate: layer.rate(),
        };

        Self {
            name: name.into(),
            layers: vec![
                dense("hidden1", &model.hidden1),
                dropout("drop1", &model.drop1),
                dense("hidden2", &model.hidden2),
                dropout("drop2", &model.drop2),
                dense("output", &model.output),
            ],
        }
    }

    /// Rebuild an untrained network matching this topology
    ///
    /// The layer pattern must be the dense/dropout/dense/dropout/dense
    /// architecture this crate produces; weights are placeholders until the
    /// blob overwrites them.
    pub fn instantiate(&self) -> Result<Mlp> {
        let (hidden1, drop1, hidden2, output) = match self.layers.as_slice() {
            [LayerInfo::Dense {
                inputs: in1,
                outputs: out1,
                activation: Activation::Relu,
                initializer,
                ..
            }, LayerInfo::Dropout { rate, .. }, LayerInfo::Dense {
                inputs: in2,
                outputs: out2,
                activation: Activation::Relu,
                ..
            }, LayerInfo::Dropout { .. }, LayerInfo::Dense {
                inputs: in3,
                outputs: out3,
                activation: Activation::Softmax,
                ..
            }] => ((*in1, *out1, *initializer), *rate, (*in2, *out2), (*in3, *out3)),
            _ => {
                return Err(Error::Persistence(
                    "topology does not describe a dense/dropout MLP".to_string(),
                ))
            }
        };

        let (input_dim, width, initializer) = (hidden1.0, hidden1.1, hidden1.2);
        if hidden2 != (width, width) || output.0 != width {
            return Err(Error::Persistence(format!(
                "inconsistent layer widths in topology: {} -> {:?} -> {:?}",
                width, hidden2, output
            )));
        }

        // Placeholder initialization; real weights come from the blob
        let mut rng = StdRng::seed_from_u64(0);
        Ok(Mlp::new(input_dim, width, output.1, initializer, drop1, &mut rng))
    }
}
