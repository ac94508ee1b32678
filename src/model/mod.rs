//! Model construction
//!
//! A [`Configuration`](crate::config::Configuration) maps to an untrained,
//! compiled predictor: a three-layer feed-forward network with ReLU hidden
//! layers, inverted dropout, and a softmax output. Construction is
//! deterministic given an explicit seed.

mod activation;
mod builder;
mod dense;
mod dropout;
mod init;
mod mlp;

pub use activation::Activation;
pub use builder::{build, DROPOUT_RATE};
pub use dense::Dense;
pub use dropout::Dropout;
pub use init::Initializer;
pub use mlp::Mlp;
