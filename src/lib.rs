//! Hyperparameter tuning for feed-forward image classifiers
//!
//! Four composable stages, each usable on its own:
//!
//! - [`data`]: normalize pixel intensities into \[0, 1\], flatten images to
//!   feature rows, one-hot encode integer labels
//! - [`model`]: build an untrained, compiled three-layer MLP with dropout
//!   from an explicit [`Configuration`], deterministically per seed
//! - [`train`]: a fixed-epoch fit loop with an explicit learning-rate
//!   [`Schedule`] applied at pass boundaries, recording a per-epoch
//!   [`History`]
//! - [`search`]: exhaustive grid search over a [`SearchSpace`] under k-fold
//!   cross-validation, with deterministic candidate enumeration and
//!   tie-breaking
//!
//! Trained models persist as a human-readable JSON topology plus a binary
//! weights blob (see [`io`]).
//!
//! # Example
//!
//! ```no_run
//! use afinar::data::{prepare, RawDataset};
//! use afinar::search::{search, SearchOptions, SearchSpace};
//! use afinar::model::Initializer;
//!
//! # fn main() -> afinar::Result<()> {
//! # let raw: RawDataset = todo!();
//! let dataset = prepare(&raw, 10)?;
//!
//! let space = SearchSpace::baseline()
//!     .with_initializers(vec![Initializer::GlorotUniform, Initializer::HeNormal])
//!     .with_learning_rates(vec![0.01, 0.1]);
//!
//! let result = search(&space, &dataset, &SearchOptions::default())?;
//! println!("best: {}", result.best);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod io;
pub mod model;
pub mod optim;
pub mod search;
pub mod train;

pub use config::Configuration;
pub use error::{Error, Result};
pub use model::{build, Initializer, Mlp};
pub use optim::{OptimizerKind, Schedule};
pub use search::{search, SearchOptions, SearchResult, SearchSpace};
pub use train::{History, Trainer};
