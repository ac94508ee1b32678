//! Hyperparameter search
//!
//! Exhaustive grid search over an explicit [`SearchSpace`], scoring each
//! candidate configuration by k-fold cross-validated accuracy and selecting
//! the best by mean score with deterministic tie-breaks.
//!
//! # Example
//!
//! ```ignore
//! use afinar::search::{search, SearchOptions, SearchSpace};
//!
//! let space = SearchSpace::baseline()
//!     .with_learning_rates(vec![0.01, 0.1])
//!     .with_hidden_widths(vec![64, 128]);
//!
//! let result = search(&space, &dataset, &SearchOptions::default())?;
//! println!("best: {}", result.best);
//! ```

mod cv;
mod driver;
mod result;
mod space;

pub use cv::KFold;
pub use driver::{search, SearchOptions};
pub use result::{select_best, SearchResult, TrialResult, TrialStatus};
pub use space::SearchSpace;
