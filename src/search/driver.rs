//! Grid-search driver with k-fold cross-validation

use crate::config::Configuration;
use crate::data::Dataset;
use crate::model;
use crate::train::{accuracy, Trainer};
use crate::{Error, Result};

use super::{select_best, KFold, SearchResult, SearchSpace, TrialResult, TrialStatus};

/// Knobs for a search run
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Cross-validation fold count
    pub folds: usize,
    /// Seed used for every model build and fit in the run
    pub seed: u64,
    /// Print one report line per completed configuration
    pub verbose: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            folds: 3,
            seed: 0,
            verbose: false,
        }
    }
}

/// Exhaustively evaluate a search space under k-fold cross-validation
///
/// Every candidate configuration is scored by held-out accuracy on each
/// fold, training a fresh model per fold so no weights leak between trials.
/// A trial whose training diverges is kept in the table with worst-possible
/// fold scores; the search continues with the remaining trials.
///
/// # Errors
///
/// [`Error::Configuration`] for an empty search space or `folds < 2`;
/// [`Error::DataShape`] when the dataset cannot fill the requested folds.
pub fn search(space: &SearchSpace, data: &Dataset, options: &SearchOptions) -> Result<SearchResult> {
    space.validate()?;
    let kfold = KFold::new(options.folds)?;
    let folds = kfold.split(data.len())?;

    let configs = space.enumerate(data.feature_dim(), data.num_classes());
    let mut trials = Vec::with_capacity(configs.len());

    for (id, config) in configs.into_iter().enumerate() {
        let trial = run_trial(id, config, data, &folds, options.seed)?;
        if options.verbose {
            println!("{trial}");
        }
        trials.push(trial);
    }

    let best_index = select_best(&trials)
        .ok_or_else(|| Error::Configuration("search produced no trials".to_string()))?;
    let result = SearchResult {
        best: trials[best_index].clone(),
        trials,
    };
    if options.verbose {
        println!("best: {}", result.best);
    }
    Ok(result)
}

/// Cross-validate one configuration; divergence marks the trial, not the run
fn run_trial(
    id: usize,
    config: Configuration,
    data: &Dataset,
    folds: &[(Vec<usize>, Vec<usize>)],
    seed: u64,
) -> Result<TrialResult> {
    let mut fold_scores = Vec::with_capacity(folds.len());
    let mut status = TrialStatus::Completed;

    for (train_indices, held_indices) in folds {
        let train = data.select(train_indices);
        let held = data.select(held_indices);

        let mut network = model::build(&config, seed)?;
        let mut trainer = Trainer::from_config(&config)?;
        match trainer.fit(&mut network, &train, None, seed) {
            Ok(_) => {
                let probs = network.predict(held.features());
                fold_scores.push(f64::from(accuracy(probs.view(), held.labels().view())));
            }
            Err(Error::Divergence { .. }) => {
                status = TrialStatus::Diverged;
                fold_scores.push(0.0);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(TrialResult::from_scores(id, config, fold_scores, status))
}
