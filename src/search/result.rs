//! Search result types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Configuration;

/// Outcome of one configuration's cross-validation trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialResult {
    /// Position in the enumeration order
    pub id: usize,
    pub config: Configuration,
    /// Held-out accuracy per fold
    pub fold_scores: Vec<f64>,
    /// Mean of the fold scores
    pub mean: f64,
    /// Population standard deviation of the fold scores
    pub std_dev: f64,
    pub status: TrialStatus,
}

/// Trial status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialStatus {
    Completed,
    /// Training produced a non-finite loss on at least one fold
    Diverged,
}

impl TrialResult {
    pub(crate) fn from_scores(
        id: usize,
        config: Configuration,
        fold_scores: Vec<f64>,
        status: TrialStatus,
    ) -> Self {
        let n = fold_scores.len() as f64;
        let mean = fold_scores.iter().sum::<f64>() / n;
        let variance = fold_scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Self {
            id,
            config,
            fold_scores,
            mean,
            std_dev: variance.sqrt(),
            status,
        }
    }
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} (+/- {:.4}) with {}{}",
            self.mean,
            self.std_dev,
            self.config,
            if self.status == TrialStatus::Diverged {
                " [diverged]"
            } else {
                ""
            }
        )
    }
}

/// Best configuration plus the full per-combination score table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub best: TrialResult,
    pub trials: Vec<TrialResult>,
}

/// Index of the winning trial: maximum mean score, ties broken by lowest
/// standard deviation, then by first-encountered order
pub fn select_best(trials: &[TrialResult]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, trial) in trials.iter().enumerate() {
        let better = match best {
            None => true,
            Some(b) => {
                trial.mean > trials[b].mean
                    || (trial.mean == trials[b].mean && trial.std_dev < trials[b].std_dev)
            }
        };
        if better {
            best = Some(i);
        }
    }
    best
}
