//! Categorical cross-entropy loss

use ndarray::ArrayView2;

/// Guard against ln(0) on fully confident wrong predictions
const EPS: f32 = 1e-10;

/// Mean categorical cross-entropy over a batch of probability rows
///
/// `probs` are softmax outputs; `targets` are one-hot rows of the same shape.
pub fn cross_entropy(probs: ArrayView2<f32>, targets: ArrayView2<f32>) -> f32 {
    assert_eq!(
        probs.dim(),
        targets.dim(),
        "predictions and targets must have the same shape"
    );
    if probs.nrows() == 0 {
        return 0.0;
    }

    // EPS keeps ln() finite for p = 0 while letting NaN probabilities
    // propagate so divergence stays observable downstream
    let total: f32 = targets
        .iter()
        .zip(probs.iter())
        .map(|(&t, &p)| -t * (p + EPS).ln())
        .sum();
    total / probs.nrows() as f32
}
