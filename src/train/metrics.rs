//! Evaluation metrics

use ndarray::{ArrayView1, ArrayView2, Axis};

/// Fraction of rows where the predicted class (argmax) matches the target
pub fn accuracy(probs: ArrayView2<f32>, targets: ArrayView2<f32>) -> f32 {
    assert_eq!(
        probs.dim(),
        targets.dim(),
        "predictions and targets must have the same shape"
    );
    if probs.nrows() == 0 {
        return 0.0;
    }

    let correct = probs
        .axis_iter(Axis(0))
        .zip(targets.axis_iter(Axis(0)))
        .filter(|(p, t)| argmax(*p) == argmax(*t))
        .count();
    correct as f32 / probs.nrows() as f32
}

fn argmax(row: ArrayView1<f32>) -> usize {
    row.iter()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |best, (i, &v)| {
            if v > best.1 {
                (i, v)
            } else {
                best
            }
        })
        .0
}
