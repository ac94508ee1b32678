//! End-to-end grid-search tests

use afinar::data::Dataset;
use afinar::model::Initializer;
use afinar::optim::{OptimizerKind, Schedule};
use afinar::search::{search, SearchOptions, SearchSpace, TrialStatus};
use ndarray::Array2;

/// Linearly separable three-class dataset
fn three_class_blobs(n: usize) -> Dataset {
    let features = Array2::from_shape_fn((n, 4), |(r, c)| {
        let class = r % 3;
        0.15 + 0.3 * class as f32 + 0.02 * ((r + c) % 3) as f32
    });
    let labels = Array2::from_shape_fn((n, 3), |(r, c)| f32::from(u8::from(r % 3 == c)));
    Dataset::new(features, labels).expect("shapes agree")
}

fn quick_space() -> SearchSpace {
    SearchSpace::baseline()
        .with_hidden_widths(vec![8])
        .with_batch_sizes(vec![6])
        .with_epoch_counts(vec![4])
        .with_learning_rates(vec![0.2])
}

#[test]
fn search_produces_one_trial_per_combination() {
    let space = quick_space()
        .with_initializers(vec![
            Initializer::Uniform,
            Initializer::GlorotUniform,
            Initializer::HeNormal,
        ])
        .with_schedules(vec![Schedule::Constant, Schedule::Exponential { k: 0.1 }]);
    let data = three_class_blobs(24);

    let result = search(&space, &data, &SearchOptions::default()).expect("search");

    // 3 initializers x 2 schedules
    assert_eq!(result.trials.len(), 6);
    for (i, trial) in result.trials.iter().enumerate() {
        assert_eq!(trial.id, i);
        assert_eq!(trial.fold_scores.len(), 3);
        assert_eq!(trial.status, TrialStatus::Completed);
    }
}

#[test]
fn search_best_dominates_table() {
    let space = quick_space()
        .with_learning_rates(vec![0.05, 0.2])
        .with_optimizers(vec![
            OptimizerKind::Sgd { momentum: 0.0 },
            OptimizerKind::Sgd { momentum: 0.9 },
        ]);
    let data = three_class_blobs(30);
    let options = SearchOptions {
        folds: 3,
        seed: 7,
        verbose: false,
    };

    let result = search(&space, &data, &options).expect("search");

    assert_eq!(result.trials.len(), 4);
    for trial in &result.trials {
        assert!(trial.mean <= result.best.mean);
    }
    // The winner is the first trial reaching the winning mean at its spread
    let winner = &result.trials[result.best.id];
    assert_eq!(winner.mean, result.best.mean);
    assert_eq!(winner.std_dev, result.best.std_dev);
}

#[test]
fn search_is_reproducible_run_to_run() {
    let space = quick_space().with_learning_rates(vec![0.1, 0.2]);
    let data = three_class_blobs(24);
    let options = SearchOptions {
        folds: 2,
        seed: 42,
        verbose: false,
    };

    let a = search(&space, &data, &options).expect("search");
    let b = search(&space, &data, &options).expect("search");

    assert_eq!(a.best.id, b.best.id);
    assert_eq!(a.best.mean, b.best.mean);
    for (ta, tb) in a.trials.iter().zip(&b.trials) {
        assert_eq!(ta.fold_scores, tb.fold_scores);
    }
}

#[test]
fn search_learns_to_separate_the_blobs() {
    let space = quick_space()
        .with_epoch_counts(vec![20])
        .with_optimizers(vec![OptimizerKind::Sgd { momentum: 0.9 }]);
    let data = three_class_blobs(30);

    let result = search(&space, &data, &SearchOptions::default()).expect("search");
    assert!(
        result.best.mean > 0.8,
        "separable data should score well, got {}",
        result.best.mean
    );
}

#[test]
fn search_rejects_degenerate_inputs() {
    let data = three_class_blobs(12);

    let empty = quick_space().with_initializers(vec![]);
    assert!(search(&empty, &data, &SearchOptions::default()).is_err());

    let one_fold = SearchOptions {
        folds: 1,
        seed: 0,
        verbose: false,
    };
    assert!(search(&quick_space(), &data, &one_fold).is_err());
}
