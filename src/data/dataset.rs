//! Dataset containers

use ndarray::{Array2, Axis};

use crate::{Error, Result};

/// A prepared collection of samples: feature rows paired with one-hot label rows
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<f32>,
    labels: Array2<f32>,
}

impl Dataset {
    /// Create a dataset, validating that features and labels agree on sample count
    pub fn new(features: Array2<f32>, labels: Array2<f32>) -> Result<Self> {
        if features.nrows() != labels.nrows() {
            return Err(Error::DataShape(format!(
                "feature rows ({}) != label rows ({})",
                features.nrows(),
                labels.nrows()
            )));
        }
        Ok(Self { features, labels })
    }

    /// Feature matrix, one row per sample
    pub fn features(&self) -> &Array2<f32> {
        &self.features
    }

    /// One-hot label matrix, one row per sample
    pub fn labels(&self) -> &Array2<f32> {
        &self.labels
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    /// True when the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of each feature vector
    pub fn feature_dim(&self) -> usize {
        self.features.ncols()
    }

    /// Number of classes in the one-hot encoding
    pub fn num_classes(&self) -> usize {
        self.labels.ncols()
    }

    /// Copy out the rows at `indices`, preserving their given order
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }
}

/// Train/evaluation partition of a prepared dataset
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_dataset_new() {
        let features = arr2(&[[0.0, 1.0], [0.5, 0.5]]);
        let labels = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        let dataset = Dataset::new(features, labels).expect("shapes agree");

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.feature_dim(), 2);
        assert_eq!(dataset.num_classes(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_dataset_row_mismatch() {
        let features = arr2(&[[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]]);
        let labels = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        let result = Dataset::new(features, labels);
        assert!(matches!(result, Err(Error::DataShape(_))));
    }

    #[test]
    fn test_dataset_select() {
        let features = arr2(&[[0.0], [1.0], [2.0], [3.0]]);
        let labels = arr2(&[[1.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]]);
        let dataset = Dataset::new(features, labels).expect("shapes agree");

        let subset = dataset.select(&[3, 1]);
        assert_eq!(subset.len(), 2);
        assert_eq!(subset.features()[[0, 0]], 3.0);
        assert_eq!(subset.features()[[1, 0]], 1.0);
        assert_eq!(subset.labels()[[0, 1]], 1.0);
    }
}
