//! k-fold cross-validation partitioning

use crate::{Error, Result};

/// Disjoint, contiguous, equal-size (±1) fold assignment
#[derive(Debug, Clone, Copy)]
pub struct KFold {
    folds: usize,
}

impl KFold {
    /// Create a splitter; fewer than two folds leaves no held-out data
    pub fn new(folds: usize) -> Result<Self> {
        if folds < 2 {
            return Err(Error::Configuration(format!(
                "cross-validation needs at least 2 folds, got {folds}"
            )));
        }
        Ok(Self { folds })
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    /// Split row indices 0..n into (train, held_out) index pairs, one per fold
    ///
    /// Held-out groups are contiguous and cover every row exactly once; the
    /// first `n % folds` groups hold one extra row.
    pub fn split(&self, n: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
        if n < self.folds {
            return Err(Error::DataShape(format!(
                "{n} samples cannot fill {} folds",
                self.folds
            )));
        }

        let base = n / self.folds;
        let extra = n % self.folds;
        let mut out = Vec::with_capacity(self.folds);
        let mut start = 0;
        for fold in 0..self.folds {
            let size = base + usize::from(fold < extra);
            let held: Vec<usize> = (start..start + size).collect();
            let train: Vec<usize> = (0..start).chain(start + size..n).collect();
            out.push((train, held));
            start += size;
        }
        Ok(out)
    }
}
