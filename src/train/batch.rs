//! Mini-batch iteration

use ndarray::{s, ArrayView2};

use crate::data::Dataset;

/// Iterator over fixed-size contiguous batches of a dataset
///
/// Sample order is preserved; the last batch may be short.
pub struct Batches<'a> {
    dataset: &'a Dataset,
    batch_size: usize,
    cursor: usize,
}

impl<'a> Batches<'a> {
    pub fn new(dataset: &'a Dataset, batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        Self {
            dataset,
            batch_size,
            cursor: 0,
        }
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = (ArrayView2<'a, f32>, ArrayView2<'a, f32>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.dataset.len() {
            return None;
        }
        let end = (self.cursor + self.batch_size).min(self.dataset.len());
        let features = self.dataset.features().slice(s![self.cursor..end, ..]);
        let labels = self.dataset.labels().slice(s![self.cursor..end, ..]);
        self.cursor = end;
        Some((features, labels))
    }
}
