//! Per-epoch training history

use serde::{Deserialize, Serialize};

/// Metrics recorded after one full training pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochRecord {
    pub epoch: usize,
    /// Mean batch loss over the training stream
    pub loss: f32,
    /// Accuracy over the training batch stream
    pub accuracy: f32,
    /// Loss on the evaluation split, when one was supplied
    pub val_loss: Option<f32>,
    /// Accuracy on the evaluation split, when one was supplied
    pub val_accuracy: Option<f32>,
    /// Learning rate in force during this pass
    pub lr: f32,
}

/// Append-only record of training progress
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<EpochRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: EpochRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[EpochRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&EpochRecord> {
        self.records.last()
    }
}
