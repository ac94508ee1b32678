//! Fixed-epoch training loop

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Configuration;
use crate::data::Dataset;
use crate::model::Mlp;
use crate::optim::{Optimizer, Schedule};
use crate::{Error, Result};

use super::{accuracy, cross_entropy, Batches, EpochRecord, History};

/// Orchestrates the fit loop for a fixed epoch count and batch size
///
/// # Example
///
/// ```no_run
/// use afinar::optim::{OptimizerKind, Schedule};
/// use afinar::train::Trainer;
/// # let mut model: afinar::model::Mlp = todo!();
/// # let train: afinar::data::Dataset = todo!();
///
/// let optimizer = OptimizerKind::Sgd { momentum: 0.9 }.build(0.1);
/// let mut trainer = Trainer::new(optimizer, 128, 20)
///     .with_schedule(Schedule::Exponential { k: 0.1 });
/// let history = trainer.fit(&mut model, &train, None, 0).unwrap();
/// println!("final loss: {:.4}", history.last().unwrap().loss);
/// ```
pub struct Trainer {
    optimizer: Box<dyn Optimizer>,
    schedule: Schedule,
    batch_size: usize,
    epochs: usize,
    log_interval: usize,
}

impl Trainer {
    /// Create a trainer with a constant learning rate
    pub fn new(optimizer: Box<dyn Optimizer>, batch_size: usize, epochs: usize) -> Self {
        Self {
            optimizer,
            schedule: Schedule::Constant,
            batch_size,
            epochs,
            log_interval: 0,
        }
    }

    /// Assemble a trainer from a full configuration
    pub fn from_config(config: &Configuration) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            optimizer: config.optimizer.build(config.learning_rate),
            schedule: config.schedule,
            batch_size: config.batch_size,
            epochs: config.epochs,
            log_interval: 0,
        })
    }

    /// Apply a learning-rate schedule at pass boundaries
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Print an epoch progress line every `interval` epochs (0 = silent)
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Current learning rate
    pub fn lr(&self) -> f32 {
        self.optimizer.lr()
    }

    /// Run the full fit loop
    ///
    /// The schedule recomputes the optimizer's learning rate at every pass
    /// boundary from the initial rate and the epoch index. When `eval` is
    /// absent, validation metrics are omitted from the history and training
    /// proceeds regardless.
    ///
    /// # Errors
    ///
    /// [`Error::Divergence`] when the mean loss of a pass becomes
    /// non-finite; [`Error::DataShape`] when the training split is empty or
    /// its width does not match the model.
    pub fn fit(
        &mut self,
        model: &mut Mlp,
        train: &Dataset,
        eval: Option<&Dataset>,
        seed: u64,
    ) -> Result<History> {
        if train.is_empty() {
            return Err(Error::DataShape("training split is empty".to_string()));
        }
        if train.feature_dim() != model.input_dim() {
            return Err(Error::DataShape(format!(
                "feature dimension ({}) != model input dimension ({})",
                train.feature_dim(),
                model.input_dim()
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let lr0 = self.optimizer.lr();
        let mut history = History::new();

        for epoch in 0..self.epochs {
            let lr = self.schedule.lr(lr0, epoch);
            self.optimizer.set_lr(lr);

            let (loss, acc) = self.train_epoch(model, train, &mut rng);
            if !loss.is_finite() {
                return Err(Error::Divergence { epoch, loss });
            }

            let (val_loss, val_accuracy) = match eval {
                Some(eval) => {
                    let probs = model.predict(eval.features());
                    (
                        Some(cross_entropy(probs.view(), eval.labels().view())),
                        Some(accuracy(probs.view(), eval.labels().view())),
                    )
                }
                None => (None, None),
            };

            if self.log_interval > 0 && (epoch + 1) % self.log_interval == 0 {
                println!("epoch {epoch}: loss={loss:.4}, accuracy={acc:.4}, lr={lr:.6}");
            }

            history.push(EpochRecord {
                epoch,
                loss,
                accuracy: acc,
                val_loss,
                val_accuracy,
                lr,
            });
        }

        Ok(history)
    }

    /// One full pass; returns mean batch loss and accuracy over the stream
    fn train_epoch(&mut self, model: &mut Mlp, train: &Dataset, rng: &mut StdRng) -> (f32, f32) {
        let mut total_loss = 0.0;
        let mut correct_weighted = 0.0;
        let mut num_batches = 0;

        for (features, targets) in Batches::new(train, self.batch_size) {
            let x = features.to_owned();
            let t = targets.to_owned();
            let rows = x.nrows() as f32;

            let probs = model.forward_train(&x, rng);
            total_loss += cross_entropy(probs.view(), t.view());
            correct_weighted += accuracy(probs.view(), t.view()) * rows;

            // Fused softmax/cross-entropy gradient, averaged over the batch
            let grad = (probs - &t) / rows;
            model.backward(&grad);
            self.optimizer.step(&mut model.params());

            num_batches += 1;
        }

        (
            total_loss / num_batches as f32,
            correct_weighted / train.len() as f32,
        )
    }
}
