//! Learning rate schedules
//!
//! Schedules are pure functions of the epoch index, applied by the trainer
//! at pass boundaries rather than through callback hooks.

use serde::{Deserialize, Serialize};

/// Learning-rate schedule evaluated at epoch boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    /// lr(e) = lr0
    Constant,
    /// Inverse-time decay: lr(e) = lr0 / (1 + decay * e)
    InverseTime { decay: f32 },
    /// Exponential decay: lr(e) = lr0 * exp(-k * e)
    Exponential { k: f32 },
}

impl Schedule {
    /// Learning rate for the given epoch, starting from `lr0`
    pub fn lr(self, lr0: f32, epoch: usize) -> f32 {
        match self {
            Schedule::Constant => lr0,
            Schedule::InverseTime { decay } => lr0 / (1.0 + decay * epoch as f32),
            Schedule::Exponential { k } => lr0 * (-k * epoch as f32).exp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant() {
        for epoch in [0, 1, 10, 100] {
            assert_abs_diff_eq!(Schedule::Constant.lr(0.1, epoch), 0.1, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_inverse_time_initial_lr() {
        let schedule = Schedule::InverseTime { decay: 0.5 };
        assert_abs_diff_eq!(schedule.lr(0.1, 0), 0.1, epsilon = 1e-8);
    }

    #[test]
    fn test_inverse_time_formula() {
        let schedule = Schedule::InverseTime { decay: 0.5 };
        assert_abs_diff_eq!(schedule.lr(0.1, 2), 0.1 / 2.0, epsilon = 1e-7);
        assert_abs_diff_eq!(schedule.lr(0.1, 10), 0.1 / 6.0, epsilon = 1e-7);
    }

    #[test]
    fn test_exponential_formula() {
        let schedule = Schedule::Exponential { k: 0.1 };
        assert_abs_diff_eq!(schedule.lr(0.1, 0), 0.1, epsilon = 1e-8);
        for epoch in 0..60 {
            let expected = 0.1 * (-0.1 * epoch as f32).exp();
            assert_abs_diff_eq!(schedule.lr(0.1, epoch), expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_decay_schedules_decrease_monotonically() {
        for schedule in [
            Schedule::InverseTime { decay: 0.3 },
            Schedule::Exponential { k: 0.2 },
        ] {
            let mut prev = schedule.lr(1.0, 0);
            for epoch in 1..50 {
                let current = schedule.lr(1.0, epoch);
                assert!(
                    current < prev,
                    "schedule should decrease: prev={prev}, current={current}"
                );
                prev = current;
            }
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for schedule in [
            Schedule::Constant,
            Schedule::InverseTime { decay: 0.5 },
            Schedule::Exponential { k: 0.1 },
        ] {
            let json = serde_json::to_string(&schedule).expect("serialize");
            let parsed: Schedule = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(schedule, parsed);
        }
    }
}
