//! Weight initialization strategies

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Named weight initializer
///
/// Glorot variants scale by fan-in plus fan-out, He variants by fan-in
/// alone. Sampling is deterministic given the supplied generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initializer {
    /// Uniform in [-0.05, 0.05]
    Uniform,
    /// Normal with standard deviation 0.05
    Normal,
    GlorotUniform,
    GlorotNormal,
    HeUniform,
    HeNormal,
}

impl Initializer {
    /// Draw a (fan_in x fan_out) weight matrix from this distribution
    pub fn sample(self, fan_in: usize, fan_out: usize, rng: &mut StdRng) -> Array2<f32> {
        let fan_in_f = fan_in as f32;
        let fan_sum = (fan_in + fan_out) as f32;
        match self {
            Initializer::Uniform => uniform_matrix(fan_in, fan_out, 0.05, rng),
            Initializer::Normal => normal_matrix(fan_in, fan_out, 0.05, rng),
            Initializer::GlorotUniform => {
                uniform_matrix(fan_in, fan_out, (6.0 / fan_sum).sqrt(), rng)
            }
            Initializer::GlorotNormal => {
                normal_matrix(fan_in, fan_out, (2.0 / fan_sum).sqrt(), rng)
            }
            Initializer::HeUniform => uniform_matrix(fan_in, fan_out, (6.0 / fan_in_f).sqrt(), rng),
            Initializer::HeNormal => normal_matrix(fan_in, fan_out, (2.0 / fan_in_f).sqrt(), rng),
        }
    }
}

fn uniform_matrix(fan_in: usize, fan_out: usize, limit: f32, rng: &mut StdRng) -> Array2<f32> {
    Array2::from_shape_fn((fan_in, fan_out), |_| rng.random_range(-limit..limit))
}

fn normal_matrix(fan_in: usize, fan_out: usize, std_dev: f32, rng: &mut StdRng) -> Array2<f32> {
    Array2::from_shape_fn((fan_in, fan_out), |_| {
        let z: f32 = rng.sample(StandardNormal);
        z * std_dev
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const ALL: [Initializer; 6] = [
        Initializer::Uniform,
        Initializer::Normal,
        Initializer::GlorotUniform,
        Initializer::GlorotNormal,
        Initializer::HeUniform,
        Initializer::HeNormal,
    ];

    #[test]
    fn test_sample_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for init in ALL {
            let weights = init.sample(8, 4, &mut rng);
            assert_eq!(weights.dim(), (8, 4));
        }
    }

    #[test]
    fn test_sample_deterministic_per_seed() {
        for init in ALL {
            let mut rng_a = StdRng::seed_from_u64(42);
            let mut rng_b = StdRng::seed_from_u64(42);
            let a = init.sample(16, 8, &mut rng_a);
            let b = init.sample(16, 8, &mut rng_b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let weights = Initializer::Uniform.sample(32, 32, &mut rng);
        for &w in weights.iter() {
            assert!((-0.05..0.05).contains(&w));
        }
    }

    #[test]
    fn test_glorot_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let limit = (6.0f32 / 64.0).sqrt();
        let weights = Initializer::GlorotUniform.sample(32, 32, &mut rng);
        for &w in weights.iter() {
            assert!(w.abs() < limit);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for init in ALL {
            let json = serde_json::to_string(&init).expect("serialize");
            let parsed: Initializer = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(init, parsed);
        }
        assert_eq!(
            serde_json::to_string(&Initializer::GlorotUniform).expect("serialize"),
            "\"glorot_uniform\""
        );
    }
}
