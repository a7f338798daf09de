//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Seeded uniform samples in `[lower, upper)`
pub fn uniform_samples(n: usize, lower: f64, upper: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Uniform::new(lower, upper);
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Seeded normal samples
pub fn normal_samples(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Reference digitize by linear scan over the edges
pub fn naive_counts(values: &[f64], edges: &[f64]) -> Vec<u64> {
    let mut counts = vec![0u64; edges.len() + 1];
    for &v in values {
        let idx = if v.is_nan() {
            edges.len()
        } else {
            edges.iter().filter(|&&e| e <= v).count()
        };
        counts[idx] += 1;
    }
    counts
}
