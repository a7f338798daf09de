//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Bin counts that exercise edge spacing
pub fn edge_case_bins() -> Vec<usize> {
    vec![
        1,    // Single bin
        2,    // Smallest split
        3,    // Non power of two
        7,    // Prime
        10,   // Decimal widths that do not divide exactly
        64,   // Power of 2
        1000, // Many bins
    ]
}

/// Bounds pairs of different magnitude and sign
pub fn edge_case_ranges() -> Vec<(f64, f64)> {
    vec![
        (0.0, 1.0),
        (-1.0, 1.0),
        (-1e6, -1e3),
        (0.1, 0.3),
        (1e-9, 2e-9),
        (-5.0, 1e9),
    ]
}
