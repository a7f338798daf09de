//! Core types for fixed-width histogramming over partitioned collections
//!
//! This crate provides the pieces shared by the collection layer
//! (`parhist-dataset`) and the histogram functions (`parhist-histogram`):
//!
//! - [`Error`] / [`Result`]: the error type every parhist crate returns
//! - [`Sample`]: element types that can be binned
//! - [`BinSpec`], [`linspace`], [`digitize`]: fixed-width edges and bin lookup
//! - [`ExecutionConfig`], [`Executor`]: where partition tasks run
//!
//! # Example
//!
//! ```rust
//! use parhist_core::BinSpec;
//!
//! let spec = BinSpec::new(0.0, 1.0, 4).unwrap();
//! assert_eq!(spec.edges(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
//!
//! // Index 0 is underflow, index bins + 1 is overflow
//! assert_eq!(spec.index_of(-3.0), 0);
//! assert_eq!(spec.index_of(0.3), 2);
//! assert_eq!(spec.index_of(1.0), 5);
//! ```

pub mod binning;
pub mod config;
pub mod error;
pub mod execution;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};

pub use binning::{digitize, linspace, BinRange, BinSpec};
pub use config::{ExecutionConfig, DEFAULT_PARTITIONS, DEFAULT_SPLIT_EVERY};
pub use execution::{ExecutionStrategy, Executor};
pub use numeric::Sample;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
