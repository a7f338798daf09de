//! # parhist
//!
//! Fixed-width 1D and 2D histograms over partitioned, parallel collections.
//!
//! Values are digitized into `bins + 2` slots per axis: index `0` counts
//! everything below the lower bound, indices `1..=bins` are the interior
//! bins, and index `bins + 1` counts everything at or above the upper bound.
//! Partial counts from each partition are summed element-wise.
//!
//! ## Crates
//!
//! - [`parhist_core`]: errors, bin specifications, execution configuration
//! - [`parhist_dataset`]: the [`Rdd`] and [`Bag`] collection types
//! - [`parhist_histogram`]: count arrays, histogram results, dispatch
//!
//! ## Example
//!
//! ```rust
//! use parhist::prelude::*;
//!
//! let config = ExecutionConfig::default().with_default_partitions(4);
//! let rdd = Rdd::parallelize_with((0..1000).map(|i| i as f64 / 100.0).collect(), &config)?;
//!
//! let hist = histogram1d(&rdd, 0.0, 5.0, 10)?;
//! assert_eq!(hist.underflow(), 0);
//! assert_eq!(hist.counts().interior_total(), 500);
//! assert_eq!(hist.overflow(), 500);
//!
//! let bag = Bag::from_sequence(vec![(0.5, 0.5), (2.0, -1.0)], 1)?;
//! let hist2d = histogram2d(&bag, 0.0, 1.0, 2, 0.0, 1.0, 2)?;
//! assert_eq!(hist2d.total(), 2);
//! # Ok::<(), parhist::Error>(())
//! ```

pub use parhist_core;
pub use parhist_dataset;
pub use parhist_histogram;

pub use parhist_core::{BinSpec, Error, ExecutionConfig, Executor, Result};
pub use parhist_dataset::{Bag, Rdd};
pub use parhist_histogram::{
    histogram, histogram1d, histogram2d, Counts1D, Counts2D, Histogram1D, Histogram1DSource,
    Histogram2D, Histogram2DSource,
};

/// Convenient imports for common functionality
pub mod prelude {
    pub use parhist_core::{BinSpec, Error, ExecutionConfig, Executor, Result, Sample};
    pub use parhist_dataset::{Bag, Rdd};
    pub use parhist_histogram::{
        histogram, histogram1d, histogram2d, Counts1D, Counts2D, Histogram1D,
        Histogram1DSource, Histogram2D, Histogram2DSource,
    };
}
