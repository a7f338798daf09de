//! Fixed-width histograms computed through collection reductions
//!
//! The binning itself is two pure functions: an increment that digitizes a
//! value into `bins + 2` slots (underflow, interior bins, overflow), and a
//! merge that sums two count arrays element-wise. Partitioning, scheduling
//! and the reduction tree belong to the collection being histogrammed:
//!
//! - [`Rdd`](parhist_dataset::Rdd) runs the element-wise increment through
//!   `aggregate` and merges with [`Counts1D::combine`].
//! - [`Bag`](parhist_dataset::Bag) bins a whole partition per task through
//!   `reduction` and sums the partial arrays.
//!
//! # Examples
//!
//! ## Runtime dispatch
//!
//! ```rust
//! use parhist_dataset::{Bag, Rdd};
//! use parhist_histogram::{histogram, histogram2d};
//!
//! let rdd = Rdd::parallelize(vec![0.1, 0.4, 0.45, 0.9, 1.2, -3.0], 3).unwrap();
//! let hist = histogram(&rdd, 0.0, 1.0, 2).unwrap();
//! assert_eq!(hist.counts().as_slice(), &[1, 3, 1, 1]);
//! assert_eq!(hist.edges(), &[0.0, 0.5, 1.0]);
//!
//! let pairs = Bag::from_sequence(vec![(0.2, 0.2), (0.7, 0.2), (0.7, 5.0)], 2).unwrap();
//! let hist2d = histogram2d(&pairs, 0.0, 1.0, 2, 0.0, 1.0, 2).unwrap();
//! assert_eq!(hist2d.counts()[(1, 1)], 1);
//! assert_eq!(hist2d.counts()[(2, 3)], 1);
//!
//! // Anything else is rejected with its type name
//! let err = histogram(&vec![1.0], 0.0, 1.0, 2).unwrap_err();
//! assert!(err.to_string().contains("Vec<f64>"));
//! ```
//!
//! ## Static dispatch
//!
//! ```rust
//! use parhist_dataset::Bag;
//! use parhist_histogram::Histogram1DSource;
//!
//! let bag = Bag::from_sequence((0..100_i64).collect::<Vec<_>>(), 10).unwrap();
//! let hist = bag.histogram1d(0.0, 50.0, 5).unwrap();
//! assert_eq!(hist.counts().interior(), &[10, 10, 10, 10, 10]);
//! assert_eq!(hist.overflow(), 50);
//! ```

pub mod counts;
pub mod dispatch;
pub mod kernels;
pub mod traits;
pub mod types;

pub use counts::{Counts1D, Counts2D};
pub use dispatch::{histogram1d, histogram2d, supports_1d, supports_2d};
pub use kernels::{bin_partition_1d, bin_partition_2d, increment_1d, increment_2d};
pub use traits::{Histogram1DSource, Histogram2DSource};
pub use types::{Histogram1D, Histogram2D, HistogramBin};

/// Alias of [`histogram1d`]
pub use dispatch::histogram1d as histogram;

pub use parhist_core::{BinSpec, Error, Result};
