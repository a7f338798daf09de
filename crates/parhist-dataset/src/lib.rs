//! Partitioned in-process collections with parallel reductions
//!
//! Two collection types with two different reduction primitives:
//!
//! - [`Rdd`]: `aggregate(zero, seq_op, comb_op)` folds elements one at a
//!   time inside each partition, then merges the partition accumulators.
//! - [`Bag`]: `reduction(perpartition, aggregate)` hands each task a whole
//!   partition, then merges partial results in a bounded-fan-in tree.
//!
//! Both are immutable and cheap to clone. Tasks run on the collection's
//! [`Executor`](parhist_core::Executor); a panic inside a task propagates to
//! the caller.
//!
//! # Example
//!
//! ```rust
//! use parhist_dataset::{Bag, Rdd};
//!
//! let rdd = Rdd::parallelize((1..=10).collect::<Vec<u64>>(), 3).unwrap();
//! let total = rdd.aggregate(0u64, |acc, &x| acc + x, |a, b| a + b);
//! assert_eq!(total, 55);
//!
//! let bag = Bag::from_sequence((1..=10).collect::<Vec<u64>>(), 4).unwrap();
//! let total = bag.reduction(|p| p.iter().sum::<u64>(), |partials| partials.into_iter().sum());
//! assert_eq!(total, 55);
//! ```

mod bag;
pub mod partition;
mod rdd;

pub use bag::Bag;
pub use rdd::Rdd;

pub use parhist_core::{Error, ExecutionConfig, Executor, Result};
