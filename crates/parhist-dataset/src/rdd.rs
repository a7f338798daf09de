//! Resilient-dataset style collection with an element-wise `aggregate`

use crate::partition::slice_evenly;
use parhist_core::{ExecutionConfig, Executor, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// An immutable collection split into a fixed number of partitions
///
/// Partition storage is shared between clones and between an `Rdd` and the
/// collections derived from it with [`Rdd::map`].
#[derive(Debug, Clone)]
pub struct Rdd<T> {
    partitions: Arc<Vec<Vec<T>>>,
    executor: Executor,
}

impl<T> Rdd<T>
where
    T: Send + Sync,
{
    /// Distribute `data` over `num_partitions` partitions of near-equal size
    pub fn parallelize(data: Vec<T>, num_partitions: usize) -> Result<Self> {
        Ok(Self::from_partitions(slice_evenly(data, num_partitions)?))
    }

    /// Distribute `data` using the partition count and executor from `config`
    pub fn parallelize_with(data: Vec<T>, config: &ExecutionConfig) -> Result<Self> {
        let executor = config.build_executor()?;
        Ok(Self::parallelize(data, config.default_partitions)?.with_executor(executor))
    }

    /// Wrap pre-partitioned data as-is
    pub fn from_partitions(partitions: Vec<Vec<T>>) -> Self {
        Self {
            partitions: Arc::new(partitions),
            executor: Executor::global(),
        }
    }

    /// Run this collection's tasks on `executor`
    pub fn with_executor(mut self, executor: Executor) -> Self {
        self.executor = executor;
        self
    }

    /// The executor running this collection's tasks
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Number of partitions
    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Partition contents
    pub fn partitions(&self) -> &[Vec<T>] {
        &self.partitions
    }

    /// Number of elements across all partitions
    pub fn count(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }

    /// Check if the collection holds no elements
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Transform every element, keeping the partitioning
    pub fn map<U, F>(&self, f: F) -> Rdd<U>
    where
        U: Send + Sync,
        F: Fn(&T) -> U + Sync + Send,
    {
        let partitions: Vec<Vec<U>> = self
            .executor
            .map_partitions(&self.partitions, |partition| partition.iter().map(&f).collect());
        Rdd {
            partitions: Arc::new(partitions),
            executor: self.executor.clone(),
        }
    }

    /// Aggregate every element into an accumulator
    ///
    /// Each partition is folded with `seq_op` starting from its own clone of
    /// `zero`, and the per-partition results are combined with `comb_op`,
    /// again seeded with `zero`. `comb_op` must be associative and commutative,
    /// and `zero` must be its identity.
    #[instrument(skip_all, fields(partitions = self.num_partitions()))]
    pub fn aggregate<A, S, C>(&self, zero: A, seq_op: S, comb_op: C) -> A
    where
        A: Clone + Send + Sync,
        S: Fn(A, &T) -> A + Sync + Send,
        C: Fn(A, A) -> A + Sync + Send,
    {
        let partials = self.executor.map_partitions(&self.partitions, |partition| {
            partition.iter().fold(zero.clone(), &seq_op)
        });
        debug!("combining {} partition results", partials.len());

        self.executor.reduce(partials, || zero.clone(), comb_op)
    }

    /// Fold every element with a single associative, commutative operator
    pub fn fold<F>(&self, zero: T, op: F) -> T
    where
        T: Clone,
        F: Fn(T, T) -> T + Sync + Send,
    {
        self.aggregate(zero, |acc, x| op(acc, x.clone()), &op)
    }

    /// Gather all elements in partition order
    pub fn collect(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.partitions.iter().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallelize() {
        let rdd = Rdd::parallelize((0..10).collect::<Vec<i64>>(), 4).unwrap();
        assert_eq!(rdd.num_partitions(), 4);
        assert_eq!(rdd.count(), 10);
        assert_eq!(rdd.collect(), (0..10).collect::<Vec<_>>());
        assert!(Rdd::parallelize(vec![1.0], 0).is_err());
    }

    #[test]
    fn test_aggregate_sum_and_count() {
        let rdd = Rdd::parallelize((1..=100).map(f64::from).collect::<Vec<_>>(), 7).unwrap();
        let (sum, n) = rdd.aggregate(
            (0.0, 0usize),
            |(s, n), &x| (s + x, n + 1),
            |(s1, n1), (s2, n2)| (s1 + s2, n1 + n2),
        );
        assert_eq!(sum, 5050.0);
        assert_eq!(n, 100);
    }

    #[test]
    fn test_aggregate_empty_returns_zero() {
        let rdd: Rdd<i32> = Rdd::from_partitions(vec![]);
        assert_eq!(rdd.aggregate(42, |a, _| a + 1, |a, b| a.max(b)), 42);

        let rdd = Rdd::parallelize(Vec::<i32>::new(), 3).unwrap();
        assert!(rdd.is_empty());
        assert_eq!(rdd.aggregate(0, |a, &x| a + x, |a, b| a + b), 0);
    }

    #[test]
    fn test_map_keeps_partitioning() {
        let rdd = Rdd::parallelize(vec![1, 2, 3, 4, 5], 2).unwrap();
        let doubled = rdd.map(|x| x * 2);
        assert_eq!(doubled.num_partitions(), 2);
        assert_eq!(doubled.partitions()[0], vec![2, 4]);
        assert_eq!(doubled.collect(), vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_fold() {
        let rdd = Rdd::parallelize((1..=10).collect::<Vec<u64>>(), 3).unwrap();
        assert_eq!(rdd.fold(0, |a, b| a + b), 55);
    }

    #[test]
    fn test_parallelize_with_config() {
        let config = ExecutionConfig::new().with_default_partitions(5).with_num_threads(2);
        let rdd = Rdd::parallelize_with((0..20).collect::<Vec<i32>>(), &config).unwrap();
        assert_eq!(rdd.num_partitions(), 5);
        assert_eq!(rdd.fold(0, |a, b| a + b), 190);
    }
}
