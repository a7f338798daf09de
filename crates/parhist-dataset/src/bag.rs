//! Bag style collection with a partition-wise `reduction`

use crate::partition::chunk_by_size;
use parhist_core::{Error, ExecutionConfig, Executor, Result, DEFAULT_SPLIT_EVERY};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// An unordered-by-contract collection processed one whole partition at a time
///
/// [`Bag::reduction`] hands each task a full partition slice instead of one
/// element, then merges partial results in a tree whose fan-in is bounded by
/// `split_every`.
#[derive(Debug, Clone)]
pub struct Bag<T> {
    partitions: Arc<Vec<Vec<T>>>,
    executor: Executor,
    split_every: usize,
}

impl<T> Bag<T>
where
    T: Send + Sync,
{
    /// Build a bag from `data`, `partition_size` elements per partition
    pub fn from_sequence(data: Vec<T>, partition_size: usize) -> Result<Self> {
        Ok(Self::from_partitions(chunk_by_size(data, partition_size)?))
    }

    /// Build a bag of at most `config.default_partitions` equal-sized partitions
    ///
    /// Partitions hold `ceil(len / default_partitions)` elements each, the last
    /// possibly fewer, so small inputs can end up with fewer partitions.
    pub fn from_sequence_with(data: Vec<T>, config: &ExecutionConfig) -> Result<Self> {
        let executor = config.build_executor()?;
        let partition_size = data.len().div_ceil(config.default_partitions).max(1);
        Ok(Self::from_sequence(data, partition_size)?
            .with_executor(executor)
            .with_split_every(config.split_every)?)
    }

    /// Wrap pre-partitioned data; an empty list becomes one empty partition
    pub fn from_partitions(mut partitions: Vec<Vec<T>>) -> Self {
        if partitions.is_empty() {
            partitions.push(Vec::new());
        }
        Self {
            partitions: Arc::new(partitions),
            executor: Executor::global(),
            split_every: DEFAULT_SPLIT_EVERY,
        }
    }

    /// Run this collection's tasks on `executor`
    pub fn with_executor(mut self, executor: Executor) -> Self {
        self.executor = executor;
        self
    }

    /// Set the maximum number of partials combined by one reduction step
    pub fn with_split_every(mut self, split_every: usize) -> Result<Self> {
        if split_every < 2 {
            return Err(Error::InvalidParameter(format!(
                "split_every must be at least 2, got {split_every}"
            )));
        }
        self.split_every = split_every;
        Ok(self)
    }

    /// The executor running this collection's tasks
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Reduction fan-in
    pub fn split_every(&self) -> usize {
        self.split_every
    }

    /// Number of partitions
    pub fn npartitions(&self) -> usize {
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

    /// Transform every element, keeping the partitioning
    pub fn map<U, F>(&self, f: F) -> Bag<U>
    where
        U: Send + Sync,
        F: Fn(&T) -> U + Sync + Send,
    {
        let partitions: Vec<Vec<U>> = self
            .executor
            .map_partitions(&self.partitions, |partition| partition.iter().map(&f).collect());
        Bag {
            partitions: Arc::new(partitions),
            executor: self.executor.clone(),
            split_every: self.split_every,
        }
    }

    /// Reduce the bag with a per-partition function and a list combiner
    ///
    /// `perpartition` runs once per partition. Its results are grouped into
    /// lists of at most `split_every` and passed to `aggregate`, level by
    /// level, until one list remains; `aggregate` of that list is the result.
    /// `aggregate` is therefore applied at least once, even to a single
    /// partition's result.
    #[instrument(skip_all, fields(partitions = self.npartitions(), split_every = self.split_every))]
    pub fn reduction<R, P, A>(&self, perpartition: P, aggregate: A) -> R
    where
        R: Send,
        P: Fn(&[T]) -> R + Sync + Send,
        A: Fn(Vec<R>) -> R + Sync + Send,
    {
        let mut partials = self
            .executor
            .map_partitions(&self.partitions, |partition| perpartition(partition.as_slice()));

        let mut depth = 0;
        while partials.len() > self.split_every {
            let groups = group_into(partials, self.split_every);
            trace!(depth, groups = groups.len(), "combining reduction level");
            partials = self.executor.map_owned(groups, &aggregate);
            depth += 1;
        }
        debug!(depth, "final aggregate over {} partials", partials.len());

        self.executor.execute(|| aggregate(partials))
    }

    /// Gather all elements in partition order
    pub fn compute(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.partitions.iter().flatten().cloned().collect()
    }
}

/// Move `items` into consecutive groups of at most `size`
fn group_into<R>(items: Vec<R>, size: usize) -> Vec<Vec<R>> {
    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        groups.push(items.by_ref().take(size).collect::<Vec<R>>());
    }
    groups
}
