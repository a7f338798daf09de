//! Task execution for partitioned collections
//!
//! An [`Executor`] runs one task per partition and combines the results. With
//! the `parallel` feature it dispatches onto rayon, either a dedicated pool or
//! the global one; without it every task runs on the calling thread.

use crate::Result;

#[cfg(feature = "parallel")]
use std::sync::Arc;

/// Execution strategy of an [`Executor`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process partitions sequentially
    Sequential,
    /// Process partitions in parallel
    Parallel,
}

/// Runs per-partition tasks and reductions
#[derive(Clone, Debug, Default)]
pub struct Executor {
    #[cfg(feature = "parallel")]
    thread_pool: Option<Arc<rayon::ThreadPool>>,
}

impl Executor {
    /// Executor backed by rayon's global pool (or the calling thread)
    pub fn global() -> Self {
        Self::default()
    }

    /// Get the execution strategy
    pub fn strategy(&self) -> ExecutionStrategy {
        if cfg!(feature = "parallel") {
            ExecutionStrategy::Parallel
        } else {
            ExecutionStrategy::Sequential
        }
    }
}

#[cfg(feature = "parallel")]
impl Executor {
    /// Executor backed by an existing thread pool
    pub fn with_thread_pool(pool: Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Executor with a dedicated pool of `num_threads` threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("parhist-worker-{i}"))
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        tracing::debug!(num_threads, "built dedicated thread pool");
        Ok(Self::with_thread_pool(Arc::new(pool)))
    }

    /// Number of threads tasks may run on
    pub fn num_threads(&self) -> usize {
        match &self.thread_pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Execute a function in the executor's context
    pub fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    /// Apply `f` to every partition, returning results in partition order
    pub fn map_partitions<'a, U, F, R>(&self, partitions: &'a [U], f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a U) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        self.execute(|| partitions.par_iter().map(f).collect())
    }

    /// Apply `f` to every owned item, returning results in input order
    pub fn map_owned<U, F, R>(&self, items: Vec<U>, f: F) -> Vec<R>
    where
        U: Send,
        F: Fn(U) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        self.execute(|| items.into_par_iter().map(f).collect())
    }

    /// Combine `items` with an associative, commutative `op`
    ///
    /// Returns `identity()` when `items` is empty.
    pub fn reduce<R, ID, OP>(&self, items: Vec<R>, identity: ID, op: OP) -> R
    where
        R: Send,
        ID: Fn() -> R + Sync + Send,
        OP: Fn(R, R) -> R + Sync + Send,
    {
        use rayon::prelude::*;

        self.execute(|| items.into_par_iter().reduce(identity, op))
    }
}

#[cfg(not(feature = "parallel"))]
impl Executor {
    /// Without the `parallel` feature there is no pool to size
    pub fn with_num_threads(_num_threads: usize) -> Result<Self> {
        Ok(Self::default())
    }

    /// Number of threads tasks may run on
    pub fn num_threads(&self) -> usize {
        1
    }

    /// Execute a function in the executor's context
    pub fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        f()
    }

    /// Apply `f` to every partition, returning results in partition order
    pub fn map_partitions<'a, U, F, R>(&self, partitions: &'a [U], f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a U) -> R + Sync + Send,
        R: Send,
    {
        partitions.iter().map(f).collect()
    }

    /// Apply `f` to every owned item, returning results in input order
    pub fn map_owned<U, F, R>(&self, items: Vec<U>, f: F) -> Vec<R>
    where
        U: Send,
        F: Fn(U) -> R + Sync + Send,
        R: Send,
    {
        items.into_iter().map(f).collect()
    }

    /// Combine `items` with an associative, commutative `op`
    ///
    /// Returns `identity()` when `items` is empty.
    pub fn reduce<R, ID, OP>(&self, items: Vec<R>, identity: ID, op: OP) -> R
    where
        R: Send,
        ID: Fn() -> R + Sync + Send,
        OP: Fn(R, R) -> R + Sync + Send,
    {
        items.into_iter().fold(identity(), op)
    }
}
