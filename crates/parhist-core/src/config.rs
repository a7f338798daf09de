//! Configuration for partitioned execution

use crate::execution::Executor;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of partitions used when a collection is built from a flat sequence
pub const DEFAULT_PARTITIONS: usize = 8;

/// Default fan-in of one tree-reduction step
pub const DEFAULT_SPLIT_EVERY: usize = 8;

/// How collections are partitioned and where their tasks run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Size of a dedicated thread pool; `None` uses rayon's global pool
    pub num_threads: Option<usize>,

    /// Partition count for collections built without an explicit one
    pub default_partitions: usize,

    /// Maximum number of partial results combined by one reduction step
    pub split_every: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            default_partitions: DEFAULT_PARTITIONS,
            split_every: DEFAULT_SPLIT_EVERY,
        }
    }
}

impl ExecutionConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Run tasks on a dedicated pool of `num_threads` threads
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Set the default partition count
    pub fn with_default_partitions(mut self, partitions: usize) -> Self {
        self.default_partitions = partitions;
        self
    }

    /// Set the reduction fan-in
    pub fn with_split_every(mut self, split_every: usize) -> Self {
        self.split_every = split_every;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(Error::InvalidParameter(
                "num_threads must be positive".to_string(),
            ));
        }
        if self.default_partitions == 0 {
            return Err(Error::InvalidParameter(
                "default_partitions must be positive".to_string(),
            ));
        }
        if self.split_every < 2 {
            return Err(Error::InvalidParameter(format!(
                "split_every must be at least 2, got {}",
                self.split_every
            )));
        }
        Ok(())
    }

    /// Build the executor described by this configuration
    pub fn build_executor(&self) -> Result<Executor> {
        self.validate()?;
        match self.num_threads {
            Some(n) => Executor::with_num_threads(n),
            None => Ok(Executor::global()),
        }
    }
}
