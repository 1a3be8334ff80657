//! Batch matching configuration.
//!
//! Controls how a stream of queries is spread across worker threads.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Matching configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Number of worker threads for batch matching
    pub worker_threads: usize,

    /// Batches smaller than this are matched on the calling thread
    pub parallel_threshold: usize,

    /// Whether repeated queries are answered once, in first-seen order
    pub dedupe_queries: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
            parallel_threshold: 1024,
            dedupe_queries: true,
        }
    }
}

impl MatchingConfig {
    /// Returns the number of workers to use for a batch of `batch_len` queries.
    pub fn workers_for(&self, batch_len: usize) -> usize {
        if batch_len < self.parallel_threshold {
            1
        } else {
            self.worker_threads
        }
    }
}

impl Validate for MatchingConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
