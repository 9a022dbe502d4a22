//! Parallel multi-batch validation
//!
//! Each batch is independent, so a run over many batches fans out across a
//! rayon pool. Reports come back in input order.

use crate::error::{Error, Result};
use crate::orchestrator::validate_batch;
use crate::report::ValidationReport;
use mcq_qa_core::{Protocol, Question};
use rayon::prelude::*;

/// Worker-pool configuration for multi-batch runs
#[derive(Debug, Clone, Copy)]
pub struct ParallelConfig {
    /// Number of worker threads
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get().min(4),
        }
    }
}

impl ParallelConfig {
    /// Set the worker count
    #[must_use]
    pub const fn with_num_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }
}

/// Validate many batches against one protocol on the global pool
#[must_use]
pub fn validate_batches(batches: &[Vec<Question>], protocol: &Protocol) -> Vec<ValidationReport> {
    batches
        .par_iter()
        .map(|batch| validate_batch(batch, protocol))
        .collect()
}

/// Validate many batches on a dedicated pool of the configured size
///
/// # Errors
///
/// Returns an error if the worker pool cannot be constructed.
pub fn validate_batches_with(
    config: ParallelConfig,
    batches: &[Vec<Question>],
    protocol: &Protocol,
) -> Result<Vec<ValidationReport>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_workers)
        .build()
        .map_err(|e| Error::WorkerPool(e.to_string()))?;
    Ok(pool.install(|| validate_batches(batches, protocol)))
}
