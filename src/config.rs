//! # Engine configuration
//!
//! Numerical threshold and degree of parallelism of a tableau. Whether the threshold should
//! scale with the magnitude of the problem is up to the caller.
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::data::number_types::traits::Real;
use crate::error::{EngineError, EngineResult};

/// Magnitude at or below which a pivot or a ratio test denominator is treated as zero.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Configuration of a tableau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<F> {
    /// Values with an absolute value at or below this threshold are treated as zero.
    pub epsilon: F,
    /// Number of worker threads, or `0` to run on rayon's global pool.
    pub nr_threads: usize,
}

impl<F: Real> Default for EngineConfig<F> {
    fn default() -> Self {
        Self {
            epsilon: F::from(DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            nr_threads: 0,
        }
    }
}

impl<F: Real> EngineConfig<F> {
    /// Replace the zero threshold.
    pub fn with_epsilon(self, epsilon: F) -> Self {
        Self { epsilon, ..self }
    }

    /// Run on a dedicated pool of `nr_threads` workers.
    pub fn with_nr_threads(self, nr_threads: usize) -> Self {
        Self { nr_threads, ..self }
    }

    /// Check that the configuration can be used.
    ///
    /// The threshold must be a finite number at or above zero. A threshold of zero only rejects
    /// pivots that are exactly zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.epsilon.is_finite() && self.epsilon >= F::zero() {
            Ok(())
        } else {
            Err(EngineError::InvalidConfiguration(format!(
                "epsilon should be finite and not negative, got {}", self.epsilon,
            )))
        }
    }

    /// Build the dedicated thread pool, if one is requested.
    pub(crate) fn build_pool(&self) -> EngineResult<Option<ThreadPool>> {
        if self.nr_threads == 0 {
            return Ok(None);
        }

        ThreadPoolBuilder::new()
            .num_threads(self.nr_threads)
            .thread_name(|index| format!("tableau-worker-{}", index))
            .build()
            .map(Some)
            .map_err(|error| EngineError::InvalidConfiguration(error.to_string()))
    }
}
