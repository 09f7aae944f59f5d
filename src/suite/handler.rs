//! Harness-facing suite entry points.

use tracing::debug;

use super::dataset::Dataset;
use super::error::SuiteResult;
use super::ops;
use crate::config::SuiteConfig;

/// The benchmark suite: a configured dataset plus the four operations the
/// harness times.
///
/// The harness contract is: construct the suite, invoke [`setup`] exactly
/// once, then invoke each operation repeatedly and independently. Operations
/// are pure reads over the populated dataset, so repeated invocation returns
/// identical results.
///
/// Aggregations invoked before setup see an empty dataset: min, max, and
/// average fail with the empty-sequence error while sum returns 0.
///
/// [`setup`]: AggregationSuite::setup
#[derive(Debug, Clone, Default)]
pub struct AggregationSuite {
    config: SuiteConfig,
    dataset: Dataset,
}

impl AggregationSuite {
    /// Create a suite for the given configuration. The dataset stays empty
    /// until [`setup`](Self::setup) runs.
    #[must_use]
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            dataset: Dataset::empty(),
        }
    }

    /// Create a suite with the default configuration except for `size`.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self::new(SuiteConfig::new().with_size(size))
    }

    /// The configuration this suite was built from.
    #[must_use]
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// The current dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Populate the dataset with consecutive integers `1..=size`.
    ///
    /// Deterministic and infallible: the size comes from configuration and
    /// the sequence is fixed. Re-invocation replaces the dataset with an
    /// identical one, leaving all operation results unchanged.
    pub fn setup(&mut self) {
        self.dataset = Dataset::consecutive(self.config.size);
        debug!(size = self.config.size, "dataset populated");
    }

    /// Minimum value in the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::EmptySequence`](super::SuiteError::EmptySequence)
    /// when the dataset is empty.
    pub fn min(&self) -> SuiteResult<i64> {
        ops::min(self.dataset.values())
    }

    /// Maximum value in the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::EmptySequence`](super::SuiteError::EmptySequence)
    /// when the dataset is empty.
    pub fn max(&self) -> SuiteResult<i64> {
        ops::max(self.dataset.values())
    }

    /// Arithmetic mean of the dataset as a floating-point value.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::EmptySequence`](super::SuiteError::EmptySequence)
    /// when the dataset is empty.
    pub fn average(&self) -> SuiteResult<f64> {
        ops::average(self.dataset.values())
    }

    /// Sum of the dataset elements. Returns 0 for an empty dataset.
    #[must_use]
    pub fn sum(&self) -> i64 {
        ops::sum(self.dataset.values())
    }
}
