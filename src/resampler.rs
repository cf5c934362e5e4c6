//! Main `Resampler` entry point and builder.

use crate::bootstrap;
use crate::config::Config;
use crate::distribution::ResampleDistribution;
use crate::error::Result;
use crate::interval::ConfidenceInterval;
use crate::permutation;
use crate::regression::{self, CoefficientIntervals};
use crate::statistic::{Contrast, Statistic};
use crate::types::DifferenceTest;

/// Main entry point for resampling analyses.
///
/// Use the builder pattern to configure once, then run any of the
/// resampling procedures against it.
///
/// # Example
///
/// ```
/// use resample::{Resampler, statistic::mean};
///
/// let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let interval = Resampler::new()
///     .resamples(1000)
///     .seed(42)
///     .bootstrap_interval(&data, &mean)
///     .unwrap();
/// assert!(interval.lower <= interval.upper);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resampler {
    config: Config,
}

impl Resampler {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of replicates.
    pub fn resamples(mut self, n: usize) -> Self {
        self.config.resamples = n;
        self
    }

    /// Fix the root seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the coverage used for percentile intervals.
    pub fn coverage(mut self, coverage: f64) -> Self {
        self.config.coverage = coverage;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bootstrap the sampling distribution of `statistic` over `sample`.
    ///
    /// See [`bootstrap::bootstrap_distribution`].
    pub fn bootstrap<S>(&self, sample: &[f64], statistic: &S) -> Result<ResampleDistribution>
    where
        S: Statistic + Sync,
    {
        bootstrap::bootstrap_distribution(sample, statistic, &self.config)
    }

    /// Bootstrap `statistic` and reduce straight to a percentile interval
    /// at the configured coverage.
    pub fn bootstrap_interval<S>(&self, sample: &[f64], statistic: &S) -> Result<ConfidenceInterval>
    where
        S: Statistic + Sync,
    {
        self.bootstrap(sample, statistic)?
            .percentile_interval(self.config.coverage)
    }

    /// Pooled bootstrap test of a two-sample contrast.
    ///
    /// See [`bootstrap::bootstrap_difference_test`].
    pub fn bootstrap_difference<C>(&self, a: &[f64], b: &[f64], contrast: &C) -> Result<DifferenceTest>
    where
        C: Contrast + Sync,
    {
        bootstrap::bootstrap_difference_test(a, b, contrast, &self.config)
    }

    /// Permutation test of a two-sample contrast.
    ///
    /// See [`permutation::permutation_test`].
    pub fn permutation_test<C>(&self, a: &[f64], b: &[f64], contrast: &C) -> Result<DifferenceTest>
    where
        C: Contrast + Sync,
    {
        permutation::permutation_test(a, b, contrast, &self.config)
    }

    /// Bootstrap percentile intervals for OLS regression coefficients.
    ///
    /// See [`regression::bootstrap_regression`].
    pub fn regression_intervals(
        &self,
        predictors: &[Vec<f64>],
        responses: &[f64],
        resample_rows: usize,
    ) -> Result<CoefficientIntervals> {
        regression::bootstrap_regression(predictors, responses, resample_rows, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistic::mean;

    #[test]
    fn builder_setters_apply() {
        let resampler = Resampler::new().resamples(500).seed(3).coverage(0.9);
        assert_eq!(resampler.config().resamples, 500);
        assert_eq!(resampler.config().seed, Some(3));
        assert_eq!(resampler.config().coverage, 0.9);
    }

    #[test]
    fn invalid_builder_config_fails_before_resampling() {
        let result = Resampler::new()
            .resamples(0)
            .seed(1)
            .bootstrap(&[1.0, 2.0], &mean);
        assert!(result.is_err());
    }
}
