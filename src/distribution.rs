//! The empirical sampling distribution of a resampled statistic.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::{self, ConfidenceInterval};
use crate::statistic;

/// Empirical sampling distribution of a statistic: one value per replicate.
///
/// Built by the resampling engines and immutable afterwards. Replicate
/// order carries no meaning; every summary here depends only on the
/// multiset of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampleDistribution(Vec<f64>);

impl ResampleDistribution {
    /// Wrap replicate statistic values into a distribution.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of replicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the distribution holds no replicates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The replicate values, in replicate-index order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume the distribution, returning the replicate values.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Mean of the distribution, the bootstrap estimate of the statistic.
    pub fn mean(&self) -> f64 {
        statistic::mean(&self.0)
    }

    /// Standard deviation of the distribution, which estimates the standard
    /// error of the statistic.
    pub fn std_error(&self) -> f64 {
        statistic::std_dev(&self.0)
    }

    /// Percentile confidence interval at the given coverage.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the distribution is empty or `coverage` is outside
    /// (0, 1).
    pub fn percentile_interval(&self, coverage: f64) -> Result<ConfidenceInterval> {
        interval::percentile_interval(&self.0, coverage)
    }
}

impl From<Vec<f64>> for ResampleDistribution {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_of_known_values() {
        let dist = ResampleDistribution::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(dist.len(), 4);
        assert_eq!(dist.mean(), 2.5);
        assert!(dist.std_error() > 0.0);
    }

    #[test]
    fn constant_distribution_has_zero_std_error() {
        let dist = ResampleDistribution::new(vec![7.0; 100]);
        assert_eq!(dist.std_error(), 0.0);
        let interval = dist.percentile_interval(0.95).unwrap();
        assert_eq!(interval.lower, 7.0);
        assert_eq!(interval.upper, 7.0);
    }

    #[test]
    fn empty_distribution_interval_fails() {
        let dist = ResampleDistribution::new(Vec::new());
        assert!(dist.is_empty());
        assert!(dist.percentile_interval(0.95).is_err());
    }
}
