//! Configuration shared by all resampling entry points.

use rand::Rng;

use crate::error::{Error, Result};

/// Configuration options for resampling runs.
///
/// The same configuration drives the one-sample bootstrap, the pooled
/// two-sample tests, and the regression bootstrap. Validation happens once,
/// before any replicate runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of bootstrap or permutation replicates.
    ///
    /// Percentile interval ranks are only meaningful for reasonably large
    /// counts; 1000 or more is recommended. Default: 10,000.
    pub resamples: usize,

    /// Root seed for the replicate RNGs.
    ///
    /// Replicate `i` always derives its own generator from
    /// `replicate_seed(root, i)`, so a fixed seed reproduces the full
    /// distribution regardless of execution order. When `None`, a root seed
    /// is drawn from the process RNG. Default: None.
    pub seed: Option<u64>,

    /// Target coverage for percentile confidence intervals, in (0, 1).
    ///
    /// Default: 0.95.
    pub coverage: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resamples: 10_000,
            seed: None,
            coverage: 0.95,
        }
    }
}

impl Config {
    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.resamples == 0 {
            return Err(Error::InvalidInput(
                "resample count must be positive".into(),
            ));
        }
        if !(self.coverage > 0.0 && self.coverage < 1.0) {
            return Err(Error::InvalidInput(format!(
                "coverage must lie strictly between 0 and 1, got {}",
                self.coverage
            )));
        }
        Ok(())
    }

    /// Resolve the root seed, drawing one from the process RNG if unset.
    pub(crate) fn root_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}
