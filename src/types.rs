//! Result types for the two-sample resampling tests.

use serde::{Deserialize, Serialize};

use crate::distribution::ResampleDistribution;

/// Tie-break convention used when counting resampled contrasts against the
/// observed one.
///
/// The two tests inherit different conventions from the exercise they
/// reproduce, and the choice shifts the reported p-value by up to the tie
/// mass, so each result records which rule produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailRule {
    /// A replicate counts only when `|contrast| > |observed|`.
    ///
    /// Used by the pooled bootstrap difference test.
    StrictlyGreater,

    /// A replicate counts when `contrast >= observed` (signed comparison).
    ///
    /// Used by the permutation test.
    GreaterOrEqual,
}

/// Outcome of a two-sample hypothesis test.
///
/// Produced by both the pooled bootstrap difference test and the
/// permutation test; `tail_rule` records which counting convention the
/// p-value used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceTest {
    /// Contrast evaluated on the original, unresampled samples.
    pub observed: f64,

    /// Fraction of replicates qualifying under `tail_rule`, in [0, 1].
    pub p_value: f64,

    /// Number of replicates that qualified.
    pub exceed_count: usize,

    /// Total number of replicates.
    pub resamples: usize,

    /// Counting convention the p-value used.
    pub tail_rule: TailRule,

    /// Resampled contrast values, one per replicate.
    pub distribution: ResampleDistribution,
}

impl DifferenceTest {
    pub(crate) fn from_distribution(
        observed: f64,
        values: Vec<f64>,
        tail_rule: TailRule,
    ) -> Self {
        let resamples = values.len();
        let exceed_count = match tail_rule {
            TailRule::StrictlyGreater => values
                .iter()
                .filter(|delta| delta.abs() > observed.abs())
                .count(),
            TailRule::GreaterOrEqual => values.iter().filter(|&&delta| delta >= observed).count(),
        };
        Self {
            observed,
            p_value: exceed_count as f64 / resamples as f64,
            exceed_count,
            resamples,
            tail_rule,
            distribution: ResampleDistribution::new(values),
        }
    }
}
