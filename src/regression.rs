//! Bootstrapped ordinary least-squares coefficient intervals.
//!
//! Each replicate draws rows with replacement from the design matrix, fits
//! OLS by solving the normal equations with a Cholesky decomposition, and
//! records every coefficient. A replicate whose resampled design is
//! singular (duplicate draws can collapse the rank) is skipped and counted
//! rather than aborting the run.

use nalgebra::{Cholesky, DMatrix, DVector};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bootstrap::replicate_seed;
use crate::config::Config;
use crate::distribution::ResampleDistribution;
use crate::error::{Error, Result};
use crate::interval::{ConfidenceInterval, percentile_interval};

/// Bootstrap distribution and percentile interval for one coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientEstimate {
    /// Coefficient position: 0 is the intercept, j >= 1 is the slope of
    /// predictor j-1.
    pub index: usize,
    /// Percentile interval at the configured coverage.
    pub interval: ConfidenceInterval,
    /// Bootstrap distribution of the coefficient, one value per successful
    /// replicate.
    pub distribution: ResampleDistribution,
}

/// Output of the regression bootstrap: one estimate per coefficient plus
/// the count of replicates skipped for rank deficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientIntervals {
    /// Estimates ordered by coefficient index (intercept first).
    pub coefficients: Vec<CoefficientEstimate>,
    /// Replicates dropped because their resampled design was singular.
    pub skipped: usize,
    /// Total replicates attempted.
    pub resamples: usize,
}

/// Bootstrap percentile intervals for OLS regression coefficients.
///
/// `predictors` holds one row per observation, each with the same number of
/// predictor values; `responses` holds the paired response values. Per
/// replicate, `resample_rows` rows are drawn with replacement (the count
/// may be smaller than the full row count, e.g. to study small-sample
/// variability) and an intercept-plus-slopes model is fit to the draw.
/// Each coefficient's distribution is then reduced to a percentile
/// interval at `config.coverage`.
///
/// # Errors
///
/// - `InsufficientRank` if `resample_rows` is smaller than the number of
///   coefficients (predictors + 1); no draw of that size can determine the
///   fit.
/// - `InvalidInput` for empty or mismatched rows, non-finite values, an
///   invalid configuration, or when every replicate had to be skipped
///   (predictors collinear in the full data).
pub fn bootstrap_regression(
    predictors: &[Vec<f64>],
    responses: &[f64],
    resample_rows: usize,
    config: &Config,
) -> Result<CoefficientIntervals> {
    config.validate()?;
    let arity = check_design(predictors, responses)?;

    let coefficients = arity + 1;
    if resample_rows < coefficients {
        return Err(Error::InsufficientRank {
            needed: coefficients,
            got: resample_rows,
        });
    }

    let root = config.root_seed();
    let n = predictors.len();
    tracing::debug!(
        rows = n,
        resample_rows,
        coefficients,
        resamples = config.resamples,
        "regression bootstrap"
    );

    #[cfg(feature = "parallel")]
    let draws: Vec<Option<Vec<f64>>> = (0..config.resamples)
        .into_par_iter()
        .map_init(
            || vec![0usize; resample_rows],
            |indices, i| {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(replicate_seed(root, i as u64));
                for slot in indices.iter_mut() {
                    *slot = rng.random_range(0..n);
                }
                fit_resample(predictors, responses, indices)
            },
        )
        .collect();

    #[cfg(not(feature = "parallel"))]
    let draws: Vec<Option<Vec<f64>>> = {
        let mut indices = vec![0usize; resample_rows];
        (0..config.resamples)
            .map(|i| {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(replicate_seed(root, i as u64));
                for slot in indices.iter_mut() {
                    *slot = rng.random_range(0..n);
                }
                fit_resample(predictors, responses, &indices)
            })
            .collect()
    };

    let skipped = draws.iter().filter(|d| d.is_none()).count();
    if skipped == config.resamples {
        return Err(Error::InvalidInput(
            "every bootstrap fit was rank-deficient; predictors are collinear".into(),
        ));
    }
    if skipped > 0 {
        tracing::warn!(
            skipped,
            resamples = config.resamples,
            "rank-deficient replicates skipped"
        );
    }

    let mut per_coefficient: Vec<Vec<f64>> =
        vec![Vec::with_capacity(config.resamples - skipped); coefficients];
    for beta in draws.into_iter().flatten() {
        for (j, value) in beta.into_iter().enumerate() {
            per_coefficient[j].push(value);
        }
    }

    let coefficients = per_coefficient
        .into_iter()
        .enumerate()
        .map(|(index, values)| {
            let interval = percentile_interval(&values, config.coverage)?;
            Ok(CoefficientEstimate {
                index,
                interval,
                distribution: ResampleDistribution::new(values),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CoefficientIntervals {
        coefficients,
        skipped,
        resamples: config.resamples,
    })
}

/// Validate the design matrix and return the predictor arity.
fn check_design(predictors: &[Vec<f64>], responses: &[f64]) -> Result<usize> {
    if predictors.is_empty() {
        return Err(Error::InvalidInput("design matrix has no rows".into()));
    }
    if predictors.len() != responses.len() {
        return Err(Error::InvalidInput(format!(
            "{} predictor rows paired with {} responses",
            predictors.len(),
            responses.len()
        )));
    }
    let arity = predictors[0].len();
    if arity == 0 {
        return Err(Error::InvalidInput(
            "predictor rows must hold at least one value".into(),
        ));
    }
    for (i, row) in predictors.iter().enumerate() {
        if row.len() != arity {
            return Err(Error::InvalidInput(format!(
                "predictor row {i} has {} values, expected {arity}",
                row.len()
            )));
        }
        if !row.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "predictor row {i} contains non-finite values"
            )));
        }
    }
    if !responses.iter().all(|y| y.is_finite()) {
        return Err(Error::InvalidInput(
            "responses contain non-finite values".into(),
        ));
    }
    Ok(arity)
}

/// Fit OLS on the rows named by `indices`; None if the draw is singular.
///
/// Solves X'X β = X'y. A failed Cholesky decomposition is the singularity
/// signal: X'X is positive definite exactly when the resampled design has
/// full column rank.
fn fit_resample(predictors: &[Vec<f64>], responses: &[f64], indices: &[usize]) -> Option<Vec<f64>> {
    let k = indices.len();
    let arity = predictors[0].len();

    let x = DMatrix::from_fn(k, arity + 1, |r, c| {
        if c == 0 {
            1.0
        } else {
            predictors[indices[r]][c - 1]
        }
    });
    let y = DVector::from_fn(k, |r, _| responses[indices[r]]);

    let xtx = x.tr_mul(&x);
    let xty = x.tr_mul(&y);

    let beta = Cholesky::new(xtx)?.solve(&xty);
    Some(beta.as_slice().to_vec())
}
