//! # resample
//!
//! Bootstrap and permutation resampling for statistical inference.
//!
//! This crate builds empirical sampling distributions by repeated random
//! resampling and reduces them to the usual inference outputs:
//! - Percentile confidence intervals for any single-sample statistic
//! - Bootstrap and permutation p-values for two-sample contrasts
//! - Bootstrap intervals for OLS regression coefficients
//!
//! Every replicate derives its own RNG from a counter-mixed seed, so runs
//! are reproducible under a fixed seed and the `parallel` feature (rayon)
//! changes wall-clock time, never results.
//!
//! ## Quick Start
//!
//! ```
//! use resample::{Resampler, statistic::{mean, mean_difference}};
//!
//! let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let resampler = Resampler::new().resamples(1000).seed(42);
//!
//! // Percentile interval for the mean.
//! let interval = resampler.bootstrap_interval(&sample, &mean).unwrap();
//! assert!(interval.lower <= interval.upper);
//!
//! // Permutation test of a group difference.
//! let treated = [9.0, 8.5, 9.5, 10.0];
//! let control = [5.0, 5.5, 6.0, 4.5];
//! let test = resampler
//!     .permutation_test(&treated, &control, &mean_difference)
//!     .unwrap();
//! assert!(test.p_value <= 1.0);
//! ```
//!
//! ## Choosing a statistic
//!
//! The engines accept any `Fn(&[f64]) -> f64` as a [`statistic::Statistic`]
//! and any `Fn(&[f64], &[f64]) -> f64` as a [`statistic::Contrast`];
//! [`statistic::mean`], [`statistic::percentile`], and
//! [`statistic::mean_difference`] cover the common cases.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod resampler;
mod types;

// Functional modules
pub mod bootstrap;
pub mod distribution;
pub mod interval;
pub mod permutation;
pub mod regression;
pub mod statistic;

// Re-exports for public API
pub use bootstrap::{bootstrap_difference_test, bootstrap_distribution, replicate_seed};
pub use config::Config;
pub use distribution::ResampleDistribution;
pub use error::{Error, Result};
pub use interval::{ConfidenceInterval, percentile_interval};
pub use permutation::permutation_test;
pub use regression::{CoefficientEstimate, CoefficientIntervals, bootstrap_regression};
pub use resampler::Resampler;
pub use types::{DifferenceTest, TailRule};
