//! Error types for resampling runs.

/// Error returned when a resampling run cannot proceed.
///
/// All errors are reported before or instead of producing results; there are
/// no partial-failure or retry semantics. Each replicate is a pure
/// computation given its seed, so a run either validates and completes or
/// fails up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input rejected before any resampling ran.
    ///
    /// Raised for empty samples, non-finite observations, a zero resample
    /// count, coverage outside (0, 1), or mismatched design-matrix rows.
    InvalidInput(String),

    /// Regression resample too small to estimate the requested coefficients.
    ///
    /// A resample of `got` rows cannot determine `needed` coefficients
    /// (intercept plus one slope per predictor); the normal equations are
    /// underdetermined regardless of which rows are drawn.
    InsufficientRank {
        /// Number of coefficients the fit must estimate.
        needed: usize,
        /// Number of rows drawn per replicate.
        got: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            Self::InsufficientRank { needed, got } => write!(
                f,
                "resample of {got} rows cannot determine {needed} regression coefficients"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let err = Error::InvalidInput("sample is empty".into());
        assert_eq!(err.to_string(), "invalid input: sample is empty");
    }

    #[test]
    fn display_insufficient_rank() {
        let err = Error::InsufficientRank { needed: 3, got: 2 };
        assert_eq!(
            err.to_string(),
            "resample of 2 rows cannot determine 3 regression coefficients"
        );
    }
}
