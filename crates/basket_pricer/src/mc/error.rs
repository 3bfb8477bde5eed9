//! Error types for the Monte Carlo basket pricing engine.
//!
//! Invalid inputs fail fast with a typed error instead of propagating NaN
//! through the simulation.

use thiserror::Error;

/// Configuration error raised when building a [`MonteCarloConfig`].
///
/// [`MonteCarloConfig`]: super::config::MonteCarloConfig
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside `[1, 10_000_000]`.
    #[error("invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside `[1, 10_000]`.
    #[error("invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),
}

/// Market parameter error raised when validating [`BasketParams`] or a
/// [`BasketPayoff`].
///
/// [`BasketParams`]: super::params::BasketParams
/// [`BasketPayoff`]: super::payoff::BasketPayoff
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// A spot price is non-positive or non-finite.
    #[error("invalid spot price {value} for asset {asset}: must be positive and finite")]
    InvalidSpot {
        /// Asset index (0 or 1).
        asset: usize,
        /// Offending value.
        value: f64,
    },

    /// A volatility is negative or non-finite.
    #[error("invalid volatility {value} for asset {asset}: must be non-negative and finite")]
    InvalidVolatility {
        /// Asset index (0 or 1).
        asset: usize,
        /// Offending value.
        value: f64,
    },

    /// Correlation outside `[-1, 1]`.
    #[error("invalid correlation {0}: must be in [-1, 1]")]
    InvalidCorrelation(f64),

    /// Maturity is non-positive or non-finite.
    #[error("invalid maturity {0}: must be positive and finite")]
    InvalidMaturity(f64),

    /// Risk-free rate is non-finite.
    #[error("invalid rate {0}: must be finite")]
    InvalidRate(f64),

    /// Strike is non-finite.
    #[error("invalid strike {0}: must be finite")]
    InvalidStrike(f64),

    /// Basket weights are negative, non-finite, or sum to zero.
    #[error("invalid basket weights [{0}, {1}]: must be finite, non-negative, with positive sum")]
    InvalidWeights(f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("invalid step count 20000"));
    }

    #[test]
    fn test_model_error_display() {
        let err = ModelError::InvalidCorrelation(1.5);
        assert!(err.to_string().contains("correlation"));
        assert!(err.to_string().contains("1.5"));

        let err = ModelError::InvalidSpot {
            asset: 1,
            value: -5.0,
        };
        assert!(err.to_string().contains("asset 1"));
    }
}
