//! Market and dynamics parameters for the two-asset basket.

use super::error::ModelError;

/// Parameters for correlated two-asset Geometric Brownian Motion.
///
/// # Model
///
/// Each asset follows risk-neutral GBM:
/// ```text
/// dS_i = r S_i dt + σ_i S_i dW_i,    d⟨W_1, W_2⟩ = ρ dt
/// ```
///
/// The correlation is induced at simulation time by blending the second
/// asset's shocks with the first's: `z_2 = ρ·z_1 + √(1 − ρ²)·z_indep`.
///
/// # Examples
///
/// ```rust
/// use basket_pricer::mc::BasketParams;
///
/// let params = BasketParams {
///     spots: [100.0, 100.0],
///     rate: 0.05,
///     volatilities: [0.2, 0.2],
///     correlation: 0.5,
///     maturity: 1.0,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasketParams {
    /// Initial spot prices, one per asset.
    pub spots: [f64; 2],
    /// Risk-free rate (annualised).
    pub rate: f64,
    /// Volatilities (annualised), one per asset.
    pub volatilities: [f64; 2],
    /// Correlation between the two assets' driving shocks, in `[-1, 1]`.
    pub correlation: f64,
    /// Time to maturity in years.
    pub maturity: f64,
}

impl BasketParams {
    /// Creates new basket parameters.
    #[inline]
    pub fn new(
        spots: [f64; 2],
        rate: f64,
        volatilities: [f64; 2],
        correlation: f64,
        maturity: f64,
    ) -> Self {
        Self {
            spots,
            rate,
            volatilities,
            correlation,
            maturity,
        }
    }

    /// Validates the parameters, failing fast on out-of-domain inputs.
    ///
    /// Zero volatility (a deterministic asset) and `ρ = ±1` (perfectly
    /// (anti)correlated shocks) are valid.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for non-positive or non-finite spots, negative
    /// volatilities, `|ρ| > 1`, non-positive maturity, or a non-finite rate.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (asset, &spot) in self.spots.iter().enumerate() {
            if !(spot > 0.0 && spot.is_finite()) {
                return Err(ModelError::InvalidSpot { asset, value: spot });
            }
        }
        for (asset, &vol) in self.volatilities.iter().enumerate() {
            if !(vol >= 0.0 && vol.is_finite()) {
                return Err(ModelError::InvalidVolatility { asset, value: vol });
            }
        }
        if !(-1.0..=1.0).contains(&self.correlation) {
            return Err(ModelError::InvalidCorrelation(self.correlation));
        }
        if !(self.maturity > 0.0 && self.maturity.is_finite()) {
            return Err(ModelError::InvalidMaturity(self.maturity));
        }
        if !self.rate.is_finite() {
            return Err(ModelError::InvalidRate(self.rate));
        }
        Ok(())
    }

    /// Returns the present-value discount factor `exp(−r·T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

impl Default for BasketParams {
    fn default() -> Self {
        Self {
            spots: [100.0, 100.0],
            rate: 0.05,
            volatilities: [0.2, 0.2],
            correlation: 0.5,
            maturity: 1.0,
        }
    }
}
