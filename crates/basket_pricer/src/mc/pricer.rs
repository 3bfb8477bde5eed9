//! Monte Carlo pricing engine for two-asset basket options.
//!
//! [`BasketPricer`] coordinates:
//! 1. Random number generation (via [`SimRng`](crate::rng::SimRng))
//! 2. Correlated path generation (via
//!    [`generate_correlated_gbm_paths`](super::paths::generate_correlated_gbm_paths))
//! 3. Payoff computation (via [`compute_payoffs`](super::payoff::compute_payoffs))
//! 4. Discounting and aggregation
//!
//! The pricer maintains an internal [`BasketWorkspace`] that is reused across
//! pricing calls, so repeated valuations do not reallocate.

use super::config::MonteCarloConfig;
use super::error::{ConfigError, ModelError};
use super::params::BasketParams;
use super::paths::generate_correlated_gbm_paths;
use super::payoff::{compute_payoffs, BasketPayoff};
use super::workspace::BasketWorkspace;
use crate::rng::SimRng;

/// Spot bump, relative, for delta estimation.
const SPOT_BUMP_REL: f64 = 0.01;
/// Volatility bump, absolute, for vega estimation.
const VOL_BUMP_ABS: f64 = 0.01;
/// Correlation bump, absolute, for cega estimation.
const CORR_BUMP: f64 = 0.01;

/// Monte Carlo pricing result.
///
/// # Examples
///
/// ```rust
/// use basket_pricer::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
/// };
/// println!("{:.4} +/- {:.4}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Basket sensitivities from bump-and-revalue with common random numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasketSensitivities {
    /// Delta per underlying spot, in input order.
    pub delta: [f64; 2],
    /// Parallel volatility sensitivity.
    pub vega: f64,
    /// Correlation sensitivity.
    pub cega: f64,
}

/// Monte Carlo pricing engine for two-asset basket options.
///
/// Owns its configuration, workspace, and seeded RNG; the same seed always
/// reproduces the same estimate, and distinct pricers share no state.
///
/// # Examples
///
/// ```rust
/// use basket_pricer::mc::{BasketParams, BasketPayoff, BasketPricer, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(100)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut pricer = BasketPricer::new(config).unwrap();
/// let result = pricer
///     .price(BasketParams::default(), BasketPayoff::call(100.0))
///     .unwrap();
///
/// println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
/// ```
pub struct BasketPricer {
    config: MonteCarloConfig,
    workspace: BasketWorkspace,
    rng: SimRng,
}

impl BasketPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed().unwrap_or(0);
        let workspace = BasketWorkspace::new(config.n_paths(), config.n_steps());
        let rng = SimRng::from_seed(seed);

        Ok(Self {
            config,
            workspace,
            rng,
        })
    }

    /// Creates a new pricer with a specific seed, overriding the config seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn with_seed(config: MonteCarloConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let workspace = BasketWorkspace::new(config.n_paths(), config.n_steps());
        let rng = SimRng::from_seed(seed);

        Ok(Self {
            config,
            workspace,
            rng,
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Resets workspace and RNG to the original seed.
    pub fn reset(&mut self) {
        self.workspace.reset();
        self.rng = SimRng::from_seed(self.config.seed().unwrap_or(0));
    }

    /// Resets workspace and re-seeds the RNG.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.workspace.reset();
        self.rng = SimRng::from_seed(seed);
    }

    /// Prices a European basket option.
    ///
    /// Generates correlated GBM paths for both assets, evaluates the basket
    /// payoff on the terminal prices, and returns the discounted mean with
    /// its standard error.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the market parameters or payoff are invalid.
    pub fn price(
        &mut self,
        params: BasketParams,
        payoff: BasketPayoff,
    ) -> Result<PricingResult, ModelError> {
        params.validate()?;
        payoff.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();

        self.workspace.ensure_capacity(n_paths, n_steps);

        self.rng.fill_normal(self.workspace.randoms_a_mut());
        self.rng.fill_normal(self.workspace.randoms_b_mut());

        generate_correlated_gbm_paths(&mut self.workspace, params, n_paths, n_steps);
        compute_payoffs(&mut self.workspace, payoff, n_paths, n_steps);

        let payoffs = self.workspace.payoffs();
        let mean = payoffs.iter().sum::<f64>() / n_paths as f64;

        // Sample standard error; a single path carries no spread information.
        let std_error = if n_paths > 1 {
            let variance =
                payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n_paths - 1) as f64;
            (variance / n_paths as f64).sqrt()
        } else {
            0.0
        };

        let discount = params.discount_factor();

        Ok(PricingResult {
            price: mean * discount,
            std_error: std_error * discount,
        })
    }

    /// Computes basket sensitivities via bump-and-revalue.
    ///
    /// All revaluations reuse the same seed (common random numbers), so the
    /// finite differences are free of cross-bump Monte Carlo noise. The
    /// pricer's RNG is left re-seeded to that seed on return.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the market parameters or payoff are invalid.
    pub fn sensitivities(
        &mut self,
        params: BasketParams,
        payoff: BasketPayoff,
    ) -> Result<BasketSensitivities, ModelError> {
        params.validate()?;
        payoff.validate()?;

        let seed = self.rng.seed();

        let mut delta = [0.0; 2];
        for asset in 0..2 {
            let bump = (SPOT_BUMP_REL * params.spots[asset]).max(0.01);

            let mut up = params;
            up.spots[asset] += bump;
            let mut down = params;
            down.spots[asset] -= bump;

            self.reset_with_seed(seed);
            let price_up = self.price(up, payoff)?.price;
            self.reset_with_seed(seed);
            let price_down = self.price(down, payoff)?.price;

            delta[asset] = (price_up - price_down) / (2.0 * bump);
        }

        // Parallel vega: bump both volatilities together.
        let mut vol_up = params;
        let mut vol_down = params;
        for asset in 0..2 {
            vol_up.volatilities[asset] += VOL_BUMP_ABS;
            vol_down.volatilities[asset] = (vol_down.volatilities[asset] - VOL_BUMP_ABS).max(0.0);
        }

        self.reset_with_seed(seed);
        let price_vol_up = self.price(vol_up, payoff)?.price;
        self.reset_with_seed(seed);
        let price_vol_down = self.price(vol_down, payoff)?.price;
        let vega = (price_vol_up - price_vol_down) / (2.0 * VOL_BUMP_ABS);

        // Cega: bump correlation, clamped to stay inside [-1, 1].
        let rho_up = (params.correlation + CORR_BUMP).min(1.0);
        let rho_down = (params.correlation - CORR_BUMP).max(-1.0);

        let mut corr_up = params;
        corr_up.correlation = rho_up;
        let mut corr_down = params;
        corr_down.correlation = rho_down;

        self.reset_with_seed(seed);
        let price_corr_up = self.price(corr_up, payoff)?.price;
        self.reset_with_seed(seed);
        let price_corr_down = self.price(corr_down, payoff)?.price;
        let cega = (price_corr_up - price_corr_down) / (rho_up - rho_down);

        self.reset_with_seed(seed);

        Ok(BasketSensitivities { delta, vega, cega })
    }
}

/// One-shot basket option valuation.
///
/// Convenience wrapper constructing a [`BasketPricer`] with an explicit seed
/// and pricing once.
///
/// # Examples
///
/// ```rust
/// use basket_pricer::mc::{
///     monte_carlo_basket_price, BasketParams, BasketPayoff, MonteCarloConfig,
/// };
///
/// let result = monte_carlo_basket_price(
///     BasketParams::default(),
///     BasketPayoff::call(100.0),
///     MonteCarloConfig::default(),
///     42,
/// )
/// .unwrap();
/// assert!(result.price >= 0.0);
/// ```
///
/// # Errors
///
/// Returns [`ModelError`] if the market parameters or payoff are invalid.
pub fn monte_carlo_basket_price(
    params: BasketParams,
    payoff: BasketPayoff,
    config: MonteCarloConfig,
    seed: u64,
) -> Result<PricingResult, ModelError> {
    // Config was validated at build time; with_seed only re-checks it.
    let mut pricer = BasketPricer::with_seed(config, seed)
        .expect("MonteCarloConfig invariant violated after build");
    pricer.price(params, payoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn test_pricer(n_paths: usize, n_steps: usize, seed: u64) -> BasketPricer {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(seed)
            .build()
            .unwrap();
        BasketPricer::new(config).unwrap()
    }

    #[test]
    fn test_price_basket_call() {
        let mut pricer = test_pricer(10_000, 50, 42);
        let result = pricer
            .price(BasketParams::default(), BasketPayoff::call(100.0))
            .unwrap();

        assert!(result.price > 0.0);
        assert!(result.std_error > 0.0);
        assert!(result.std_error < result.price * 0.1);
    }

    #[test]
    fn test_price_basket_put() {
        let mut pricer = test_pricer(10_000, 50, 42);
        let result = pricer
            .price(BasketParams::default(), BasketPayoff::put(100.0))
            .unwrap();

        assert!(result.price > 0.0);
    }

    #[test]
    fn test_reproducibility_across_instances() {
        let config = MonteCarloConfig::builder()
            .n_paths(1_000)
            .n_steps(10)
            .seed(42)
            .build()
            .unwrap();

        let mut pricer1 = BasketPricer::new(config.clone()).unwrap();
        let mut pricer2 = BasketPricer::new(config).unwrap();

        let params = BasketParams::default();
        let payoff = BasketPayoff::call(100.0);

        let r1 = pricer1.price(params, payoff).unwrap();
        let r2 = pricer2.price(params, payoff).unwrap();

        assert_eq!(r1.price, r2.price);
        assert_eq!(r1.std_error, r2.std_error);
    }

    #[test]
    fn test_reset_reproduces_estimate() {
        let mut pricer = test_pricer(1_000, 10, 42);
        let params = BasketParams::default();
        let payoff = BasketPayoff::call(100.0);

        let r1 = pricer.price(params, payoff).unwrap();
        pricer.reset();
        let r2 = pricer.price(params, payoff).unwrap();

        assert_eq!(r1.price, r2.price);
    }

    #[test]
    fn test_invalid_correlation_fails_fast() {
        let mut pricer = test_pricer(100, 5, 42);
        let params = BasketParams {
            correlation: 1.5,
            ..Default::default()
        };

        let result = pricer.price(params, BasketPayoff::call(100.0));
        assert!(matches!(result, Err(ModelError::InvalidCorrelation(_))));
    }

    #[test]
    fn test_single_path_estimate() {
        // Degenerate but allowed: one path, no spread information.
        let mut pricer = test_pricer(1, 10, 42);
        let result = pricer
            .price(BasketParams::default(), BasketPayoff::call(100.0))
            .unwrap();

        assert!(result.price >= 0.0);
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_strike_monotonicity() {
        let params = BasketParams::default();
        let mut previous = f64::INFINITY;

        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let mut pricer = test_pricer(5_000, 20, 42);
            let price = pricer
                .price(params, BasketPayoff::call(strike))
                .unwrap()
                .price;
            assert!(
                price <= previous,
                "price({}) = {} exceeds previous {}",
                strike,
                price,
                previous
            );
            previous = price;
        }
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = e^(-rT) * E[basket] - K * e^(-rT); with no dividends the
        // discounted expected basket is the weighted spot.
        let params = BasketParams::default();
        let strike = 100.0;

        let mut pricer = test_pricer(50_000, 50, 42);
        let call = pricer
            .price(params, BasketPayoff::call(strike))
            .unwrap()
            .price;

        let mut pricer = test_pricer(50_000, 50, 42);
        let put = pricer
            .price(params, BasketPayoff::put(strike))
            .unwrap()
            .price;

        let weighted_spot = 0.5 * params.spots[0] + 0.5 * params.spots[1];
        let expected = weighted_spot - strike * params.discount_factor();

        assert_relative_eq!(call - put, expected, max_relative = 0.05);
    }

    #[test]
    fn test_higher_correlation_raises_basket_call_value() {
        // More correlation means less diversification, a more volatile
        // basket, and a dearer option.
        let payoff = BasketPayoff::call(100.0);

        let mut pricer = test_pricer(50_000, 20, 42);
        let low = pricer
            .price(
                BasketParams {
                    correlation: 0.0,
                    ..Default::default()
                },
                payoff,
            )
            .unwrap()
            .price;

        let mut pricer = test_pricer(50_000, 20, 42);
        let high = pricer
            .price(
                BasketParams {
                    correlation: 0.9,
                    ..Default::default()
                },
                payoff,
            )
            .unwrap()
            .price;

        assert!(high > low, "high-rho {} <= low-rho {}", high, low);
    }

    #[test]
    fn test_sensitivities_atm_call() {
        let mut pricer = test_pricer(20_000, 20, 42);
        let sens = pricer
            .sensitivities(BasketParams::default(), BasketPayoff::call(100.0))
            .unwrap();

        // Each asset contributes roughly half the delta of an ATM option.
        for (asset, d) in sens.delta.iter().enumerate() {
            assert!(
                *d > 0.15 && *d < 0.45,
                "delta[{}] = {} outside expected band",
                asset,
                d
            );
        }
        assert!(sens.vega > 0.0, "vega = {}", sens.vega);
        assert!(sens.cega > 0.0, "cega = {}", sens.cega);
    }

    #[test]
    fn test_sensitivities_leave_pricer_reproducible() {
        let mut pricer = test_pricer(2_000, 10, 42);
        let params = BasketParams::default();
        let payoff = BasketPayoff::call(100.0);

        let base = pricer.price(params, payoff).unwrap();
        pricer.reset();
        let _ = pricer.sensitivities(params, payoff).unwrap();
        let after = pricer.price(params, payoff).unwrap();

        assert_eq!(base.price, after.price);
    }

    #[test]
    fn test_one_shot_matches_engine() {
        let params = BasketParams::default();
        let payoff = BasketPayoff::call(100.0);
        let config = MonteCarloConfig::builder()
            .n_paths(2_000)
            .n_steps(10)
            .build()
            .unwrap();

        let one_shot = monte_carlo_basket_price(params, payoff, config.clone(), 7).unwrap();

        let mut pricer = BasketPricer::with_seed(config, 7).unwrap();
        let engine = pricer.price(params, payoff).unwrap();

        assert_eq!(one_shot.price, engine.price);
    }

    #[test]
    fn test_confidence_intervals() {
        let result = PricingResult {
            price: 10.0,
            std_error: 0.1,
        };

        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99(), 0.2576, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_price_non_negative_and_finite(
            strike in 40.0..180.0f64,
            rho in -1.0..=1.0f64,
            vol in 0.0..0.6f64,
        ) {
            let mut pricer = test_pricer(200, 5, 42);
            let params = BasketParams {
                volatilities: [vol, vol],
                correlation: rho,
                ..Default::default()
            };

            let result = pricer.price(params, BasketPayoff::call(strike)).unwrap();
            prop_assert!(result.price >= 0.0);
            prop_assert!(result.price.is_finite());
        }

        #[test]
        fn prop_price_non_increasing_in_strike(
            strike in 50.0..140.0f64,
            gap in 1.0..40.0f64,
        ) {
            let params = BasketParams::default();

            let mut pricer = test_pricer(200, 5, 42);
            let low = pricer.price(params, BasketPayoff::call(strike)).unwrap().price;

            let mut pricer = test_pricer(200, 5, 42);
            let high = pricer.price(params, BasketPayoff::call(strike + gap)).unwrap().price;

            // Same seed, same paths: pointwise dominance, not just statistical.
            prop_assert!(high <= low);
        }
    }
}
