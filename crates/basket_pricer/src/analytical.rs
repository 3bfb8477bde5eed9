//! Closed-form reference prices used to verify the Monte Carlo engine.
//!
//! A weighted-average basket of log-normals is not itself log-normal, so the
//! basket option has no exact closed form. Degenerate configurations do:
//! identical assets at `ρ = 1` collapse to a vanilla option, and zero
//! volatility collapses to discounted intrinsic on the forward. The vanilla
//! Black-Scholes prices here pin those cases in the test suite.

use num_traits::Float;

/// Standard normal CDF approximation.
///
/// Uses the Abramowitz and Stegun approximation for the error function.
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();

    // Handle extreme values
    let abs_x = x.abs();
    if abs_x > T::from(8.0).unwrap() {
        return if x > zero { one } else { zero };
    }

    // Abramowitz and Stegun constants
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // Compute erfc for -x/sqrt(2)
    let arg = -x / sqrt_2;
    let abs_arg = arg.abs();
    let t = one / (one + p * abs_arg);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_arg * abs_arg).exp();

    let two = T::from(2.0).unwrap();
    let erfc_val = if arg < zero { two - erfc_abs } else { erfc_abs };

    half * erfc_val
}

/// Vanilla European call under Black-Scholes.
///
/// ```text
/// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d2 = d1 − σ√T
/// Call = S·N(d1) − K·e^(−rT)·N(d2)
/// ```
///
/// Degenerate inputs (zero volatility or maturity) collapse to discounted
/// intrinsic on the forward.
pub fn black_scholes_call<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    let zero = T::zero();
    let discount = (-rate * maturity).exp();

    if volatility <= zero || maturity <= zero {
        return (spot - strike * discount).max(zero);
    }

    let sqrt_t = maturity.sqrt();
    let vol_sqrt_t = volatility * sqrt_t;
    let half = T::from(0.5).unwrap();

    let d1 = ((spot / strike).ln() + (rate + half * volatility * volatility) * maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
}

/// Vanilla European put under Black-Scholes.
///
/// ```text
/// Put = K·e^(−rT)·N(−d2) − S·N(−d1)
/// ```
pub fn black_scholes_put<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    let zero = T::zero();
    let discount = (-rate * maturity).exp();

    if volatility <= zero || maturity <= zero {
        return (strike * discount - spot).max(zero);
    }

    let sqrt_t = maturity.sqrt();
    let vol_sqrt_t = volatility * sqrt_t;
    let half = T::from(0.5).unwrap();

    let d1 = ((spot / strike).ln() + (rate + half * volatility * volatility) * maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1)
}
