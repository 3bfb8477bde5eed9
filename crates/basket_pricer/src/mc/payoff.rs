//! Basket payoff definition and evaluation.

use super::error::ModelError;
use super::workspace::BasketWorkspace;

/// Option exercise type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffType {
    /// Call: pays `max(basket − K, 0)`.
    Call,
    /// Put: pays `max(K − basket, 0)`.
    Put,
}

/// Payoff parameters for a European basket option.
///
/// The basket value is the weighted average of the two assets' terminal
/// prices. [`BasketPayoff::call`] and [`BasketPayoff::put`] construct the
/// standard equal-weight (0.5 / 0.5) basket.
///
/// # Examples
///
/// ```rust
/// use basket_pricer::mc::BasketPayoff;
///
/// let payoff = BasketPayoff::call(100.0);
/// assert_eq!(payoff.weights, [0.5, 0.5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasketPayoff {
    /// Strike price.
    pub strike: f64,
    /// Basket weights, one per asset.
    pub weights: [f64; 2],
    /// Call or put.
    pub payoff_type: PayoffType,
}

impl BasketPayoff {
    /// Equal-weight basket call.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self {
            strike,
            weights: [0.5, 0.5],
            payoff_type: PayoffType::Call,
        }
    }

    /// Equal-weight basket put.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self {
            strike,
            weights: [0.5, 0.5],
            payoff_type: PayoffType::Put,
        }
    }

    /// Call with explicit weights.
    #[inline]
    pub fn weighted_call(strike: f64, weights: [f64; 2]) -> Self {
        Self {
            strike,
            weights,
            payoff_type: PayoffType::Call,
        }
    }

    /// Validates strike and weights.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for a non-finite strike, or weights that are
    /// negative, non-finite, or sum to zero.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.strike.is_finite() {
            return Err(ModelError::InvalidStrike(self.strike));
        }
        let [w1, w2] = self.weights;
        let weights_ok =
            w1.is_finite() && w2.is_finite() && w1 >= 0.0 && w2 >= 0.0 && w1 + w2 > 0.0;
        if !weights_ok {
            return Err(ModelError::InvalidWeights(w1, w2));
        }
        Ok(())
    }

    /// Evaluates the payoff for one pair of terminal prices.
    #[inline]
    pub fn evaluate(&self, terminal_a: f64, terminal_b: f64) -> f64 {
        let basket = self.weights[0] * terminal_a + self.weights[1] * terminal_b;
        match self.payoff_type {
            PayoffType::Call => (basket - self.strike).max(0.0),
            PayoffType::Put => (self.strike - basket).max(0.0),
        }
    }
}

/// Computes payoffs for all paths from the terminal column of the generated
/// paths, writing into the workspace payoff buffer.
pub fn compute_payoffs(
    workspace: &mut BasketWorkspace,
    payoff: BasketPayoff,
    n_paths: usize,
    n_steps: usize,
) {
    let n_steps_plus_1 = n_steps + 1;

    for path_idx in 0..n_paths {
        let terminal_idx = path_idx * n_steps_plus_1 + n_steps;
        let terminal_a = workspace.paths_a()[terminal_idx];
        let terminal_b = workspace.paths_b()[terminal_idx];
        workspace.payoffs_mut()[path_idx] = payoff.evaluate(terminal_a, terminal_b);
    }
}
