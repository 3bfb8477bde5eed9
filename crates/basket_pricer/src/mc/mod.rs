//! Monte Carlo simulation engine for two-asset basket options.
//!
//! This module prices a European option on the weighted average of two
//! correlated assets under Black-Scholes dynamics:
//!
//! ```text
//! price = E[ e^(-rT) · max(w1·S1_T + w2·S2_T − K, 0) ]
//! ```
//!
//! # Architecture
//!
//! ```text
//! BasketPricer
//! ├── MonteCarloConfig   (simulation parameters)
//! ├── BasketWorkspace    (pre-allocated buffers, both assets)
//! ├── SimRng             (seeded random source)
//! └── Orchestration
//!     ├── generate_correlated_gbm_paths()
//!     ├── compute_payoffs()
//!     └── discounted aggregation
//! ```
//!
//! Correlation between the assets' shocks is induced with the two-asset
//! blend `z2 = ρ·z1 + √(1 − ρ²)·z_indep` at every time step.
//!
//! # Example
//!
//! ```rust
//! use basket_pricer::mc::{BasketParams, BasketPayoff, BasketPricer, MonteCarloConfig};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(50_000)
//!     .n_steps(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let params = BasketParams {
//!     spots: [100.0, 100.0],
//!     rate: 0.05,
//!     volatilities: [0.2, 0.2],
//!     correlation: 0.5,
//!     maturity: 1.0,
//! };
//!
//! let mut pricer = BasketPricer::new(config).unwrap();
//! let result = pricer.price(params, BasketPayoff::call(100.0)).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod workspace;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, DEFAULT_STEPS};
pub use error::{ConfigError, ModelError};
pub use params::BasketParams;
pub use paths::{generate_correlated_gbm_paths, terminal_prices};
pub use payoff::{compute_payoffs, BasketPayoff, PayoffType};
pub use pricer::{monte_carlo_basket_price, BasketPricer, BasketSensitivities, PricingResult};
pub use workspace::BasketWorkspace;
