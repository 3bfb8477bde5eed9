//! Correlated GBM path generation for the two-asset basket.
//!
//! Uses the log-space exact discretisation
//! `S(t+dt) = S(t) × exp((r − 0.5σ²)dt + σ√dt × z)` per asset, with the
//! second asset's shocks blended from the first's independent draws:
//!
//! ```text
//! z_2 = ρ·z_1 + √(1 − ρ²)·z_indep
//! ```
//!
//! This two-asset construction induces the target correlation at every step
//! without a general Cholesky factorisation.
//!
//! # Memory layout
//!
//! Paths are row-major: `paths[path_idx * (n_steps + 1) + step_idx]`, where
//! `step_idx = 0` holds the initial spot.

use super::params::BasketParams;
use super::workspace::BasketWorkspace;

/// Generates correlated GBM paths for both assets into the workspace.
///
/// The workspace's normal buffers must already be filled with independent
/// standard normal draws; asset 2's buffer is consumed through the
/// correlation blend.
///
/// # Panics
///
/// Panics (debug assertion) if workspace capacity is insufficient.
pub fn generate_correlated_gbm_paths(
    workspace: &mut BasketWorkspace,
    params: BasketParams,
    n_paths: usize,
    n_steps: usize,
) {
    debug_assert!(n_paths <= workspace.capacity_paths());
    debug_assert!(n_steps <= workspace.capacity_steps());

    let dt = params.maturity / n_steps as f64;
    let sqrt_dt = dt.sqrt();

    // Per-asset drift and diffusion increments, hoisted out of the loop.
    let [sigma_a, sigma_b] = params.volatilities;
    let drift_a = (params.rate - 0.5 * sigma_a * sigma_a) * dt;
    let drift_b = (params.rate - 0.5 * sigma_b * sigma_b) * dt;
    let vol_a = sigma_a * sqrt_dt;
    let vol_b = sigma_b * sqrt_dt;

    let rho = params.correlation;
    let rho_bar = (1.0 - rho * rho).sqrt();

    let [spot_a, spot_b] = params.spots;
    let n_steps_plus_1 = n_steps + 1;

    let (paths_a, paths_b, randoms_a, randoms_b) = workspace.split_for_paths();

    for path_idx in 0..n_paths {
        let path_offset = path_idx * n_steps_plus_1;
        let random_offset = path_idx * n_steps;

        paths_a[path_offset] = spot_a;
        paths_b[path_offset] = spot_b;

        for step in 0..n_steps {
            let z1 = randoms_a[random_offset + step];
            let z2 = rho * z1 + rho_bar * randoms_b[random_offset + step];

            paths_a[path_offset + step + 1] =
                paths_a[path_offset + step] * (drift_a + vol_a * z1).exp();
            paths_b[path_offset + step + 1] =
                paths_b[path_offset + step] * (drift_b + vol_b * z2).exp();
        }
    }
}

/// Extracts the terminal price pair for each path.
///
/// Returns `(terminals_a, terminals_b)`, one value per path.
pub fn terminal_prices(
    workspace: &BasketWorkspace,
    n_paths: usize,
    n_steps: usize,
) -> (Vec<f64>, Vec<f64>) {
    let n_steps_plus_1 = n_steps + 1;
    let paths_a = workspace.paths_a();
    let paths_b = workspace.paths_b();

    let terminals_a = (0..n_paths)
        .map(|path_idx| paths_a[path_idx * n_steps_plus_1 + n_steps])
        .collect();
    let terminals_b = (0..n_paths)
        .map(|path_idx| paths_b[path_idx * n_steps_plus_1 + n_steps])
        .collect();

    (terminals_a, terminals_b)
}
