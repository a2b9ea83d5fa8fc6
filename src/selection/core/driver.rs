//! Shared selection driver: one optimization run plus support thresholding.
//!
//! Every selector family funnels through [`run_selection`]: initialize the
//! coefficient vector at zero, run one blocking solve against the backend,
//! validate the terminal status, and threshold the optimized coefficients
//! into a sparse support set. Retries and hyperparameter adjustment are the
//! caller's responsibility.
use crate::{
    optimization::slsqp_solver::{
        api::minimize_objective,
        traits::{Objective, SolverOptions},
        types::Beta,
    },
    selection::{
        core::data::RegressionData,
        errors::{SelectError, SelectResult},
    },
};

/// Default magnitude threshold for counting a coefficient as nonzero.
pub const DEFAULT_COEF_THRESHOLD: f64 = 1e-6;

/// Run one selection optimization and threshold the result.
///
/// ## Steps
/// 1. Initialize `β₀` at the zero vector of length `data.n_features()`.
/// 2. Invoke the backend once via [`minimize_objective`] with the built
///    loss, Jacobian, and any declared constraints.
/// 3. Fail with [`SelectError::NotConverged`] if the terminal status is a
///    failure — no retry, no fallback.
/// 4. On success, return the optimized coefficients together with the
///    sorted ascending indices where `|β̂_i|` exceeds `coef_threshold`.
///
/// ## Arguments
/// - `objective`: the family's loss/Jacobian/constraints bundle.
/// - `data`: validated regression data; never mutated.
/// - `opts`: solver options for this run.
/// - `coef_threshold`: magnitude threshold for support membership.
///
/// ## Errors
/// - Propagates solver and validation failures as [`SelectError`].
pub fn run_selection<F: Objective<Data = RegressionData>>(
    objective: &F, data: &RegressionData, opts: &SolverOptions, coef_threshold: f64,
) -> SelectResult<(Beta, Vec<usize>)> {
    let beta0 = Beta::zeros(data.n_features());
    let outcome = minimize_objective(objective, beta0, data, opts)?;
    if !outcome.converged {
        return Err(SelectError::NotConverged { status: outcome.status });
    }
    let support = support_indices(&outcome.beta_hat, coef_threshold);
    Ok((outcome.beta_hat, support))
}

/// Indices whose coefficient magnitude strictly exceeds `threshold`,
/// in ascending order. Empty if every coefficient falls at or below it.
pub fn support_indices(beta: &Beta, threshold: f64) -> Vec<usize> {
    beta.iter()
        .enumerate()
        .filter(|(_, b)| b.abs() > threshold)
        .map(|(index, _)| index)
        .collect()
}
