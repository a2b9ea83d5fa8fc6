//! High-level entry point for minimizing a user-provided [`Objective`].
//!
//! This validates the initial point, wraps the objective in an
//! [`SlsqpAdapter`] (which bridges to the backend's raw callback contract),
//! and delegates the run to `run_slsqp`.
use crate::optimization::{
    errors::OptResult,
    slsqp_solver::{
        adapter::SlsqpAdapter,
        run::run_slsqp,
        traits::{Method, Objective, SolveOutcome, SolverOptions},
        types::Beta,
    },
};

/// Minimize a selector objective `L(β)` subject to its declared constraints.
///
/// # Behavior
/// - Validates the initial guess via `f.check(beta0, data)`.
/// - Wraps `(f, data)` in an [`SlsqpAdapter`] exposing the backend callback
///   contract, including the finite-difference fallback when no analytic
///   Jacobian is implemented.
/// - Dispatches on `opts.method` (currently SLSQP only — the seam where
///   alternative backends would plug in) and runs one blocking solve to
///   convergence or iteration cap.
///
/// # Parameters
/// - `f`: The objective implementing [`Objective`].
/// - `beta0`: Initial coefficient vector (consumed).
/// - `data`: Problem data passed through to `loss`/`jac`/constraints.
/// - `opts`: Solver options (iteration cap, tolerance, method, verbosity).
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates runtime errors from `run_slsqp`, including
///   [`crate::optimization::errors::OptError::NotConverged`] on a failed
///   terminal status.
///
/// # Returns
/// A [`SolveOutcome`] containing `beta_hat`, the best loss value,
/// a convergence flag, and the backend's status string.
pub fn minimize_objective<F: Objective>(
    f: &F, beta0: Beta, data: &F::Data, opts: &SolverOptions,
) -> OptResult<SolveOutcome> {
    f.check(&beta0, data)?;
    let adapter = SlsqpAdapter::new(f, data);
    if opts.verbose {
        log_initial_state(&adapter, &beta0);
    }
    match opts.method {
        Method::Slsqp => run_slsqp(&adapter, beta0, opts),
    }
}

// ---- Helper Methods ----

fn log_initial_state<F: Objective>(adapter: &SlsqpAdapter<'_, F>, beta0: &Beta) {
    let loss0 = adapter.loss(beta0).ok();
    let jac0_norm =
        adapter.gradient(beta0).ok().map(|jac| jac.iter().map(|v| v * v).sum::<f64>().sqrt());

    eprintln!(
        "init: L(beta0) = {}{}",
        loss0.map(|l| format!("{l:.6}")).unwrap_or_else(|| "n/a".to_string()),
        jac0_norm.map(|n| format!(", ||jac|| = {n:.6}")).unwrap_or_default()
    );
}
