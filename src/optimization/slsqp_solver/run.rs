//! Execution helper that runs the `slsqp` backend on a selector objective and
//! returns a crate-friendly [`SolveOutcome`].
use crate::optimization::{
    errors::{OptError, OptResult},
    slsqp_solver::{
        adapter::SlsqpAdapter,
        traits::{Objective, SolveOutcome, SolverOptions},
        types::Beta,
    },
};
use slsqp::{Func, StopTols, minimize};

/// Run one SLSQP optimization for a selector objective.
///
/// This is the shared runner behind `minimize_objective`. It wires up:
/// - the user objective via [`SlsqpAdapter`],
/// - one backend callback per declared inequality constraint (already
///   shifted into the backend's `g(β) ≤ 0` form),
/// - the initial coefficient vector `beta0`,
/// - the iteration cap and function tolerance from `opts`,
///   then executes the backend and converts the result into [`SolveOutcome`].
///
/// # Arguments
/// - `adapter`: An [`SlsqpAdapter`] wrapping the user's objective and data.
/// - `beta0`: Initial coefficient vector. It is copied once into the raw
///   buffer the backend mutates in place.
/// - `opts`: Solver options (iteration cap, tolerance, verbosity).
///
/// # Returns
/// A [`SolveOutcome`] containing the best coefficients found, the best loss
/// value, a convergence flag, and the backend's termination status string.
///
/// # Errors
/// - If a callback recorded an `OptError` (invalid input, non-finite loss),
///   that error is surfaced instead of the backend's generic failure.
/// - Otherwise a failed backend run maps to [`OptError::NotConverged`] with
///   the backend status attached. No retry is attempted; callers must
///   adjust hyperparameters or options and call again.
/// - Propagates validation errors from [`SolveOutcome::new`] (non-finite
///   optimum or loss).
pub fn run_slsqp<F: Objective>(
    adapter: &SlsqpAdapter<'_, F>, beta0: Beta, opts: &SolverOptions,
) -> OptResult<SolveOutcome> {
    let objective =
        |x: &[f64], grad: Option<&mut [f64]>, _: &mut ()| adapter.eval_objective(x, grad);
    let constraint_callbacks = adapter.constraint_closures();
    let cons: Vec<&dyn Func<()>> =
        constraint_callbacks.iter().map(|callback| callback as &dyn Func<()>).collect();
    let stop_tol = StopTols { ftol_rel: opts.ftol, ..StopTols::default() };
    let x0 = beta0.to_vec();
    let bounds = vec![(f64::NEG_INFINITY, f64::INFINITY); x0.len()];

    match minimize(objective, &x0, &bounds, &cons, (), opts.max_iter, Some(stop_tol)) {
        Ok((status, x_opt, value)) => {
            let status = format!("{status:?}");
            if opts.verbose {
                eprintln!("slsqp: converged, status = {status}, loss = {value:.6e}");
            }
            SolveOutcome::new(x_opt, value, true, status)
        }
        Err((status, _, _)) => {
            if let Some(err) = adapter.take_error() {
                return Err(err);
            }
            let status = format!("{status:?}");
            if opts.verbose {
                eprintln!("slsqp: failed, status = {status}");
            }
            Err(OptError::NotConverged { status })
        }
    }
}
