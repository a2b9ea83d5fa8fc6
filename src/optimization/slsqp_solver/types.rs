//! slsqp_solver::types — shared numeric aliases and solver defaults.
//!
//! Centralize the core numeric types used by the constrained-optimizer
//! wrapper. By defining these in one place, the rest of the optimization
//! code stays agnostic to `ndarray` generics and can more easily evolve if
//! the backend changes.
use ndarray::Array1;

/// Coefficient vector `β` for a tentative linear model `y ≈ Xβ`.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical optimization
/// variable throughout the solver wrapper.
pub type Beta = Array1<f64>;

/// Jacobian (gradient) vector `∇L(β)` of the scalar objective.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Beta`.
pub type Jac = Array1<f64>;

/// Scalar objective value passed to and returned by the backend solver.
pub type Cost = f64;

/// Default iteration cap for one solver run.
pub const DEFAULT_MAX_ITER: usize = 10_000;

/// Default function tolerance for the backend's stopping rule.
pub const DEFAULT_FTOL: f64 = 1e-12;
