//! slsqp_solver — constrained minimization wrapper over the `slsqp` backend.
//!
//! Purpose
//! -------
//! Provide a high-level optimization layer for **minimizing selector
//! objectives** `L(β)`, optionally subject to nonlinear inequality
//! constraints. Callers implement a single trait, [`Objective`], and invoke
//! [`minimize_objective`] to run SLSQP with a configurable iteration cap and
//! function tolerance.
//!
//! Key behaviors
//! -------------
//! - Bridge user objectives into the backend's raw callback contract via
//!   [`adapter::SlsqpAdapter`], including gradient-slot filling and the
//!   `g(β) − bound ≤ 0` constraint shift.
//! - Expose a single, user-facing entrypoint [`minimize_objective`] that:
//!   - validates the initial guess with [`Objective::check`],
//!   - dispatches on [`traits::Method`], and
//!   - executes the backend via [`run::run_slsqp`], normalizing results into
//!     a [`SolveOutcome`].
//! - Fall back to robust finite differences (central, then forward) when an
//!   objective does not implement an analytic Jacobian.
//! - Centralize solver configuration ([`SolverOptions`]) and validation
//!   logic ([`validation`]) so downstream code can assume sane, finite
//!   inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`Objective::loss`] and [`Objective::jac`] must treat invalid inputs as
//!   recoverable `OptError` values, not panics; errors raised inside backend
//!   callbacks are captured and surfaced in place of a generic failure.
//! - Coefficient vectors use the canonical aliases [`Beta`] / [`Jac`]; all
//!   are assumed finite whenever optimization proceeds.
//! - Each run is one blocking call with no shared mutable state beyond the
//!   per-call adapter, so distinct selector instances may solve on distinct
//!   threads.
//!
//! Conventions
//! -----------
//! - The solver always **minimizes**; there is no sign flipping anywhere in
//!   this stack.
//! - Inequality constraints are declared in problem units as
//!   `g(β) ≤ upper_bound()` and shifted to the backend's `≤ 0` form inside
//!   the adapter.
//! - A failed terminal status maps to `OptError::NotConverged` with the
//!   backend's status string attached; no retry logic is built in.

pub mod adapter;
pub mod api;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize_objective;
pub use self::traits::{InequalityConstraint, Method, Objective, SolveOutcome, SolverOptions};
pub use self::types::{Beta, Cost, DEFAULT_FTOL, DEFAULT_MAX_ITER, Jac};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use sparse_selectors::optimization::slsqp_solver::prelude::*;
//
// to import the main solver surface in a single line.

pub mod prelude {
    pub use super::api::minimize_objective;
    pub use super::traits::{InequalityConstraint, Method, Objective, SolveOutcome, SolverOptions};
    pub use super::types::{Beta, Cost, Jac};
}
