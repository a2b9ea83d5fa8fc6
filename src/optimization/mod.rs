//! optimization — constrained-solver stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for selector fitting, combining an
//! SLSQP-backed constrained minimizer with a single error/result surface.
//! Callers implement an objective, choose solver options, and obtain
//! optimized coefficients and diagnostics without touching backend solver
//! details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing selector losses** `L(β)`
//!   (`slsqp_solver`), including nonlinear inequality constraints and
//!   finite-difference Jacobian fallbacks.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The solver operates directly on coefficient vectors `β`; objectives are
//!   expected to treat domain violations (wrong lengths, non-finite entries)
//!   as recoverable errors surfaced through the optimization layer.
//! - One call into the backend is one blocking, synchronous solve; there is
//!   no cancellation beyond the iteration cap.
//!
//! Downstream usage
//! ----------------
//! - Selector families implement `Objective` for their loss shapes and call
//!   `minimize_objective` with an initial point, a data payload, and
//!   `SolverOptions` to obtain a `SolveOutcome` (via `slsqp_solver`).
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the submodule prelude and
//!   the core error types.

pub mod errors;
pub mod slsqp_solver;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use sparse_selectors::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::slsqp_solver::prelude::*;
}
