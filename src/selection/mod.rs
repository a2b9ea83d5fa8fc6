//! selection — sparse linear-coefficient selector stack.
//!
//! Purpose
//! -------
//! Provide a cohesive selector layer that bundles core numerics (penalties,
//! objectives, the driver, adaptive weighting), the user-facing selector
//! families, and shared error types under a single namespace. This is the
//! main entry point for sparse feature selection in the crate.
//!
//! Key behaviors
//! -------------
//! - Collect core building blocks in [`core`]: the validated regression
//!   container, penalty shapes and subgradient surrogates, the penalized
//!   least-squares objective, the shared selection driver, and adaptive
//!   plug-in weighting.
//! - Expose one selector per family in [`models`] via the common
//!   [`Selector`] trait: [`LeastSquares`], [`Lasso`], [`AdaptiveLasso`],
//!   [`Scad`], and [`Dantzig`].
//! - Centralize selector-specific error types in [`errors`] so callers see
//!   a uniform error surface across the stack.
//!
//! Invariants & assumptions
//! ------------------------
//! - Regression data is carried in validated [`RegressionData`] instances:
//!   finite entries, non-empty design, rows paired with targets.
//! - A selector's fitted state is undefined before a successful `select`
//!   and immutable after; reads before fitting error with
//!   [`SelectError::ModelNotFitted`].
//! - Support indices are always a subset of `{0, …, N−1}`, sorted
//!   ascending; empty if every coefficient falls at or below the
//!   threshold.
//! - Penalty hyperparameter positivity (λ, a, γ) is the caller's
//!   responsibility and is deliberately not validated here.
//!
//! Conventions
//! -----------
//! - Each `select` call is one blocking optimization run: zero initial
//!   point, one backend invocation, terminal-status check, thresholding.
//!   No retries and no fallbacks; non-convergence surfaces as
//!   [`SelectError::NotConverged`].
//! - Selectors never mutate their inputs; the only mutation is the
//!   instance's own fitted state, so independent selector instances may
//!   run concurrently on separate threads.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct [`RegressionData`] from the design matrix and targets.
//!   2. Construct a selector with its hyperparameters (e.g.
//!      `Lasso::new(lambda)`).
//!   3. Call `select(&data, None)` to obtain the support indices.
//!   4. After a successful fit, use `coefficients()` for the fitted vector
//!      and `evaluate(&held_out, "neg_mean_absolute_error")` for scoring.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the "everyday" types most users need. More specialized items
// (penalty shapes, the driver, plug-in weighting) remain under their
// respective submodules.

pub use self::core::{DEFAULT_COEF_THRESHOLD, RegressionData};
pub use self::errors::{SelectError, SelectResult};
pub use self::models::{AdaptiveLasso, Dantzig, Lasso, LeastSquares, Scad, Selector};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use sparse_selectors::selection::prelude::*;
//
// to import the main selector surface in a single line.

pub mod prelude {
    pub use super::{
        AdaptiveLasso, Dantzig, Lasso, LeastSquares, RegressionData, Scad, SelectError,
        SelectResult, Selector,
    };
}
