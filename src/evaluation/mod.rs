//! evaluation — fitted-model scoring via a named metric registry.
//!
//! Purpose
//! -------
//! Wrap a fitted coefficient vector into a zero-intercept linear model and
//! score it against held-out data with a pluggable metric. This is a thin
//! adapter: it owns no fitting logic, only prediction and the registry of
//! scoring formulas.
//!
//! Key behaviors
//! -------------
//! - [`LinearModel`] exposes exactly the coefficient and intercept
//!   attributes scorers consume, plus `predict`.
//! - [`Metric`] resolves scikit-learn-style names (`FromStr`) and scores
//!   `(model, X, y)`; higher is always better.
//! - Failures (unknown names, shape mismatches) surface as
//!   [`errors::EvalError`] rather than panics or silent misuse.

pub mod errors;
pub mod linear_model;
pub mod scorers;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{EvalError, EvalResult};
pub use self::linear_model::LinearModel;
pub use self::scorers::Metric;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{EvalError, EvalResult};
    pub use super::linear_model::LinearModel;
    pub use super::scorers::Metric;
}
