//! models — user-facing selector families.
//!
//! Purpose
//! -------
//! Expose one selector type per family — [`LeastSquares`], [`Lasso`],
//! [`AdaptiveLasso`], [`Scad`], and [`Dantzig`] — each a thin composition
//! of a penalty/objective from [`crate::selection::core`] with the shared
//! selection driver. The single varying axis across families is the penalty
//! shape (plus, for Dantzig, the constraint set), so each file here mostly
//! declares hyperparameters and wires the pieces together.
//!
//! Key behaviors
//! -------------
//! - Define the common [`Selector`] surface: `select` runs exactly one
//!   optimization and transitions the instance from unfitted to fitted;
//!   `coefficients`, `support`, and `evaluate` are only meaningful after a
//!   successful `select` and error with
//!   [`SelectError::ModelNotFitted`] before it.
//! - Keep fitted state per instance: no selector shares mutable state with
//!   another, so independent instances may run on separate threads.
//!
//! Conventions
//! -----------
//! - `select(data, options)` takes `Option<SolverOptions>`; `None` means
//!   the documented defaults (SLSQP, 10 000 iterations, ftol 1e-12).
//! - Re-running `select` on the same instance re-fits from scratch; with a
//!   deterministic backend the same data yields the same support.
use crate::{
    evaluation::{LinearModel, Metric},
    optimization::slsqp_solver::{traits::SolverOptions, types::Beta},
    selection::{
        core::{data::RegressionData, driver::support_indices},
        errors::{SelectError, SelectResult},
    },
};

pub mod adaptive_lasso;
pub mod dantzig;
pub mod lasso;
pub mod least_squares;
pub mod scad;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adaptive_lasso::AdaptiveLasso;
pub use self::dantzig::Dantzig;
pub use self::lasso::Lasso;
pub use self::least_squares::LeastSquares;
pub use self::scad::Scad;

/// Common surface of every selector family.
///
/// Required methods cover the family-specific parts (running one fit,
/// exposing fitted state and the support threshold); the provided methods
/// implement the shared fitted-state reads on top of them.
pub trait Selector {
    /// Select feature indices from the data.
    ///
    /// Runs exactly one optimization (no retry) and stores the optimized
    /// coefficients as this instance's fitted state. Returns the sorted
    /// ascending indices whose coefficient magnitude exceeds the
    /// selector's threshold.
    ///
    /// # Errors
    /// - [`SelectError::NotConverged`] when the backend reports a failure
    ///   terminal status; the caller must adjust hyperparameters or
    ///   options and call again.
    fn select(
        &mut self, data: &RegressionData, options: Option<SolverOptions>,
    ) -> SelectResult<Vec<usize>>;

    /// Fitted coefficients, if a successful `select` has run.
    fn fitted_coefficients(&self) -> Option<&Beta>;

    /// Magnitude threshold used to derive the support set.
    fn coef_threshold(&self) -> f64;

    /// Fitted coefficients.
    ///
    /// # Errors
    /// - [`SelectError::ModelNotFitted`] before a successful `select`.
    fn coefficients(&self) -> SelectResult<&Beta> {
        self.fitted_coefficients().ok_or(SelectError::ModelNotFitted)
    }

    /// Recompute the support set from the fitted coefficients.
    ///
    /// # Errors
    /// - [`SelectError::ModelNotFitted`] before a successful `select`.
    fn support(&self) -> SelectResult<Vec<usize>> {
        Ok(support_indices(self.coefficients()?, self.coef_threshold()))
    }

    /// Score the fitted coefficients against held-out data.
    ///
    /// Builds a zero-intercept [`LinearModel`] from the stored coefficients
    /// and applies the named metric resolved from the scorer registry
    /// (e.g. `"neg_mean_absolute_error"`).
    ///
    /// # Errors
    /// - [`SelectError::ModelNotFitted`] before a successful `select` —
    ///   an unfitted selector must never silently score a meaningless
    ///   model.
    /// - [`SelectError::UnknownMetric`] for unregistered metric names.
    fn evaluate(&self, data: &RegressionData, metric: &str) -> SelectResult<f64> {
        let coefficients = self.coefficients()?;
        let metric: Metric = metric.parse()?;
        let model = LinearModel::without_intercept(coefficients.clone());
        Ok(metric.score(&model, &data.x, &data.y)?)
    }
}
