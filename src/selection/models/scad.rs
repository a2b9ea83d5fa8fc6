//! SCAD selection: smoothly clipped absolute deviation penalty.
//!
//! SCAD keeps the Lasso's shrinkage for small coefficients but tapers the
//! penalty off past `a·λ`, reducing bias for large coefficients while still
//! shrinking small ones to zero — the construction behind its oracle
//! property (Fan & Li).
use crate::{
    optimization::slsqp_solver::{traits::SolverOptions, types::Beta},
    selection::{
        core::{
            data::RegressionData,
            driver::{DEFAULT_COEF_THRESHOLD, run_selection},
            objective::PenalizedLeastSquares,
            penalty::ScadPenalty,
        },
        errors::SelectResult,
        models::Selector,
    },
};

/// SCAD selector with shape parameter `a` (> 1, default 3.7).
///
/// λ and `a` are the caller's tuning knobs and are not validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct Scad {
    /// Penalty weight λ.
    pub lambda: f64,
    /// Shape parameter `a`.
    pub a: f64,
    coef_threshold: f64,
    coefficients: Option<Beta>,
}

impl Scad {
    /// SCAD selector with the reference shape `a = 3.7`.
    pub fn new(lambda: f64) -> Self {
        let penalty = ScadPenalty::new(lambda);
        Self { lambda, a: penalty.a, coef_threshold: DEFAULT_COEF_THRESHOLD, coefficients: None }
    }

    pub fn with_shape(lambda: f64, a: f64) -> Self {
        Self { lambda, a, coef_threshold: DEFAULT_COEF_THRESHOLD, coefficients: None }
    }

    /// Override the support threshold.
    pub fn with_threshold(lambda: f64, a: f64, coef_threshold: f64) -> Self {
        Self { lambda, a, coef_threshold, coefficients: None }
    }
}

impl Selector for Scad {
    fn select(
        &mut self, data: &RegressionData, options: Option<SolverOptions>,
    ) -> SelectResult<Vec<usize>> {
        let objective = PenalizedLeastSquares::new(ScadPenalty::with_shape(self.lambda, self.a));
        let opts = options.unwrap_or_default();
        let (beta_hat, support) = run_selection(&objective, data, &opts, self.coef_threshold)?;
        self.coefficients = Some(beta_hat);
        Ok(support)
    }

    fn fitted_coefficients(&self) -> Option<&Beta> {
        self.coefficients.as_ref()
    }

    fn coef_threshold(&self) -> f64 {
        self.coef_threshold
    }
}
