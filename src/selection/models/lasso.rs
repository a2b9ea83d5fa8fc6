//! Lasso selection: ℓ1-penalized least squares.
use crate::{
    optimization::slsqp_solver::{traits::SolverOptions, types::Beta},
    selection::{
        core::{
            data::RegressionData,
            driver::{DEFAULT_COEF_THRESHOLD, run_selection},
            objective::PenalizedLeastSquares,
            penalty::LassoPenalty,
        },
        errors::SelectResult,
        models::Selector,
    },
};

/// Lasso selector with penalty `λ·Σ|β_i|`.
///
/// The ℓ1 penalty shrinks small coefficients toward zero, so thresholding
/// the fit yields a sparse support. λ must be positive; it is the caller's
/// tuning knob and is not validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct Lasso {
    /// Penalty weight λ.
    pub lambda: f64,
    coef_threshold: f64,
    coefficients: Option<Beta>,
}

impl Lasso {
    pub fn new(lambda: f64) -> Self {
        Self { lambda, coef_threshold: DEFAULT_COEF_THRESHOLD, coefficients: None }
    }

    /// Override the support threshold.
    pub fn with_threshold(lambda: f64, coef_threshold: f64) -> Self {
        Self { lambda, coef_threshold, coefficients: None }
    }
}

impl Selector for Lasso {
    fn select(
        &mut self, data: &RegressionData, options: Option<SolverOptions>,
    ) -> SelectResult<Vec<usize>> {
        let objective = PenalizedLeastSquares::new(LassoPenalty::new(self.lambda));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::errors::SelectError;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Ensure evaluating an unfitted Lasso errors instead of silently
    // scoring a meaningless model.
    //
    // Given
    // -----
    // - A freshly constructed `Lasso` and valid data.
    //
    // Expect
    // ------
    // - `evaluate` returns `SelectError::ModelNotFitted`.
    fn evaluate_before_select_errors() {
        // Arrange
        let selector = Lasso::new(0.1);
        let data = RegressionData::new(array![[1.0], [2.0]], array![1.0, 2.0])
            .expect("data should validate");

        // Act
        let result = selector.evaluate(&data, "neg_mean_absolute_error");

        // Assert
        assert!(matches!(result, Err(SelectError::ModelNotFitted)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure an unknown metric name surfaces `UnknownMetric` even before
    // reaching the scoring formulas — but only on a fitted selector, since
    // the fitted-state guard runs first.
    //
    // Given
    // -----
    // - A Lasso with fitted state injected directly.
    //
    // Expect
    // ------
    // - `evaluate` with "banana" returns `SelectError::UnknownMetric`.
    fn evaluate_with_unknown_metric_errors() {
        // Arrange
        let mut selector = Lasso::new(0.1);
        selector.coefficients = Some(array![1.0]);
        let data = RegressionData::new(array![[1.0], [2.0]], array![1.0, 2.0])
            .expect("data should validate");

        // Act
        let result = selector.evaluate(&data, "banana");

        // Assert
        assert!(matches!(result, Err(SelectError::UnknownMetric { .. })));
    }
}
