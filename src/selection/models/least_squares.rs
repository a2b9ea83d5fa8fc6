//! Plain least-squares selection: the zero-penalty baseline.
//!
//! With no penalty and no constraints the objective reduces exactly to the
//! scaled sum of squared errors, so on a well-posed full-rank design the
//! fit reproduces the closed-form least-squares coefficients. Useful as a
//! reference point when tuning the penalized families.
use crate::{
    optimization::slsqp_solver::{traits::SolverOptions, types::Beta},
    selection::{
        core::{
            data::RegressionData,
            driver::{DEFAULT_COEF_THRESHOLD, run_selection},
            objective::PenalizedLeastSquares,
            penalty::ZeroPenalty,
        },
        errors::SelectResult,
        models::Selector,
    },
};

/// Unpenalized least-squares selector.
///
/// Selects every feature whose fitted coefficient magnitude clears the
/// threshold; with no shrinkage this is typically all of them on noisy
/// data, which is exactly the baseline behavior the penalized families are
/// measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquares {
    coef_threshold: f64,
    coefficients: Option<Beta>,
}

impl Default for LeastSquares {
    fn default() -> Self {
        Self::new()
    }
}

impl LeastSquares {
    pub fn new() -> Self {
        Self { coef_threshold: DEFAULT_COEF_THRESHOLD, coefficients: None }
    }

    /// Override the support threshold.
    pub fn with_threshold(coef_threshold: f64) -> Self {
        Self { coef_threshold, coefficients: None }
    }
}

impl Selector for LeastSquares {
    fn select(
        &mut self, data: &RegressionData, options: Option<SolverOptions>,
    ) -> SelectResult<Vec<usize>> {
        let objective = PenalizedLeastSquares::new(ZeroPenalty);
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
    // Ensure every fitted-state read on an unfitted selector errors with
    // `ModelNotFitted` instead of returning a meaningless value.
    //
    // Given
    // -----
    // - A freshly constructed `LeastSquares` and valid data.
    //
    // Expect
    // ------
    // - `coefficients`, `support`, and `evaluate` all return
    //   `SelectError::ModelNotFitted`.
    fn unfitted_reads_error_with_model_not_fitted() {
        // Arrange
        let selector = LeastSquares::new();
        let data = RegressionData::new(array![[1.0], [2.0]], array![1.0, 2.0])
            .expect("data should validate");

        // Act & Assert
        assert!(matches!(selector.coefficients(), Err(SelectError::ModelNotFitted)));
        assert!(matches!(selector.support(), Err(SelectError::ModelNotFitted)));
        assert!(matches!(
            selector.evaluate(&data, "neg_mean_absolute_error"),
            Err(SelectError::ModelNotFitted)
        ));
    }
}
