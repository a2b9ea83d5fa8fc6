//! Adaptive Lasso selection: ℓ1 penalty with plug-in weights.
//!
//! Identical in shape to the Lasso but with λ replaced elementwise by
//! `λ·w_i`, where `w_i = |β̂_i|^(−γ)` comes from the unconstrained
//! least-squares fit (the root-n plug-in estimator). Coefficients the data
//! already suggests are large get a lighter penalty, which is what buys
//! the family its oracle-like selection consistency (Zou).
use crate::{
    optimization::slsqp_solver::{traits::SolverOptions, types::Beta},
    selection::{
        core::{
            data::RegressionData,
            driver::{DEFAULT_COEF_THRESHOLD, run_selection},
            objective::PenalizedLeastSquares,
            penalty::WeightedL1Penalty,
            weights::adaptive_weights,
        },
        errors::SelectResult,
        models::Selector,
    },
};

/// Adaptive Lasso selector with penalty `Σ λ·w_i·|β_i|`.
///
/// The weight vector is recomputed from the data at the start of every
/// `select` call and cached only for the duration of that call. λ and γ
/// are the caller's tuning knobs and are not validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveLasso {
    /// Penalty weight λ.
    pub lambda: f64,
    /// Adaptive exponent γ applied to the plug-in estimator.
    pub gamma: f64,
    coef_threshold: f64,
    coefficients: Option<Beta>,
}

impl AdaptiveLasso {
    pub fn new(lambda: f64, gamma: f64) -> Self {
        Self { lambda, gamma, coef_threshold: DEFAULT_COEF_THRESHOLD, coefficients: None }
    }

    /// Override the support threshold.
    pub fn with_threshold(lambda: f64, gamma: f64, coef_threshold: f64) -> Self {
        Self { lambda, gamma, coef_threshold, coefficients: None }
    }
}

impl Selector for AdaptiveLasso {
    /// Compute the plug-in weights, then run the shared driver with the
    /// reweighted ℓ1 penalty.
    ///
    /// # Errors
    /// - [`crate::selection::errors::SelectError::DegenerateWeights`] when
    ///   the least-squares fit has a (numerically) zero coefficient, whose
    ///   weight would be infinite.
    fn select(
        &mut self, data: &RegressionData, options: Option<SolverOptions>,
    ) -> SelectResult<Vec<usize>> {
        let weights = adaptive_weights(data, self.gamma)?;
        let objective =
            PenalizedLeastSquares::new(WeightedL1Penalty::new(self.lambda, weights));
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
    // Ensure a degenerate design (zero least-squares coefficient) fails
    // fast inside `select`, before the solver is ever invoked.
    //
    // Given
    // -----
    // - An identity design whose second target is exactly zero.
    //
    // Expect
    // ------
    // - `select` returns `SelectError::DegenerateWeights { index: 1 }` and
    //   the selector stays unfitted.
    fn select_rejects_degenerate_plug_in_weights() {
        // Arrange
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let y = array![1.0, 0.0];
        let data = RegressionData::new(x, y).expect("data should validate");
        let mut selector = AdaptiveLasso::new(0.1, 1.0);

        // Act
        let result = selector.select(&data, None);

        // Assert
        assert_eq!(result, Err(SelectError::DegenerateWeights { index: 1 }));
        assert!(matches!(selector.coefficients(), Err(SelectError::ModelNotFitted)));
    }
}
