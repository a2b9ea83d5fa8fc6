//! Scorer registry: named metrics over a fitted linear model.
//!
//! Purpose
//! -------
//! Resolve a metric name (string) into a scoring function over
//! `(model, X, y)` and evaluate it. Names follow the scikit-learn scorer
//! convention where applicable, so higher-is-better throughout: error
//! metrics are negated.
//!
//! Key behaviors
//! -------------
//! - [`Metric`] implements `FromStr` over case-insensitive registry names
//!   and rejects unknown names with [`EvalError::UnknownMetric`].
//! - [`Metric::score`] checks the model/design shapes, predicts once, and
//!   applies the chosen formula.
use crate::evaluation::{
    errors::{EvalError, EvalResult},
    linear_model::LinearModel,
};
use ndarray::{Array1, Array2};
use std::str::FromStr;

/// Registered scoring metrics.
///
/// Variants:
/// - `NegMeanAbsoluteError` — `−(1/M)·Σ|y − ŷ|` (the default).
/// - `NegMeanSquaredError` — `−(1/M)·Σ(y − ŷ)²`.
/// - `NegRootMeanSquaredError` — `−√((1/M)·Σ(y − ŷ)²)`.
/// - `R2` — coefficient of determination `1 − SS_res/SS_tot`.
///
/// Parsing:
/// This enum implements `FromStr` and accepts the case-insensitive names
/// `"neg_mean_absolute_error"`, `"neg_mean_squared_error"`,
/// `"neg_root_mean_squared_error"`, and `"r2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    NegMeanAbsoluteError,
    NegMeanSquaredError,
    NegRootMeanSquaredError,
    R2,
}

impl FromStr for Metric {
    type Err = EvalError;

    /// Parse a metric choice from a registry name (case-insensitive).
    ///
    /// Any unknown value returns [`EvalError::UnknownMetric`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neg_mean_absolute_error" => Ok(Metric::NegMeanAbsoluteError),
            "neg_mean_squared_error" => Ok(Metric::NegMeanSquaredError),
            "neg_root_mean_squared_error" => Ok(Metric::NegRootMeanSquaredError),
            "r2" => Ok(Metric::R2),
            _ => Err(EvalError::UnknownMetric { name: s.to_string() }),
        }
    }
}

impl Metric {
    /// Score `model` against held-out data. Higher is better.
    ///
    /// ## Arguments
    /// - `model`: fitted linear model exposing coefficients and intercept.
    /// - `x`: M×N design matrix.
    /// - `y`: length-M targets.
    ///
    /// ## Errors
    /// - [`EvalError::LengthMismatch`] if the model's coefficient length
    ///   does not match `x.ncols()` or `y.len()` does not match `x.nrows()`.
    pub fn score(&self, model: &LinearModel, x: &Array2<f64>, y: &Array1<f64>) -> EvalResult<f64> {
        if model.coefficients.len() != x.ncols() {
            return Err(EvalError::LengthMismatch {
                expected: model.coefficients.len(),
                found: x.ncols(),
            });
        }
        if y.len() != x.nrows() {
            return Err(EvalError::LengthMismatch { expected: x.nrows(), found: y.len() });
        }
        let predictions = model.predict(x);
        let residual = y - &predictions;
        let m = y.len() as f64;
        let score = match self {
            Metric::NegMeanAbsoluteError => {
                -residual.iter().map(|r| r.abs()).sum::<f64>() / m
            }
            Metric::NegMeanSquaredError => -residual.dot(&residual) / m,
            Metric::NegRootMeanSquaredError => -(residual.dot(&residual) / m).sqrt(),
            Metric::R2 => {
                let mean = y.sum() / m;
                let ss_res = residual.dot(&residual);
                let ss_tot = y.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
                if ss_tot == 0.0 {
                    // Constant target: perfect if residual-free, else worthless.
                    if ss_res == 0.0 { 1.0 } else { 0.0 }
                } else {
                    1.0 - ss_res / ss_tot
                }
            }
        };
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Registry name resolution, including case-insensitivity and unknown
    //   names.
    // - Each metric formula on a hand-computed example.
    // - Shape guards on the scoring path.
    // -------------------------------------------------------------------------

    fn perfect_model() -> (LinearModel, Array2<f64>, Array1<f64>) {
        let model = LinearModel::without_intercept(array![2.0, 0.0]);
        let x = array![[1.0, 5.0], [2.0, 5.0], [3.0, 5.0]];
        let y = array![2.0, 4.0, 6.0];
        (model, x, y)
    }

    #[test]
    // Purpose
    // -------
    // Verify that registry names resolve case-insensitively and that
    // unknown names yield `UnknownMetric`.
    //
    // Given
    // -----
    // - The names "neg_mean_absolute_error", "R2", and "accuracy".
    //
    // Expect
    // ------
    // - The first two parse to their variants; "accuracy" errors with the
    //   name preserved.
    fn metric_from_str_resolves_registry_names() {
        // Act & Assert
        assert_eq!(
            "neg_mean_absolute_error".parse::<Metric>().unwrap(),
            Metric::NegMeanAbsoluteError
        );
        assert_eq!("R2".parse::<Metric>().unwrap(), Metric::R2);
        assert_eq!(
            "accuracy".parse::<Metric>(),
            Err(EvalError::UnknownMetric { name: "accuracy".to_string() })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that a residual-free model scores 0 on the error metrics and
    // 1 on R².
    //
    // Given
    // -----
    // - A model reproducing y exactly.
    //
    // Expect
    // ------
    // - neg MAE == 0, neg MSE == 0, R² == 1.
    fn metrics_score_perfect_model_at_their_optimum() {
        // Arrange
        let (model, x, y) = perfect_model();

        // Act & Assert
        assert_eq!(Metric::NegMeanAbsoluteError.score(&model, &x, &y).unwrap(), 0.0);
        assert_eq!(Metric::NegMeanSquaredError.score(&model, &x, &y).unwrap(), 0.0);
        assert_eq!(Metric::R2.score(&model, &x, &y).unwrap(), 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify each error-metric formula on a model with a constant residual
    // of +1 per sample.
    //
    // Given
    // -----
    // - The perfect model's data with targets shifted up by 1.
    //
    // Expect
    // ------
    // - neg MAE == −1, neg MSE == −1, neg RMSE == −1.
    fn error_metrics_match_hand_computation_for_unit_residuals() {
        // Arrange
        let (model, x, y) = perfect_model();
        let shifted = y.mapv(|v| v + 1.0);

        // Act & Assert
        assert!(
            (Metric::NegMeanAbsoluteError.score(&model, &x, &shifted).unwrap() + 1.0).abs() < 1e-12
        );
        assert!(
            (Metric::NegMeanSquaredError.score(&model, &x, &shifted).unwrap() + 1.0).abs() < 1e-12
        );
        assert!(
            (Metric::NegRootMeanSquaredError.score(&model, &x, &shifted).unwrap() + 1.0).abs()
                < 1e-12
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure the scoring path rejects a model whose coefficient count does
    // not match the design's feature count.
    //
    // Given
    // -----
    // - A 1-coefficient model scored against a 2-feature design.
    //
    // Expect
    // ------
    // - `EvalError::LengthMismatch { expected: 1, found: 2 }`.
    fn score_rejects_coefficient_design_mismatch() {
        // Arrange
        let model = LinearModel::without_intercept(array![1.0]);
        let x = array![[1.0, 2.0]];
        let y = array![1.0];

        // Act
        let result = Metric::NegMeanAbsoluteError.score(&model, &x, &y);

        // Assert
        assert_eq!(result, Err(EvalError::LengthMismatch { expected: 1, found: 2 }));
    }
}
