//! Dantzig selection: ℓ1 objective under a residual-correlation bound.
//!
//! The Dantzig selector (Candès & Tao; equation 11 in Fan & Lv's
//! sure-independence-screening paper) minimizes `Σ|β_i|` subject to
//! `‖Xᵀ(y − Xβ)‖_∞ ≤ λ·σ`: the residual must be nearly uncorrelated with
//! every feature, with λσ calibrating the noise tolerance. Unlike the
//! penalized families, the data-fit requirement lives entirely in the
//! constraint, so the objective here carries no data term at all.
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        slsqp_solver::{
            traits::{InequalityConstraint, Objective, SolverOptions},
            types::{Beta, Cost, Jac},
        },
    },
    selection::{
        core::{
            data::RegressionData,
            driver::{DEFAULT_COEF_THRESHOLD, run_selection},
            penalty::flattened_sign,
        },
        errors::SelectResult,
        models::Selector,
    },
};
use ndarray::Array1;

/// Default noise-scale hyperparameter σ.
pub const DEFAULT_DANTZIG_SIGMA: f64 = 1.0;

/// Default multiplier applied to the ℓ1 objective's sign surrogate.
///
/// Strengthens the descent signal relative to the constraint's gradient
/// magnitude. An empirical convergence aid with no stated derivation —
/// a tunable knob, not fixed mathematics.
pub const DEFAULT_DANTZIG_GRADIENT_SCALE: f64 = 30.0;

/// Sign-flattening threshold for the Dantzig objective's gradient
/// surrogate. Like [`crate::selection::core::penalty::SIGN_FLATTEN_TOL`],
/// an empirical constant from the reference tuning.
pub const DANTZIG_SIGN_FLATTEN_TOL: f64 = 0.1;

/// Dantzig selector.
///
/// Hyperparameters:
/// - `lambda`: correlation-bound weight λ (> 0, caller's responsibility).
/// - `sigma`: noise standard deviation σ (default 1.0).
/// - `gradient_scale`: multiplier on the objective's gradient surrogate
///   (default 30.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Dantzig {
    /// Correlation-bound weight λ.
    pub lambda: f64,
    /// Noise standard deviation σ.
    pub sigma: f64,
    /// Multiplier on the ℓ1 gradient surrogate.
    pub gradient_scale: f64,
    coef_threshold: f64,
    coefficients: Option<Beta>,
}

impl Dantzig {
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda,
            sigma: DEFAULT_DANTZIG_SIGMA,
            gradient_scale: DEFAULT_DANTZIG_GRADIENT_SCALE,
            coef_threshold: DEFAULT_COEF_THRESHOLD,
            coefficients: None,
        }
    }

    pub fn with_sigma(lambda: f64, sigma: f64) -> Self {
        Self {
            lambda,
            sigma,
            gradient_scale: DEFAULT_DANTZIG_GRADIENT_SCALE,
            coef_threshold: DEFAULT_COEF_THRESHOLD,
            coefficients: None,
        }
    }

    /// Override the support threshold.
    pub fn with_threshold(lambda: f64, sigma: f64, coef_threshold: f64) -> Self {
        Self {
            lambda,
            sigma,
            gradient_scale: DEFAULT_DANTZIG_GRADIENT_SCALE,
            coef_threshold,
            coefficients: None,
        }
    }
}

impl Selector for Dantzig {
    fn select(
        &mut self, data: &RegressionData, options: Option<SolverOptions>,
    ) -> SelectResult<Vec<usize>> {
        let objective = DantzigObjective {
            lambda: self.lambda,
            sigma: self.sigma,
            gradient_scale: self.gradient_scale,
        };
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

/// The pure-ℓ1 Dantzig objective with its constraint set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DantzigObjective {
    pub lambda: f64,
    pub sigma: f64,
    pub gradient_scale: f64,
}

impl Objective for DantzigObjective {
    type Data = RegressionData;

    /// Pure ℓ1 norm `Σ|β_i|`; no data-fit term.
    fn loss(&self, beta: &Beta, _data: &RegressionData) -> OptResult<Cost> {
        Ok(beta.iter().map(|b| b.abs()).sum())
    }

    fn check(&self, beta: &Beta, data: &RegressionData) -> OptResult<()> {
        if beta.len() != data.n_features() {
            return Err(OptError::CoefficientLengthMismatch {
                expected: data.n_features(),
                found: beta.len(),
            });
        }
        for (index, &value) in beta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidCoefficientInput { index, value });
            }
        }
        Ok(())
    }

    /// Scaled sign surrogate `gradient_scale·sign(β)`, flattened to +1 near
    /// zero.
    fn jac(&self, beta: &Beta, _data: &RegressionData) -> OptResult<Jac> {
        Ok(beta.mapv(|b| self.gradient_scale * flattened_sign(b, DANTZIG_SIGN_FLATTEN_TOL)))
    }

    fn constraints(
        &self, _data: &RegressionData,
    ) -> Vec<Box<dyn InequalityConstraint<RegressionData> + '_>> {
        vec![Box::new(ResidualCorrelationBound { lambda: self.lambda, sigma: self.sigma })]
    }
}

/// The Dantzig optimality condition `‖Xᵀ(y − Xβ)‖_∞ ≤ λ·σ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualCorrelationBound {
    pub lambda: f64,
    pub sigma: f64,
}

impl ResidualCorrelationBound {
    /// Residual-correlation vector `Xᵀ(y − Xβ)`.
    fn correlations(&self, beta: &Beta, data: &RegressionData) -> Array1<f64> {
        let residual = &data.y - &data.x.dot(beta);
        data.x.t().dot(&residual)
    }
}

impl InequalityConstraint<RegressionData> for ResidualCorrelationBound {
    /// `g(β) = ‖Xᵀ(y − Xβ)‖_∞`.
    fn value(&self, beta: &Beta, data: &RegressionData) -> Cost {
        self.correlations(beta, data).iter().fold(0.0, |acc, c| acc.max(c.abs()))
    }

    /// Jacobian of the active max-component of the correlation vector.
    ///
    /// Locates the argmax coordinate of `|Xᵀ(y − Xβ)|`, builds the signed
    /// one-hot direction at that index, and returns `−XᵀX·direction` —
    /// treating the ℓ∞ norm as locally linear at its active coordinate
    /// (valid almost everywhere; a subgradient at ties).
    fn jac(&self, beta: &Beta, data: &RegressionData) -> Jac {
        let correlations = self.correlations(beta, data);
        let mut max_index = 0;
        let mut max_abs = f64::NEG_INFINITY;
        for (index, &c) in correlations.iter().enumerate() {
            if c.abs() > max_abs {
                max_abs = c.abs();
                max_index = index;
            }
        }
        let mut direction = Array1::<f64>::zeros(correlations.len());
        direction[max_index] = correlations[max_index].signum();
        let xtx_direction = data.x.t().dot(&data.x.dot(&direction));
        -xtx_direction
    }

    fn upper_bound(&self) -> f64 {
        self.lambda * self.sigma
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
    // - The ℓ1 loss and its scaled, flattened sign surrogate.
    // - The residual-correlation constraint value and its one-hot Jacobian
    //   against hand computations.
    //
    // They intentionally DO NOT cover:
    // - Full constrained solves; those are exercised by the integration
    //   tests.
    // -------------------------------------------------------------------------

    fn toy_data() -> RegressionData {
        RegressionData::new(array![[1.0, 0.0], [0.0, 2.0]], array![1.0, 2.0])
            .expect("toy data should validate")
    }

    #[test]
    // Purpose
    // -------
    // Verify the Dantzig objective is the plain ℓ1 norm and its gradient
    // surrogate is the flattened sign scaled by `gradient_scale`.
    //
    // Given
    // -----
    // - The default scale (30) at β = [-1.5, 0.0]: one negative coordinate
    //   and one exact zero exercising the flattened sign.
    //
    // Expect
    // ------
    // - loss == 1.5 and jac == [-30, 30].
    fn objective_is_l1_with_scaled_sign_surrogate() {
        // Arrange
        let data = toy_data();
        let objective = DantzigObjective {
            lambda: 1.0,
            sigma: 1.0,
            gradient_scale: DEFAULT_DANTZIG_GRADIENT_SCALE,
        };
        let beta = array![-1.5, 0.0];

        // Act
        let loss = objective.loss(&beta, &data).expect("loss should evaluate");
        let jac = objective.jac(&beta, &data).expect("jac should evaluate");

        // Assert
        assert!((loss - 1.5).abs() < 1e-12);
        assert_eq!(jac, array![-30.0, 30.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the constraint value is the ℓ∞ norm of the residual
    // correlations and the upper bound is λ·σ.
    //
    // Given
    // -----
    // - X = [[1, 0], [0, 2]], y = [1, 2], β = 0, so Xᵀy = [1, 4].
    // - λ = 3, σ = 0.5.
    //
    // Expect
    // ------
    // - value == 4 and upper_bound == 1.5.
    fn constraint_value_is_max_absolute_residual_correlation() {
        // Arrange
        let data = toy_data();
        let constraint = ResidualCorrelationBound { lambda: 3.0, sigma: 0.5 };
        let beta = array![0.0, 0.0];

        // Act
        let value = constraint.value(&beta, &data);

        // Assert
        assert!((value - 4.0).abs() < 1e-12);
        assert!((constraint.upper_bound() - 1.5).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the constraint Jacobian is −XᵀX·e at the signed argmax
    // coordinate of the correlation vector.
    //
    // Given
    // -----
    // - The toy data at β = 0: correlations [1, 4], argmax index 1 with
    //   positive sign, XᵀX = diag(1, 4).
    //
    // Expect
    // ------
    // - jac == [0, -4].
    fn constraint_jacobian_is_one_hot_at_active_coordinate() {
        // Arrange
        let data = toy_data();
        let constraint = ResidualCorrelationBound { lambda: 1.0, sigma: 1.0 };
        let beta = array![0.0, 0.0];

        // Act
        let jac = constraint.jac(&beta, &data);

        // Assert
        assert_eq!(jac, array![0.0, -4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the Jacobian follows the sign of the active correlation: when
    // the residual correlation at the argmax coordinate is negative, the
    // direction flips.
    //
    // Given
    // -----
    // - The toy data with y negated at β = 0: correlations [-1, -4].
    //
    // Expect
    // ------
    // - jac == [0, 4].
    fn constraint_jacobian_respects_correlation_sign() {
        // Arrange
        let data = RegressionData::new(array![[1.0, 0.0], [0.0, 2.0]], array![-1.0, -2.0])
            .expect("toy data should validate");
        let constraint = ResidualCorrelationBound { lambda: 1.0, sigma: 1.0 };
        let beta = array![0.0, 0.0];

        // Act
        let jac = constraint.jac(&beta, &data);

        // Assert
        assert_eq!(jac, array![0.0, 4.0]);
    }
}
