//! Penalized least-squares objective over fixed regression data.
//!
//! This module wires a [`Penalty`] shape to the [`Objective`] trait. The
//! scalar loss is the scaled data-fit term plus the penalty,
//!
//! ```text
//! L(β) = (1/2M)·Σ(y − Xβ)² + penalty(β)
//! ```
//!
//! and its Jacobian is `(1/M)·(−Xᵀ)(y − Xβ) + penalty_subgradient(β)`. The
//! 1/2M and 1/M scaling keeps the objective's curvature independent of
//! sample count, so hyperparameters transfer across dataset sizes.
use crate::{
    optimization::{
        errors::{OptError, OptResult},
        slsqp_solver::{
            traits::Objective,
            types::{Beta, Cost, Jac},
        },
    },
    selection::core::{data::RegressionData, penalty::Penalty},
};

/// Penalized least-squares objective parameterized by a penalty shape.
///
/// One instance is built per `select` call; all data enters through the
/// [`RegressionData`] payload so the objective itself stays reentrant and
/// free of captured state.
#[derive(Debug, Clone, PartialEq)]
pub struct PenalizedLeastSquares<P: Penalty> {
    /// Penalty shape added to the data-fit term.
    pub penalty: P,
}

impl<P: Penalty> PenalizedLeastSquares<P> {
    pub fn new(penalty: P) -> Self {
        Self { penalty }
    }

    /// Jacobian of the data-fit term alone: `(1/M)·(−Xᵀ)(y − Xβ)`.
    fn data_fit_jac(&self, beta: &Beta, data: &RegressionData) -> Jac {
        let m = data.n_samples() as f64;
        let residual = &data.y - &data.x.dot(beta);
        data.x.t().dot(&residual).mapv(|v| -v / m)
    }
}

impl<P: Penalty> Objective for PenalizedLeastSquares<P> {
    type Data = RegressionData;

    /// Scaled sum of squared errors plus the penalty.
    fn loss(&self, beta: &Beta, data: &RegressionData) -> OptResult<Cost> {
        let m = data.n_samples() as f64;
        let residual = &data.y - &data.x.dot(beta);
        let sse = residual.dot(&residual);
        Ok(sse / (2.0 * m) + self.penalty.value(beta))
    }

    /// Validate a candidate coefficient vector against the data.
    ///
    /// # Behavior
    /// - Checks `β.len() == data.n_features()`.
    /// - Ensures all entries are finite.
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

    /// Data-fit Jacobian plus the penalty's subgradient surrogate.
    fn jac(&self, beta: &Beta, data: &RegressionData) -> OptResult<Jac> {
        Ok(self.data_fit_jac(beta, data) + self.penalty.subgradient(beta))
    }
}
