//! Penalty terms and their subgradient surrogates.
//!
//! Purpose
//! -------
//! Implement the sparsity-inducing penalty shapes shared by the penalized
//! least-squares selector families: the zero penalty (plain least squares),
//! the ℓ1 Lasso penalty, the weighted ℓ1 penalty used by adaptive Lasso,
//! and the smoothly clipped absolute deviation (SCAD) penalty.
//!
//! Key behaviors
//! -------------
//! - Each penalty maps a coefficient vector to a scalar via
//!   [`Penalty::value`] and to a usable derivative-like vector via
//!   [`Penalty::subgradient`].
//! - ℓ1-style subgradients use a *flattened sign*: the sign of a
//!   coefficient sitting exactly at zero is forced to +1 so the solver is
//!   never handed a zero gradient at the origin, which would stall descent
//!   from the all-zero initial point.
//!
//! Conventions
//! -----------
//! - Subgradients are surrogates, not true gradients, at the kinks of the
//!   underlying penalties; they are what the solver consumes, nothing more.
//! - Penalty parameters (λ > 0, a > 1, weights > 0) are the caller's
//!   responsibility; this module performs no hyperparameter validation.
//! - [`SIGN_FLATTEN_TOL`] is an empirical convergence aid carried over from
//!   the reference tuning, exposed as a named constant rather than inferred.
use crate::optimization::slsqp_solver::types::{Beta, Jac};
use ndarray::Array1;

/// Threshold under which a sign value is flattened to +1 in ℓ1-style
/// subgradients. Signs only take values in {-1, 0, +1}, so any threshold in
/// (0, 1) singles out exact zeros; 0.2 is the reference tuning.
pub const SIGN_FLATTEN_TOL: f64 = 0.2;

/// Default SCAD shape parameter `a`.
pub const DEFAULT_SCAD_A: f64 = 3.7;

/// Sign surrogate for ℓ1-style subgradients.
///
/// Returns `sign(b)` except that signs whose magnitude falls below `tol`
/// (i.e. exact zeros) are replaced by +1.
pub fn flattened_sign(b: f64, tol: f64) -> f64 {
    let sign = if b == 0.0 { 0.0 } else { b.signum() };
    if sign.abs() < tol { 1.0 } else { sign }
}

/// Penalty shape for a penalized least-squares selector.
///
/// Contract:
/// - `value(β) -> scalar` — the penalty added to the data-fit loss.
/// - `subgradient(β) -> length-N vector` — a usable subgradient surrogate,
///   not necessarily the true gradient where the penalty is non-smooth.
pub trait Penalty {
    fn value(&self, beta: &Beta) -> f64;
    fn subgradient(&self, beta: &Beta) -> Jac;
}

/// Zero penalty: plain least squares.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZeroPenalty;

impl Penalty for ZeroPenalty {
    fn value(&self, _beta: &Beta) -> f64 {
        0.0
    }

    fn subgradient(&self, beta: &Beta) -> Jac {
        Array1::zeros(beta.len())
    }
}

/// Lasso penalty `Σ λ·|β_i|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LassoPenalty {
    /// Weight λ for the ℓ1 term.
    pub lambda: f64,
}

impl LassoPenalty {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }
}

impl Penalty for LassoPenalty {
    fn value(&self, beta: &Beta) -> f64 {
        self.lambda * beta.iter().map(|b| b.abs()).sum::<f64>()
    }

    /// `λ·sign(β_i)`, with the sign flattened to +1 at exact zeros.
    fn subgradient(&self, beta: &Beta) -> Jac {
        beta.mapv(|b| self.lambda * flattened_sign(b, SIGN_FLATTEN_TOL))
    }
}

/// Weighted ℓ1 penalty `Σ λ·w_i·|β_i|`.
///
/// Identical in shape to the Lasso penalty, with λ replaced elementwise by
/// `λ·w_i`. Used by the adaptive Lasso with plug-in weights
/// `w_i = |β̂_i|^(−γ)` computed once before optimization begins, which
/// down-weights the penalty for coefficients the data already suggests are
/// large.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedL1Penalty {
    /// Weight λ for the ℓ1 term.
    pub lambda: f64,
    /// Per-coefficient penalty multipliers (length N).
    pub weights: Array1<f64>,
}

impl WeightedL1Penalty {
    pub fn new(lambda: f64, weights: Array1<f64>) -> Self {
        Self { lambda, weights }
    }
}

impl Penalty for WeightedL1Penalty {
    fn value(&self, beta: &Beta) -> f64 {
        self.lambda
            * beta.iter().zip(self.weights.iter()).map(|(b, w)| w * b.abs()).sum::<f64>()
    }

    fn subgradient(&self, beta: &Beta) -> Jac {
        Array1::from_iter(
            beta.iter()
                .zip(self.weights.iter())
                .map(|(b, w)| self.lambda * w * flattened_sign(*b, SIGN_FLATTEN_TOL)),
        )
    }
}

/// Smoothly clipped absolute deviation (SCAD) penalty.
///
/// Piecewise shape with three regimes keyed by `|β_i|` relative to λ and
/// `a·λ` (a > 1):
///
/// - `|β| ≤ λ`:          `λ|β|`
/// - `λ < |β| ≤ aλ`:     `−(β² − 2aλ|β| + λ²) / (2(a−1))`
/// - `|β| > aλ`:          `(a+1)λ²/2`
///
/// The penalty is continuous across both breakpoints and its derivative
/// surrogate vanishes once `|β| > aλ`, so large coefficients are not
/// shrunk further while small ones still shrink to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScadPenalty {
    /// Weight λ for the penalty.
    pub lambda: f64,
    /// Shape parameter `a` (> 1).
    pub a: f64,
}

impl ScadPenalty {
    /// SCAD penalty with the reference shape `a = 3.7`.
    pub fn new(lambda: f64) -> Self {
        Self { lambda, a: DEFAULT_SCAD_A }
    }

    pub fn with_shape(lambda: f64, a: f64) -> Self {
        Self { lambda, a }
    }
}

impl Penalty for ScadPenalty {
    fn value(&self, beta: &Beta) -> f64 {
        let lambda = self.lambda;
        let a = self.a;
        beta.iter()
            .map(|b| {
                let b = b.abs();
                if b <= lambda {
                    lambda * b
                } else if b <= a * lambda {
                    -(b * b - 2.0 * a * lambda * b + lambda * lambda) / (2.0 * (a - 1.0))
                } else {
                    (a + 1.0) * lambda * lambda / 2.0
                }
            })
            .sum()
    }

    /// `λ` for `|β| ≤ λ`, else `λ·max(0, aλ−|β|)/((a−1)λ)` — vanishing once
    /// `|β| > aλ`.
    fn subgradient(&self, beta: &Beta) -> Jac {
        let lambda = self.lambda;
        let a = self.a;
        beta.mapv(|b| {
            let b = b.abs();
            if b <= lambda {
                lambda
            } else {
                lambda * (a * lambda - b).max(0.0) / ((a - 1.0) * lambda)
            }
        })
    }
}
