//! Validation helpers for constrained optimization.
//!
//! This module centralizes common consistency checks used across the
//! solver interface:
//!
//! - **Option checks**: [`verify_ftol`], [`verify_max_iter`] ensure the
//!   stopping configuration is usable before a run starts.
//! - **Jacobian validation**: [`validate_jac`] enforces correct dimension
//!   and finite entries.
//! - **Optimized coefficients**: [`validate_beta_hat`] ensures the point
//!   returned by the backend contains only finite values.
//! - **Objective values**: [`validate_loss`] checks scalar losses for
//!   finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::optimization::{
    errors::{OptError, OptResult},
    slsqp_solver::types::{Beta, Jac},
};

/// Validate the function tolerance used by the backend's stopping rule.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidFtol`] if the value is non-finite or ≤ 0.0.
pub fn verify_ftol(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidFtol { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidFtol { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the iteration cap for one solver run.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate a Jacobian vector against dimension and finiteness.
///
/// Checks:
/// - `jac.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::JacobianDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidJacobian`] with the index/value/reason of the first
///   offending element.
pub fn validate_jac(jac: &Jac, dim: usize) -> OptResult<()> {
    if jac.len() != dim {
        return Err(OptError::JacobianDimMismatch { expected: dim, found: jac.len() });
    }
    for (index, &value) in jac.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidJacobian {
                index,
                value,
                reason: "Jacobian elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate the optimized coefficient vector returned by the backend.
///
/// Accepts only a vector with all **finite** entries.
///
/// # Returns
/// The owned `Beta` if valid.
///
/// # Errors
/// Returns [`OptError::InvalidBetaHat`] if any element is non-finite.
pub fn validate_beta_hat(beta_hat: Vec<f64>) -> OptResult<Beta> {
    for (index, &value) in beta_hat.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidBetaHat {
                index,
                value,
                reason: "Optimized coefficients must be finite.",
            });
        }
    }
    Ok(Beta::from(beta_hat))
}

/// Validate that a scalar loss value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteLoss`] if the value is `NaN` or infinite.
pub fn validate_loss(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteLoss { value });
    }
    Ok(())
}
