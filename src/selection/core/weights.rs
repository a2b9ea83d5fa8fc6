//! Adaptive plug-in weights for the adaptive Lasso.
//!
//! The weight vector `w_i = |β̂_i|^(−γ)` is computed once per `select` call
//! from the unconstrained least-squares fit of the data, then reweights the
//! ℓ1 penalty elementwise. Down-weighting coefficients the data already
//! suggests are large approximates oracle-like selection consistency.
//!
//! A β̂_i of exactly zero is a numerically fragile edge inherent to the
//! algorithm: its weight would be infinite. Rather than letting infinities
//! enter the penalty and fail the solver downstream, the computation
//! rejects such fits explicitly.
use crate::{
    selection::{
        core::data::RegressionData,
        errors::{SelectError, SelectResult},
    },
    utils::least_squares,
};
use ndarray::Array1;

/// Compute the adaptive penalty weights `w_i = |β̂_i|^(−γ)`.
///
/// ## Behavior
/// - Solves the unconstrained least-squares problem with a direct SVD solve
///   (not the nonlinear optimizer).
/// - Raises each `|β̂_i|` to the power `−γ`.
///
/// ## Arguments
/// - `data`: validated regression data.
/// - `gamma`: adaptive exponent γ (> 0, caller's responsibility).
///
/// ## Returns
/// - `Ok(w)` of length `data.n_features()`.
///
/// ## Errors
/// - [`SelectError::DegenerateWeights`] if any weight is non-finite, which
///   happens exactly when some β̂_i is (numerically) zero.
/// - Propagates [`SelectError::LeastSquaresFailed`] from the solve.
pub fn adaptive_weights(data: &RegressionData, gamma: f64) -> SelectResult<Array1<f64>> {
    let beta_hat = least_squares(&data.x, &data.y)?;
    let mut weights = Array1::zeros(beta_hat.len());
    for (index, &coef) in beta_hat.iter().enumerate() {
        let weight = coef.abs().powf(-gamma);
        if !weight.is_finite() {
            return Err(SelectError::DegenerateWeights { index });
        }
        weights[index] = weight;
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact agreement of the weights with |β̂|^(−γ) on a design where the
    //   least-squares solution is known in closed form.
    // - Explicit rejection of a zero least-squares coefficient.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that on an identity design (so β̂ == y exactly, no
    // collinearity) the weights satisfy w_i == |β̂_i|^(−γ) to machine
    // precision.
    //
    // Given
    // -----
    // - X = I₃, y = [2, -0.5, 4], γ = 1.5.
    //
    // Expect
    // ------
    // - w == [2^-1.5, 0.5^-1.5, 4^-1.5] within 1e-10.
    fn adaptive_weights_match_closed_form_on_identity_design() {
        // Arrange
        let x = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let y = array![2.0, -0.5, 4.0];
        let data = RegressionData::new(x, y.clone()).expect("data should validate");
        let gamma = 1.5;

        // Act
        let weights = adaptive_weights(&data, gamma).expect("weights should compute");

        // Assert
        for (w, b) in weights.iter().zip(y.iter()) {
            let expected = b.abs().powf(-gamma);
            assert!((w - expected).abs() < 1e-10, "expected {expected}, got {w}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a least-squares coefficient of exactly zero is rejected as a
    // degenerate weight instead of producing an infinity.
    //
    // Given
    // -----
    // - X = I₃ and y = [1, 0, 2], so β̂₁ == 0.
    //
    // Expect
    // ------
    // - `SelectError::DegenerateWeights { index: 1 }`.
    fn adaptive_weights_reject_zero_least_squares_coefficient() {
        // Arrange
        let x = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let y = array![1.0, 0.0, 2.0];
        let data = RegressionData::new(x, y).expect("data should validate");

        // Act
        let result = adaptive_weights(&data, 1.0);

        // Assert
        assert_eq!(result, Err(SelectError::DegenerateWeights { index: 1 }));
    }
}
