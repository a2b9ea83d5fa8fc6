//! Minimal linear model used by the evaluation adapter.
//!
//! Selectors do not carry a full regression implementation; scoring a
//! fitted coefficient vector only needs predictions from a fixed linear
//! map. [`LinearModel`] exposes exactly the coefficient and intercept
//! attributes the scorer registry consumes.
use ndarray::{Array1, Array2};

/// A fixed linear model `ŷ = X·coefficients + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Per-feature coefficients (length N).
    pub coefficients: Array1<f64>,
    /// Additive intercept.
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self { coefficients, intercept }
    }

    /// Zero-intercept model, as built from a selector's fitted coefficients.
    pub fn without_intercept(coefficients: Array1<f64>) -> Self {
        Self { coefficients, intercept: 0.0 }
    }

    /// Predict targets for each row of `x`.
    ///
    /// Callers must ensure `x.ncols() == self.coefficients.len()`; the
    /// scorer registry checks this before calling.
    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        x.dot(&self.coefficients) + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify that `predict` applies the linear map with the intercept.
    //
    // Given
    // -----
    // - Coefficients [2, -1], intercept 0.5, and two rows.
    //
    // Expect
    // ------
    // - Predictions [2·1 − 1·1 + 0.5, 2·0 − 1·3 + 0.5] == [1.5, -2.5].
    fn predict_applies_linear_map_with_intercept() {
        // Arrange
        let model = LinearModel::new(array![2.0, -1.0], 0.5);
        let x = array![[1.0, 1.0], [0.0, 3.0]];

        // Act
        let predictions = model.predict(&x);

        // Assert
        assert_eq!(predictions, array![1.5, -2.5]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `without_intercept` fixes the intercept at zero.
    //
    // Given
    // -----
    // - Coefficients [1, 1] and a single row [2, 3].
    //
    // Expect
    // ------
    // - Prediction equals the plain dot product, 5.
    fn without_intercept_predicts_plain_dot_product() {
        // Arrange
        let model = LinearModel::without_intercept(array![1.0, 1.0]);
        let x = array![[2.0, 3.0]];

        // Act
        let predictions = model.predict(&x);

        // Assert
        assert_eq!(predictions, array![5.0]);
    }
}
