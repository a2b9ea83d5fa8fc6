//! Regression data containers for sparse selectors.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the design matrix and target
//! vector shared by every selector family. This module centralizes input
//! validation for raw regression data so downstream code can assume clean,
//! finite, dimensionally consistent inputs.
//!
//! Key behaviors
//! -------------
//! - [`RegressionData`] enforces basic data invariants (non-empty design,
//!   finite entries, row count matching the target length).
//!
//! Invariants & assumptions
//! ------------------------
//! - The design matrix must have at least one row and one column.
//! - All design and target entries are finite.
//! - `x.nrows() == y.len()` — rows are paired positionally with targets.
//!
//! Conventions
//! -----------
//! - Rows are samples, columns are candidate features; indexing is 0-based.
//! - Selectors never mutate the data; a single [`RegressionData`] may be
//!   shared across selector instances and held-out evaluation calls.
use crate::selection::errors::{SelectError, SelectResult};
use ndarray::{Array1, Array2};

/// `RegressionData` — validated design matrix plus paired targets.
///
/// Purpose
/// -------
/// Represent one immutable regression problem `(X, y)` for selector fitting
/// and evaluation. This type centralizes basic input checks so downstream
/// code can assume well-formed data.
///
/// Fields
/// ------
/// - `x`: `Array2<f64>`
///   M×N design matrix; must be non-empty with finite entries.
/// - `y`: `Array1<f64>`
///   Length-M target vector paired row-wise with `x`.
///
/// Invariants
/// ----------
/// - `x.nrows() > 0` and `x.ncols() > 0`.
/// - `x.nrows() == y.len()`.
/// - All entries of `x` and `y` are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    /// M×N design matrix (rows = samples, columns = candidate features).
    pub x: Array2<f64>,
    /// Length-M target vector.
    pub y: Array1<f64>,
}

impl RegressionData {
    /// Construct a validated [`RegressionData`] instance.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `Array2<f64>`
    ///   Raw design matrix. Must be non-empty with finite entries.
    /// - `y`: `Array1<f64>`
    ///   Raw target vector. Must have length `x.nrows()` and finite entries.
    ///
    /// Returns
    /// -------
    /// `SelectResult<RegressionData>`
    ///   - `Ok(RegressionData)` if all invariants are satisfied.
    ///   - `Err(SelectError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `SelectError::EmptyData` when `x` has zero rows or columns.
    /// - `SelectError::DimensionMismatch` when `x.nrows() != y.len()`.
    /// - `SelectError::NonFiniteDesign` / `SelectError::NonFiniteTarget`
    ///   pointing at the first offending entry.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> SelectResult<Self> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(SelectError::EmptyData);
        }
        if x.nrows() != y.len() {
            return Err(SelectError::DimensionMismatch { rows: x.nrows(), targets: y.len() });
        }
        for ((row, col), &value) in x.indexed_iter() {
            if !value.is_finite() {
                return Err(SelectError::NonFiniteDesign { row, col, value });
            }
        }
        for (index, &value) in y.iter().enumerate() {
            if !value.is_finite() {
                return Err(SelectError::NonFiniteTarget { index, value });
            }
        }
        Ok(Self { x, y })
    }

    /// Number of samples M.
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Number of candidate features N.
    pub fn n_features(&self) -> usize {
        self.x.ncols()
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
    // - Happy-path construction of `RegressionData`.
    // - Rejection of empty, mismatched, and non-finite inputs with the
    //   expected `SelectError` variant.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a well-formed (X, y) pair constructs and reports its
    // dimensions correctly.
    //
    // Given
    // -----
    // - A 3×2 design matrix with finite entries and a length-3 target.
    //
    // Expect
    // ------
    // - Construction succeeds; `n_samples() == 3` and `n_features() == 2`.
    fn regression_data_new_accepts_well_formed_input() {
        // Arrange
        let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let y = array![1.0, 0.0, -1.0];

        // Act
        let data = RegressionData::new(x, y).expect("well-formed data should validate");

        // Assert
        assert_eq!(data.n_samples(), 3);
        assert_eq!(data.n_features(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Ensure construction rejects a design matrix whose row count does not
    // match the target length.
    //
    // Given
    // -----
    // - A 2×2 design matrix and a length-3 target.
    //
    // Expect
    // ------
    // - `SelectError::DimensionMismatch { rows: 2, targets: 3 }`.
    fn regression_data_new_rejects_dimension_mismatch() {
        // Arrange
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1.0, 0.0, -1.0];

        // Act
        let result = RegressionData::new(x, y);

        // Assert
        assert_eq!(result, Err(SelectError::DimensionMismatch { rows: 2, targets: 3 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure construction rejects an empty design matrix.
    //
    // Given
    // -----
    // - A 0×0 design matrix and an empty target.
    //
    // Expect
    // ------
    // - `SelectError::EmptyData`.
    fn regression_data_new_rejects_empty_design() {
        // Arrange
        let x = Array2::<f64>::zeros((0, 0));
        let y = Array1::<f64>::zeros(0);

        // Act
        let result = RegressionData::new(x, y);

        // Assert
        assert_eq!(result, Err(SelectError::EmptyData));
    }

    #[test]
    // Purpose
    // -------
    // Ensure construction pinpoints the first non-finite design entry and
    // the first non-finite target entry.
    //
    // Given
    // -----
    // - A design matrix with NaN at (1, 0); separately, a target with +∞ at
    //   index 1.
    //
    // Expect
    // ------
    // - `NonFiniteDesign { row: 1, col: 0, .. }` and
    //   `NonFiniteTarget { index: 1, .. }` respectively.
    fn regression_data_new_rejects_non_finite_entries() {
        // Arrange
        let x_bad = array![[1.0, 2.0], [f64::NAN, 4.0]];
        let y_ok = array![1.0, 0.0];
        let x_ok = array![[1.0, 2.0], [3.0, 4.0]];
        let y_bad = array![1.0, f64::INFINITY];

        // Act & Assert
        assert!(matches!(
            RegressionData::new(x_bad, y_ok),
            Err(SelectError::NonFiniteDesign { row: 1, col: 0, .. })
        ));
        assert!(matches!(
            RegressionData::new(x_ok, y_bad),
            Err(SelectError::NonFiniteTarget { index: 1, .. })
        ));
    }
}
