//! Shared numeric helpers.
//!
//! Currently this hosts the direct ordinary least-squares solve used by
//! adaptive weighting. The solve goes through a dense SVD so it returns the
//! minimum-norm solution for rank-deficient designs, matching the behavior
//! selectors expect from a plug-in estimator; it never touches the
//! nonlinear optimizer.
use crate::selection::errors::{SelectError, SelectResult};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// Singular values at or below this relative magnitude are treated as zero
/// in the SVD solve.
const SVD_EPS: f64 = 1e-12;

/// Minimum-norm ordinary least-squares solution of `X·β ≈ y`.
///
/// ## Behavior
/// - Copies the inputs into `nalgebra` containers (row-major order is
///   preserved), takes a thin SVD, and solves in the least-squares sense.
/// - For full-rank overdetermined systems this is the unique OLS solution;
///   for rank-deficient systems it is the minimum-norm one.
///
/// ## Arguments
/// - `x`: M×N design matrix.
/// - `y`: length-M target vector.
///
/// ## Returns
/// - `Ok(β̂)` of length N.
///
/// ## Errors
/// - [`SelectError::DimensionMismatch`] if `x.nrows() != y.len()`.
/// - [`SelectError::LeastSquaresFailed`] if the SVD solve reports failure.
pub fn least_squares(x: &Array2<f64>, y: &Array1<f64>) -> SelectResult<Array1<f64>> {
    if x.nrows() != y.len() {
        return Err(SelectError::DimensionMismatch { rows: x.nrows(), targets: y.len() });
    }
    let design = DMatrix::from_row_iterator(x.nrows(), x.ncols(), x.iter().cloned());
    let targets = DVector::from_iterator(y.len(), y.iter().cloned());
    let svd = design.svd(true, true);
    let solution = svd
        .solve(&targets, SVD_EPS)
        .map_err(|reason| SelectError::LeastSquaresFailed { reason })?;
    Ok(Array1::from_iter(solution.iter().cloned()))
}
