//! selection::errors — shared error types for the selector stack.
//!
//! Purpose
//! -------
//! Provide error enums and result aliases for selector routines, together
//! with conversion layers from the optimization and evaluation subtrees.
//! This keeps selector-specific validation and runtime failures localized
//! while exposing a uniform error surface to callers.
//!
//! Key behaviors
//! -------------
//! - Define [`SelectResult`] and [`SelectError`] as the canonical result and
//!   error types for selection, fitted-state reads, and evaluation.
//! - Attach human-readable `Display` messages to each error variant so that
//!   diagnostics and logs are meaningful without additional context.
//! - Implement `From<OptError>` and `From<EvalError>` so solver failures and
//!   metric resolution errors propagate with `?`.
//!
//! Conventions
//! -----------
//! - `NotConverged` is non-recoverable within one `select` call: no retry,
//!   no fallback. The caller decides whether to adjust hyperparameters or
//!   options and call again.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "rows must match targets") rather than backend details.
use crate::{evaluation::errors::EvalError, optimization::errors::OptError};

pub type SelectResult<T> = Result<T, SelectError>;

/// SelectError — error conditions for sparse selectors.
///
/// Variants
/// --------
/// - `ModelNotFitted`
///   A read of fitted state (coefficients, support, evaluation) was
///   attempted before a successful `select` call.
/// - `NotConverged { status }`
///   The backend solver terminated with a failure status; the status string
///   is attached for diagnosis.
/// - `DegenerateWeights { index }`
///   An adaptive plug-in weight was non-finite because the unconstrained
///   least-squares coefficient at `index` is (numerically) zero.
/// - `LeastSquaresFailed { reason }`
///   The direct SVD least-squares solve used by adaptive weighting failed.
/// - `EmptyData`
///   The design matrix has zero rows or zero columns.
/// - `DimensionMismatch { rows, targets }`
///   The design matrix row count does not match the target vector length.
/// - `NonFiniteDesign { row, col, value }`
///   A design-matrix entry is NaN or ±∞.
/// - `NonFiniteTarget { index, value }`
///   A target entry is NaN or ±∞.
/// - `UnknownMetric { name }`
///   A metric name could not be resolved by the scorer registry.
/// - `MetricLengthMismatch { expected, found }`
///   A model's coefficient length does not match the scored design matrix.
/// - `Optimization { text }`
///   Fallback wrapper for optimizer errors with no richer mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectError {
    //------ Fitted-state lifecycle ------
    ModelNotFitted,

    //------ Solver outcome ------
    NotConverged { status: String },

    //------ Adaptive weighting ------
    DegenerateWeights { index: usize },
    LeastSquaresFailed { reason: &'static str },

    //------ Input validation ------
    EmptyData,
    DimensionMismatch { rows: usize, targets: usize },
    NonFiniteDesign { row: usize, col: usize, value: f64 },
    NonFiniteTarget { index: usize, value: f64 },

    //------ Evaluation ------
    UnknownMetric { name: String },
    MetricLengthMismatch { expected: usize, found: usize },

    //------ Fallback ------
    Optimization { text: String },
}

impl std::error::Error for SelectError {}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::ModelNotFitted => {
                write!(f, "Selector is not fitted; call select before reading coefficients")
            }
            SelectError::NotConverged { status } => {
                write!(f, "Not converged, status {status}")
            }
            SelectError::DegenerateWeights { index } => {
                write!(
                    f,
                    "Degenerate adaptive weight at index {index}: least-squares coefficient is zero"
                )
            }
            SelectError::LeastSquaresFailed { reason } => {
                write!(f, "Least-squares solve failed: {reason}")
            }
            SelectError::EmptyData => {
                write!(f, "Design matrix must have at least one row and one column")
            }
            SelectError::DimensionMismatch { rows, targets } => {
                write!(f, "Dimension mismatch: {rows} design rows vs {targets} targets")
            }
            SelectError::NonFiniteDesign { row, col, value } => {
                write!(f, "Invalid design entry at ({row}, {col}): {value}, must be finite")
            }
            SelectError::NonFiniteTarget { index, value } => {
                write!(f, "Invalid target at index {index}: {value}, must be finite")
            }
            SelectError::UnknownMetric { name } => {
                write!(f, "Unknown metric '{name}'")
            }
            SelectError::MetricLengthMismatch { expected, found } => {
                write!(f, "Metric length mismatch: expected {expected} coefficients, found {found}")
            }
            SelectError::Optimization { text } => {
                write!(f, "Optimization error: {text}")
            }
        }
    }
}

impl From<OptError> for SelectError {
    fn from(err: OptError) -> Self {
        match err {
            OptError::NotConverged { status } => SelectError::NotConverged { status },
            other => SelectError::Optimization { text: other.to_string() },
        }
    }
}

impl From<EvalError> for SelectError {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::UnknownMetric { name } => SelectError::UnknownMetric { name },
            EvalError::LengthMismatch { expected, found } => {
                SelectError::MetricLengthMismatch { expected, found }
            }
        }
    }
}
