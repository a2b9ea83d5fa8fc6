//! evaluation::errors — error types for metric resolution and scoring.

pub type EvalResult<T> = Result<T, EvalError>;

/// EvalError — error conditions for model evaluation.
///
/// Variants
/// --------
/// - `UnknownMetric(name)`
///   The metric name is not registered in the scorer registry.
/// - `LengthMismatch { expected, found }`
///   The model's coefficient length does not match the number of features
///   in the scored design matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    UnknownMetric { name: String },
    LengthMismatch { expected: usize, found: usize },
}

impl std::error::Error for EvalError {}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnknownMetric { name } => {
                write!(f, "Unknown metric '{name}'")
            }
            EvalError::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: model has {expected} coefficients, design has {found} features")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that `EvalError::UnknownMetric` embeds the offending metric
    // name in its `Display` representation.
    //
    // Given
    // -----
    // - An `EvalError::UnknownMetric` with name "neg_banana_error".
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "neg_banana_error".
    fn eval_error_unknown_metric_includes_name_in_display() {
        // Arrange
        let err = EvalError::UnknownMetric { name: "neg_banana_error".to_string() };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("neg_banana_error"),
            "Display message should include the metric name.\nGot: {msg}"
        );
    }
}
