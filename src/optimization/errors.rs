/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Jacobian ----
    /// Implies that finite differences should be used
    JacobianNotImplemented,

    /// Jacobian dimensions do not match coefficient dimensions.
    JacobianDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Jacobian elements need to be finite
    InvalidJacobian {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- SolverOptions ----
    /// Function tolerance needs to be positive and finite.
    InvalidFtol {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// Invalid optimization method name.
    InvalidMethod {
        name: String,
        reason: &'static str,
    },

    // ---- Objective ----
    /// Objective returned a non-finite value.
    NonFiniteLoss {
        value: f64,
    },

    /// Coefficient vector length mismatch against the design matrix.
    CoefficientLengthMismatch {
        expected: usize,
        found: usize,
    },

    /// Coefficient inputs must have finite values.
    InvalidCoefficientInput {
        index: usize,
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Optimized coefficients must be finite.
    InvalidBetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Backend solver terminated with a failure status.
    NotConverged {
        status: String,
    },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Jacobian ----
            OptError::JacobianNotImplemented => {
                write!(f, "Analytic Jacobian not implemented")
            }
            OptError::JacobianDimMismatch { expected, found } => {
                write!(f, "Jacobian dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidJacobian { index, value, reason } => {
                write!(f, "Invalid Jacobian at index {index}: {value}: {reason}")
            }

            // ---- SolverOptions ----
            OptError::InvalidFtol { tol, reason } => {
                write!(f, "Invalid function tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidMethod { name, reason } => {
                write!(f, "Invalid optimization method '{name}': {reason}")
            }

            // ---- Objective ----
            OptError::NonFiniteLoss { value } => {
                write!(f, "Non-finite loss value: {value}")
            }
            OptError::CoefficientLengthMismatch { expected, found } => {
                write!(f, "Coefficient length mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidCoefficientInput { index, value } => {
                write!(f, "Invalid coefficient input at index {index}: {value}, must be finite")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidBetaHat { index, value, reason } => {
                write!(f, "Invalid optimized coefficient at index {index}: {value}: {reason}")
            }
            OptError::NotConverged { status } => {
                write!(f, "Not converged, status {status}")
            }
        }
    }
}
