//! core — shared selector data, penalties, objectives, and the driver.
//!
//! Purpose
//! -------
//! Collect the core building blocks for sparse linear-coefficient
//! selectors: the validated regression-data container, penalty shapes and
//! their subgradient surrogates, the penalized least-squares objective, the
//! shared selection driver, and the adaptive plug-in weighting. Selector
//! families in [`crate::selection::models`] compose these primitives.
//!
//! Key behaviors
//! -------------
//! - Define the immutable problem container ([`RegressionData`]) with all
//!   input validation at construction time.
//! - Implement the penalty family ([`Penalty`], [`ZeroPenalty`],
//!   [`LassoPenalty`], [`WeightedL1Penalty`], [`ScadPenalty`]) as pure
//!   functions of the coefficient vector.
//! - Assemble the scaled data-fit loss plus penalty into an optimizer-ready
//!   objective ([`PenalizedLeastSquares`]).
//! - Drive one optimization per `select` call and threshold the result into
//!   a sparse support set ([`run_selection`], [`support_indices`]).
//! - Compute one-time adaptive plug-in weights from an unconstrained
//!   least-squares fit ([`adaptive_weights`]).
//!
//! Conventions
//! -----------
//! - Rows are samples, columns are candidate features; β is positionally
//!   aligned with the design's columns.
//! - Penalty hyperparameter positivity is the caller's responsibility; data
//!   well-formedness is this module's responsibility.

pub mod data;
pub mod driver;
pub mod objective;
pub mod penalty;
pub mod weights;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::RegressionData;
pub use self::driver::{DEFAULT_COEF_THRESHOLD, run_selection, support_indices};
pub use self::objective::PenalizedLeastSquares;
pub use self::penalty::{
    DEFAULT_SCAD_A, LassoPenalty, Penalty, SIGN_FLATTEN_TOL, ScadPenalty, WeightedL1Penalty,
    ZeroPenalty,
};
pub use self::weights::adaptive_weights;
