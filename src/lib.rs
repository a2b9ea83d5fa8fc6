//! sparse_selectors — sparse linear-coefficient selection via constrained
//! optimization.
//!
//! Purpose
//! -------
//! Serve as the crate root for a family of sparse linear-coefficient
//! selectors: algorithms that, given an M×N design matrix and an M-vector
//! of targets, select the subset of columns believed to be truly
//! predictive by solving a penalized or constrained optimization problem
//! over the coefficient vector.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`selection`, `optimization`, `evaluation`,
//!   `utils`) as the public crate surface.
//! - `selection` hosts the selector families (plain least squares, Lasso,
//!   adaptive Lasso, SCAD, Dantzig) behind a common `Selector` trait.
//! - `optimization` wraps the external SLSQP backend behind an adapter
//!   layer with validation and a unified error surface.
//! - `evaluation` scores fitted coefficient vectors against held-out data
//!   via a named metric registry.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work operates on finite `f64` `ndarray` containers;
//!   invalid inputs surface as typed errors at construction or call time,
//!   never as panics.
//! - Each selector instance owns its hyperparameters and fitted state
//!   exclusively; there is no shared mutable state across instances, so
//!   multiple selectors may run concurrently.
//! - One `select` call is one blocking solve: no cancellation mechanism
//!   exists beyond the solver's own iteration cap.
//!
//! Downstream usage
//! ----------------
//! - Construct a `selection::RegressionData` from raw arrays, pick a
//!   selector family with its hyperparameters, call `select`, then read
//!   `coefficients()` or `evaluate(...)` on the fitted instance.
//! - Advanced callers can implement `optimization::slsqp_solver::Objective`
//!   directly to drive the shared solver layer with custom loss shapes.

pub mod evaluation;
pub mod optimization;
pub mod selection;
pub mod utils;
