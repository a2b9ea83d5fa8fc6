//! Adapter that exposes a user [`Objective`] to the SLSQP backend.
//!
//! The backend consumes plain callbacks of the form
//! `Fn(&[f64], Option<&mut [f64]>, &mut ()) -> f64`, with inequality
//! constraints in `g(β) ≤ 0` form. This adapter owns the bridging: it
//! rebuilds `Beta` vectors from raw slices, fills gradient slots from the
//! analytic Jacobian (or a finite-difference fallback when none is
//! implemented), shifts constraint bounds into the backend's canonical form,
//! and captures the first `OptError` raised inside a callback so it can be
//! surfaced instead of a generic solver failure.
use std::cell::RefCell;

use crate::optimization::{
    errors::{OptError, OptResult},
    slsqp_solver::{
        traits::Objective,
        types::{Beta, Cost, Jac},
        validation::validate_jac,
    },
};
use finitediff::FiniteDiff;

/// Backend-facing constraint callback type.
///
/// Matches the `slsqp` crate's `Func` contract so boxed closures can be
/// handed to the backend as trait objects.
pub type ConstraintFn<'a> = Box<dyn Fn(&[f64], Option<&mut [f64]>, &mut ()) -> f64 + 'a>;

/// Bridges a user [`Objective`] to the backend's callback contract.
///
/// - The objective callback returns `L(β)`; errors raised by the user's
///   `loss`/`jac` are recorded in `err_slot` and `NaN` is returned to the
///   backend (which then fails, letting the recorded error win).
/// - Constraint callbacks return `g(β) − bound` so the backend sees the
///   canonical `≤ 0` form.
pub struct SlsqpAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
    err_slot: RefCell<Option<OptError>>,
}

impl<'a, F: Objective> SlsqpAdapter<'a, F> {
    /// Construct a new adapter over a user [`Objective`] and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data, err_slot: RefCell::new(None) }
    }

    /// Evaluate the loss `L(β)`, checking the result is finite.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the user's `loss` via `?`.
    /// - Returns `NonFiniteLoss` if the value is not finite.
    pub fn loss(&self, beta: &Beta) -> OptResult<Cost> {
        let value = self.f.loss(beta, self.data)?;
        if !value.is_finite() {
            return Err(OptError::NonFiniteLoss { value });
        }
        Ok(value)
    }

    /// Evaluate the (sub)gradient of the loss at `β`.
    ///
    /// Behavior:
    /// - If the user implements `jac(β, data)`, validate and return it.
    /// - Otherwise, compute a finite-difference gradient of the loss:
    ///   - Try *central* differences first.
    ///   - If any evaluation of the loss failed (captured via
    ///     `closure_err`), surface that error.
    ///   - Validate the FD gradient; if it fails (e.g., non-finite), retry
    ///     once with *forward* differences and validate again.
    ///
    /// Implementation notes:
    /// - The FD closure must return `f64`, so `?` cannot be used inside it;
    ///   the first error is captured in `closure_err` and the closure
    ///   returns `NaN`. After FD, the captured error is turned back into a
    ///   real error.
    ///
    /// # Errors
    /// - Propagates user errors from `jac` (non-`JacobianNotImplemented`).
    /// - Propagates any error raised by loss evaluations performed during FD.
    /// - Returns validation errors if the gradient has wrong dimension or
    ///   non-finite entries.
    pub fn gradient(&self, beta: &Beta) -> OptResult<Jac> {
        let dim = beta.len();
        match self.f.jac(beta, self.data) {
            Ok(jac) => {
                validate_jac(&jac, dim)?;
                Ok(jac)
            }
            Err(OptError::JacobianNotImplemented) => {
                let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
                let loss_fn = |b: &Beta| -> f64 {
                    match self.f.loss(b, self.data) {
                        Ok(value) => value,
                        Err(e) => {
                            let mut slot = closure_err.borrow_mut();
                            if slot.is_none() {
                                *slot = Some(e);
                            }
                            f64::NAN
                        }
                    }
                };
                let fd_jac = beta.central_diff(&loss_fn);
                if let Some(err) = closure_err.take() {
                    return Err(err);
                }
                match validate_jac(&fd_jac, dim) {
                    Ok(()) => Ok(fd_jac),
                    Err(_) => {
                        let fd_jac = beta.forward_diff(&loss_fn);
                        if let Some(err) = closure_err.take() {
                            return Err(err);
                        }
                        validate_jac(&fd_jac, dim)?;
                        Ok(fd_jac)
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Objective callback body in the backend's raw-slice form.
    ///
    /// Fills the gradient slots when the backend asks for them; any error
    /// from the user's objective is recorded and `NaN` returned, which makes
    /// the backend terminate with a failure status that `run_slsqp` then
    /// replaces with the recorded error.
    pub fn eval_objective(&self, x: &[f64], grad: Option<&mut [f64]>) -> f64 {
        let beta = Beta::from(x.to_vec());
        if let Some(slots) = grad {
            match self.gradient(&beta) {
                Ok(jac) => {
                    for (slot, value) in slots.iter_mut().zip(jac.iter()) {
                        *slot = *value;
                    }
                }
                Err(e) => {
                    self.record_error(e);
                    for slot in slots.iter_mut() {
                        *slot = f64::NAN;
                    }
                }
            }
        }
        match self.loss(&beta) {
            Ok(value) => value,
            Err(e) => {
                self.record_error(e);
                f64::NAN
            }
        }
    }

    /// Build one backend callback per declared inequality constraint.
    ///
    /// Each callback evaluates `g(β) − bound` and, when asked, copies the
    /// constraint Jacobian into the gradient slots. Constraint values and
    /// Jacobians are trusted as produced; constraint implementations are
    /// pure functions of `(β, data)` fixed at selector construction.
    pub fn constraint_closures(&self) -> Vec<ConstraintFn<'_>> {
        self.f
            .constraints(self.data)
            .into_iter()
            .map(|constraint| {
                let data = self.data;
                let callback: ConstraintFn<'_> =
                    Box::new(move |x: &[f64], grad: Option<&mut [f64]>, _: &mut ()| {
                        let beta = Beta::from(x.to_vec());
                        if let Some(slots) = grad {
                            let jac = constraint.jac(&beta, data);
                            for (slot, value) in slots.iter_mut().zip(jac.iter()) {
                                *slot = *value;
                            }
                        }
                        constraint.value(&beta, data) - constraint.upper_bound()
                    });
                callback
            })
            .collect()
    }

    /// Record the first error raised inside a backend callback.
    pub fn record_error(&self, err: OptError) {
        let mut slot = self.err_slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    /// Take the recorded callback error, if any.
    pub fn take_error(&self) -> Option<OptError> {
        self.err_slot.take()
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
    // - Analytic-Jacobian passthrough and validation in `gradient`.
    // - Finite-difference fallback when no Jacobian is implemented.
    // - Error capture through `eval_objective`.
    //
    // They intentionally DO NOT cover:
    // - End-to-end backend runs; those are exercised through the selection
    //   driver and the integration tests.
    // -------------------------------------------------------------------------

    struct Quadratic;

    impl Objective for Quadratic {
        type Data = ();

        fn loss(&self, beta: &Beta, _data: &()) -> OptResult<Cost> {
            Ok(beta.dot(beta))
        }

        fn check(&self, _beta: &Beta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    struct QuadraticWithJac;

    impl Objective for QuadraticWithJac {
        type Data = ();

        fn loss(&self, beta: &Beta, _data: &()) -> OptResult<Cost> {
            Ok(beta.dot(beta))
        }

        fn check(&self, _beta: &Beta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn jac(&self, beta: &Beta, _data: &()) -> OptResult<Jac> {
            Ok(beta.mapv(|b| 2.0 * b))
        }
    }

    struct FailingLoss;

    impl Objective for FailingLoss {
        type Data = ();

        fn loss(&self, _beta: &Beta, _data: &()) -> OptResult<Cost> {
            Err(OptError::NonFiniteLoss { value: f64::NAN })
        }

        fn check(&self, _beta: &Beta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `gradient` returns the analytic Jacobian unchanged when
    // the objective implements one.
    //
    // Given
    // -----
    // - `QuadraticWithJac` (loss βᵀβ, jac 2β) at β = [1, -2].
    //
    // Expect
    // ------
    // - The gradient equals [2, -4] exactly.
    fn gradient_uses_analytic_jacobian_when_available() {
        // Arrange
        let f = QuadraticWithJac;
        let adapter = SlsqpAdapter::new(&f, &());
        let beta = array![1.0, -2.0];

        // Act
        let jac = adapter.gradient(&beta).expect("analytic jacobian should validate");

        // Assert
        assert_eq!(jac, array![2.0, -4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `gradient` falls back to finite differences when no
    // analytic Jacobian is implemented, and that the result approximates
    // the true gradient.
    //
    // Given
    // -----
    // - `Quadratic` (loss βᵀβ, no jac) at β = [0.5, -1.5].
    //
    // Expect
    // ------
    // - The FD gradient matches 2β within 1e-5 per coordinate.
    fn gradient_falls_back_to_finite_differences() {
        // Arrange
        let f = Quadratic;
        let adapter = SlsqpAdapter::new(&f, &());
        let beta = array![0.5, -1.5];

        // Act
        let jac = adapter.gradient(&beta).expect("FD gradient should validate");

        // Assert
        let expected = [1.0, -3.0];
        for (got, want) in jac.iter().zip(expected.iter()) {
            assert!(
                (got - want).abs() < 1e-5,
                "FD gradient should approximate 2β: got {got}, want {want}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure `eval_objective` returns NaN and records the user error when
    // the loss fails, so the solver failure can be replaced by the real
    // cause.
    //
    // Given
    // -----
    // - `FailingLoss`, whose `loss` always errors.
    //
    // Expect
    // ------
    // - The callback returns NaN and `take_error` yields the user error.
    fn eval_objective_records_loss_errors_and_returns_nan() {
        // Arrange
        let f = FailingLoss;
        let adapter = SlsqpAdapter::new(&f, &());

        // Act
        let value = adapter.eval_objective(&[0.0, 0.0], None);

        // Assert
        assert!(value.is_nan());
        assert!(matches!(adapter.take_error(), Some(OptError::NonFiniteLoss { .. })));
    }
}
