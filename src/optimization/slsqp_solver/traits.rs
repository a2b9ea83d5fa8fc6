//! Public API surface for constrained minimization of selector objectives.
//!
//! - [`Objective`]: trait selector families implement for their loss shape.
//! - [`InequalityConstraint`]: nonlinear inequality constraints `g(β) ≤ bound`.
//! - [`SolverOptions`] and [`Method`]: configuration for the backend solver.
//! - [`SolveOutcome`]: normalized result returned by the high-level
//!   `minimize_objective` API.
//!
//! Convention: we *minimize* a scalar loss `L(β)` directly. If an analytic
//! Jacobian is provided, it should be a usable (sub)gradient of the loss;
//! non-smooth objectives may return a subgradient surrogate instead of the
//! true gradient.
use crate::optimization::{
    errors::{OptError, OptResult},
    slsqp_solver::{
        types::{Beta, Cost, DEFAULT_FTOL, DEFAULT_MAX_ITER, Jac},
        validation::{validate_beta_hat, validate_loss, verify_ftol, verify_max_iter},
    },
};
use std::str::FromStr;

/// User-implemented objective interface for one optimization run.
///
/// The solver minimizes `L(β)` over fixed data, subject to any inequality
/// constraints the objective declares. All data enters through the `Data`
/// payload passed by reference into `loss`/`jac`/`check`; implementations
/// must not capture data implicitly, keeping each run reentrant.
///
/// - `type Data`: per-problem data carried into `loss`/`jac`/`check`.
///
/// Required:
/// - `loss(&Beta, &Data) -> OptResult<Cost>`: evaluate `L(β)`.
///   - Errors: return a descriptive `OptError` for invalid inputs.
/// - `check(&Beta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `β`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `jac(&Beta, &Data) -> OptResult<Jac>`: analytic (sub)gradient of the
///   loss. If not implemented, robust finite differences are used
///   automatically.
/// - `constraints(&Data) -> Vec<Box<dyn InequalityConstraint<Data>>>`:
///   nonlinear inequality constraints; empty by default.
pub trait Objective {
    type Data;

    // Required methods
    fn loss(&self, beta: &Beta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, beta: &Beta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn jac(&self, _beta: &Beta, _data: &Self::Data) -> OptResult<Jac> {
        Err(OptError::JacobianNotImplemented)
    }

    fn constraints(&self, _data: &Self::Data) -> Vec<Box<dyn InequalityConstraint<Self::Data> + '_>> {
        Vec::new()
    }
}

/// Nonlinear inequality constraint `g(β) ≤ upper_bound()`.
///
/// The solver layer shifts the bound into the backend's canonical
/// `g(β) − bound ≤ 0` form; implementations report the raw constraint value
/// and its Jacobian in problem units.
///
/// `jac` may be a subgradient at points where `g` is non-smooth (e.g. the
/// active coordinate of an ℓ∞ norm at ties).
pub trait InequalityConstraint<D> {
    fn value(&self, beta: &Beta, data: &D) -> Cost;
    fn jac(&self, beta: &Beta, data: &D) -> Jac;
    fn upper_bound(&self) -> f64;
}

/// Choice of backend algorithm used for one run.
///
/// Variants:
/// - `Slsqp`: sequential least-squares quadratic programming, the default
///   for smooth objectives with nonlinear inequality constraints.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"SLSQP"`). Unknown names return `OptError::InvalidMethod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Slsqp,
}

impl FromStr for Method {
    type Err = OptError;

    /// Parse a method choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"SLSQP"`
    /// - Any case variant (e.g., `"slsqp"`).
    ///
    /// Any other value returns `OptError::InvalidMethod` with a helpful message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slsqp" => Ok(Method::Slsqp),
            _ => Err(OptError::InvalidMethod {
                name: s.to_string(),
                reason: "The only supported method is 'SLSQP' (case insensitive).",
            }),
        }
    }
}

/// Solver-level configuration.
///
/// Fields:
/// - `max_iter: usize` — hard cap on backend iterations.
/// - `ftol: f64` — function tolerance for the backend's stopping rule.
/// - `method: Method` — backend algorithm.
/// - `verbose: bool` — if `true`, prints the initial objective value and
///   terminal status to stderr.
///
/// Constructor:
/// - `new(max_iter, ftol, method, verbose) -> OptResult<Self>` — builds
///   validated options; `None` fields fall back to the defaults
///   (`max_iter = 10_000`, `ftol = 1e-12`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub max_iter: usize,
    pub ftol: f64,
    pub method: Method,
    pub verbose: bool,
}

impl SolverOptions {
    /// Create a new set of solver options.
    ///
    /// # Rules
    /// - If provided, `ftol` must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::InvalidFtol`] for non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        max_iter: Option<usize>, ftol: Option<f64>, method: Method, verbose: bool,
    ) -> OptResult<Self> {
        let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
        let ftol = ftol.unwrap_or(DEFAULT_FTOL);
        verify_max_iter(max_iter)?;
        verify_ftol(ftol)?;
        Ok(Self { max_iter, ftol, method, verbose })
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self { max_iter: DEFAULT_MAX_ITER, ftol: DEFAULT_FTOL, method: Method::Slsqp, verbose: false }
    }
}

/// Canonical result returned by `minimize_objective`.
///
/// - `beta_hat`: best coefficient vector found.
/// - `value`: best loss value `L(β̂)`.
/// - `converged`: `true` if the backend reported a success status.
/// - `status`: human-readable termination status string.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub beta_hat: Beta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
}

impl SolveOutcome {
    /// Build a validated [`SolveOutcome`] from raw backend state.
    ///
    /// Performs:
    /// - `beta_hat` check via `validate_beta_hat` (all entries finite).
    /// - `value` check via `validate_loss` (finite).
    ///
    /// # Errors
    /// - Propagates any validation errors for `beta_hat` or `value`.
    pub fn new(
        beta_hat: Vec<f64>, value: f64, converged: bool, status: String,
    ) -> OptResult<Self> {
        let beta_hat = validate_beta_hat(beta_hat)?;
        validate_loss(value)?;
        Ok(Self { beta_hat, value, converged, status })
    }
}
