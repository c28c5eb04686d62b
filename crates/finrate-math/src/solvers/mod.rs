//! Root-finding algorithms.
//!
//! This module provides numerical solvers over [`Decimal`]:
//!
//! - [`newton`]: Damped Newton's method with a numerical derivative
//! - [`secant`]: Derivative-free method seeded with two points
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton | Fast (quadratic near the root) | Damped, may stall | One guess |
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//!
//! # Example: IRR-style objective
//!
//! ```rust
//! use finrate_math::solvers::{newton, SolverConfig};
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//!
//! // -100 today, 110 in one period: the rate is 10%
//! let npv = |r: Decimal| Ok(dec!(-100) + dec!(110) / (Decimal::ONE + r));
//!
//! let result = newton(npv, dec!(0.05), &SolverConfig::default()).unwrap();
//! assert!((result.root - dec!(0.1)).abs() < dec!(0.0000000001));
//! ```

mod newton;
mod secant;

pub use newton::newton;
pub use secant::secant;

use rust_decimal::Decimal;

use crate::error::MathResult;

/// Default tolerance for root-finding algorithms (1e-10).
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default step size below which a stalled Newton iteration is accepted (1e-10).
pub const DEFAULT_STALL_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on both the objective value and the step size.
    pub tolerance: Decimal,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// When damping cannot reduce the objective and the Newton step is
    /// already smaller than this, the current iterate is accepted as the root.
    pub stall_tolerance: Decimal,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stall_tolerance: DEFAULT_STALL_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: Decimal, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the stall tolerance.
    #[must_use]
    pub fn with_stall_tolerance(mut self, stall_tolerance: Decimal) -> Self {
        self.stall_tolerance = stall_tolerance;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: Decimal,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: Decimal,
}

/// Trait for root-finding algorithms seeded with a single guess.
pub trait RootFinder {
    /// Finds a root of `f` starting from `initial_guess`.
    fn find_root<F>(
        &self,
        f: F,
        initial_guess: Decimal,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(Decimal) -> MathResult<Decimal>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Damped Newton solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl RootFinder for NewtonSolver {
    fn find_root<F>(
        &self,
        f: F,
        initial_guess: Decimal,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(Decimal) -> MathResult<Decimal>,
    {
        newton(f, initial_guess, config)
    }

    fn name(&self) -> &'static str {
        "Newton"
    }
}

/// Secant solver; the second seed is `initial_guess + offset`.
#[derive(Debug, Clone, Copy)]
pub struct SecantSolver {
    /// Distance between the two seeds.
    pub offset: Decimal,
}

impl Default for SecantSolver {
    fn default() -> Self {
        Self {
            offset: Decimal::new(1, 2),
        }
    }
}

impl RootFinder for SecantSolver {
    fn find_root<F>(
        &self,
        f: F,
        initial_guess: Decimal,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(Decimal) -> MathResult<Decimal>,
    {
        secant(f, initial_guess, initial_guess + self.offset, config)
    }

    fn name(&self) -> &'static str {
        "Secant"
    }
}
