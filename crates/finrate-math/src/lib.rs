//! # Finrate Math
//!
//! Root-finding over exact decimals for the Finrate library.
//!
//! This crate provides:
//!
//! - **Newton's method**: Damped Newton iteration with a forward-difference
//!   derivative, used to solve for internal rates of return
//! - **Secant method**: Derivative-free iteration, used for the
//!   effective-interest-rate calculation
//!
//! Objective functions take and return [`rust_decimal::Decimal`] and may
//! fail; a failed evaluation during step damping counts as "no improvement"
//! rather than aborting the solve.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton, secant, NewtonSolver, RootFinder, SecantSolver, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
