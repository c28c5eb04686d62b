//! Error types for root-finding.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root-finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Objective value at the last iterate.
        residual: Decimal,
    },

    /// Division by zero, e.g. a flat objective.
    #[error("Division by zero (denominator: {value})")]
    DivisionByZero {
        /// The zero denominator.
        value: Decimal,
    },

    /// Invalid input parameter or objective evaluation.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Numerical overflow.
    #[error("Numerical overflow in {operation}")]
    Overflow {
        /// The operation that caused overflow.
        operation: String,
    },

    /// Step damping could not reduce the objective any further.
    #[error("Step reduction failed after {iterations} iterations (residual: {residual})")]
    StepReductionFailed {
        /// Number of iterations completed.
        iterations: u32,
        /// Objective value at the last iterate.
        residual: Decimal,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: Decimal) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a step reduction failed error.
    #[must_use]
    pub fn step_reduction_failed(iterations: u32, residual: Decimal) -> Self {
        Self::StepReductionFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, dec!(0.5));
        assert!(err.to_string().contains("100 iterations"));
        assert!(err.to_string().contains("0.5"));
    }
}
