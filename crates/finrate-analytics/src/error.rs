//! Error types for amortization and cash-flow analytics.

use finrate_core::CoreError;
use finrate_math::MathError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Invalid input parameter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Root-finder ran out of iterations or could not make progress
    #[error("calculation does not converge after {iterations} iterations (residual: {residual})")]
    ConvergenceFailed {
        /// Number of iterations before failure.
        iterations: u32,
        /// Objective value when the solver stopped.
        residual: Decimal,
    },

    /// Division by zero
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// Error raised by the core types
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Returns true for argument errors, including ones raised by core types.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            AnalyticsError::InvalidArgument(_)
                | AnalyticsError::Core(CoreError::InvalidArgument { .. })
        )
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            }
            | MathError::StepReductionFailed {
                iterations,
                residual,
            } => AnalyticsError::ConvergenceFailed {
                iterations,
                residual,
            },
            zero @ MathError::DivisionByZero { .. } => {
                AnalyticsError::DivisionByZero(zero.to_string())
            }
            other => AnalyticsError::InvalidArgument(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::ConvergenceFailed {
            iterations: 100,
            residual: dec!(12.5),
        };
        assert!(err.to_string().contains("100 iterations"));

        let err = AnalyticsError::invalid_argument("no sign change");
        assert_eq!(err.to_string(), "invalid argument: no sign change");
    }

    #[test]
    fn test_from_math_error() {
        let err: AnalyticsError = MathError::step_reduction_failed(7, dec!(1)).into();
        assert!(matches!(err, AnalyticsError::ConvergenceFailed { iterations: 7, .. }));

        let err: AnalyticsError = MathError::DivisionByZero { value: dec!(0) }.into();
        assert!(matches!(err, AnalyticsError::DivisionByZero(_)));

        let err: AnalyticsError = MathError::invalid_input("bad").into();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_from_core_error() {
        let err: AnalyticsError = CoreError::invalid_argument("bad tag").into();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("bad tag"));
    }
}
