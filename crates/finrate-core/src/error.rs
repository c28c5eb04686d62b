//! Error types for the Finrate core types.
//!
//! This module defines the error type shared by rates, transactions and
//! the decimal helpers.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// An argument was outside the accepted set of values.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the invalid argument.
        reason: String,
    },

    /// A division had a zero divisor.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that attempted the division.
        operation: String,
    },

    /// A value fell outside the domain of a mathematical function.
    #[error("Value {value} is outside the domain of {operation}")]
    DomainError {
        /// The operation that rejected the value.
        operation: String,
        /// The rejected value.
        value: Decimal,
    },

    /// Error in date handling.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(operation: impl Into<String>, value: Decimal) -> Self {
        Self::DomainError {
            operation: operation.into(),
            value,
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_argument("type must be one of apr, apy, effective, nominal");
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_domain_error_display() {
        let err = CoreError::domain("ln", dec!(-1));
        assert_eq!(err.to_string(), "Value -1 is outside the domain of ln");
    }
}
