//! Fixed-point arithmetic errors
//!
//! Every variant names the primitive that failed so callers several layers up
//! (curve engine, CLI) can report which step of a quote went out of range.

use thiserror::Error;

/// Result alias for fixed-point operations
pub type Result<T> = std::result::Result<T, WadError>;

/// Failure modes of the fixed-point primitives
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WadError {
    /// Result exceeds the representable range of the target type
    #[error("Fixed-point overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Result would be negative where only unsigned values are representable
    #[error("Fixed-point underflow in {operation}")]
    Underflow { operation: &'static str },

    /// Denominator was zero
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    /// Argument lies outside the mathematical domain of the function
    #[error("Invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: &'static str,
    },
}

impl WadError {
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub fn underflow(operation: &'static str) -> Self {
        Self::Underflow { operation }
    }

    pub fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    pub fn invalid_argument(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { operation, reason }
    }

    /// Name of the primitive that raised the error
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Overflow { operation }
            | Self::Underflow { operation }
            | Self::DivisionByZero { operation }
            | Self::InvalidArgument { operation, .. } => operation,
        }
    }
}
