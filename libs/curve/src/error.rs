//! Curve engine errors
//!
//! Fixed-point failures (overflow, division by zero, invalid logarithm argument)
//! pass through unchanged inside [`CurveError::Math`]. Any error aborts the quote;
//! the engine holds no state that could be left half-updated.

use primitive_types::U256;
use thiserror::Error;
use wad_math::WadError;

/// Errors returned by curve construction and quoting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Shape parameters rejected at construction
    #[error("Invalid curve parameters: {reason}")]
    InvalidParameters { reason: String },

    /// Attempt to sell more tokens than are in circulation
    #[error("Insufficient supply: cannot sell {requested} from a supply of {available}")]
    InsufficientSupply { requested: U256, available: U256 },

    /// Rounding produced a negative difference larger than the configured tolerance
    #[error("Arithmetic inconsistency in {operation}: shortfall {shortfall} exceeds tolerance {tolerance}")]
    ArithmeticInconsistency {
        operation: &'static str,
        shortfall: U256,
        tolerance: U256,
    },

    /// Fixed-point range or domain error
    #[error(transparent)]
    Math(#[from] WadError),
}

impl CurveError {
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// True when the failure is a fixed-point overflow, e.g. buying past the
    /// representable end of the curve
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Math(WadError::Overflow { .. }))
    }
}
