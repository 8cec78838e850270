// ============================================================================
// Numeric Errors
// Error types for decimal normalization and checked arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while normalizing or combining decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value is not a finite number, or the requested scale is out of range
    InvalidArgument,
    /// A computed denominator was zero
    DivisionByZero,
    /// Result does not fit in a `Decimal` (or in an `i64` after truncation)
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidArgument => write!(
                f,
                "invalid argument: value must be a finite number and places a non-negative integer"
            ),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
