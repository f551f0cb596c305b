// ============================================================================
// Numeric Errors
// Failures raised by the scalar arithmetic underneath a dimensioned value
// ============================================================================

use thiserror::Error;

/// Errors that can occur inside a scalar operation.
///
/// These are produced by the magnitude type, never by unit checking, and are
/// surfaced to callers exactly as the scalar reported them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result does not fit the scalar type
    #[error("arithmetic overflow: result does not fit the magnitude type")]
    Overflow,
    /// Attempted division (or modulo, or negative power of zero) by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Exponent has no representable result for this scalar type
    #[error("invalid exponent: result is not representable in the magnitude type")]
    InvalidExponent,
    /// Conversion to a primitive would not produce a finite, in-range value
    #[error("value is not representable as the requested primitive")]
    NotRepresentable,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
