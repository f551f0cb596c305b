// ============================================================================
// Unit Errors
// Failures raised by unit checking, distinct from scalar failures
// ============================================================================

use super::tag::Units;
use thiserror::Error;

/// Errors raised when units forbid an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// Tag is not a member of a restricted registry
    #[error("invalid units {0:?}")]
    InvalidUnits(Units),
    /// Comparison against an operand that carries no unit tag
    #[error("cannot compare to unit-less number")]
    Incomparable,
    /// Non-scaling operation against an operand that carries no unit tag
    #[error("cannot add/subtract with unit-less number")]
    IncompatibleOperand,
}
