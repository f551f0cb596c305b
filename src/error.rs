// ============================================================================
// Crate Errors
// ============================================================================

use crate::numeric::NumericError;
use crate::units::UnitsError;
use thiserror::Error;

/// Any failure produced by this crate.
///
/// Unit failures and scalar failures stay separate: a division by zero is
/// reported as `Numeric(DivisionByZero)` exactly as the scalar raised it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Units(#[from] UnitsError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// Text could not be parsed as a dimensioned value
    #[error("parse error: {0}")]
    Parse(String),

    /// Unit registry configuration is invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for dimensioned operations
pub type DimResult<T> = Result<T, Error>;
