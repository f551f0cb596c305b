// ============================================================================
// Numeric Module
// Scalar arithmetic that dimensioned values delegate to
// ============================================================================
//
// This module provides:
// - Scalar: the capability a magnitude type must offer
// - Scalar impls for i32, i64, f32, f64 and rust_decimal::Decimal
// - NumericError: failures originating in scalar arithmetic
//
// Design principles:
// - All arithmetic returns Result (no panics)
// - Each scalar keeps its own semantics (IEEE-754 for floats, checked for
//   integers and decimals)
// - Unit handling never leaks into this module

mod errors;
mod scalar;

pub use errors::{NumericError, NumericResult};
pub use scalar::Scalar;
