// ============================================================================
// Units Module
// Unit-tagged values and the rules for combining them
// ============================================================================
//
// This module provides:
// - Units: opaque unit tag with a "no unit" sentinel
// - UnitRegistry: the set of acceptable tags, plus a process-wide instance
// - Dim<T>: magnitude + tag, with checked comparison and arithmetic
// - Tagged / Operand: how operations tell tagged operands from bare scalars
// - UnitsError: failures caused by units rather than by arithmetic
//
// Tags are checked for presence, never converted between.

mod dimensioned;
mod errors;
mod ops;
pub mod registry;
mod tag;

pub use dimensioned::{Dim, Operand, Tagged};
pub use errors::UnitsError;
pub use registry::{ScopedRegistry, UnitRegistry};
pub use tag::Units;
