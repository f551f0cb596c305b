// ============================================================================
// Dimensioned Values Library
// Numeric magnitudes tagged with units, checked on every operation
// ============================================================================

//! # dimval
//!
//! A numeric wrapper pairing a magnitude with a unit tag.
//!
//! ## Features
//!
//! - **Unit-checked operations**: additive operations and comparisons require
//!   both operands to carry a unit tag; scaling operations accept bare scalars
//! - **Scalar pass-through**: arithmetic is delegated to the magnitude type and
//!   its failures (division by zero, overflow) are reported unchanged
//! - **Registries**: restrict which tags are acceptable, process-wide or per
//!   call site
//! - **Magnitudes**: `i32`, `i64`, `f32`, `f64`, `rust_decimal::Decimal`, or any
//!   [`Scalar`](numeric::Scalar) implementation
//!
//! Tags are never converted between: `"m"` and `"ft"` are simply different
//! names.
//!
//! ## Example
//!
//! ```rust
//! use dimval::prelude::*;
//!
//! let registry = UnitRegistry::restricted_to(["m", "s"]);
//!
//! let distance = Dim::new_in(&registry, 100.0, "m")?;
//! let lap = Dim::new_in(&registry, 400.0, "m")?;
//!
//! // Tagged operands combine freely
//! let total = distance.checked_add(&lap)?;
//! assert_eq!(total.to_string(), "500m");
//!
//! // Scaling by a bare number is allowed
//! let half = total.checked_div(2.0)?;
//! assert_eq!(*half.magnitude(), 250.0);
//!
//! // Adding or comparing a bare number is not
//! assert!(total.checked_add(1.0).is_err());
//! assert!(total.try_gt(1.0).is_err());
//!
//! // Unknown tags are rejected at construction
//! assert!(Dim::new_in(&registry, 1.0, "ft").is_err());
//! # Ok::<(), dimval::Error>(())
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod units;

pub use error::{DimResult, Error};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::UnitsConfig;
    pub use crate::error::{DimResult, Error};
    pub use crate::numeric::{NumericError, NumericResult, Scalar};
    pub use crate::units::{
        registry, Dim, Operand, ScopedRegistry, Tagged, UnitRegistry, Units, UnitsError,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_operations() {
        let registry = UnitsConfig::restricted()
            .with_unit("m")
            .with_unit("s")
            .into_registry()
            .unwrap();

        let a = Dim::new_in(&registry, 10i64, "m").unwrap();
        let b = Dim::new_in(&registry, 3i64, "s").unwrap();

        // Non-scaling with a tagged operand
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(*sum.magnitude(), 13);
        assert_eq!(sum.units(), a.units());

        // Scaling with a bare operand
        let scaled = a.checked_floor_div(3i64).unwrap();
        assert_eq!(*scaled.magnitude(), 3);

        // Bare operands rejected where a tag is required
        assert_eq!(
            a.checked_sub(3i64).unwrap_err(),
            Error::Units(UnitsError::IncompatibleOperand)
        );
        assert_eq!(a.try_ge(3i64), Err(UnitsError::Incomparable));

        // Scalar failures come through untouched
        let zero = Dim::new_in(&registry, 0i64, "s").unwrap();
        assert_eq!(
            a.checked_rem(&zero).unwrap_err(),
            Error::Numeric(NumericError::DivisionByZero)
        );

        // Conversions drop the tag
        assert_eq!(a.to_f64(), 10.0);
        assert_eq!(a.trunc(), Ok(10));
    }
}
