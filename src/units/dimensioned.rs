// ============================================================================
// Dimensioned Value
// A scalar magnitude carrying a unit tag
// ============================================================================

use super::errors::UnitsError;
use super::registry::{self, UnitRegistry};
use super::tag::Units;
use crate::error::{DimResult, Error};
use crate::numeric::{NumericResult, Scalar};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A magnitude paired with a unit tag.
///
/// Units are checked, never converted: two tagged values interoperate
/// regardless of whether their tags match, while a bare scalar is only
/// accepted by scaling operations (`*`, `/`, floor division, `%`).
///
/// | Operation | Tagged operand | Bare operand |
/// |-----------|----------------|--------------|
/// | comparison | magnitudes compared | `Incomparable` |
/// | add, sub, pow | result keeps receiver's tag | `IncompatibleOperand` |
/// | mul, div, floor div, rem | result keeps receiver's tag | result keeps receiver's tag |
///
/// # Example
/// ```
/// use dimval::prelude::*;
///
/// let length = Dim::new(3.0, "m")?;
/// let doubled = length.checked_mul(2.0)?;
/// assert_eq!(doubled.to_string(), "6m");
///
/// assert!(length.checked_add(1.0).is_err());
/// # Ok::<(), dimval::Error>(())
/// ```
#[derive(Clone)]
pub struct Dim<T> {
    magnitude: T,
    units: Units,
}

// ============================================================================
// Tagged Capability
// ============================================================================

/// Anything exposing a unit tag next to its magnitude.
///
/// Only tagged operands may take part in comparisons and non-scaling
/// arithmetic.
pub trait Tagged<T> {
    fn magnitude(&self) -> &T;
    fn units(&self) -> &Units;
}

impl<T: Scalar> Tagged<T> for Dim<T> {
    #[inline]
    fn magnitude(&self) -> &T {
        &self.magnitude
    }

    #[inline]
    fn units(&self) -> &Units {
        &self.units
    }
}

/// Right-hand side of a dimensioned operation.
///
/// Built through `From`: `&Dim<T>` (or any other [`Tagged`] reference) gives
/// a tagged operand, a built-in scalar gives a bare one. Custom scalar types
/// use [`Operand::bare`].
pub enum Operand<'a, T> {
    Tagged(&'a dyn Tagged<T>),
    Bare(T),
}

impl<'a, T> Operand<'a, T> {
    /// Wrap a plain scalar.
    pub fn bare(value: T) -> Self {
        Operand::Bare(value)
    }

    #[inline]
    pub fn is_tagged(&self) -> bool {
        matches!(self, Operand::Tagged(_))
    }

    /// Magnitude of the operand, whether tagged or not.
    #[inline]
    pub fn magnitude(&self) -> &T {
        match self {
            Operand::Tagged(tagged) => tagged.magnitude(),
            Operand::Bare(value) => value,
        }
    }
}

impl<'a, T, D: Tagged<T>> From<&'a D> for Operand<'a, T> {
    fn from(tagged: &'a D) -> Self {
        Operand::Tagged(tagged)
    }
}

macro_rules! impl_bare_operand {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Operand<'_, $t> {
            #[inline]
            fn from(value: $t) -> Self {
                Operand::Bare(value)
            }
        }
    )*};
}

impl_bare_operand!(i32, i64, f32, f64, Decimal);

/// Order of the scalar arguments relative to the receiver.
#[derive(Clone, Copy)]
enum Order {
    /// `self OP operand`
    Forward,
    /// `operand OP self`
    Reflected,
}

type ScalarOp<T> = fn(&T, &T) -> NumericResult<T>;

// ============================================================================
// Construction and Accessors
// ============================================================================

impl<T: Scalar> Dim<T> {
    /// Create a value, validating `units` against the process-wide registry.
    ///
    /// # Errors
    /// Returns `InvalidUnits` if the registry is restricted and does not
    /// contain `units`.
    pub fn new(magnitude: T, units: impl Into<Units>) -> Result<Self, UnitsError> {
        let units = units.into();
        registry::validate_current(&units)?;
        Ok(Self { magnitude, units })
    }

    /// Create a value, validating `units` against an explicit registry.
    pub fn new_in(
        registry: &UnitRegistry,
        magnitude: T,
        units: impl Into<Units>,
    ) -> Result<Self, UnitsError> {
        let units = units.into();
        registry.validate(&units)?;
        Ok(Self { magnitude, units })
    }

    /// Create a value without a unit tag.
    ///
    /// The sentinel is still validated, so this fails under a restricted
    /// registry that does not allow unit-less values.
    pub fn unitless(magnitude: T) -> Result<Self, UnitsError> {
        Self::new(magnitude, Units::NONE)
    }

    /// Result of an operation: `magnitude` under the receiver's tag.
    #[inline]
    fn rewrap(&self, magnitude: T) -> Self {
        Self {
            magnitude,
            units: self.units.clone(),
        }
    }

    #[inline]
    pub fn magnitude(&self) -> &T {
        &self.magnitude
    }

    #[inline]
    pub fn magnitude_mut(&mut self) -> &mut T {
        &mut self.magnitude
    }

    /// Replace the magnitude. No validation is involved.
    #[inline]
    pub fn set_magnitude(&mut self, magnitude: T) {
        self.magnitude = magnitude;
    }

    #[inline]
    pub fn units(&self) -> &Units {
        &self.units
    }

    /// Replace the unit tag after checking it against the process-wide
    /// registry. The value is left untouched on failure.
    pub fn set_units(&mut self, units: impl Into<Units>) -> Result<(), UnitsError> {
        let units = units.into();
        registry::validate_current(&units)?;
        self.units = units;
        Ok(())
    }

    /// Replace the unit tag after checking it against `registry`.
    pub fn set_units_in(
        &mut self,
        registry: &UnitRegistry,
        units: impl Into<Units>,
    ) -> Result<(), UnitsError> {
        let units = units.into();
        registry.validate(&units)?;
        self.units = units;
        Ok(())
    }

    pub fn into_parts(self) -> (T, Units) {
        (self.magnitude, self.units)
    }

    pub fn into_magnitude(self) -> T {
        self.magnitude
    }
}

// ============================================================================
// Operand Dispatch
// ============================================================================

impl<T: Scalar> Dim<T> {
    /// Magnitude of `operand`, provided it carries a unit tag.
    #[inline]
    fn require_tagged_operand<'o>(
        operand: &'o Operand<'_, T>,
        rejection: UnitsError,
    ) -> Result<&'o T, UnitsError> {
        match operand {
            Operand::Tagged(tagged) => Ok(tagged.magnitude()),
            Operand::Bare(_) => Err(rejection),
        }
    }

    fn apply(&self, other: &T, order: Order, op: ScalarOp<T>) -> DimResult<Self> {
        let result = match order {
            Order::Forward => op(&self.magnitude, other),
            Order::Reflected => op(other, &self.magnitude),
        };
        result.map(|magnitude| self.rewrap(magnitude)).map_err(|err| {
            tracing::trace!(error = %err, units = ?self.units, "scalar operation failed");
            Error::Numeric(err)
        })
    }

    /// Non-scaling combination: the operand must be tagged.
    fn combine_as_tagged(
        &self,
        operand: Operand<'_, T>,
        order: Order,
        op: ScalarOp<T>,
    ) -> DimResult<Self> {
        let other = Self::require_tagged_operand(&operand, UnitsError::IncompatibleOperand)?;
        self.apply(other, order, op)
    }

    /// Scaling combination: tagged and bare operands are both accepted.
    fn combine_ignoring_tag(
        &self,
        operand: Operand<'_, T>,
        order: Order,
        op: ScalarOp<T>,
    ) -> DimResult<Self> {
        self.apply(operand.magnitude(), order, op)
    }

    fn compare_with<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
        op: fn(&T, &T) -> bool,
    ) -> Result<bool, UnitsError> {
        let operand = operand.into();
        let other = Self::require_tagged_operand(&operand, UnitsError::Incomparable)?;
        Ok(op(&self.magnitude, other))
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl<T: Scalar> Dim<T> {
    /// Compare magnitudes with a tagged operand.
    ///
    /// Tag values are not compared; only the presence of a tag is required.
    ///
    /// # Errors
    /// Returns `Incomparable` for a bare operand.
    pub fn try_partial_cmp<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<Option<Ordering>, UnitsError> {
        let operand = operand.into();
        let other = Self::require_tagged_operand(&operand, UnitsError::Incomparable)?;
        Ok(self.magnitude.partial_cmp(other))
    }

    pub fn try_lt<'a>(&self, operand: impl Into<Operand<'a, T>>) -> Result<bool, UnitsError> {
        self.compare_with(operand, |a, b| a < b)
    }

    pub fn try_le<'a>(&self, operand: impl Into<Operand<'a, T>>) -> Result<bool, UnitsError> {
        self.compare_with(operand, |a, b| a <= b)
    }

    pub fn try_eq<'a>(&self, operand: impl Into<Operand<'a, T>>) -> Result<bool, UnitsError> {
        self.compare_with(operand, |a, b| a == b)
    }

    pub fn try_ne<'a>(&self, operand: impl Into<Operand<'a, T>>) -> Result<bool, UnitsError> {
        self.compare_with(operand, |a, b| a != b)
    }

    pub fn try_ge<'a>(&self, operand: impl Into<Operand<'a, T>>) -> Result<bool, UnitsError> {
        self.compare_with(operand, |a, b| a >= b)
    }

    pub fn try_gt<'a>(&self, operand: impl Into<Operand<'a, T>>) -> Result<bool, UnitsError> {
        self.compare_with(operand, |a, b| a > b)
    }
}

// ============================================================================
// Non-scaling Arithmetic
// ============================================================================

impl<T: Scalar> Dim<T> {
    /// `self + operand`, keeping `self`'s tag.
    ///
    /// # Errors
    /// - `IncompatibleOperand` for a bare operand
    /// - any failure of the scalar addition
    pub fn checked_add<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_as_tagged(operand.into(), Order::Forward, T::try_add)
    }

    /// `self - operand`, keeping `self`'s tag.
    pub fn checked_sub<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_as_tagged(operand.into(), Order::Forward, T::try_sub)
    }

    /// `self` raised to `operand`. The exponent must be tagged, like an
    /// addend.
    pub fn checked_pow<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_as_tagged(operand.into(), Order::Forward, T::try_pow)
    }

    /// `operand + self`, keeping `self`'s tag.
    pub fn checked_radd<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_as_tagged(operand.into(), Order::Reflected, T::try_add)
    }

    /// `operand - self`, keeping `self`'s tag.
    pub fn checked_rsub<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_as_tagged(operand.into(), Order::Reflected, T::try_sub)
    }

    /// `operand` raised to `self`, keeping `self`'s tag.
    pub fn checked_rpow<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_as_tagged(operand.into(), Order::Reflected, T::try_pow)
    }
}

// ============================================================================
// Scaling Arithmetic
// ============================================================================

impl<T: Scalar> Dim<T> {
    /// `self * operand`, keeping `self`'s tag.
    ///
    /// # Errors
    /// Only failures of the scalar multiplication; bare operands are allowed.
    pub fn checked_mul<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Forward, T::try_mul)
    }

    /// `self / operand` using the scalar's native division.
    pub fn checked_div<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Forward, T::try_div)
    }

    /// `self / operand` rounded toward negative infinity.
    pub fn checked_floor_div<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Forward, T::try_floor_div)
    }

    /// `self % operand`; the remainder takes the sign of `operand`.
    pub fn checked_rem<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Forward, T::try_rem)
    }

    /// `operand * self`, keeping `self`'s tag.
    pub fn checked_rmul<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Reflected, T::try_mul)
    }

    /// `operand / self`, keeping `self`'s tag.
    pub fn checked_rdiv<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Reflected, T::try_div)
    }

    /// `operand / self` rounded toward negative infinity.
    pub fn checked_rfloor_div<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Reflected, T::try_floor_div)
    }

    /// `operand % self`, keeping `self`'s tag.
    pub fn checked_rrem<'a>(&self, operand: impl Into<Operand<'a, T>>) -> DimResult<Self> {
        self.combine_ignoring_tag(operand.into(), Order::Reflected, T::try_rem)
    }
}

// ============================================================================
// Unary Operations and Conversions
// ============================================================================

impl<T: Scalar> Dim<T> {
    pub fn abs(&self) -> NumericResult<Self> {
        self.magnitude.try_abs().map(|m| self.rewrap(m))
    }

    pub fn checked_neg(&self) -> NumericResult<Self> {
        self.magnitude.try_neg().map(|m| self.rewrap(m))
    }

    /// Unary plus: an equal value with the same tag.
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Magnitude as `f64`. The tag is discarded.
    pub fn to_f64(&self) -> f64 {
        self.magnitude.to_f64()
    }

    /// Magnitude truncated toward zero. The tag is discarded.
    pub fn trunc(&self) -> NumericResult<i64> {
        self.magnitude.trunc_i64()
    }
}

// ============================================================================
// Display, Debug and Parsing
// ============================================================================

/// Magnitude immediately followed by the tag: `0ok`, `3.5m`, `7None`.
impl<T: fmt::Display> fmt::Display for Dim<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.units)
    }
}

/// Constructor-like form, e.g. `Dim(value=0, units='ok')`, accepted back by
/// `FromStr`.
impl<T: fmt::Debug> fmt::Debug for Dim<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim(value={:?}, units={:?})", self.magnitude, self.units)
    }
}

impl<T: Scalar> FromStr for Dim<T> {
    type Err = Error;

    /// Parse the `Debug` form. The tag is validated against the process-wide
    /// registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::Parse(format!("expected Dim(value=.., units=..), got {:?}", s));

        let body = s
            .trim()
            .strip_prefix("Dim(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (value, units) = body
            .strip_prefix("value=")
            .and_then(|rest| rest.split_once(", units="))
            .ok_or_else(malformed)?;

        let magnitude = value
            .trim()
            .parse::<T>()
            .map_err(|_| Error::Parse(format!("invalid magnitude {:?}", value)))?;
        let units = Units::from_repr(units)
            .ok_or_else(|| Error::Parse(format!("invalid units {:?}", units)))?;

        Ok(Self::new(magnitude, units)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn meters(magnitude: f64) -> Dim<f64> {
        Dim::new_in(&UnitRegistry::unrestricted(), magnitude, "m").unwrap()
    }

    fn seconds(magnitude: f64) -> Dim<f64> {
        Dim::new_in(&UnitRegistry::unrestricted(), magnitude, "s").unwrap()
    }

    #[test]
    fn test_construction_keeps_parts() {
        let x = Dim::new(0i64, "ok").unwrap();
        assert_eq!(*x.magnitude(), 0);
        assert_eq!(x.units(), &Units::from("ok"));

        let (magnitude, units) = x.into_parts();
        assert_eq!(magnitude, 0);
        assert_eq!(units.name(), Some("ok"));
    }

    #[test]
    fn test_construction_against_restricted_registry() {
        let registry = UnitRegistry::restricted_to(["m", "s"]);

        assert!(Dim::new_in(&registry, 1.0, "m").is_ok());
        assert_eq!(
            Dim::new_in(&registry, 1.0, "kg").unwrap_err(),
            UnitsError::InvalidUnits(Units::from("kg"))
        );
        assert_eq!(
            Dim::new_in(&registry, 1.0, Units::NONE).unwrap_err(),
            UnitsError::InvalidUnits(Units::NONE)
        );
    }

    #[test]
    fn test_set_units_revalidates() {
        let registry = UnitRegistry::restricted_to(["m", "s"]);
        let mut x = Dim::new_in(&registry, 2i64, "m").unwrap();

        x.set_units_in(&registry, "s").unwrap();
        assert_eq!(x.units(), &Units::from("s"));

        let err = x.set_units_in(&registry, "kg").unwrap_err();
        assert_eq!(err, UnitsError::InvalidUnits(Units::from("kg")));
        assert_eq!(x.units(), &Units::from("s"));
    }

    #[test]
    fn test_set_magnitude_is_unchecked() {
        let mut x = meters(1.0);
        x.set_magnitude(-5.0);
        *x.magnitude_mut() *= 2.0;
        assert_eq!(*x.magnitude(), -10.0);
        assert_eq!(x.units(), &Units::from("m"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dim::new(0i64, "ok").unwrap().to_string(), "0ok");
        assert_eq!(meters(3.5).to_string(), "3.5m");
        assert_eq!(Dim::unitless(7i32).unwrap().to_string(), "7None");
    }

    #[test]
    fn test_debug_form() {
        assert_eq!(
            format!("{:?}", Dim::new(0i64, "ok").unwrap()),
            "Dim(value=0, units='ok')"
        );
        assert_eq!(
            format!("{:?}", Dim::unitless(1.5f64).unwrap()),
            "Dim(value=1.5, units=None)"
        );
    }

    #[test]
    fn test_debug_round_trip() {
        let original = Dim::new(0i64, "ok").unwrap();
        let parsed: Dim<i64> = format!("{:?}", original).parse().unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.units(), original.units());

        let original = Dim::new(Decimal::new(-1234, 2), "it's").unwrap();
        let parsed: Dim<Decimal> = format!("{:?}", original).parse().unwrap();
        assert_eq!(parsed.magnitude(), original.magnitude());
        assert_eq!(parsed.units(), original.units());

        for magnitude in [0.0, -0.0, 1.0, -1.0, 1e-300, f64::INFINITY] {
            let original = Dim::unitless(magnitude).unwrap();
            let parsed: Dim<f64> = format!("{:?}", original).parse().unwrap();
            assert_eq!(parsed.magnitude().to_bits(), magnitude.to_bits());
            assert!(parsed.units().is_none());
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "Dim(value=1)",
            "Dim(1, 'm')",
            "Dim(value=x, units='m')",
            "Dim(value=1, units=m)",
            "Quantity(value=1, units='m')",
        ] {
            let result: DimResult<Dim<i64>> = input.parse();
            assert!(matches!(result, Err(Error::Parse(_))), "{}", input);
        }
    }

    #[test]
    fn test_comparison_ignores_tag_values() {
        let a = meters(1.0);
        let b = seconds(2.0);

        assert_eq!(a.try_lt(&b), Ok(true));
        assert_eq!(a.try_le(&b), Ok(true));
        assert_eq!(a.try_eq(&b), Ok(false));
        assert_eq!(a.try_ne(&b), Ok(true));
        assert_eq!(a.try_ge(&b), Ok(false));
        assert_eq!(a.try_gt(&b), Ok(false));
        assert_eq!(a.try_partial_cmp(&b), Ok(Some(Ordering::Less)));
        assert_eq!(a.try_eq(&seconds(1.0)), Ok(true));
    }

    #[test]
    fn test_comparison_rejects_bare_scalar() {
        let a = meters(1.0);
        assert_eq!(a.try_lt(1.0), Err(UnitsError::Incomparable));
        assert_eq!(a.try_eq(1.0), Err(UnitsError::Incomparable));
        assert_eq!(a.try_partial_cmp(1.0), Err(UnitsError::Incomparable));
    }

    #[test]
    fn test_unitless_value_is_still_tagged() {
        let a = meters(3.0);
        let plain = Dim::unitless(1.0).unwrap();
        assert_eq!(a.try_gt(&plain), Ok(true));
        assert_eq!(*a.checked_add(&plain).unwrap().magnitude(), 4.0);
    }

    #[test]
    fn test_non_scaling_ops() {
        let a = meters(5.0);
        let b = seconds(2.0);

        let sum = a.checked_add(&b).unwrap();
        assert_eq!(*sum.magnitude(), 7.0);
        assert_eq!(sum.units(), &Units::from("m"));

        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(*diff.magnitude(), 3.0);

        let rdiff = a.checked_rsub(&b).unwrap();
        assert_eq!(*rdiff.magnitude(), -3.0);
        assert_eq!(rdiff.units(), &Units::from("m"));

        let radd = b.checked_radd(&a).unwrap();
        assert_eq!(*radd.magnitude(), 7.0);
        assert_eq!(radd.units(), &Units::from("s"));
    }

    #[test]
    fn test_non_scaling_ops_reject_bare_scalar() {
        let a = meters(5.0);
        for result in [
            a.checked_add(1.0),
            a.checked_sub(1.0),
            a.checked_pow(2.0),
            a.checked_radd(1.0),
            a.checked_rsub(1.0),
            a.checked_rpow(2.0),
        ] {
            assert_eq!(
                result.unwrap_err(),
                Error::Units(UnitsError::IncompatibleOperand)
            );
        }
    }

    #[test]
    fn test_pow() {
        let base = Dim::new(2i64, "m").unwrap();
        let exp = Dim::new(10i64, "s").unwrap();
        assert_eq!(*base.checked_pow(&exp).unwrap().magnitude(), 1024);

        let rpow = exp.checked_rpow(&base).unwrap();
        assert_eq!(*rpow.magnitude(), 1024);
        assert_eq!(rpow.units(), &Units::from("s"));
    }

    #[test]
    fn test_scaling_ops_accept_both_operand_kinds() {
        let a = meters(6.0);
        let b = seconds(4.0);

        assert_eq!(*a.checked_mul(&b).unwrap().magnitude(), 24.0);
        assert_eq!(*a.checked_mul(2.0).unwrap().magnitude(), 12.0);
        assert_eq!(*a.checked_div(4.0).unwrap().magnitude(), 1.5);
        assert_eq!(*a.checked_floor_div(&b).unwrap().magnitude(), 1.0);
        assert_eq!(*a.checked_rem(4.0).unwrap().magnitude(), 2.0);

        assert_eq!(*a.checked_rdiv(3.0).unwrap().magnitude(), 0.5);
        assert_eq!(*a.checked_rmul(&b).unwrap().magnitude(), 24.0);
        assert_eq!(*a.checked_rfloor_div(13.0).unwrap().magnitude(), 2.0);
        assert_eq!(*a.checked_rrem(13.0).unwrap().magnitude(), 1.0);

        assert_eq!(a.checked_div(&b).unwrap().units(), &Units::from("m"));
        assert_eq!(b.checked_rmul(3.0).unwrap().units(), &Units::from("s"));
    }

    #[test]
    fn test_scalar_failures_pass_through() {
        let a = Dim::new(7i64, "m").unwrap();
        let zero = Dim::new(0i64, "s").unwrap();

        assert_eq!(
            a.checked_div(&zero).unwrap_err(),
            Error::Numeric(NumericError::DivisionByZero)
        );
        assert_eq!(
            a.checked_rem(0i64).unwrap_err(),
            Error::Numeric(NumericError::DivisionByZero)
        );
        assert_eq!(
            zero.checked_rfloor_div(5i64).unwrap_err(),
            Error::Numeric(NumericError::DivisionByZero)
        );

        let negative = Dim::new(-1i64, "s").unwrap();
        assert_eq!(
            zero.checked_pow(&negative).unwrap_err(),
            Error::Numeric(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_unary_ops_keep_tag() {
        for magnitude in [-2.5, 0.0, 2.5] {
            let x = meters(magnitude);

            let abs = x.abs().unwrap();
            assert_eq!(*abs.magnitude(), magnitude.abs());
            assert_eq!(abs.units(), x.units());

            let neg = x.checked_neg().unwrap();
            assert_eq!(*neg.magnitude(), -magnitude);
            assert_eq!(neg.units(), x.units());

            let pos = x.pos();
            assert_eq!(*pos.magnitude(), magnitude);
            assert_eq!(pos.units(), x.units());
        }

        let min = Dim::new(i64::MIN, "m").unwrap();
        assert_eq!(min.checked_neg().unwrap_err(), NumericError::Overflow);
    }

    #[test]
    fn test_conversions_drop_tag() {
        assert_eq!(meters(2.75).to_f64(), 2.75);
        assert_eq!(meters(-2.75).trunc(), Ok(-2));
        assert_eq!(Dim::new(9i32, "m").unwrap().to_f64(), 9.0);
        assert_eq!(Dim::new(Decimal::new(99, 1), "m").unwrap().trunc(), Ok(9));
        assert_eq!(meters(f64::NAN).trunc(), Err(NumericError::NotRepresentable));
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = meters(1.0);
        let b = seconds(2.0);
        let _ = a.checked_add(&b).unwrap();
        let _ = a.checked_mul(10.0).unwrap();
        assert_eq!(*a.magnitude(), 1.0);
        assert_eq!(*b.magnitude(), 2.0);
    }

    #[test]
    fn test_operand_construction() {
        let a = meters(1.0);
        let tagged: Operand<'_, f64> = (&a).into();
        assert!(tagged.is_tagged());
        assert_eq!(*tagged.magnitude(), 1.0);

        let bare: Operand<'_, f64> = 2.0.into();
        assert!(!bare.is_tagged());
        assert_eq!(*Operand::bare(3.0).magnitude(), 3.0);
    }
}
