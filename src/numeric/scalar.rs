// ============================================================================
// Scalar Capability
// The arithmetic a magnitude type must provide to be dimensioned
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{MathematicalOps, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A numeric type usable as the magnitude of a [`Dim`](crate::units::Dim).
///
/// Every operation is fallible so that a scalar can report its own failure
/// modes (division by zero, overflow, bad exponents). Implementations must not
/// invent failures the underlying type does not have: floats follow IEEE-754
/// and never return an error from arithmetic.
pub trait Scalar:
    Clone + PartialEq + PartialOrd + fmt::Display + fmt::Debug + FromStr + 'static
{
    /// `self + rhs`
    fn try_add(&self, rhs: &Self) -> NumericResult<Self>;

    /// `self - rhs`
    fn try_sub(&self, rhs: &Self) -> NumericResult<Self>;

    /// `self * rhs`
    fn try_mul(&self, rhs: &Self) -> NumericResult<Self>;

    /// Native division (`/`) of the scalar type.
    fn try_div(&self, rhs: &Self) -> NumericResult<Self>;

    /// Division rounded toward negative infinity.
    fn try_floor_div(&self, rhs: &Self) -> NumericResult<Self>;

    /// Remainder of floor division; takes the sign of `rhs`, so
    /// `floor_div(a, b) * b + rem(a, b) == a`.
    fn try_rem(&self, rhs: &Self) -> NumericResult<Self>;

    /// `self` raised to `exp`.
    fn try_pow(&self, exp: &Self) -> NumericResult<Self>;

    fn try_neg(&self) -> NumericResult<Self>;

    fn try_abs(&self) -> NumericResult<Self>;

    /// Lossy conversion to `f64`.
    fn to_f64(&self) -> f64;

    /// Truncation toward zero to an `i64`.
    fn trunc_i64(&self) -> NumericResult<i64>;
}

// ============================================================================
// Integers
// ============================================================================

macro_rules! impl_scalar_for_int {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn try_add(&self, rhs: &Self) -> NumericResult<Self> {
                self.checked_add(*rhs).ok_or(NumericError::Overflow)
            }

            #[inline]
            fn try_sub(&self, rhs: &Self) -> NumericResult<Self> {
                self.checked_sub(*rhs).ok_or(NumericError::Overflow)
            }

            #[inline]
            fn try_mul(&self, rhs: &Self) -> NumericResult<Self> {
                self.checked_mul(*rhs).ok_or(NumericError::Overflow)
            }

            #[inline]
            fn try_div(&self, rhs: &Self) -> NumericResult<Self> {
                if *rhs == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                self.checked_div(*rhs).ok_or(NumericError::Overflow)
            }

            fn try_floor_div(&self, rhs: &Self) -> NumericResult<Self> {
                let quotient = self.try_div(rhs)?;
                let remainder = self.checked_rem(*rhs).ok_or(NumericError::Overflow)?;
                // Truncated quotient is one too high when the signs differ
                if remainder != 0 && ((*self < 0) != (*rhs < 0)) {
                    Ok(quotient - 1)
                } else {
                    Ok(quotient)
                }
            }

            fn try_rem(&self, rhs: &Self) -> NumericResult<Self> {
                if *rhs == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                // MIN % -1 wraps to 0, which is also the exact answer
                let remainder = self.wrapping_rem(*rhs);
                if remainder != 0 && ((remainder < 0) != (*rhs < 0)) {
                    Ok(remainder + *rhs)
                } else {
                    Ok(remainder)
                }
            }

            fn try_pow(&self, exp: &Self) -> NumericResult<Self> {
                let odd = *exp % 2 != 0;
                if *exp < 0 {
                    return match *self {
                        0 => Err(NumericError::DivisionByZero),
                        1 => Ok(1),
                        -1 => Ok(if odd { -1 } else { 1 }),
                        _ => Err(NumericError::InvalidExponent),
                    };
                }
                match u32::try_from(*exp) {
                    Ok(e) => self.checked_pow(e).ok_or(NumericError::Overflow),
                    Err(_) => match *self {
                        0 => Ok(0),
                        1 => Ok(1),
                        -1 => Ok(if odd { -1 } else { 1 }),
                        _ => Err(NumericError::Overflow),
                    },
                }
            }

            #[inline]
            fn try_neg(&self) -> NumericResult<Self> {
                self.checked_neg().ok_or(NumericError::Overflow)
            }

            #[inline]
            fn try_abs(&self) -> NumericResult<Self> {
                self.checked_abs().ok_or(NumericError::Overflow)
            }

            #[inline]
            fn to_f64(&self) -> f64 {
                *self as f64
            }

            #[inline]
            fn trunc_i64(&self) -> NumericResult<i64> {
                Ok(i64::from(*self))
            }
        }
    )*};
}

impl_scalar_for_int!(i32, i64);

// ============================================================================
// Floats
// ============================================================================

macro_rules! impl_scalar_for_float {
    ($($t:ident => $divmod:ident),* $(,)?) => {$(
        /// Floored quotient and remainder. The quotient is derived from the
        /// exact `fmod` remainder, so floor-dividing 1.0 by 0.1 gives 9
        /// where `floor(1.0 / 0.1)` gives 10.
        fn $divmod(lhs: $t, rhs: $t) -> ($t, $t) {
            if rhs == 0.0 {
                return ($t::floor(lhs / rhs), lhs % rhs);
            }

            let mut remainder = lhs % rhs;
            let mut quotient = (lhs - remainder) / rhs;
            if remainder != 0.0 {
                if (rhs < 0.0) != (remainder < 0.0) {
                    remainder += rhs;
                    quotient -= 1.0;
                }
            } else {
                remainder = $t::copysign(0.0, rhs);
            }

            let quotient = if quotient != 0.0 {
                let floored = $t::floor(quotient);
                if quotient - floored > 0.5 {
                    floored + 1.0
                } else {
                    floored
                }
            } else {
                $t::copysign(0.0, lhs / rhs)
            };
            (quotient, remainder)
        }

        impl Scalar for $t {
            #[inline]
            fn try_add(&self, rhs: &Self) -> NumericResult<Self> {
                Ok(*self + *rhs)
            }

            #[inline]
            fn try_sub(&self, rhs: &Self) -> NumericResult<Self> {
                Ok(*self - *rhs)
            }

            #[inline]
            fn try_mul(&self, rhs: &Self) -> NumericResult<Self> {
                Ok(*self * *rhs)
            }

            #[inline]
            fn try_div(&self, rhs: &Self) -> NumericResult<Self> {
                Ok(*self / *rhs)
            }

            #[inline]
            fn try_floor_div(&self, rhs: &Self) -> NumericResult<Self> {
                Ok($divmod(*self, *rhs).0)
            }

            #[inline]
            fn try_rem(&self, rhs: &Self) -> NumericResult<Self> {
                Ok($divmod(*self, *rhs).1)
            }

            #[inline]
            fn try_pow(&self, exp: &Self) -> NumericResult<Self> {
                Ok($t::powf(*self, *exp))
            }

            #[inline]
            fn try_neg(&self) -> NumericResult<Self> {
                Ok(-*self)
            }

            #[inline]
            fn try_abs(&self) -> NumericResult<Self> {
                Ok($t::abs(*self))
            }

            #[inline]
            fn to_f64(&self) -> f64 {
                f64::from(*self)
            }

            fn trunc_i64(&self) -> NumericResult<i64> {
                let truncated = f64::trunc(f64::from(*self));
                // i64::MAX as f64 rounds up to 2^63, which is already out of range
                if !truncated.is_finite()
                    || truncated < i64::MIN as f64
                    || truncated >= i64::MAX as f64
                {
                    return Err(NumericError::NotRepresentable);
                }
                Ok(truncated as i64)
            }
        }
    )*};
}

impl_scalar_for_float!(f32 => divmod_f32, f64 => divmod_f64);

// ============================================================================
// Decimal
// ============================================================================

impl Scalar for Decimal {
    #[inline]
    fn try_add(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_add(*rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn try_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_sub(*rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn try_mul(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_mul(*rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn try_div(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.checked_div(*rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn try_floor_div(&self, rhs: &Self) -> NumericResult<Self> {
        decimal_divmod(self, rhs).map(|(quotient, _)| quotient)
    }

    #[inline]
    fn try_rem(&self, rhs: &Self) -> NumericResult<Self> {
        decimal_divmod(self, rhs).map(|(_, remainder)| remainder)
    }

    fn try_pow(&self, exp: &Self) -> NumericResult<Self> {
        if self.is_zero() && exp.is_sign_negative() && !exp.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        if !exp.fract().is_zero() {
            // No real root of a negative base
            if self.is_sign_negative() && !self.is_zero() {
                return Err(NumericError::InvalidExponent);
            }
            return MathematicalOps::checked_powd(self, *exp).ok_or(NumericError::Overflow);
        }

        match ToPrimitive::to_i64(exp) {
            Some(e) => MathematicalOps::checked_powi(self, e).ok_or(NumericError::Overflow),
            None if self.abs() == Decimal::ONE => {
                let odd = !(*exp % Decimal::TWO).is_zero();
                Ok(if self.is_sign_negative() && odd { -Decimal::ONE } else { Decimal::ONE })
            }
            None if self.is_zero() => Ok(Decimal::ZERO),
            None => Err(NumericError::Overflow),
        }
    }

    #[inline]
    fn try_neg(&self) -> NumericResult<Self> {
        Ok(-*self)
    }

    #[inline]
    fn try_abs(&self) -> NumericResult<Self> {
        Ok(Decimal::abs(self))
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn trunc_i64(&self) -> NumericResult<i64> {
        ToPrimitive::to_i64(&Decimal::trunc(self)).ok_or(NumericError::NotRepresentable)
    }
}

/// Floored quotient and remainder, computed from the exact truncated
/// remainder so the quotient is never rounded up to the next integer.
fn decimal_divmod(lhs: &Decimal, rhs: &Decimal) -> NumericResult<(Decimal, Decimal)> {
    if rhs.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    let remainder = lhs.checked_rem(*rhs).ok_or(NumericError::Overflow)?;
    let quotient = (*lhs - remainder)
        .checked_div(*rhs)
        .ok_or(NumericError::Overflow)?
        .trunc();
    if !remainder.is_zero() && remainder.is_sign_negative() != rhs.is_sign_negative() {
        let quotient = quotient
            .checked_sub(Decimal::ONE)
            .ok_or(NumericError::Overflow)?;
        Ok((quotient, remainder + *rhs))
    } else {
        Ok((quotient, remainder))
    }
}

// ============================================================================
// Tests
// ============================================================================
