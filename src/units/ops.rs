// ============================================================================
// Operator Traits
// std::ops / std::cmp implementations on top of the checked API
// ============================================================================
//
// The operators encode the operand rules in the type system: Add/Sub only
// exist between two Dim values, Mul/Div/Rem also exist against the built-in
// scalars (in both orders), and no PartialEq/PartialOrd against a bare scalar
// is provided at all.
//
// Infallible for ergonomics: these panic on a scalar failure (integer
// division by zero, overflow). Use the checked_* methods in production.

use super::dimensioned::Dim;
use crate::numeric::Scalar;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

// ============================================================================
// Comparison
// ============================================================================

/// Magnitudes only; tags are not compared.
impl<T: Scalar> PartialEq for Dim<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.magnitude() == other.magnitude()
    }
}

impl<T: Scalar> PartialOrd for Dim<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(other.magnitude())
    }
}

// ============================================================================
// Dim with Dim
// ============================================================================

macro_rules! impl_dim_binop {
    ($($op_trait:ident, $method:ident, $checked:ident, $what:literal;)*) => {$(
        impl<T: Scalar> $op_trait for Dim<T> {
            type Output = Dim<T>;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.$checked(&rhs).expect(concat!("Dim ", $what, " failed"))
            }
        }

        impl<T: Scalar> $op_trait<&Dim<T>> for &Dim<T> {
            type Output = Dim<T>;

            #[inline]
            fn $method(self, rhs: &Dim<T>) -> Self::Output {
                self.$checked(rhs).expect(concat!("Dim ", $what, " failed"))
            }
        }
    )*};
}

impl_dim_binop! {
    Add, add, checked_add, "addition";
    Sub, sub, checked_sub, "subtraction";
    Mul, mul, checked_mul, "multiplication";
    Div, div, checked_div, "division";
    Rem, rem, checked_rem, "remainder";
}

impl<T: Scalar> Neg for Dim<T> {
    type Output = Dim<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Dim negation overflow")
    }
}

impl<T: Scalar> Neg for &Dim<T> {
    type Output = Dim<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Dim negation overflow")
    }
}

// ============================================================================
// Dim with bare scalars (scaling operators only)
// ============================================================================

macro_rules! impl_scaling_with_scalar {
    (@op $t:ty, $op_trait:ident, $method:ident, $checked:ident, $reflected:ident, $what:literal) => {
        impl $op_trait<$t> for Dim<$t> {
            type Output = Dim<$t>;

            #[inline]
            fn $method(self, rhs: $t) -> Self::Output {
                self.$checked(rhs).expect(concat!("Dim ", $what, " failed"))
            }
        }

        impl $op_trait<Dim<$t>> for $t {
            type Output = Dim<$t>;

            #[inline]
            fn $method(self, rhs: Dim<$t>) -> Self::Output {
                rhs.$reflected(self).expect(concat!("Dim ", $what, " failed"))
            }
        }
    };

    ($($t:ty),* $(,)?) => {$(
        impl_scaling_with_scalar!(@op $t, Mul, mul, checked_mul, checked_rmul, "multiplication");
        impl_scaling_with_scalar!(@op $t, Div, div, checked_div, checked_rdiv, "division");
        impl_scaling_with_scalar!(@op $t, Rem, rem, checked_rem, checked_rrem, "remainder");
    )*};
}

impl_scaling_with_scalar!(i32, i64, f32, f64, Decimal);

#[cfg(test)]
mod tests {
    use crate::units::{Dim, Units};

    fn dim(magnitude: f64, units: &str) -> Dim<f64> {
        Dim::new(magnitude, units).unwrap()
    }

    #[test]
    fn test_partial_eq_ignores_tags() {
        assert_eq!(dim(1.0, "m"), dim(1.0, "s"));
        assert_ne!(dim(1.0, "m"), dim(2.0, "m"));
        assert_eq!(dim(0.0, "m"), dim(-0.0, "m"));
        assert_ne!(dim(f64::NAN, "m"), dim(f64::NAN, "m"));
    }

    #[test]
    fn test_partial_ord() {
        assert!(dim(1.0, "m") < dim(2.0, "s"));
        assert!(dim(2.0, "m") >= dim(2.0, "s"));
        assert!(dim(-1.0, "m") <= dim(-0.0, "m"));
        assert!(!(dim(f64::NAN, "m") > dim(0.0, "m")));
    }

    #[test]
    fn test_dim_operators() {
        let a = dim(6.0, "m");
        let b = dim(4.0, "s");

        let sum = &a + &b;
        assert_eq!(*sum.magnitude(), 10.0);
        assert_eq!(sum.units(), &Units::from("m"));

        assert_eq!(*(&a - &b).magnitude(), 2.0);
        assert_eq!(*(&a * &b).magnitude(), 24.0);
        assert_eq!(*(&a / &b).magnitude(), 1.5);
        assert_eq!(*(&a % &b).magnitude(), 2.0);

        let neg = -a.clone();
        assert_eq!(*neg.magnitude(), -6.0);
        assert_eq!(neg.units(), &Units::from("m"));

        let owned = a + b;
        assert_eq!(owned.units(), &Units::from("m"));
    }

    #[test]
    fn test_scaling_with_bare_scalars() {
        let a = dim(6.0, "m");

        let scaled = a.clone() * 2.0;
        assert_eq!(*scaled.magnitude(), 12.0);
        assert_eq!(scaled.units(), &Units::from("m"));

        let reflected = 3.0 / a.clone();
        assert_eq!(*reflected.magnitude(), 0.5);
        assert_eq!(reflected.units(), &Units::from("m"));

        assert_eq!(*(a.clone() % 4.0).magnitude(), 2.0);
        assert_eq!(*(2.0 * a).magnitude(), 12.0);

        let count = Dim::new(7i64, "apples").unwrap();
        assert_eq!(*(count.clone() / 2i64).magnitude(), 3);
        assert_eq!(*(15i64 % count).magnitude(), 1);
    }

    #[test]
    #[should_panic(expected = "Dim division failed")]
    fn test_integer_division_by_zero_panics() {
        let count = Dim::new(7i64, "apples").unwrap();
        let _ = count / 0i64;
    }
}
