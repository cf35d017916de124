//! Element types and the lane operations the scalar backend is built from.

#![allow(clippy::excessive_precision)]

use bytemuck::Pod;
use num_traits as nt;
use std::{fmt, hash::Hash};

/// Whether an element type is a floating point or an integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Real,
    Integral,
}

/// A type that can be stored in the lanes of a vector.
///
/// The `lane_*` operations define the per-lane semantics every backend must
/// reproduce. Integer arithmetic wraps on overflow, since that is what the
/// SIMD integer instructions do.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Pod
    + Send
    + Sync
    + 'static
{
    const CATEGORY: ElementCategory;
    const ZERO: Self;
    const ONE: Self;
    /// The name of the type, for reporting.
    const NAME: &'static str;

    fn lane_add(self, rhs: Self) -> Self;

    fn lane_sub(self, rhs: Self) -> Self;

    fn lane_mul(self, rhs: Self) -> Self;

    /// # Panics
    /// For integers, if `rhs` is zero.
    fn lane_div(self, rhs: Self) -> Self;

    fn lane_min(self, rhs: Self) -> Self;

    fn lane_max(self, rhs: Self) -> Self;

    /// Computed as `0 - self`, so negating a zero lane gives positive zero.
    fn lane_neg(self) -> Self;

    fn lane_abs(self) -> Self;

    /// Returns -1, 0 or 1 (zero is mapped to zero).
    fn lane_signum(self) -> Self;

    /// Whether `self` and `other` differ by at most `threshold`.
    fn within(self, other: Self, threshold: Self) -> bool;
}

/// A floating point element type.
pub trait Real:
    Scalar
    + Signed
    + nt::Float
    + nt::FromPrimitive
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
{
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
    const FRAC_1_PI: Self;
    const RADIANS_PER_DEGREE: Self;
    const RADIANS_PER_GRADIAN: Self;
    const GRADIANS_PER_DEGREE: Self;
    /// Threshold below which magnitudes and determinants are treated as zero.
    const SMALL_INACCURACY: Self;
}

/// An integer element type.
pub trait Integral: Scalar + nt::PrimInt + Eq + Ord + Hash {}

/// An element type with negative values.
pub trait Signed: Scalar {}

macro_rules! impl_real {
    ($f:tt, $small_inaccuracy:expr) => {
        impl Scalar for $f {
            const CATEGORY: ElementCategory = ElementCategory::Real;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NAME: &'static str = stringify!($f);

            #[inline]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn lane_min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            #[inline]
            fn lane_max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            #[inline]
            fn lane_neg(self) -> Self {
                0.0 - self
            }

            #[inline]
            fn lane_abs(self) -> Self {
                self.abs()
            }

            #[inline]
            fn lane_signum(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    self
                }
            }

            #[inline]
            fn within(self, other: Self, threshold: Self) -> bool {
                (self - other).abs() <= threshold
            }
        }

        impl Real for $f {
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = std::$f::consts::TAU;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const FRAC_1_PI: Self = std::$f::consts::FRAC_1_PI;
            const RADIANS_PER_DEGREE: Self = std::$f::consts::PI / 180.0;
            const RADIANS_PER_GRADIAN: Self = std::$f::consts::PI / 200.0;
            const GRADIANS_PER_DEGREE: Self = 400.0 / 360.0;
            const SMALL_INACCURACY: Self = $small_inaccuracy;
        }

        impl Signed for $f {}
    };
}

macro_rules! impl_signed_integral {
    ($i:tt) => {
        impl Scalar for $i {
            const CATEGORY: ElementCategory = ElementCategory::Integral;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const NAME: &'static str = stringify!($i);

            #[inline]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn lane_div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            #[inline]
            fn lane_min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            #[inline]
            fn lane_max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }

            #[inline]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline]
            fn lane_abs(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn lane_signum(self) -> Self {
                self.signum()
            }

            #[inline]
            fn within(self, other: Self, threshold: Self) -> bool {
                threshold >= 0 && self.abs_diff(other) <= threshold.unsigned_abs()
            }
        }

        impl Integral for $i {}

        impl Signed for $i {}
    };
}

impl_real!(f32, 1e-5);
impl_real!(f64, 1e-9);

impl_signed_integral!(i32);
impl_signed_integral!(i64);

impl Scalar for u32 {
    const CATEGORY: ElementCategory = ElementCategory::Integral;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const NAME: &'static str = "u32";

    #[inline]
    fn lane_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn lane_sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline]
    fn lane_mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    #[inline]
    fn lane_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn lane_min(self, rhs: Self) -> Self {
        Ord::min(self, rhs)
    }

    #[inline]
    fn lane_max(self, rhs: Self) -> Self {
        Ord::max(self, rhs)
    }

    #[inline]
    fn lane_neg(self) -> Self {
        self.wrapping_neg()
    }

    #[inline]
    fn lane_abs(self) -> Self {
        self
    }

    #[inline]
    fn lane_signum(self) -> Self {
        Self::from(self != 0)
    }

    #[inline]
    fn within(self, other: Self, threshold: Self) -> bool {
        self.abs_diff(other) <= threshold
    }
}

impl Integral for u32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_lane_arithmetic_wraps() {
        assert_eq!(i32::MAX.lane_add(1), i32::MIN);
        assert_eq!(i32::MIN.lane_sub(1), i32::MAX);
        assert_eq!(i32::MAX.lane_mul(2), -2);
        assert_eq!(i32::MIN.lane_neg(), i32::MIN);
        assert_eq!(i32::MIN.lane_abs(), i32::MIN);
        assert_eq!(i32::MIN.lane_div(-1), i32::MIN);
        assert_eq!(0_u32.lane_sub(1), u32::MAX);
    }

    #[test]
    #[should_panic]
    fn dividing_integer_lane_by_zero_panics() {
        let zero = std::hint::black_box(0);
        let _ = 7_i32.lane_div(zero);
    }

    #[test]
    fn negating_zero_float_lane_gives_positive_zero() {
        let negated = 0.0_f32.lane_neg();
        assert_eq!(negated, 0.0);
        assert!(negated.is_sign_positive());
    }

    #[test]
    fn signum_of_zero_is_zero() {
        assert_eq!(0.0_f32.lane_signum(), 0.0);
        assert_eq!(0_i32.lane_signum(), 0);
        assert_eq!(0_u32.lane_signum(), 0);
        assert_eq!((-3.5_f64).lane_signum(), -1.0);
        assert_eq!(7_u32.lane_signum(), 1);
    }

    #[test]
    fn within_compares_against_threshold() {
        assert!(1.0_f32.within(1.000_001, 1e-5));
        assert!(!1.0_f32.within(1.1, 1e-5));
        assert!(!f32::NAN.within(f32::NAN, 1.0));
        assert!(5_i32.within(7, 2));
        assert!(!5_i32.within(5, -1));
        assert!(!i32::MIN.within(i32::MAX, i32::MAX));
        assert!(3_u32.within(1, 2));
    }

    #[test]
    fn categories_are_correct() {
        assert_eq!(f32::CATEGORY, ElementCategory::Real);
        assert_eq!(f64::CATEGORY, ElementCategory::Real);
        assert_eq!(i32::CATEGORY, ElementCategory::Integral);
        assert_eq!(u32::CATEGORY, ElementCategory::Integral);
        assert_eq!(i64::CATEGORY, ElementCategory::Integral);
    }
}
