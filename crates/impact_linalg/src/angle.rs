//! Different units for angles.

use crate::num::Real;
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle<T: Real>: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Creates the angle corresponding to the given number of radians.
    fn from_radians(radians: T) -> Self;

    /// Returns the value of the angle in radians.
    fn radians(self) -> T;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> T {
        radians_to_degrees(self.radians())
    }

    /// Returns the value of the angle in gradians.
    fn gradians(self) -> T {
        radians_to_gradians(self.radians())
    }

    fn as_degrees(self) -> Degrees<T> {
        Degrees(self.degrees())
    }

    fn as_radians(self) -> Radians<T> {
        Radians(self.radians())
    }

    fn as_gradians(self) -> Gradians<T> {
        Gradians(self.gradians())
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<T>(pub T);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<T>(pub T);

/// An angle in gradians (a full turn is 400 gradians).
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Gradians<T>(pub T);

/// Construction of angles from plain numbers, as in `90.0_f32.deg()`.
pub trait AngleLiteral: Real {
    fn deg(self) -> Degrees<Self> {
        Degrees(self)
    }

    fn rad(self) -> Radians<Self> {
        Radians(self)
    }

    fn grad(self) -> Gradians<Self> {
        Gradians(self)
    }
}

impl AngleLiteral for f32 {}
impl AngleLiteral for f64 {}

macro_rules! impl_angle_unit {
    ($unit:ident, $suffix:literal, to_radians: $to_radians:ident, from_radians: $from_radians:ident) => {
        impl<T: Real> $unit<T> {
            /// Returns the number of units in the angle.
            #[inline]
            pub fn value(self) -> T {
                self.0
            }
        }

        impl<T: Real> Angle<T> for $unit<T> {
            #[inline]
            fn zero() -> Self {
                Self(T::ZERO)
            }

            #[inline]
            fn from_radians(radians: T) -> Self {
                Self($from_radians(radians))
            }

            #[inline]
            fn radians(self) -> T {
                $to_radians(self.0)
            }
        }

        unsafe impl<T: Real> Zeroable for $unit<T> {}
        unsafe impl<T: Real> Pod for $unit<T> {}

        impl<T: Real> fmt::Display for $unit<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)?;
                f.write_str($suffix)
            }
        }

        impl<T: Real> Add for $unit<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<T: Real> Sub for $unit<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<T: Real> Neg for $unit<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<T: Real> Mul<T> for $unit<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<T: Real> Div<T> for $unit<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl_abs_diff_eq!([T: Real], $unit<T>, T, |a, b, epsilon| {
            a.0.abs_diff_eq(&b.0, epsilon)
        });

        impl_relative_eq!([T: Real], $unit<T>, T, |a, b, epsilon, max_relative| {
            a.0.relative_eq(&b.0, epsilon, max_relative)
        });
    };
}

impl_angle_unit!(Degrees, "°", to_radians: degrees_to_radians, from_radians: radians_to_degrees);
impl_angle_unit!(Radians, " rad", to_radians: identity, from_radians: identity);
impl_angle_unit!(Gradians, " gon", to_radians: gradians_to_radians, from_radians: radians_to_gradians);

macro_rules! impl_mixed_unit_ops {
    ($($lhs:ident with $rhs:ident),* $(,)?) => {
        $(
            impl<T: Real> From<$rhs<T>> for $lhs<T> {
                fn from(angle: $rhs<T>) -> Self {
                    Self::from_radians(angle.radians())
                }
            }

            impl<T: Real> Add<$rhs<T>> for $lhs<T> {
                type Output = Self;
                fn add(self, rhs: $rhs<T>) -> Self {
                    self + Self::from(rhs)
                }
            }

            impl<T: Real> Sub<$rhs<T>> for $lhs<T> {
                type Output = Self;
                fn sub(self, rhs: $rhs<T>) -> Self {
                    self - Self::from(rhs)
                }
            }

            impl<T: Real> PartialEq<$rhs<T>> for $lhs<T> {
                fn eq(&self, rhs: &$rhs<T>) -> bool {
                    self.0 == Self::from(*rhs).0
                }
            }

            impl<T: Real> PartialOrd<$rhs<T>> for $lhs<T> {
                fn partial_cmp(&self, rhs: &$rhs<T>) -> Option<Ordering> {
                    self.0.partial_cmp(&Self::from(*rhs).0)
                }
            }
        )*
    };
}

impl_mixed_unit_ops!(
    Degrees with Radians,
    Degrees with Gradians,
    Radians with Degrees,
    Radians with Gradians,
    Gradians with Degrees,
    Gradians with Radians,
);

#[inline]
fn identity<T>(value: T) -> T {
    value
}

pub fn degrees_to_radians<T: Real>(degrees: T) -> T {
    degrees * T::RADIANS_PER_DEGREE
}

pub fn radians_to_degrees<T: Real>(radians: T) -> T {
    radians / T::RADIANS_PER_DEGREE
}

pub fn gradians_to_radians<T: Real>(gradians: T) -> T {
    gradians * T::RADIANS_PER_GRADIAN
}

pub fn radians_to_gradians<T: Real>(radians: T) -> T {
    radians / T::RADIANS_PER_GRADIAN
}

pub fn degrees_to_gradians<T: Real>(degrees: T) -> T {
    degrees * T::GRADIANS_PER_DEGREE
}

pub fn gradians_to_degrees<T: Real>(gradians: T) -> T {
    gradians / T::GRADIANS_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0_f32).radians(), 0.0);

        assert_abs_diff_eq!(Degrees(90.0_f32).radians(), PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(180.0_f32).radians(), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(270.0_f32).radians(), 3.0 * PI / 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(Degrees(-360.0_f32).radians(), -2.0 * PI, epsilon = 1e-5);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0, epsilon = 1e-5);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0, epsilon = 1e-5);
        assert_abs_diff_eq!(Radians(-2.0 * PI).degrees(), -360.0, epsilon = 1e-5);
    }

    #[test]
    fn gradian_conversions_work() {
        assert_abs_diff_eq!(
            Gradians(100.0_f64).radians(),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(Gradians(100.0_f64).degrees(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(degrees_to_gradians(180.0_f64), 200.0, epsilon = 1e-12);
        assert_abs_diff_eq!(gradians_to_degrees(50.0_f64), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Radians(PI).as_gradians(), Gradians(200.0), epsilon = 1e-4);
    }

    #[test]
    fn degree_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0_f32) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0_f32) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Degrees(42.0_f32) * 2.5, Degrees(105.0));
        assert_abs_diff_eq!(Degrees(42.0_f32) / 4.0, Degrees(10.5));
        assert_abs_diff_eq!(-Degrees(42.0_f32), Degrees(-42.0));
    }

    #[test]
    fn mixed_unit_ops_work() {
        assert_abs_diff_eq!(
            Degrees(45.0_f32) + Radians(PI / 2.0),
            Degrees(135.0),
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            Radians(PI / 2.0) - Degrees(45.0_f32),
            Radians(PI / 4.0),
            epsilon = 1e-6
        );

        assert_eq!(Degrees(0.0_f32), Radians(0.0));
        assert!(Degrees(42.0_f32) > Radians(0.0));
        assert!(Radians(PI) < Degrees(360.0));
        assert!(Gradians(300.0_f32) > Degrees(180.0));
    }

    #[test]
    fn angle_literals_create_angles() {
        assert_eq!(90.0_f32.deg(), Degrees(90.0));
        assert_eq!(1.5_f64.rad(), Radians(1.5));
        assert_eq!(100.0_f32.grad(), Gradians(100.0));
    }

    #[test]
    fn angles_display_with_unit() {
        assert_eq!(Degrees(90.0_f32).to_string(), "90°");
        assert_eq!(format!("{:.2}", Radians(1.0_f64)), "1.00 rad");
        assert_eq!(Gradians(50.0_f32).to_string(), "50 gon");
    }
}
