//! Operation dispatch policies.
//!
//! Each primitive operation is a trait with a single required `map` function.
//! Every storage type a vector can be backed by implements the policies, either
//! with SIMD intrinsics (the register types) or with per-lane loops (the array
//! fallbacks). Which implementation runs is decided by the storage type, so the
//! choice is made entirely at compile time.
//!
//! Policies operate on all lanes, including the padding lane of length-3
//! vectors. Vectors keep that lane at zero, which makes the full-width dot
//! product and horizontal sum equal to their three-lane counterparts.

pub(crate) mod scalar;

use crate::num::{Real, Scalar};
use std::fmt;

/// Construction of and access to the lanes of a storage type.
pub trait Lanes<T: Scalar>: Copy + fmt::Debug + Send + Sync + 'static {
    /// Number of lanes, padding included.
    const LANES: usize;
    /// Whether the lanes live in a SIMD register type.
    const IS_REGISTER: bool;

    /// Creates lanes that all hold the given value.
    fn splat(value: T) -> Self;

    /// Creates lanes from the given values, zeroing the remaining lanes.
    ///
    /// # Panics
    /// If `values` has more than [`Self::LANES`](Lanes::LANES) elements.
    fn from_slice(values: &[T]) -> Self;

    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];

    #[inline]
    fn zeros() -> Self {
        Self::splat(T::ZERO)
    }

    #[inline]
    fn lane(&self, index: usize) -> T {
        self.as_slice()[index]
    }

    #[inline]
    fn set_lane(&mut self, index: usize, value: T) {
        self.as_mut_slice()[index] = value;
    }
}

macro_rules! define_binary_policy {
    ($(#[$attributes:meta])* $name:ident) => {
        $(#[$attributes])*
        pub trait $name<T: Scalar>: Lanes<T> {
            fn map(a: &Self, b: &Self) -> Self;

            #[inline]
            fn map_assign(a: &mut Self, b: &Self) {
                *a = Self::map(a, b);
            }
        }
    };
}

macro_rules! define_unary_policy {
    ($(#[$attributes:meta])* $name:ident) => {
        $(#[$attributes])*
        pub trait $name<T: Scalar>: Lanes<T> {
            fn map(a: &Self) -> Self;

            #[inline]
            fn map_assign(a: &mut Self) {
                *a = Self::map(a);
            }
        }
    };
}

define_binary_policy!(
    /// Lane-wise addition.
    AddPolicy
);
define_binary_policy!(
    /// Lane-wise subtraction.
    SubPolicy
);
define_binary_policy!(
    /// Lane-wise multiplication.
    MulPolicy
);
define_binary_policy!(
    /// Lane-wise division. Integer division by a zero lane panics, so callers
    /// must not pass a zero padding lane as divisor.
    DivPolicy
);
define_binary_policy!(
    /// Lane-wise minimum.
    MinPolicy
);
define_binary_policy!(
    /// Lane-wise maximum.
    MaxPolicy
);
define_binary_policy!(
    /// Cross product of the first three lanes. The fourth lane of the result
    /// is zero when the fourth lanes of both operands are zero.
    CrossPolicy
);

define_unary_policy!(
    /// Lane-wise negation, computed as `0 - a`.
    NegatePolicy
);
define_unary_policy!(
    /// Lane-wise absolute value.
    AbsPolicy
);

/// Sum of lane-wise products over all lanes.
pub trait DotPolicy<T: Scalar>: Lanes<T> {
    fn map(a: &Self, b: &Self) -> T;
}

/// Sum of all lanes, added as `(l0 + l1) + (l2 + l3)`.
pub trait HorizontalSumPolicy<T: Scalar>: Lanes<T> {
    fn map(a: &Self) -> T;
}

/// Whether every lane of `a` is within `threshold` of the corresponding lane
/// of `b`. A zero threshold requests exact comparison.
pub trait EqualsPolicy<T: Scalar>: Lanes<T> {
    fn map(a: &Self, b: &Self, threshold: T) -> bool;
}

/// Determinant of the 4x4 matrix with the given columns.
pub trait DeterminantPolicy<T: Real>: Lanes<T> {
    fn map(columns: &[Self; 4]) -> T;
}

/// Inverse of the 4x4 matrix with the given columns, or `None` if the
/// magnitude of its determinant does not exceed `threshold`.
pub trait InversePolicy<T: Real>: Lanes<T> {
    fn map(columns: &[Self; 4], threshold: T) -> Option<[Self; 4]>;
}

/// The policies every vector storage type implements.
pub trait VectorRepr<T: Scalar>:
    Lanes<T>
    + AddPolicy<T>
    + SubPolicy<T>
    + MulPolicy<T>
    + DivPolicy<T>
    + MinPolicy<T>
    + MaxPolicy<T>
    + NegatePolicy<T>
    + AbsPolicy<T>
    + DotPolicy<T>
    + HorizontalSumPolicy<T>
    + EqualsPolicy<T>
{
}

impl<T, R> VectorRepr<T> for R
where
    T: Scalar,
    R: Lanes<T>
        + AddPolicy<T>
        + SubPolicy<T>
        + MulPolicy<T>
        + DivPolicy<T>
        + MinPolicy<T>
        + MaxPolicy<T>
        + NegatePolicy<T>
        + AbsPolicy<T>
        + DotPolicy<T>
        + HorizontalSumPolicy<T>
        + EqualsPolicy<T>,
{
}
