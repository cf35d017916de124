//! Array-backed lane storage used when no SIMD register is available, and for
//! all unaligned storage.

use crate::{
    dispatch::{
        AbsPolicy, AddPolicy, CrossPolicy, DeterminantPolicy, DivPolicy, DotPolicy, EqualsPolicy,
        HorizontalSumPolicy, InversePolicy, Lanes, MaxPolicy, MinPolicy, MulPolicy, NegatePolicy,
        SubPolicy, scalar,
    },
    num::{Real, Scalar},
};
use bytemuck::{Pod, Zeroable};
use std::array;

/// Lanes with the natural alignment of the element type.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Packed<T, const L: usize>(pub(crate) [T; L]);

/// Lanes aligned to 8 bytes, the size of a two-lane 32-bit register.
#[repr(C, align(8))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Align8<T, const L: usize>(pub(crate) [T; L]);

/// Lanes aligned to 16 bytes, the size of an SSE or NEON register.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Align16<T, const L: usize>(pub(crate) [T; L]);

/// Lanes aligned to 32 bytes, the size of an AVX register.
#[repr(C, align(32))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Align32<T, const L: usize>(pub(crate) [T; L]);

unsafe impl<T: Zeroable, const L: usize> Zeroable for Packed<T, L> {}
unsafe impl<T: Pod, const L: usize> Pod for Packed<T, L> {}

// The aligned arrays are only `Pod` when their size is a multiple of their
// alignment, which holds for the instantiations below.
macro_rules! impl_pod_for_aligned {
    ($($array:ident<$t:ty, $lanes:literal>),* $(,)?) => {
        $(
            unsafe impl Zeroable for $array<$t, $lanes> {}
            unsafe impl Pod for $array<$t, $lanes> {}
        )*
    };
}

impl_pod_for_aligned!(
    Align8<f32, 2>,
    Align8<i32, 2>,
    Align8<u32, 2>,
    Align16<f32, 4>,
    Align16<i32, 4>,
    Align16<u32, 4>,
    Align16<f64, 2>,
    Align16<i64, 2>,
    Align32<f64, 4>,
    Align32<i64, 4>,
);

macro_rules! impl_scalar_policies {
    ($array:ident) => {
        impl<T: Scalar, const L: usize> $array<T, L> {
            #[inline]
            fn zip_with(a: &Self, b: &Self, f: impl Fn(T, T) -> T) -> Self {
                Self(array::from_fn(|i| f(a.0[i], b.0[i])))
            }

            #[inline]
            fn map_lanes(a: &Self, f: impl Fn(T) -> T) -> Self {
                Self(a.0.map(f))
            }
        }

        impl<T: Scalar, const L: usize> Lanes<T> for $array<T, L> {
            const LANES: usize = L;
            const IS_REGISTER: bool = false;

            #[inline]
            fn splat(value: T) -> Self {
                Self([value; L])
            }

            #[inline]
            fn from_slice(values: &[T]) -> Self {
                let mut lanes = [T::ZERO; L];
                lanes[..values.len()].copy_from_slice(values);
                Self(lanes)
            }

            #[inline]
            fn as_slice(&self) -> &[T] {
                &self.0
            }

            #[inline]
            fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.0
            }
        }

        impl<T: Scalar, const L: usize> AddPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self::zip_with(a, b, T::lane_add)
            }
        }

        impl<T: Scalar, const L: usize> SubPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self::zip_with(a, b, T::lane_sub)
            }
        }

        impl<T: Scalar, const L: usize> MulPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self::zip_with(a, b, T::lane_mul)
            }
        }

        impl<T: Scalar, const L: usize> DivPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self::zip_with(a, b, T::lane_div)
            }
        }

        impl<T: Scalar, const L: usize> MinPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self::zip_with(a, b, T::lane_min)
            }
        }

        impl<T: Scalar, const L: usize> MaxPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self::zip_with(a, b, T::lane_max)
            }
        }

        impl<T: Scalar, const L: usize> NegatePolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self) -> Self {
                Self::map_lanes(a, T::lane_neg)
            }
        }

        impl<T: Scalar, const L: usize> AbsPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self) -> Self {
                Self::map_lanes(a, T::lane_abs)
            }
        }

        impl<T: Scalar, const L: usize> DotPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self) -> T {
                scalar::dot(&a.0, &b.0)
            }
        }

        impl<T: Scalar, const L: usize> HorizontalSumPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self) -> T {
                scalar::pairwise_sum(&a.0)
            }
        }

        impl<T: Scalar, const L: usize> EqualsPolicy<T> for $array<T, L> {
            #[inline]
            fn map(a: &Self, b: &Self, threshold: T) -> bool {
                a.0.iter()
                    .zip(&b.0)
                    .all(|(&a, &b)| a.within(b, threshold))
            }
        }

        impl<T: Scalar> CrossPolicy<T> for $array<T, 4> {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(scalar::cross(&a.0, &b.0))
            }
        }

        impl<T: Real> DeterminantPolicy<T> for $array<T, 4> {
            #[inline]
            fn map(columns: &[Self; 4]) -> T {
                scalar::determinant4(&columns.map(|column| column.0))
            }
        }

        impl<T: Real> InversePolicy<T> for $array<T, 4> {
            #[inline]
            fn map(columns: &[Self; 4], threshold: T) -> Option<[Self; 4]> {
                scalar::inverse4(&columns.map(|column| column.0), threshold)
                    .map(|inverse| inverse.map(Self))
            }
        }
    };
}

impl_scalar_policies!(Packed);
impl_scalar_policies!(Align8);
impl_scalar_policies!(Align16);
impl_scalar_policies!(Align32);
