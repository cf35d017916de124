//! 128-bit SSE registers.

use crate::{
    dispatch::{
        AbsPolicy, AddPolicy, CrossPolicy, DeterminantPolicy, DivPolicy, DotPolicy, EqualsPolicy,
        HorizontalSumPolicy, InversePolicy, Lanes, MaxPolicy, MinPolicy, MulPolicy, NegatePolicy,
        SubPolicy,
    },
    num::Scalar,
};
use bytemuck::{Pod, Zeroable};
use std::{array, fmt};

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Four `f32` lanes in an `__m128` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(__m128);

/// Four `i32` lanes in an `__m128i` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct I32x4(__m128i);

/// Two `f64` lanes in an `__m128d` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct F64x2(__m128d);

unsafe impl Zeroable for F32x4 {}
unsafe impl Pod for F32x4 {}
unsafe impl Zeroable for I32x4 {}
unsafe impl Pod for I32x4 {}
unsafe impl Zeroable for F64x2 {}
unsafe impl Pod for F64x2 {}

/// `_MM_SHUFFLE(3, 0, 2, 1)`: rotates `(x, y, z, w)` to `(y, z, x, w)`.
const YZXW: i32 = 0b11_00_10_01;

macro_rules! impl_debug_and_lanes {
    ($register:ident, $t:ty, $lanes:literal, $splat:ident, $load:expr) => {
        impl fmt::Debug for $register {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($register))
                    .field(&self.as_slice())
                    .finish()
            }
        }

        impl Lanes<$t> for $register {
            const LANES: usize = $lanes;
            const IS_REGISTER: bool = true;

            #[inline]
            fn splat(value: $t) -> Self {
                Self(unsafe { $splat(value) })
            }

            #[inline]
            fn from_slice(values: &[$t]) -> Self {
                let mut lanes = [0 as $t; $lanes];
                lanes[..values.len()].copy_from_slice(values);
                let load = $load;
                Self(load(&lanes))
            }

            #[inline]
            fn as_slice(&self) -> &[$t] {
                bytemuck::cast_ref::<Self, [$t; $lanes]>(self)
            }

            #[inline]
            fn as_mut_slice(&mut self) -> &mut [$t] {
                bytemuck::cast_mut::<Self, [$t; $lanes]>(self)
            }
        }
    };
}

macro_rules! impl_binary_intrinsic {
    ($policy:ident, $register:ident, $t:ty, $intrinsic:ident) => {
        impl $policy<$t> for $register {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(unsafe { $intrinsic(a.0, b.0) })
            }
        }
    };
}

impl_debug_and_lanes!(F32x4, f32, 4, _mm_set1_ps, |lanes: &[f32; 4]| unsafe {
    _mm_loadu_ps(lanes.as_ptr())
});
impl_debug_and_lanes!(I32x4, i32, 4, _mm_set1_epi32, |lanes: &[i32; 4]| unsafe {
    _mm_loadu_si128(lanes.as_ptr().cast::<__m128i>())
});
impl_debug_and_lanes!(F64x2, f64, 2, _mm_set1_pd, |lanes: &[f64; 2]| unsafe {
    _mm_loadu_pd(lanes.as_ptr())
});

// === F32x4 ===

impl_binary_intrinsic!(AddPolicy, F32x4, f32, _mm_add_ps);
impl_binary_intrinsic!(SubPolicy, F32x4, f32, _mm_sub_ps);
impl_binary_intrinsic!(MulPolicy, F32x4, f32, _mm_mul_ps);
impl_binary_intrinsic!(DivPolicy, F32x4, f32, _mm_div_ps);
impl_binary_intrinsic!(MinPolicy, F32x4, f32, _mm_min_ps);
impl_binary_intrinsic!(MaxPolicy, F32x4, f32, _mm_max_ps);

impl NegatePolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm_sub_ps(_mm_setzero_ps(), a.0) })
    }
}

impl AbsPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), a.0) })
    }
}

#[inline]
fn horizontal_sum_ps(v: __m128) -> f32 {
    unsafe {
        // (x, y, z, w) -> (y, x, w, z)
        let swapped = _mm_shuffle_ps::<0b10_11_00_01>(v, v);
        let pair_sums = _mm_add_ps(v, swapped);
        let upper = _mm_movehl_ps(swapped, pair_sums);
        _mm_cvtss_f32(_mm_add_ss(pair_sums, upper))
    }
}

impl DotPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> f32 {
        horizontal_sum_ps(unsafe { _mm_mul_ps(a.0, b.0) })
    }
}

impl HorizontalSumPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self) -> f32 {
        horizontal_sum_ps(a.0)
    }
}

impl EqualsPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: f32) -> bool {
        unsafe {
            let difference = _mm_andnot_ps(_mm_set1_ps(-0.0), _mm_sub_ps(a.0, b.0));
            _mm_movemask_ps(_mm_cmple_ps(difference, _mm_set1_ps(threshold))) == 0b1111
        }
    }
}

impl CrossPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let a_yzx = _mm_shuffle_ps::<YZXW>(a.0, a.0);
            let b_yzx = _mm_shuffle_ps::<YZXW>(b.0, b.0);
            let c = _mm_sub_ps(_mm_mul_ps(a.0, b_yzx), _mm_mul_ps(a_yzx, b.0));
            Self(_mm_shuffle_ps::<YZXW>(c, c))
        }
    }
}

/// Computes one group of 2x2 sub-determinants of the last three columns.
/// `P` and `Q` broadcast lanes `p` and `q` (`p * 0x55` and `q * 0x55`).
#[inline]
fn sub_determinants<const P: i32, const Q: i32>(y: __m128, z: __m128, w: __m128) -> __m128 {
    unsafe {
        let wz_p = _mm_shuffle_ps::<P>(w, z);
        let wz_q = _mm_shuffle_ps::<Q>(w, z);
        let zy_q = _mm_shuffle_ps::<Q>(z, y);
        let zy_p = _mm_shuffle_ps::<P>(z, y);
        let wz_p = _mm_shuffle_ps::<0b10_00_00_00>(wz_p, wz_p);
        let wz_q = _mm_shuffle_ps::<0b10_00_00_00>(wz_q, wz_q);
        _mm_sub_ps(_mm_mul_ps(zy_q, wz_p), _mm_mul_ps(wz_q, zy_p))
    }
}

/// `(y[k], x[k], x[k], x[k])` for the lane `k` broadcast by `K`.
#[inline]
fn leading_lanes<const K: i32>(x: __m128, y: __m128) -> __m128 {
    unsafe {
        let pair = _mm_shuffle_ps::<K>(y, x);
        _mm_shuffle_ps::<0b10_10_10_00>(pair, pair)
    }
}

/// Cofactor columns of the matrix with the given columns, and its
/// determinant.
#[inline]
fn adjugate(columns: &[F32x4; 4]) -> ([__m128; 4], f32) {
    let [x, y, z, w] = columns.map(|column| column.0);
    unsafe {
        let fac0 = sub_determinants::<0xFF, 0xAA>(y, z, w);
        let fac1 = sub_determinants::<0xFF, 0x55>(y, z, w);
        let fac2 = sub_determinants::<0xAA, 0x55>(y, z, w);
        let fac3 = sub_determinants::<0xFF, 0x00>(y, z, w);
        let fac4 = sub_determinants::<0xAA, 0x00>(y, z, w);
        let fac5 = sub_determinants::<0x55, 0x00>(y, z, w);

        let vec0 = leading_lanes::<0x00>(x, y);
        let vec1 = leading_lanes::<0x55>(x, y);
        let vec2 = leading_lanes::<0xAA>(x, y);
        let vec3 = leading_lanes::<0xFF>(x, y);

        let combine = |a, fa, b, fb, c, fc| {
            _mm_add_ps(
                _mm_sub_ps(_mm_mul_ps(a, fa), _mm_mul_ps(b, fb)),
                _mm_mul_ps(c, fc),
            )
        };
        let sign_a = _mm_setr_ps(1.0, -1.0, 1.0, -1.0);
        let sign_b = _mm_setr_ps(-1.0, 1.0, -1.0, 1.0);

        let inv0 = _mm_mul_ps(combine(vec1, fac0, vec2, fac1, vec3, fac2), sign_a);
        let inv1 = _mm_mul_ps(combine(vec0, fac0, vec2, fac3, vec3, fac4), sign_b);
        let inv2 = _mm_mul_ps(combine(vec0, fac1, vec1, fac3, vec3, fac5), sign_a);
        let inv3 = _mm_mul_ps(combine(vec0, fac2, vec1, fac4, vec2, fac5), sign_b);

        // First row of the adjugate: lane 0 of every cofactor column
        let row01 = _mm_shuffle_ps::<0b00_00_00_00>(inv0, inv1);
        let row23 = _mm_shuffle_ps::<0b00_00_00_00>(inv2, inv3);
        let row = _mm_shuffle_ps::<0b10_00_10_00>(row01, row23);

        let determinant = horizontal_sum_ps(_mm_mul_ps(x, row));
        ([inv0, inv1, inv2, inv3], determinant)
    }
}

impl DeterminantPolicy<f32> for F32x4 {
    #[inline]
    fn map(columns: &[Self; 4]) -> f32 {
        adjugate(columns).1
    }
}

impl InversePolicy<f32> for F32x4 {
    #[inline]
    fn map(columns: &[Self; 4], threshold: f32) -> Option<[Self; 4]> {
        let (adjugate, determinant) = adjugate(columns);
        if !(determinant.abs() > threshold) {
            return None;
        }
        let inverse_determinant = unsafe { _mm_set1_ps(1.0 / determinant) };
        Some(adjugate.map(|column| Self(unsafe { _mm_mul_ps(column, inverse_determinant) })))
    }
}

// === I32x4 ===

impl_binary_intrinsic!(AddPolicy, I32x4, i32, _mm_add_epi32);
impl_binary_intrinsic!(SubPolicy, I32x4, i32, _mm_sub_epi32);

#[cfg(impact_simd_sse41)]
impl_binary_intrinsic!(MulPolicy, I32x4, i32, _mm_mullo_epi32);
#[cfg(impact_simd_sse41)]
impl_binary_intrinsic!(MinPolicy, I32x4, i32, _mm_min_epi32);
#[cfg(impact_simd_sse41)]
impl_binary_intrinsic!(MaxPolicy, I32x4, i32, _mm_max_epi32);

#[cfg(not(impact_simd_sse41))]
impl MulPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        // SSE2 only multiplies the even lanes into 64-bit products, so the odd
        // lanes are shifted down and multiplied separately.
        unsafe {
            let even = _mm_mul_epu32(a.0, b.0);
            let odd = _mm_mul_epu32(_mm_srli_si128::<4>(a.0), _mm_srli_si128::<4>(b.0));
            Self(_mm_unpacklo_epi32(
                _mm_shuffle_epi32::<0b00_00_10_00>(even),
                _mm_shuffle_epi32::<0b00_00_10_00>(odd),
            ))
        }
    }
}

#[cfg(not(impact_simd_sse41))]
impl MinPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let a_greater = _mm_cmpgt_epi32(a.0, b.0);
            Self(_mm_or_si128(
                _mm_and_si128(a_greater, b.0),
                _mm_andnot_si128(a_greater, a.0),
            ))
        }
    }
}

#[cfg(not(impact_simd_sse41))]
impl MaxPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let a_greater = _mm_cmpgt_epi32(a.0, b.0);
            Self(_mm_or_si128(
                _mm_and_si128(a_greater, a.0),
                _mm_andnot_si128(a_greater, b.0),
            ))
        }
    }
}

impl DivPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        let (a, b) = (a.as_slice(), b.as_slice());
        let quotients: [i32; 4] = array::from_fn(|i| a[i].wrapping_div(b[i]));
        Self::from_slice(&quotients)
    }
}

impl NegatePolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm_sub_epi32(_mm_setzero_si128(), a.0) })
    }
}

impl AbsPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        unsafe {
            let sign = _mm_srai_epi32::<31>(a.0);
            Self(_mm_sub_epi32(_mm_xor_si128(a.0, sign), sign))
        }
    }
}

#[inline]
fn horizontal_sum_epi32(v: __m128i) -> i32 {
    unsafe {
        // (0, 1, 2, 3) + (2, 3, 0, 1), then + (1, 0, 3, 2)
        let sums = _mm_add_epi32(v, _mm_shuffle_epi32::<0b01_00_11_10>(v));
        let sums = _mm_add_epi32(sums, _mm_shuffle_epi32::<0b10_11_00_01>(sums));
        _mm_cvtsi128_si32(sums)
    }
}

impl DotPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> i32 {
        horizontal_sum_epi32(<Self as MulPolicy<i32>>::map(a, b).0)
    }
}

impl HorizontalSumPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self) -> i32 {
        horizontal_sum_epi32(a.0)
    }
}

impl EqualsPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: i32) -> bool {
        if threshold == 0 {
            unsafe { _mm_movemask_epi8(_mm_cmpeq_epi32(a.0, b.0)) == 0xFFFF }
        } else {
            a.as_slice()
                .iter()
                .zip(b.as_slice())
                .all(|(&a, &b)| a.within(b, threshold))
        }
    }
}

impl CrossPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let a_yzx = Self(_mm_shuffle_epi32::<YZXW>(a.0));
            let b_yzx = Self(_mm_shuffle_epi32::<YZXW>(b.0));
            let c = _mm_sub_epi32(
                <Self as MulPolicy<i32>>::map(a, &b_yzx).0,
                <Self as MulPolicy<i32>>::map(&a_yzx, b).0,
            );
            Self(_mm_shuffle_epi32::<YZXW>(c))
        }
    }
}

// === F64x2 ===

impl_binary_intrinsic!(AddPolicy, F64x2, f64, _mm_add_pd);
impl_binary_intrinsic!(SubPolicy, F64x2, f64, _mm_sub_pd);
impl_binary_intrinsic!(MulPolicy, F64x2, f64, _mm_mul_pd);
impl_binary_intrinsic!(DivPolicy, F64x2, f64, _mm_div_pd);
impl_binary_intrinsic!(MinPolicy, F64x2, f64, _mm_min_pd);
impl_binary_intrinsic!(MaxPolicy, F64x2, f64, _mm_max_pd);

impl NegatePolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm_sub_pd(_mm_setzero_pd(), a.0) })
    }
}

impl AbsPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), a.0) })
    }
}

#[inline]
pub(super) fn horizontal_sum_pd(v: __m128d) -> f64 {
    unsafe { _mm_cvtsd_f64(_mm_add_sd(v, _mm_unpackhi_pd(v, v))) }
}

impl DotPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self, b: &Self) -> f64 {
        horizontal_sum_pd(unsafe { _mm_mul_pd(a.0, b.0) })
    }
}

impl HorizontalSumPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self) -> f64 {
        horizontal_sum_pd(a.0)
    }
}

impl EqualsPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: f64) -> bool {
        unsafe {
            let difference = _mm_andnot_pd(_mm_set1_pd(-0.0), _mm_sub_pd(a.0, b.0));
            _mm_movemask_pd(_mm_cmple_pd(difference, _mm_set1_pd(threshold))) == 0b11
        }
    }
}
