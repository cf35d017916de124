//! 256-bit AVX2 integer registers.

use crate::{
    dispatch::{
        AbsPolicy, AddPolicy, CrossPolicy, DivPolicy, DotPolicy, EqualsPolicy,
        HorizontalSumPolicy, Lanes, MaxPolicy, MinPolicy, MulPolicy, NegatePolicy, SubPolicy,
    },
    num::Scalar,
};
use bytemuck::{Pod, Zeroable};
use std::{array, fmt};

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Four `i64` lanes in an `__m256i` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct I64x4(__m256i);

unsafe impl Zeroable for I64x4 {}
unsafe impl Pod for I64x4 {}

impl fmt::Debug for I64x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("I64x4").field(&self.as_slice()).finish()
    }
}

impl Lanes<i64> for I64x4 {
    const LANES: usize = 4;
    const IS_REGISTER: bool = true;

    #[inline]
    fn splat(value: i64) -> Self {
        Self(unsafe { _mm256_set1_epi64x(value) })
    }

    #[inline]
    fn from_slice(values: &[i64]) -> Self {
        let mut lanes = [0; 4];
        lanes[..values.len()].copy_from_slice(values);
        Self(unsafe { _mm256_loadu_si256(lanes.as_ptr().cast::<__m256i>()) })
    }

    #[inline]
    fn as_slice(&self) -> &[i64] {
        bytemuck::cast_ref::<Self, [i64; 4]>(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [i64] {
        bytemuck::cast_mut::<Self, [i64; 4]>(self)
    }
}

impl AddPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        Self(unsafe { _mm256_add_epi64(a.0, b.0) })
    }
}

impl SubPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        Self(unsafe { _mm256_sub_epi64(a.0, b.0) })
    }
}

impl MulPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        // Wrapping 64-bit product from 32x32-bit partial products:
        // lo(a) * lo(b) + ((lo(a) * hi(b) + hi(a) * lo(b)) << 32)
        unsafe {
            let a_hi = _mm256_srli_epi64::<32>(a.0);
            let b_hi = _mm256_srli_epi64::<32>(b.0);
            let lo_lo = _mm256_mul_epu32(a.0, b.0);
            let lo_hi = _mm256_mul_epu32(a.0, b_hi);
            let hi_lo = _mm256_mul_epu32(a_hi, b.0);
            let cross_terms = _mm256_slli_epi64::<32>(_mm256_add_epi64(lo_hi, hi_lo));
            Self(_mm256_add_epi64(lo_lo, cross_terms))
        }
    }
}

impl DivPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        let (a, b) = (a.as_slice(), b.as_slice());
        let quotients: [i64; 4] = array::from_fn(|i| a[i].lane_div(b[i]));
        Self::from_slice(&quotients)
    }
}

impl MinPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let a_greater = _mm256_cmpgt_epi64(a.0, b.0);
            Self(_mm256_blendv_epi8(a.0, b.0, a_greater))
        }
    }
}

impl MaxPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let a_greater = _mm256_cmpgt_epi64(a.0, b.0);
            Self(_mm256_blendv_epi8(b.0, a.0, a_greater))
        }
    }
}

impl NegatePolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm256_sub_epi64(_mm256_setzero_si256(), a.0) })
    }
}

impl AbsPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        unsafe {
            let negative = _mm256_cmpgt_epi64(_mm256_setzero_si256(), a.0);
            let negated = _mm256_sub_epi64(_mm256_setzero_si256(), a.0);
            Self(_mm256_blendv_epi8(a.0, negated, negative))
        }
    }
}

#[inline]
fn horizontal_sum_epi64(v: __m256i) -> i64 {
    unsafe {
        // (0 + 2, 1 + 3), then + (1 + 3, 0 + 2)
        let sums = _mm_add_epi64(_mm256_castsi256_si128(v), _mm256_extracti128_si256::<1>(v));
        let sums = _mm_add_epi64(sums, _mm_unpackhi_epi64(sums, sums));
        let mut sum = 0_i64;
        _mm_storel_epi64((&mut sum as *mut i64).cast::<__m128i>(), sums);
        sum
    }
}

impl DotPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> i64 {
        horizontal_sum_epi64(<Self as MulPolicy<i64>>::map(a, b).0)
    }
}

impl HorizontalSumPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self) -> i64 {
        horizontal_sum_epi64(a.0)
    }
}

impl EqualsPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: i64) -> bool {
        if threshold == 0 {
            unsafe { _mm256_movemask_epi8(_mm256_cmpeq_epi64(a.0, b.0)) == -1 }
        } else {
            a.as_slice()
                .iter()
                .zip(b.as_slice())
                .all(|(&a, &b)| a.within(b, threshold))
        }
    }
}

/// Rotates lanes `(x, y, z, w)` to `(y, z, x, w)`.
const YZXW: i32 = 0b11_00_10_01;

impl CrossPolicy<i64> for I64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let a_yzx = Self(_mm256_permute4x64_epi64::<YZXW>(a.0));
            let b_yzx = Self(_mm256_permute4x64_epi64::<YZXW>(b.0));
            let c = _mm256_sub_epi64(
                <Self as MulPolicy<i64>>::map(a, &b_yzx).0,
                <Self as MulPolicy<i64>>::map(&a_yzx, b).0,
            );
            Self(_mm256_permute4x64_epi64::<YZXW>(c))
        }
    }
}
