//! 256-bit AVX floating point registers.

use super::sse::horizontal_sum_pd;
use crate::dispatch::{
    AbsPolicy, AddPolicy, CrossPolicy, DeterminantPolicy, DivPolicy, DotPolicy, EqualsPolicy,
    HorizontalSumPolicy, InversePolicy, Lanes, MaxPolicy, MinPolicy, MulPolicy, NegatePolicy,
    SubPolicy,
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Four `f64` lanes in an `__m256d` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct F64x4(__m256d);

unsafe impl Zeroable for F64x4 {}
unsafe impl Pod for F64x4 {}

impl fmt::Debug for F64x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("F64x4").field(&self.as_slice()).finish()
    }
}

impl Lanes<f64> for F64x4 {
    const LANES: usize = 4;
    const IS_REGISTER: bool = true;

    #[inline]
    fn splat(value: f64) -> Self {
        Self(unsafe { _mm256_set1_pd(value) })
    }

    #[inline]
    fn from_slice(values: &[f64]) -> Self {
        let mut lanes = [0.0; 4];
        lanes[..values.len()].copy_from_slice(values);
        Self(unsafe { _mm256_loadu_pd(lanes.as_ptr()) })
    }

    #[inline]
    fn as_slice(&self) -> &[f64] {
        bytemuck::cast_ref::<Self, [f64; 4]>(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        bytemuck::cast_mut::<Self, [f64; 4]>(self)
    }
}

macro_rules! impl_binary_intrinsic {
    ($policy:ident, $intrinsic:ident) => {
        impl $policy<f64> for F64x4 {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(unsafe { $intrinsic(a.0, b.0) })
            }
        }
    };
}

impl_binary_intrinsic!(AddPolicy, _mm256_add_pd);
impl_binary_intrinsic!(SubPolicy, _mm256_sub_pd);
impl_binary_intrinsic!(MulPolicy, _mm256_mul_pd);
impl_binary_intrinsic!(DivPolicy, _mm256_div_pd);
impl_binary_intrinsic!(MinPolicy, _mm256_min_pd);
impl_binary_intrinsic!(MaxPolicy, _mm256_max_pd);

impl NegatePolicy<f64> for F64x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm256_sub_pd(_mm256_setzero_pd(), a.0) })
    }
}

impl AbsPolicy<f64> for F64x4 {
    #[inline]
    fn map(a: &Self) -> Self {
        Self(unsafe { _mm256_andnot_pd(_mm256_set1_pd(-0.0), a.0) })
    }
}

#[inline]
fn horizontal_sum(v: __m256d) -> f64 {
    unsafe {
        let lower = horizontal_sum_pd(_mm256_castpd256_pd128(v));
        let upper = horizontal_sum_pd(_mm256_extractf128_pd::<1>(v));
        lower + upper
    }
}

impl DotPolicy<f64> for F64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> f64 {
        horizontal_sum(unsafe { _mm256_mul_pd(a.0, b.0) })
    }
}

impl HorizontalSumPolicy<f64> for F64x4 {
    #[inline]
    fn map(a: &Self) -> f64 {
        horizontal_sum(a.0)
    }
}

impl EqualsPolicy<f64> for F64x4 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: f64) -> bool {
        unsafe {
            let difference = _mm256_andnot_pd(_mm256_set1_pd(-0.0), _mm256_sub_pd(a.0, b.0));
            let within = _mm256_cmp_pd::<_CMP_LE_OQ>(difference, _mm256_set1_pd(threshold));
            _mm256_movemask_pd(within) == 0b1111
        }
    }
}

/// Rotates `(x, y, z, w)` to `(y, z, x, w)`.
#[inline]
fn yzxw(v: __m256d) -> __m256d {
    unsafe {
        // (z, w, x, y)
        let swapped = _mm256_permute2f128_pd::<0x01>(v, v);
        let xyxy = _mm256_blend_pd::<0b1100>(v, swapped);
        let zwzw = _mm256_blend_pd::<0b1100>(swapped, v);
        _mm256_shuffle_pd::<0b1001>(xyxy, zwzw)
    }
}

#[inline]
fn cross(a: __m256d, b: __m256d) -> __m256d {
    unsafe {
        let c = _mm256_sub_pd(_mm256_mul_pd(a, yzxw(b)), _mm256_mul_pd(yzxw(a), b));
        yzxw(c)
    }
}

#[inline]
fn dot(a: __m256d, b: __m256d) -> f64 {
    horizontal_sum(unsafe { _mm256_mul_pd(a, b) })
}

#[inline]
fn scaled(v: __m256d, factor: f64) -> __m256d {
    unsafe { _mm256_mul_pd(v, _mm256_set1_pd(factor)) }
}

#[inline]
fn with_w(v: __m256d, w: f64) -> __m256d {
    unsafe { _mm256_blend_pd::<0b1000>(v, _mm256_set1_pd(w)) }
}

impl CrossPolicy<f64> for F64x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        Self(cross(a.0, b.0))
    }
}

/// A 4x4 matrix split into the xyz parts `a, b, c, d` of its columns and its
/// last row `(x, y, z, w)`, with the products that both the determinant and
/// the inverse are built from.
struct Decomposition {
    columns: [__m256d; 4],
    last_row: [f64; 4],
    s: __m256d,
    t: __m256d,
    u: __m256d,
    v: __m256d,
    determinant: f64,
}

impl Decomposition {
    #[inline]
    fn new(columns: &[F64x4; 4]) -> Self {
        let last_row = columns.map(|column| column.lane(3));
        let columns = columns.map(|column| with_w(column.0, 0.0));
        let [a, b, c, d] = columns;
        let [x, y, z, w] = last_row;

        let s = cross(a, b);
        let t = cross(c, d);
        let (u, v) = unsafe {
            (
                _mm256_sub_pd(scaled(a, y), scaled(b, x)),
                _mm256_sub_pd(scaled(c, w), scaled(d, z)),
            )
        };
        let determinant = dot(s, v) + dot(t, u);

        Self {
            columns,
            last_row,
            s,
            t,
            u,
            v,
            determinant,
        }
    }

    fn inverse(&self) -> [F64x4; 4] {
        let [a, b, c, d] = self.columns;
        let [x, y, z, w] = self.last_row;
        let inverse_determinant = 1.0 / self.determinant;
        let s = scaled(self.s, inverse_determinant);
        let t = scaled(self.t, inverse_determinant);
        let u = scaled(self.u, inverse_determinant);
        let v = scaled(self.v, inverse_determinant);

        unsafe {
            let row_0 = with_w(_mm256_add_pd(cross(b, v), scaled(t, y)), -dot(b, t));
            let row_1 = with_w(_mm256_sub_pd(cross(v, a), scaled(t, x)), dot(a, t));
            let row_2 = with_w(_mm256_add_pd(cross(d, u), scaled(s, w)), -dot(d, s));
            let row_3 = with_w(_mm256_sub_pd(cross(u, c), scaled(s, z)), dot(c, s));

            let low_01 = _mm256_unpacklo_pd(row_0, row_1);
            let high_01 = _mm256_unpackhi_pd(row_0, row_1);
            let low_23 = _mm256_unpacklo_pd(row_2, row_3);
            let high_23 = _mm256_unpackhi_pd(row_2, row_3);
            [
                F64x4(_mm256_permute2f128_pd::<0x20>(low_01, low_23)),
                F64x4(_mm256_permute2f128_pd::<0x20>(high_01, high_23)),
                F64x4(_mm256_permute2f128_pd::<0x31>(low_01, low_23)),
                F64x4(_mm256_permute2f128_pd::<0x31>(high_01, high_23)),
            ]
        }
    }
}

impl DeterminantPolicy<f64> for F64x4 {
    #[inline]
    fn map(columns: &[Self; 4]) -> f64 {
        Decomposition::new(columns).determinant
    }
}

impl InversePolicy<f64> for F64x4 {
    #[inline]
    fn map(columns: &[Self; 4], threshold: f64) -> Option<[Self; 4]> {
        let decomposition = Decomposition::new(columns);
        (decomposition.determinant.abs() > threshold).then(|| decomposition.inverse())
    }
}
