//! 128-bit ARM NEON registers.

use crate::{
    dispatch::{
        AbsPolicy, AddPolicy, CrossPolicy, DeterminantPolicy, DivPolicy, DotPolicy, EqualsPolicy,
        HorizontalSumPolicy, InversePolicy, Lanes, MaxPolicy, MinPolicy, MulPolicy, NegatePolicy,
        SubPolicy,
    },
    num::Scalar,
};
use bytemuck::{Pod, Zeroable};
use core::arch::aarch64::*;
use std::{array, fmt};

/// Four `f32` lanes in a `float32x4_t` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(float32x4_t);

/// Four `i32` lanes in an `int32x4_t` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct I32x4(int32x4_t);

/// Two `f64` lanes in a `float64x2_t` register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct F64x2(float64x2_t);

unsafe impl Zeroable for F32x4 {}
unsafe impl Pod for F32x4 {}
unsafe impl Zeroable for I32x4 {}
unsafe impl Pod for I32x4 {}
unsafe impl Zeroable for F64x2 {}
unsafe impl Pod for F64x2 {}

macro_rules! impl_register {
    (
        $register:ident, $t:ty, $lanes:literal,
        dup: $dup:ident, load: $load:ident,
        add: $add:ident, sub: $sub:ident, mul: $mul:ident,
        min: $min:ident, max: $max:ident, abs: $abs:ident
    ) => {
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
                Self(unsafe { $dup(value) })
            }

            #[inline]
            fn from_slice(values: &[$t]) -> Self {
                let mut lanes = [<$t as Scalar>::ZERO; $lanes];
                lanes[..values.len()].copy_from_slice(values);
                Self(unsafe { $load(lanes.as_ptr()) })
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

        impl AddPolicy<$t> for $register {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(unsafe { $add(a.0, b.0) })
            }
        }

        impl SubPolicy<$t> for $register {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(unsafe { $sub(a.0, b.0) })
            }
        }

        impl MulPolicy<$t> for $register {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(unsafe { $mul(a.0, b.0) })
            }
        }

        impl MinPolicy<$t> for $register {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(unsafe { $min(a.0, b.0) })
            }
        }

        impl MaxPolicy<$t> for $register {
            #[inline]
            fn map(a: &Self, b: &Self) -> Self {
                Self(unsafe { $max(a.0, b.0) })
            }
        }

        impl NegatePolicy<$t> for $register {
            #[inline]
            fn map(a: &Self) -> Self {
                Self(unsafe { $sub($dup(<$t as Scalar>::ZERO), a.0) })
            }
        }

        impl AbsPolicy<$t> for $register {
            #[inline]
            fn map(a: &Self) -> Self {
                Self(unsafe { $abs(a.0) })
            }
        }
    };
}

impl_register!(
    F32x4, f32, 4,
    dup: vdupq_n_f32, load: vld1q_f32,
    add: vaddq_f32, sub: vsubq_f32, mul: vmulq_f32,
    min: vminq_f32, max: vmaxq_f32, abs: vabsq_f32
);
impl_register!(
    I32x4, i32, 4,
    dup: vdupq_n_s32, load: vld1q_s32,
    add: vaddq_s32, sub: vsubq_s32, mul: vmulq_s32,
    min: vminq_s32, max: vmaxq_s32, abs: vabsq_s32
);
impl_register!(
    F64x2, f64, 2,
    dup: vdupq_n_f64, load: vld1q_f64,
    add: vaddq_f64, sub: vsubq_f64, mul: vmulq_f64,
    min: vminq_f64, max: vmaxq_f64, abs: vabsq_f64
);

// === F32x4 ===

impl DivPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        Self(unsafe { vdivq_f32(a.0, b.0) })
    }
}

#[inline]
fn horizontal_sum_f32(v: float32x4_t) -> f32 {
    unsafe {
        // (x + y, z + w, x + y, z + w)
        let pair_sums = vpaddq_f32(v, v);
        vgetq_lane_f32::<0>(pair_sums) + vgetq_lane_f32::<1>(pair_sums)
    }
}

impl DotPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> f32 {
        horizontal_sum_f32(unsafe { vmulq_f32(a.0, b.0) })
    }
}

impl HorizontalSumPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self) -> f32 {
        horizontal_sum_f32(a.0)
    }
}

impl EqualsPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: f32) -> bool {
        unsafe {
            let within = vcleq_f32(vabdq_f32(a.0, b.0), vdupq_n_f32(threshold));
            vminvq_u32(within) == u32::MAX
        }
    }
}

#[inline]
fn yzxw_f32(v: float32x4_t) -> float32x4_t {
    unsafe {
        // (y, z, w, x)
        let rotated = vextq_f32::<1>(v, v);
        vcopyq_laneq_f32::<3, 3>(vcopyq_laneq_f32::<2, 0>(rotated, v), v)
    }
}

#[inline]
fn cross_f32(a: float32x4_t, b: float32x4_t) -> float32x4_t {
    unsafe {
        let c = vsubq_f32(vmulq_f32(a, yzxw_f32(b)), vmulq_f32(yzxw_f32(a), b));
        yzxw_f32(c)
    }
}

#[inline]
fn dot_f32(a: float32x4_t, b: float32x4_t) -> f32 {
    horizontal_sum_f32(unsafe { vmulq_f32(a, b) })
}

#[inline]
fn scaled_f32(v: float32x4_t, factor: f32) -> float32x4_t {
    unsafe { vmulq_n_f32(v, factor) }
}

#[inline]
fn with_w_f32(v: float32x4_t, w: f32) -> float32x4_t {
    unsafe { vsetq_lane_f32::<3>(w, v) }
}

impl CrossPolicy<f32> for F32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        Self(cross_f32(a.0, b.0))
    }
}

/// A 4x4 matrix split into the xyz parts `a, b, c, d` of its columns and its
/// last row `(x, y, z, w)`.
struct Decomposition {
    columns: [float32x4_t; 4],
    last_row: [f32; 4],
    s: float32x4_t,
    t: float32x4_t,
    u: float32x4_t,
    v: float32x4_t,
    determinant: f32,
}

impl Decomposition {
    #[inline]
    fn new(columns: &[F32x4; 4]) -> Self {
        let last_row = columns.map(|column| column.lane(3));
        let columns = columns.map(|column| with_w_f32(column.0, 0.0));
        let [a, b, c, d] = columns;
        let [x, y, z, w] = last_row;

        let s = cross_f32(a, b);
        let t = cross_f32(c, d);
        let (u, v) = unsafe {
            (
                vsubq_f32(scaled_f32(a, y), scaled_f32(b, x)),
                vsubq_f32(scaled_f32(c, w), scaled_f32(d, z)),
            )
        };
        let determinant = dot_f32(s, v) + dot_f32(t, u);

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

    fn inverse(&self) -> [F32x4; 4] {
        let [a, b, c, d] = self.columns;
        let [x, y, z, w] = self.last_row;
        let inverse_determinant = 1.0 / self.determinant;
        let s = scaled_f32(self.s, inverse_determinant);
        let t = scaled_f32(self.t, inverse_determinant);
        let u = scaled_f32(self.u, inverse_determinant);
        let v = scaled_f32(self.v, inverse_determinant);

        unsafe {
            let row_0 = with_w_f32(vaddq_f32(cross_f32(b, v), scaled_f32(t, y)), -dot_f32(b, t));
            let row_1 = with_w_f32(vsubq_f32(cross_f32(v, a), scaled_f32(t, x)), dot_f32(a, t));
            let row_2 = with_w_f32(vaddq_f32(cross_f32(d, u), scaled_f32(s, w)), -dot_f32(d, s));
            let row_3 = with_w_f32(vsubq_f32(cross_f32(u, c), scaled_f32(s, z)), dot_f32(c, s));

            // (r0.0, r1.0, r0.2, r1.2) and so on, then 64-bit halves.
            let even_01 = vreinterpretq_f64_f32(vtrn1q_f32(row_0, row_1));
            let odd_01 = vreinterpretq_f64_f32(vtrn2q_f32(row_0, row_1));
            let even_23 = vreinterpretq_f64_f32(vtrn1q_f32(row_2, row_3));
            let odd_23 = vreinterpretq_f64_f32(vtrn2q_f32(row_2, row_3));
            [
                F32x4(vreinterpretq_f32_f64(vtrn1q_f64(even_01, even_23))),
                F32x4(vreinterpretq_f32_f64(vtrn1q_f64(odd_01, odd_23))),
                F32x4(vreinterpretq_f32_f64(vtrn2q_f64(even_01, even_23))),
                F32x4(vreinterpretq_f32_f64(vtrn2q_f64(odd_01, odd_23))),
            ]
        }
    }
}

impl DeterminantPolicy<f32> for F32x4 {
    #[inline]
    fn map(columns: &[Self; 4]) -> f32 {
        Decomposition::new(columns).determinant
    }
}

impl InversePolicy<f32> for F32x4 {
    #[inline]
    fn map(columns: &[Self; 4], threshold: f32) -> Option<[Self; 4]> {
        let decomposition = Decomposition::new(columns);
        (decomposition.determinant.abs() > threshold).then(|| decomposition.inverse())
    }
}

// === I32x4 ===

impl DivPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        let (a, b) = (a.as_slice(), b.as_slice());
        let quotients: [i32; 4] = array::from_fn(|i| a[i].lane_div(b[i]));
        Self::from_slice(&quotients)
    }
}

impl DotPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> i32 {
        unsafe { vaddvq_s32(vmulq_s32(a.0, b.0)) }
    }
}

impl HorizontalSumPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self) -> i32 {
        unsafe { vaddvq_s32(a.0) }
    }
}

impl EqualsPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: i32) -> bool {
        if threshold == 0 {
            unsafe { vminvq_u32(vceqq_s32(a.0, b.0)) == u32::MAX }
        } else {
            a.as_slice()
                .iter()
                .zip(b.as_slice())
                .all(|(&a, &b)| a.within(b, threshold))
        }
    }
}

#[inline]
fn yzxw_s32(v: int32x4_t) -> int32x4_t {
    unsafe {
        let rotated = vextq_s32::<1>(v, v);
        vcopyq_laneq_s32::<3, 3>(vcopyq_laneq_s32::<2, 0>(rotated, v), v)
    }
}

impl CrossPolicy<i32> for I32x4 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        unsafe {
            let c = vsubq_s32(vmulq_s32(a.0, yzxw_s32(b.0)), vmulq_s32(yzxw_s32(a.0), b.0));
            Self(yzxw_s32(c))
        }
    }
}

// === F64x2 ===

impl DivPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self, b: &Self) -> Self {
        Self(unsafe { vdivq_f64(a.0, b.0) })
    }
}

impl DotPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self, b: &Self) -> f64 {
        unsafe { vaddvq_f64(vmulq_f64(a.0, b.0)) }
    }
}

impl HorizontalSumPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self) -> f64 {
        unsafe { vaddvq_f64(a.0) }
    }
}

impl EqualsPolicy<f64> for F64x2 {
    #[inline]
    fn map(a: &Self, b: &Self, threshold: f64) -> bool {
        unsafe {
            let within = vcleq_f64(vabdq_f64(a.0, b.0), vdupq_n_f64(threshold));
            vminvq_u32(vreinterpretq_u32_u64(within)) == u32::MAX
        }
    }
}
