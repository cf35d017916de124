//! Register aliases for each element type and lane count.
//!
//! [`RegisterFor<LANES>`](RegisterFor) maps an element type to the storage
//! type holding `LANES` of its values. When the compiled SIMD tier provides a
//! register for the pair, the alias resolves to a wrapper around that
//! register; otherwise it resolves to an array with the same size and
//! alignment. Enabling or disabling SIMD therefore never changes layout.
//!
//! | Element | 2 lanes              | 4 lanes                           |
//! |---------|----------------------|-----------------------------------|
//! | `f32`   | `Align8`             | SSE / NEON `F32x4`, else `Align16` |
//! | `i32`   | `Align8`             | SSE / NEON `I32x4`, else `Align16` |
//! | `u32`   | `Align8`             | `Align16`                         |
//! | `f64`   | SSE / NEON `F64x2`, else `Align16` | AVX `F64x4`, else `Align32` |
//! | `i64`   | `Align16`            | AVX2 `I64x4`, else `Align32`       |

mod array;
#[cfg(impact_simd_avx)]
mod avx;
#[cfg(impact_simd_avx2)]
mod avx2;
#[cfg(impact_simd_neon)]
mod neon;
#[cfg(impact_simd_sse)]
mod sse;

pub use array::{Align8, Align16, Align32, Packed};

use crate::{dispatch::VectorRepr, num::Scalar};
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(impact_simd_sse)] {
        pub type F32x4 = sse::F32x4;
        pub type I32x4 = sse::I32x4;
        pub type F64x2 = sse::F64x2;
    } else if #[cfg(impact_simd_neon)] {
        pub type F32x4 = neon::F32x4;
        pub type I32x4 = neon::I32x4;
        pub type F64x2 = neon::F64x2;
    } else {
        pub type F32x4 = Align16<f32, 4>;
        pub type I32x4 = Align16<i32, 4>;
        pub type F64x2 = Align16<f64, 2>;
    }
}

cfg_if! {
    if #[cfg(impact_simd_avx)] {
        pub type F64x4 = avx::F64x4;
    } else {
        pub type F64x4 = Align32<f64, 4>;
    }
}

cfg_if! {
    if #[cfg(impact_simd_avx2)] {
        pub type I64x4 = avx2::I64x4;
    } else {
        pub type I64x4 = Align32<i64, 4>;
    }
}

pub type F32x2 = Align8<f32, 2>;
pub type I32x2 = Align8<i32, 2>;
pub type U32x2 = Align8<u32, 2>;
pub type U32x4 = Align16<u32, 4>;
pub type I64x2 = Align16<i64, 2>;

/// Selects the storage type holding `LANES` values of `Self`.
pub trait RegisterFor<const LANES: usize>: Scalar {
    type Register: VectorRepr<Self>;
}

macro_rules! impl_register_for {
    ($($t:ty => [$two:ty, $four:ty]),* $(,)?) => {
        $(
            impl RegisterFor<2> for $t {
                type Register = $two;
            }

            impl RegisterFor<4> for $t {
                type Register = $four;
            }
        )*
    };
}

impl_register_for!(
    f32 => [F32x2, F32x4],
    f64 => [F64x2, F64x4],
    i32 => [I32x2, I32x4],
    u32 => [U32x2, U32x4],
    i64 => [I64x2, I64x4],
);
