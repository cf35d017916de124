//! Vectors with integer components.

use crate::{
    num::Integral,
    storage::{Aligned, SelectStorage, Unaligned},
};
use std::hash::{Hash, Hasher};

/// A vector of `N` integer components.
///
/// Shares its storage scheme and padding rules with
/// [`TVector`](crate::vector::TVector). Arithmetic wraps on overflow with
/// every backend, and division by a zero component panics.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TIntVector<T: Integral, const N: usize, A: SelectStorage<T, N> = Aligned> {
    components: A::Repr,
}

pub type TIntVector2<T, A = Aligned> = TIntVector<T, 2, A>;
pub type TIntVector3<T, A = Aligned> = TIntVector<T, 3, A>;
pub type TIntVector4<T, A = Aligned> = TIntVector<T, 4, A>;

pub type IntVector2 = TIntVector2<i32>;
pub type IntVector3 = TIntVector3<i32>;
pub type IntVector4 = TIntVector4<i32>;

pub type UIntVector2 = TIntVector2<u32>;
pub type UIntVector3 = TIntVector3<u32>;
pub type UIntVector4 = TIntVector4<u32>;

pub type LongVector2 = TIntVector2<i64>;
pub type LongVector3 = TIntVector3<i64>;
pub type LongVector4 = TIntVector4<i64>;

pub type IntVector2U = TIntVector2<i32, Unaligned>;
pub type IntVector3U = TIntVector3<i32, Unaligned>;
pub type IntVector4U = TIntVector4<i32, Unaligned>;

pub type LongVector2U = TIntVector2<i64, Unaligned>;
pub type LongVector3U = TIntVector3<i64, Unaligned>;
pub type LongVector4U = TIntVector4<i64, Unaligned>;

impl_vector_common!(TIntVector, Integral);

impl<T: Integral, const N: usize, A: SelectStorage<T, N>> TIntVector<T, N, A> {
    /// Computes the length of the vector in double precision. Unlike
    /// [`sqr_magnitude`](Self::sqr_magnitude), this cannot overflow.
    pub fn magnitude(&self) -> f64 {
        self.as_slice()
            .iter()
            .map(|component| {
                let component = component.to_f64().unwrap_or(f64::NAN);
                component * component
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<T: Integral, const N: usize, A: SelectStorage<T, N>> Eq for TIntVector<T, N, A> {}

impl<T: Integral, const N: usize, A: SelectStorage<T, N>> Hash for TIntVector<T, N, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl_scalar_left_mul!(TIntVector, i32, u32, i64);
