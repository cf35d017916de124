//! Storage selection for vectors.
//!
//! A vector of `N` elements of type `T` stores its components in
//! `<A as SelectStorage<T, N>>::Repr`, where `A` is one of the alignment
//! markers [`Aligned`] and [`Unaligned`]. Only lengths 2, 3 and 4 have a
//! storage, so any other length is rejected at compile time. Length-3 vectors
//! occupy four lanes, the last of which is padding.

use crate::{
    dispatch::{Lanes, VectorRepr},
    num::Scalar,
    register::{Packed, RegisterFor},
};
use std::{
    fmt,
    hash::Hash,
    mem::{align_of, size_of},
};

/// Marker for how the storage of a vector is aligned.
pub trait Alignment:
    Copy + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    const IS_ALIGNED: bool;
}

/// Storage in a SIMD register type, or in an array with the alignment of one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aligned;

/// Storage in an array with the natural alignment of the element type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unaligned;

impl Alignment for Aligned {
    const IS_ALIGNED: bool = true;
}

impl Alignment for Unaligned {
    const IS_ALIGNED: bool = false;
}

/// Selects the storage for `N` elements of type `T`.
pub trait SelectStorage<T: Scalar, const N: usize>: Alignment {
    type Repr: VectorRepr<T>;
}

/// The storage selected for `N` elements of type `T` with alignment `A`.
pub type StorageOf<T, const N: usize, A> = <A as SelectStorage<T, N>>::Repr;

impl<T: RegisterFor<2>> SelectStorage<T, 2> for Aligned {
    type Repr = <T as RegisterFor<2>>::Register;
}

impl<T: RegisterFor<4>> SelectStorage<T, 3> for Aligned {
    type Repr = <T as RegisterFor<4>>::Register;
}

impl<T: RegisterFor<4>> SelectStorage<T, 4> for Aligned {
    type Repr = <T as RegisterFor<4>>::Register;
}

impl<T: Scalar> SelectStorage<T, 2> for Unaligned {
    type Repr = Packed<T, 2>;
}

impl<T: Scalar> SelectStorage<T, 3> for Unaligned {
    type Repr = Packed<T, 4>;
}

impl<T: Scalar> SelectStorage<T, 4> for Unaligned {
    type Repr = Packed<T, 4>;
}

/// Memory layout of the storage selected for a vector type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageLayout {
    pub element: &'static str,
    pub length: usize,
    pub aligned: bool,
    pub lanes: usize,
    pub size: usize,
    pub alignment: usize,
    pub is_register: bool,
}

impl StorageLayout {
    /// Returns the layout of the storage for `N` elements of type `T` with
    /// alignment `A`.
    pub fn of<T: Scalar, const N: usize, A: SelectStorage<T, N>>() -> Self {
        Self {
            element: T::NAME,
            length: N,
            aligned: A::IS_ALIGNED,
            lanes: <StorageOf<T, N, A> as Lanes<T>>::LANES,
            size: size_of::<StorageOf<T, N, A>>(),
            alignment: align_of::<StorageOf<T, N, A>>(),
            is_register: <StorageOf<T, N, A> as Lanes<T>>::IS_REGISTER,
        }
    }
}

impl fmt::Display for StorageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} {:<9} lanes: {}, size: {:>2}, alignment: {:>2}, {}",
            self.element,
            self.length,
            if self.aligned { "aligned" } else { "unaligned" },
            self.lanes,
            self.size,
            self.alignment,
            if self.is_register { "register" } else { "array" }
        )
    }
}

macro_rules! layouts {
    ($($t:ty),*) => {
        vec![
            $(
                StorageLayout::of::<$t, 2, Aligned>(),
                StorageLayout::of::<$t, 3, Aligned>(),
                StorageLayout::of::<$t, 4, Aligned>(),
                StorageLayout::of::<$t, 2, Unaligned>(),
                StorageLayout::of::<$t, 3, Unaligned>(),
                StorageLayout::of::<$t, 4, Unaligned>(),
            )*
        ]
    };
}

/// Returns the layout of every supported element type, length and alignment.
pub fn storage_layouts() -> Vec<StorageLayout> {
    layouts!(f32, f64, i32, u32, i64)
}
