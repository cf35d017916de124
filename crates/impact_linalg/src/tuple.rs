//! The interface shared by real and integer vectors.

use crate::num::Scalar;
use std::fmt;

/// A fixed-size tuple of scalars.
///
/// Implemented by [`TVector`](crate::vector::TVector) and
/// [`TIntVector`](crate::int_vector::TIntVector), so that functions
/// operating only on components can accept either family.
pub trait ScalarTuple: Copy + PartialEq + fmt::Debug {
    type Element: Scalar;

    /// The number of components.
    const LEN: usize;

    fn as_slice(&self) -> &[Self::Element];

    fn as_mut_slice(&mut self) -> &mut [Self::Element];

    fn dot(&self, other: &Self) -> Self::Element;

    fn component_min(&self, other: &Self) -> Self;

    fn component_max(&self, other: &Self) -> Self;

    /// Whether every component is within `threshold` of the corresponding
    /// component of `other`.
    fn equals(&self, other: &Self, threshold: Self::Element) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int_vector::IntVector3, vector::Vector2U};

    fn sum_of_components<V: ScalarTuple>(v: &V) -> V::Element {
        v.as_slice()
            .iter()
            .fold(<V::Element as Scalar>::ZERO, |sum, &c| sum.lane_add(c))
    }

    #[test]
    fn both_vector_families_implement_tuple_interface() {
        assert_eq!(sum_of_components(&IntVector3::new(1, 2, 3)), 6);
        assert_eq!(sum_of_components(&Vector2U::new(0.5, 1.5)), 2.0);
        assert_eq!(<IntVector3 as ScalarTuple>::LEN, 3);
    }

    #[test]
    fn mutable_view_writes_components() {
        let mut v = IntVector3::zeros();
        ScalarTuple::as_mut_slice(&mut v)[1] = 7;
        assert_eq!(v.y(), 7);
    }
}
