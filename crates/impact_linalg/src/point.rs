//! Points.

use crate::{
    num::Real,
    storage::{Aligned, SelectStorage, Unaligned},
    vector::TVector,
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A position in `N`-dimensional space.
///
/// Points have the storage of a [`TVector`] but a separate type, so a point
/// and a vector are never mixed up by accident. A vector can be added to a
/// point, and the difference of two points is a vector, but two points can
/// not be added.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TPoint<T: Real, const N: usize, A: SelectStorage<T, N> = Aligned> {
    coords: TVector<T, N, A>,
}

pub type TPoint2<T, A = Aligned> = TPoint<T, 2, A>;
pub type TPoint3<T, A = Aligned> = TPoint<T, 3, A>;
pub type TPoint4<T, A = Aligned> = TPoint<T, 4, A>;

pub type Point2 = TPoint2<f32>;
pub type Point3 = TPoint3<f32>;
pub type Point4 = TPoint4<f32>;

pub type Point2U = TPoint2<f32, Unaligned>;
pub type Point3U = TPoint3<f32, Unaligned>;
pub type Point4U = TPoint4<f32, Unaligned>;

pub type DPoint2 = TPoint2<f64>;
pub type DPoint3 = TPoint3<f64>;
pub type DPoint4 = TPoint4<f64>;

impl<T: Real, const N: usize, A: SelectStorage<T, N>> TPoint<T, N, A> {
    #[inline]
    pub fn origin() -> Self {
        Self::from_vector(TVector::zeros())
    }

    /// Creates the point at the given displacement from the origin.
    #[inline]
    pub fn from_vector(coords: TVector<T, N, A>) -> Self {
        Self { coords }
    }

    #[inline]
    pub fn from_array(coords: [T; N]) -> Self {
        Self::from_vector(TVector::from_array(coords))
    }

    /// Returns the displacement of the point from the origin.
    #[inline]
    pub fn as_vector(&self) -> &TVector<T, N, A> {
        &self.coords
    }

    #[inline]
    pub fn as_vector_mut(&mut self) -> &mut TVector<T, N, A> {
        &mut self.coords
    }

    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.coords.to_array()
    }

    /// Returns the point halfway between the two given points.
    #[inline]
    pub fn center_of(point_a: &Self, point_b: &Self) -> Self {
        Self::from_vector((point_a.coords + point_b.coords) * T::ONE_HALF)
    }

    /// Returns the point whose coordinates are the smaller of the
    /// corresponding coordinates of `self` and `other`.
    #[inline]
    pub fn min_with(&self, other: &Self) -> Self {
        Self::from_vector(self.coords.component_min(&other.coords))
    }

    /// Returns the point whose coordinates are the larger of the
    /// corresponding coordinates of `self` and `other`.
    #[inline]
    pub fn max_with(&self, other: &Self) -> Self {
        Self::from_vector(self.coords.component_max(&other.coords))
    }

    #[inline]
    pub fn distance_between(point_a: &Self, point_b: &Self) -> T {
        (point_a - point_b).magnitude()
    }

    #[inline]
    pub fn squared_distance_between(point_a: &Self, point_b: &Self) -> T {
        (point_a - point_b).sqr_magnitude()
    }

    /// Whether every coordinate is within `threshold` of the corresponding
    /// coordinate of `other`.
    #[inline]
    pub fn equals(&self, other: &Self, threshold: T) -> bool {
        self.coords.equals(&other.coords, threshold)
    }

    /// Converts the point to another alignment.
    #[inline]
    pub fn realigned<B: SelectStorage<T, N>>(&self) -> TPoint<T, N, B> {
        TPoint::from_vector(self.coords.realigned())
    }
}

impl<T: Real, A: SelectStorage<T, 2>> TPoint<T, 2, A> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_vector(TVector::from_array([x, y]))
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coords.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coords.y()
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        self.coords.x_mut()
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        self.coords.y_mut()
    }
}

impl<T: Real, A: SelectStorage<T, 3>> TPoint<T, 3, A> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_vector(TVector::from_array([x, y, z]))
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coords.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coords.y()
    }

    #[inline]
    pub fn z(&self) -> T {
        self.coords.z()
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        self.coords.x_mut()
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        self.coords.y_mut()
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        self.coords.z_mut()
    }

    /// Returns the point in the xy-plane with the same x- and y-coordinates.
    #[inline]
    pub fn xy(&self) -> TPoint<T, 2, A>
    where
        A: SelectStorage<T, 2>,
    {
        TPoint::from_vector(self.coords.xy())
    }
}

impl<T: Real, A: SelectStorage<T, 4>> TPoint<T, 4, A> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_vector(TVector::from_array([x, y, z, w]))
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coords.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coords.y()
    }

    #[inline]
    pub fn z(&self) -> T {
        self.coords.z()
    }

    #[inline]
    pub fn w(&self) -> T {
        self.coords.w()
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> Default for TPoint<T, N, A> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> PartialEq for TPoint<T, N, A> {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> fmt::Debug for TPoint<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TPoint{N}")?;
        let mut tuple = f.debug_tuple("");
        for coord in self.coords.as_slice() {
            tuple.field(coord);
        }
        tuple.finish()
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> fmt::Display for TPoint<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coords, f)
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> From<TVector<T, N, A>> for TPoint<T, N, A> {
    #[inline]
    fn from(vector: TVector<T, N, A>) -> Self {
        Self::from_vector(vector)
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> From<TPoint<T, N, A>> for TVector<T, N, A> {
    #[inline]
    fn from(point: TPoint<T, N, A>) -> Self {
        point.coords
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> From<[T; N]> for TPoint<T, N, A> {
    #[inline]
    fn from(coords: [T; N]) -> Self {
        Self::from_array(coords)
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> From<TPoint<T, N, A>> for [T; N] {
    #[inline]
    fn from(point: TPoint<T, N, A>) -> Self {
        point.to_array()
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> Index<usize> for TPoint<T, N, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> IndexMut<usize> for TPoint<T, N, A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coords[index]
    }
}

unsafe impl<T: Real, const N: usize, A: SelectStorage<T, N>> Zeroable for TPoint<T, N, A> where
    TVector<T, N, A>: Zeroable
{
}

unsafe impl<T: Real, const N: usize, A: SelectStorage<T, N>> Pod for TPoint<T, N, A> where
    TVector<T, N, A>: Pod
{
}

impl_binop!(
    Add, add, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>, TVector<T, N, A>, TPoint<T, N, A>,
    |a, b| { TPoint::from_vector(a.coords + b) }
);

impl_binop!(
    Sub, sub, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>, TVector<T, N, A>, TPoint<T, N, A>,
    |a, b| { TPoint::from_vector(a.coords - b) }
);

impl_binop!(
    Sub, sub, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>, TPoint<T, N, A>, TVector<T, N, A>,
    |a, b| { a.coords - b.coords }
);

impl_binop!(
    Mul, mul, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>, T, TPoint<T, N, A>,
    |a, b| { TPoint::from_vector(a.coords * *b) }
);

impl_binop!(
    Div, div, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>, T, TPoint<T, N, A>,
    |a, b| { TPoint::from_vector(a.coords / *b) }
);

impl_binop_assign!(
    AddAssign, add_assign, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>, TVector<T, N, A>,
    |a, b| { a.coords += b; }
);

impl_binop_assign!(
    SubAssign, sub_assign, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>, TVector<T, N, A>,
    |a, b| { a.coords -= b; }
);

impl_abs_diff_eq!(
    [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>,
    T,
    |a, b, epsilon| { a.coords.abs_diff_eq(&b.coords, epsilon) }
);

impl_relative_eq!(
    [T: Real, const N: usize, A: SelectStorage<T, N>],
    TPoint<T, N, A>,
    T,
    |a, b, epsilon, max_relative| { a.coords.relative_eq(&b.coords, epsilon, max_relative) }
);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{
        dispatch::Lanes,
        vector::{DVector2U, Vector2, Vector3},
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn origin_is_default_point() {
        assert_eq!(Point3::origin(), Point3::default());
        assert_eq!(Point3::origin().as_vector(), &Vector3::zeros());
    }

    #[test]
    fn adding_and_subtracting_vectors_moves_points() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(p + v, Point3::new(1.5, 1.0, 5.0));
        assert_eq!(&p - &v, Point3::new(0.5, 3.0, 1.0));
        assert_eq!(p + v - v, p);

        let mut q = p;
        q += v;
        q -= Vector3::new(1.5, 1.0, 5.0);
        assert_eq!(q, Point3::origin());
    }

    #[test]
    fn coordinate_constructors_work_for_both_alignments() {
        let unaligned = TPoint2::<f64, Unaligned>::new(3.0, -4.0);
        assert_eq!(*unaligned.as_vector(), DVector2U::new(3.0, -4.0));
        assert_eq!(unaligned[1], DPoint2::new(3.0, -4.0)[1]);
        assert_eq!(DPoint3::new(1.0, 2.0, 3.0)[2], 3.0);
        assert_eq!(Point4U::new(1.0, 2.0, 3.0, 4.0).as_vector().w(), 4.0);
    }

    #[test]
    fn difference_of_points_is_vector() {
        let a = Point2::new(3.0, 4.0);
        let b = Point2::new(1.0, 1.0);
        let displacement: Vector2 = a - b;
        assert_eq!(displacement, Vector2::new(2.0, 3.0));
        assert_eq!(b + displacement, a);
    }

    #[test]
    fn distances_work() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        assert_eq!(Point3::squared_distance_between(&a, &b), 25.0);
        assert_abs_diff_eq!(Point3::distance_between(&a, &b), 5.0);
        assert_eq!(Point3::distance_between(&a, &a), 0.0);
    }

    #[test]
    fn center_min_and_max_work() {
        let a = Point3::new(0.0, 4.0, -2.0);
        let b = Point3::new(2.0, 0.0, 2.0);
        assert_eq!(Point3::center_of(&a, &b), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(a.min_with(&b), Point3::new(0.0, 0.0, -2.0));
        assert_eq!(a.max_with(&b), Point3::new(2.0, 4.0, 2.0));
    }

    #[test]
    fn padding_lane_stays_zero() {
        let p = Point3::new(1.0, 2.0, 3.0) + Vector3::same(1.0);
        assert_eq!(p.as_vector().components().lane(3), 0.0);
        assert_eq!(p.as_vector().magnitude(), 29.0_f32.sqrt());
    }

    #[test]
    fn accessors_and_indexing_work() {
        let mut p = Point3::new(1.0, 2.0, 3.0);
        *p.x_mut() = 7.0;
        p[2] = 9.0;
        assert_eq!(p.to_array(), [7.0, 2.0, 9.0]);
        assert_eq!(p.xy(), Point2::new(7.0, 2.0));
        assert_eq!(Point3::from([1.0, 0.0, 0.0]), Point3::from(Vector3::unit_x()));
        assert_eq!(
            Point3U::new(1.0, 2.0, 3.0).realigned::<Aligned>(),
            Point3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn scaling_points_works() {
        let p = DPoint2::new(2.0, -4.0);
        assert_eq!(p * 0.5, DPoint2::new(1.0, -2.0));
        assert_eq!(p / 2.0, DPoint2::new(1.0, -2.0));
    }

    #[test]
    fn formatting_works() {
        let p = Point3::new(1.0, 2.5, -3.0);
        assert_eq!(p.to_string(), "(1, 2.5, -3)");
        assert_eq!(format!("{p:?}"), "TPoint3(1.0, 2.5, -3.0)");
    }
}
