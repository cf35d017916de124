//! Free-function forms of the vector and matrix operations.
//!
//! Every function here delegates to a method. Functions whose name ends in
//! `_v` overwrite their first argument with the result and return a
//! reference to it, so calls can be chained.

use crate::{
    angle::Radians,
    dispatch::CrossPolicy,
    matrix::{SquareMatrix, TMatrix},
    num::{Real, Scalar},
    storage::SelectStorage,
    tuple::ScalarTuple,
    vector::{TVector, TVector3},
};
use std::ops::Neg;

/// Computes the dot product of two vectors of either family.
#[inline]
pub fn dot<V: ScalarTuple>(a: &V, b: &V) -> V::Element {
    a.dot(b)
}

#[inline]
pub fn cross<T: Real, A>(a: &TVector3<T, A>, b: &TVector3<T, A>) -> TVector3<T, A>
where
    A: SelectStorage<T, 3>,
    A::Repr: CrossPolicy<T>,
{
    a.cross(b)
}

#[inline]
pub fn sqr_magnitude<V: ScalarTuple>(vector: &V) -> V::Element {
    vector.dot(vector)
}

#[inline]
pub fn magnitude<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &TVector<T, N, A>,
) -> T {
    vector.magnitude()
}

/// Returns the normalized vector, or the zero vector for a degenerate input.
#[inline]
pub fn normalize<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &TVector<T, N, A>,
) -> TVector<T, N, A> {
    vector.normalized()
}

#[inline]
pub fn normalize_v<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &mut TVector<T, N, A>,
) -> &mut TVector<T, N, A> {
    vector.normalize()
}

/// Returns the vector divided by its magnitude. The result is not finite for
/// the zero vector.
#[inline]
pub fn normalize_unchecked<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &TVector<T, N, A>,
) -> TVector<T, N, A> {
    vector.normalized_unchecked()
}

#[inline]
pub fn reflect<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &TVector<T, N, A>,
    normal: &TVector<T, N, A>,
) -> TVector<T, N, A> {
    vector.reflected(normal)
}

#[inline]
pub fn reflect_v<'a, T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &'a mut TVector<T, N, A>,
    normal: &TVector<T, N, A>,
) -> &'a mut TVector<T, N, A> {
    vector.reflect(normal)
}

#[inline]
pub fn project<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &TVector<T, N, A>,
    target: &TVector<T, N, A>,
) -> TVector<T, N, A> {
    vector.projected_onto(target)
}

#[inline]
pub fn project_v<'a, T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &'a mut TVector<T, N, A>,
    target: &TVector<T, N, A>,
) -> &'a mut TVector<T, N, A> {
    vector.project_onto(target)
}

#[inline]
pub fn reject<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &TVector<T, N, A>,
    target: &TVector<T, N, A>,
) -> TVector<T, N, A> {
    vector.rejected_from(target)
}

#[inline]
pub fn reject_v<'a, T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &'a mut TVector<T, N, A>,
    target: &TVector<T, N, A>,
) -> &'a mut TVector<T, N, A> {
    vector.reject_from(target)
}

/// Computes the component-wise minimum.
#[inline]
pub fn min<V: ScalarTuple>(a: &V, b: &V) -> V {
    a.component_min(b)
}

/// Computes the component-wise maximum.
#[inline]
pub fn max<V: ScalarTuple>(a: &V, b: &V) -> V {
    a.component_max(b)
}

#[inline]
pub fn min_v<'a, V: ScalarTuple>(a: &'a mut V, b: &V) -> &'a mut V {
    *a = a.component_min(b);
    a
}

#[inline]
pub fn max_v<'a, V: ScalarTuple>(a: &'a mut V, b: &V) -> &'a mut V {
    *a = a.component_max(b);
    a
}

/// Sets every component of the vector to `value`.
#[inline]
pub fn set<V: ScalarTuple>(vector: &mut V, value: V::Element) -> &mut V {
    vector.as_mut_slice().fill(value);
    vector
}

#[inline]
pub fn negate<V: Copy + Neg<Output = V>>(vector: &V) -> V {
    -*vector
}

#[inline]
pub fn negate_v<V: Copy + Neg<Output = V>>(vector: &mut V) -> &mut V {
    *vector = -*vector;
    vector
}

/// Maps each component to -1, 0 or 1 according to its sign.
#[inline]
pub fn signum<V: ScalarTuple>(vector: &V) -> V {
    let mut result = *vector;
    signum_v(&mut result);
    result
}

#[inline]
pub fn signum_v<V: ScalarTuple>(vector: &mut V) -> &mut V {
    for component in vector.as_mut_slice() {
        *component = component.lane_signum();
    }
    vector
}

/// Replaces each component with its absolute value. Integer minimums wrap
/// to themselves.
#[inline]
pub fn abs<V: ScalarTuple>(vector: &V) -> V {
    let mut result = *vector;
    abs_v(&mut result);
    result
}

#[inline]
pub fn abs_v<V: ScalarTuple>(vector: &mut V) -> &mut V {
    for component in vector.as_mut_slice() {
        *component = component.lane_abs();
    }
    vector
}

#[inline]
pub fn angle<T: Real, const N: usize, A: SelectStorage<T, N>>(
    a: &TVector<T, N, A>,
    b: &TVector<T, N, A>,
) -> Radians<T> {
    a.angle(b)
}

#[inline]
pub fn determinant<M: SquareMatrix>(matrix: &M) -> M::Element {
    matrix.determinant()
}

/// Writes the inverse of `matrix` to `out` and returns `true`, or returns
/// `false` without touching `out` if the matrix is singular.
#[inline]
pub fn inverse<T: Real, const N: usize, A: SelectStorage<T, N>>(
    matrix: &TMatrix<T, N, A>,
    out: &mut TMatrix<T, N, A>,
) -> bool
where
    TMatrix<T, N, A>: SquareMatrix<Element = T>,
{
    matrix.inverse_into(out)
}

/// Inverts `matrix` in place and returns `true`, or returns `false` and
/// leaves it unchanged if it is singular. Unlike the other `_v` functions,
/// this reports success rather than returning the matrix.
#[inline]
pub fn inverse_v<T: Real, const N: usize, A: SelectStorage<T, N>>(
    matrix: &mut TMatrix<T, N, A>,
) -> bool
where
    TMatrix<T, N, A>: SquareMatrix<Element = T>,
{
    matrix.invert()
}

#[inline]
pub fn transpose<T: Real, const N: usize, A: SelectStorage<T, N>>(
    matrix: &TMatrix<T, N, A>,
) -> TMatrix<T, N, A> {
    matrix.transposed()
}

#[inline]
pub fn transpose_v<T: Real, const N: usize, A: SelectStorage<T, N>>(
    matrix: &mut TMatrix<T, N, A>,
) -> &mut TMatrix<T, N, A> {
    matrix.transpose()
}

/// Whether every component is within `threshold` of the corresponding
/// component of the other vector.
#[inline]
pub fn equals<V: ScalarTuple>(a: &V, b: &V, threshold: V::Element) -> bool {
    a.equals(b, threshold)
}

#[inline]
pub fn is_normalized<T: Real, const N: usize, A: SelectStorage<T, N>>(
    vector: &TVector<T, N, A>,
    threshold: T,
) -> bool {
    vector.is_normalized(threshold)
}

#[inline]
pub fn is_perpendicular<T: Real, const N: usize, A: SelectStorage<T, N>>(
    a: &TVector<T, N, A>,
    b: &TVector<T, N, A>,
    threshold: T,
) -> bool {
    a.is_perpendicular_to(b, threshold)
}

#[inline]
pub fn is_parallel<T: Real, const N: usize, A: SelectStorage<T, N>>(
    a: &TVector<T, N, A>,
    b: &TVector<T, N, A>,
    threshold: T,
) -> bool {
    a.is_parallel_to(b, threshold)
}

#[inline]
pub fn is_coincident<T: Real, const N: usize, A: SelectStorage<T, N>>(
    a: &TVector<T, N, A>,
    b: &TVector<T, N, A>,
    threshold: T,
) -> bool {
    a.is_coincident_with(b, threshold)
}

#[inline]
pub fn is_coplanar<T: Real, A>(
    a: &TVector3<T, A>,
    b: &TVector3<T, A>,
    c: &TVector3<T, A>,
    threshold: T,
) -> bool
where
    A: SelectStorage<T, 3>,
    A::Repr: CrossPolicy<T>,
{
    a.is_coplanar(b, c, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        int_vector::IntVector3,
        matrix::{Matrix2, Matrix3, Matrix4},
        vector::{Vector3, Vector3U, Vector4},
    };
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn dot_product_of_one_two_three_and_four_five_six_is_32() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(dot(&a, &b), 32.0);
        assert_eq!(dot(&a.unaligned(), &b.unaligned()), 32.0);
        assert_eq!(dot(&IntVector3::new(1, 2, 3), &IntVector3::new(4, 5, 6)), 32);
    }

    #[test]
    fn cross_perpendicular_and_angle_agree() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(cross(&a, &b), Vector3::new(0.0, 0.0, 1.0));
        assert!(is_perpendicular(&a, &b, EPSILON));
        assert_abs_diff_eq!(angle(&a, &b).value(), FRAC_PI_2, epsilon = EPSILON);
        assert!(is_coplanar(&a, &b, &(a + b), EPSILON));
        assert!(!is_coplanar(&a, &b, &cross(&a, &b), EPSILON));
    }

    #[test]
    fn normalize_variants_work() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        assert_abs_diff_eq!(normalize(&v), Vector3::new(0.0, 0.6, 0.8), epsilon = EPSILON);
        assert_eq!(normalize(&Vector3::zeros()), Vector3::zeros());
        assert!(!normalize_unchecked(&Vector3U::zeros()).x().is_finite());

        assert!(is_normalized(normalize_v(&mut v), EPSILON));
        assert_abs_diff_eq!(magnitude(&v), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(sqr_magnitude(&v), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn chained_in_place_functions_modify_first_argument() {
        let mut v = Vector3::new(1.0, 1.0, 0.0);
        reject_v(project_v(&mut v, &Vector3::unit_x()), &Vector3::unit_x());
        assert_eq!(v, Vector3::zeros());

        let mut w = Vector3::new(1.0, -1.0, 0.0);
        reflect_v(&mut w, &Vector3::unit_y());
        assert_eq!(w, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(reflect(&w, &Vector3::unit_y()), Vector3::new(1.0, -1.0, 0.0));
        assert_eq!(project(&w, &Vector3::unit_y()), Vector3::unit_y());
        assert_eq!(reject(&w, &Vector3::unit_y()), Vector3::unit_x());
    }

    #[test]
    fn min_max_set_and_negate_work() {
        let mut a = IntVector3::new(1, 5, -3);
        let b = IntVector3::new(2, 4, -3);
        assert_eq!(min(&a, &b), IntVector3::new(1, 4, -3));
        assert_eq!(max(&a, &b), IntVector3::new(2, 5, -3));
        assert_eq!(*max_v(min_v(&mut a, &b), &IntVector3::zeros()), IntVector3::new(1, 4, 0));

        assert_eq!(*set(&mut a, 7), IntVector3::same(7));
        assert_eq!(negate(&a), IntVector3::same(-7));
        assert_eq!(negate(&negate(&a)), a);
        assert_eq!(*negate_v(&mut a), IntVector3::same(-7));
        assert_eq!(signum(&Vector3::new(-2.0, 0.0, 0.5)), Vector3::new(-1.0, 0.0, 1.0));
    }

    #[test]
    fn abs_and_signum_in_place_forms_return_their_argument() {
        let mut v = Vector3U::new(-2.5, 0.0, 4.0);
        assert_eq!(abs(&v), Vector3U::new(2.5, 0.0, 4.0));
        assert_eq!(*signum_v(&mut v), Vector3U::new(-1.0, 0.0, 1.0));
        assert_eq!(*abs_v(&mut v), Vector3U::new(1.0, 0.0, 1.0));

        let mut i = IntVector3::new(-7, 2, i32::MIN);
        assert_eq!(*abs_v(&mut i), IntVector3::new(7, 2, i32::MIN));
        assert_eq!(*signum_v(&mut i), IntVector3::new(1, 1, -1));
    }

    #[test]
    fn matrix_functions_work() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(determinant(&m), -2.0);
        assert_eq!(transpose(&transpose(&m)), m);

        let mut t = m;
        assert_eq!(*transpose_v(&mut t), Matrix2::new(1.0, 3.0, 2.0, 4.0));

        let mut out = Matrix3::identity();
        assert!(!inverse(&Matrix3::zeros(), &mut out));
        assert_eq!(out, Matrix3::identity());

        let mut d = Matrix4::from_diagonal(&Vector4::new(1.0, 2.0, 4.0, 8.0));
        assert!(inverse_v(&mut d));
        assert_abs_diff_eq!(
            d.diagonal(),
            Vector4::new(1.0, 0.5, 0.25, 0.125),
            epsilon = EPSILON
        );
    }

    #[test]
    fn equality_and_direction_predicates_work() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!(equals(&a, &(a + Vector3::same(1e-6)), EPSILON));
        assert!(is_parallel(&a, &(a * -2.0), EPSILON));
        assert!(is_coincident(&a, &(a * 2.0), EPSILON));
        assert!(!is_coincident(&a, &(a * -2.0), EPSILON));
    }
}
