//! Square matrices.

use crate::{
    dispatch::{CrossPolicy, DeterminantPolicy, InversePolicy},
    num::Real,
    storage::{Aligned, SelectStorage, Unaligned},
    vector::TVector,
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    array, fmt,
    ops::{Index, IndexMut},
};

/// An `N`x`N` matrix of real elements.
///
/// The matrix is stored as `N` column vectors, so its memory layout is
/// column-major and each column has the storage of a
/// [`TVector<T, N, A>`](TVector). Elements are always addressed as
/// `(row, col)`.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TMatrix<T: Real, const N: usize, A: SelectStorage<T, N> = Aligned> {
    columns: [TVector<T, N, A>; N],
}

pub type TMatrix2<T, A = Aligned> = TMatrix<T, 2, A>;
pub type TMatrix3<T, A = Aligned> = TMatrix<T, 3, A>;
pub type TMatrix4<T, A = Aligned> = TMatrix<T, 4, A>;

pub type Matrix2 = TMatrix2<f32>;
pub type Matrix3 = TMatrix3<f32>;
pub type Matrix4 = TMatrix4<f32>;

pub type Matrix2U = TMatrix2<f32, Unaligned>;
pub type Matrix3U = TMatrix3<f32, Unaligned>;
pub type Matrix4U = TMatrix4<f32, Unaligned>;

pub type DMatrix2 = TMatrix2<f64>;
pub type DMatrix3 = TMatrix3<f64>;
pub type DMatrix4 = TMatrix4<f64>;

pub type DMatrix2U = TMatrix2<f64, Unaligned>;
pub type DMatrix3U = TMatrix3<f64, Unaligned>;
pub type DMatrix4U = TMatrix4<f64, Unaligned>;

/// Matrix operations whose implementation depends on the dimension.
pub trait SquareMatrix: Sized {
    type Element: Real;

    fn determinant(&self) -> Self::Element;

    /// Computes the inverse, or returns `None` if the magnitude of the
    /// determinant does not exceed [`Real::SMALL_INACCURACY`].
    ///
    /// The threshold is absolute and does not scale with the matrix, so a
    /// well-conditioned but small matrix counts as singular. In `f32`,
    /// `0.05` times the 4x4 identity has determinant `6.25e-6` and is not
    /// inverted. Use `f64` for matrices with small entries.
    fn inverse(&self) -> Option<Self>;
}

#[inline]
fn is_invertible<T: Real>(determinant: T) -> bool {
    determinant.abs() > T::SMALL_INACCURACY
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> TMatrix<T, N, A> {
    /// Creates a matrix with the given columns.
    #[inline]
    pub fn from_columns(columns: [TVector<T, N, A>; N]) -> Self {
        Self { columns }
    }

    /// Creates a matrix whose element at `(row, col)` is `f(row, col)`.
    #[inline]
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self::from_columns(array::from_fn(|col| TVector::from_fn(|row| f(row, col))))
    }

    /// Creates a matrix from `N * N` elements listed row by row.
    ///
    /// # Panics
    /// If the slice does not have `N * N` elements.
    pub fn from_row_major_slice(elements: &[T]) -> Self {
        assert_eq!(
            elements.len(),
            N * N,
            "expected {} matrix elements, got {}",
            N * N,
            elements.len()
        );
        Self::from_fn(|row, col| elements[row * N + col])
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::from_columns([TVector::zeros(); N])
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(&TVector::same(T::ONE))
    }

    /// Creates a diagonal matrix with the given diagonal elements.
    #[inline]
    pub fn from_diagonal(diagonal: &TVector<T, N, A>) -> Self {
        Self::from_fn(|row, col| if row == col { diagonal[row] } else { T::ZERO })
    }

    #[inline]
    pub fn columns(&self) -> &[TVector<T, N, A>; N] {
        &self.columns
    }

    /// # Panics
    /// If `col` is not smaller than `N`.
    #[inline]
    pub fn column(&self, col: usize) -> &TVector<T, N, A> {
        &self.columns[col]
    }

    #[inline]
    pub fn column_mut(&mut self, col: usize) -> &mut TVector<T, N, A> {
        &mut self.columns[col]
    }

    #[inline]
    pub fn set_column(&mut self, col: usize, column: TVector<T, N, A>) {
        self.columns[col] = column;
    }

    /// Returns a copy of the given row.
    #[inline]
    pub fn row(&self, row: usize) -> TVector<T, N, A> {
        TVector::from_fn(|col| self.element(row, col))
    }

    /// # Panics
    /// If `row` or `col` is not smaller than `N`.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> T {
        self.columns[col][row]
    }

    #[inline]
    pub fn element_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.columns[col][row]
    }

    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        self.columns[col][row] = value;
    }

    #[inline]
    pub fn diagonal(&self) -> TVector<T, N, A> {
        TVector::from_fn(|i| self.element(i, i))
    }

    /// Computes the sum of the diagonal elements.
    #[inline]
    pub fn trace(&self) -> T {
        self.diagonal().component_sum()
    }

    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_fn(|row, col| self.element(col, row))
    }

    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Whether every element is within `threshold` of the corresponding
    /// element of `other`.
    #[inline]
    pub fn equals(&self, other: &Self, threshold: T) -> bool {
        self.columns
            .iter()
            .zip(&other.columns)
            .all(|(a, b)| a.equals(b, threshold))
    }

    /// Converts the matrix to another alignment.
    #[inline]
    pub fn realigned<B: SelectStorage<T, N>>(&self) -> TMatrix<T, N, B> {
        TMatrix::from_columns(self.columns.map(|column| column.realigned()))
    }

    #[inline]
    pub fn aligned(&self) -> TMatrix<T, N, Aligned>
    where
        Aligned: SelectStorage<T, N>,
    {
        self.realigned()
    }

    #[inline]
    pub fn unaligned(&self) -> TMatrix<T, N, Unaligned>
    where
        Unaligned: SelectStorage<T, N>,
    {
        self.realigned()
    }

    /// Writes the inverse of the matrix to `out` and returns `true`, or
    /// returns `false` without touching `out` if the matrix is singular in
    /// the sense of [`SquareMatrix::inverse`].
    #[inline]
    pub fn inverse_into(&self, out: &mut Self) -> bool
    where
        Self: SquareMatrix<Element = T>,
    {
        match SquareMatrix::inverse(self) {
            Some(inverse) => {
                *out = inverse;
                true
            }
            None => false,
        }
    }

    /// Inverts the matrix in place and returns `true`, or returns `false`
    /// and leaves the matrix unchanged if it is singular.
    #[inline]
    pub fn invert(&mut self) -> bool
    where
        Self: SquareMatrix<Element = T>,
    {
        let matrix = *self;
        matrix.inverse_into(self)
    }
}

impl<T: Real, A: SelectStorage<T, 2>> TMatrix<T, 2, A> {
    /// Creates a matrix with the given elements, listed row by row.
    #[inline]
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self::from_columns([TVector::from_array([m00, m10]), TVector::from_array([m01, m11])])
    }

    #[inline]
    pub fn determinant(&self) -> T {
        self.element(0, 0) * self.element(1, 1) - self.element(0, 1) * self.element(1, 0)
    }

    pub fn inverse(&self) -> Option<Self> {
        let determinant = self.determinant();
        if !is_invertible(determinant) {
            return None;
        }
        let adjugate = Self::new(
            self.element(1, 1),
            -self.element(0, 1),
            -self.element(1, 0),
            self.element(0, 0),
        );
        Some(adjugate * (T::ONE / determinant))
    }
}

impl<T: Real, A> TMatrix<T, 3, A>
where
    A: SelectStorage<T, 3>,
    A::Repr: CrossPolicy<T>,
{
    /// Creates a matrix with the given elements, listed row by row.
    #[rustfmt::skip]
    #[inline]
    pub fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self::from_columns([
            TVector::from_array([m00, m10, m20]),
            TVector::from_array([m01, m11, m21]),
            TVector::from_array([m02, m12, m22]),
        ])
    }

    /// Computes the determinant as the scalar triple product of the columns.
    #[inline]
    pub fn determinant(&self) -> T {
        let [c0, c1, c2] = &self.columns;
        c0.dot(&c1.cross(c2))
    }

    pub fn inverse(&self) -> Option<Self> {
        let [c0, c1, c2] = &self.columns;

        // Row `i` of the inverse is the cross product of the other two
        // columns, divided by the determinant.
        let row_0 = c1.cross(c2);
        let determinant = c0.dot(&row_0);
        if !is_invertible(determinant) {
            return None;
        }
        let row_1 = c2.cross(c0);
        let row_2 = c0.cross(c1);

        Some(Self::from_columns([row_0, row_1, row_2]).transposed() * (T::ONE / determinant))
    }
}

impl<T: Real, A> TMatrix<T, 4, A>
where
    A: SelectStorage<T, 4>,
    A::Repr: DeterminantPolicy<T> + InversePolicy<T>,
{
    /// Creates a matrix with the given elements, listed row by row.
    #[rustfmt::skip]
    #[inline]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self::from_columns([
            TVector::from_array([m00, m10, m20, m30]),
            TVector::from_array([m01, m11, m21, m31]),
            TVector::from_array([m02, m12, m22, m32]),
            TVector::from_array([m03, m13, m23, m33]),
        ])
    }

    #[inline]
    fn column_storage(&self) -> [A::Repr; 4] {
        array::from_fn(|col| *self.columns[col].components())
    }

    #[inline]
    pub fn determinant(&self) -> T {
        <A::Repr as DeterminantPolicy<T>>::map(&self.column_storage())
    }

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        <A::Repr as InversePolicy<T>>::map(&self.column_storage(), T::SMALL_INACCURACY)
            .map(|columns| Self::from_columns(columns.map(TVector::from_components)))
    }
}

impl<T: Real, A: SelectStorage<T, 2>> SquareMatrix for TMatrix<T, 2, A> {
    type Element = T;

    fn determinant(&self) -> T {
        Self::determinant(self)
    }

    fn inverse(&self) -> Option<Self> {
        Self::inverse(self)
    }
}

impl<T: Real, A> SquareMatrix for TMatrix<T, 3, A>
where
    A: SelectStorage<T, 3>,
    A::Repr: CrossPolicy<T>,
{
    type Element = T;

    fn determinant(&self) -> T {
        Self::determinant(self)
    }

    fn inverse(&self) -> Option<Self> {
        Self::inverse(self)
    }
}

impl<T: Real, A> SquareMatrix for TMatrix<T, 4, A>
where
    A: SelectStorage<T, 4>,
    A::Repr: DeterminantPolicy<T> + InversePolicy<T>,
{
    type Element = T;

    fn determinant(&self) -> T {
        Self::determinant(self)
    }

    fn inverse(&self) -> Option<Self> {
        Self::inverse(self)
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> Default for TMatrix<T, N, A> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> PartialEq for TMatrix<T, N, A> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> fmt::Debug for TMatrix<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TMatrix{N}")?;
        let mut rows = f.debug_list();
        for row in 0..N {
            rows.entry(&self.row(row).to_array());
        }
        rows.finish()
    }
}

/// Formats the matrix row by row, as `([m00, m01], [m10, m11])`.
impl<T: Real, const N: usize, A: SelectStorage<T, N>> fmt::Display for TMatrix<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for row in 0..N {
            if row > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for col in 0..N {
                if col > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self.element(row, col), f)?;
            }
            f.write_str("]")?;
        }
        f.write_str(")")
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> Index<(usize, usize)> for TMatrix<T, N, A> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.columns[col][row]
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> IndexMut<(usize, usize)>
    for TMatrix<T, N, A>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.columns[col][row]
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> Index<usize> for TMatrix<T, N, A> {
    type Output = TVector<T, N, A>;

    #[inline]
    fn index(&self, col: usize) -> &TVector<T, N, A> {
        &self.columns[col]
    }
}

impl<T: Real, const N: usize, A: SelectStorage<T, N>> IndexMut<usize> for TMatrix<T, N, A> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut TVector<T, N, A> {
        &mut self.columns[col]
    }
}

unsafe impl<T: Real, const N: usize, A: SelectStorage<T, N>> Zeroable for TMatrix<T, N, A> where
    TVector<T, N, A>: Zeroable
{
}

unsafe impl<T: Real, const N: usize, A: SelectStorage<T, N>> Pod for TMatrix<T, N, A> where
    TVector<T, N, A>: Pod
{
}

impl_binop!(
    Add, add, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TMatrix<T, N, A>, TMatrix<T, N, A>,
    |a, b| { TMatrix::from_columns(array::from_fn(|col| a.columns[col] + b.columns[col])) }
);

impl_binop!(
    Sub, sub, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TMatrix<T, N, A>, TMatrix<T, N, A>,
    |a, b| { TMatrix::from_columns(array::from_fn(|col| a.columns[col] - b.columns[col])) }
);

impl_binop!(
    Mul, mul, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TVector<T, N, A>, TVector<T, N, A>,
    |a, b| {
        a.columns
            .iter()
            .zip(b.as_slice())
            .fold(TVector::zeros(), |sum, (column, &weight)| sum + column * weight)
    }
);

impl_binop!(
    Mul, mul, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TMatrix<T, N, A>, TMatrix<T, N, A>,
    |a, b| { TMatrix::from_columns(array::from_fn(|col| a * b.columns[col])) }
);

impl_binop!(
    Mul, mul, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, T, TMatrix<T, N, A>,
    |a, b| { TMatrix::from_columns(a.columns.map(|column| column * *b)) }
);

impl_binop!(
    Div, div, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, T, TMatrix<T, N, A>,
    |a, b| { TMatrix::from_columns(a.columns.map(|column| column / *b)) }
);

impl_unary_op!(
    Neg, neg, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TMatrix<T, N, A>,
    |a| { TMatrix::from_columns(a.columns.map(|column| -column)) }
);

impl_binop_assign!(
    AddAssign, add_assign, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TMatrix<T, N, A>,
    |a, b| {
        for (column, other) in a.columns.iter_mut().zip(&b.columns) {
            *column += other;
        }
    }
);

impl_binop_assign!(
    SubAssign, sub_assign, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TMatrix<T, N, A>,
    |a, b| {
        for (column, other) in a.columns.iter_mut().zip(&b.columns) {
            *column -= other;
        }
    }
);

impl_binop_assign!(
    MulAssign, mul_assign, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, TMatrix<T, N, A>,
    |a, b| { *a = &*a * b; }
);

impl_binop_assign!(
    MulAssign, mul_assign, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, T,
    |a, b| {
        for column in &mut a.columns {
            *column *= *b;
        }
    }
);

impl_binop_assign!(
    DivAssign, div_assign, [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>, T,
    |a, b| {
        for column in &mut a.columns {
            *column /= *b;
        }
    }
);

macro_rules! impl_scalar_left_mul_for_matrix {
    ($($t:ty),+) => {
        $(
            impl_binop!(
                Mul, mul, [const N: usize, A: SelectStorage<$t, N>],
                $t, TMatrix<$t, N, A>, TMatrix<$t, N, A>,
                |a, b| { b * *a }
            );
        )+
    };
}

impl_scalar_left_mul_for_matrix!(f32, f64);

impl_abs_diff_eq!(
    [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>,
    T,
    |a, b, epsilon| {
        a.columns
            .iter()
            .zip(&b.columns)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
);

impl_relative_eq!(
    [T: Real, const N: usize, A: SelectStorage<T, N>],
    TMatrix<T, N, A>,
    T,
    |a, b, epsilon, max_relative| {
        a.columns
            .iter()
            .zip(&b.columns)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::vector::{DVector3, DVector4U, Vector2, Vector3, Vector4};
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    #[rustfmt::skip]
    fn invertible_matrix4() -> Matrix4 {
        Matrix4::new(
            4.0, 7.0, 2.0, 3.0,
            0.0, 5.0, 0.0, 1.0,
            1.0, 0.0, 3.0, 0.0,
            2.0, 1.0, 0.0, 6.0,
        )
    }

    #[test]
    fn coefficient_constructor_lists_rows() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.element(0, 1), 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[0], Vector2::new(1.0, 3.0));
        assert_eq!(*m.column(1), Vector2::new(2.0, 4.0));
        assert_eq!(m.row(0), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn row_major_slice_constructor_matches_coefficient_constructor() {
        #[rustfmt::skip]
        let elements = [
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        ];
        let m = Matrix3::from_row_major_slice(&elements);
        assert_eq!(m, Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0));
        assert_eq!(m.element(2, 0), 7.0);
        assert_eq!(m, Matrix3::from_fn(|row, col| (row * 3 + col + 1) as f32));
    }

    #[test]
    #[should_panic]
    fn row_major_slice_of_wrong_length_panics() {
        let _ = Matrix2::from_row_major_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn element_mutation_works() {
        let mut m = Matrix3::zeros();
        m.set_element(0, 2, 5.0);
        *m.element_mut(1, 1) = 3.0;
        m[(2, 0)] = -1.0;
        m[1].set_z(4.0);
        m.set_column(0, m.column(0) + Vector3::unit_x());
        assert_eq!(m, Matrix3::new(1.0, 0.0, 5.0, 0.0, 3.0, 0.0, -1.0, 4.0, 0.0));
    }

    #[test]
    fn diagonal_and_trace_work() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.diagonal(), Vector3::new(1.0, 5.0, 9.0));
        assert_eq!(m.trace(), 15.0);
        assert_eq!(Matrix4::identity(), Matrix4::from_diagonal(&Vector4::same(1.0)));
        assert_eq!(Matrix4::identity().trace(), 4.0);
    }

    #[test]
    fn transposing_twice_gives_original() {
        let m = invertible_matrix4();
        assert_eq!(m.transposed().element(0, 1), m.element(1, 0));
        assert_eq!(m.transposed().transposed(), m);

        let mut t = m;
        t.transpose().transpose();
        assert_eq!(t, m);
    }

    #[test]
    fn matrix_vector_product_works() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let v = Vector3::new(1.0, 0.0, -1.0);
        assert_eq!(m * v, Vector3::new(-2.0, -2.0, -2.0));
        assert_eq!(Matrix3::identity() * &v, v);
    }

    #[test]
    fn matrix_product_works() {
        let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let b = Matrix2::new(0.0, 1.0, 1.0, 0.0);
        assert_eq!(a * b, Matrix2::new(2.0, 1.0, 4.0, 3.0));
        assert_eq!(b * a, Matrix2::new(3.0, 4.0, 1.0, 2.0));

        let mut c = a;
        c *= Matrix2::identity();
        assert_eq!(c, a);
    }

    #[test]
    fn elementwise_arithmetic_works() {
        let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a - a, Matrix2::zeros());
        assert_eq!(-a, a * -1.0);
        assert_eq!(&a / 2.0, Matrix2::new(0.5, 1.0, 1.5, 2.0));

        let mut b = a;
        b += a;
        b -= Matrix2::identity();
        b *= 0.5;
        b /= 0.5;
        assert_eq!(b, Matrix2::new(1.0, 4.0, 6.0, 7.0));
    }

    #[test]
    fn determinants_work() {
        assert_eq!(Matrix2::new(1.0, 2.0, 3.0, 4.0).determinant(), -2.0);
        assert_abs_diff_eq!(
            Matrix3::new(2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0).determinant(),
            6.0,
            epsilon = EPSILON
        );
        #[rustfmt::skip]
        let triangular = Matrix4::new(
            1.0, 2.0, 3.0, 4.0,
            0.0, 2.0, 5.0, 6.0,
            0.0, 0.0, 3.0, 7.0,
            0.0, 0.0, 0.0, 4.0,
        );
        assert_abs_diff_eq!(triangular.determinant(), 24.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            triangular.unaligned().determinant(),
            24.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverse_times_matrix_gives_identity() {
        let m2 = Matrix2::new(4.0, 7.0, 2.0, 6.0);
        assert_abs_diff_eq!(
            m2 * m2.inverse().unwrap(),
            Matrix2::identity(),
            epsilon = EPSILON
        );

        let m3 = Matrix3::new(2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0);
        assert_abs_diff_eq!(
            m3 * m3.inverse().unwrap(),
            Matrix3::identity(),
            epsilon = EPSILON
        );

        let m4 = invertible_matrix4();
        assert_abs_diff_eq!(
            m4 * m4.inverse().unwrap(),
            Matrix4::identity(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            m4.inverse().unwrap() * m4,
            Matrix4::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn aligned_and_unaligned_inverses_agree() {
        let m = invertible_matrix4();
        let aligned = m.inverse().unwrap();
        let unaligned = m.unaligned().inverse().unwrap();
        assert_abs_diff_eq!(aligned, unaligned.aligned(), epsilon = EPSILON);
    }

    #[test]
    fn inverting_singular_matrix_fails_without_writing() {
        let singular = Matrix4::zeros();
        assert!(singular.inverse().is_none());

        let mut out = Matrix4::identity();
        assert!(!singular.inverse_into(&mut out));
        assert_eq!(out, Matrix4::identity());

        let mut m = Matrix3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 0.0);
        let original = m;
        assert!(!m.invert());
        assert_eq!(m, original);

        assert!(Matrix2::new(1.0, 2.0, 2.0, 4.0).inverse().is_none());
    }

    #[test]
    fn inverting_in_place_works() {
        let mut m = DMatrix3::from_diagonal(&DVector3::new(2.0, 4.0, 8.0));
        assert!(m.invert());
        assert_abs_diff_eq!(m.diagonal(), DVector3::new(0.5, 0.25, 0.125));

        let mut out = DMatrix4::zeros();
        assert!(DMatrix4::identity().inverse_into(&mut out));
        assert_eq!(out, DMatrix4::identity());
    }

    #[test]
    fn small_well_conditioned_matrices_hit_the_absolute_singularity_threshold() {
        let small = Matrix4::from_diagonal(&Vector4::same(0.05));
        assert_abs_diff_eq!(small.determinant(), 6.25e-6, epsilon = 1e-9);
        assert!(small.inverse().is_none());

        let small = DMatrix4U::from_diagonal(&DVector4U::same(0.05));
        let inverse = small.inverse().unwrap();
        assert_abs_diff_eq!(inverse, DMatrix4U::from_diagonal(&DVector4U::same(20.0)), epsilon = 1e-9);
    }

    #[rustfmt::skip]
    #[test]
    fn coefficient_constructors_work_for_both_alignments() {
        let unaligned = DMatrix3U::new(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 10.0,
        );
        let aligned = TMatrix3::<f64, Aligned>::new(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 10.0,
        );
        assert_eq!(unaligned.element(0, 1), 2.0);
        assert_eq!(unaligned.aligned(), aligned);
        assert_eq!(DMatrix2U::new(1.0, 2.0, 3.0, 4.0).element(1, 0), 3.0);
        assert_eq!(Matrix4U::identity().aligned(), Matrix4::identity());
    }

    #[test]
    fn formatting_works() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.to_string(), "([1, 2], [3, 4])");
        assert_eq!(format!("{m:?}"), "TMatrix2[[1.0, 2.0], [3.0, 4.0]]");
    }

    #[test]
    fn matrices_have_column_major_layout() {
        let m = Matrix2U::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bytemuck::cast::<Matrix2U, [f32; 4]>(m), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(std::mem::size_of::<Matrix3>(), 48);
        assert_eq!(std::mem::size_of::<DMatrix4>(), 128);
    }
}
