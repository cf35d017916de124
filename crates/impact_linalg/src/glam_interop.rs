//! Conversions to and from [`glam`] types.

use crate::{
    int_vector::TIntVector,
    matrix::TMatrix,
    storage::SelectStorage,
    vector::TVector,
};

macro_rules! impl_glam_vector_conversions {
    ($vector:ident, $t:ty, $n:literal, $glam:ty) => {
        impl<A: SelectStorage<$t, $n>> From<$glam> for $vector<$t, $n, A> {
            #[inline]
            fn from(vector: $glam) -> Self {
                Self::from_array(vector.to_array())
            }
        }

        impl<A: SelectStorage<$t, $n>> From<$vector<$t, $n, A>> for $glam {
            #[inline]
            fn from(vector: $vector<$t, $n, A>) -> Self {
                <$glam>::from_array(vector.to_array())
            }
        }
    };
}

impl_glam_vector_conversions!(TVector, f32, 2, glam::Vec2);
impl_glam_vector_conversions!(TVector, f32, 3, glam::Vec3);
impl_glam_vector_conversions!(TVector, f32, 3, glam::Vec3A);
impl_glam_vector_conversions!(TVector, f32, 4, glam::Vec4);
impl_glam_vector_conversions!(TVector, f64, 3, glam::DVec3);
impl_glam_vector_conversions!(TVector, f64, 4, glam::DVec4);
impl_glam_vector_conversions!(TIntVector, i32, 3, glam::IVec3);

impl<A: SelectStorage<f32, 4>> From<glam::Mat4> for TMatrix<f32, 4, A> {
    fn from(matrix: glam::Mat4) -> Self {
        Self::from_columns(matrix.to_cols_array_2d().map(TVector::from_array))
    }
}

impl<A: SelectStorage<f32, 4>> From<TMatrix<f32, 4, A>> for glam::Mat4 {
    fn from(matrix: TMatrix<f32, 4, A>) -> Self {
        glam::Mat4::from_cols_array_2d(&matrix.columns().map(|column| column.to_array()))
    }
}

impl<A: SelectStorage<f64, 4>> From<glam::DMat4> for TMatrix<f64, 4, A> {
    fn from(matrix: glam::DMat4) -> Self {
        Self::from_columns(matrix.to_cols_array_2d().map(TVector::from_array))
    }
}

impl<A: SelectStorage<f64, 4>> From<TMatrix<f64, 4, A>> for glam::DMat4 {
    fn from(matrix: TMatrix<f64, 4, A>) -> Self {
        glam::DMat4::from_cols_array_2d(&matrix.columns().map(|column| column.to_array()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        int_vector::IntVector3,
        matrix::Matrix4,
        vector::{Vector3, Vector3U, Vector4},
    };

    #[test]
    fn vectors_convert_to_and_from_glam() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(g), v);

        let a: glam::Vec3A = Vector3U::new(1.0, 2.0, 3.0).into();
        assert_eq!(a, glam::Vec3A::new(1.0, 2.0, 3.0));

        assert_eq!(
            IntVector3::from(glam::IVec3::new(1, -2, 3)),
            IntVector3::new(1, -2, 3)
        );
    }

    #[test]
    fn matrices_convert_to_and_from_glam_column_major() {
        let m = Matrix4::from_fn(|row, col| (row * 4 + col) as f32);
        let g: glam::Mat4 = m.into();
        assert_eq!(g.row(1), glam::Vec4::new(4.0, 5.0, 6.0, 7.0));
        assert_eq!(g.col(1), glam::Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(Matrix4::from(g), m);

        let v = Vector4::new(1.0, 0.0, -1.0, 2.0);
        assert_eq!(glam::Vec4::from(m * v), g * glam::Vec4::from(v));
    }
}
