//! Serialization of vectors, points and matrices.
//!
//! Vectors and points are written as tuples of their components and
//! matrices as tuples of their columns. Padding lanes are never written.

use crate::{
    int_vector::TIntVector,
    matrix::TMatrix,
    num::{Integral, Real},
    point::TPoint,
    storage::SelectStorage,
    vector::TVector,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! impl_serde_for_vector {
    ($vector:ident, $bound:ident, $n:literal, ($($component:ident),+)) => {
        impl<T: $bound + Serialize, A: SelectStorage<T, $n>> Serialize for $vector<T, $n, A> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let [$($component),+] = self.to_array();
                ($($component,)+).serialize(serializer)
            }
        }

        impl<'de, T: $bound + Deserialize<'de>, A: SelectStorage<T, $n>> Deserialize<'de>
            for $vector<T, $n, A>
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let ($($component,)+) =
                    <($(impl_serde_for_vector!(@element $component),)+)>::deserialize(deserializer)?;
                Ok(Self::from_array([$($component),+]))
            }
        }
    };
    (@element $component:ident) => { T };
}

impl_serde_for_vector!(TVector, Real, 2, (x, y));
impl_serde_for_vector!(TVector, Real, 3, (x, y, z));
impl_serde_for_vector!(TVector, Real, 4, (x, y, z, w));

impl_serde_for_vector!(TIntVector, Integral, 2, (x, y));
impl_serde_for_vector!(TIntVector, Integral, 3, (x, y, z));
impl_serde_for_vector!(TIntVector, Integral, 4, (x, y, z, w));

macro_rules! impl_serde_for_matrix {
    ($n:literal, ($($column:ident),+)) => {
        impl<T: Real, A: SelectStorage<T, $n>> Serialize for TMatrix<T, $n, A>
        where
            TVector<T, $n, A>: Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let [$($column),+] = self.columns();
                ($($column,)+).serialize(serializer)
            }
        }

        impl<'de, T: Real, A: SelectStorage<T, $n>> Deserialize<'de> for TMatrix<T, $n, A>
        where
            TVector<T, $n, A>: Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let ($($column,)+) =
                    <($(impl_serde_for_matrix!(@column $n, $column),)+)>::deserialize(deserializer)?;
                Ok(Self::from_columns([$($column),+]))
            }
        }
    };
    (@column $n:literal, $column:ident) => { TVector<T, $n, A> };
}

impl_serde_for_matrix!(2, (c0, c1));
impl_serde_for_matrix!(3, (c0, c1, c2));
impl_serde_for_matrix!(4, (c0, c1, c2, c3));

impl<T: Real, const N: usize, A: SelectStorage<T, N>> Serialize for TPoint<T, N, A>
where
    TVector<T, N, A>: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_vector().serialize(serializer)
    }
}

impl<'de, T: Real, const N: usize, A: SelectStorage<T, N>> Deserialize<'de> for TPoint<T, N, A>
where
    TVector<T, N, A>: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TVector::deserialize(deserializer).map(Self::from_vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        angle::Degrees,
        int_vector::IntVector3,
        matrix::{Matrix2, Matrix3U},
        point::Point3,
        vector::{DVector4, Vector3},
    };

    fn round_trip<V: Serialize + for<'de> Deserialize<'de>>(value: &V) -> V {
        let text = ron::to_string(value).unwrap();
        ron::from_str(&text).unwrap()
    }

    #[test]
    fn vectors_serialize_as_component_tuples() {
        assert_eq!(ron::to_string(&IntVector3::new(1, -2, 3)).unwrap(), "(1,-2,3)");
        let v = Vector3::new(1.5, -2.0, 0.25);
        assert_eq!(round_trip(&v), v);
        let d = DVector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(round_trip(&d), d);
    }

    #[test]
    fn deserialized_vectors_have_zero_padding() {
        let v: Vector3 = ron::from_str("(3.0, 4.0, 12.0)").unwrap();
        assert_eq!(v.magnitude(), 13.0);
    }

    #[test]
    fn deserializing_wrong_number_of_components_fails() {
        assert!(ron::from_str::<Vector3>("(1.0, 2.0)").is_err());
    }

    #[test]
    fn matrices_serialize_as_column_tuples() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(round_trip(&m), m);

        let parsed: Matrix2 = ron::from_str("((1.0, 3.0), (2.0, 4.0))").unwrap();
        assert_eq!(parsed, m);

        let u = Matrix3U::identity();
        assert_eq!(round_trip(&u), u);
    }

    #[test]
    fn points_and_angles_round_trip() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(round_trip(&p), p);
        assert_eq!(round_trip(&Degrees(45.0_f32)), Degrees(45.0));
    }
}
