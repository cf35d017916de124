//! Vectors with real components.

use crate::{
    angle::Radians,
    dispatch::CrossPolicy,
    num::Real,
    storage::{Aligned, SelectStorage, Unaligned},
};

/// A vector of `N` real components.
///
/// The components live in a single value of the storage type selected by the
/// alignment marker `A`: a SIMD register for [`Aligned`] vectors when the
/// build supports one, an array otherwise. Named accessors like
/// [`x`](Self::x) read and write lanes of that value.
///
/// The storage of a 3-dimensional vector has four lanes. The fourth is
/// padding and is zero for every vector that can be observed through the
/// public API, which is what lets [`dot`](Self::dot) and
/// [`magnitude`](Self::magnitude) operate on all four lanes.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TVector<T: Real, const N: usize, A: SelectStorage<T, N> = Aligned> {
    components: A::Repr,
}

pub type TVector2<T, A = Aligned> = TVector<T, 2, A>;
pub type TVector3<T, A = Aligned> = TVector<T, 3, A>;
pub type TVector4<T, A = Aligned> = TVector<T, 4, A>;

pub type Vector2 = TVector2<f32>;
pub type Vector3 = TVector3<f32>;
pub type Vector4 = TVector4<f32>;

/// A 2-dimensional vector with the natural alignment of `f32`.
pub type Vector2U = TVector2<f32, Unaligned>;
/// A 3-dimensional vector with the natural alignment of `f32`. It still
/// occupies 16 bytes.
pub type Vector3U = TVector3<f32, Unaligned>;
pub type Vector4U = TVector4<f32, Unaligned>;

pub type DVector2 = TVector2<f64>;
pub type DVector3 = TVector3<f64>;
pub type DVector4 = TVector4<f64>;

pub type DVector2U = TVector2<f64, Unaligned>;
pub type DVector3U = TVector3<f64, Unaligned>;
pub type DVector4U = TVector4<f64, Unaligned>;

impl_vector_common!(TVector, Real);

impl<T: Real, const N: usize, A: SelectStorage<T, N>> TVector<T, N, A> {
    /// Computes the length of the vector. Vectors whose squared length
    /// overflows are rescaled by their largest component first, so the
    /// result is only infinite if the length itself is.
    #[inline]
    pub fn magnitude(&self) -> T {
        let sqr_magnitude = self.sqr_magnitude();
        match self.overflow_scale(sqr_magnitude) {
            Some(scale) => (self / scale).magnitude() * scale,
            None => sqr_magnitude.sqrt(),
        }
    }

    /// Computes the unit vector in the direction of this vector, or the zero
    /// vector if the magnitude is below [`Real::SMALL_INACCURACY`]. The
    /// threshold is absolute, so any `f32` vector shorter than `1e-5`
    /// normalizes to zero. Overflowing squared lengths are handled as in
    /// [`magnitude`](Self::magnitude).
    #[inline]
    pub fn normalized(&self) -> Self {
        let sqr_magnitude = self.sqr_magnitude();
        if let Some(scale) = self.overflow_scale(sqr_magnitude) {
            return (self / scale).normalized();
        }
        if sqr_magnitude < T::SMALL_INACCURACY * T::SMALL_INACCURACY {
            Self::zeros()
        } else {
            self / sqr_magnitude.sqrt()
        }
    }

    /// The largest absolute component, if the squared magnitude overflowed
    /// while every component is finite.
    #[inline]
    fn overflow_scale(&self, sqr_magnitude: T) -> Option<T> {
        if !sqr_magnitude.is_infinite() {
            return None;
        }
        let scale = self.component_abs().max_component();
        scale.is_finite().then_some(scale)
    }

    /// Normalizes the vector in place. See [`normalized`](Self::normalized).
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Divides the vector by its magnitude without checking for zero. The
    /// components of the result are not finite if the vector is zero.
    #[inline]
    pub fn normalized_unchecked(&self) -> Self {
        self / self.magnitude()
    }

    /// Normalizes the vector in place without checking for zero.
    #[inline]
    pub fn normalize_unchecked(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        *self /= magnitude;
        self
    }

    /// Whether the magnitude differs from one by at most `threshold`.
    #[inline]
    pub fn is_normalized(&self, threshold: T) -> bool {
        (self.magnitude() - T::ONE).abs() <= threshold
    }

    /// Reflects the vector about the plane with the given unit normal.
    #[inline]
    pub fn reflected(&self, normal: &Self) -> Self {
        self - normal * (T::TWO * self.dot(normal))
    }

    #[inline]
    pub fn reflect(&mut self, normal: &Self) -> &mut Self {
        *self = self.reflected(normal);
        self
    }

    /// Computes the projection of this vector onto `target`. Projecting onto
    /// a vector whose magnitude is below [`Real::SMALL_INACCURACY`] gives the
    /// zero vector.
    #[inline]
    pub fn projected_onto(&self, target: &Self) -> Self {
        let sqr_magnitude = target.sqr_magnitude();
        if sqr_magnitude < T::SMALL_INACCURACY * T::SMALL_INACCURACY {
            Self::zeros()
        } else {
            target * (self.dot(target) / sqr_magnitude)
        }
    }

    #[inline]
    pub fn project_onto(&mut self, target: &Self) -> &mut Self {
        *self = self.projected_onto(target);
        self
    }

    /// Computes the component of this vector perpendicular to `target`.
    #[inline]
    pub fn rejected_from(&self, target: &Self) -> Self {
        self - self.projected_onto(target)
    }

    #[inline]
    pub fn reject_from(&mut self, target: &Self) -> &mut Self {
        *self = self.rejected_from(target);
        self
    }

    /// Computes the angle between this vector and another. The angle is zero
    /// if either vector is degenerate.
    pub fn angle(&self, other: &Self) -> Radians<T> {
        let magnitudes = (self.sqr_magnitude() * other.sqr_magnitude()).sqrt();
        if magnitudes < T::SMALL_INACCURACY {
            return Radians(T::ZERO);
        }
        let cos_angle = (self.dot(other) / magnitudes).max(T::NEG_ONE).min(T::ONE);
        Radians(cos_angle.acos())
    }

    /// Whether the cosine of the angle between the vectors is at most
    /// `threshold` in magnitude. A zero vector is perpendicular to every
    /// vector.
    #[inline]
    pub fn is_perpendicular_to(&self, other: &Self, threshold: T) -> bool {
        self.dot(other).abs() <= threshold * self.magnitude() * other.magnitude()
    }

    /// Whether the vectors point in the same or opposite directions, with the
    /// magnitude of the cosine of the angle between them at least
    /// `1 - threshold`. A zero vector is parallel to every vector.
    #[inline]
    pub fn is_parallel_to(&self, other: &Self, threshold: T) -> bool {
        self.dot(other).abs() >= (T::ONE - threshold) * self.magnitude() * other.magnitude()
    }

    /// Like [`is_parallel_to`](Self::is_parallel_to), but the vectors must
    /// point in the same direction.
    #[inline]
    pub fn is_coincident_with(&self, other: &Self, threshold: T) -> bool {
        self.dot(other) >= (T::ONE - threshold) * self.magnitude() * other.magnitude()
    }
}

impl<T: Real, A> TVector<T, 3, A>
where
    A: SelectStorage<T, 3>,
    A::Repr: CrossPolicy<T>,
{
    /// Whether this vector and the two others lie in a common plane, with
    /// the magnitude of their scalar triple product at most `threshold`
    /// times the product of their magnitudes.
    #[inline]
    pub fn is_coplanar(&self, b: &Self, c: &Self, threshold: T) -> bool {
        let triple_product = self.dot(&b.cross(c));
        triple_product.abs() <= threshold * self.magnitude() * b.magnitude() * c.magnitude()
    }
}

impl_scalar_left_mul!(TVector, f32, f64);

impl_abs_diff_eq!(
    [T: Real, const N: usize, A: SelectStorage<T, N>],
    TVector<T, N, A>,
    T,
    |a, b, epsilon| {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
);

impl_relative_eq!(
    [T: Real, const N: usize, A: SelectStorage<T, N>],
    TVector<T, N, A>,
    T,
    |a, b, epsilon, max_relative| {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::dispatch::Lanes;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn padding_lane_is_zero_after_construction() {
        let vectors = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::same(7.0),
            Vector3::from_slice(&[1.0, 2.0, 3.0]),
            Vector3::from_fn(|i| i as f32),
            Vector3::from_components(*Vector4::same(9.0).components()),
            Vector4::same(9.0).xyz(),
            Vector2::same(9.0).extended(9.0),
            Vector3::up(),
        ];
        for v in vectors {
            assert_eq!(v.components().lane(3), 0.0);
        }
    }

    #[test]
    fn padding_lane_stays_zero_through_arithmetic() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, -6.0);
        let results = [
            a + b,
            a - b,
            a * b,
            a / b,
            a * 3.0,
            a / 2.0,
            -a,
            a.component_abs(),
            a.signum(),
            a.component_min(&b),
            a.component_max(&b),
            a.cross(&b),
            a.normalized(),
            a.reflected(&b.normalized()),
            a.projected_onto(&b),
        ];
        for v in results {
            assert_eq!(v.components().lane(3), 0.0);
        }
    }

    #[test]
    fn from_components_clears_padding() {
        let padded = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let v = Vector3::from_components(*padded.components());
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(v.magnitude(), 14.0_f32.sqrt());
    }

    #[test]
    fn length_three_magnitude_ignores_padding() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.magnitude(), 7.0);
        let v = Vector3U::new(2.0, 3.0, 6.0);
        assert_eq!(v.magnitude(), 7.0);
    }

    #[test]
    fn dot_product_is_same_for_aligned_and_unaligned() {
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).dot(&Vector3::new(4.0, 5.0, 6.0)),
            32.0
        );
        assert_eq!(
            Vector3U::new(1.0, 2.0, 3.0).dot(&Vector3U::new(4.0, 5.0, 6.0)),
            32.0
        );
    }

    #[test]
    fn named_accessors_and_slice_view_agree() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        *v.y_mut() = 5.0;
        v.set_w(8.0);
        v[2] = 6.0;
        assert_eq!(v.as_slice(), &[1.0, 5.0, 6.0, 8.0]);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 5.0, 6.0, 8.0));
        assert_eq!(v.as_mut_slice().len(), 4);
        assert_eq!(Vector3::zeros().as_slice().len(), 3);
    }

    #[test]
    #[should_panic]
    fn indexing_padding_lane_panics() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    #[should_panic]
    fn creating_vector_from_slice_of_wrong_length_panics() {
        let _ = Vector2::from_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn normalizing_gives_unit_vector() {
        let v = Vector2::new(3.0, 4.0);
        let normalized = v.normalized();
        assert_abs_diff_eq!(normalized.magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = EPSILON);
        assert!(normalized.is_normalized(1e-5));
        assert!(!v.is_normalized(1e-5));
    }

    #[test]
    fn normalizing_zero_vector_gives_zero_vector() {
        assert_eq!(Vector3::zeros().normalized(), Vector3::zeros());
        assert_eq!(DVector4::same(1e-12).normalized(), DVector4::zeros());
        assert_eq!(*Vector3::zeros().normalize(), Vector3::zeros());
    }

    #[test]
    fn unchecked_normalizing_zero_vector_is_not_finite() {
        let normalized = Vector3::zeros().normalized_unchecked();
        assert!(normalized.as_slice().iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn normalizing_in_place_matches_normalized() {
        let mut v = DVector3::new(1.0, -2.0, 2.0);
        let expected = v.normalized();
        assert_abs_diff_eq!(*v.normalize(), expected);

        let mut v = DVector3::new(1.0, -2.0, 2.0);
        assert_abs_diff_eq!(*v.normalize_unchecked(), expected);
    }

    #[test]
    fn component_operations_work() {
        let v1 = Vector2::new(-1.0, 2.0);
        let v2 = Vector2::new(3.0, -4.0);

        assert_eq!(v1.component_abs(), Vector2::new(1.0, 2.0));
        assert_eq!(v1.component_mul(&v2), Vector2::new(-3.0, -8.0));
        assert_eq!(v1.component_min(&v2), Vector2::new(-1.0, -4.0));
        assert_eq!(v1.component_max(&v2), Vector2::new(3.0, 2.0));
        assert_eq!(v1.min_component(), -1.0);
        assert_eq!(v1.max_component(), 2.0);
        assert_eq!(v1.signum(), Vector2::new(-1.0, 1.0));
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).component_sum(), 6.0);

        let mut w = Vector3::new(-0.5, 0.0, 7.0);
        assert_eq!(*w.signum_assign(), Vector3::new(-1.0, 0.0, 1.0));
        assert_eq!(*w.component_abs_assign(), Vector3::new(1.0, 0.0, 1.0));
        assert_eq!(w.components().lane(3), 0.0);

        let mut v = v1;
        v.component_max_assign(&v2).component_min_assign(&Vector2::same(2.5));
        assert_eq!(v, Vector2::new(2.5, 2.0));
    }

    #[test]
    fn arithmetic_operators_work() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(&b - &a, Vector3::same(3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(&b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(b / a, Vector3::new(4.0, 2.5, 2.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= &a;
        c *= 2.0;
        c /= Vector3::new(1.0, 2.0, 4.0);
        assert_eq!(c, Vector3::new(8.0, 5.0, 3.0));
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        assert_eq!(Vector3::forward().cross(&Vector3::east()), Vector3::up());
        assert_eq!(Vector3::east().cross(&Vector3::up()), Vector3::forward());

        let mut v = Vector3U::unit_z();
        v.cross_assign(&Vector3U::unit_x());
        assert_eq!(v, Vector3U::unit_y());
    }

    #[test]
    fn axis_factories_point_in_expected_directions() {
        assert_eq!(Vector3::backward(), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(Vector3::west(), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(Vector3::down(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(Vector4::unit_w(), Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn reflecting_flips_normal_component() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        let mut reflected = v;
        reflected.reflect(&Vector3::unit_y());
        assert_eq!(reflected, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn projection_and_rejection_decompose_vector() {
        let v = Vector3::new(2.0, 3.0, 4.0);
        let target = Vector3::new(0.0, 2.0, 0.0);
        assert_abs_diff_eq!(v.projected_onto(&target), Vector3::new(0.0, 3.0, 0.0));
        assert_abs_diff_eq!(v.rejected_from(&target), Vector3::new(2.0, 0.0, 4.0));

        let mut w = v;
        w.project_onto(&target);
        let mut u = v;
        u.reject_from(&target);
        assert_abs_diff_eq!(w + u, v);
    }

    #[test]
    fn projecting_onto_zero_vector_gives_zero_vector() {
        let v = Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(v.projected_onto(&Vector3::zeros()), Vector3::zeros());
        assert_eq!(v.rejected_from(&Vector3::zeros()), v);
    }

    #[test]
    fn angle_between_vectors_works() {
        let angle = Vector3::unit_x().angle(&Vector3::unit_y());
        assert_abs_diff_eq!(angle.value(), std::f32::consts::FRAC_PI_2);

        let angle = Vector2::new(1.0, 1.0).angle(&Vector2::new(-2.0, -2.0));
        assert_abs_diff_eq!(angle.value(), std::f32::consts::PI, epsilon = 1e-3);

        assert_eq!(Vector3::zeros().angle(&Vector3::unit_x()).value(), 0.0);
    }

    #[test]
    fn direction_predicates_work() {
        let a = Vector3::new(2.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 3.0, 0.0);
        let c = Vector3::new(-4.0, 0.0, 0.0);

        assert!(a.is_perpendicular_to(&b, 1e-5));
        assert!(!a.is_perpendicular_to(&c, 1e-5));
        assert!(a.is_parallel_to(&c, 1e-5));
        assert!(!a.is_parallel_to(&b, 1e-5));
        assert!(!a.is_coincident_with(&c, 1e-5));
        assert!(a.is_coincident_with(&(a * 10.0), 1e-5));
    }

    #[test]
    fn magnitude_and_normalization_survive_overflowing_squares() {
        let v = Vector3::new(1e20, 0.0, 0.0);
        assert_eq!(v.sqr_magnitude(), f32::INFINITY);
        assert_eq!(v.magnitude(), 1e20);
        assert_eq!(v.normalized(), Vector3::new(1.0, 0.0, 0.0));

        let w = Vector2::new(3e30, -4e30);
        assert_abs_diff_eq!(w.magnitude(), 5e30, epsilon = 1e25);
        assert_abs_diff_eq!(w.normalized(), Vector2::new(0.6, -0.8), epsilon = 1e-6);

        assert_eq!(Vector3::new(f32::INFINITY, 0.0, 0.0).magnitude(), f32::INFINITY);
    }

    #[test]
    fn coplanarity_uses_triple_product() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        assert!(a.is_coplanar(&b, &Vector3::new(3.0, -2.0, 0.0), 1e-5));
        assert!(!a.is_coplanar(&b, &Vector3::new(0.0, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn equality_within_threshold_works() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 2.0, 3.001);
        assert!(a.equals(&b, 0.01));
        assert!(!a.equals(&b, 1e-5));
        assert!(a.equals(&a, 0.0));
    }

    #[test]
    fn conversions_between_alignments_preserve_components() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let u: Vector3U = v.unaligned();
        assert_eq!(u.to_array(), v.to_array());
        assert_eq!(u.aligned(), v);
        assert_eq!(v.realigned::<Aligned>(), v);
    }

    #[test]
    fn dimension_conversions_work() {
        let v = Vector2::new(1.0, 2.0).extended(3.0).extended(4.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.xyz().xy(), Vector2::new(1.0, 2.0));
        assert_eq!(<[f32; 4]>::from(v), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vector4::from([1.0, 2.0, 3.0, 4.0]), v);
    }

    #[test]
    fn formatting_works() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
        assert_eq!(format!("{:.1}", Vector2::new(1.0, 2.0)), "(1.0, 2.0)");
        assert_eq!(
            format!("{:?}", Vector2U::new(1.0, 2.0)),
            "TVector2(1.0, 2.0)"
        );
    }

    #[test]
    fn padded_lanes_cast_from_bytes_go_through_length_four_vector() {
        let v: Vector4 = bytemuck::cast([3.0f32, 4.0, 0.0, 100.0]);
        let xyz = v.xyz();
        assert_eq!(xyz.magnitude(), 5.0);
        assert_eq!(xyz.dot(&xyz), 25.0);
        assert_eq!(xyz.components().lane(3), 0.0);

        let zeroed: Vector3 = bytemuck::Zeroable::zeroed();
        assert_eq!(zeroed, Vector3::zeros());
    }

    #[test]
    fn vectors_are_pod_with_expected_layout() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bytemuck::cast::<Vector4, [f32; 4]>(v), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(std::mem::size_of::<Vector3>(), 16);
        assert_eq!(std::mem::align_of::<Vector3>(), 16);
        assert_eq!(std::mem::size_of::<Vector3U>(), 16);
        assert_eq!(std::mem::align_of::<Vector3U>(), 4);
        assert_eq!(std::mem::size_of::<DVector4>(), 32);
    }
}
