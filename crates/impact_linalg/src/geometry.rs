//! Planes, rays and lines in three dimensions.

use crate::{
    dispatch::CrossPolicy,
    num::Real,
    point::{TPoint, TPoint3},
    storage::{Aligned, SelectStorage},
    vector::TVector3,
};
use approx::{AbsDiffEq, RelativeEq};

/// A plane, consisting of all points `p` with `normal.dot(p) == distance`.
///
/// The normal always has unit length, so `distance` is the signed distance
/// of the plane from the origin along the normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TPlane<T: Real, A: SelectStorage<T, 3> = Aligned> {
    normal: TVector3<T, A>,
    distance: T,
}

/// A half-line starting at an origin and extending along a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TRay<T: Real, A: SelectStorage<T, 3> = Aligned> {
    origin: TPoint3<T, A>,
    direction: TVector3<T, A>,
}

/// An infinite line through a point along a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TLine<T: Real, A: SelectStorage<T, 3> = Aligned> {
    point: TPoint3<T, A>,
    direction: TVector3<T, A>,
}

pub type Plane = TPlane<f32>;
pub type Ray = TRay<f32>;
pub type Line = TLine<f32>;

pub type DPlane = TPlane<f64>;
pub type DRay = TRay<f64>;
pub type DLine = TLine<f64>;

impl<T: Real, A: SelectStorage<T, 3>> TPlane<T, A> {
    /// Creates a plane with the given normal and displacement from the
    /// origin. The normal is normalized.
    #[inline]
    pub fn new(normal: TVector3<T, A>, distance: T) -> Self {
        Self {
            normal: normal.normalized(),
            distance,
        }
    }

    /// Creates the plane with the given normal that passes through the given
    /// point. The normal is normalized.
    #[inline]
    pub fn from_normal_and_point(normal: TVector3<T, A>, point: &TPoint3<T, A>) -> Self {
        let normal = normal.normalized();
        let distance = normal.dot(point.as_vector());
        Self { normal, distance }
    }

    #[inline]
    pub fn normal(&self) -> &TVector3<T, A> {
        &self.normal
    }

    #[inline]
    pub fn distance(&self) -> T {
        self.distance
    }

    /// Computes the distance from the plane to the point, positive on the
    /// side the normal points to.
    #[inline]
    pub fn signed_distance(&self, point: &TPoint3<T, A>) -> T {
        self.normal.dot(point.as_vector()) - self.distance
    }

    /// Computes the point in the plane closest to the given point.
    #[inline]
    pub fn project_point(&self, point: &TPoint3<T, A>) -> TPoint3<T, A> {
        point - self.normal * self.signed_distance(point)
    }

    /// Whether the point lies within `threshold` of the plane.
    #[inline]
    pub fn contains(&self, point: &TPoint3<T, A>, threshold: T) -> bool {
        self.signed_distance(point).abs() <= threshold
    }

    /// Returns the same plane with the normal reversed.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }
}

impl<T: Real, A> TPlane<T, A>
where
    A: SelectStorage<T, 3>,
    A::Repr: CrossPolicy<T>,
{
    /// Creates the plane through the three given points, with the normal
    /// pointing to the side from which the points appear counterclockwise.
    /// Returns `None` if the points are collinear.
    pub fn from_points(
        a: &TPoint3<T, A>,
        b: &TPoint3<T, A>,
        c: &TPoint3<T, A>,
    ) -> Option<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal.magnitude() < T::SMALL_INACCURACY {
            return None;
        }
        Some(Self::from_normal_and_point(normal, a))
    }
}

impl<T: Real, A: SelectStorage<T, 3>> TRay<T, A> {
    /// Creates a ray with the given origin and direction. The direction is
    /// normalized.
    #[inline]
    pub fn new(origin: TPoint3<T, A>, direction: TVector3<T, A>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    #[inline]
    pub fn origin(&self) -> &TPoint3<T, A> {
        &self.origin
    }

    #[inline]
    pub fn direction(&self) -> &TVector3<T, A> {
        &self.direction
    }

    /// Returns the point at the given distance along the ray.
    #[inline]
    pub fn point_at(&self, distance: T) -> TPoint3<T, A> {
        self.origin + self.direction * distance
    }

    /// Computes the point on the ray closest to the given point. Points
    /// behind the origin are closest to the origin.
    #[inline]
    pub fn closest_point(&self, point: &TPoint3<T, A>) -> TPoint3<T, A> {
        let distance = (point - self.origin).dot(&self.direction);
        self.point_at(distance.max(T::ZERO))
    }

    #[inline]
    pub fn distance_to_point(&self, point: &TPoint3<T, A>) -> T {
        TPoint::distance_between(point, &self.closest_point(point))
    }

    /// Computes the point where the ray crosses the plane. Returns `None` if
    /// the ray is parallel to the plane or the plane is behind the origin.
    pub fn intersect_plane(&self, plane: &TPlane<T, A>) -> Option<TPoint3<T, A>> {
        let approach = plane.normal.dot(&self.direction);
        if approach.abs() < T::SMALL_INACCURACY {
            return None;
        }
        let distance = -plane.signed_distance(&self.origin) / approach;
        if distance < T::ZERO {
            return None;
        }
        Some(self.point_at(distance))
    }
}

impl<T: Real, A: SelectStorage<T, 3>> TLine<T, A> {
    /// Creates a line through the given point with the given direction. The
    /// direction is normalized.
    #[inline]
    pub fn new(point: TPoint3<T, A>, direction: TVector3<T, A>) -> Self {
        Self {
            point,
            direction: direction.normalized(),
        }
    }

    /// Creates the line through the two given points.
    #[inline]
    pub fn through(a: &TPoint3<T, A>, b: &TPoint3<T, A>) -> Self {
        Self::new(*a, b - a)
    }

    #[inline]
    pub fn point(&self) -> &TPoint3<T, A> {
        &self.point
    }

    #[inline]
    pub fn direction(&self) -> &TVector3<T, A> {
        &self.direction
    }

    #[inline]
    pub fn closest_point(&self, point: &TPoint3<T, A>) -> TPoint3<T, A> {
        let distance = (point - self.point).dot(&self.direction);
        self.point + self.direction * distance
    }

    #[inline]
    pub fn distance_to_point(&self, point: &TPoint3<T, A>) -> T {
        TPoint::distance_between(point, &self.closest_point(point))
    }

    /// Whether the directions of the lines are parallel within `threshold`.
    /// See [`TVector::is_parallel_to`](crate::vector::TVector::is_parallel_to).
    #[inline]
    pub fn is_parallel_to(&self, other: &Self, threshold: T) -> bool {
        self.direction.is_parallel_to(&other.direction, threshold)
    }
}

impl_abs_diff_eq!([T: Real, A: SelectStorage<T, 3>], TPlane<T, A>, T, |a, b, epsilon| {
    a.normal.abs_diff_eq(&b.normal, epsilon) && a.distance.abs_diff_eq(&b.distance, epsilon)
});

impl_relative_eq!(
    [T: Real, A: SelectStorage<T, 3>],
    TPlane<T, A>,
    T,
    |a, b, epsilon, max_relative| {
        a.normal.relative_eq(&b.normal, epsilon, max_relative)
            && a.distance.relative_eq(&b.distance, epsilon, max_relative)
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        point::{Point3, Point3U},
        storage::Unaligned,
        vector::{Vector3, Vector3U},
    };
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn plane_from_normal_and_point_has_unit_normal() {
        let plane =
            Plane::from_normal_and_point(Vector3::new(0.0, 0.0, 2.0), &Point3::new(5.0, 5.0, 3.0));
        assert_eq!(plane.normal(), &Vector3::up());
        assert_eq!(plane.distance(), 3.0);
    }

    #[test]
    fn signed_distance_depends_on_side() {
        let plane = Plane::new(Vector3::up(), 1.0);
        assert_eq!(plane.signed_distance(&Point3::new(3.0, 4.0, 4.0)), 3.0);
        assert_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, -1.0)), -2.0);
        assert_eq!(plane.flipped().signed_distance(&Point3::new(0.0, 0.0, -1.0)), 2.0);
    }

    #[test]
    fn projected_point_lies_in_plane() {
        let plane = Plane::new(Vector3::new(1.0, 1.0, 0.0), 2.0);
        let point = Point3::new(4.0, -1.0, 7.0);
        let projected = plane.project_point(&point);
        assert!(plane.contains(&projected, EPSILON));
        assert!(!plane.contains(&point, EPSILON));
        assert!((point - projected).is_parallel_to(plane.normal(), EPSILON));
    }

    #[test]
    fn plane_from_points_works() {
        let plane = Plane::from_points(
            &Point3::new(0.0, 0.0, 2.0),
            &Point3::new(1.0, 0.0, 2.0),
            &Point3::new(0.0, 1.0, 2.0),
        )
        .unwrap();
        assert_abs_diff_eq!(plane, Plane::new(Vector3::up(), 2.0), epsilon = EPSILON);

        let unaligned = TPlane::<f32, _>::from_points(
            &Point3U::new(0.0, 0.0, 2.0),
            &Point3U::new(1.0, 0.0, 2.0),
            &Point3U::new(0.0, 1.0, 2.0),
        )
        .unwrap();
        assert_abs_diff_eq!(*unaligned.normal(), Vector3U::up(), epsilon = EPSILON);
    }

    #[test]
    fn unaligned_double_precision_shapes_compare_equal() {
        let normal = TVector3::<f64, Unaligned>::new(0.0, 0.0, 4.0);
        let plane = TPlane::new(normal, -1.5);
        assert_eq!(plane, TPlane::new(TVector3::up(), -1.5));
        assert_ne!(plane, plane.flipped());
        assert_abs_diff_eq!(plane.flipped().flipped(), plane, epsilon = 1e-12);

        let origin = TPoint3::<f64, Unaligned>::new(1.0, 2.0, 3.0);
        let ray = TRay::new(origin, normal);
        assert_eq!(ray, TRay::new(origin, TVector3::up()));
        assert_eq!(
            TLine::through(&origin, &ray.point_at(2.0)),
            TLine::new(origin, normal)
        );
    }

    #[test]
    fn plane_from_collinear_points_is_none() {
        assert!(
            Plane::from_points(
                &Point3::new(0.0, 0.0, 0.0),
                &Point3::new(1.0, 1.0, 1.0),
                &Point3::new(2.0, 2.0, 2.0),
            )
            .is_none()
        );
    }

    #[test]
    fn ray_direction_is_normalized() {
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 3.0, 4.0));
        assert_abs_diff_eq!(ray.direction().magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(ray.point_at(5.0), Point3::new(0.0, 3.0, 4.0), epsilon = EPSILON);
    }

    #[test]
    fn closest_point_on_ray_is_clamped_to_origin() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::forward());
        assert_eq!(
            ray.closest_point(&Point3::new(3.0, 2.0, 0.0)),
            Point3::new(3.0, 0.0, 0.0)
        );
        assert_eq!(
            ray.closest_point(&Point3::new(-3.0, 2.0, 0.0)),
            Point3::new(1.0, 0.0, 0.0)
        );
        assert_abs_diff_eq!(
            ray.distance_to_point(&Point3::new(-2.0, 4.0, 0.0)),
            5.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn ray_hits_plane_in_front() {
        let plane = Plane::new(Vector3::up(), 2.0);
        let ray = Ray::new(Point3::new(1.0, 1.0, 0.0), Vector3::up());
        assert_abs_diff_eq!(
            ray.intersect_plane(&plane).unwrap(),
            Point3::new(1.0, 1.0, 2.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            ray.intersect_plane(&plane.flipped()).unwrap(),
            Point3::new(1.0, 1.0, 2.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn ray_misses_parallel_or_behind_plane() {
        let plane = Plane::new(Vector3::up(), 2.0);
        let parallel = Ray::new(Point3::origin(), Vector3::east());
        assert!(parallel.intersect_plane(&plane).is_none());
        let away = Ray::new(Point3::origin(), Vector3::down());
        assert!(away.intersect_plane(&plane).is_none());
    }

    #[test]
    fn closest_point_on_line_is_not_clamped() {
        let line = Line::through(&Point3::new(1.0, 0.0, 0.0), &Point3::new(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(
            line.closest_point(&Point3::new(-3.0, 2.0, 0.0)),
            Point3::new(-3.0, 0.0, 0.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            line.distance_to_point(&Point3::new(-3.0, 2.0, 0.0)),
            2.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn parallel_lines_are_detected() {
        let a = Line::new(Point3::origin(), Vector3::new(1.0, 1.0, 0.0));
        let b = Line::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(-2.0, -2.0, 0.0));
        let c = Line::new(Point3::origin(), Vector3::up());
        assert!(a.is_parallel_to(&b, EPSILON));
        assert!(!a.is_parallel_to(&c, EPSILON));
    }
}
