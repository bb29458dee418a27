//! Geometric primitives and ray intersection.

use crate::{
    traits::{Number, Sqrt},
    MinMax, Point3, Ray, RayEpsilon, Vec3,
};

/// A sphere with [`f32`] elements.
pub type Spheref = Sphere<f32>;

/// A sphere in 3-dimensional space.
#[derive(Debug, Clone, Copy)]
pub struct Sphere<T> {
    pub center: Point3<T>,
    pub radius: T,
}

impl<T> PartialEq for Sphere<T>
where
    T: crate::Tolerance,
{
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius.approx_eq(other.radius, T::VECTOR)
    }
}

impl<T> Sphere<T> {
    /// Creates a sphere from its center and radius.
    ///
    /// The radius is taken as-is; a zero or negative radius is not rejected,
    /// but the intersection and normal computations assume a positive one.
    #[inline]
    pub const fn new(center: Point3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Returns the distance along `ray` to the closest intersection with
    /// this sphere *in front of* the ray, or 0 if there is none.
    ///
    /// Solves the quadratic `A*t^2 + B*t + C = 0` for the ray parameter `t`.
    /// Roots closer than [`RayEpsilon::T_MIN`] are discarded, so that a ray
    /// starting on (or numerically near) the surface does not immediately
    /// hit it again. A tangent ray (zero discriminant) counts as a miss.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let sphere = Sphere::new(point3(0.0, 0.0, 5.0), 1.0);
    /// let ray = Ray::new(Point3f::ORIGIN, Vec3f::Z);
    /// assert_eq!(sphere.intersection_dist(&ray), 4.0);
    /// ```
    pub fn intersection_dist(&self, ray: &Ray<T, 3>) -> T
    where
        T: Number + Sqrt + MinMax + RayEpsilon + PartialOrd,
    {
        let two = T::ONE + T::ONE;
        let displacement = ray.origin().to_vec() - self.center.to_vec();
        let a = ray.direction().dot(ray.direction());
        let b = two * displacement.dot(ray.direction());
        let c = displacement.dot(displacement) - self.radius * self.radius;
        let discriminant = b * b - two * two * a * c;

        let mut t = T::ZERO;
        if discriminant > T::ZERO {
            let t1 = (-b + discriminant.sqrt()) / (two * a);
            let t2 = (-b - discriminant.sqrt()) / (two * a);
            if t1 > T::T_MIN && t2 > T::T_MIN {
                t = t1.min(t2);
            } else if t1 > T::T_MIN && t2 < T::T_MIN {
                t = t1;
            } else if t1 < T::T_MIN && t2 > T::T_MIN {
                t = t2;
            }
        }
        t
    }

    /// Returns the outward unit normal of the sphere at `hit_point`.
    ///
    /// `hit_point` is assumed to lie on the surface, so dividing by the
    /// radius normalizes the offset from the center.
    pub fn normal_at(&self, hit_point: Point3<T>) -> Vec3<T>
    where
        T: Number,
    {
        (hit_point.to_vec() - self.center.to_vec()) / self.radius
    }
}

/// A triangle in 3-dimensional space.
///
/// The corner order is significant: it decides which side a future normal
/// computation would call the front face.
#[derive(Debug, Clone, Copy)]
pub struct Triangle<T> {
    corners: [Point3<T>; 3],
}

impl<T> PartialEq for Triangle<T>
where
    T: crate::Tolerance,
{
    fn eq(&self, other: &Self) -> bool {
        self.corners == other.corners
    }
}

impl<T> Triangle<T> {
    /// Creates a triangle from its three corners.
    #[inline]
    pub const fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Self { corners: [a, b, c] }
    }

    /// Returns the corners of the triangle, in construction order.
    #[inline]
    pub const fn corners(&self) -> &[Point3<T>; 3] {
        &self.corners
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{point3, vec3, Point3f, Vec3f};

    use super::*;

    #[test]
    fn hit_from_outside() {
        let sphere = Sphere::new(point3(0.0f32, 0.0, 5.0), 1.0);
        let ray = Ray::new(Point3f::ORIGIN, Vec3f::Z);
        assert_eq!(sphere.intersection_dist(&ray), 4.0);

        // An unnormalized construction direction changes nothing, since the
        // ray normalizes it.
        let ray = Ray::new(Point3f::ORIGIN, vec3(0.0, 0.0, 100.0));
        assert_eq!(sphere.intersection_dist(&ray), 4.0);
    }

    #[test]
    fn miss() {
        let sphere = Sphere::new(point3(0.0f32, 0.0, 5.0), 1.0);

        // Pointing away from the sphere.
        let ray = Ray::new(Point3f::ORIGIN, -Vec3f::Z);
        assert_eq!(sphere.intersection_dist(&ray), 0.0);

        // Line misses the sphere entirely.
        let ray = Ray::new(Point3f::ORIGIN, Vec3f::X);
        assert_eq!(sphere.intersection_dist(&ray), 0.0);

        // A tangent ray has a zero discriminant and counts as a miss.
        let ray = Ray::new(point3(1.0, 0.0, 0.0), Vec3f::Z);
        assert_eq!(sphere.intersection_dist(&ray), 0.0);
    }

    #[test]
    fn hit_from_inside() {
        // From the center, both roots are +-radius and the positive one
        // wins.
        let sphere = Sphere::new(point3(0.0f32, 0.0, 0.0), 2.0);
        let ray = Ray::new(Point3f::ORIGIN, Vec3f::Y);
        assert_eq!(sphere.intersection_dist(&ray), 2.0);
    }

    #[test]
    fn no_self_intersection() {
        // A ray starting on the surface and leaving the sphere only has
        // roots at t = 0 and t < 0, neither of which counts.
        let sphere = Sphere::new(Point3f::ORIGIN, 1.0);
        let ray = Ray::new(point3(0.0, 0.0, -1.0), -Vec3f::Z);
        assert_eq!(sphere.intersection_dist(&ray), 0.0);
    }

    #[test]
    fn hit_then_normal() {
        let sphere = Sphere::new(point3(0.0f32, 0.0, 5.0), 1.0);
        let ray = Ray::new(Point3f::ORIGIN, Vec3f::Z);
        let t = sphere.intersection_dist(&ray);
        let normal = sphere.normal_at(ray.at(t));
        assert_eq!(normal, -Vec3f::Z);
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn triangle_corners() {
        let tri = Triangle::new(
            point3(0.0, 0.0, 0.0),
            point3(1.0, 0.0, 0.0),
            point3(0.0, 1.0, 0.0),
        );
        assert_eq!(tri.corners()[1], point3(1.0, 0.0, 0.0));
    }
}
