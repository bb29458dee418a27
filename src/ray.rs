use std::fmt;

use crate::{
    traits::{Number, Sqrt},
    Point, Vector,
};

/// A 3-dimensional ray.
pub type Ray3<T> = Ray<T, 3>;
/// A 3-dimensional ray with [`f32`] elements.
pub type Ray3f = Ray3<f32>;

/// A half-line starting at an origin [`Point`] and extending in a fixed
/// direction.
///
/// The direction is always stored unit length: construction and
/// [`Ray::set_direction`] normalize the supplied vector. A zero-length input
/// direction is not guarded and normalizes to non-finite elements, like
/// [`Vector::normalize`].
#[derive(Debug, Clone, Copy)]
pub struct Ray<T, const N: usize> {
    origin: Point<T, N>,
    direction: Vector<T, N>,
}

impl<T, const N: usize> PartialEq for Ray<T, N>
where
    T: crate::Tolerance,
{
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}

impl<T, const N: usize> Ray<T, N> {
    /// Creates a ray from an origin and a direction.
    ///
    /// The direction is normalized before it is stored; it does not have to
    /// be unit length.
    pub fn new(origin: Point<T, N>, direction: Vector<T, N>) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Returns the origin of the ray.
    #[inline]
    pub fn origin(&self) -> Point<T, N>
    where
        T: Copy,
    {
        self.origin
    }

    /// Returns the direction of the ray (unit length).
    #[inline]
    pub fn direction(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        self.direction
    }

    /// Moves the origin of the ray.
    #[inline]
    pub fn set_origin(&mut self, origin: Point<T, N>) {
        self.origin = origin;
    }

    /// Points the ray in a new direction, normalizing the supplied vector.
    pub fn set_direction(&mut self, direction: Vector<T, N>)
    where
        T: Number + Sqrt,
    {
        self.direction = direction.normalize();
    }

    /// Returns the point `t` units along the ray.
    ///
    /// Because the direction is unit length, `t` is the distance from the
    /// origin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let ray = Ray::new(Point3f::ORIGIN, vec3(0.0, 2.0, 0.0));
    /// assert_eq!(ray.at(3.0), point3(0.0, 3.0, 0.0));
    /// ```
    pub fn at(&self, t: T) -> Point<T, N>
    where
        T: Number,
    {
        Point::from_vec(self.origin.to_vec() + self.direction * t)
    }
}

impl<T, const N: usize> fmt::Display for Ray<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + t*{}", self.origin, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{point3, vec3, Point3f, Vec3f};

    use super::*;

    #[test]
    fn direction_is_normalized() {
        let mut ray = Ray::new(Point3f::ORIGIN, vec3(3.0, 4.0, 0.0));
        assert_eq!(ray.direction(), vec3(0.6, 0.8, 0.0));
        assert_abs_diff_eq!(ray.direction().length(), 1.0, epsilon = 1e-6);

        ray.set_direction(vec3(0.0, 0.0, -7.0));
        assert_eq!(ray.direction(), -Vec3f::Z);
    }

    #[test]
    fn at() {
        let ray = Ray::new(point3(1.0f32, 2.0, 3.0), vec3(1.0, 1.0, 1.0));
        assert_eq!(ray.at(0.0), point3(1.0, 2.0, 3.0));

        let expected = 2.0 / 3f32.sqrt();
        assert_eq!(
            ray.at(2.0),
            point3(1.0 + expected, 2.0 + expected, 3.0 + expected),
        );
    }

    #[test]
    fn setters() {
        let mut ray = Ray::new(point3(0.0f32, 0.0, 0.0), Vec3f::X);
        ray.set_origin(point3(5.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), point3(6.0, 0.0, 0.0));
    }
}
