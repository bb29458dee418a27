//! Absolute positions in `N`-dimensional space.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{
    traits::{Number, Sqrt},
    Tolerance, Vector, Zero,
};

/// A 2-dimensional point.
pub type Point2<T> = Point<T, 2>;
/// A 2-dimensional point with [`f32`] elements.
pub type Point2f = Point2<f32>;
/// A 3-dimensional point.
pub type Point3<T> = Point<T, 3>;
/// A 3-dimensional point with [`f32`] elements.
pub type Point3f = Point3<f32>;

/// An absolute position in `N`-dimensional space.
///
/// [`Point`] stores its coordinates exactly like a [`Vector`], but the two
/// types are kept apart because they mean different things: a point is a
/// location, a vector is an offset. Points deliberately carry no arithmetic
/// operators; to translate a point or take the offset between two points,
/// convert to [`Vector`], compute there, and convert back.
///
/// Conversion in either direction is explicit, via [`Point::to_vec`] and
/// [`Point::from_vec`] (or the equivalent [`From`] impls), and is a pure
/// component-wise copy.
///
/// Like [`Vector`], `==` compares approximately, with per-element tolerance
/// [`Tolerance::VECTOR`], and points of dimension 2 through 4 expose their
/// coordinates as `x`/`y`/`z`/`w` fields.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Point<T, const N: usize>(pub(crate) Vector<T, N>);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Point<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Point<T, N> {}

impl<T: Zero, const N: usize> Point<T, N> {
    /// The origin, with every coordinate 0.
    pub const ORIGIN: Self = Self(Vector::ZERO);
}

impl<T, const N: usize> Point<T, N> {
    /// Reinterprets `self` as the offset from the origin.
    #[inline]
    pub fn to_vec(self) -> Vector<T, N> {
        self.0
    }

    /// Reinterprets a [`Vector`] as the point it offsets the origin to.
    #[inline]
    pub const fn from_vec(vec: Vector<T, N>) -> Self {
        Self(vec)
    }

    /// Returns a reference to the coordinates as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        self.0.as_array()
    }

    /// Converts this [`Point`] into an `N`-element coordinate array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0.into_array()
    }

    /// Applies a closure to each coordinate, returning a new point.
    pub fn map<F, U>(self, f: F) -> Point<U, N>
    where
        F: FnMut(T) -> U,
    {
        Point(self.0.map(f))
    }

    /// Returns the squared distance between `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self.to_vec() - other.to_vec()).length2()
    }

    /// Returns the distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let a = point3(1.0, 2.0, 3.0);
    /// let b = point3(1.0, 1.0, 3.0);
    /// assert_eq!(a.distance(b), 1.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self.to_vec() - other.to_vec()).length()
    }
}

impl<T, const N: usize, const M: usize> PartialEq<Point<T, M>> for Point<T, N>
where
    T: Tolerance,
{
    fn eq(&self, other: &Point<T, M>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> Default for Point<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self(Vector::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(Vector(value))
    }
}

impl<T, const N: usize> From<Point<T, N>> for [T; N] {
    #[inline]
    fn from(value: Point<T, N>) -> Self {
        value.0.into_array()
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
    #[inline]
    fn from(value: Point<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Point<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T, const N: usize> fmt::Display for Point<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Constructs a [`Point2`] from its two coordinates.
#[inline]
pub const fn point2<T>(x: T, y: T) -> Point2<T> {
    Point(crate::vec2(x, y))
}

/// Constructs a [`Point3`] from its three coordinates.
#[inline]
pub const fn point3<T>(x: T, y: T, z: T) -> Point3<T> {
    Point(crate::vec3(x, y, z))
}

#[cfg(test)]
mod tests {
    use crate::vec3;

    use super::*;

    #[test]
    fn arithmetic_goes_through_vectors() {
        let a = point3(1.0, 2.0, 3.0);
        let b = point3(0.0, 2.0, 1.0);
        assert_eq!(a.to_vec() - b.to_vec(), vec3(1.0, 0.0, 2.0));

        let translated = Point3f::from_vec(b.to_vec() + vec3(1.0, 0.0, 2.0));
        assert_eq!(translated, a);
    }

    #[test]
    fn distance() {
        let a = point3(1.0, 2.0, 3.0);
        let b = point3(1.0, 1.0, 3.0);
        assert_eq!(a.distance(b), 1.0);
        assert_eq!(b.distance(a), 1.0);
        assert_eq!(a.distance2(b), 1.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn conversions() {
        let p = point2(3.0, 4.0);
        assert_eq!(p.to_vec().length(), 5.0);
        assert_eq!(Point2f::from_vec(p.to_vec()), p);
        assert_eq!(Point2f::from([3.0, 4.0]), p);
    }

    #[test]
    fn equality() {
        assert_eq!(point2(1.0f32, 2.0), point2(1.0, 2.0 + 1e-7));
        assert_ne!(point2(1.0f32, 2.0), point2(1.0, 2.1));
        // Differently sized points never compare equal.
        assert_ne!(point2(1.0f32, 2.0), point3(1.0f32, 2.0, 0.0));
    }
}
