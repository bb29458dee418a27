use std::{array, fmt};

use crate::{
    traits::{Number, Sqrt},
    Abs, Mat3, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// A [`Vector`] is a free direction-and-magnitude quantity. The companion
/// [`Point`][crate::Point] type shares its storage but represents an absolute
/// coordinate; the two convert into each other explicitly.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly
///   create vectors from provided values, in `const` contexts too.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Arrays convert via the [`From`] impl, and [`Default`] zero-initializes.
/// - [`Vector::ZERO`] and the axis units `Vector::X`, `Vector::Y`,
///   `Vector::Z`, `Vector::W` are available as constants.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields
///   `x`, `y`, `z`, or `w`.
/// - The [`Index`]/[`IndexMut`] impls behave like arrays, including the panic
///   on out-of-bounds access.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`]
///   expose the underlying storage.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow
///   safe transmutation when the element type `T` also allows this.
///
/// # Equality
///
/// `==` is *approximate*: vectors of different sizes never compare equal, and
/// same-size vectors compare equal when every element pair differs by less
/// than [`Tolerance::VECTOR`][crate::Tolerance::VECTOR].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let v: Vec3f = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let v: Vec3f = Vector::from_fn(|i| i as f32 + 100.0);
    /// assert_eq!(v, vec3(100.0, 101.0, 102.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|e| e * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original
    /// elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of
    /// length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of
    /// length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this
    /// method is often shorter and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// assert_eq!(vec2(4.0, 0.0).length2(), 16.0);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// assert_eq!(vec3(3.0, 4.0, 0.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The division is not guarded: normalizing a zero-length vector divides
    /// by zero and yields non-finite elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let v = vec3(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(v, vec3(0.6, 0.8, 0.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product between `self` and `other` (the sum of the
    /// element-wise products).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T> Vector<T, 3> {
    /// Rotates `self` by the given yaw, pitch and roll angles (in radians).
    ///
    /// Equivalent to multiplying by [`Mat3::rotation`] — see there for the
    /// axis assignments and the composition order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let v = vec3(1.0, 0.0, 0.0);
    /// assert_eq!(v.rotate(0.0, 0.0, 0.0), v);
    /// assert_eq!(v.rotate(0.0, 0.0, 90f32.to_radians()), Vec3f::Y);
    /// ```
    pub fn rotate(self, yaw: T, pitch: T, roll: T) -> Self
    where
        T: Number + Trig,
    {
        Mat3::rotation(yaw, pitch, roll) * self
    }

    /// Reflects `self` off a surface with the given normal.
    ///
    /// `normal` must be unit length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let v = vec3(1.0, -1.0, 0.0);
    /// assert_eq!(v.reflect(Vec3f::Y), vec3(1.0, 1.0, 0.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        self - normal * ((T::ONE + T::ONE) * self.dot(normal))
    }

    /// Refracts `self` through a surface with the given normal, following
    /// Snell's law.
    ///
    /// `ratio` is the ratio of the refractive indices on the incident and
    /// transmitted sides of the surface. Both `self` and `normal` must be
    /// unit length. Total internal reflection is not guarded: beyond the
    /// critical angle the returned vector is physically meaningless, and
    /// callers that care must check the discriminant themselves.
    ///
    /// # Examples
    ///
    /// A ratio of 1 leaves the direction unchanged:
    ///
    /// ```
    /// # use linray::*;
    /// let down = -Vec3f::Y;
    /// assert_eq!(down.refract(Vec3f::Y, 1.0), down);
    /// ```
    pub fn refract(self, normal: Self, ratio: T) -> Self
    where
        T: Number + Sqrt + MinMax + Abs,
    {
        let cos_theta = (-self).dot(normal).min(T::ONE);
        let perpendicular = (self + normal * cos_theta) * ratio;
        let parallel = normal * -(T::ONE - perpendicular.length2()).abs().sqrt();
        perpendicular + parallel
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
