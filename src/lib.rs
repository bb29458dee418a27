//! A small linear algebra library for geometry processing, plus the ray
//! primitives built on top of it.
//!
//! Provided types:
//!
//! - [`Vector`], a free direction-and-magnitude quantity, with type aliases
//!   [`Vec2`], [`Vec3`] and [`Vec4`], and constructors [`vec2`], [`vec3`]
//!   and [`vec4`].
//! - [`Point`], an absolute position, with aliases [`Point2`] and [`Point3`]
//!   and constructors [`point2`] and [`point3`].
//! - [`Matrix`], a compile-time dimension-checked dense matrix, with square
//!   aliases [`Mat2`], [`Mat3`] and [`Mat4`].
//! - [`Ray`], a half-line with an always-normalized direction, and the
//!   [`Sphere`] and [`Triangle`] primitives it intersects with.
//! - The [`scalar`] module, `const fn` implementations of `sqrt`, `sin`,
//!   `cos`, `pow` and `factorial` for use in constant expressions.
//!
//! Aliases ending in `f` fix the element type to [`f32`], the default
//! element type for geometric work.
//!
//! # Examples
//!
//! ```
//! use linray::*;
//!
//! // Rotate the x axis a quarter turn around z.
//! let v = Vec3f::X.rotate(0.0, 0.0, to_radians(90.0));
//! assert_eq!(v, Vec3f::Y);
//!
//! // Trace a ray against a sphere.
//! let sphere = Sphere::new(point3(0.0, 0.0, 5.0), 1.0);
//! let ray = Ray::new(Point3f::ORIGIN, Vec3f::Z);
//! let t = sphere.intersection_dist(&ray);
//! assert_eq!(ray.at(t), point3(0.0, 0.0, 4.0));
//! assert_eq!(sphere.normal_at(ray.at(t)), -Vec3f::Z);
//! ```

mod geometry;
mod matrix;
mod point;
mod ray;
pub mod scalar;
mod traits;
mod vector;

pub use geometry::{Sphere, Spheref, Triangle};
pub use matrix::{Mat2, Mat2f, Mat3, Mat3f, Mat4, Mat4f, Matrix};
pub use point::{point2, point3, Point, Point2, Point2f, Point3, Point3f};
pub use ray::{Ray, Ray3, Ray3f};
pub use traits::{Abs, Angle, MinMax, Number, One, RayEpsilon, Sqrt, Tolerance, Trig, Zero};
pub use vector::{vec2, vec3, vec4, Vec2, Vec2f, Vec3, Vec3f, Vec4, Vec4f, Vector, XY, XYZ, XYZW};

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use linray::*;
/// let turn = to_radians(180.0f32);
/// assert!((turn - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn to_radians<T>(degrees: T) -> T
where
    T: Number + Angle,
{
    degrees * T::PI / T::HALF_TURN
}
