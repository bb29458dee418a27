use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0 as $types;
            }

            impl One for $types {
                const ONE: Self = 1 as $types;
            }
        )+
    };
}
zero_one!(f32, f64, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
///
/// The float impls delegate to the platform implementation. For square roots
/// usable in constant expressions, see [`crate::scalar`].
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions.
///
/// The float impls delegate to the platform implementation. For sine and
/// cosine usable in constant expressions, see [`crate::scalar`].
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and
/// [`f32::max`] functions ([`f64::min`] and [`f64::max`] respectively).
/// Built-in integer types implement it in terms of [`Ord::min`] and
/// [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Types with an absolute-value operation.
pub trait Abs {
    fn abs(self) -> Self;
}

macro_rules! signed_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128);

macro_rules! float_fns {
    ($($types:ty),+) => {
        $(
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )+
    };
}
float_fns!(f32, f64);

/// Types that can express angles, providing the constants needed to convert
/// degrees to radians.
pub trait Angle {
    /// The constant π.
    const PI: Self;
    /// The number of degrees in half a turn.
    const HALF_TURN: Self;
}

impl Angle for f32 {
    const PI: Self = std::f32::consts::PI;
    const HALF_TURN: Self = 180.0;
}

impl Angle for f64 {
    const PI: Self = std::f64::consts::PI;
    const HALF_TURN: Self = 180.0;
}

/// Element types with defined tolerances for the container `PartialEq` impls.
///
/// Two containers compare equal when every element pair differs by strictly
/// less than the container's tolerance. Matrices use a looser tolerance than
/// vectors and points because their products accumulate rounding error across
/// the inner dimension; the two constants are deliberately distinct.
pub trait Tolerance: Copy {
    /// Per-element tolerance for [`Vector`](crate::Vector) and
    /// [`Point`](crate::Point) comparisons.
    const VECTOR: Self;
    /// Per-element tolerance for [`Matrix`](crate::Matrix) comparisons.
    const MATRIX: Self;

    /// Whether `self` and `other` differ by strictly less than `tolerance`.
    fn approx_eq(self, other: Self, tolerance: Self) -> bool;
}

/// Types that define the minimum distance at which a ray hit counts.
///
/// Hits closer than [`T_MIN`][Self::T_MIN] are discarded so that rays
/// starting on (or numerically near) a surface do not immediately
/// re-intersect it.
pub trait RayEpsilon {
    /// Smallest intersection distance considered a valid hit.
    const T_MIN: Self;
}

macro_rules! float_consts {
    ($($types:ty),+) => {
        $(
            impl Tolerance for $types {
                const VECTOR: Self = 1e-6;
                const MATRIX: Self = 1e-4;

                fn approx_eq(self, other: Self, tolerance: Self) -> bool {
                    (self - other).abs() < tolerance
                }
            }

            impl RayEpsilon for $types {
                const T_MIN: Self = 1e-4;
            }
        )+
    };
}
float_consts!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerances() {
        assert!(1.0f32.approx_eq(1.0 + 1e-7, f32::VECTOR));
        assert!(!1.0f32.approx_eq(1.0 + 1e-5, f32::VECTOR));
        assert!(1.0f32.approx_eq(1.0 + 1e-5, f32::MATRIX));
        assert!(!f32::NAN.approx_eq(f32::NAN, f32::VECTOR));
    }
}
