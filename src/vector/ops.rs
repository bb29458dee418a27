use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Tolerance;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

/// Approximate, size-polymorphic equality.
///
/// Vectors of different sizes always compare unequal. Vectors of the same
/// size compare equal when every pair of elements differs by less than
/// [`Tolerance::VECTOR`].
impl<T, const N: usize, const M: usize> PartialEq<Vector<T, M>> for Vector<T, N>
where
    T: Tolerance,
{
    fn eq(&self, other: &Vector<T, M>) -> bool {
        N == M
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| a.approx_eq(*b, T::VECTOR))
    }
}

impl<T, const N: usize, const M: usize> PartialEq<[T; M]> for Vector<T, N>
where
    T: Tolerance,
{
    fn eq(&self, other: &[T; M]) -> bool {
        *self == Vector(*other)
    }
}

impl<T, const N: usize, const M: usize> PartialEq<Vector<T, M>> for [T; N]
where
    T: Tolerance,
{
    fn eq(&self, other: &Vector<T, M>) -> bool {
        Vector(*self) == *other
    }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

macro_rules! elementwise_op {
    ($trait:ident, $method:ident, $trait_assign:ident, $method_assign:ident) => {
        impl<T, const N: usize> $trait for Vector<T, N>
        where
            T: $trait<Output = T>,
        {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs).map(|(a, b)| a.$method(b))
            }
        }

        impl<T, const N: usize> $trait_assign for Vector<T, N>
        where
            T: $trait<Output = T> + Copy,
        {
            fn $method_assign(&mut self, rhs: Self) {
                *self = self.$method(rhs);
            }
        }
    };
}

elementwise_op!(Add, add, AddAssign, add_assign);
elementwise_op!(Sub, sub, SubAssign, sub_assign);
elementwise_op!(Mul, mul, MulAssign, mul_assign);
elementwise_op!(Div, div, DivAssign, div_assign);

impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: Div<Output = T> + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs_ops {
    ($($ty:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                fn mul(self, rhs: Vector<$ty, N>) -> Vector<$ty, N> {
                    rhs * self
                }
            }

            /// Scalar-vector division mirrors [`Vector`]-scalar division:
            /// `s / v` divides every element of `v` by `s` (it is *not* an
            /// element-wise reciprocal).
            impl<const N: usize> Div<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                fn div(self, rhs: Vector<$ty, N>) -> Vector<$ty, N> {
                    rhs / self
                }
            }
        )+
    };
}

scalar_lhs_ops!(f32, f64);

impl<T, const N: usize> std::iter::Sum for Vector<T, N>
where
    T: Add<Output = T> + crate::Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}
