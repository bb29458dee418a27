use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{traits::Number, Tolerance, Vector};

use super::Matrix;

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[row][col]
    }
}

/// Approximate, size-polymorphic equality with the
/// [`Tolerance::MATRIX`] per-element tolerance.
impl<T, const R: usize, const C: usize, const R2: usize, const C2: usize>
    PartialEq<Matrix<T, R2, C2>> for Matrix<T, R, C>
where
    T: Tolerance,
{
    fn eq(&self, other: &Matrix<T, R2, C2>) -> bool {
        R == R2
            && C == C2
            && self
                .0
                .iter()
                .flatten()
                .zip(other.0.iter().flatten())
                .all(|(a, b)| a.approx_eq(*b, T::MATRIX))
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
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
        impl<T, const R: usize, const C: usize> $trait for Matrix<T, R, C>
        where
            T: $trait<Output = T> + Copy,
        {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::from_fn(|r, c| self.0[r][c].$method(rhs.0[r][c]))
            }
        }

        impl<T, const R: usize, const C: usize> $trait_assign for Matrix<T, R, C>
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

/// Matrix-matrix product. The operand dimensions are checked at compile
/// time: an `R x C` matrix composes only with a `C x K` one.
impl<T, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, K>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        Matrix::from_fn(|r, k| self.row(r).dot(rhs.col(k)))
    }
}

/// Matrix-vector product, applying the linear map to `rhs`.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|r| self.row(r).dot(rhs))
    }
}

/// Vector-matrix product. Defined as the matrix-vector product with the
/// operands swapped, so `v * m == m * v`; the vector is treated as a column
/// on either side.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Vector<T, R> {
        rhs * self
    }
}

impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Div<Output = T> + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs_mul {
    ($($ty:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$ty, R, C>> for $ty {
                type Output = Matrix<$ty, R, C>;

                fn mul(self, rhs: Matrix<$ty, R, C>) -> Matrix<$ty, R, C> {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat2f, Mat3f, Matrix};

    #[test]
    fn matrix_product() {
        let a = Mat3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let b = Mat3f::from_rows([[10.0, 11.0, 12.0], [13.0, 14.0, 15.0], [16.0, 17.0, 18.0]]);
        let expected = Mat3f::from_rows([
            [84.0, 90.0, 96.0],
            [201.0, 216.0, 231.0],
            [318.0, 342.0, 366.0],
        ]);
        assert_eq!(a * b, expected);

        assert_eq!(a * Mat3f::IDENTITY, a);
        assert_eq!(Mat3f::IDENTITY * a, a);

        // Non-square products change the output dimension.
        let wide = Matrix::from_rows([[1.0, 0.0, 1.0], [0.0, 1.0, 0.0]]);
        let tall = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(wide * tall, Mat2f::from_rows([[6.0, 8.0], [3.0, 4.0]]));
    }

    #[test]
    fn matrix_vector_product() {
        let m = Mat3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(m * v, vec3(14.0, 32.0, 50.0));
        assert_eq!(Mat3f::IDENTITY * v, v);

        // The vector-matrix product swaps the operands rather than treating
        // the vector as a row.
        assert_eq!(v * m, m * v);
    }

    #[test]
    fn elementwise() {
        let a = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2f::from_rows([[4.0, 3.0], [2.0, 1.0]]);
        assert_eq!(a + b, Mat2f::from_rows([[5.0, 5.0], [5.0, 5.0]]));
        assert_eq!((a + b) - b, a);
        assert_eq!(-a, Mat2f::from_rows([[-1.0, -2.0], [-3.0, -4.0]]));
    }

    #[test]
    fn scaling() {
        let a = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a * 2.0, Mat2f::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!((a * 2.0) / 2.0, a);

        let mut m = a;
        m *= 3.0;
        m /= 3.0;
        assert_eq!(m, a);
    }

    #[test]
    fn size_mismatch_is_unequal() {
        let square = Mat2f::IDENTITY;
        let wide: Matrix<f32, 2, 3> = Matrix::ZERO;
        assert_ne!(square, wide);
    }
}
