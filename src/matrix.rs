use std::array;
use std::fmt;

use crate::{
    traits::{Number, Trig},
    One, Vector, Zero,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with `R` rows and `C` columns, stored in row-major order.
///
/// A `Matrix<T, R, C>` is a linear map from `C`-dimensional to
/// `R`-dimensional space. The `*` operator applies it to a [`Vector`] or
/// composes it with another [`Matrix`], and the dimensions of both operands
/// are checked at compile time.
///
/// # Construction
///
/// - [`Matrix::from_rows`] creates a matrix from an array of rows, in `const`
///   contexts too.
/// - [`Matrix::from_fn`] invokes a closure with the row and column index of
///   each element.
/// - [`Matrix::ZERO`] and (for square matrices) [`Matrix::IDENTITY`] are
///   available as constants.
/// - [`Mat3::rotation`] and the per-axis [`Mat3::rotation_x`],
///   [`Mat3::rotation_y`] and [`Mat3::rotation_z`] build 3D rotations.
///
/// # Equality
///
/// Like [`Vector`], `==` is approximate: matrices of different dimensions
/// never compare equal, and same-size matrices compare equal when every
/// element pair differs by less than
/// [`Tolerance::MATRIX`][crate::Tolerance::MATRIX]. The matrix tolerance is
/// looser than the vector tolerance, since matrix products accumulate more
/// rounding error per element.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element initialized to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// The identity matrix, with 1 along the diagonal and 0 elsewhere.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let m = Mat2f::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a matrix with every element initialized to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; C]; R])
    }

    /// Creates a matrix where each element is initialized by invoking a
    /// closure with its row and column index.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|r| array::from_fn(|c| cb(r, c))))
    }

    /// Returns a reference to the rows of the matrix.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Converts this [`Matrix`] into its array of rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Returns a reference to the element at the given row and column, or
    /// [`None`] if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at the given row and
    /// column, or [`None`] if either index is out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns the given row as a [`Vector`].
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector(self.0[row])
    }

    /// Returns a mutable view of the given row.
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.0[row]
    }

    /// Returns the given column as a [`Vector`].
    ///
    /// Panics if `col` is out of bounds.
    #[inline]
    pub fn col(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|r| self.0[r][col])
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns the transpose of this matrix, flipping it across its diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let m = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ]);
    /// assert_eq!(m.transpose(), Matrix::from_rows([
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    ///     [3.0, 6.0],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|r, c| self.0[c][r])
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Computes the determinant of this matrix.
    ///
    /// Determinants are only defined for 2x2 and 3x3 matrices; other sizes
    /// do not have this method and fail to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let m = Mat2f::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(m.determinant(), -2.0);
    /// ```
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Computes the determinant of this matrix, by cofactor expansion along
    /// the first row.
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * Matrix([[e, f], [h, i]]).determinant() - b * Matrix([[d, f], [g, i]]).determinant()
            + c * Matrix([[d, e], [g, h]]).determinant()
    }
}

impl<T: Number + Trig> Matrix<T, 3, 3> {
    /// Builds a rotation matrix from yaw, pitch and roll angles (in
    /// radians).
    ///
    /// Yaw rotates about the x-axis, pitch about the y-axis and roll about
    /// the z-axis. The rotations are applied to a vector in the order pitch,
    /// roll, yaw.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linray::*;
    /// let m = Mat3f::rotation(0.0, 0.0, 90f32.to_radians());
    /// assert_eq!(m * Vec3f::X, Vec3f::Y);
    /// ```
    pub fn rotation(yaw: T, pitch: T, roll: T) -> Self {
        Self::rotation_x(yaw) * (Self::rotation_z(roll) * Self::rotation_y(pitch))
    }

    /// Builds a matrix describing a counterclockwise rotation around the
    /// x-axis by `angle` radians.
    pub fn rotation_x(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let (o, l) = (T::ZERO, T::ONE);
        Self([[l, o, o], [o, cos, -sin], [o, sin, cos]])
    }

    /// Builds a matrix describing a counterclockwise rotation around the
    /// y-axis by `angle` radians.
    pub fn rotation_y(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let (o, l) = (T::ZERO, T::ONE);
        Self([[cos, o, sin], [o, l, o], [-sin, o, cos]])
    }

    /// Builds a matrix describing a counterclockwise rotation around the
    /// z-axis by `angle` radians.
    pub fn rotation_z(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let (o, l) = (T::ZERO, T::ONE);
        Self([[cos, -sin, o], [sin, cos, o], [o, o, l]])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
    T: fmt::Display + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, _) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.row(i))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{vec3, Vec3f};

    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Mat2f::IDENTITY, Mat2f::from_rows([[1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(Mat3f::ZERO.row(1), Vec3f::ZERO);
        assert_eq!(Mat3f::IDENTITY.col(2), Vec3f::Z);
    }

    #[test]
    fn access() {
        let mut m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.get(0, 1), Some(&2.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        m[(0, 1)] = 9.0;
        assert_eq!(m.row(0), crate::vec2(1.0, 9.0));
        assert_eq!(m.col(1), crate::vec2(9.0, 4.0));

        m.row_mut(1)[0] = 7.0;
        assert_eq!(m.row(1), crate::vec2(7.0, 4.0));

        assert_eq!(Mat2f::splat(3.0), Mat2f::from_rows([[3.0, 3.0], [3.0, 3.0]]));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access() {
        let _ = Mat2f::IDENTITY[(0, 2)];
    }

    #[test]
    fn transpose() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.transpose().into_rows(), [[1, 4], [2, 5], [3, 6]]);
        assert_eq!(m.transpose().transpose().into_rows(), m.into_rows());
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]).determinant(), -2.0);

        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        let m = Mat3f::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m.determinant(), -306.0);

        // A rotation preserves volume.
        let r = Mat3f::rotation(0.5, 1.0, -0.25);
        assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation() {
        assert_eq!(Mat3f::rotation(0.0, 0.0, 0.0), Mat3f::IDENTITY);

        let quarter = 90f32.to_radians();
        assert_eq!(Mat3f::rotation_z(quarter) * Vec3f::X, Vec3f::Y);
        assert_eq!(Mat3f::rotation_z(quarter) * Vec3f::Y, -Vec3f::X);
        assert_eq!(Mat3f::rotation_x(quarter) * Vec3f::Y, Vec3f::Z);
        assert_eq!(Mat3f::rotation_y(quarter) * Vec3f::Z, Vec3f::X);

        // Pitch is applied first, then roll, then yaw.
        let one_of_each = Mat3f::rotation(0.1, 0.2, 0.3);
        let by_hand = Mat3f::rotation_x(0.1) * (Mat3f::rotation_z(0.3) * Mat3f::rotation_y(0.2));
        assert_eq!(one_of_each, by_hand);
        assert_eq!(
            one_of_each * vec3(1.0, 2.0, 3.0),
            Mat3f::rotation_x(0.1) * (Mat3f::rotation_z(0.3) * (Mat3f::rotation_y(0.2) * vec3(1.0, 2.0, 3.0))),
        );
    }

    #[test]
    fn fmt() {
        let m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(format!("{m}"), "[(1, 2), (3, 4)]");
        assert_eq!(format!("{m:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
    }
}
