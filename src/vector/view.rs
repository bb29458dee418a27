//! Field-access views for small vectors and points.
//!
//! [`Vector`]s and [`Point`]s of dimension 2 through 4 dereference to one of
//! the view structs in this module, making the leading elements accessible as
//! plain `x`/`y`/`z`/`w` fields.

use std::ops::{Deref, DerefMut};

use crate::Point;

use super::Vector;

macro_rules! view {
    ($name:ident, $dim:expr, $($field:ident),+) => {
        /// View struct that provides field-based access to the elements of a
        #[doc = concat!("", $dim, "-element [`Vector`] or [`Point`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(C)]
        pub struct $name<T> {
            $(pub $field: T,)+
            // Not constructible by the user. Obtained only by derefing a
            // `Vector` or `Point`, which guarantees the layout matches.
            _priv: (),
        }
    };
}

view!(XY, "2", x, y);
view!(XYZ, "3", x, y, z);
view!(XYZW, "4", x, y, z, w);

macro_rules! deref_impls {
    ($target:ident, $n:expr) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $target<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: the view is `repr(C)` with `$n` fields of type `T`
                // and a trailing zero-sized member, matching the layout of
                // the `repr(transparent)` wrapper around `[T; $n]`.
                unsafe { &*(self as *const Self as *const Self::Target) }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { &mut *(self as *mut Self as *mut Self::Target) }
            }
        }

        impl<T> Deref for Point<T, $n> {
            type Target = $target<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Point` transparently wraps a `Vector`.
                unsafe { &*(self as *const Self as *const Self::Target) }
            }
        }

        impl<T> DerefMut for Point<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { &mut *(self as *mut Self as *mut Self::Target) }
            }
        }
    };
}

deref_impls!(XY, 2);
deref_impls!(XYZ, 3);
deref_impls!(XYZW, 4);

#[cfg(test)]
mod tests {
    use crate::{point3, vec2, vec4};

    #[test]
    fn field_access() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 3, 4));

        let mut v = vec2(1, 2);
        v.y = 9;
        assert_eq!(v.into_array(), [1, 9]);

        let p = point3(1.5, 2.5, 3.5);
        assert_eq!(p.z, 3.5);
    }
}
