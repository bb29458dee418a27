//! Scalar math primitives usable in constant expressions.
//!
//! The generic container operations go through the [`Sqrt`](crate::Sqrt) and
//! [`Trig`](crate::Trig) traits, which delegate to the platform float
//! implementations at runtime. Those are not `const fn`, so this module
//! carries self-contained implementations of the same primitives that *are*:
//! a caller with compile-time-known inputs can evaluate square roots and
//! trigonometry in a `const` item without touching the runtime math library.
//!
//! Precision is a fixed cost/accuracy trade-off, not adaptive: [`sqrt`](self::f32::sqrt)
//! runs exactly 20 Newton-Raphson iterations and [`sin`](self::f32::sin)/[`cos`](self::f32::cos)
//! sum exactly 20 Taylor terms. Over a half-turn of input in either
//! direction, the results agree with the platform implementations to a few
//! units in the last place of single precision.
//!
//! # Examples
//!
//! ```
//! use linray::scalar;
//!
//! const SQRT2: f32 = scalar::f32::sqrt(2.0);
//! const COS0: f32 = scalar::f32::cos(0.0);
//!
//! assert!((SQRT2 - std::f32::consts::SQRT_2).abs() < 1e-6);
//! assert_eq!(COS0, 1.0);
//! ```

macro_rules! scalar_impl {
    ($m:ident, $t:ty) => {
        #[doc = concat!("Const-evaluable scalar math over [`prim@", stringify!($m), "`].")]
        pub mod $m {
            /// Computes `n!` as an accumulating product.
            ///
            /// Unlike the other primitives in this module, there is no
            /// platform implementation to fall back to; the same loop runs in
            /// every context.
            pub const fn factorial(n: $t) -> $t {
                let mut result = 1.0;
                let mut i = 1.0;
                while i <= n {
                    result *= i;
                    i += 1.0;
                }
                result
            }

            /// Raises `x` to an integer-valued exponent by repeated
            /// multiplication.
            ///
            /// The exponent is treated as a loop count; there is no general
            /// real-exponent support. Non-positive exponents yield 1. For
            /// runtime calls with real exponents, use the platform `powf`.
            pub const fn pow(x: $t, exponent: $t) -> $t {
                let mut result = 1.0;
                let mut i = 0.0;
                while i < exponent {
                    result *= x;
                    i += 1.0;
                }
                result
            }

            /// Computes the square root of `x` by Newton-Raphson iteration.
            ///
            /// Returns NaN for negative input and the input itself for 0
            /// and 1. The iteration count is fixed at 20, starting from
            /// `x / 2`; callers must not expect adaptive precision.
            pub const fn sqrt(x: $t) -> $t {
                if x < 0.0 {
                    return <$t>::NAN;
                }
                if x == 0.0 || x == 1.0 {
                    return x;
                }
                let mut current = x / 2.0;
                let mut i = 0;
                while i < 20 {
                    current = (current + x / current) / 2.0;
                    i += 1;
                }
                current
            }

            /// Computes the sine of the angle `x` (in radians) from a
            /// 20-term Taylor series about 0.
            pub const fn sin(x: $t) -> $t {
                if x == 0.0 {
                    return 0.0;
                }
                let mut result = 0.0;
                let mut i = 0.0;
                while i < 20.0 {
                    result += pow(-1.0, i) * pow(x, 2.0 * i + 1.0) / factorial(2.0 * i + 1.0);
                    i += 1.0;
                }
                result
            }

            /// Computes the cosine of the angle `x` (in radians) from a
            /// 20-term Taylor series about 0.
            pub const fn cos(x: $t) -> $t {
                if x == 0.0 {
                    return 1.0;
                }
                let mut result = 0.0;
                let mut i = 0.0;
                while i < 20.0 {
                    result += pow(-1.0, i) * pow(x, 2.0 * i) / factorial(2.0 * i);
                    i += 1.0;
                }
                result
            }
        }
    };
}

scalar_impl!(f32, f32);
scalar_impl!(f64, f64);
