// src/numerics/types/traits.rs
// Element trait shared by Matrix and the fixed-arity vectors.

/// Scalar is the element trait for matrices and vectors.
///
/// It requires `Copy`, `PartialOrd` and the four arithmetic operators on
/// `Self`, plus the two identities. `to_f64` is only used for tolerance
/// comparisons and may lose precision for wide integer types.
pub trait Scalar:
    Copy
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn to_f64(self) -> f64 { self as f64 }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn zero() -> Self { 0 }
            fn one() -> Self { 1 }
            fn to_f64(self) -> f64 { self as f64 }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i32, i64, isize);
