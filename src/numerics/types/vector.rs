// src/numerics/types/vector.rs
// Fixed-arity vectors Vec2, Vec3 and Vec4, generic over Scalar.
//
// Each arity is an independent struct with flat named fields. The shared
// surface (construction, indexing, arithmetic, matrix conversion, serde) is
// generated per arity by `fixed_vector!`. Vector-vector arithmetic accepts any
// right-hand element type U with T: From<U>.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::config::ApproxConfig;
use crate::error::{GeometryError, Result};
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::Scalar;

// Expands to `$t` once per field; used to spell out tuple types.
macro_rules! field_type {
    ($_field:ident, $t:ty) => {
        $t
    };
}

macro_rules! fixed_vector {
    ($(#[$meta:meta])* $name:ident, $n:literal, [$($field:ident : $idx:literal),+]) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub struct $name<T: Scalar = f32> {
            $(pub $field: T,)+
        }

        impl<T: Scalar> $name<T> {
            /// Number of components.
            pub const LEN: usize = $n;

            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Every component set to `value`.
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            pub fn to_array(&self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Checked component access.
            pub fn component(&self, i: usize) -> Result<&T> {
                match i {
                    $($idx => Ok(&self.$field),)+
                    _ => Err(GeometryError::Index { index: i, len: $n }),
                }
            }

            /// Checked mutable component access.
            pub fn component_mut(&mut self, i: usize) -> Result<&mut T> {
                match i {
                    $($idx => Ok(&mut self.$field),)+
                    _ => Err(GeometryError::Index { index: i, len: $n }),
                }
            }

            /// Sum of pairwise component products.
            pub fn dot(&self, other: &Self) -> T {
                T::zero() $(+ self.$field * other.$field)+
            }

            /// Zeroes every component.
            pub fn clear(&mut self) {
                *self = Self::zero();
            }

            /// Snapshot as a 1 x N matrix.
            pub fn to_matrix_row(&self) -> Matrix<T> {
                Matrix::from_raw(vec![self.to_array().to_vec()], 1, $n)
            }

            /// Snapshot as an N x 1 matrix.
            pub fn to_matrix_col(&self) -> Matrix<T> {
                Matrix::from_raw(vec![$(vec![self.$field]),+], $n, 1)
            }

            /// Row vector times matrix. `rhs` must have N rows; the result is
            /// `1 x rhs.cols()`.
            pub fn mul_matrix(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
                if rhs.rows() != $n {
                    return Err(GeometryError::dimension(
                        "vector_mul",
                        format!(
                            "{} needs a matrix with {} rows, got {}x{}",
                            stringify!($name),
                            $n,
                            rhs.rows(),
                            rhs.cols()
                        ),
                    ));
                }
                let values = (0..rhs.cols())
                    .map(|c| T::zero() $(+ self.$field * rhs[$idx][c])+)
                    .collect::<Vec<T>>();
                let cols = values.len();
                Ok(Matrix::from_raw(vec![values], 1, cols))
            }

            /// Componentwise comparison under the given tolerances.
            pub fn approx_eq(&self, other: &Self, config: &ApproxConfig) -> bool {
                $(config.eq_f64(self.$field.to_f64(), other.$field.to_f64()))&&+
            }
        }

        impl<T> AbsDiffEq for $name<T>
        where
            T: Scalar + AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T> RelativeEq for $name<T>
        where
            T: Scalar + RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        impl<T: Scalar> Default for $name<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T: Scalar> From<[T; $n]> for $name<T> {
            fn from(array: [T; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> From<&[T; $n]> for $name<T> {
            fn from(array: &[T; $n]) -> Self {
                Self::from(*array)
            }
        }

        impl<T: Scalar> From<($(field_type!($field, T),)+)> for $name<T> {
            fn from(tuple: ($(field_type!($field, T),)+)) -> Self {
                let ($($field,)+) = tuple;
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Scalar> From<$name<T>> for ($(field_type!($field, T),)+) {
            fn from(v: $name<T>) -> Self {
                ($(v.$field,)+)
            }
        }

        /// Exactly N elements are required.
        impl<T: Scalar> TryFrom<&[T]> for $name<T> {
            type Error = GeometryError;

            fn try_from(values: &[T]) -> Result<Self> {
                if values.len() != $n {
                    return Err(GeometryError::dimension(
                        "vector_from_slice",
                        format!(
                            "{} needs {} elements, got {}",
                            stringify!($name),
                            $n,
                            values.len()
                        ),
                    ));
                }
                Ok(Self { $($field: values[$idx]),+ })
            }
        }

        /// Accepts a 1 x N or an N x 1 matrix.
        impl<T: Scalar> TryFrom<&Matrix<T>> for $name<T> {
            type Error = GeometryError;

            fn try_from(m: &Matrix<T>) -> Result<Self> {
                match m.shape() {
                    (1, $n) => Ok(Self { $($field: m[0][$idx]),+ }),
                    ($n, 1) => Ok(Self { $($field: m[$idx][0]),+ }),
                    (rows, cols) => Err(GeometryError::dimension(
                        "vector_from_matrix",
                        format!(
                            "{} needs a 1x{} or {}x1 matrix, got {}x{}",
                            stringify!($name),
                            $n,
                            $n,
                            rows,
                            cols
                        ),
                    )),
                }
            }
        }

        impl<T: Scalar> From<$name<T>> for Matrix<T> {
            /// Converts into a 1 x N row matrix.
            fn from(v: $name<T>) -> Self {
                v.to_matrix_row()
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, i: usize) -> &T {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("index {} out of bounds for {}", i, stringify!($name)),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index {} out of bounds for {}", i, stringify!($name)),
                }
            }
        }

        impl<T, U> AddAssign<$name<U>> for $name<T>
        where
            T: Scalar + From<U>,
            U: Scalar,
        {
            fn add_assign(&mut self, rhs: $name<U>) {
                $(self.$field = self.$field + T::from(rhs.$field);)+
            }
        }

        impl<T, U> SubAssign<$name<U>> for $name<T>
        where
            T: Scalar + From<U>,
            U: Scalar,
        {
            fn sub_assign(&mut self, rhs: $name<U>) {
                $(self.$field = self.$field - T::from(rhs.$field);)+
            }
        }

        impl<T, U> MulAssign<$name<U>> for $name<T>
        where
            T: Scalar + From<U>,
            U: Scalar,
        {
            fn mul_assign(&mut self, rhs: $name<U>) {
                $(self.$field = self.$field * T::from(rhs.$field);)+
            }
        }

        impl<T: Scalar> AddAssign<T> for $name<T> {
            fn add_assign(&mut self, rhs: T) {
                $(self.$field = self.$field + rhs;)+
            }
        }

        impl<T: Scalar> SubAssign<T> for $name<T> {
            fn sub_assign(&mut self, rhs: T) {
                $(self.$field = self.$field - rhs;)+
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        impl<T: Scalar> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$field = self.$field / rhs;)+
            }
        }

        impl<T, U> Add<$name<U>> for $name<T>
        where
            T: Scalar + From<U>,
            U: Scalar,
        {
            type Output = Self;

            fn add(mut self, rhs: $name<U>) -> Self {
                self += rhs;
                self
            }
        }

        impl<T, U> Sub<$name<U>> for $name<T>
        where
            T: Scalar + From<U>,
            U: Scalar,
        {
            type Output = Self;

            fn sub(mut self, rhs: $name<U>) -> Self {
                self -= rhs;
                self
            }
        }

        /// Componentwise product; see `dot` for the scalar product.
        impl<T, U> Mul<$name<U>> for $name<T>
        where
            T: Scalar + From<U>,
            U: Scalar,
        {
            type Output = Self;

            fn mul(mut self, rhs: $name<U>) -> Self {
                self *= rhs;
                self
            }
        }

        impl<T: Scalar> Add<T> for $name<T> {
            type Output = Self;

            fn add(mut self, rhs: T) -> Self {
                self += rhs;
                self
            }
        }

        impl<T: Scalar> Sub<T> for $name<T> {
            type Output = Self;

            fn sub(mut self, rhs: T) -> Self {
                self -= rhs;
                self
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(mut self, rhs: T) -> Self {
                self *= rhs;
                self
            }
        }

        impl<T: Scalar> Div<T> for $name<T> {
            type Output = Self;

            fn div(mut self, rhs: T) -> Self {
                self /= rhs;
                self
            }
        }

        impl<'a, T: Scalar> Mul<&'a Matrix<T>> for $name<T> {
            type Output = Result<Matrix<T>>;

            fn mul(self, rhs: &'a Matrix<T>) -> Self::Output {
                self.mul_matrix(rhs)
            }
        }

        impl<T: Scalar + fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, value) in self.to_array().iter().enumerate() {
                    if i != 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }

        impl<T> Serialize for $name<T>
        where
            T: Scalar + Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                ($(&self.$field,)+).serialize(serializer)
            }
        }

        impl<'de, T> Deserialize<'de> for $name<T>
        where
            T: Scalar + Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let ($($field,)+) = <($(field_type!($field, T),)+)>::deserialize(deserializer)?;
                Ok(Self { $($field),+ })
            }
        }
    };
}

fixed_vector!(
    /// Two-component vector `(x, y)`.
    Vec2, 2, [x: 0, y: 1]
);

fixed_vector!(
    /// Three-component vector `(x, y, z)`.
    Vec3, 3, [x: 0, y: 1, z: 2]
);

fixed_vector!(
    /// Four-component vector `(x, y, z, w)`.
    Vec4, 4, [x: 0, y: 1, z: 2, w: 3]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_add_sub() {
        let a = Vec3::new(1.0_f32, 2.0_f32, 3.0_f32);
        let b = Vec3::new(4.0_f32, 5.0_f32, 6.0_f32);

        let sum = a + b;
        assert_eq!(sum, Vec3::new(5.0, 7.0, 9.0));

        let diff = sum - a;
        assert_eq!(diff, b);
    }

    #[test]
    fn test_vector_default_and_generic_type() {
        let v: Vec3 = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(v.z, 1.0_f32);

        let v64: Vec3<f64> = Vec3::new(1.0, 2.0, 3.0);
        let w64: Vec3<f64> = Vec3::new(3.0, 2.0, 1.0);
        assert_eq!(v64 + w64, Vec3::splat(4.0));

        assert_eq!(Vec4::<i32>::default(), Vec4::new(0, 0, 0, 0));
    }

    #[test]
    fn test_scalar_ops() {
        let mut v = Vec2::new(2, 4);
        v += 1;
        assert_eq!(v, Vec2::new(3, 5));
        v -= 1;
        v *= 3;
        assert_eq!(v, Vec2::new(6, 12));
        v /= 2;
        assert_eq!(v, Vec2::new(3, 6));

        let w = ((Vec4::splat(1.0f64) + 1.0) * 3.0 - 2.0) / 2.0;
        assert_eq!(w, Vec4::splat(2.0));
    }

    #[test]
    fn test_componentwise_mul_and_dot() {
        let a = Vec2::new(3, 7);
        let b = Vec2::new(2, 5);
        assert_eq!(a * b, Vec2::new(6, 35));
        assert_eq!(a.dot(&b), 41);

        let mut c = Vec4::new(1, 2, 3, 4);
        c *= Vec4::new(2, 2, 2, 2);
        assert_eq!(c.dot(&Vec4::splat(1)), 20);
    }

    #[test]
    fn test_indexing() {
        let mut v = Vec4::new(1, 2, 3, 4);
        assert_eq!(v[0], 1);
        assert_eq!(v[3], 4);
        v[2] = 30;
        assert_eq!(v.z, 30);

        assert_eq!(*v.component(1).unwrap(), 2);
        *v.component_mut(3).unwrap() = 40;
        assert_eq!(v.w, 40);
        assert!(v.component(4).unwrap_err().is_index());
        assert!(Vec2::new(1, 2).component(2).unwrap_err().is_index());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_raw_index_out_of_range_panics() {
        let v = Vec3::new(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn test_array_and_tuple_conversions() {
        let v: Vec3<f32> = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        let back: [f32; 3] = v.into();
        assert_eq!(back, [1.0, 2.0, 3.0]);

        let arr = [1, 2];
        assert_eq!(Vec2::from(&arr), Vec2::new(1, 2));

        let t: Vec4<i32> = (1, 2, 3, 4).into();
        let back: (i32, i32, i32, i32) = t.into();
        assert_eq!(back, (1, 2, 3, 4));
    }

    #[test]
    fn test_slice_conversion() {
        let data = [1.0f64, 2.0, 3.0];
        let v = Vec3::try_from(&data[..]).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));

        assert!(Vec2::try_from(&data[..]).unwrap_err().is_dimension());
        assert!(Vec4::try_from(&data[..]).unwrap_err().is_dimension());
    }

    #[test]
    fn test_matrix_conversions() {
        let v = Vec3::new(1, 2, 3);

        let row = v.to_matrix_row();
        assert_eq!(row.shape(), (1, 3));
        assert_eq!(Vec3::try_from(&row).unwrap(), v);

        let col = v.to_matrix_col();
        assert_eq!(col.shape(), (3, 1));
        assert_eq!(Vec3::try_from(&col).unwrap(), v);

        let m: Matrix<i32> = v.into();
        assert_eq!(m, row);

        let wrong = Matrix::<i32>::new(2, 2).unwrap();
        assert!(Vec3::try_from(&wrong).unwrap_err().is_dimension());
        assert!(Vec2::try_from(&col).unwrap_err().is_dimension());
    }

    #[test]
    fn test_vector_matrix_mul() {
        let m = Matrix::from_array([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        let v = Vec3::new(1.0f32, 1.0, 1.0);

        // Column sums
        let result = (v * &m).unwrap();
        assert_eq!(result.shape(), (1, 3));
        assert_eq!(result.row(0).unwrap(), vec![12.0, 15.0, 18.0]);

        let wide = Matrix::from_array([[1, 0, 2, 1], [0, 1, 3, 1]]).unwrap();
        let r = Vec2::new(2, 3).mul_matrix(&wide).unwrap();
        assert_eq!(r.row(0).unwrap(), vec![2, 3, 13, 5]);

        assert!((Vec2::new(1.0f32, 1.0) * &m).unwrap_err().is_dimension());
    }

    #[test]
    fn test_clear() {
        let mut v = Vec4::new(1.5f64, -2.0, 3.0, 4.0);
        v.clear();
        assert_eq!(v, Vec4::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1, 2).to_string(), "[1 2]");
        assert_eq!(Vec3::new(1, 2, 3).to_string(), "[1 2 3]");
        assert_eq!(Vec4::new(1.5f64, 2.0, 3.0, 4.0).to_string(), "[1.5 2 3 4]");
    }

    #[test]
    fn test_approx_eq() {
        let a = Vec3::new(1.0f64, 2.0, 3.0);
        let b = Vec3::new(1.0 + 1e-12, 2.0, 3.0);
        assert!(a.approx_eq(&b, &ApproxConfig::default()));
        assert!(!a.approx_eq(&b, &ApproxConfig::strict()));
    }

    #[test]
    fn test_relative_eq_impl() {
        let a = Vec3::new(1.0f64, 2.0, 3.0);
        let b = Vec3::new(1.0 + 1e-14, 2.0, 3.0 - 1e-14);
        approx::assert_relative_eq!(a, b);
        approx::assert_abs_diff_eq!(Vec2::new(0.0f32, 1.0), Vec2::new(1e-7, 1.0), epsilon = 1e-6);
        approx::assert_relative_ne!(a, Vec3::splat(2.0));
    }

    #[test]
    fn test_mixed_element_ops() {
        let mut v = Vec2::new(0.5f64, 1.5);
        v += Vec2::new(1i32, 2i32);
        assert_eq!(v, Vec2::new(1.5, 3.5));
        v -= Vec2::new(1.0f32, 1.0f32);
        assert_eq!(v, Vec2::new(0.5, 2.5));
        v *= Vec2::new(2i32, 4i32);
        assert_eq!(v, Vec2::new(1.0, 10.0));

        let w = Vec4::new(1i64, 2, 3, 4) + Vec4::new(10i32, 20, 30, 40);
        assert_eq!(w, Vec4::new(11i64, 22, 33, 44));
        let d = Vec3::new(1.0f64, 2.0, 3.0) - Vec3::new(1i32, 1, 1);
        assert_eq!(d, Vec3::new(0.0, 1.0, 2.0));
        let p = Vec3::new(1.5f64, 2.0, 3.0) * Vec3::new(2.0f32, 0.5, 1.0);
        assert_eq!(p, Vec3::new(3.0, 1.0, 3.0));
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();

        let v = Vec3::new(1.0f32, 2.0, 3.0);
        let encoded = bincode::serde::encode_to_vec(&v, config).unwrap();
        assert!(!encoded.is_empty());
        let (decoded, _): (Vec3<f32>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(v, decoded);

        let w = Vec4::new(10.0f64, 20.0, 30.0, 40.0);
        let encoded = bincode::serde::encode_to_vec(&w, config).unwrap();
        let (decoded, _): (Vec4<f64>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(w, decoded);
    }
}
