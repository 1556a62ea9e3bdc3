// src/numerics/types/ops.rs
// Arithmetic for Matrix<T>: fallible matrix-matrix forms and operator impls.
//
// Matrix-matrix forms accept any right-hand element type U with T: From<U>;
// the result keeps the left-hand element type.
//
// Matrix-matrix operations can fail on shape, so the assignment forms are
// methods returning Result and the binary operators yield Result<Matrix<T>>.
// Scalar forms cannot fail and use the plain operator traits.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{GeometryError, Result};
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::Scalar;

impl<T: Scalar> Matrix<T> {
    fn check_same_shape<U: Scalar>(&self, operation: &'static str, rhs: &Matrix<U>) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(GeometryError::dimension(
                operation,
                format!(
                    "shapes differ: {}x{} vs {}x{}",
                    self.rows(),
                    self.cols(),
                    rhs.rows(),
                    rhs.cols()
                ),
            ));
        }
        Ok(())
    }

    fn zip_assign<U, F>(&mut self, rhs: &Matrix<U>, op: F)
    where
        U: Scalar,
        T: From<U>,
        F: Fn(T, T) -> T,
    {
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self[(i, j)] = op(self[(i, j)], T::from(rhs[(i, j)]));
            }
        }
    }

    fn map_assign<F: Fn(T) -> T>(&mut self, op: F) {
        for i in 0..self.rows() {
            for value in self[i].iter_mut() {
                *value = op(*value);
            }
        }
    }

    /// Elementwise `self += rhs`. Shapes must be identical.
    pub fn add_assign_matrix<U>(&mut self, rhs: &Matrix<U>) -> Result<()>
    where
        U: Scalar,
        T: From<U>,
    {
        self.check_same_shape("add", rhs)?;
        self.zip_assign(rhs, |a, b| a + b);
        Ok(())
    }

    /// Elementwise `self -= rhs`. Shapes must be identical.
    pub fn sub_assign_matrix<U>(&mut self, rhs: &Matrix<U>) -> Result<()>
    where
        U: Scalar,
        T: From<U>,
    {
        self.check_same_shape("sub", rhs)?;
        self.zip_assign(rhs, |a, b| a - b);
        Ok(())
    }

    /// Matrix product `self = self * rhs`.
    ///
    /// Requires `self.cols() == rhs.rows()`; on success `self` has shape
    /// `self.rows() x rhs.cols()`. On error `self` is left untouched.
    pub fn mul_assign_matrix<U>(&mut self, rhs: &Matrix<U>) -> Result<()>
    where
        U: Scalar,
        T: From<U>,
    {
        if self.cols() != rhs.rows() {
            return Err(GeometryError::dimension(
                "mul",
                format!(
                    "cannot multiply {}x{} by {}x{}",
                    self.rows(),
                    self.cols(),
                    rhs.rows(),
                    rhs.cols()
                ),
            ));
        }

        let (rows, inner, cols) = (self.rows(), self.cols(), rhs.cols());
        let data: Vec<Vec<T>> = (0..rows)
            .map(|i| {
                (0..cols)
                    .map(|j| {
                        (0..inner).fold(T::zero(), |acc, k| {
                            acc + self[(i, k)] * T::from(rhs[(k, j)])
                        })
                    })
                    .collect::<Vec<T>>()
            })
            .collect();

        if cols != inner {
            tracing::trace!(rows, from_cols = inner, to_cols = cols, "product reshaped matrix");
        }
        self.replace(data, rows, cols);
        Ok(())
    }
}

impl<T: Scalar> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, rhs: T) {
        self.map_assign(|v| v + rhs);
    }
}

impl<T: Scalar> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.map_assign(|v| v - rhs);
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.map_assign(|v| v * rhs);
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        self.map_assign(|v| v / rhs);
    }
}

impl<'a, 'b, T, U> Add<&'b Matrix<U>> for &'a Matrix<T>
where
    T: Scalar + From<U>,
    U: Scalar,
{
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &'b Matrix<U>) -> Self::Output {
        let mut result = self.clone();
        result.add_assign_matrix(rhs)?;
        Ok(result)
    }
}

impl<'a, 'b, T, U> Sub<&'b Matrix<U>> for &'a Matrix<T>
where
    T: Scalar + From<U>,
    U: Scalar,
{
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &'b Matrix<U>) -> Self::Output {
        let mut result = self.clone();
        result.sub_assign_matrix(rhs)?;
        Ok(result)
    }
}

impl<'a, 'b, T, U> Mul<&'b Matrix<U>> for &'a Matrix<T>
where
    T: Scalar + From<U>,
    U: Scalar,
{
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &'b Matrix<U>) -> Self::Output {
        let mut result = self.clone();
        result.mul_assign_matrix(rhs)?;
        Ok(result)
    }
}

// Scalar binary forms, for both owned and borrowed left-hand sides.
macro_rules! impl_scalar_binary_op {
    ($trait:ident, $method:ident, $assign_method:ident) => {
        impl<T: Scalar> $trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: T) -> Matrix<T> {
                self.$assign_method(rhs);
                self
            }
        }

        impl<'a, T: Scalar> $trait<T> for &'a Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                let mut result = self.clone();
                result.$assign_method(rhs);
                result
            }
        }
    };
}

impl_scalar_binary_op!(Add, add, add_assign);
impl_scalar_binary_op!(Sub, sub, sub_assign);
impl_scalar_binary_op!(Mul, mul, mul_assign);
impl_scalar_binary_op!(Div, div, div_assign);
