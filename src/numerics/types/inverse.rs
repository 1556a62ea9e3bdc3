// src/numerics/types/inverse.rs
// Gauss-Jordan inversion for square matrices.

use crate::error::{GeometryError, Result};
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Inverts the matrix in place using Gauss-Jordan elimination.
    ///
    /// Every row operation applied to a working copy is mirrored onto an
    /// accumulator that starts as the identity and ends as the inverse.
    ///
    /// Pivoting only happens when a diagonal entry is exactly zero. The
    /// replacement row is the one holding the largest *signed* value in that
    /// column at or below the diagonal, not the largest magnitude; if no row
    /// holds a value strictly greater than the zero diagonal, the matrix is
    /// reported as singular. Zero tests are exact, so a nearly singular matrix
    /// is inverted into large, ill-conditioned values rather than rejected.
    ///
    /// Element types with truncating division (integers) give meaningless
    /// results here; use a floating point `T`.
    ///
    /// # Errors
    /// * `Dimension` if the matrix is not square.
    /// * `SingularMatrix` if a column has no usable pivot.
    ///
    /// `self` is unchanged when an error is returned.
    pub fn invert(&mut self) -> Result<()> {
        if !self.is_square() {
            return Err(GeometryError::dimension(
                "invert",
                format!("matrix must be square, got {}x{}", self.rows(), self.cols()),
            ));
        }

        let n = self.rows();
        let mut work = self.clone();
        let mut acc = Matrix::identity(n)?;

        for i in 0..n {
            if work[i][i] == T::zero() {
                let mut pivot = i;
                for j in (i + 1)..n {
                    if work[j][i] > work[pivot][i] {
                        pivot = j;
                    }
                }
                if pivot == i {
                    tracing::debug!(column = i, size = n, "no pivot found, matrix is singular");
                    return Err(GeometryError::SingularMatrix { column: i });
                }
                tracing::trace!(column = i, pivot_row = pivot, "swapping pivot row");
                work.swap_rows(i, pivot);
                acc.swap_rows(i, pivot);
            }

            let pivot_value = work[i][i];
            for j in (i + 1)..n {
                let factor = work[j][i] / pivot_value;
                work.sub_row_multiple(j, i, factor);
                acc.sub_row_multiple(j, i, factor);
            }
        }

        for i in 0..n {
            let diagonal = work[i][i];
            work.divide_row(i, diagonal);
            acc.divide_row(i, diagonal);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let factor = work[i][j];
                work.sub_row_multiple(i, j, factor);
                acc.sub_row_multiple(i, j, factor);
            }
        }

        *self = acc;
        Ok(())
    }

    /// Inverted copy. See [`Matrix::invert`].
    pub fn inverse(&self) -> Result<Self> {
        let mut m = self.clone();
        m.invert()?;
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApproxConfig;

    #[test]
    fn test_invert_two_by_two() {
        let a = Matrix::from_array([[3.0f64, 2.0], [-2.0, -1.0]]).unwrap();
        let inv = a.inverse().unwrap();

        let expected = Matrix::from_array([[-1.0, -2.0], [2.0, 3.0]]).unwrap();
        approx::assert_relative_eq!(inv, expected, epsilon = 1e-12);

        let product = (&a * &inv).unwrap();
        assert!(product.approx_eq(&Matrix::identity(2).unwrap(), &ApproxConfig::default()));
    }

    #[test]
    fn test_invert_identity() {
        let mut id = Matrix::<f64>::identity(4).unwrap();
        id.invert().unwrap();
        assert_eq!(id, Matrix::identity(4).unwrap());
    }

    #[test]
    fn test_invert_proportional_rows_is_singular() {
        let mut a = Matrix::from_array([[1.0f64, 2.0], [2.0, 4.0]]).unwrap();
        let original = a.clone();

        let err = a.invert().unwrap_err();
        assert!(matches!(err, GeometryError::SingularMatrix { column: 1 }));
        assert_eq!(a, original);
    }

    #[test]
    fn test_invert_non_square_fails() {
        let mut a = Matrix::<f64>::new(2, 3).unwrap();
        assert!(a.invert().unwrap_err().is_dimension());
    }

    #[test]
    fn test_invert_with_zero_diagonal_swaps_rows() {
        // zero at [0][0]; row 1 holds the larger value in column 0
        let a = Matrix::from_array([[0.0f64, 1.0], [1.0, 0.0]]).unwrap();
        let inv = a.inverse().unwrap();
        assert!(inv.approx_eq(&a, &ApproxConfig::default()));
    }

    #[test]
    fn test_pivot_uses_signed_value() {
        // Invertible, but the only candidate below the zero diagonal is
        // negative, so no pivot is accepted.
        let a = Matrix::from_array([[0.0f64, 1.0], [-1.0, 0.0]]).unwrap();
        let err = a.inverse().unwrap_err();
        assert!(matches!(err, GeometryError::SingularMatrix { column: 0 }));
    }

    #[test]
    fn test_pivot_picks_largest_signed_candidate() {
        // Column 0 below the zero diagonal holds -5 and 2; the positive row wins.
        let a = Matrix::from_array([[0.0f64, 1.0, 0.0], [-5.0, 0.0, 1.0], [2.0, 3.0, 0.0]]).unwrap();
        let inv = a.inverse().unwrap();
        approx::assert_relative_eq!((&a * &inv).unwrap(), Matrix::identity(3).unwrap(), epsilon = 1e-12);

        // Same shape of problem with only negative candidates: rejected even
        // though the determinant is -2.
        let b = Matrix::from_array([[0.0f64, 1.0, 0.0], [-5.0, 0.0, 1.0], [-2.0, 3.0, 0.0]]).unwrap();
        assert!(matches!(b.inverse().unwrap_err(), GeometryError::SingularMatrix { column: 0 }));
    }

    #[test]
    fn test_near_singular_inverts_to_large_values() {
        let a = Matrix::from_array([[1.0f64, 2.0], [2.0, 4.0 + 1e-12]]).unwrap();
        let inv = a.inverse().unwrap();
        assert!(inv[0][0].abs() > 1e9);
        assert!(inv[1][1].abs() > 1e9);
        assert!(inv[0][0].is_finite());
    }

    #[test]
    fn test_invert_three_by_three() {
        let a = Matrix::from_array([[2.0f64, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap();
        let inv = a.inverse().unwrap();

        let left = (&inv * &a).unwrap();
        let right = (&a * &inv).unwrap();
        let id = Matrix::identity(3).unwrap();
        assert!(left.approx_eq(&id, &ApproxConfig::default()));
        assert!(right.approx_eq(&id, &ApproxConfig::default()));
    }

    #[test]
    fn test_invert_one_by_one() {
        let mut a = Matrix::from_row(&[4.0f32]).unwrap();
        a.invert().unwrap();
        assert_eq!(a[0][0], 0.25);

        let mut zero = Matrix::<f32>::new(1, 1).unwrap();
        assert!(zero.invert().unwrap_err().is_singular());
    }
}
