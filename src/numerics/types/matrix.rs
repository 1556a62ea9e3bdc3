// src/numerics/types/matrix.rs
// Dense, resizable matrix stored as a sequence of equal-length rows.

use core::fmt;
use core::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::config::ApproxConfig;
use crate::error::{GeometryError, Result};
use crate::numerics::types::traits::Scalar;

/// Dense matrix with `rows` x `cols` elements.
///
/// Every row holds exactly `cols` elements and both dimensions are at least
/// one. Clones are deep copies.
///
/// Raw indexing (`m[i]`, `m[i][j]`, `m[(i, j)]`) is not checked by the
/// matrix itself; an out-of-range index panics in the underlying slice
/// access. Use [`Matrix::get`] and [`Matrix::get_mut`] where the indices
/// come from outside.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar = f32> {
    data: Vec<Vec<T>>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Zero-filled matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::zero())
    }

    /// Matrix of the given shape with every element set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GeometryError::dimension(
                "new",
                format!("matrix dimensions must be non-zero, got {}x{}", rows, cols),
            ));
        }
        Ok(Self {
            data: vec![vec![fill; cols]; rows],
            rows,
            cols,
        })
    }

    /// Identity matrix of size `size` x `size`.
    pub fn identity(size: usize) -> Result<Self> {
        let mut m = Self::new(size, size)?;
        for i in 0..size {
            m.data[i][i] = T::one();
        }
        Ok(m)
    }

    /// 1 x N matrix holding `values`.
    pub fn from_row(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(GeometryError::dimension("from_row", "row must not be empty"));
        }
        Ok(Self {
            data: vec![values.to_vec()],
            rows: 1,
            cols: values.len(),
        })
    }

    /// N x 1 matrix holding `values`.
    pub fn from_col(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(GeometryError::dimension("from_col", "column must not be empty"));
        }
        Ok(Self {
            data: values.iter().map(|&v| vec![v]).collect(),
            rows: values.len(),
            cols: 1,
        })
    }

    /// Builds a matrix from nested rows. All rows must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => {
                return Err(GeometryError::dimension("from_rows", "rows must not be empty"))
            }
            None => return Err(GeometryError::dimension("from_rows", "no rows given")),
        };
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(GeometryError::dimension(
                "from_rows",
                format!("row {} has {} elements, expected {}", i, row.len(), cols),
            ));
        }
        Ok(Self {
            rows: rows.len(),
            data: rows,
            cols,
        })
    }

    /// Builds a matrix from a fixed-size nested array.
    pub fn from_array<const R: usize, const C: usize>(data: [[T; C]; R]) -> Result<Self> {
        Self::from_rows(data.iter().map(|row| row.to_vec()).collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Checked element access.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&self.data[row][col])
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&mut self.data[row][col])
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<T>> {
        self.check_row(i)?;
        Ok(self.data[i].clone())
    }

    /// Copy of column `i`.
    pub fn col(&self, i: usize) -> Result<Vec<T>> {
        self.check_col(i)?;
        Ok(self.data.iter().map(|row| row[i]).collect())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.iter().map(|row| row.as_slice())
    }

    /// Nested copy of the contents.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.clone()
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(GeometryError::Index {
                index: row,
                len: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(GeometryError::Index {
                index: col,
                len: self.cols,
            });
        }
        Ok(())
    }

    /// Sets every element to zero. The shape is kept.
    pub fn clear(&mut self) {
        for row in &mut self.data {
            row.fill(T::zero());
        }
    }

    /// Replaces the contents with a `size` x `size` identity matrix.
    pub fn to_identity(&mut self, size: usize) -> Result<()> {
        *self = Self::identity(size)?;
        Ok(())
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        let data: Vec<Vec<T>> = (0..self.cols)
            .map(|j| self.data.iter().map(|row| row[j]).collect::<Vec<T>>())
            .collect();
        tracing::trace!(rows = self.cols, cols = self.rows, "transposed matrix");
        self.data = data;
        core::mem::swap(&mut self.rows, &mut self.cols);
    }

    /// Transposed copy.
    pub fn transposed(&self) -> Self {
        let mut m = self.clone();
        m.transpose();
        m
    }

    /// Appends one row filled with `value`.
    pub fn add_row(&mut self, value: T) -> &mut Self {
        self.add_rows(1, value)
    }

    /// Appends `n` rows filled with `value`.
    pub fn add_rows(&mut self, n: usize, value: T) -> &mut Self {
        let cols = self.cols;
        self.data.extend((0..n).map(|_| vec![value; cols]));
        self.rows += n;
        self
    }

    /// Removes the last row. At least one row must remain.
    pub fn remove_row(&mut self) -> Result<()> {
        if self.rows <= 1 {
            return Err(GeometryError::dimension(
                "remove_row",
                "matrix must keep at least one row",
            ));
        }
        self.data.pop();
        self.rows -= 1;
        Ok(())
    }

    /// Removes the last `n` rows. Fails unless `rows > n`.
    pub fn remove_rows(&mut self, n: usize) -> Result<()> {
        if self.rows <= n {
            return Err(GeometryError::dimension(
                "remove_rows",
                format!("cannot remove {} of {} rows", n, self.rows),
            ));
        }
        self.rows -= n;
        self.data.truncate(self.rows);
        Ok(())
    }

    /// Appends one column filled with `value`.
    pub fn add_col(&mut self, value: T) -> &mut Self {
        self.add_cols(1, value)
    }

    /// Appends `n` columns filled with `value`.
    pub fn add_cols(&mut self, n: usize, value: T) -> &mut Self {
        for row in &mut self.data {
            row.resize(row.len() + n, value);
        }
        self.cols += n;
        self
    }

    /// Removes the last column. At least one column must remain.
    pub fn remove_col(&mut self) -> Result<()> {
        if self.cols <= 1 {
            return Err(GeometryError::dimension(
                "remove_col",
                "matrix must keep at least one column",
            ));
        }
        for row in &mut self.data {
            row.pop();
        }
        self.cols -= 1;
        Ok(())
    }

    /// Removes the last `n` columns. Fails unless `cols > n`.
    pub fn remove_cols(&mut self, n: usize) -> Result<()> {
        if self.cols <= n {
            return Err(GeometryError::dimension(
                "remove_cols",
                format!("cannot remove {} of {} columns", n, self.cols),
            ));
        }
        self.cols -= n;
        for row in &mut self.data {
            row.truncate(self.cols);
        }
        Ok(())
    }

    // Row operations used by `invert`. Row indices are trusted; an
    // out-of-range row panics.

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    pub(crate) fn divide_row(&mut self, row: usize, divisor: T) {
        for value in self.data[row].iter_mut() {
            *value = *value / divisor;
        }
    }

    /// `data[target] -= data[source] * factor`
    pub(crate) fn sub_row_multiple(&mut self, target: usize, source: usize, factor: T) {
        for j in 0..self.cols {
            self.data[target][j] = self.data[target][j] - self.data[source][j] * factor;
        }
    }

    /// Elementwise comparison under the given tolerances. Shapes must match.
    ///
    /// For float element types the [`approx::RelativeEq`] impl is usually
    /// more convenient, e.g. with `assert_relative_eq!`.
    pub fn approx_eq(&self, other: &Matrix<T>, config: &ApproxConfig) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .flatten()
                .zip(other.data.iter().flatten())
                .all(|(&a, &b)| config.eq_f64(a.to_f64(), b.to_f64()))
    }

    pub(crate) fn from_raw(data: Vec<Vec<T>>, rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert!(data.len() == rows && data.iter().all(|r| r.len() == cols));
        Self { data, rows, cols }
    }

    pub(crate) fn replace(&mut self, data: Vec<Vec<T>>, rows: usize, cols: usize) {
        debug_assert!(data.len() == rows && data.iter().all(|r| r.len() == cols));
        self.data = data;
        self.rows = rows;
        self.cols = cols;
    }
}

impl<T: Scalar> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index.0][index.1]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.data[index.0][index.1]
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = GeometryError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: Scalar> TryFrom<&[T]> for Matrix<T> {
    type Error = GeometryError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_row(values)
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .flatten()
                .zip(other.data.iter().flatten())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .flatten()
                .zip(other.data.iter().flatten())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// One bracketed row per line, elements separated by a single space, no
/// newline after the last row.
impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
            if i + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T> Serialize for Matrix<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <Vec<Vec<T>>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
