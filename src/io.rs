// src/io.rs
// Binary encoding of matrices and vectors through bincode's serde support.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Encodes any serializable value (a `Matrix`, `Vec2`/`Vec3`/`Vec4`, or
/// collections of them) with bincode's standard configuration.
pub fn to_bytes<S: Serialize>(value: &S) -> Result<Vec<u8>> {
    Ok(bincode::serde::encode_to_vec(value, bincode::config::standard())?)
}

/// Decodes a value written by [`to_bytes`]. Matrices are validated on the
/// way in, so ragged row data is rejected.
pub fn from_bytes<D: DeserializeOwned>(bytes: &[u8]) -> Result<D> {
    let (value, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::matrix::Matrix;
    use crate::numerics::types::vector::{Vec2, Vec3};

    #[test]
    fn test_matrix_bytes_roundtrip() {
        let m = Matrix::from_array([[1.0f64, -2.5], [3.25, 4.0], [0.0, 1e-3]]).unwrap();
        let bytes = to_bytes(&m).unwrap();
        let decoded: Matrix<f64> = from_bytes(&bytes).unwrap();
        assert_eq!(m, decoded);
    }

    #[test]
    fn test_vector_collection_roundtrip() {
        let points = vec![Vec3::new(1, 2, 3), Vec3::new(-4, 5, -6)];
        let bytes = to_bytes(&points).unwrap();
        let decoded: Vec<Vec3<i32>> = from_bytes(&bytes).unwrap();
        assert_eq!(points, decoded);
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let bytes = to_bytes(&vec![vec![1i64, 2, 3], vec![4, 5]]).unwrap();
        let err = from_bytes::<Matrix<i64>>(&bytes).unwrap_err();
        assert!(matches!(err, crate::error::GeometryError::Decode(_)));
    }

    #[test]
    fn test_truncated_input_rejected() {
        let bytes = to_bytes(&Vec2::new(1.0f32, 2.0)).unwrap();
        assert!(from_bytes::<Vec2<f32>>(&bytes[..bytes.len() - 1]).is_err());
    }
}
