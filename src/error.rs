// src/error.rs
// Error type shared by the matrix and vector modules.

/// Errors produced by matrix and vector operations.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Dimension error in {operation}: {reason}")]
    Dimension {
        operation: &'static str,
        reason: String,
    },

    #[error("Index {index} is out of bounds for length {len}")]
    Index { index: usize, len: usize },

    #[error("Singular matrix: no usable pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("Encoding failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Decoding failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

impl GeometryError {
    pub(crate) fn dimension(operation: &'static str, reason: impl Into<String>) -> Self {
        GeometryError::Dimension {
            operation,
            reason: reason.into(),
        }
    }

    /// True for `Dimension` errors.
    pub fn is_dimension(&self) -> bool {
        matches!(self, GeometryError::Dimension { .. })
    }

    /// True for `Index` errors.
    pub fn is_index(&self) -> bool {
        matches!(self, GeometryError::Index { .. })
    }

    /// True for `SingularMatrix` errors.
    pub fn is_singular(&self) -> bool {
        matches!(self, GeometryError::SingularMatrix { .. })
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
