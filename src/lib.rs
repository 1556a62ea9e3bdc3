//! # Geometry - dense matrices and fixed-arity vectors
//!
//! A value library for in-process numeric and geometric work:
//!
//! - **`Matrix<T>`**: resizable dense matrix with elementwise and product
//!   arithmetic, row/column editing, transpose and Gauss-Jordan inversion.
//! - **`Vec2`/`Vec3`/`Vec4`**: fixed-arity vectors with elementwise
//!   arithmetic, dot product, vector × matrix, and conversion to and from
//!   1×N / N×1 matrices.
//!
//! Shape violations, out-of-range checked access and singular inversions are
//! reported through [`GeometryError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use geometry::{Matrix, Vec2};
//!
//! # fn main() -> Result<(), geometry::GeometryError> {
//! let a = Matrix::from_array([[3.0f64, 2.0], [-2.0, -1.0]])?;
//! let inv = a.inverse()?;
//! let id = (&a * &inv)?;
//! assert!(id.approx_eq(&Matrix::identity(2)?, &Default::default()));
//!
//! assert_eq!(Vec2::new(3, 7).dot(&Vec2::new(2, 5)), 41);
//! println!("{}", a);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod numerics;

pub use config::ApproxConfig;
pub use error::{GeometryError, Result};
pub use numerics::{Matrix, Scalar, Vec2, Vec3, Vec4};
