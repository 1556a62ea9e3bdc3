// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod inverse;
    pub mod matrix;
    pub mod ops;
    pub mod traits;
    pub mod vector;
}

pub use types::matrix::Matrix;
pub use types::traits::Scalar;
pub use types::vector::{Vec2, Vec3, Vec4};
