// src/config.rs
// Tolerance configuration for approximate comparisons.

/// Tolerance settings for approximate equality of matrices and vectors.
///
/// Elements are compared with [`approx::relative_eq!`]: `a` and `b` are equal
/// when `|a - b| <= absolute`, or when `|a - b| <= relative * max(|a|, |b|)`.
/// Element types are widened to `f64` first, so integer matrices compare
/// under the same rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxConfig {
    /// Absolute tolerance, dominant near zero.
    pub absolute: f64,

    /// Relative tolerance, scaled by the larger magnitude of the pair.
    pub relative: f64,
}

impl Default for ApproxConfig {
    /// Tolerances suited to `f64` results of a few hundred operations.
    fn default() -> Self {
        Self {
            absolute: 1e-9,
            relative: 1e-9,
        }
    }
}

impl ApproxConfig {
    /// Creates a configuration with explicit tolerances.
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Exact comparison.
    pub fn strict() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Tolerances suited to `f32` element types.
    pub fn for_f32() -> Self {
        Self {
            absolute: 1e-5,
            relative: 1e-5,
        }
    }

    /// Coarse tolerances for ill-conditioned inputs.
    pub fn loose() -> Self {
        Self {
            absolute: 1e-4,
            relative: 1e-3,
        }
    }

    /// Compares two values under this configuration.
    pub fn eq_f64(&self, a: f64, b: f64) -> bool {
        approx::relative_eq!(a, b, epsilon = self.absolute, max_relative = self.relative)
    }
}
