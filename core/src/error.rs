use backend::{TransformType, UnsupportedTransform};
use thiserror::Error;

/// Invalid parameter sets. Raised at setup, never mid-operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error(transparent)]
    UnsupportedTransform(#[from] UnsupportedTransform),

    #[error("tlwe mask size must be at least 1, got {0}")]
    MaskSize(usize),

    #[error("LWE dimension must be positive")]
    ZeroDimension,

    #[error("invalid noise bounds: alpha_min = {alpha_min}, alpha_max = {alpha_max}")]
    NoiseBounds { alpha_min: f64, alpha_max: f64 },

    #[error("ring degree must be a power of two >= 2, got {0}")]
    RingDegree(usize),

    #[error("decomposition length {length} with log2 base {log2_base} has zero precision")]
    ZeroPrecision { length: usize, log2_base: usize },

    #[error("decomposition length {length} with log2 base {log2_base} exceeds {max_bits} bits")]
    PrecisionOverflow { length: usize, log2_base: usize, max_bits: usize },

    #[error("module implements {module:?} but the parameters ask for {params:?}")]
    TransformMismatch { module: TransformType, params: TransformType },

    #[error("module has ring degree {module} but the parameters ask for {params}")]
    DegreeMismatch { module: usize, params: usize },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("coefficient index {index} out of range for ring degree {n}")]
    IndexOutOfRange { index: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_shape(expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected != actual {
        return Err(Error::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }
    Ok(())
}

/// Checks that a flat input of `len` entries matches `count` elements of a batch with `shape`.
pub(crate) fn check_len(shape: &[usize], count: usize, len: usize) -> Result<()> {
    if count != len {
        return Err(Error::ShapeMismatch {
            expected: shape.to_vec(),
            actual: vec![len],
        });
    }
    Ok(())
}

pub(crate) fn check_dim(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}
