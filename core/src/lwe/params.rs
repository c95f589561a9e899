use crate::ConfigurationError;

/// Dimension and noise bounds of an LWE scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LWEParams {
    pub(crate) n: usize,
    pub(crate) alpha_min: f64,
    pub(crate) alpha_max: f64,
}

impl LWEParams {
    pub fn new(n: usize, alpha_min: f64, alpha_max: f64) -> Result<Self, ConfigurationError> {
        if n == 0 {
            return Err(ConfigurationError::ZeroDimension);
        }
        check_noise_bounds(alpha_min, alpha_max)?;
        Ok(Self {
            n,
            alpha_min,
            alpha_max,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Smallest standard deviation a fresh encryption may use.
    pub fn alpha_min(&self) -> f64 {
        self.alpha_min
    }

    /// Largest standard deviation for which decryption is still expected to succeed.
    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }
}

pub(crate) fn check_noise_bounds(alpha_min: f64, alpha_max: f64) -> Result<(), ConfigurationError> {
    if !(alpha_min >= 0.0 && alpha_min <= alpha_max && alpha_max.is_finite()) {
        return Err(ConfigurationError::NoiseBounds { alpha_min, alpha_max });
    }
    Ok(())
}
