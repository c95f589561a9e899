use crate::{ConfigurationError, LWEParams, lwe::params::check_noise_bounds};

/// Ring degree, mask size and noise bounds of a TLWE scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TLWEParams {
    pub(crate) n: usize,
    pub(crate) k: usize,
    pub(crate) alpha_min: f64,
    pub(crate) alpha_max: f64,
    pub(crate) extracted_lweparams: LWEParams,
}

impl TLWEParams {
    pub fn new(n: usize, k: usize, alpha_min: f64, alpha_max: f64) -> Result<Self, ConfigurationError> {
        if !n.is_power_of_two() || n < 2 {
            return Err(ConfigurationError::RingDegree(n));
        }
        if k < 1 {
            return Err(ConfigurationError::MaskSize(k));
        }
        check_noise_bounds(alpha_min, alpha_max)?;
        Ok(Self {
            n,
            k,
            alpha_min,
            alpha_max,
            extracted_lweparams: LWEParams::new(n * k, alpha_min, alpha_max)?,
        })
    }

    /// Ring degree N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of mask polynomials.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn alpha_min(&self) -> f64 {
        self.alpha_min
    }

    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    /// Parameters of the LWE samples extracted from TLWE samples.
    pub fn extracted_lweparams(&self) -> &LWEParams {
        &self.extracted_lweparams
    }
}
