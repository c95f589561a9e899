use std::f64::consts::PI;

use tracing::debug;

use backend::TransformType;

use crate::{ConfigurationError, LWEParams, TLWEParams, lwe::keyswitch::check_decomposition};

pub const DEFAULT_RING_DEGREE: usize = 1024;
pub const DEFAULT_LWE_DIMENSION: usize = 500;
pub const DEFAULT_BS_DECOMP_LENGTH: usize = 2;
pub const DEFAULT_BS_LOG2_BASE: usize = 10;
pub const DEFAULT_KS_DECOMP_LENGTH: usize = 8;
pub const DEFAULT_KS_LOG2_BASE: usize = 2;

/// Largest number of bits a bootstrapping decomposition may cover.
pub const BS_MAX_PRECISION: usize = 32;

/// Standard deviation of the key-switching noise, 2^-15 * sqrt(2/pi).
pub fn default_ks_stdev() -> f64 {
    (0.5f64).powi(15) * (2.0 / PI).sqrt()
}

/// Standard deviation of the bootstrapping-key noise, 9e-9 * sqrt(2/pi).
pub fn default_bs_stdev() -> f64 {
    9e-9 * (2.0 / PI).sqrt()
}

/// Largest standard deviation that still decrypts, 2^-4 / 4 * sqrt(2/pi).
pub fn default_max_stdev() -> f64 {
    (0.5f64).powi(4) / 4.0 * (2.0 / PI).sqrt()
}

/// The full parameter set of the scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TFHEParameters {
    pub(crate) transform_type: TransformType,
    pub(crate) in_out_params: LWEParams,
    pub(crate) tlwe_params: TLWEParams,
    pub(crate) ks_decomp_length: usize,
    pub(crate) ks_log2_base: usize,
    pub(crate) bs_decomp_length: usize,
    pub(crate) bs_log2_base: usize,
}

impl TFHEParameters {
    /// Default constants with the given transform and TLWE mask size.
    pub fn new(transform_type: TransformType, tlwe_mask_size: usize) -> Result<Self, ConfigurationError> {
        let max_stdev: f64 = default_max_stdev();
        Self::from_parts(
            transform_type,
            LWEParams::new(DEFAULT_LWE_DIMENSION, default_ks_stdev(), max_stdev)?,
            TLWEParams::new(DEFAULT_RING_DEGREE, tlwe_mask_size, default_bs_stdev(), max_stdev)?,
            DEFAULT_KS_DECOMP_LENGTH,
            DEFAULT_KS_LOG2_BASE,
            DEFAULT_BS_DECOMP_LENGTH,
            DEFAULT_BS_LOG2_BASE,
        )
    }

    /// Same as [TFHEParameters::new] with the transform given by name ("FFT" or "NTT").
    pub fn from_name(transform_type: &str, tlwe_mask_size: usize) -> Result<Self, ConfigurationError> {
        Self::new(transform_type.parse()?, tlwe_mask_size)
    }

    pub fn from_parts(
        transform_type: TransformType,
        in_out_params: LWEParams,
        tlwe_params: TLWEParams,
        ks_decomp_length: usize,
        ks_log2_base: usize,
        bs_decomp_length: usize,
        bs_log2_base: usize,
    ) -> Result<Self, ConfigurationError> {
        check_decomposition(
            ks_decomp_length,
            ks_log2_base,
            crate::lwe::keyswitch::KS_MAX_PRECISION,
        )?;
        check_decomposition(bs_decomp_length, bs_log2_base, BS_MAX_PRECISION)?;

        debug!(
            ?transform_type,
            lwe_n = in_out_params.n(),
            ring_degree = tlwe_params.n(),
            mask_size = tlwe_params.k(),
            ks_decomp_length,
            ks_log2_base,
            bs_decomp_length,
            bs_log2_base,
            "parameter set"
        );

        Ok(Self {
            transform_type,
            in_out_params,
            tlwe_params,
            ks_decomp_length,
            ks_log2_base,
            bs_decomp_length,
            bs_log2_base,
        })
    }

    pub fn transform_type(&self) -> TransformType {
        self.transform_type
    }

    /// Parameters of the input and output LWE ciphertexts.
    pub fn in_out_params(&self) -> &LWEParams {
        &self.in_out_params
    }

    pub fn tlwe_params(&self) -> &TLWEParams {
        &self.tlwe_params
    }

    pub fn ks_decomp_length(&self) -> usize {
        self.ks_decomp_length
    }

    pub fn ks_log2_base(&self) -> usize {
        self.ks_log2_base
    }

    pub fn bs_decomp_length(&self) -> usize {
        self.bs_decomp_length
    }

    pub fn bs_log2_base(&self) -> usize {
        self.bs_log2_base
    }
}

impl Default for TFHEParameters {
    fn default() -> Self {
        let max_stdev: f64 = default_max_stdev();
        let tlwe_n: usize = DEFAULT_RING_DEGREE;
        Self {
            transform_type: TransformType::FFT,
            in_out_params: LWEParams {
                n: DEFAULT_LWE_DIMENSION,
                alpha_min: default_ks_stdev(),
                alpha_max: max_stdev,
            },
            tlwe_params: TLWEParams {
                n: tlwe_n,
                k: 1,
                alpha_min: default_bs_stdev(),
                alpha_max: max_stdev,
                extracted_lweparams: LWEParams {
                    n: tlwe_n,
                    alpha_min: default_bs_stdev(),
                    alpha_max: max_stdev,
                },
            },
            ks_decomp_length: DEFAULT_KS_DECOMP_LENGTH,
            ks_log2_base: DEFAULT_KS_LOG2_BASE,
            bs_decomp_length: DEFAULT_BS_DECOMP_LENGTH,
            bs_log2_base: DEFAULT_BS_LOG2_BASE,
        }
    }
}
