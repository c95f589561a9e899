use itertools::{iproduct, izip};
use tracing::debug;

use backend::{Backend, Module, Torus32, znx::znx_sub_inplace};
use sampling::{
    distributions::{fill_normal, recenter},
    source::Source,
};

use crate::{
    ConfigurationError, LWEKey, LWEParams, LWESampleArray, LWESampleMut, LWESampleRef, Result,
    error::{check_dim, check_shape},
    lwe::encryption::encrypt_samples_with_external_noise,
};

/// Largest number of bits a key-switching decomposition may cover.
pub const KS_MAX_PRECISION: usize = 31;

/// Checks a gadget decomposition of `length` digits of `log2_base` bits against `max_bits`.
pub fn check_decomposition(length: usize, log2_base: usize, max_bits: usize) -> std::result::Result<(), ConfigurationError> {
    if length == 0 || log2_base == 0 {
        return Err(ConfigurationError::ZeroPrecision { length, log2_base });
    }
    if length * log2_base > max_bits {
        return Err(ConfigurationError::PrecisionOverflow {
            length,
            log2_base,
            max_bits,
        });
    }
    Ok(())
}

/// Encryptions of `in_key[l] * x * 2^(32-(j+1)*basebit)` under the output key.
///
/// Entries are stored row-major as `[l, j, x]` in a single sample array of
/// shape `[n, t, base]`. The `x = 0` entries are exact trivial zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct LWEKeySwitchKey {
    n: usize,
    t: usize,
    basebit: usize,
    base: usize,
    out_params: LWEParams,
    ks: LWESampleArray,
}

impl LWEKeySwitchKey {
    pub fn generate<B: Backend>(
        module: &Module<B>,
        n: usize,
        t: usize,
        basebit: usize,
        in_key: &LWEKey,
        out_key: &LWEKey,
        source: &mut Source,
    ) -> Result<Self> {
        check_decomposition(t, basebit, KS_MAX_PRECISION)?;
        check_dim(n, in_key.n())?;

        let base: usize = 1 << basebit;
        let out_params: LWEParams = *out_key.params();
        let alpha: f64 = out_params.alpha_min();

        debug!(n, t, basebit, out_n = out_params.n(), "generating key-switching key");

        let mut ks: LWESampleArray = LWESampleArray::alloc(out_params, &[n, t, base]);

        let mut noises: Vec<f64> = vec![0.0; n * t * (base - 1)];
        fill_normal(source, alpha, &mut noises);
        recenter(&mut noises);

        let messages: Vec<Torus32> = iproduct!(0..n, 0..t, 1..base)
            .map(|(l, j, x)| {
                let shift: usize = 32 - (j + 1) * basebit;
                ((in_key.key[l] as u32).wrapping_mul(x as u32) << shift) as Torus32
            })
            .collect();

        let samples: Vec<LWESampleMut> = ks
            .samples_mut()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| i % base != 0)
            .map(|(_, s)| s)
            .collect();

        encrypt_samples_with_external_noise(module, samples, &messages, &noises, alpha, out_key, source);

        Ok(Self {
            n,
            t,
            basebit,
            base,
            out_params,
            ks,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn t(&self) -> usize {
        self.t
    }

    pub fn basebit(&self) -> usize {
        self.basebit
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn out_params(&self) -> &LWEParams {
        &self.out_params
    }

    /// The underlying `[n, t, base]` sample array.
    pub fn data(&self) -> &LWESampleArray {
        &self.ks
    }

    pub fn entry(&self, l: usize, j: usize, x: usize) -> LWESampleRef<'_> {
        self.ks.at((l * self.t + j) * self.base + x)
    }

    /// Re-encrypts every sample of `sample` under the output key into `res`.
    pub fn translate<B: Backend>(&self, module: &Module<B>, res: &mut LWESampleArray, sample: &LWESampleArray) -> Result<()> {
        check_dim(self.n, sample.n())?;
        check_dim(self.out_params.n(), res.n())?;
        check_shape(res.shape(), sample.shape())?;

        let t: usize = self.t;
        let basebit: usize = self.basebit;
        let base: usize = self.base;
        let mask: u32 = (base - 1) as u32;

        // Rounds the input to the precision covered by the t digits.
        let prec_offset: Torus32 = 1 << (32 - (1 + basebit * t));

        let items: Vec<(LWESampleMut, LWESampleRef)> = izip!(res.samples_mut(), sample.samples()).collect();
        module.exec().for_each(items, |_, (mut r, s)| {
            r.set_trivial(s.b);
            s.a.iter().enumerate().for_each(|(l, a)| {
                let a_bar: u32 = a.wrapping_add(prec_offset) as u32;
                (0..t).for_each(|j| {
                    let digit: usize = ((a_bar >> (32 - (j + 1) * basebit)) & mask) as usize;
                    assert!(digit < base, "digit {digit} outside [0, {base})");
                    if digit != 0 {
                        let e: LWESampleRef = self.entry(l, j, digit);
                        znx_sub_inplace(r.a, e.a);
                        *r.b = r.b.wrapping_sub(e.b);
                        *r.current_variance += e.current_variance;
                    }
                });
            });
        });
        Ok(())
    }
}

impl LWESampleArray {
    /// self = key switch of `sample` through `ks`.
    pub fn keyswitch<B: Backend>(&mut self, module: &Module<B>, ks: &LWEKeySwitchKey, sample: &LWESampleArray) -> Result<()> {
        ks.translate(module, self, sample)
    }
}
