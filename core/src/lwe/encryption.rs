use itertools::izip;

use backend::{Backend, Module, Torus32, dtot32, sampling::FillUniform};
use sampling::{distributions::fill_normal, source::Source};

use crate::{
    LWEKey, LWESampleArray, LWESampleMut, Result,
    error::{check_dim, check_len},
    lwe::ciphertext::dot,
};

impl LWESampleArray {
    /// Encrypts `messages[i]` into sample `i` with fresh noise of standard deviation `alpha`.
    pub fn encrypt_sk<B: Backend>(
        &mut self,
        module: &Module<B>,
        messages: &[Torus32],
        alpha: f64,
        key: &LWEKey,
        source: &mut Source,
    ) -> Result<()> {
        check_len(&self.shape, self.len(), messages.len())?;
        check_dim(self.n(), key.n())?;
        let mut noises: Vec<f64> = vec![0.0; messages.len()];
        fill_normal(source, alpha, &mut noises);
        encrypt_samples_with_external_noise(module, self.samples_mut(), messages, &noises, alpha, key, source);
        Ok(())
    }

    /// Same as [LWESampleArray::encrypt_sk] but with caller-supplied noise.
    /// The recorded variance is still `alpha^2`.
    pub fn encrypt_sk_with_external_noise<B: Backend>(
        &mut self,
        module: &Module<B>,
        messages: &[Torus32],
        noises: &[f64],
        alpha: f64,
        key: &LWEKey,
        source: &mut Source,
    ) -> Result<()> {
        check_len(&self.shape, self.len(), messages.len())?;
        check_len(&self.shape, self.len(), noises.len())?;
        check_dim(self.n(), key.n())?;
        encrypt_samples_with_external_noise(module, self.samples_mut(), messages, noises, alpha, key, source);
        Ok(())
    }
}

/// Masks are drawn up front so that the output only depends on the seed.
pub(crate) fn encrypt_samples_with_external_noise<B: Backend>(
    module: &Module<B>,
    mut samples: Vec<LWESampleMut<'_>>,
    messages: &[Torus32],
    noises: &[f64],
    alpha: f64,
    key: &LWEKey,
    source: &mut Source,
) {
    debug_assert_eq!(samples.len(), messages.len());
    debug_assert_eq!(samples.len(), noises.len());

    samples.iter_mut().for_each(|s| s.a.fill_uniform(source));

    let variance: f64 = alpha * alpha;
    let items: Vec<(LWESampleMut, &Torus32, &f64)> = izip!(samples, messages, noises).collect();
    module.exec().for_each(items, |_, (s, m, e)| {
        *s.b = m.wrapping_add(dtot32(*e)).wrapping_add(dot(s.a, &key.key));
        *s.current_variance = variance;
    });
}
