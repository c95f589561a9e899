use itertools::izip;

use backend::{
    Backend, Module, Torus32,
    sampling::{AddNormal, FillUniform},
    znx::{znx_add_inplace, znx_sub_inplace},
};
use sampling::source::Source;

use crate::{
    Result, TLWEKey, TLWESampleArray, TLWESampleMut,
    error::{check_dim, check_len},
};

impl TLWESampleArray {
    fn check_key<B: Backend>(&self, module: &Module<B>, key: &TLWEKey) -> Result<()> {
        check_dim(self.n(), module.n())?;
        check_dim(self.n(), key.params().n())?;
        check_dim(self.k(), key.params().k())
    }

    /// Key polynomials in the transform domain, one after the other.
    fn key_dft<B: Backend>(&self, module: &Module<B>, key: &TLWEKey) -> Vec<B::ScalarPrep> {
        let n: usize = self.n();
        let mut key_dft: Vec<B::ScalarPrep> = module.alloc_dft(self.k());
        izip!(key_dft.chunks_exact_mut(n), key.data().chunks_exact(n)).for_each(|(res, s)| module.forward(res, s));
        key_dft
    }

    /// Fresh encryptions of the zero polynomial with noise of standard deviation `alpha`.
    pub fn encrypt_zero<B: Backend>(&mut self, module: &Module<B>, alpha: f64, key: &TLWEKey, source: &mut Source) -> Result<()> {
        self.check_key(module, key)?;

        let n: usize = self.n();
        let k: usize = self.k();
        let len: usize = self.len();

        let mut noise: Vec<Torus32> = vec![0; len * n];
        noise.add_normal(source, alpha);
        let mut masks: Vec<Torus32> = vec![0; len * k * n];
        masks.fill_uniform(source);

        let key_dft: Vec<B::ScalarPrep> = self.key_dft(module, key);
        let variance: f64 = alpha * alpha;

        let items: Vec<(TLWESampleMut, &[Torus32], &[Torus32])> =
            izip!(self.samples_mut(), noise.chunks_exact(n), masks.chunks_exact(k * n)).collect();

        module.exec().for_each(items, |_, (res, e, a)| {
            let (mask, body) = res.data.split_at_mut(k * n);
            mask.copy_from_slice(a);
            body.copy_from_slice(e);

            let mut a_dft: Vec<B::ScalarPrep> = module.alloc_dft(1);
            let mut acc: Vec<B::ScalarPrep> = module.alloc_dft(1);
            izip!(mask.chunks_exact(n), key_dft.chunks_exact(n)).for_each(|(a_i, s_i)| {
                module.forward(&mut a_dft, a_i);
                module.add_mul(&mut acc, &a_dft, s_i);
            });

            let mut prod: Vec<Torus32> = vec![0; n];
            module.inverse(&mut prod, &acc);
            znx_add_inplace(body, &prod);

            *res.current_variance = variance;
        });
        Ok(())
    }

    /// Encrypts the message polynomials `mus` (N coefficients per element).
    pub fn encrypt_sk<B: Backend>(
        &mut self,
        module: &Module<B>,
        mus: &[Torus32],
        alpha: f64,
        key: &TLWEKey,
        source: &mut Source,
    ) -> Result<()> {
        check_len(&self.shape, self.len() * self.n(), mus.len())?;
        self.encrypt_zero(module, alpha, key, source)?;
        let k: usize = self.k();
        let n: usize = self.n();
        let items: Vec<(TLWESampleMut, &[Torus32])> = izip!(self.samples_mut(), mus.chunks_exact(n)).collect();
        module
            .exec()
            .for_each(items, |_, (res, mu)| znx_add_inplace(&mut res.data[k * n..], mu));
        Ok(())
    }

    /// Body minus the sum of mask-key products, N coefficients per element.
    pub fn phase<B: Backend>(&self, module: &Module<B>, key: &TLWEKey) -> Result<Vec<Torus32>> {
        self.check_key(module, key)?;

        let n: usize = self.n();
        let k: usize = self.k();
        let key_dft: Vec<B::ScalarPrep> = self.key_dft(module, key);

        let mut phases: Vec<Torus32> = vec![0; self.len() * n];
        let items: Vec<(&mut [Torus32], &[Torus32])> =
            izip!(phases.chunks_exact_mut(n), self.data.chunks_exact(self.sample_size())).collect();

        module.exec().for_each(items, |_, (res, sample)| {
            let (mask, body) = sample.split_at(k * n);
            let mut a_dft: Vec<B::ScalarPrep> = module.alloc_dft(1);
            let mut acc: Vec<B::ScalarPrep> = module.alloc_dft(1);
            izip!(mask.chunks_exact(n), key_dft.chunks_exact(n)).for_each(|(a_i, s_i)| {
                module.forward(&mut a_dft, a_i);
                module.add_mul(&mut acc, &a_dft, s_i);
            });
            module.inverse(res, &acc);
            // res = body - <a, s>
            znx_sub_inplace(res, body);
            res.iter_mut().for_each(|x| *x = x.wrapping_neg());
        });
        Ok(phases)
    }
}

#[cfg(test)]
mod tests {
    use backend::{FFT64, NTT, t32tod, znx::znx_negacyclic_mul_ref};

    use crate::TLWEParams;

    use super::*;

    fn zero_phase_is_small<B: Backend>(module: &Module<B>) {
        let mut source: Source = Source::new([0u8; 32]);
        let n: usize = module.n();
        let params: TLWEParams = TLWEParams::new(n, 2, 1e-8, 1e-2).unwrap();
        let key: TLWEKey = TLWEKey::generate(params, &mut source);
        let mut ct: TLWESampleArray = TLWESampleArray::alloc(params, &[3]);
        ct.encrypt_zero(module, 1e-8, &key, &mut source).unwrap();

        let phases: Vec<Torus32> = ct.phase(module, &key).unwrap();
        assert!(phases.iter().all(|&p| t32tod(p).abs() < 1e-6));
        assert!(ct.current_variances().iter().all(|&v| v == 1e-8 * 1e-8));

        // Body against a schoolbook product on the first element.
        let mut want: Vec<Torus32> = vec![0; n];
        let mut tmp: Vec<Torus32> = vec![0; n];
        (0..2).for_each(|i| {
            znx_negacyclic_mul_ref(&mut tmp, key.poly(i), ct.poly(0, i));
            znx_add_inplace(&mut want, &tmp);
        });
        izip!(ct.body(0), &want).for_each(|(b, w)| assert!(t32tod(b.wrapping_sub(*w)).abs() < 1e-6));
    }

    #[test]
    fn fft64_encrypt_zero() {
        zero_phase_is_small(&Module::<FFT64>::new(256));
    }

    #[test]
    fn ntt_encrypt_zero() {
        zero_phase_is_small(&Module::<NTT>::new(256));
    }

    #[test]
    fn noiseless_message_round_trip() {
        let module: Module<NTT> = Module::<NTT>::new(64);
        let mut source: Source = Source::new([1u8; 32]);
        let params: TLWEParams = TLWEParams::new(64, 1, 0.0, 1e-2).unwrap();
        let key: TLWEKey = TLWEKey::generate(params, &mut source);
        let mus: Vec<Torus32> = (0..128).map(|i| (i as i32).wrapping_mul(0x0101_0101)).collect();
        let mut ct: TLWESampleArray = TLWESampleArray::alloc(params, &[2]);
        ct.encrypt_sk(&module, &mus, 0.0, &key, &mut source).unwrap();
        assert_eq!(ct.phase(&module, &key).unwrap(), mus);
        assert!(ct.encrypt_sk(&module, &mus[..64], 0.0, &key, &mut source).is_err());
    }

    #[test]
    fn key_must_match_module() {
        let module: Module<FFT64> = Module::<FFT64>::new(32);
        let mut source: Source = Source::new([2u8; 32]);
        let params: TLWEParams = TLWEParams::new(64, 1, 0.0, 1e-2).unwrap();
        let key: TLWEKey = TLWEKey::generate(params, &mut source);
        let mut ct: TLWESampleArray = TLWESampleArray::alloc(params, &[1]);
        assert!(ct.encrypt_zero(&module, 0.0, &key, &mut source).is_err());
    }
}
