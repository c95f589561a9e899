use itertools::izip;

use backend::{
    Backend, Module, Torus32,
    znx::{znx_add_inplace, znx_mul_xp_minus_one, znx_sub_inplace},
};

use crate::{
    Result, TLWESampleArray, TLWESampleMut, TLWESampleRef,
    error::check_len,
};

impl TLWESampleArray {
    fn zip_apply<B, F>(&mut self, module: &Module<B>, other: &TLWESampleArray, f: F) -> Result<()>
    where
        B: Backend,
        F: Fn(TLWESampleMut, TLWESampleRef) + Send + Sync,
    {
        self.check_compatible(other)?;
        let items: Vec<(TLWESampleMut, TLWESampleRef)> = izip!(self.samples_mut(), other.samples()).collect();
        module.exec().for_each(items, |_, (res, a)| f(res, a));
        Ok(())
    }

    pub fn copy_from<B: Backend>(&mut self, module: &Module<B>, other: &TLWESampleArray) -> Result<()> {
        self.zip_apply(module, other, |res, a| {
            res.data.copy_from_slice(a.data);
            *res.current_variance = a.current_variance;
        })
    }

    /// self += other on all k+1 polynomials. Variances add.
    pub fn add_to<B: Backend>(&mut self, module: &Module<B>, other: &TLWESampleArray) -> Result<()> {
        self.zip_apply(module, other, |res, a| {
            znx_add_inplace(res.data, a.data);
            *res.current_variance += a.current_variance;
        })
    }

    /// self -= other on all k+1 polynomials. Variances add.
    pub fn sub_to<B: Backend>(&mut self, module: &Module<B>, other: &TLWESampleArray) -> Result<()> {
        self.zip_apply(module, other, |res, a| {
            znx_sub_inplace(res.data, a.data);
            *res.current_variance += a.current_variance;
        })
    }

    /// Zero masks, body `mus[i*N..(i+1)*N]`, zero variance.
    pub fn noiseless_trivial<B: Backend>(&mut self, module: &Module<B>, mus: &[Torus32]) -> Result<()> {
        let n: usize = self.n();
        let k: usize = self.k();
        check_len(&self.shape, self.len() * n, mus.len())?;
        let items: Vec<(TLWESampleMut, &[Torus32])> = izip!(self.samples_mut(), mus.chunks_exact(n)).collect();
        module.exec().for_each(items, |_, (res, mu)| {
            let (mask, body) = res.data.split_at_mut(k * n);
            mask.fill(0);
            body.copy_from_slice(mu);
            *res.current_variance = 0.0;
        });
        Ok(())
    }

    /// self[i] = (X^ai[i] - 1) * sample[i] mod X^N+1.
    ///
    /// Each noise coefficient becomes a signed sum of two independent ones,
    /// except when ai[i] is 0 or N mod 2N where the product is 0 or -2.
    pub fn mul_by_xai_minus_one<B: Backend>(
        &mut self,
        module: &Module<B>,
        ai: &[i32],
        sample: &TLWESampleArray,
    ) -> Result<()> {
        self.check_compatible(sample)?;
        check_len(&self.shape, self.len(), ai.len())?;

        let n: usize = self.n();
        let items: Vec<(TLWESampleMut, TLWESampleRef, &i32)> = izip!(self.samples_mut(), sample.samples(), ai).collect();
        module.exec().for_each(items, |_, (res, a, p)| {
            izip!(res.data.chunks_exact_mut(n), a.data.chunks_exact(n)).for_each(|(r, s)| znx_mul_xp_minus_one(*p as i64, r, s));
            let p: usize = (*p as i64).rem_euclid(2 * n as i64) as usize;
            *res.current_variance = match p {
                0 => 0.0,
                p if p == n => 4.0 * a.current_variance,
                _ => 2.0 * a.current_variance,
            };
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use backend::{Executor, FFT64, znx::znx_negacyclic_mul_ref};
    use sampling::source::Source;

    use crate::{TLWEKey, TLWEParams};

    use super::*;

    fn encrypt(module: &Module<FFT64>, key: &TLWEKey, source: &mut Source, count: usize) -> TLWESampleArray {
        let mut ct: TLWESampleArray = TLWESampleArray::alloc(*key.params(), &[count]);
        ct.encrypt_zero(module, 1e-7, key, source).unwrap();
        ct
    }

    #[test]
    fn mul_by_xai_minus_one_matches_schoolbook() {
        let module: Module<FFT64> = Module::<FFT64>::with_executor(16, Executor::Sequential);
        let mut source: Source = Source::new([0u8; 32]);
        let key: TLWEKey = TLWEKey::generate(TLWEParams::new(16, 2, 1e-7, 1e-2).unwrap(), &mut source);
        let ai: Vec<i32> = vec![0, 1, 5, 16, 17, 31, 32, -3];
        let ct: TLWESampleArray = encrypt(&module, &key, &mut source, ai.len());

        let mut res: TLWESampleArray = TLWESampleArray::alloc(*key.params(), &[ai.len()]);
        res.mul_by_xai_minus_one(&module, &ai, &ct).unwrap();

        ai.iter().enumerate().for_each(|(i, &a)| {
            // X^a - 1 as an explicit polynomial.
            let e: usize = (a as i64).rem_euclid(32) as usize;
            let mut monomial: Vec<i32> = vec![0; 16];
            if e < 16 {
                monomial[e] += 1;
            } else {
                monomial[e - 16] -= 1;
            }
            monomial[0] -= 1;

            let mut want: Vec<Torus32> = vec![0; 16];
            (0..3).for_each(|p| {
                znx_negacyclic_mul_ref(&mut want, &monomial, ct.poly(i, p));
                assert_eq!(res.poly(i, p), &want[..], "a={a} p={p}");
            });
        });

        let v: f64 = 1e-7 * 1e-7;
        assert_eq!(res.current_variances()[0], 0.0);
        assert_eq!(res.current_variances()[1], 2.0 * v);
        assert_eq!(res.current_variances()[3], 4.0 * v);
        assert_eq!(res.current_variances()[6], 0.0);
    }

    #[test]
    fn add_sub_copy() {
        let module: Module<FFT64> = Module::<FFT64>::new(32);
        let mut source: Source = Source::new([1u8; 32]);
        let key: TLWEKey = TLWEKey::generate(TLWEParams::new(32, 1, 1e-7, 1e-2).unwrap(), &mut source);
        let c1: TLWESampleArray = encrypt(&module, &key, &mut source, 2);
        let c2: TLWESampleArray = encrypt(&module, &key, &mut source, 2);

        let mut acc: TLWESampleArray = TLWESampleArray::alloc(*key.params(), &[2]);
        acc.copy_from(&module, &c1).unwrap();
        assert_eq!(acc, c1);

        acc.add_to(&module, &c2).unwrap();
        izip!(&acc.data, &c1.data, &c2.data).for_each(|(s, a, b)| assert_eq!(*s, a.wrapping_add(*b)));
        assert_eq!(acc.current_variances()[1], 2.0 * 1e-7 * 1e-7);

        acc.sub_to(&module, &c2).unwrap();
        assert_eq!(acc.data, c1.data);

        let mut other: TLWESampleArray = TLWESampleArray::alloc(*key.params(), &[3]);
        assert!(other.add_to(&module, &c1).is_err());
    }

    #[test]
    fn trivial_phase_is_message() {
        let module: Module<FFT64> = Module::<FFT64>::new(16);
        let mut source: Source = Source::new([2u8; 32]);
        let key: TLWEKey = TLWEKey::generate(TLWEParams::new(16, 3, 0.0, 1e-2).unwrap(), &mut source);
        let mus: Vec<Torus32> = (0..32).map(|i| i * 1_000_003).collect();
        let mut ct: TLWESampleArray = TLWESampleArray::alloc(*key.params(), &[2]);
        ct.noiseless_trivial(&module, &mus).unwrap();
        assert_eq!(ct.phase(&module, &key).unwrap(), mus);
        assert!(ct.current_variances().iter().all(|&v| v == 0.0));

        // Shifting the body of element 1 shifts its phase.
        ct.poly_mut(1, 3).iter_mut().for_each(|x| *x = x.wrapping_add(7));
        let phases: Vec<Torus32> = ct.phase(&module, &key).unwrap();
        assert_eq!(&phases[..16], &mus[..16]);
        izip!(&phases[16..], &mus[16..]).for_each(|(p, m)| assert_eq!(*p, m.wrapping_add(7)));
    }
}
