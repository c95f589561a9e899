use itertools::izip;

use backend::{Backend, Module};

use crate::{
    Error, LWESampleArray, LWESampleMut, Result, TLWESampleArray, TLWESampleRef,
    error::check_shape,
};

impl LWESampleArray {
    /// Extracts coefficient `index` of every TLWE sample of `x` as an LWE
    /// sample under the key [crate::LWEKey::from_tlwe_key].
    pub fn extract_from_tlwe_index<B: Backend>(&mut self, module: &Module<B>, x: &TLWESampleArray, index: usize) -> Result<()> {
        let n: usize = x.n();
        let k: usize = x.k();

        if self.n() != n * k {
            return Err(Error::ShapeMismatch {
                expected: vec![n * k],
                actual: vec![self.n()],
            });
        }
        check_shape(self.shape(), x.shape())?;
        if index >= n {
            return Err(Error::IndexOutOfRange { index, n });
        }

        let items: Vec<(LWESampleMut, TLWESampleRef)> = izip!(self.samples_mut(), x.samples()).collect();
        module.exec().for_each(items, |_, (res, s)| {
            izip!(res.a.chunks_exact_mut(n), s.data.chunks_exact(n).take(k)).for_each(|(a, poly)| {
                (0..=index).for_each(|p| a[p] = poly[index - p]);
                (index + 1..n).for_each(|p| a[p] = poly[n + index - p].wrapping_neg());
            });
            *res.b = s.data[k * n + index];
            *res.current_variance = s.current_variance;
        });
        Ok(())
    }

    /// Extracts the constant coefficient.
    pub fn extract_from_tlwe<B: Backend>(&mut self, module: &Module<B>, x: &TLWESampleArray) -> Result<()> {
        self.extract_from_tlwe_index(module, x, 0)
    }
}
