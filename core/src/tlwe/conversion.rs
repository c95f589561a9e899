use itertools::izip;

use backend::{Backend, Module};

use crate::{
    Result, TLWESampleArray, TLWESampleArrayDft,
    error::{check_dim, check_len, check_shape},
};

impl<B: Backend> TLWESampleArrayDft<B> {
    /// Transform-domain copy of `src`.
    pub fn from_tlwe(module: &Module<B>, src: &TLWESampleArray) -> Result<Self> {
        let mut res: Self = Self::alloc(module, src.params, &src.shape)?;
        res.forward_from(module, src)?;
        Ok(res)
    }

    pub fn forward_from(&mut self, module: &Module<B>, src: &TLWESampleArray) -> Result<()> {
        self.check_coeff(module, src)?;
        let n: usize = self.n();
        let size: usize = self.sample_size();
        module.exec().for_each_chunk_mut(&mut self.data, size, |i, res| {
            izip!(res.chunks_exact_mut(n), src.data[i * size..(i + 1) * size].chunks_exact(n))
                .for_each(|(r, a)| module.forward(r, a));
        });
        self.current_variances.copy_from_slice(&src.current_variances);
        Ok(())
    }

    /// Zero polynomials, zero variance.
    pub fn clear(&mut self) {
        self.data.fill(B::ScalarPrep::default());
        self.current_variances.fill(0.0);
    }

    /// self[i] += p[i] * sample[i] on all k+1 polynomials, where `p` holds one
    /// transformed polynomial per element. Variances are left to the caller.
    pub fn add_mul_to(&mut self, module: &Module<B>, p: &[B::ScalarPrep], sample: &TLWESampleArrayDft<B>) -> Result<()> {
        check_dim(module.n(), self.n())?;
        check_dim(self.n(), sample.n())?;
        check_dim(self.k(), sample.k())?;
        check_shape(&self.shape, &sample.shape)?;
        check_len(&self.shape, self.len() * self.n(), p.len())?;

        let n: usize = self.n();
        let size: usize = self.sample_size();
        module.exec().for_each_chunk_mut(&mut self.data, size, |i, res| {
            let p_i: &[B::ScalarPrep] = &p[i * n..(i + 1) * n];
            izip!(res.chunks_exact_mut(n), sample.data[i * size..(i + 1) * size].chunks_exact(n))
                .for_each(|(r, a)| module.add_mul(r, p_i, a));
        });
        Ok(())
    }

    fn check_coeff(&self, module: &Module<B>, other: &TLWESampleArray) -> Result<()> {
        check_dim(module.n(), self.n())?;
        check_dim(self.n(), other.n())?;
        check_dim(self.k(), other.k())?;
        check_shape(&self.shape, &other.shape)
    }
}

impl TLWESampleArray {
    /// Coefficient-domain copy of `src`.
    pub fn inverse_from<B: Backend>(&mut self, module: &Module<B>, src: &TLWESampleArrayDft<B>) -> Result<()> {
        src.check_coeff(module, self)?;
        let n: usize = self.n();
        let size: usize = self.sample_size();
        module.exec().for_each_chunk_mut(&mut self.data, size, |i, res| {
            izip!(res.chunks_exact_mut(n), src.data[i * size..(i + 1) * size].chunks_exact(n))
                .for_each(|(r, a)| module.inverse(r, a));
        });
        self.current_variances.copy_from_slice(&src.current_variances);
        Ok(())
    }
}
