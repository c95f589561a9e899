use itertools::izip;

use backend::{
    Backend, Module, Torus32,
    znx::{znx_add_inplace, znx_negate, znx_sub_inplace},
};

use crate::{LWESampleArray, LWESampleMut, LWESampleRef, Result, error::check_len};

impl LWESampleArray {
    fn zip_apply<B, F>(&mut self, module: &Module<B>, other: &LWESampleArray, f: F) -> Result<()>
    where
        B: Backend,
        F: Fn(LWESampleMut, LWESampleRef) + Send + Sync,
    {
        self.check_compatible(other)?;
        let items: Vec<(LWESampleMut, LWESampleRef)> = izip!(self.samples_mut(), other.samples()).collect();
        module.exec().for_each(items, |_, (res, a)| f(res, a));
        Ok(())
    }

    pub fn copy_from<B: Backend>(&mut self, module: &Module<B>, other: &LWESampleArray) -> Result<()> {
        self.zip_apply(module, other, |res, a| {
            res.a.copy_from_slice(a.a);
            *res.b = a.b;
            *res.current_variance = a.current_variance;
        })
    }

    /// self = -other. The variance is unchanged.
    pub fn negate_from<B: Backend>(&mut self, module: &Module<B>, other: &LWESampleArray) -> Result<()> {
        self.zip_apply(module, other, |res, a| {
            znx_negate(res.a, a.a);
            *res.b = a.b.wrapping_neg();
            *res.current_variance = a.current_variance;
        })
    }

    /// Sets every sample to the noiseless trivial encryption of `mu`.
    pub fn noiseless_trivial<B: Backend>(&mut self, module: &Module<B>, mu: Torus32) {
        module.exec().for_each(self.samples_mut(), |_, mut res| res.set_trivial(mu));
    }

    /// Sets sample `i` to the noiseless trivial encryption of `mus[i]`.
    pub fn noiseless_trivial_array<B: Backend>(&mut self, module: &Module<B>, mus: &[Torus32]) -> Result<()> {
        check_len(&self.shape, self.len(), mus.len())?;
        let items: Vec<(LWESampleMut, &Torus32)> = izip!(self.samples_mut(), mus).collect();
        module.exec().for_each(items, |_, (mut res, mu)| res.set_trivial(*mu));
        Ok(())
    }

    /// self += other. Variances add.
    pub fn add_to<B: Backend>(&mut self, module: &Module<B>, other: &LWESampleArray) -> Result<()> {
        self.zip_apply(module, other, |res, a| {
            znx_add_inplace(res.a, a.a);
            *res.b = res.b.wrapping_add(a.b);
            *res.current_variance += a.current_variance;
        })
    }

    /// self -= other. Variances still add since the noises are independent.
    pub fn sub_to<B: Backend>(&mut self, module: &Module<B>, other: &LWESampleArray) -> Result<()> {
        self.zip_apply(module, other, |res, a| {
            znx_sub_inplace(res.a, a.a);
            *res.b = res.b.wrapping_sub(a.b);
            *res.current_variance += a.current_variance;
        })
    }

    /// self += p * other. The variance grows by `p^2 * var(other)`.
    pub fn add_mul_to<B: Backend>(&mut self, module: &Module<B>, p: i32, other: &LWESampleArray) -> Result<()> {
        let p2: f64 = (p as f64) * (p as f64);
        self.zip_apply(module, other, |res, a| {
            izip!(res.a.iter_mut(), a.a).for_each(|(r, x)| *r = r.wrapping_add(p.wrapping_mul(*x)));
            *res.b = res.b.wrapping_add(p.wrapping_mul(a.b));
            *res.current_variance += p2 * a.current_variance;
        })
    }

    /// self -= p * other. The variance grows by `p^2 * var(other)`.
    pub fn sub_mul_to<B: Backend>(&mut self, module: &Module<B>, p: i32, other: &LWESampleArray) -> Result<()> {
        let p2: f64 = (p as f64) * (p as f64);
        self.zip_apply(module, other, |res, a| {
            izip!(res.a.iter_mut(), a.a).for_each(|(r, x)| *r = r.wrapping_sub(p.wrapping_mul(*x)));
            *res.b = res.b.wrapping_sub(p.wrapping_mul(a.b));
            *res.current_variance += p2 * a.current_variance;
        })
    }
}
