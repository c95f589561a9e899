use backend::{Backend, Module, Torus32};

use crate::{LWEKey, LWESampleArray, Result, error::check_dim, lwe::ciphertext::dot};

impl LWESampleArray {
    /// b - <a, s> for every sample.
    pub fn phase<B: Backend>(&self, module: &Module<B>, key: &LWEKey) -> Result<Vec<Torus32>> {
        check_dim(self.n(), key.n())?;
        Ok(module.exec().map(self.len(), |i| {
            let s = self.at(i);
            s.b.wrapping_sub(dot(s.a, &key.key))
        }))
    }

    /// Sign of the phase, reading the torus as signed 32-bit integers.
    pub fn decrypt<B: Backend>(&self, module: &Module<B>, key: &LWEKey) -> Result<Vec<bool>> {
        Ok(self.phase(module, key)?.into_iter().map(|p| p > 0).collect())
    }
}
