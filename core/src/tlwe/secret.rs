use backend::sampling::FillBinary;
use sampling::source::Source;

use crate::{Result, TLWEParams, error::check_dim, lwe::secret::assert_binary};

/// k binary polynomials of degree N, laid end to end.
#[derive(Clone, Debug, PartialEq)]
pub struct TLWEKey {
    pub(crate) params: TLWEParams,
    pub(crate) key: Vec<i32>,
}

impl TLWEKey {
    pub fn generate(params: TLWEParams, source: &mut Source) -> Self {
        let mut key: Vec<i32> = vec![0; params.k() * params.n()];
        key.fill_binary(source);
        Self { params, key }
    }

    /// Wraps explicit key polynomials. Panics if a coefficient is not 0 or 1.
    pub fn from_vec(params: TLWEParams, key: Vec<i32>) -> Result<Self> {
        check_dim(params.k() * params.n(), key.len())?;
        assert_binary(&key);
        Ok(Self { params, key })
    }

    pub fn params(&self) -> &TLWEParams {
        &self.params
    }

    /// The i-th key polynomial.
    pub fn poly(&self, i: usize) -> &[i32] {
        let n: usize = self.params.n();
        &self.key[i * n..(i + 1) * n]
    }

    pub fn data(&self) -> &[i32] {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polys_tile_the_key() {
        let mut source: Source = Source::new([0u8; 32]);
        let params: TLWEParams = TLWEParams::new(8, 3, 0.0, 0.0).unwrap();
        let key: TLWEKey = TLWEKey::generate(params, &mut source);
        assert_eq!(key.data().len(), 24);
        assert_eq!(key.poly(2), &key.data()[16..24]);
        assert!(key.data().iter().all(|&s| s == 0 || s == 1));
    }
}
