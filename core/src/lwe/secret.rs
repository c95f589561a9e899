use backend::sampling::FillBinary;
use sampling::source::Source;

use crate::{LWEParams, Result, TLWEKey, error::check_dim};

/// Binary LWE secret key.
#[derive(Clone, Debug, PartialEq)]
pub struct LWEKey {
    pub(crate) params: LWEParams,
    pub(crate) key: Vec<i32>,
}

impl LWEKey {
    /// Draws `params.n` independent uniform bits.
    pub fn generate(params: LWEParams, source: &mut Source) -> Self {
        let mut key: Vec<i32> = vec![0; params.n()];
        key.fill_binary(source);
        Self { params, key }
    }

    /// Wraps an explicit key. Panics if an entry is not 0 or 1.
    pub fn from_vec(params: LWEParams, key: Vec<i32>) -> Result<Self> {
        check_dim(params.n(), key.len())?;
        assert_binary(&key);
        Ok(Self { params, key })
    }

    /// The LWE key under which samples extracted from TLWE samples of `tlwe_key` decrypt:
    /// the k key polynomials laid end to end.
    pub fn from_tlwe_key(params: LWEParams, tlwe_key: &TLWEKey) -> Result<Self> {
        check_dim(params.n(), tlwe_key.data().len())?;
        Ok(Self {
            params,
            key: tlwe_key.data().to_vec(),
        })
    }

    pub fn params(&self) -> &LWEParams {
        &self.params
    }

    pub fn n(&self) -> usize {
        self.params.n()
    }

    pub fn data(&self) -> &[i32] {
        &self.key
    }
}

pub(crate) fn assert_binary(key: &[i32]) {
    assert!(
        key.iter().all(|&s| s == 0 || s == 1),
        "secret key entries must be binary"
    );
}
