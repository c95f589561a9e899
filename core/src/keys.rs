use tracing::{debug, info};

use backend::{Backend, Module, Torus32, mod_switch_to_torus32};
use sampling::source::Source;

use crate::{
    ConfigurationError, LWEKey, LWEKeySwitchKey, LWESampleArray, Result, TFHEParameters, TLWEKey,
};

/// Anything that carries a [TFHEParameters].
pub trait HasParameters {
    fn params(&self) -> &TFHEParameters;
}

/// Parameters of a secret or cloud key.
pub fn tfhe_parameters<K: HasParameters>(key: &K) -> &TFHEParameters {
    key.params()
}

/// The key-switching half of the bootstrapping key. It takes samples
/// extracted from the TLWE key back to the input LWE key.
#[derive(Clone, Debug, PartialEq)]
pub struct BootstrappingKey {
    pub(crate) ks: LWEKeySwitchKey,
}

impl BootstrappingKey {
    pub fn keyswitch_key(&self) -> &LWEKeySwitchKey {
        &self.ks
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SecretKey {
    pub(crate) params: TFHEParameters,
    pub(crate) lwe_key: LWEKey,
    pub(crate) tlwe_key: TLWEKey,
}

impl SecretKey {
    pub fn lwe_key(&self) -> &LWEKey {
        &self.lwe_key
    }

    pub fn tlwe_key(&self) -> &TLWEKey {
        &self.tlwe_key
    }
}

impl HasParameters for SecretKey {
    fn params(&self) -> &TFHEParameters {
        &self.params
    }
}

/// The public evaluation material.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudKey {
    pub(crate) params: TFHEParameters,
    pub(crate) bootstrapping_key: BootstrappingKey,
}

impl CloudKey {
    pub fn bootstrapping_key(&self) -> &BootstrappingKey {
        &self.bootstrapping_key
    }
}

impl HasParameters for CloudKey {
    fn params(&self) -> &TFHEParameters {
        &self.params
    }
}

fn check_module<B: Backend>(module: &Module<B>, params: &TFHEParameters) -> std::result::Result<(), ConfigurationError> {
    if module.transform() != params.transform_type() {
        return Err(ConfigurationError::TransformMismatch {
            module: module.transform(),
            params: params.transform_type(),
        });
    }
    if module.n() != params.tlwe_params().n() {
        return Err(ConfigurationError::DegreeMismatch {
            module: module.n(),
            params: params.tlwe_params().n(),
        });
    }
    Ok(())
}

pub fn generate_keypair<B: Backend>(
    module: &Module<B>,
    source: &mut Source,
    params: TFHEParameters,
) -> Result<(SecretKey, CloudKey)> {
    check_module(module, &params)?;

    info!(
        transform = ?params.transform_type(),
        lwe_n = params.in_out_params().n(),
        ring_degree = params.tlwe_params().n(),
        mask_size = params.tlwe_params().k(),
        "generating key pair"
    );

    let lwe_key: LWEKey = LWEKey::generate(*params.in_out_params(), source);
    let tlwe_key: TLWEKey = TLWEKey::generate(*params.tlwe_params(), source);
    let extracted_key: LWEKey = LWEKey::from_tlwe_key(*params.tlwe_params().extracted_lweparams(), &tlwe_key)?;

    debug!(
        in_n = extracted_key.n(),
        out_n = lwe_key.n(),
        "extracted key ready"
    );

    let ks: LWEKeySwitchKey = LWEKeySwitchKey::generate(
        module,
        extracted_key.n(),
        params.ks_decomp_length(),
        params.ks_log2_base(),
        &extracted_key,
        &lwe_key,
        source,
    )?;

    info!("key pair generated");

    Ok((
        SecretKey {
            params,
            lwe_key,
            tlwe_key,
        },
        CloudKey {
            params,
            bootstrapping_key: BootstrappingKey { ks },
        },
    ))
}

/// A zeroed batch of LWE ciphertexts with the input/output parameters.
pub fn empty_ciphertext(params: &TFHEParameters, shape: &[usize]) -> LWESampleArray {
    LWESampleArray::alloc(*params.in_out_params(), shape)
}

/// Encrypts each bit as +1/8 (true) or -1/8 (false) with noise `alpha_min`.
pub fn encrypt<B: Backend>(module: &Module<B>, source: &mut Source, key: &SecretKey, bits: &[bool]) -> Result<LWESampleArray> {
    let mut res: LWESampleArray = empty_ciphertext(&key.params, &[bits.len()]);
    let mus: Vec<Torus32> = bits.iter()
        .map(|&bit| mod_switch_to_torus32(if bit { 1 } else { -1 }, 8))
        .collect();
    let alpha: f64 = key.params.in_out_params().alpha_min();
    res.encrypt_sk(module, &mus, alpha, &key.lwe_key, source)?;
    Ok(res)
}

pub fn decrypt<B: Backend>(module: &Module<B>, key: &SecretKey, ct: &LWESampleArray) -> Result<Vec<bool>> {
    ct.decrypt(module, &key.lwe_key)
}

#[cfg(test)]
mod tests {
    use backend::{FFT64, NTT, TransformType};

    use crate::{Error, LWEParams, TLWEParams};

    use super::*;

    fn small_params(transform_type: TransformType) -> TFHEParameters {
        TFHEParameters::from_parts(
            transform_type,
            LWEParams::new(64, 1e-6, 1.0 / 64.0).unwrap(),
            TLWEParams::new(128, 1, 1e-8, 1.0 / 64.0).unwrap(),
            6,
            2,
            2,
            10,
        )
        .unwrap()
    }

    #[test]
    fn keypair_shares_parameters() {
        let module: Module<NTT> = Module::<NTT>::new(128);
        let mut source: Source = Source::new([0u8; 32]);
        let params: TFHEParameters = small_params(TransformType::NTT);
        let (sk, ck) = generate_keypair(&module, &mut source, params).unwrap();
        assert_eq!(tfhe_parameters(&sk), tfhe_parameters(&ck));

        let ks: &LWEKeySwitchKey = ck.bootstrapping_key().keyswitch_key();
        assert_eq!(ks.n(), 128);
        assert_eq!(ks.out_params().n(), 64);
        assert_eq!(ks.data().shape(), &[128, 6, 4]);
        assert_eq!(sk.tlwe_key().data().len(), 128);
    }

    #[test]
    fn module_must_match_parameters() {
        let mut source: Source = Source::new([0u8; 32]);
        let params: TFHEParameters = small_params(TransformType::NTT);
        assert_eq!(
            generate_keypair(&Module::<FFT64>::new(128), &mut source, params),
            Err(Error::Configuration(ConfigurationError::TransformMismatch {
                module: TransformType::FFT,
                params: TransformType::NTT,
            }))
        );
        assert!(matches!(
            generate_keypair(&Module::<NTT>::new(64), &mut source, params),
            Err(Error::Configuration(ConfigurationError::DegreeMismatch { .. }))
        ));
    }

    #[test]
    fn encrypt_decrypt_bits() {
        let module: Module<FFT64> = Module::<FFT64>::new(128);
        let mut source: Source = Source::new([1u8; 32]);
        let (sk, _) = generate_keypair(&module, &mut source, small_params(TransformType::FFT)).unwrap();
        let bits: Vec<bool> = (0..64).map(|i| i % 3 == 0).collect();
        let ct: LWESampleArray = encrypt(&module, &mut source, &sk, &bits).unwrap();
        assert_eq!(ct.shape(), &[64]);
        assert_eq!(decrypt(&module, &sk, &ct).unwrap(), bits);

        let empty: LWESampleArray = empty_ciphertext(tfhe_parameters(&sk), &[2, 3]);
        assert_eq!(empty.len(), 6);
        assert_eq!(empty.n(), 64);
    }
}
