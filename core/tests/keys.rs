use sampling::source::Source;
use torus_core::{
    CloudKey, Executor, FFT64, LWEParams, LWESampleArray, Module, NTT, SecretKey, TFHEParameters, TLWEParams,
    TransformType, decrypt, encrypt, generate_keypair, tfhe_parameters,
};

fn small_params(transform_type: TransformType) -> TFHEParameters {
    TFHEParameters::from_parts(
        transform_type,
        LWEParams::new(80, 1e-6, 1.0 / 64.0).unwrap(),
        TLWEParams::new(256, 1, 1e-8, 1.0 / 64.0).unwrap(),
        8,
        2,
        2,
        10,
    )
    .unwrap()
}

fn keygen_and_encrypt(exec: Executor) -> (SecretKey, CloudKey, LWESampleArray) {
    let module: Module<FFT64> = Module::<FFT64>::with_executor(256, exec);
    let mut source: Source = Source::new([9u8; 32]);
    let (sk, ck) = generate_keypair(&module, &mut source, small_params(TransformType::FFT)).unwrap();
    let bits: Vec<bool> = (0..33).map(|i| i % 2 == 0).collect();
    let ct: LWESampleArray = encrypt(&module, &mut source, &sk, &bits).unwrap();
    (sk, ck, ct)
}

#[test]
fn executors_produce_identical_keys_and_ciphertexts() {
    assert_eq!(keygen_and_encrypt(Executor::Sequential), keygen_and_encrypt(Executor::Parallel));
}

#[test]
fn keys_do_not_depend_on_the_transform() {
    let mut source: Source = Source::new([4u8; 32]);
    let (sk_fft, ck_fft) = generate_keypair(&Module::<FFT64>::new(256), &mut source, small_params(TransformType::FFT)).unwrap();
    let mut source: Source = Source::new([4u8; 32]);
    let (sk_ntt, ck_ntt) = generate_keypair(&Module::<NTT>::new(256), &mut source, small_params(TransformType::NTT)).unwrap();

    assert_eq!(sk_fft.lwe_key(), sk_ntt.lwe_key());
    assert_eq!(sk_fft.tlwe_key(), sk_ntt.tlwe_key());
    assert_eq!(ck_fft.bootstrapping_key(), ck_ntt.bootstrapping_key());
    assert_eq!(tfhe_parameters(&ck_ntt).transform_type(), TransformType::NTT);
}

#[test]
fn bits_survive_encryption() {
    let module: Module<NTT> = Module::<NTT>::new(256);
    let mut source: Source = Source::new([5u8; 32]);
    let (sk, _) = generate_keypair(&module, &mut source, small_params(TransformType::NTT)).unwrap();
    (0..8).for_each(|_| {
        let bits: Vec<bool> = (0..256).map(|_| source.next_bit() == 1).collect();
        let ct: LWESampleArray = encrypt(&module, &mut source, &sk, &bits).unwrap();
        assert_eq!(decrypt(&module, &sk, &ct).unwrap(), bits);
    });
}

#[test]
fn extracted_samples_switch_back_to_the_lwe_key() {
    let module: Module<NTT> = Module::<NTT>::new(256);
    let mut source: Source = Source::new([6u8; 32]);
    let params: TFHEParameters = small_params(TransformType::NTT);
    let (sk, ck) = generate_keypair(&module, &mut source, params).unwrap();

    // Encrypt +-1/8 in the constant coefficient, extract, key switch, decrypt.
    let bits: Vec<bool> = vec![true, false, false, true, true];
    let mut mus: Vec<i32> = vec![0; bits.len() * 256];
    bits.iter().enumerate().for_each(|(i, &b)| {
        mus[i * 256] = backend::mod_switch_to_torus32(if b { 1 } else { -1 }, 8);
    });
    let mut tlwe: torus_core::TLWESampleArray = torus_core::TLWESampleArray::alloc(*params.tlwe_params(), &[bits.len()]);
    tlwe.encrypt_sk(&module, &mus, params.tlwe_params().alpha_min(), sk.tlwe_key(), &mut source)
        .unwrap();

    let mut extracted: LWESampleArray = LWESampleArray::alloc(*params.tlwe_params().extracted_lweparams(), &[bits.len()]);
    extracted.extract_from_tlwe(&module, &tlwe).unwrap();

    let mut out: LWESampleArray = torus_core::empty_ciphertext(&params, &[bits.len()]);
    out.keyswitch(&module, ck.bootstrapping_key().keyswitch_key(), &extracted)
        .unwrap();
    assert_eq!(decrypt(&module, &sk, &out).unwrap(), bits);
}
