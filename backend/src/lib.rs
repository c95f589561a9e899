pub mod executor;
pub mod fft64;
pub mod module;
pub mod ntt;
pub mod sampling;
pub mod torus;
pub mod znx;

pub use executor::Executor;
pub use fft64::FFT64;
pub use module::{Backend, Module, TransformType, UnsupportedTransform};
pub use ntt::NTT;
pub use torus::*;

#[cfg(test)]
mod tests {
    use sampling::source::Source;

    use crate::{Backend, FFT64, Module, NTT, Torus32, sampling::FillUniform, znx::znx_negacyclic_mul_ref};

    fn round_trip<B: Backend>(module: &Module<B>, source: &mut Source) {
        let n: usize = module.n();
        let mut a: Vec<Torus32> = vec![0; n];
        a.fill_uniform(source);
        let mut a_dft: Vec<B::ScalarPrep> = module.alloc_dft(1);
        let mut back: Vec<Torus32> = vec![0; n];
        module.forward(&mut a_dft, &a);
        module.inverse(&mut back, &a_dft);
        assert_eq!(a, back);
    }

    fn convolution<B: Backend>(module: &Module<B>, source: &mut Source) {
        let n: usize = module.n();
        let key: Vec<i32> = (0..n).map(|_| source.next_bit()).collect();
        let mut small: Vec<i32> = (0..n).map(|_| source.next_i32() >> 26).collect();
        small[0] = -32;
        let mut a: Vec<Torus32> = vec![0; n];
        a.fill_uniform(source);

        let mut have: Vec<Torus32> = vec![0; n];
        let mut want: Vec<Torus32> = vec![0; n];

        module.negacyclic_mul(&mut have, &key, &a);
        znx_negacyclic_mul_ref(&mut want, &key, &a);
        assert_eq!(have, want);

        module.negacyclic_mul(&mut have, &small, &a);
        znx_negacyclic_mul_ref(&mut want, &small, &a);
        assert_eq!(have, want);
    }

    fn accumulation<B: Backend>(module: &Module<B>, source: &mut Source) {
        let n: usize = module.n();
        let s0: Vec<i32> = (0..n).map(|_| source.next_bit()).collect();
        let s1: Vec<i32> = (0..n).map(|_| source.next_bit()).collect();
        let mut a0: Vec<Torus32> = vec![0; n];
        let mut a1: Vec<Torus32> = vec![0; n];
        a0.fill_uniform(source);
        a1.fill_uniform(source);

        let mut dft: Vec<Vec<B::ScalarPrep>> = (0..4).map(|_| module.alloc_dft(1)).collect();
        module.forward(&mut dft[0], &s0);
        module.forward(&mut dft[1], &a0);
        module.forward(&mut dft[2], &s1);
        module.forward(&mut dft[3], &a1);

        let mut acc: Vec<B::ScalarPrep> = module.alloc_dft(1);
        module.add_mul(&mut acc, &dft[0], &dft[1]);
        module.add_mul(&mut acc, &dft[2], &dft[3]);

        let mut have: Vec<Torus32> = vec![0; n];
        module.inverse(&mut have, &acc);

        let mut want: Vec<Torus32> = vec![0; n];
        let mut tmp: Vec<Torus32> = vec![0; n];
        znx_negacyclic_mul_ref(&mut want, &s0, &a0);
        znx_negacyclic_mul_ref(&mut tmp, &s1, &a1);
        crate::znx::znx_add_inplace(&mut want, &tmp);
        assert_eq!(have, want);
    }

    #[test]
    fn fft64_round_trip() {
        let mut source: Source = Source::new([0u8; 32]);
        [2u64, 4, 16, 256, 1024]
            .iter()
            .for_each(|&n| round_trip(&Module::<FFT64>::new(n), &mut source));
    }

    #[test]
    fn ntt_round_trip() {
        let mut source: Source = Source::new([0u8; 32]);
        [2u64, 4, 16, 256, 1024]
            .iter()
            .for_each(|&n| round_trip(&Module::<NTT>::new(n), &mut source));
    }

    #[test]
    fn fft64_convolution() {
        let mut source: Source = Source::new([1u8; 32]);
        [2u64, 8, 64, 1024]
            .iter()
            .for_each(|&n| convolution(&Module::<FFT64>::new(n), &mut source));
    }

    #[test]
    fn ntt_convolution() {
        let mut source: Source = Source::new([1u8; 32]);
        [2u64, 8, 64, 1024]
            .iter()
            .for_each(|&n| convolution(&Module::<NTT>::new(n), &mut source));
    }

    #[test]
    fn transform_domain_accumulation() {
        let mut source: Source = Source::new([2u8; 32]);
        accumulation(&Module::<FFT64>::new(512), &mut source);
        accumulation(&Module::<NTT>::new(512), &mut source);
    }

    #[test]
    fn monomial_product_through_transform() {
        let n: usize = 64;
        let module: Module<FFT64> = Module::<FFT64>::new(n as u64);
        let a: Vec<Torus32> = (0..n as i32).map(|i| i * 1000 - 7).collect();
        let mut x3: Vec<i32> = vec![0; n];
        x3[3] = 1;
        let mut have: Vec<Torus32> = vec![0; n];
        let mut want: Vec<Torus32> = vec![0; n];
        module.negacyclic_mul(&mut have, &x3, &a);
        crate::znx::znx_rotate(3, &mut want, &a);
        assert_eq!(have, want);
    }
}
