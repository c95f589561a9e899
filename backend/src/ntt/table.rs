use itertools::izip;

use crate::ntt::prime::{GENERATOR, Q, add_mod, inv_mod, mul_mod, pow_mod, sub_mod};

/// Powers of a primitive 2N-th root of unity in bit-reversed order.
pub struct Table {
    n: usize,
    psi_forward_rev: Vec<u64>,
    psi_backward_rev: Vec<u64>,
    n_inv: u64,
}

impl Table {
    pub fn new(n: usize) -> Table {
        assert!(n.is_power_of_two() && n >= 2, "invalid argument: n = {n} is not a power of two >= 2");

        let two_n: u64 = (n as u64) << 1;
        assert!((Q - 1) % two_n == 0, "Q has no {two_n}-th root of unity");

        let psi: u64 = pow_mod(GENERATOR, (Q - 1) / two_n);
        assert_eq!(pow_mod(psi, n as u64), Q - 1, "psi is not a primitive {two_n}-th root");
        let psi_inv: u64 = inv_mod(psi);

        let log_n: u32 = n.trailing_zeros();

        let mut psi_forward_rev: Vec<u64> = vec![0; n];
        let mut psi_backward_rev: Vec<u64> = vec![0; n];

        let mut powers_forward: u64 = 1;
        let mut powers_backward: u64 = 1;

        (0..n).for_each(|i| {
            let i_rev: usize = i.reverse_bits() >> (usize::BITS - log_n);
            psi_forward_rev[i_rev] = powers_forward;
            psi_backward_rev[i_rev] = powers_backward;
            powers_forward = mul_mod(powers_forward, psi);
            powers_backward = mul_mod(powers_backward, psi_inv);
        });

        Self {
            n,
            psi_forward_rev,
            psi_backward_rev,
            n_inv: inv_mod(n as u64),
        }
    }

    /// Cooley-Tukey butterflies, natural order in, bit-reversed order out.
    pub fn forward_inplace(&self, a: &mut [u64]) {
        let n: usize = a.len();
        assert_eq!(n, self.n, "invalid a.len()={} != n={}", n, self.n);

        let mut t: usize = n;
        let mut m: usize = 1;
        while m < n {
            t >>= 1;
            izip!(a.chunks_exact_mut(2 * t), &self.psi_forward_rev[m..2 * m]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(t);
                izip!(a, b).for_each(|(a, b)| {
                    let u: u64 = *a;
                    let v: u64 = mul_mod(*b, *psi);
                    *a = add_mod(u, v);
                    *b = sub_mod(u, v);
                });
            });
            m <<= 1;
        }
    }

    /// Gentleman-Sande butterflies, bit-reversed order in, natural order out.
    /// Includes the multiplication by 1/n.
    pub fn backward_inplace(&self, a: &mut [u64]) {
        let n: usize = a.len();
        assert_eq!(n, self.n, "invalid a.len()={} != n={}", n, self.n);

        let mut t: usize = 1;
        let mut m: usize = n;
        while m > 1 {
            let h: usize = m >> 1;
            izip!(a.chunks_exact_mut(2 * t), &self.psi_backward_rev[h..m]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(t);
                izip!(a, b).for_each(|(a, b)| {
                    let u: u64 = *a;
                    let v: u64 = *b;
                    *a = add_mod(u, v);
                    *b = mul_mod(sub_mod(u, v), *psi);
                });
            });
            t <<= 1;
            m = h;
        }

        a.iter_mut().for_each(|x| *x = mul_mod(*x, self.n_inv));
    }
}
