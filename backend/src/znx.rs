//! Coefficient-domain kernels over Z_{2^32}[X]/(X^N+1).

use itertools::izip;

use crate::Torus32;

pub fn znx_add_inplace(res: &mut [Torus32], a: &[Torus32]) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a.iter()).for_each(|(r, a)| *r = r.wrapping_add(*a));
}

pub fn znx_sub_inplace(res: &mut [Torus32], a: &[Torus32]) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a.iter()).for_each(|(r, a)| *r = r.wrapping_sub(*a));
}

pub fn znx_negate(res: &mut [Torus32], a: &[Torus32]) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a.iter()).for_each(|(r, a)| *r = a.wrapping_neg());
}

/// res = src * X^p mod X^N+1, for any integer p.
pub fn znx_rotate(p: i64, res: &mut [Torus32], src: &[Torus32]) {
    let n: usize = src.len();
    debug_assert_eq!(res.len(), n);
    debug_assert!(n.is_power_of_two(), "n must be a power of two, got {n}");

    let p: usize = p.rem_euclid((n << 1) as i64) as usize;
    let (shift, flip): (usize, bool) = if p < n { (p, false) } else { (p - n, true) };

    // Coefficients pushed past X^{N-1} come back negated.
    (0..n).for_each(|i| {
        let (j, wrapped): (usize, bool) = if i < shift { (i + n - shift, true) } else { (i - shift, false) };
        res[i] = if wrapped ^ flip { src[j].wrapping_neg() } else { src[j] };
    });
}

/// res = src * (X^p - 1) mod X^N+1.
pub fn znx_mul_xp_minus_one(p: i64, res: &mut [Torus32], src: &[Torus32]) {
    znx_rotate(p, res, src);
    znx_sub_inplace(res, src);
}

/// Schoolbook negacyclic product, used as a reference for the transforms.
pub fn znx_negacyclic_mul_ref(res: &mut [Torus32], a: &[i32], b: &[Torus32]) {
    let n: usize = a.len();
    debug_assert_eq!(b.len(), n);
    debug_assert_eq!(res.len(), n);
    res.fill(0);
    (0..n).for_each(|i| {
        (0..n).for_each(|j| {
            let prod: Torus32 = a[i].wrapping_mul(b[j]);
            if i + j < n {
                res[i + j] = res[i + j].wrapping_add(prod);
            } else {
                res[i + j - n] = res[i + j - n].wrapping_sub(prod);
            }
        })
    });
}
