use std::f64::consts::PI;

use itertools::izip;

/// Twiddles and twisting factors for a negacyclic transform of degree `2m`.
pub struct ReimFFTTable {
    m: usize,
    omg_re: Vec<f64>,
    omg_im: Vec<f64>,
    twist_re: Vec<f64>,
    twist_im: Vec<f64>,
    rev: Vec<usize>,
}

impl ReimFFTTable {
    pub fn new(n: usize) -> Self {
        assert!(n.is_power_of_two() && n >= 2, "n must be a power of two >= 2 but is {n}");
        let m: usize = n >> 1;
        let log_m: u32 = m.trailing_zeros();

        let omg_re: Vec<f64> = (0..m / 2).map(|k| (2.0 * PI * k as f64 / m as f64).cos()).collect();
        let omg_im: Vec<f64> = (0..m / 2).map(|k| (2.0 * PI * k as f64 / m as f64).sin()).collect();

        // e^{i pi j / N}: maps the folded coefficients onto the odd powers of a 2N-th root.
        let twist_re: Vec<f64> = (0..m).map(|j| (PI * j as f64 / n as f64).cos()).collect();
        let twist_im: Vec<f64> = (0..m).map(|j| (PI * j as f64 / n as f64).sin()).collect();

        let rev: Vec<usize> = (0..m)
            .map(|i| if log_m == 0 { 0 } else { i.reverse_bits() >> (usize::BITS - log_m) })
            .collect();

        Self {
            m,
            omg_re,
            omg_im,
            twist_re,
            twist_im,
            rev,
        }
    }

    pub fn m(&self) -> usize {
        self.m
    }

    /// Folds `a` into `m` complex values and twists them.
    pub fn twist(&self, re: &mut [f64], im: &mut [f64], a: &[i32]) {
        let (lo, hi) = a.split_at(self.m);
        izip!(re.iter_mut(), im.iter_mut(), lo, hi, &self.twist_re, &self.twist_im).for_each(|(re, im, x, y, tr, ti)| {
            let (x, y): (f64, f64) = (*x as f64, *y as f64);
            *re = x * tr - y * ti;
            *im = x * ti + y * tr;
        });
    }

    /// Inverse of [Self::twist], including the 1/m normalisation of the
    /// inverse transform, rounding back onto the torus.
    pub fn untwist(&self, res: &mut [i32], re: &[f64], im: &[f64]) {
        let scale: f64 = 1.0 / self.m as f64;
        let (lo, hi) = res.split_at_mut(self.m);
        izip!(lo, hi, re, im, &self.twist_re, &self.twist_im).for_each(|(lo, hi, re, im, tr, ti)| {
            let (x, y): (f64, f64) = (re * scale, im * scale);
            *lo = (x * tr + y * ti).round() as i64 as i32;
            *hi = (y * tr - x * ti).round() as i64 as i32;
        });
    }

    /// In-place cyclic DFT of size `m` on split real/imaginary parts.
    /// `forward` selects the sign of the exponent; no normalisation is applied.
    pub fn execute(&self, re: &mut [f64], im: &mut [f64], forward: bool) {
        let m: usize = self.m;
        debug_assert_eq!(re.len(), m);
        debug_assert_eq!(im.len(), m);

        (0..m).for_each(|i| {
            let j: usize = self.rev[i];
            if i < j {
                re.swap(i, j);
                im.swap(i, j);
            }
        });

        let mut len: usize = 2;
        while len <= m {
            let half: usize = len >> 1;
            let step: usize = m / len;
            (0..m).step_by(len).for_each(|start| {
                (0..half).for_each(|k| {
                    let wr: f64 = self.omg_re[k * step];
                    let wi: f64 = if forward { self.omg_im[k * step] } else { -self.omg_im[k * step] };
                    let (a, b): (usize, usize) = (start + k, start + k + half);
                    let vr: f64 = re[b] * wr - im[b] * wi;
                    let vi: f64 = re[b] * wi + im[b] * wr;
                    re[b] = re[a] - vr;
                    im[b] = im[a] - vi;
                    re[a] += vr;
                    im[a] += vi;
                });
            });
            len <<= 1;
        }
    }
}
