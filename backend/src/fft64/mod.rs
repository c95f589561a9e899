mod table;

pub use table::*;

use itertools::izip;

use crate::{Backend, Torus32, TransformType};

/// Negacyclic complex FFT in double precision.
///
/// A degree-`N` polynomial is stored as `N/2` complex evaluations, real parts
/// first, then imaginary parts.
pub struct FFT64;

impl Backend for FFT64 {
    type ScalarPrep = f64;
    type Table = ReimFFTTable;

    const TRANSFORM: TransformType = TransformType::FFT;

    fn new_table(n: usize) -> Self::Table {
        ReimFFTTable::new(n)
    }

    fn forward(table: &Self::Table, res: &mut [f64], a: &[i32]) {
        let (re, im) = res.split_at_mut(table.m());
        table.twist(re, im, a);
        table.execute(re, im, true);
    }

    fn inverse(table: &Self::Table, res: &mut [Torus32], a: &[f64]) {
        let (re, im) = a.split_at(table.m());
        let mut re: Vec<f64> = re.to_vec();
        let mut im: Vec<f64> = im.to_vec();
        table.execute(&mut re, &mut im, false);
        table.untwist(res, &re, &im);
    }

    fn mul(table: &Self::Table, res: &mut [f64], a: &[f64], b: &[f64]) {
        let m: usize = table.m();
        let (res_re, res_im) = res.split_at_mut(m);
        let (a_re, a_im) = a.split_at(m);
        let (b_re, b_im) = b.split_at(m);
        izip!(res_re, res_im, a_re, a_im, b_re, b_im).for_each(|(rr, ri, ar, ai, br, bi)| {
            *rr = ar * br - ai * bi;
            *ri = ar * bi + ai * br;
        });
    }

    fn add_mul(table: &Self::Table, res: &mut [f64], a: &[f64], b: &[f64]) {
        let m: usize = table.m();
        let (res_re, res_im) = res.split_at_mut(m);
        let (a_re, a_im) = a.split_at(m);
        let (b_re, b_im) = b.split_at(m);
        izip!(res_re, res_im, a_re, a_im, b_re, b_im).for_each(|(rr, ri, ar, ai, br, bi)| {
            *rr += ar * br - ai * bi;
            *ri += ar * bi + ai * br;
        });
    }

    fn add_inplace(_table: &Self::Table, res: &mut [f64], a: &[f64]) {
        izip!(res.iter_mut(), a).for_each(|(r, a)| *r += a);
    }
}
