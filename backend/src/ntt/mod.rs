pub mod prime;
mod table;

pub use table::*;

use itertools::izip;

use crate::{Backend, Torus32, TransformType};
use prime::{add_mod, from_i32, mul_mod, to_torus32};

/// Negacyclic number-theoretic transform over Z_Q, Q = 2^64 - 2^32 + 1.
///
/// Products are exact (no rounding) as long as the integer negacyclic
/// convolution stays within (-Q/2, Q/2), which holds for a torus polynomial
/// times a binary or small-integer polynomial.
pub struct NTT;

impl Backend for NTT {
    type ScalarPrep = u64;
    type Table = Table;

    const TRANSFORM: TransformType = TransformType::NTT;

    fn new_table(n: usize) -> Self::Table {
        Table::new(n)
    }

    fn forward(table: &Self::Table, res: &mut [u64], a: &[i32]) {
        izip!(res.iter_mut(), a).for_each(|(r, a)| *r = from_i32(*a));
        table.forward_inplace(res);
    }

    fn inverse(table: &Self::Table, res: &mut [Torus32], a: &[u64]) {
        let mut tmp: Vec<u64> = a.to_vec();
        table.backward_inplace(&mut tmp);
        izip!(res.iter_mut(), tmp).for_each(|(r, x)| *r = to_torus32(x));
    }

    fn mul(_table: &Self::Table, res: &mut [u64], a: &[u64], b: &[u64]) {
        izip!(res.iter_mut(), a, b).for_each(|(r, a, b)| *r = mul_mod(*a, *b));
    }

    fn add_mul(_table: &Self::Table, res: &mut [u64], a: &[u64], b: &[u64]) {
        izip!(res.iter_mut(), a, b).for_each(|(r, a, b)| *r = add_mod(*r, mul_mod(*a, *b)));
    }

    fn add_inplace(_table: &Self::Table, res: &mut [u64], a: &[u64]) {
        izip!(res.iter_mut(), a).for_each(|(r, a)| *r = add_mod(*r, *a));
    }
}
