use std::{fmt::Debug, marker::PhantomData, str::FromStr};

use thiserror::Error;

use crate::{Executor, Torus32};

/// The transform families a [Module] can be instantiated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformType {
    FFT,
    NTT,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported transform type: {0:?} (expected \"FFT\" or \"NTT\")")]
pub struct UnsupportedTransform(pub String);

impl FromStr for TransformType {
    type Err = UnsupportedTransform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FFT" => Ok(TransformType::FFT),
            "NTT" => Ok(TransformType::NTT),
            other => Err(UnsupportedTransform(other.to_string())),
        }
    }
}

/// A polynomial transform over Z[X]/(X^N+1).
///
/// A transformed polynomial is a slice of exactly `N` [Backend::ScalarPrep]
/// words whose meaning is private to the backend. Callers only move such
/// slices between the methods of [Module].
pub trait Backend: Sized + Send + Sync + 'static {
    type ScalarPrep: Copy + Default + Debug + PartialEq + Send + Sync;
    type Table: Send + Sync;

    const TRANSFORM: TransformType;

    fn new_table(n: usize) -> Self::Table;
    fn forward(table: &Self::Table, res: &mut [Self::ScalarPrep], a: &[i32]);
    fn inverse(table: &Self::Table, res: &mut [Torus32], a: &[Self::ScalarPrep]);
    fn mul(table: &Self::Table, res: &mut [Self::ScalarPrep], a: &[Self::ScalarPrep], b: &[Self::ScalarPrep]);
    fn add_mul(table: &Self::Table, res: &mut [Self::ScalarPrep], a: &[Self::ScalarPrep], b: &[Self::ScalarPrep]);
    fn add_inplace(table: &Self::Table, res: &mut [Self::ScalarPrep], a: &[Self::ScalarPrep]);
}

/// Ring degree, precomputed transform tables and execution provider.
///
/// Every operation on ciphertext arrays takes the module explicitly; there is
/// no process-wide state.
pub struct Module<B: Backend> {
    n: usize,
    table: B::Table,
    exec: Executor,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    pub fn new(n: u64) -> Self {
        Self::with_executor(n, Executor::default())
    }

    pub fn with_executor(n: u64, exec: Executor) -> Self {
        assert!(n.is_power_of_two() && n >= 2, "n must be a power of two >= 2, got {n}");
        Self {
            n: n as usize,
            table: B::new_table(n as usize),
            exec,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn exec(&self) -> &Executor {
        &self.exec
    }

    #[inline]
    pub fn transform(&self) -> TransformType {
        B::TRANSFORM
    }

    /// Zeroed storage for `count` transformed polynomials.
    pub fn alloc_dft(&self, count: usize) -> Vec<B::ScalarPrep> {
        vec![B::ScalarPrep::default(); count * self.n]
    }

    pub fn forward(&self, res: &mut [B::ScalarPrep], a: &[i32]) {
        self.check(res.len(), a.len());
        B::forward(&self.table, res, a)
    }

    pub fn inverse(&self, res: &mut [Torus32], a: &[B::ScalarPrep]) {
        self.check(res.len(), a.len());
        B::inverse(&self.table, res, a)
    }

    /// res = a * b in the transform domain.
    pub fn mul(&self, res: &mut [B::ScalarPrep], a: &[B::ScalarPrep], b: &[B::ScalarPrep]) {
        self.check(res.len(), a.len());
        self.check(res.len(), b.len());
        B::mul(&self.table, res, a, b)
    }

    /// res += a * b in the transform domain.
    pub fn add_mul(&self, res: &mut [B::ScalarPrep], a: &[B::ScalarPrep], b: &[B::ScalarPrep]) {
        self.check(res.len(), a.len());
        self.check(res.len(), b.len());
        B::add_mul(&self.table, res, a, b)
    }

    pub fn add_inplace(&self, res: &mut [B::ScalarPrep], a: &[B::ScalarPrep]) {
        self.check(res.len(), a.len());
        B::add_inplace(&self.table, res, a)
    }

    /// res = a * b mod X^N+1, going through the transform domain. One of the
    /// operands must be small for the result to be exact.
    pub fn negacyclic_mul(&self, res: &mut [Torus32], a: &[i32], b: &[Torus32]) {
        let mut a_dft: Vec<B::ScalarPrep> = self.alloc_dft(1);
        let mut b_dft: Vec<B::ScalarPrep> = self.alloc_dft(1);
        let mut prod: Vec<B::ScalarPrep> = self.alloc_dft(1);
        self.forward(&mut a_dft, a);
        self.forward(&mut b_dft, b);
        self.mul(&mut prod, &a_dft, &b_dft);
        self.inverse(res, &prod);
    }

    #[inline(always)]
    fn check(&self, res_len: usize, a_len: usize) {
        assert_eq!(res_len, self.n, "invalid res: len={} != n={}", res_len, self.n);
        assert_eq!(a_len, self.n, "invalid a: len={} != n={}", a_len, self.n);
    }
}
