use itertools::izip;

use backend::Torus32;

use crate::{
    LWEParams, Result,
    error::{check_dim, check_shape},
};

/// A batch of LWE ciphertexts sharing the same parameters.
///
/// Storage is flat and row-major: element `i` owns `a[i*n..(i+1)*n]`, `b[i]`
/// and `current_variances[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct LWESampleArray {
    pub(crate) params: LWEParams,
    pub(crate) shape: Vec<usize>,
    pub(crate) a: Vec<Torus32>,
    pub(crate) b: Vec<Torus32>,
    pub(crate) current_variances: Vec<f64>,
}

/// Read-only view of one LWE sample.
#[derive(Clone, Copy, Debug)]
pub struct LWESampleRef<'a> {
    pub a: &'a [Torus32],
    pub b: Torus32,
    pub current_variance: f64,
}

/// Mutable view of one LWE sample.
#[derive(Debug)]
pub struct LWESampleMut<'a> {
    pub a: &'a mut [Torus32],
    pub b: &'a mut Torus32,
    pub current_variance: &'a mut f64,
}

impl LWESampleArray {
    /// Zero-initialized batch of the given shape. An empty shape holds a single sample.
    pub fn alloc(params: LWEParams, shape: &[usize]) -> Self {
        let len: usize = shape.iter().product();
        Self {
            params,
            shape: shape.to_vec(),
            a: vec![0; len * params.n()],
            b: vec![0; len],
            current_variances: vec![0.0; len],
        }
    }

    pub fn params(&self) -> &LWEParams {
        &self.params
    }

    /// Dimension of the mask.
    pub fn n(&self) -> usize {
        self.params.n()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    pub fn a(&self) -> &[Torus32] {
        &self.a
    }

    pub fn b(&self) -> &[Torus32] {
        &self.b
    }

    pub fn current_variances(&self) -> &[f64] {
        &self.current_variances
    }

    pub fn at(&self, i: usize) -> LWESampleRef<'_> {
        let n: usize = self.n();
        LWESampleRef {
            a: &self.a[i * n..(i + 1) * n],
            b: self.b[i],
            current_variance: self.current_variances[i],
        }
    }

    pub fn samples(&self) -> Vec<LWESampleRef<'_>> {
        izip!(self.a.chunks_exact(self.n()), &self.b, &self.current_variances)
            .map(|(a, b, v)| LWESampleRef {
                a,
                b: *b,
                current_variance: *v,
            })
            .collect()
    }

    pub fn samples_mut(&mut self) -> Vec<LWESampleMut<'_>> {
        let n: usize = self.n();
        izip!(
            self.a.chunks_exact_mut(n),
            self.b.iter_mut(),
            self.current_variances.iter_mut()
        )
        .map(|(a, b, current_variance)| LWESampleMut {
            a,
            b,
            current_variance,
        })
        .collect()
    }

    /// Reinterprets the batch with a new shape holding the same number of
    /// samples. The batch is left untouched on error.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        let len: usize = shape.iter().product();
        if len != self.len() {
            return Err(crate::Error::ShapeMismatch {
                expected: self.shape.clone(),
                actual: shape.to_vec(),
            });
        }
        self.shape = shape.to_vec();
        Ok(())
    }

    pub(crate) fn check_compatible(&self, other: &LWESampleArray) -> Result<()> {
        check_dim(self.n(), other.n())?;
        check_shape(&self.shape, &other.shape)
    }
}

impl LWESampleMut<'_> {
    /// Turns the sample into the noiseless trivial encryption of `mu`.
    pub fn set_trivial(&mut self, mu: Torus32) {
        self.a.fill(0);
        *self.b = mu;
        *self.current_variance = 0.0;
    }
}

/// <a, s> over the torus.
pub(crate) fn dot(a: &[Torus32], s: &[i32]) -> Torus32 {
    izip!(a, s).fold(0, |acc: Torus32, (a, s)| acc.wrapping_add(a.wrapping_mul(*s)))
}
