use itertools::izip;

use backend::{Backend, Module, Torus32};

use crate::{
    Result, TLWEParams,
    error::{check_dim, check_shape},
};

/// A batch of TLWE samples. Each element stores its k mask polynomials
/// followed by the body polynomial, `(k+1)*N` coefficients in total.
#[derive(Clone, Debug, PartialEq)]
pub struct TLWESampleArray {
    pub(crate) params: TLWEParams,
    pub(crate) shape: Vec<usize>,
    pub(crate) data: Vec<Torus32>,
    pub(crate) current_variances: Vec<f64>,
}

#[derive(Clone, Copy, Debug)]
pub struct TLWESampleRef<'a> {
    pub data: &'a [Torus32],
    pub current_variance: f64,
}

#[derive(Debug)]
pub struct TLWESampleMut<'a> {
    pub data: &'a mut [Torus32],
    pub current_variance: &'a mut f64,
}

impl TLWESampleArray {
    pub fn alloc(params: TLWEParams, shape: &[usize]) -> Self {
        let len: usize = shape.iter().product();
        Self {
            params,
            shape: shape.to_vec(),
            data: vec![0; len * (params.k() + 1) * params.n()],
            current_variances: vec![0.0; len],
        }
    }

    pub fn params(&self) -> &TLWEParams {
        &self.params
    }

    /// Ring degree N.
    pub fn n(&self) -> usize {
        self.params.n()
    }

    pub fn k(&self) -> usize {
        self.params.k()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.current_variances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_variances.is_empty()
    }

    pub fn current_variances(&self) -> &[f64] {
        &self.current_variances
    }

    pub(crate) fn sample_size(&self) -> usize {
        (self.k() + 1) * self.n()
    }

    /// Polynomial `p` of element `i`; `p == k` is the body.
    pub fn poly(&self, i: usize, p: usize) -> &[Torus32] {
        let n: usize = self.n();
        let start: usize = i * self.sample_size() + p * n;
        &self.data[start..start + n]
    }

    pub fn poly_mut(&mut self, i: usize, p: usize) -> &mut [Torus32] {
        let n: usize = self.n();
        let start: usize = i * self.sample_size() + p * n;
        &mut self.data[start..start + n]
    }

    pub fn body(&self, i: usize) -> &[Torus32] {
        self.poly(i, self.k())
    }

    pub fn samples(&self) -> Vec<TLWESampleRef<'_>> {
        izip!(self.data.chunks_exact(self.sample_size()), &self.current_variances)
            .map(|(data, v)| TLWESampleRef {
                data,
                current_variance: *v,
            })
            .collect()
    }

    pub fn samples_mut(&mut self) -> Vec<TLWESampleMut<'_>> {
        let size: usize = self.sample_size();
        izip!(self.data.chunks_exact_mut(size), self.current_variances.iter_mut())
            .map(|(data, current_variance)| TLWESampleMut {
                data,
                current_variance,
            })
            .collect()
    }

    pub(crate) fn check_compatible(&self, other: &TLWESampleArray) -> Result<()> {
        check_dim(self.n(), other.n())?;
        check_dim(self.k(), other.k())?;
        check_shape(&self.shape, &other.shape)
    }
}

/// A batch of TLWE samples with every polynomial in the transform domain of `B`.
pub struct TLWESampleArrayDft<B: Backend> {
    pub(crate) params: TLWEParams,
    pub(crate) shape: Vec<usize>,
    pub(crate) data: Vec<B::ScalarPrep>,
    pub(crate) current_variances: Vec<f64>,
}

impl<B: Backend> TLWESampleArrayDft<B> {
    /// Zeroed batch. The ring degree of `module` must be the one of `params`.
    pub fn alloc(module: &Module<B>, params: TLWEParams, shape: &[usize]) -> Result<Self> {
        check_dim(params.n(), module.n())?;
        let len: usize = shape.iter().product();
        Ok(Self {
            params,
            shape: shape.to_vec(),
            data: module.alloc_dft(len * (params.k() + 1)),
            current_variances: vec![0.0; len],
        })
    }

    pub fn params(&self) -> &TLWEParams {
        &self.params
    }

    pub fn n(&self) -> usize {
        self.params.n()
    }

    pub fn k(&self) -> usize {
        self.params.k()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.current_variances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_variances.is_empty()
    }

    pub fn current_variances(&self) -> &[f64] {
        &self.current_variances
    }

    pub(crate) fn sample_size(&self) -> usize {
        (self.k() + 1) * self.n()
    }
}
