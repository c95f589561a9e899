use rayon::prelude::*;

/// Data-parallel execution surface.
///
/// Kernels hand the executor one item per independent unit of work (usually
/// a set of disjoint `&mut` views into a single ciphertext of a batch). Each
/// item is consumed by exactly one call of the closure, so no two closures
/// ever write to the same memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Executor {
    /// Items are processed in order on the calling thread.
    Sequential,
    /// Items are processed on the rayon global thread pool.
    #[default]
    Parallel,
}

impl Executor {
    /// Applies `f` to every `(index, item)` pair.
    pub fn for_each<T, F>(&self, items: Vec<T>, f: F)
    where
        T: Send,
        F: Fn(usize, T) + Send + Sync,
    {
        match self {
            Executor::Sequential => items.into_iter().enumerate().for_each(|(i, x)| f(i, x)),
            Executor::Parallel => items.into_par_iter().enumerate().for_each(|(i, x)| f(i, x)),
        }
    }

    /// Applies `f` to every chunk of `size` consecutive elements of `data`.
    pub fn for_each_chunk_mut<T, F>(&self, data: &mut [T], size: usize, f: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        assert!(size > 0, "chunk size must be positive");
        match self {
            Executor::Sequential => data.chunks_mut(size).enumerate().for_each(|(i, x)| f(i, x)),
            Executor::Parallel => data.par_chunks_mut(size).enumerate().for_each(|(i, x)| f(i, x)),
        }
    }

    /// Collects `f(i)` for `i` in `0..len`, preserving order.
    pub fn map<R, F>(&self, len: usize, f: F) -> Vec<R>
    where
        R: Send,
        F: Fn(usize) -> R + Send + Sync,
    {
        match self {
            Executor::Sequential => (0..len).map(f).collect(),
            Executor::Parallel => (0..len).into_par_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executors_agree() {
        [Executor::Sequential, Executor::Parallel].iter().for_each(|exec| {
            let mut data: Vec<i64> = (0..100).collect();
            exec.for_each_chunk_mut(&mut data, 10, |i, chunk| {
                chunk.iter_mut().for_each(|x| *x += i as i64);
            });
            assert_eq!(data[95], 95 + 9);

            let squares: Vec<usize> = exec.map(8, |i| i * i);
            assert_eq!(squares, vec![0, 1, 4, 9, 16, 25, 36, 49]);

            let mut out: Vec<usize> = vec![0; 4];
            exec.for_each(out.iter_mut().collect(), |i, x: &mut usize| *x = 2 * i);
            assert_eq!(out, vec![0, 2, 4, 6]);
        });
    }
}
