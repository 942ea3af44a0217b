use crate::traits::{Sequence, SequenceMut};

/// Visits every `stride`-th element of the wrapped sequence.
///
/// Never vectorized: kernels see `supports_fast_processing() == false` and run
/// the scalar path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stride<S> {
    inner: S,
    stride: usize,
}

impl<S: Sequence> Stride<S> {
    pub fn new(inner: S, stride: usize) -> Self {
        Self { inner, stride }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<S: Sequence> Sequence for Stride<S> {
    type Fast = S::Fast;

    #[inline(always)]
    fn address(&self) -> usize {
        self.inner.address()
    }

    #[inline(always)]
    unsafe fn get(&self) -> f64 {
        self.inner.get()
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.inner.advance(n * self.stride);
    }

    #[inline(always)]
    fn retreat(&mut self, n: usize) {
        self.inner.retreat(n * self.stride);
    }

    #[inline(always)]
    fn supports_fast_processing(&self) -> bool {
        false
    }

    #[inline(always)]
    fn fast_count(&self, _n: usize) -> usize {
        0
    }

    #[inline(always)]
    fn fast_reverse_count(&self, _n: usize) -> usize {
        0
    }

    unsafe fn fast_iterator(&self) -> S::Fast {
        debug_assert!(false, "strided sequences have no fast iterator");
        self.inner.fast_iterator()
    }
}

impl<S: SequenceMut> SequenceMut for Stride<S> {
    type FastMut = S::FastMut;

    #[inline(always)]
    unsafe fn set(&self, x: f64) {
        self.inner.set(x)
    }

    unsafe fn fast_iterator_mut(&self) -> S::FastMut {
        debug_assert!(false, "strided sequences have no fast iterator");
        self.inner.fast_iterator_mut()
    }
}
