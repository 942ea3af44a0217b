use crate::simd::{Vector2, F64x2};
use crate::traits::{FastSequence, FastSequenceMut, Sequence, SequenceMut};

/// Walks the wrapped sequence backwards.
///
/// The current element is the one *before* the wrapped position, so a reverse
/// view of `[p, p + n)` starts at `p + n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reverse<S> {
    inner: S,
}

impl<S: Sequence> Reverse<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn base(&self) -> S {
        self.inner
    }
}

impl Reverse<*const f64> {
    /// Reverse view of the `n` elements starting at `ptr`.
    pub fn from_end(ptr: *const f64, n: usize) -> Self {
        Self::new(ptr.wrapping_add(n))
    }
}

impl Reverse<*mut f64> {
    pub fn from_end_mut(ptr: *mut f64, n: usize) -> Self {
        Self::new(ptr.wrapping_add(n))
    }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Fast = <S::Fast as FastSequence>::Reversed;

    #[inline(always)]
    fn address(&self) -> usize {
        self.inner.address()
    }

    #[inline(always)]
    unsafe fn get(&self) -> f64 {
        let mut previous = self.inner;
        previous.retreat(1);
        previous.get()
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.inner.retreat(n);
    }

    #[inline(always)]
    fn retreat(&mut self, n: usize) {
        self.inner.advance(n);
    }

    #[inline(always)]
    fn supports_fast_processing(&self) -> bool {
        self.inner.supports_fast_processing()
    }

    #[inline(always)]
    fn fast_count(&self, n: usize) -> usize {
        self.inner.fast_reverse_count(n)
    }

    #[inline(always)]
    fn fast_reverse_count(&self, n: usize) -> usize {
        self.inner.fast_count(n)
    }

    #[inline(always)]
    unsafe fn fast_iterator(&self) -> Self::Fast {
        self.inner.fast_iterator().reversed()
    }
}

impl<S> SequenceMut for Reverse<S>
where
    S: SequenceMut,
    <S::FastMut as FastSequence>::Reversed: FastSequenceMut,
{
    type FastMut = <S::FastMut as FastSequence>::Reversed;

    #[inline(always)]
    unsafe fn set(&self, x: f64) {
        let mut previous = self.inner;
        previous.retreat(1);
        previous.set(x)
    }

    #[inline(always)]
    unsafe fn fast_iterator_mut(&self) -> Self::FastMut {
        self.inner.fast_iterator_mut().reversed()
    }
}

/// Fast iterator of a reversed sequence: logical element `i` lives at
/// `origin - 1 - i`, so each pair is loaded from the mirrored slot and its
/// lanes swapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backward<P> {
    origin: P,
}

impl<P: FastSequence> Backward<P> {
    pub fn new(origin: P) -> Self {
        Self { origin }
    }
}

impl<P: FastSequence> FastSequence for Backward<P> {
    type Reversed = P;

    #[inline(always)]
    unsafe fn load2(&self, offset: isize) -> F64x2 {
        self.origin.load2(-(2 + offset)).rotate()
    }

    #[inline(always)]
    fn reversed(self) -> P {
        self.origin
    }
}

impl<P: FastSequenceMut> FastSequenceMut for Backward<P> {
    #[inline(always)]
    unsafe fn store2(&self, offset: isize, v: F64x2) {
        self.origin.store2(-(2 + offset), v.rotate())
    }
}
