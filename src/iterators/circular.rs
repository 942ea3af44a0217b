use crate::traits::{FastSequence, FastSequenceMut, Sequence, SequenceMut};

/// Position in a fixed-capacity ring of `f64`.
///
/// `P` is the raw pointer to the first slot. Every move wraps modulo the
/// capacity, so `0 <= pos < capacity` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circular<P> {
    base: P,
    pos: usize,
    capacity: usize,
}

impl<P: Sequence<Fast = P> + FastSequence> Circular<P> {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(base: P, pos: usize, capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be non-zero");
        Self {
            base,
            pos: pos % capacity,
            capacity,
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The position `delay` samples behind this one, as read by a delay-line tap.
    #[inline]
    pub fn delayed(&self, delay: usize) -> Self {
        let mut tap = *self;
        tap.retreat(delay);
        tap
    }

    /// Reads the element at a wrapped logical offset from the current position.
    ///
    /// # Safety
    /// `base` must point to `capacity` readable elements.
    #[inline]
    pub unsafe fn get_at(&self, offset: isize) -> f64 {
        let cap = self.capacity as isize;
        let slot = (self.pos as isize + offset % cap + cap) % cap;
        self.slot(slot as usize).get()
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> P {
        let mut p = self.base;
        p.advance(index);
        p
    }
}

impl Circular<*const f64> {
    pub fn from_slice(ring: &[f64], pos: usize) -> Self {
        Self::new(ring.as_ptr(), pos, ring.len())
    }
}

impl Circular<*mut f64> {
    pub fn from_mut_slice(ring: &mut [f64], pos: usize) -> Self {
        Self::new(ring.as_mut_ptr(), pos, ring.len())
    }
}

impl<P: Sequence<Fast = P> + FastSequence> Sequence for Circular<P> {
    type Fast = P;

    #[inline(always)]
    fn address(&self) -> usize {
        self.slot(self.pos).address()
    }

    #[inline(always)]
    unsafe fn get(&self) -> f64 {
        self.slot(self.pos).get()
    }

    #[inline(always)]
    fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n % self.capacity) % self.capacity;
    }

    #[inline(always)]
    fn retreat(&mut self, n: usize) {
        self.pos = (self.pos + self.capacity - n % self.capacity) % self.capacity;
    }

    #[inline(always)]
    fn fast_count(&self, n: usize) -> usize {
        (self.capacity - self.pos).min(n)
    }

    #[inline(always)]
    fn fast_reverse_count(&self, n: usize) -> usize {
        self.pos.min(n)
    }

    #[inline(always)]
    unsafe fn fast_iterator(&self) -> P {
        self.slot(self.pos)
    }
}

impl<P: SequenceMut<Fast = P, FastMut = P> + FastSequenceMut> SequenceMut for Circular<P> {
    type FastMut = P;

    #[inline(always)]
    unsafe fn set(&self, x: f64) {
        self.slot(self.pos).set(x)
    }

    #[inline(always)]
    unsafe fn fast_iterator_mut(&self) -> P {
        self.slot(self.pos)
    }
}
