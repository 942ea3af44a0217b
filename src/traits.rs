use crate::simd::F64x2;

/// A position into an `f64` array that the kernels can walk.
///
/// Sequences never own memory. The capability methods tell a kernel how many
/// elements ahead may be processed with plain vector loads from
/// [`Sequence::fast_iterator`]; everything else goes through `get`/`advance`.
pub trait Sequence: Copy {
    type Fast: FastSequence;

    /// Address of the memory a vector load at this position would start from.
    fn address(&self) -> usize;

    /// Reads the current element.
    ///
    /// # Safety
    /// The position must be dereferenceable.
    unsafe fn get(&self) -> f64;

    fn advance(&mut self, n: usize);
    fn retreat(&mut self, n: usize);

    #[inline(always)]
    fn supports_fast_processing(&self) -> bool {
        true
    }

    /// How many of the next `n` elements are contiguous in memory.
    fn fast_count(&self, n: usize) -> usize;
    /// Same as `fast_count`, walking backwards.
    fn fast_reverse_count(&self, n: usize) -> usize;

    /// Raw view used for vector loads.
    ///
    /// # Safety
    /// Only valid while `fast_count` is non-zero, and only for that many
    /// elements.
    unsafe fn fast_iterator(&self) -> Self::Fast;
}

pub trait SequenceMut: Sequence {
    type FastMut: FastSequenceMut;

    /// # Safety
    /// The position must be dereferenceable and writable.
    unsafe fn set(&self, x: f64);

    /// # Safety
    /// See [`Sequence::fast_iterator`].
    unsafe fn fast_iterator_mut(&self) -> Self::FastMut;
}

/// Contiguous memory in logical order, addressed in elements from a fixed origin.
pub trait FastSequence: Copy {
    type Reversed: FastSequence;

    /// Loads logical elements `offset` and `offset + 1`.
    ///
    /// # Safety
    /// Both elements must be readable and the underlying pair 16-byte aligned.
    unsafe fn load2(&self, offset: isize) -> F64x2;

    /// The same memory read back to front, with the origin one past the end.
    fn reversed(self) -> Self::Reversed;
}

pub trait FastSequenceMut: FastSequence {
    /// # Safety
    /// Both elements must be writable and the underlying pair 16-byte aligned.
    unsafe fn store2(&self, offset: isize, v: F64x2);
}

/// Elementwise transform with lane-wise equivalent scalar and vector forms.
pub trait UnaryOp {
    fn apply(&mut self, x: f64) -> f64;
    fn apply2(&mut self, x: F64x2) -> F64x2;
}

pub trait BinaryOp {
    fn apply(&mut self, x1: f64, x2: f64) -> f64;
    fn apply2(&mut self, x1: F64x2, x2: F64x2) -> F64x2;
}

pub trait TernaryOp {
    fn apply(&mut self, x1: f64, x2: f64, x3: f64) -> f64;
    fn apply2(&mut self, x1: F64x2, x2: F64x2, x3: F64x2) -> F64x2;
}

/// Accumulator fed one value or one vector at a time.
///
/// Scalar and vector contributions may be kept apart and are only combined in
/// `get`, so results match a sequential fold up to rounding.
pub trait ReduceOp {
    fn accumulate(&mut self, x: f64);
    fn accumulate2(&mut self, x: F64x2);
    fn get(&self) -> f64;
}

pub trait Generator {
    /// A constant generator lets the kernel hoist its values out of the loop.
    #[inline(always)]
    fn is_const(&self) -> bool {
        false
    }

    fn next1(&mut self) -> f64;
    fn next2(&mut self) -> F64x2;
}
