use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::traits::Vector2;

/// Portable `F64x2`: a pair of scalars with the same lane semantics as the
/// SSE2 backend, including the operand order of `minimum`/`maximum`.
#[derive(Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct ScalarF64x2([f64; 2]);

impl Vector2 for ScalarF64x2 {
    #[inline(always)]
    fn zero() -> Self {
        ScalarF64x2([0.0, 0.0])
    }

    #[inline(always)]
    fn splat(x: f64) -> Self {
        ScalarF64x2([x, x])
    }

    #[inline(always)]
    fn new(lo: f64, hi: f64) -> Self {
        ScalarF64x2([lo, hi])
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        debug_assert_eq!(ptr as usize % 16, 0, "misaligned vector load");
        ScalarF64x2([*ptr, *ptr.add(1)])
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        ScalarF64x2([ptr.read_unaligned(), ptr.add(1).read_unaligned()])
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        debug_assert_eq!(ptr as usize % 16, 0, "misaligned vector store");
        *ptr = self.0[0];
        *ptr.add(1) = self.0[1];
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f64) {
        ptr.write_unaligned(self.0[0]);
        ptr.add(1).write_unaligned(self.0[1]);
    }

    #[inline(always)]
    fn negate(self) -> Self {
        ScalarF64x2([0.0 - self.0[0], 0.0 - self.0[1]])
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        ScalarF64x2([self.0[0] + other.0[0], self.0[1] + other.0[1]])
    }

    #[inline(always)]
    fn subtract(self, other: Self) -> Self {
        ScalarF64x2([self.0[0] - other.0[0], self.0[1] - other.0[1]])
    }

    #[inline(always)]
    fn multiply(self, other: Self) -> Self {
        ScalarF64x2([self.0[0] * other.0[0], self.0[1] * other.0[1]])
    }

    #[inline(always)]
    fn minimum(self, other: Self) -> Self {
        let pick = |a: f64, b: f64| if a < b { a } else { b };
        ScalarF64x2([pick(self.0[0], other.0[0]), pick(self.0[1], other.0[1])])
    }

    #[inline(always)]
    fn maximum(self, other: Self) -> Self {
        let pick = |a: f64, b: f64| if a > b { a } else { b };
        ScalarF64x2([pick(self.0[0], other.0[0]), pick(self.0[1], other.0[1])])
    }

    #[inline(always)]
    fn rotate(self) -> Self {
        ScalarF64x2([self.0[1], self.0[0]])
    }

    #[inline(always)]
    fn interleave_lo(self, other: Self) -> Self {
        ScalarF64x2([self.0[0], other.0[0]])
    }

    #[inline(always)]
    fn interleave_hi(self, other: Self) -> Self {
        ScalarF64x2([self.0[1], other.0[1]])
    }

    #[inline(always)]
    fn hadd(self, other: Self) -> Self {
        ScalarF64x2([self.0[0] + self.0[1], other.0[0] + other.0[1]])
    }

    #[inline(always)]
    fn add_hi_sub_lo(self, other: Self) -> Self {
        ScalarF64x2([self.0[0] - other.0[0], self.0[1] + other.0[1]])
    }

    #[inline(always)]
    fn abs_masked(self, sign_mask: Self) -> Self {
        let clear = |x: f64, m: f64| f64::from_bits(x.to_bits() & !m.to_bits());
        ScalarF64x2([clear(self.0[0], sign_mask.0[0]), clear(self.0[1], sign_mask.0[1])])
    }

    #[inline(always)]
    fn to_array(self) -> [f64; 2] {
        self.0
    }
}

impl Add for ScalarF64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Vector2::add(self, other)
    }
}

impl Sub for ScalarF64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul for ScalarF64x2 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Neg for ScalarF64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl fmt::Debug for ScalarF64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("F64x2").field(&self.0[0]).field(&self.0[1]).finish()
    }
}
