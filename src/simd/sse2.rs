#![allow(unused_unsafe)]

use std::arch::x86_64::*;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::traits::Vector2;

/// `F64x2` backed by an SSE2 `__m128d`. SSE2 is part of the x86_64 baseline,
/// so no runtime feature detection is needed.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Sse2F64x2(__m128d);

impl Vector2 for Sse2F64x2 {
    #[inline(always)]
    fn zero() -> Self {
        Sse2F64x2(unsafe { _mm_setzero_pd() })
    }

    #[inline(always)]
    fn splat(x: f64) -> Self {
        Sse2F64x2(unsafe { _mm_set1_pd(x) })
    }

    #[inline(always)]
    fn new(lo: f64, hi: f64) -> Self {
        Sse2F64x2(unsafe { _mm_set_pd(hi, lo) })
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        debug_assert_eq!(ptr as usize % 16, 0, "misaligned vector load");
        Sse2F64x2(_mm_load_pd(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        Sse2F64x2(_mm_loadu_pd(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        debug_assert_eq!(ptr as usize % 16, 0, "misaligned vector store");
        _mm_store_pd(ptr, self.0)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f64) {
        _mm_storeu_pd(ptr, self.0)
    }

    #[inline(always)]
    fn negate(self) -> Self {
        Sse2F64x2(unsafe { _mm_sub_pd(_mm_setzero_pd(), self.0) })
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Sse2F64x2(unsafe { _mm_add_pd(self.0, other.0) })
    }

    #[inline(always)]
    fn subtract(self, other: Self) -> Self {
        Sse2F64x2(unsafe { _mm_sub_pd(self.0, other.0) })
    }

    #[inline(always)]
    fn multiply(self, other: Self) -> Self {
        Sse2F64x2(unsafe { _mm_mul_pd(self.0, other.0) })
    }

    #[inline(always)]
    fn minimum(self, other: Self) -> Self {
        Sse2F64x2(unsafe { _mm_min_pd(self.0, other.0) })
    }

    #[inline(always)]
    fn maximum(self, other: Self) -> Self {
        Sse2F64x2(unsafe { _mm_max_pd(self.0, other.0) })
    }

    #[inline(always)]
    fn rotate(self) -> Self {
        Sse2F64x2(unsafe { _mm_shuffle_pd::<0b01>(self.0, self.0) })
    }

    #[inline(always)]
    fn interleave_lo(self, other: Self) -> Self {
        Sse2F64x2(unsafe { _mm_unpacklo_pd(self.0, other.0) })
    }

    #[inline(always)]
    fn interleave_hi(self, other: Self) -> Self {
        Sse2F64x2(unsafe { _mm_unpackhi_pd(self.0, other.0) })
    }

    // haddpd is SSE3; two unpacks and an add stay within SSE2.
    #[inline(always)]
    fn hadd(self, other: Self) -> Self {
        unsafe {
            let lo = _mm_unpacklo_pd(self.0, other.0);
            let hi = _mm_unpackhi_pd(self.0, other.0);
            Sse2F64x2(_mm_add_pd(lo, hi))
        }
    }

    #[inline(always)]
    fn add_hi_sub_lo(self, other: Self) -> Self {
        unsafe {
            let sum = _mm_add_pd(self.0, other.0);
            let difference = _mm_sub_pd(self.0, other.0);
            Sse2F64x2(_mm_move_sd(sum, difference))
        }
    }

    #[inline(always)]
    fn abs_masked(self, sign_mask: Self) -> Self {
        Sse2F64x2(unsafe { _mm_andnot_pd(sign_mask.0, self.0) })
    }

    #[inline(always)]
    fn to_array(self) -> [f64; 2] {
        let mut out = [0.0; 2];
        unsafe { _mm_storeu_pd(out.as_mut_ptr(), self.0) };
        out
    }
}

impl Add for Sse2F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Vector2::add(self, other)
    }
}

impl Sub for Sse2F64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul for Sse2F64x2 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Neg for Sse2F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl PartialEq for Sse2F64x2 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for Sse2F64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [lo, hi] = self.to_array();
        f.debug_tuple("F64x2").field(&lo).field(&hi).finish()
    }
}
