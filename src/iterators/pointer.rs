use crate::simd::{Vector2, F64x2};
use crate::traits::{FastSequence, FastSequenceMut, Sequence, SequenceMut};

use super::reverse::Backward;

// Raw pointers are their own fast iterator: contiguous for any count.
macro_rules! impl_pointer_sequence {
    ($ptr:ty) => {
        impl Sequence for $ptr {
            type Fast = $ptr;

            #[inline(always)]
            fn address(&self) -> usize {
                *self as usize
            }

            #[inline(always)]
            unsafe fn get(&self) -> f64 {
                self.read()
            }

            #[inline(always)]
            fn advance(&mut self, n: usize) {
                *self = self.wrapping_add(n);
            }

            #[inline(always)]
            fn retreat(&mut self, n: usize) {
                *self = self.wrapping_sub(n);
            }

            #[inline(always)]
            fn fast_count(&self, n: usize) -> usize {
                n
            }

            #[inline(always)]
            fn fast_reverse_count(&self, n: usize) -> usize {
                n
            }

            #[inline(always)]
            unsafe fn fast_iterator(&self) -> $ptr {
                *self
            }
        }

        impl FastSequence for $ptr {
            type Reversed = Backward<$ptr>;

            #[inline(always)]
            unsafe fn load2(&self, offset: isize) -> F64x2 {
                F64x2::load(self.offset(offset))
            }

            #[inline(always)]
            fn reversed(self) -> Backward<$ptr> {
                Backward::new(self)
            }
        }
    };
}

impl_pointer_sequence!(*const f64);
impl_pointer_sequence!(*mut f64);

impl SequenceMut for *mut f64 {
    type FastMut = *mut f64;

    #[inline(always)]
    unsafe fn set(&self, x: f64) {
        self.write(x)
    }

    #[inline(always)]
    unsafe fn fast_iterator_mut(&self) -> *mut f64 {
        *self
    }
}

impl FastSequenceMut for *mut f64 {
    #[inline(always)]
    unsafe fn store2(&self, offset: isize, v: F64x2) {
        v.store(self.offset(offset))
    }
}
