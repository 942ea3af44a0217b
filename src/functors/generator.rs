use rand::Rng;

use crate::simd::{Vector2, F64x2};
use crate::traits::Generator;

#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroGenerator;

impl Generator for ZeroGenerator {
    fn is_const(&self) -> bool {
        true
    }

    #[inline(always)]
    fn next1(&mut self) -> f64 {
        0.0
    }

    #[inline(always)]
    fn next2(&mut self) -> F64x2 {
        F64x2::zero()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantGenerator {
    value: f64,
}

impl ConstantGenerator {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Generator for ConstantGenerator {
    fn is_const(&self) -> bool {
        true
    }

    #[inline(always)]
    fn next1(&mut self) -> f64 {
        self.value
    }

    #[inline(always)]
    fn next2(&mut self) -> F64x2 {
        F64x2::splat(self.value)
    }
}

/// Uniform values in `[a, b)` drawn from a caller-owned generator.
///
/// Vectors draw the low lane first, so the output sequence is the same
/// whichever path the kernel takes.
#[derive(Debug)]
pub struct RandomGenerator<'r, R> {
    rng: &'r mut R,
    offset: f64,
    scale: f64,
}

impl<'r, R: Rng> RandomGenerator<'r, R> {
    pub fn new(a: f64, b: f64, rng: &'r mut R) -> Self {
        Self {
            rng,
            offset: a,
            scale: b - a,
        }
    }
}

impl<R: Rng> Generator for RandomGenerator<'_, R> {
    #[inline(always)]
    fn next1(&mut self) -> f64 {
        self.offset + self.scale * self.rng.gen::<f64>()
    }

    #[inline(always)]
    fn next2(&mut self) -> F64x2 {
        let lo = self.next1();
        let hi = self.next1();
        F64x2::new(lo, hi)
    }
}
