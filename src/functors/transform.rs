use crate::simd::{Vector2, F64x2};
use crate::traits::UnaryOp;

// Scalar forms of minpd/maxpd so both paths agree on NaN and signed zero.
#[inline(always)]
pub(crate) fn scalar_max(x: f64, y: f64) -> f64 {
    if x > y {
        x
    } else {
        y
    }
}

#[inline(always)]
pub(crate) fn scalar_min(x: f64, y: f64) -> f64 {
    if x < y {
        x
    } else {
        y
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl UnaryOp for Identity {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        x
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        x
    }
}

/// `x + t`
#[derive(Debug, Clone, Copy)]
pub struct AddScalar {
    t: f64,
    tv: F64x2,
}

impl AddScalar {
    pub fn new(t: f64) -> Self {
        Self { t, tv: F64x2::splat(t) }
    }
}

impl UnaryOp for AddScalar {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        x + self.t
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        x + self.tv
    }
}

/// `x * g`
#[derive(Debug, Clone, Copy)]
pub struct MultiplyScalar {
    g: f64,
    gv: F64x2,
}

impl MultiplyScalar {
    pub fn new(g: f64) -> Self {
        Self { g, gv: F64x2::splat(g) }
    }
}

impl UnaryOp for MultiplyScalar {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        x * self.g
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        x * self.gv
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

impl UnaryOp for Abs {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        x.abs()
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        x.abs()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl UnaryOp for Square {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        x * x
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        x * x
    }
}

/// Hard clip into `[min, max]`. NaN comes out as `min`.
#[derive(Debug, Clone, Copy)]
pub struct Clip {
    min: f64,
    max: f64,
    min_v: F64x2,
    max_v: F64x2,
}

impl Clip {
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "clip range is empty");
        Self {
            min,
            max,
            min_v: F64x2::splat(min),
            max_v: F64x2::splat(max),
        }
    }

    /// Symmetric clip into `[-level, level]`.
    pub fn symmetric(level: f64) -> Self {
        Self::new(-level, level)
    }
}

impl UnaryOp for Clip {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        scalar_min(scalar_max(x, self.min), self.max)
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        x.maximum(self.min_v).minimum(self.max_v)
    }
}

/// Soft saturation: `-3 dB` of pre-gain, a hard clamp to `[-1, 1]`, then the
/// cubic `(x - x³/3) * 3/2`, which maps `±1` to `±1` with zero slope.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicClip;

impl CubicClip {
    pub const PRE_GAIN: f64 = 0.707945784384138;
    const THIRD: f64 = 1.0 / 3.0;
}

impl UnaryOp for CubicClip {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        let x = scalar_min(scalar_max(x * Self::PRE_GAIN, -1.0), 1.0);
        (x - x * x * x * Self::THIRD) * 1.5
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        let x = (x * F64x2::splat(Self::PRE_GAIN))
            .maximum(F64x2::splat(-1.0))
            .minimum(F64x2::splat(1.0));
        (x - x * x * x * F64x2::splat(Self::THIRD)) * F64x2::splat(1.5)
    }
}

/// `second(first(x))`
#[derive(Debug, Clone, Copy, Default)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A: UnaryOp, B: UnaryOp> Compose<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: UnaryOp, B: UnaryOp> UnaryOp for Compose<A, B> {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        self.second.apply(self.first.apply(x))
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        self.second.apply2(self.first.apply2(x))
    }
}

/// Wraps a scalar closure; the vector form calls it once per lane, low lane first.
#[derive(Clone, Copy)]
pub struct Lanewise<F> {
    f: F,
}

impl<F: FnMut(f64) -> f64> Lanewise<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(f64) -> f64> UnaryOp for Lanewise<F> {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        (self.f)(x)
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        let lo = (self.f)(x.lo());
        let hi = (self.f)(x.hi());
        F64x2::new(lo, hi)
    }
}
