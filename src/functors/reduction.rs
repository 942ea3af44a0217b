use crate::simd::{Vector2, F64x2};
use crate::traits::{ReduceOp, UnaryOp};

use super::transform::{scalar_max, scalar_min};

#[derive(Debug, Clone, Copy)]
pub struct MinValue {
    s: f64,
    v: F64x2,
}

impl MinValue {
    /// Starts from `init`; usually the first element of the range.
    pub fn new(init: f64) -> Self {
        Self { s: init, v: F64x2::splat(init) }
    }
}

impl ReduceOp for MinValue {
    #[inline(always)]
    fn accumulate(&mut self, x: f64) {
        self.s = scalar_min(self.s, x);
    }

    #[inline(always)]
    fn accumulate2(&mut self, x: F64x2) {
        self.v = self.v.minimum(x);
    }

    fn get(&self) -> f64 {
        scalar_min(scalar_min(self.s, self.v.lo()), self.v.hi())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxValue {
    s: f64,
    v: F64x2,
}

impl MaxValue {
    pub fn new(init: f64) -> Self {
        Self { s: init, v: F64x2::splat(init) }
    }
}

impl ReduceOp for MaxValue {
    #[inline(always)]
    fn accumulate(&mut self, x: f64) {
        self.s = scalar_max(self.s, x);
    }

    #[inline(always)]
    fn accumulate2(&mut self, x: F64x2) {
        self.v = self.v.maximum(x);
    }

    fn get(&self) -> f64 {
        scalar_max(scalar_max(self.s, self.v.lo()), self.v.hi())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sum {
    s: f64,
    v: F64x2,
}

impl Sum {
    pub fn new(init: f64) -> Self {
        Self { s: init, v: F64x2::zero() }
    }
}

impl Default for Sum {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ReduceOp for Sum {
    #[inline(always)]
    fn accumulate(&mut self, x: f64) {
        self.s += x;
    }

    #[inline(always)]
    fn accumulate2(&mut self, x: F64x2) {
        self.v = self.v + x;
    }

    fn get(&self) -> f64 {
        self.s + self.v.sum()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Product {
    s: f64,
    v: F64x2,
}

impl Product {
    pub fn new(init: f64) -> Self {
        Self { s: init, v: F64x2::splat(1.0) }
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ReduceOp for Product {
    #[inline(always)]
    fn accumulate(&mut self, x: f64) {
        self.s *= x;
    }

    #[inline(always)]
    fn accumulate2(&mut self, x: F64x2) {
        self.v = self.v * x;
    }

    fn get(&self) -> f64 {
        self.s * self.v.lo() * self.v.hi()
    }
}

/// Feeds `|x|` to the wrapped reduction.
#[derive(Debug, Clone, Copy)]
pub struct AbsOf<R> {
    inner: R,
}

impl<R: ReduceOp> AbsOf<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: ReduceOp> ReduceOp for AbsOf<R> {
    #[inline(always)]
    fn accumulate(&mut self, x: f64) {
        self.inner.accumulate(x.abs());
    }

    #[inline(always)]
    fn accumulate2(&mut self, x: F64x2) {
        self.inner.accumulate2(x.abs());
    }

    fn get(&self) -> f64 {
        self.inner.get()
    }
}

/// Feeds `x²` to the wrapped reduction.
#[derive(Debug, Clone, Copy)]
pub struct SquareOf<R> {
    inner: R,
}

impl<R: ReduceOp> SquareOf<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: ReduceOp> ReduceOp for SquareOf<R> {
    #[inline(always)]
    fn accumulate(&mut self, x: f64) {
        self.inner.accumulate(x * x);
    }

    #[inline(always)]
    fn accumulate2(&mut self, x: F64x2) {
        self.inner.accumulate2(x * x);
    }

    fn get(&self) -> f64 {
        self.inner.get()
    }
}

/// Transform that also observes its input: `reduce` is fed
/// `reduce_transform(x)` while `x` is replaced by `transform(x)`.
#[derive(Debug, Clone, Copy)]
pub struct TransformReduce<R, RT, T> {
    reduce: R,
    reduce_transform: RT,
    transform: T,
}

impl<R: ReduceOp, RT: UnaryOp, T: UnaryOp> TransformReduce<R, RT, T> {
    pub fn new(reduce: R, reduce_transform: RT, transform: T) -> Self {
        Self {
            reduce,
            reduce_transform,
            transform,
        }
    }

    pub fn reduced(&self) -> f64 {
        self.reduce.get()
    }
}

impl<R: ReduceOp, RT: UnaryOp, T: UnaryOp> UnaryOp for TransformReduce<R, RT, T> {
    #[inline(always)]
    fn apply(&mut self, x: f64) -> f64 {
        self.reduce.accumulate(self.reduce_transform.apply(x));
        self.transform.apply(x)
    }

    #[inline(always)]
    fn apply2(&mut self, x: F64x2) -> F64x2 {
        self.reduce.accumulate2(self.reduce_transform.apply2(x));
        self.transform.apply2(x)
    }
}
