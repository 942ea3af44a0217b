//! Reductions over a whole buffer.

use crate::functors::reduction::{AbsOf, MaxValue, MinValue, Product, SquareOf, Sum};
use crate::reduce::reduce;
use crate::traits::ReduceOp;

/// Feeds all of `src` to `op`.
pub fn fold<R: ReduceOp>(src: &[f64], op: &mut R) -> f64 {
    unsafe { reduce(src.as_ptr(), src.len(), op) }
}

/// # Panics
/// Panics if `src` is empty.
pub fn min_value(src: &[f64]) -> f64 {
    assert!(!src.is_empty(), "min_value of an empty buffer");
    fold(src, &mut MinValue::new(src[0]))
}

/// # Panics
/// Panics if `src` is empty.
pub fn max_value(src: &[f64]) -> f64 {
    assert!(!src.is_empty(), "max_value of an empty buffer");
    fold(src, &mut MaxValue::new(src[0]))
}

/// Smallest magnitude.
///
/// # Panics
/// Panics if `src` is empty.
pub fn min_abs_value(src: &[f64]) -> f64 {
    assert!(!src.is_empty(), "min_abs_value of an empty buffer");
    fold(src, &mut AbsOf::new(MinValue::new(src[0].abs())))
}

/// Largest magnitude.
///
/// # Panics
/// Panics if `src` is empty.
pub fn max_abs_value(src: &[f64]) -> f64 {
    assert!(!src.is_empty(), "max_abs_value of an empty buffer");
    fold(src, &mut AbsOf::new(MaxValue::new(src[0].abs())))
}

pub fn sum(src: &[f64]) -> f64 {
    fold(src, &mut Sum::default())
}

pub fn sum_of_squares(src: &[f64]) -> f64 {
    fold(src, &mut SquareOf::new(Sum::default()))
}

pub fn product(src: &[f64]) -> f64 {
    fold(src, &mut Product::default())
}

/// Arithmetic mean, 0 for an empty buffer.
pub fn mean(src: &[f64]) -> f64 {
    if src.is_empty() {
        return 0.0;
    }
    sum(src) / src.len() as f64
}

/// Root mean square, 0 for an empty buffer.
pub fn rms(src: &[f64]) -> f64 {
    if src.is_empty() {
        return 0.0;
    }
    (sum_of_squares(src) / src.len() as f64).sqrt()
}
