//! Binary and ternary operations. The `*_add` forms accumulate into `dst`.

use crate::functors::binary::{
    Add, LinearCombination, LinearCombinationAdd, Multiply, MultiplyAdd, MultiplyScalarAdd,
};
use crate::traits::{BinaryOp, TernaryOp};
use crate::transform::{binary_transform, ternary_transform};

/// `dst[i] = op(a[i], b[i])`
///
/// # Panics
/// Panics if `a` and `b` differ in length or `dst` is shorter.
pub fn zip_with<O: BinaryOp>(dst: &mut [f64], a: &[f64], b: &[f64], op: &mut O) {
    assert_eq!(a.len(), b.len(), "operand lengths differ");
    assert!(dst.len() >= a.len(), "dst too small");
    unsafe { binary_transform(a.as_ptr(), b.as_ptr(), a.len(), dst.as_mut_ptr(), op) }
}

/// `dst[i] = op(src[i], dst[i])`
pub fn accumulate_with<O: BinaryOp>(dst: &mut [f64], src: &[f64], op: &mut O) {
    assert!(dst.len() >= src.len(), "dst too small");
    let out = dst.as_mut_ptr();
    unsafe { binary_transform(src.as_ptr(), out as *const f64, src.len(), out, op) }
}

/// `dst[i] = op(a[i], b[i], dst[i])`
pub fn accumulate_zip_with<O: TernaryOp>(dst: &mut [f64], a: &[f64], b: &[f64], op: &mut O) {
    assert_eq!(a.len(), b.len(), "operand lengths differ");
    assert!(dst.len() >= a.len(), "dst too small");
    let out = dst.as_mut_ptr();
    unsafe { ternary_transform(a.as_ptr(), b.as_ptr(), out as *const f64, a.len(), out, op) }
}

pub fn add(dst: &mut [f64], a: &[f64], b: &[f64]) {
    zip_with(dst, a, b, &mut Add);
}

pub fn multiply_buffers(dst: &mut [f64], a: &[f64], b: &[f64]) {
    zip_with(dst, a, b, &mut Multiply);
}

/// `dst[i] = a1 * a[i] + a2 * b[i]`
pub fn linear_combination(dst: &mut [f64], a: &[f64], b: &[f64], a1: f64, a2: f64) {
    zip_with(dst, a, b, &mut LinearCombination::new(a1, a2));
}

/// Crossfade: `frac = 0` gives `a`, `frac = 1` gives `b`.
pub fn mix(dst: &mut [f64], a: &[f64], b: &[f64], frac: f64) {
    linear_combination(dst, a, b, 1.0 - frac, frac);
}

/// `dst[i] += src[i] * s`
pub fn multiply_scalar_add(dst: &mut [f64], src: &[f64], s: f64) {
    accumulate_with(dst, src, &mut MultiplyScalarAdd::new(s));
}

/// `dst[i] += a[i] * b[i]`
pub fn multiply_add(dst: &mut [f64], a: &[f64], b: &[f64]) {
    accumulate_zip_with(dst, a, b, &mut MultiplyAdd);
}

/// `dst[i] += a1 * a[i] + a2 * b[i]`
pub fn linear_combination_add(dst: &mut [f64], a: &[f64], b: &[f64], a1: f64, a2: f64) {
    accumulate_zip_with(dst, a, b, &mut LinearCombinationAdd::new(a1, a2));
}

pub fn mix_add(dst: &mut [f64], a: &[f64], b: &[f64], frac: f64) {
    linear_combination_add(dst, a, b, 1.0 - frac, frac);
}
