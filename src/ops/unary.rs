//! Unary operations, each as a copy `(dst, src)` and an in-place form.

use crate::functors::reduction::{MaxValue, TransformReduce};
use crate::functors::transform::{
    Abs, AddScalar, Clip, CubicClip, Identity, Lanewise, MultiplyScalar, Square,
};
use crate::traits::UnaryOp;
use crate::transform::{copy_transform, inplace_transform, inplace_transform_and_reduce};

/// Magnitude below which samples are flushed to zero by [`undenormalize`].
pub const DENORMAL_THRESHOLD: f64 = 1e-15;

/// `dst[i] = op(src[i])` over `src.len()` elements.
///
/// # Panics
/// Panics if `dst.len() < src.len()`.
pub fn map<O: UnaryOp>(dst: &mut [f64], src: &[f64], op: &mut O) {
    assert!(dst.len() >= src.len(), "dst too small");
    unsafe { copy_transform(src.as_ptr(), src.len(), dst.as_mut_ptr(), op) }
}

/// `buf[i] = op(buf[i])`
pub fn map_inplace<O: UnaryOp>(buf: &mut [f64], op: &mut O) {
    unsafe { inplace_transform(buf.as_mut_ptr(), buf.len(), op) }
}

pub fn add_scalar(dst: &mut [f64], src: &[f64], t: f64) {
    map(dst, src, &mut AddScalar::new(t));
}

pub fn add_scalar_inplace(buf: &mut [f64], t: f64) {
    map_inplace(buf, &mut AddScalar::new(t));
}

pub fn multiply(dst: &mut [f64], src: &[f64], g: f64) {
    map(dst, src, &mut MultiplyScalar::new(g));
}

pub fn multiply_inplace(buf: &mut [f64], g: f64) {
    map_inplace(buf, &mut MultiplyScalar::new(g));
}

pub fn clip(dst: &mut [f64], src: &[f64], min: f64, max: f64) {
    map(dst, src, &mut Clip::new(min, max));
}

pub fn clip_inplace(buf: &mut [f64], min: f64, max: f64) {
    map_inplace(buf, &mut Clip::new(min, max));
}

/// Soft clip, see [`CubicClip`].
pub fn cubic_clip(dst: &mut [f64], src: &[f64]) {
    map(dst, src, &mut CubicClip);
}

pub fn cubic_clip_inplace(buf: &mut [f64]) {
    map_inplace(buf, &mut CubicClip);
}

/// # Panics
/// Panics if `dst.len() < src.len()`.
pub fn copy(dst: &mut [f64], src: &[f64]) {
    map(dst, src, &mut Identity);
}

pub fn phase_reverse(dst: &mut [f64], src: &[f64]) {
    map(dst, src, &mut MultiplyScalar::new(-1.0));
}

pub fn phase_reverse_inplace(buf: &mut [f64]) {
    map_inplace(buf, &mut MultiplyScalar::new(-1.0));
}

pub fn abs(dst: &mut [f64], src: &[f64]) {
    map(dst, src, &mut Abs);
}

pub fn abs_inplace(buf: &mut [f64]) {
    map_inplace(buf, &mut Abs);
}

pub fn square(dst: &mut [f64], src: &[f64]) {
    map(dst, src, &mut Square);
}

pub fn square_inplace(buf: &mut [f64]) {
    map_inplace(buf, &mut Square);
}

/// Flushes samples with `|x| < 1e-15` to zero.
pub fn undenormalize(buf: &mut [f64]) {
    let mut op = Lanewise::new(|x: f64| if x.abs() < DENORMAL_THRESHOLD { 0.0 } else { x });
    map_inplace(buf, &mut op);
}

/// Clips `buf` into `[-level, level]` and reports whether the input peak
/// reached `level`.
pub fn clip_with_indicator(buf: &mut [f64], level: f64) -> bool {
    let mut op = TransformReduce::new(MaxValue::new(0.0), Abs, Clip::symmetric(level));
    let peak = unsafe { inplace_transform_and_reduce(buf.as_mut_ptr(), buf.len(), &mut op) };
    peak >= level
}
