//! Precision conversion.

/// # Panics
/// Panics if `dst.len() < src.len()`.
pub fn double_to_float(dst: &mut [f32], src: &[f64]) {
    assert!(dst.len() >= src.len(), "dst too small");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as f32;
    }
}

/// # Panics
/// Panics if `dst.len() < src.len()`.
pub fn float_to_double(dst: &mut [f64], src: &[f32]) {
    assert!(dst.len() >= src.len(), "dst too small");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as f64;
    }
}
