use crate::interleave::copy::{deinterleave_f64, interleave_f64};

/// Element type the interleave engine can shuffle.
///
/// The stereo conversions have scalar defaults; `f64` overrides them with a
/// vector path.
pub trait Sample: Copy + Default + PartialEq + 'static {
    /// `out[2i] = a[i]`, `out[2i + 1] = b[i]`. All lengths are pre-checked:
    /// `a.len() == b.len()` and `out.len() == 2 * a.len()`.
    #[inline]
    fn interleave2(a: &[Self], b: &[Self], out: &mut [Self]) {
        for ((frame, &x), &y) in out.chunks_exact_mut(2).zip(a).zip(b) {
            frame[0] = x;
            frame[1] = y;
        }
    }

    /// Inverse of [`Sample::interleave2`], under the same length contract.
    #[inline]
    fn deinterleave2(src: &[Self], a: &mut [Self], b: &mut [Self]) {
        for ((frame, x), y) in src.chunks_exact(2).zip(a.iter_mut()).zip(b.iter_mut()) {
            *x = frame[0];
            *y = frame[1];
        }
    }
}

impl Sample for f64 {
    #[inline]
    fn interleave2(a: &[f64], b: &[f64], out: &mut [f64]) {
        interleave_f64(a, b, out);
    }

    #[inline]
    fn deinterleave2(src: &[f64], a: &mut [f64], b: &mut [f64]) {
        deinterleave_f64(src, a, b);
    }
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(impl Sample for $t {})*
    };
}

impl_sample!(f32, i8, i16, i32, i64, u8, u16, u32, u64);
