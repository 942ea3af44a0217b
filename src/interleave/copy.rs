use crate::inline::is_aligned;
use crate::sample::Sample;
use crate::simd::{Vector2, F64x2};

/// `[A, B, C], [1, 2, 3] -> [A, 1, B, 2, C, 3]`
///
/// # Panics
/// Panics if the channels differ in length or `out` is shorter than both.
pub fn interleave<T: Sample>(a: &[T], b: &[T], out: &mut [T]) {
    let n = a.len();
    assert_eq!(n, b.len(), "channel lengths differ");
    assert!(out.len() >= 2 * n, "dst too small");
    T::interleave2(a, b, &mut out[..2 * n]);
}

/// `[A, 1, B, 2, C, 3] -> [A, B, C], [1, 2, 3]`, filling `a` and `b` completely.
///
/// # Panics
/// Panics if the channels differ in length or `src` is too short.
pub fn deinterleave<T: Sample>(src: &[T], a: &mut [T], b: &mut [T]) {
    let n = a.len();
    assert_eq!(n, b.len(), "channel lengths differ");
    assert!(src.len() >= 2 * n, "src too small");
    T::deinterleave2(&src[..2 * n], a, b);
}

pub fn interleave4<T: Sample>(a: &[T], b: &[T], c: &[T], d: &[T], out: &mut [T]) {
    let n = a.len();
    assert!(b.len() == n && c.len() == n && d.len() == n, "channel lengths differ");
    assert!(out.len() >= 4 * n, "dst too small");
    for (i, frame) in out.chunks_exact_mut(4).take(n).enumerate() {
        frame.copy_from_slice(&[a[i], b[i], c[i], d[i]]);
    }
}

pub fn deinterleave4<T: Sample>(src: &[T], a: &mut [T], b: &mut [T], c: &mut [T], d: &mut [T]) {
    let n = a.len();
    assert!(b.len() == n && c.len() == n && d.len() == n, "channel lengths differ");
    assert!(src.len() >= 4 * n, "src too small");
    for (i, frame) in src.chunks_exact(4).take(n).enumerate() {
        a[i] = frame[0];
        b[i] = frame[1];
        c[i] = frame[2];
        d[i] = frame[3];
    }
}

/// Interleaves `channels` planar blocks stored back to back in `planar`.
///
/// # Panics
/// Panics if `channels` is zero, `planar.len()` is not a multiple of it, or
/// `out` is shorter than `planar`.
pub fn interleave_channels<T: Sample>(planar: &[T], channels: usize, out: &mut [T]) {
    assert!(channels > 0, "channel count must be non-zero");
    assert!(
        planar.len() % channels == 0,
        "buffer length must be a multiple of the channel count"
    );
    assert!(out.len() >= planar.len(), "dst too small");
    let n = planar.len() / channels;
    for (c, block) in planar.chunks_exact(n.max(1)).enumerate().take(channels) {
        for (i, &x) in block.iter().enumerate() {
            out[i * channels + c] = x;
        }
    }
}

/// Inverse of [`interleave_channels`].
pub fn deinterleave_channels<T: Sample>(src: &[T], channels: usize, planar: &mut [T]) {
    assert!(channels > 0, "channel count must be non-zero");
    assert!(
        planar.len() % channels == 0,
        "buffer length must be a multiple of the channel count"
    );
    assert!(src.len() >= planar.len(), "src too small");
    let n = planar.len() / channels;
    for (c, block) in planar.chunks_exact_mut(n.max(1)).enumerate().take(channels) {
        for (i, x) in block.iter_mut().enumerate() {
            *x = src[i * channels + c];
        }
    }
}

/// Interleaves while mapping each sample, e.g. to convert precision on the way.
pub fn interleave_with<T, U, F>(a: &[T], b: &[T], out: &mut [U], mut f: F)
where
    T: Copy,
    F: FnMut(T) -> U,
{
    let n = a.len();
    assert_eq!(n, b.len(), "channel lengths differ");
    assert!(out.len() >= 2 * n, "dst too small");
    for ((frame, &x), &y) in out.chunks_exact_mut(2).zip(a).zip(b) {
        frame[0] = f(x);
        frame[1] = f(y);
    }
}

pub fn deinterleave_with<T, U, F>(src: &[T], a: &mut [U], b: &mut [U], mut f: F)
where
    T: Copy,
    F: FnMut(T) -> U,
{
    let n = a.len();
    assert_eq!(n, b.len(), "channel lengths differ");
    assert!(src.len() >= 2 * n, "src too small");
    for ((frame, x), y) in src.chunks_exact(2).zip(a.iter_mut()).zip(b.iter_mut()) {
        *x = f(frame[0]);
        *y = f(frame[1]);
    }
}

/// `true` when `interleaved` starts with the frames of `a` and `b`.
pub fn check_is_interleaving<T: PartialEq>(a: &[T], b: &[T], interleaved: &[T]) -> bool {
    a.len() == b.len()
        && interleaved.len() >= 2 * a.len()
        && interleaved
            .chunks_exact(2)
            .zip(a.iter().zip(b))
            .all(|(frame, (x, y))| frame[0] == *x && frame[1] == *y)
}

fn all_aligned(addresses: [usize; 3]) -> bool {
    addresses.iter().all(|&a| is_aligned(a))
}

// Eight frames per block: four vectors from each channel, eight stores.
pub(crate) fn interleave_f64(a: &[f64], b: &[f64], out: &mut [f64]) {
    let n = a.len();
    debug_assert!(b.len() == n && out.len() == 2 * n);
    let mut done = 0;
    if all_aligned([a.as_ptr() as usize, b.as_ptr() as usize, out.as_ptr() as usize]) {
        done = n & !7;
        let (pa, pb, po) = (a.as_ptr(), b.as_ptr(), out.as_mut_ptr());
        for i in (0..done).step_by(8) {
            for k in (0..8).step_by(2) {
                unsafe {
                    let x = F64x2::load(pa.add(i + k));
                    let y = F64x2::load(pb.add(i + k));
                    x.interleave_lo(y).store(po.add(2 * (i + k)));
                    x.interleave_hi(y).store(po.add(2 * (i + k) + 2));
                }
            }
        }
    } else {
        log::trace!("stereo interleave: misaligned operands, scalar path");
    }
    for i in done..n {
        out[2 * i] = a[i];
        out[2 * i + 1] = b[i];
    }
}

pub(crate) fn deinterleave_f64(src: &[f64], a: &mut [f64], b: &mut [f64]) {
    let n = a.len();
    debug_assert!(b.len() == n && src.len() == 2 * n);
    let mut done = 0;
    if all_aligned([src.as_ptr() as usize, a.as_ptr() as usize, b.as_ptr() as usize]) {
        done = n & !7;
        let (ps, pa, pb) = (src.as_ptr(), a.as_mut_ptr(), b.as_mut_ptr());
        for i in (0..done).step_by(8) {
            for k in (0..8).step_by(2) {
                unsafe {
                    let f0 = F64x2::load(ps.add(2 * (i + k)));
                    let f1 = F64x2::load(ps.add(2 * (i + k) + 2));
                    f0.interleave_lo(f1).store(pa.add(i + k));
                    f0.interleave_hi(f1).store(pb.add(i + k));
                }
            }
        }
    } else {
        log::trace!("stereo deinterleave: misaligned operands, scalar path");
    }
    for i in done..n {
        a[i] = src[2 * i];
        b[i] = src[2 * i + 1];
    }
}
