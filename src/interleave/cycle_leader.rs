//! Linear-time in-place stereo interleave by cycle leaders.
//!
//! Splits the buffer into sections of length `3^k - 1`, for which the cycles
//! of the perfect shuffle start at `1, 3, 9, ...`. O(n) time and O(1) space,
//! but the scattered accesses make it slower than [`super::inplace`] in
//! practice; it stays as a reference for tests and benchmarks.

/// `[A.. B..] -> [A B A B ..]`
///
/// # Panics
/// Panics if `buf` has odd length.
pub fn interleave_inplace<T>(buf: &mut [T]) {
    assert!(
        buf.len() % 2 == 0,
        "buffer length must be a multiple of the channel count"
    );
    let len = buf.len();
    if len <= 2 {
        return;
    }
    // the first and last samples are already in place
    in_shuffle(&mut buf[1..len - 1]);
}

/// `[x0 .. xn, y0 .. yn] -> [y0 x0 y1 x1 ..]`
fn in_shuffle<T>(mut buf: &mut [T]) {
    while !buf.is_empty() {
        let n = buf.len() / 2;
        let mut section = 3;
        while section * 3 <= 2 * n + 1 {
            section *= 3;
        }
        let m = (section - 1) / 2;
        // bring y0..ym next to x0..xm
        buf[m..n + m].rotate_left(n - m);
        let mut leader = 1;
        while leader < 2 * m {
            cycle(&mut buf[..2 * m], leader);
            leader *= 3;
        }
        buf = &mut std::mem::take(&mut buf)[2 * m..];
    }
}

// Follows the cycle through `leader` (1-based) of `i -> 2i mod (len + 1)`.
fn cycle<T>(buf: &mut [T], leader: usize) {
    let modulus = buf.len() + 1;
    let mut i = leader * 2 % modulus;
    while i != leader {
        buf.swap(leader - 1, i - 1);
        i = i * 2 % modulus;
    }
}
