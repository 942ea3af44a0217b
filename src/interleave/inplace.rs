use crate::sample::Sample;

/// Base-case size used by the free functions.
pub const DEFAULT_THRESHOLD: usize = 64;

/// In-place divide-and-conquer (de)interleaver.
///
/// A planar buffer `[A1 A2 | B1 B2]` becomes `[A1 B1 | A2 B2]` with one block
/// rotation, and both halves are then interleaved on their own. Once a
/// subproblem's non-final channels fit in `THRESHOLD` elements it is finished
/// with a copy through a stack array. Time is O(n log n), stack depth
/// O(log n), and nothing is allocated on the heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interleaver<const THRESHOLD: usize = DEFAULT_THRESHOLD>;

impl<const THRESHOLD: usize> Interleaver<THRESHOLD> {
    /// `[A.. B..] -> [A B A B ..]` for a stereo buffer.
    ///
    /// # Panics
    /// Panics if `buf` has odd length.
    pub fn interleave<T: Sample>(buf: &mut [T]) {
        Self::interleave_channels(buf, 2);
    }

    /// `[A B A B ..] -> [A.. B..]` for a stereo buffer.
    pub fn deinterleave<T: Sample>(buf: &mut [T]) {
        Self::deinterleave_channels(buf, 2);
    }

    /// Interleaves `channels` adjacent planar blocks of `buf.len() / channels`
    /// samples each.
    ///
    /// # Panics
    /// Panics if `channels` is zero or does not divide `buf.len()`.
    pub fn interleave_channels<T: Sample>(buf: &mut [T], channels: usize) {
        let n = frames(buf, channels);
        if n * (channels - 1) > THRESHOLD {
            log::trace!("interleave {} x {}: splitting", channels, n);
        }
        Self::interleave_rec(buf, channels, n);
    }

    pub fn deinterleave_channels<T: Sample>(buf: &mut [T], channels: usize) {
        let n = frames(buf, channels);
        if n * (channels - 1) > THRESHOLD {
            log::trace!("deinterleave {} x {}: splitting", channels, n);
        }
        Self::deinterleave_rec(buf, channels, n);
    }

    fn interleave_rec<T: Sample>(buf: &mut [T], channels: usize, n: usize) {
        if n <= 1 || channels == 1 {
            return;
        }
        if n * (channels - 1) <= THRESHOLD {
            return Self::interleave_base(buf, channels, n);
        }
        let half = n >> 1;
        let rest = n - half;
        // gather the first half of every channel at the front
        for c in 1..channels {
            let start = c * half;
            buf[start..start + c * rest + half].rotate_left(c * rest);
        }
        let (front, back) = buf.split_at_mut(channels * half);
        Self::interleave_rec(front, channels, half);
        Self::interleave_rec(back, channels, rest);
    }

    fn deinterleave_rec<T: Sample>(buf: &mut [T], channels: usize, n: usize) {
        if n <= 1 || channels == 1 {
            return;
        }
        if n * (channels - 1) <= THRESHOLD {
            return Self::deinterleave_base(buf, channels, n);
        }
        let half = n >> 1;
        let rest = n - half;
        {
            let (front, back) = buf.split_at_mut(channels * half);
            Self::deinterleave_rec(front, channels, half);
            Self::deinterleave_rec(back, channels, rest);
        }
        for c in (1..channels).rev() {
            let start = c * half;
            buf[start..start + half + c * rest].rotate_left(half);
        }
    }

    #[inline(never)]
    fn interleave_base<T: Sample>(buf: &mut [T], channels: usize, n: usize) {
        let head = (channels - 1) * n;
        let mut scratch = [T::default(); THRESHOLD];
        scratch[..head].copy_from_slice(&buf[..head]);
        // frame i only overwrites last-channel samples that were already read
        for i in 0..n {
            let last = buf[head + i];
            let frame = &mut buf[i * channels..(i + 1) * channels];
            for (c, x) in frame[..channels - 1].iter_mut().enumerate() {
                *x = scratch[c * n + i];
            }
            frame[channels - 1] = last;
        }
    }

    #[inline(never)]
    fn deinterleave_base<T: Sample>(buf: &mut [T], channels: usize, n: usize) {
        let tail = (channels - 1) * n;
        let mut scratch = [T::default(); THRESHOLD];
        for (i, frame) in buf[..channels * n].chunks_exact(channels).enumerate() {
            for (c, &x) in frame[1..].iter().enumerate() {
                scratch[c * n + i] = x;
            }
        }
        for i in 1..n {
            buf[i] = buf[i * channels];
        }
        buf[n..n + tail].copy_from_slice(&scratch[..tail]);
    }
}

fn frames<T>(buf: &[T], channels: usize) -> usize {
    assert!(channels > 0, "channel count must be non-zero");
    assert!(
        buf.len() % channels == 0,
        "buffer length must be a multiple of the channel count"
    );
    buf.len() / channels
}

/// Stereo [`Interleaver::interleave`] with the default threshold.
pub fn interleave_inplace<T: Sample>(buf: &mut [T]) {
    Interleaver::<DEFAULT_THRESHOLD>::interleave(buf);
}

pub fn deinterleave_inplace<T: Sample>(buf: &mut [T]) {
    Interleaver::<DEFAULT_THRESHOLD>::deinterleave(buf);
}

pub fn interleave_channels_inplace<T: Sample>(buf: &mut [T], channels: usize) {
    Interleaver::<DEFAULT_THRESHOLD>::interleave_channels(buf, channels);
}

pub fn deinterleave_channels_inplace<T: Sample>(buf: &mut [T], channels: usize) {
    Interleaver::<DEFAULT_THRESHOLD>::deinterleave_channels(buf, channels);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interleave::copy::{deinterleave_channels, interleave_channels};

    fn planar(channels: usize, n: usize) -> Vec<i64> {
        (0..channels * n).map(|i| i as i64).collect()
    }

    #[test_log::test]
    fn test_interleave_tiny_threshold() {
        let mut buf = [1, 2, 3, 4, 5, 6, 7, 8];
        Interleaver::<1>::interleave(&mut buf);
        assert_eq!(buf, [1, 5, 2, 6, 3, 7, 4, 8]);
        Interleaver::<1>::deinterleave(&mut buf);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_trivial_sizes() {
        let mut empty: [f64; 0] = [];
        interleave_inplace(&mut empty);
        let mut one = [1.0, 2.0];
        interleave_inplace(&mut one);
        assert_eq!(one, [1.0, 2.0]);
        let mut mono = [1, 2, 3];
        interleave_channels_inplace(&mut mono, 1);
        assert_eq!(mono, [1, 2, 3]);
    }

    fn check<const THRESHOLD: usize>(channels: usize, n: usize) {
        let original = planar(channels, n);
        let mut expected = vec![0; original.len()];
        interleave_channels(&original, channels, &mut expected);

        let mut buf = original.clone();
        Interleaver::<THRESHOLD>::interleave_channels(&mut buf, channels);
        assert_eq!(buf, expected, "interleave {} x {} (threshold {})", channels, n, THRESHOLD);

        Interleaver::<THRESHOLD>::deinterleave_channels(&mut buf, channels);
        assert_eq!(buf, original, "deinterleave {} x {} (threshold {})", channels, n, THRESHOLD);

        let mut planar_back = vec![0; original.len()];
        deinterleave_channels(&expected, channels, &mut planar_back);
        assert_eq!(planar_back, original);
    }

    #[test]
    fn test_matches_copy_version() {
        for channels in 1..=5 {
            for n in (0..40).chain([63, 64, 65, 100, 257, 1000]) {
                check::<0>(channels, n);
                check::<1>(channels, n);
                check::<7>(channels, n);
                check::<64>(channels, n);
            }
        }
    }

    #[test]
    fn test_stereo_f64_round_trip() {
        let n = 1531;
        let original: Vec<f64> = (0..2 * n).map(|i| (i as f64).sin()).collect();
        let mut buf = original.clone();
        interleave_inplace(&mut buf);
        for i in 0..n {
            assert_eq!(buf[2 * i], original[i]);
            assert_eq!(buf[2 * i + 1], original[n + i]);
        }
        deinterleave_inplace(&mut buf);
        assert_eq!(buf, original);
    }

    #[test]
    #[should_panic(expected = "buffer length must be a multiple of the channel count")]
    fn test_odd_stereo_length_panics() {
        let mut buf = [1, 2, 3];
        interleave_inplace(&mut buf);
    }

    #[test]
    #[should_panic(expected = "channel count must be non-zero")]
    fn test_zero_channels_panics() {
        let mut buf = [1, 2];
        deinterleave_channels_inplace(&mut buf, 0);
    }
}
