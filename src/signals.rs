//! Vector-aligned sample buffers and deterministic test signals.

use std::f64::consts::TAU;

use aligned_vec::{AVec, ConstAlign};

use crate::ALIGNMENT;

/// Sample buffer whose first element sits on a vector boundary.
pub type AlignedBuffer = AVec<f64, ConstAlign<ALIGNMENT>>;

pub fn aligned_zeroed(len: usize) -> AlignedBuffer {
    AVec::from_iter(ALIGNMENT, std::iter::repeat(0.0).take(len))
}

// Simple builder for aligned inputs
#[derive(Debug, Clone)]
pub struct SignalBuilder {
    values: AlignedBuffer,
}

impl SignalBuilder {
    pub fn new() -> Self {
        Self {
            values: AVec::new(ALIGNMENT),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: AVec::with_capacity(ALIGNMENT, capacity),
        }
    }

    /// Starts from `len` zeros.
    pub fn with_len(len: usize) -> Self {
        Self {
            values: aligned_zeroed(len),
        }
    }

    pub fn build(&self) -> AlignedBuffer {
        self.values.clone()
    }

    pub fn push(&mut self, value: f64) -> &mut Self {
        self.values.push(value);
        self
    }

    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) -> &mut Self {
        for value in iter {
            self.push(value);
        }
        self
    }

    pub fn pad_zeros(&mut self, target_len: usize) -> &mut Self {
        while self.values.len() < target_len {
            self.values.push(0.0);
        }
        self
    }
}

impl Default for SignalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn increasing(x: usize) -> f64 {
    x as f64
}

pub fn decreasing(offset: usize, x: usize) -> f64 {
    offset as f64 - x as f64
}

/// `0, -1, 2, -3, ...`
pub fn alternate_sign_increasing(x: usize) -> f64 {
    if x & 1 == 0 {
        increasing(x)
    } else {
        -increasing(x)
    }
}

pub fn alternate_sign_decreasing(offset: usize, x: usize) -> f64 {
    if x & 1 == 0 {
        decreasing(offset, x)
    } else {
        -decreasing(offset, x)
    }
}

/// One cycle every `period` samples.
pub fn sine(period: usize, x: usize, amplitude: f64) -> f64 {
    let phase = (x % period) as f64 / period as f64;
    amplitude * (phase * TAU).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::inline::is_aligned;

    #[test]
    fn test_builder() {
        let buf = SignalBuilder::with_capacity(4)
            .push(1.0)
            .extend([2.0, 3.0])
            .pad_zeros(5)
            .build();
        assert_eq!(&buf[..], &[1.0, 2.0, 3.0, 0.0, 0.0]);
        assert!(is_aligned(buf.as_ptr() as usize));

        let zeros = SignalBuilder::with_len(3).push(1.0).build();
        assert_eq!(&zeros[..], &[0.0, 0.0, 0.0, 1.0]);
        assert!(is_aligned(aligned_zeroed(7).as_ptr() as usize));
    }

    #[test]
    fn test_shapes() {
        assert_eq!(increasing(3), 3.0);
        assert_eq!(decreasing(10, 3), 7.0);
        assert_eq!(decreasing(2, 5), -3.0);
        assert_eq!(alternate_sign_increasing(3), -3.0);
        assert_eq!(alternate_sign_decreasing(10, 1), -9.0);
        assert_eq!(alternate_sign_decreasing(10, 2), 8.0);
        assert_relative_eq!(sine(8, 2, 2.0), 2.0);
        assert_relative_eq!(sine(8, 10, 1.0), 1.0);
        assert_relative_eq!(sine(4, 0, 1.0), 0.0);
    }
}
