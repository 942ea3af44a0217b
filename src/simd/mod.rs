//! Two-lane `f64` vector basis. Platform intrinsics live in this module only.

mod fallback;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod sse2;
mod traits;

pub use fallback::ScalarF64x2;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub use sse2::Sse2F64x2;
pub use traits::Vector2;

/// The vector type used by the kernels.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type F64x2 = Sse2F64x2;
/// The vector type used by the kernels.
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub type F64x2 = ScalarF64x2;

#[cfg(test)]
mod tests {
    use super::*;
    use aligned_vec::{AVec, ConstAlign};
    use approx::assert_relative_eq;

    use crate::ALIGNMENT;

    const PAIRS: [(f64, f64); 6] = [
        (1.0, 2.0),
        (-3.5, 0.25),
        (0.0, -0.0),
        (1e300, -1e-300),
        (-7.0, -7.0),
        (42.0, -1.5),
    ];

    // Evaluates `$e` on both backends and compares the lanes bit for bit.
    macro_rules! agree {
        ($a:ident, $b:ident => $e:expr) => {
            for &(a0, a1) in &PAIRS {
                for &(b0, b1) in &PAIRS {
                    let fast = {
                        let ($a, $b) = (F64x2::new(a0, a1), F64x2::new(b0, b1));
                        let _ = &$b;
                        $e.to_array()
                    };
                    let reference = {
                        let ($a, $b) = (ScalarF64x2::new(a0, a1), ScalarF64x2::new(b0, b1));
                        let _ = &$b;
                        $e.to_array()
                    };
                    assert_eq!(fast[0].to_bits(), reference[0].to_bits(), "{} lane 0", stringify!($e));
                    assert_eq!(fast[1].to_bits(), reference[1].to_bits(), "{} lane 1", stringify!($e));
                }
            }
        };
    }

    #[test]
    fn test_constructors() {
        assert_eq!(F64x2::zero().to_array(), [0.0, 0.0]);
        assert_eq!(F64x2::splat(3.0).to_array(), [3.0, 3.0]);
        let v = F64x2::new(1.0, 2.0);
        assert_eq!(v.lo(), 1.0);
        assert_eq!(v.hi(), 2.0);
        assert_eq!(v.sum(), 3.0);
    }

    #[test]
    fn test_aligned_load_store() {
        let mut data: AVec<f64, ConstAlign<ALIGNMENT>> = AVec::from_iter(ALIGNMENT, [1.0, 2.0, 3.0, 4.0]);
        unsafe {
            let v = F64x2::load(data.as_ptr().add(2));
            assert_eq!(v.to_array(), [3.0, 4.0]);
            v.rotate().store(data.as_mut_ptr());
        }
        assert_eq!(&data[..], &[4.0, 3.0, 3.0, 4.0]);
    }

    #[test]
    fn test_unaligned_load_store() {
        let mut data = [1.0, 2.0, 3.0, 4.0, 5.0];
        unsafe {
            let v = F64x2::load_unaligned(data.as_ptr().add(1));
            assert_eq!(v.to_array(), [2.0, 3.0]);
            (v * F64x2::splat(10.0)).store_unaligned(data.as_mut_ptr().add(3));
        }
        assert_eq!(data, [1.0, 2.0, 3.0, 20.0, 30.0]);
    }

    #[test]
    fn test_arithmetic() {
        let a = F64x2::new(1.5, -2.0);
        let b = F64x2::new(0.5, 4.0);
        assert_eq!((a + b).to_array(), [2.0, 2.0]);
        assert_eq!((a - b).to_array(), [1.0, -6.0]);
        assert_eq!((a * b).to_array(), [0.75, -8.0]);
        assert_eq!((-a).to_array(), [-1.5, 2.0]);
        assert_eq!(a.minimum(b).to_array(), [0.5, -2.0]);
        assert_eq!(a.maximum(b).to_array(), [1.5, 4.0]);
    }

    #[test]
    fn test_shuffles() {
        let a = F64x2::new(1.0, 2.0);
        let b = F64x2::new(3.0, 4.0);
        assert_eq!(a.rotate().to_array(), [2.0, 1.0]);
        assert_eq!(a.interleave_lo(b).to_array(), [1.0, 3.0]);
        assert_eq!(a.interleave_hi(b).to_array(), [2.0, 4.0]);
        assert_eq!(a.hadd(b).to_array(), [3.0, 7.0]);
        assert_eq!(a.add_hi_sub_lo(b).to_array(), [-2.0, 6.0]);
    }

    #[test]
    fn test_abs() {
        let v = F64x2::new(-3.25, 0.5);
        assert_eq!(v.abs().to_array(), [3.25, 0.5]);
        let negative_zero = F64x2::new(-0.0, -1e-310).abs();
        assert_eq!(negative_zero.lo().to_bits(), 0.0f64.to_bits());
        assert_relative_eq!(negative_zero.hi(), 1e-310);
    }

    #[test]
    fn test_negate_of_zero_is_positive() {
        // 0 - x, so negating +0.0 yields +0.0 on every backend
        assert_eq!(F64x2::zero().negate().lo().to_bits(), 0.0f64.to_bits());
        assert_eq!(ScalarF64x2::zero().negate().lo().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_backends_agree() {
        agree!(a, b => a + b);
        agree!(a, b => a - b);
        agree!(a, b => a * b);
        agree!(a, b => -a);
        agree!(a, b => a.minimum(b));
        agree!(a, b => a.maximum(b));
        agree!(a, b => a.hadd(b));
        agree!(a, b => a.add_hi_sub_lo(b));
        agree!(a, b => a.interleave_lo(b));
        agree!(a, b => a.interleave_hi(b));
        agree!(a, b => a.abs());
        agree!(a, b => a.rotate());
    }

    #[test]
    fn test_scalar_backend_matches_minpd_operand_order() {
        // equal operands of different sign: the second operand wins
        let a = ScalarF64x2::new(0.0, -0.0);
        let b = ScalarF64x2::new(-0.0, 0.0);
        let min = a.minimum(b).to_array();
        assert_eq!(min[0].to_bits(), (-0.0f64).to_bits());
        assert_eq!(min[1].to_bits(), 0.0f64.to_bits());
        let max = a.maximum(b).to_array();
        assert_eq!(max[0].to_bits(), (-0.0f64).to_bits());
        assert_eq!(max[1].to_bits(), 0.0f64.to_bits());
    }
}
