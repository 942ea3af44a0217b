use crate::inline::{plan, unroll_partition_8, Step};
use crate::simd::F64x2;
use crate::traits::{FastSequenceMut, Generator, SequenceMut};
use crate::transform::for_each_block;

// A constant generator's values, pulled once before the loop.
struct Hoisted {
    scalar: f64,
    vector: F64x2,
}

impl Generator for Hoisted {
    fn is_const(&self) -> bool {
        true
    }

    #[inline(always)]
    fn next1(&mut self) -> f64 {
        self.scalar
    }

    #[inline(always)]
    fn next2(&mut self) -> F64x2 {
        self.vector
    }
}

#[inline(always)]
unsafe fn generate_scalar<D: SequenceMut, G: Generator>(n: usize, mut out: D, gen: &mut G) {
    for _ in 0..n {
        out.set(gen.next1());
        out.advance(1);
    }
}

unsafe fn fill<D: SequenceMut, G: Generator>(mut n: usize, mut out: D, gen: &mut G) {
    while n > 0 {
        match plan(out.supports_fast_processing(), &[out.address()], || out.fast_count(n)) {
            Step::Scalar => {
                generate_scalar(n, out, gen);
                return;
            }
            Step::Peel => {
                generate_scalar(1, out, gen);
                out.advance(1);
                n -= 1;
            }
            Step::Vector(run) => {
                let (body, rem) = unroll_partition_8(run);
                let d = out.fast_iterator_mut();
                for_each_block(body, |i| {
                    d.store2(i, gen.next2());
                    d.store2(i + 2, gen.next2());
                    d.store2(i + 4, gen.next2());
                    d.store2(i + 6, gen.next2());
                });
                out.advance(body);
                generate_scalar(rem, out, gen);
                out.advance(rem);
                n -= run;
            }
        }
    }
}

/// Writes `n` values from `gen` to `out`.
///
/// # Safety
/// `n` elements must be writable from `out`.
pub unsafe fn generate<D, G>(n: usize, out: D, gen: &mut G)
where
    D: SequenceMut,
    G: Generator,
{
    if gen.is_const() {
        let mut hoisted = Hoisted {
            scalar: gen.next1(),
            vector: gen.next2(),
        };
        fill(n, out, &mut hoisted);
    } else {
        fill(n, out, gen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aligned_vec::{AVec, ConstAlign};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::functors::generator::{ConstantGenerator, RandomGenerator, ZeroGenerator};
    use crate::iterators::Circular;
    use crate::ALIGNMENT;

    #[test]
    fn test_generate_constant() {
        let mut out: AVec<f64, ConstAlign<ALIGNMENT>> = AVec::from_iter(ALIGNMENT, [9.0; 21]);
        unsafe { generate(19, out.as_mut_ptr().add(1), &mut ConstantGenerator::new(0.5)) };
        assert_eq!(out[0], 9.0);
        assert!(out[1..20].iter().all(|&x| x == 0.5));
        assert_eq!(out[20], 9.0);
        unsafe { generate(21, out.as_mut_ptr(), &mut ZeroGenerator) };
        assert!(out.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_random_generation_is_path_independent() {
        // the same seed gives the same samples whether the run is vectorized or not
        let mut aligned: AVec<f64, ConstAlign<ALIGNMENT>> = AVec::from_iter(ALIGNMENT, [0.0; 40]);
        let mut rng = StdRng::seed_from_u64(3);
        unsafe { generate(33, aligned.as_mut_ptr(), &mut RandomGenerator::new(-1.0, 1.0, &mut rng)) };

        let mut reference = [0.0; 33];
        let mut rng = StdRng::seed_from_u64(3);
        let mut gen = RandomGenerator::new(-1.0, 1.0, &mut rng);
        for x in reference.iter_mut() {
            *x = gen.next1();
        }
        assert_eq!(&aligned[..33], &reference[..]);
        assert!(reference.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_generate_into_ring() {
        let mut ring = [0.0; 6];
        let out = Circular::from_mut_slice(&mut ring, 4);
        unsafe { generate(4, out, &mut ConstantGenerator::new(1.0)) };
        assert_eq!(ring, [1.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
    }
}
