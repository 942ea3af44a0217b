//! Buffer generation.

use rand::Rng;

use crate::functors::generator::{ConstantGenerator, RandomGenerator, ZeroGenerator};
use crate::generate::generate;
use crate::traits::Generator;

/// Fills `out` from `gen`.
pub fn fill_with<G: Generator>(out: &mut [f64], gen: &mut G) {
    unsafe { generate(out.len(), out.as_mut_ptr(), gen) }
}

pub fn zero(out: &mut [f64]) {
    fill_with(out, &mut ZeroGenerator);
}

pub fn assign(out: &mut [f64], value: f64) {
    fill_with(out, &mut ConstantGenerator::new(value));
}

/// Uniform noise in `[a, b)` drawn from `rng`.
pub fn randomize<R: Rng>(out: &mut [f64], a: f64, b: f64, rng: &mut R) {
    fill_with(out, &mut RandomGenerator::new(a, b, rng));
}
