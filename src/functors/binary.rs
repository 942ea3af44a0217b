use crate::simd::{Vector2, F64x2};
use crate::traits::{BinaryOp, TernaryOp};

#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl BinaryOp for Add {
    #[inline(always)]
    fn apply(&mut self, x1: f64, x2: f64) -> f64 {
        x1 + x2
    }

    #[inline(always)]
    fn apply2(&mut self, x1: F64x2, x2: F64x2) -> F64x2 {
        x1 + x2
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Multiply;

impl BinaryOp for Multiply {
    #[inline(always)]
    fn apply(&mut self, x1: f64, x2: f64) -> f64 {
        x1 * x2
    }

    #[inline(always)]
    fn apply2(&mut self, x1: F64x2, x2: F64x2) -> F64x2 {
        x1 * x2
    }
}

/// `a1 * x1 + a2 * x2`
#[derive(Debug, Clone, Copy)]
pub struct LinearCombination {
    a1: f64,
    a2: f64,
    a1_v: F64x2,
    a2_v: F64x2,
}

impl LinearCombination {
    pub fn new(a1: f64, a2: f64) -> Self {
        Self {
            a1,
            a2,
            a1_v: F64x2::splat(a1),
            a2_v: F64x2::splat(a2),
        }
    }
}

impl BinaryOp for LinearCombination {
    #[inline(always)]
    fn apply(&mut self, x1: f64, x2: f64) -> f64 {
        self.a1 * x1 + self.a2 * x2
    }

    #[inline(always)]
    fn apply2(&mut self, x1: F64x2, x2: F64x2) -> F64x2 {
        self.a1_v * x1 + self.a2_v * x2
    }
}

/// `x2 + x1 * s`
#[derive(Debug, Clone, Copy)]
pub struct MultiplyScalarAdd {
    s: f64,
    s_v: F64x2,
}

impl MultiplyScalarAdd {
    pub fn new(s: f64) -> Self {
        Self { s, s_v: F64x2::splat(s) }
    }
}

impl BinaryOp for MultiplyScalarAdd {
    #[inline(always)]
    fn apply(&mut self, x1: f64, x2: f64) -> f64 {
        x2 + x1 * self.s
    }

    #[inline(always)]
    fn apply2(&mut self, x1: F64x2, x2: F64x2) -> F64x2 {
        x2 + x1 * self.s_v
    }
}

/// `x3 + x1 * x2`
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplyAdd;

impl TernaryOp for MultiplyAdd {
    #[inline(always)]
    fn apply(&mut self, x1: f64, x2: f64, x3: f64) -> f64 {
        x3 + x1 * x2
    }

    #[inline(always)]
    fn apply2(&mut self, x1: F64x2, x2: F64x2, x3: F64x2) -> F64x2 {
        x3 + x1 * x2
    }
}

/// `x3 + a1 * x1 + a2 * x2`
#[derive(Debug, Clone, Copy)]
pub struct LinearCombinationAdd {
    combination: LinearCombination,
}

impl LinearCombinationAdd {
    pub fn new(a1: f64, a2: f64) -> Self {
        Self {
            combination: LinearCombination::new(a1, a2),
        }
    }
}

impl TernaryOp for LinearCombinationAdd {
    #[inline(always)]
    fn apply(&mut self, x1: f64, x2: f64, x3: f64) -> f64 {
        x3 + self.combination.apply(x1, x2)
    }

    #[inline(always)]
    fn apply2(&mut self, x1: F64x2, x2: F64x2, x3: F64x2) -> F64x2 {
        x3 + self.combination.apply2(x1, x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [(f64, f64); 4] = [(1.0, 2.0), (-0.5, 3.25), (1e10, -1e-10), (0.0, -7.0)];

    fn check_binary<O: BinaryOp>(mut op: O) {
        for &(a, b) in &PAIRS {
            let v = op.apply2(F64x2::new(a, b), F64x2::new(b, a)).to_array();
            assert_eq!(v[0].to_bits(), op.apply(a, b).to_bits());
            assert_eq!(v[1].to_bits(), op.apply(b, a).to_bits());
        }
    }

    fn check_ternary<O: TernaryOp>(mut op: O) {
        for &(a, b) in &PAIRS {
            let v = op
                .apply2(F64x2::new(a, b), F64x2::new(b, a), F64x2::splat(a - b))
                .to_array();
            assert_eq!(v[0].to_bits(), op.apply(a, b, a - b).to_bits());
            assert_eq!(v[1].to_bits(), op.apply(b, a, a - b).to_bits());
        }
    }

    #[test]
    fn test_scalar_and_vector_forms_agree() {
        check_binary(Add);
        check_binary(Multiply);
        check_binary(LinearCombination::new(0.25, -3.0));
        check_binary(MultiplyScalarAdd::new(1.5));
        check_ternary(MultiplyAdd);
        check_ternary(LinearCombinationAdd::new(2.0, 0.5));
    }

    #[test]
    fn test_values() {
        assert_eq!(Add.apply(1.0, 2.0), 3.0);
        assert_eq!(Multiply.apply(3.0, 2.0), 6.0);
        assert_eq!(LinearCombination::new(2.0, 3.0).apply(1.0, 1.0), 5.0);
        assert_eq!(MultiplyScalarAdd::new(2.0).apply(3.0, 1.0), 7.0);
        assert_eq!(MultiplyAdd.apply(2.0, 3.0, 1.0), 7.0);
        assert_eq!(LinearCombinationAdd::new(2.0, 3.0).apply(1.0, 1.0, 10.0), 15.0);
    }
}
