use crate::inline::{plan, unroll_partition_8, Step};
use crate::traits::{FastSequence, ReduceOp, Sequence};
use crate::transform::for_each_block;

#[inline(always)]
unsafe fn reduce_scalar<S: Sequence, R: ReduceOp>(mut src: S, n: usize, op: &mut R) {
    for _ in 0..n {
        op.accumulate(src.get());
        src.advance(1);
    }
}

/// Feeds the first `n` elements of `src` to `op` and returns its result.
///
/// The vector and scalar paths accumulate separately, so floating-point
/// results may differ from a left fold by rounding.
///
/// # Safety
/// `n` elements must be readable from `src`.
pub unsafe fn reduce<S, R>(mut src: S, mut n: usize, op: &mut R) -> f64
where
    S: Sequence,
    R: ReduceOp,
{
    while n > 0 {
        match plan(src.supports_fast_processing(), &[src.address()], || src.fast_count(n)) {
            Step::Scalar => {
                reduce_scalar(src, n, op);
                break;
            }
            Step::Peel => {
                reduce_scalar(src, 1, op);
                src.advance(1);
                n -= 1;
            }
            Step::Vector(run) => {
                let (body, rem) = unroll_partition_8(run);
                let s = src.fast_iterator();
                for_each_block(body, |i| {
                    let x0 = s.load2(i);
                    let x1 = s.load2(i + 2);
                    let x2 = s.load2(i + 4);
                    let x3 = s.load2(i + 6);
                    op.accumulate2(x0);
                    op.accumulate2(x1);
                    op.accumulate2(x2);
                    op.accumulate2(x3);
                });
                src.advance(body);
                reduce_scalar(src, rem, op);
                src.advance(rem);
                n -= run;
            }
        }
    }
    op.get()
}
