//! Elementwise transform kernels.
//!
//! Every kernel walks its operands with the same dispatch loop: fall back to
//! scalar when an operand can't be vectorized or the operands disagree on
//! alignment, peel one element when they are odd-aligned or a fast run is
//! empty, and otherwise process a fast run in blocks of eight values (four
//! vectors) with the scalar remainder of the run handled in place. Operands are
//! advanced by the run and the loop starts over, so a ring buffer gets a second
//! fast run right after it wraps.

use crate::functors::reduction::TransformReduce;
use crate::inline::{plan, unroll_partition_8, Step};
use crate::traits::{
    BinaryOp, FastSequence, FastSequenceMut, ReduceOp, Sequence, SequenceMut, TernaryOp, UnaryOp,
};

/// Calls `f` with the element offset of each block of eight in `0..body`.
#[inline(always)]
pub(crate) fn for_each_block(body: usize, mut f: impl FnMut(isize)) {
    let mut i = 0;
    while i < body {
        f(i as isize);
        i += 8;
    }
}

#[inline(always)]
unsafe fn copy_scalar<S, D, O>(mut src: S, n: usize, mut dst: D, op: &mut O)
where
    S: Sequence,
    D: SequenceMut,
    O: UnaryOp,
{
    for _ in 0..n {
        dst.set(op.apply(src.get()));
        src.advance(1);
        dst.advance(1);
    }
}

/// `dst[i] = op(src[i])` for `i in 0..n`.
///
/// # Safety
/// `n` elements must be readable from `src` and writable from `dst`, and the
/// two ranges must not overlap.
pub unsafe fn copy_transform<S, D, O>(mut src: S, mut n: usize, mut dst: D, op: &mut O)
where
    S: Sequence,
    D: SequenceMut,
    O: UnaryOp,
{
    while n > 0 {
        let fast = src.supports_fast_processing() && dst.supports_fast_processing();
        match plan(fast, &[src.address(), dst.address()], || {
            src.fast_count(n).min(dst.fast_count(n))
        }) {
            Step::Scalar => {
                copy_scalar(src, n, dst, op);
                return;
            }
            Step::Peel => {
                copy_scalar(src, 1, dst, op);
                src.advance(1);
                dst.advance(1);
                n -= 1;
            }
            Step::Vector(run) => {
                let (body, rem) = unroll_partition_8(run);
                let s = src.fast_iterator();
                let d = dst.fast_iterator_mut();
                for_each_block(body, |i| {
                    let x0 = s.load2(i);
                    let x1 = s.load2(i + 2);
                    let x2 = s.load2(i + 4);
                    let x3 = s.load2(i + 6);
                    let y0 = op.apply2(x0);
                    let y1 = op.apply2(x1);
                    let y2 = op.apply2(x2);
                    let y3 = op.apply2(x3);
                    d.store2(i, y0);
                    d.store2(i + 2, y1);
                    d.store2(i + 4, y2);
                    d.store2(i + 6, y3);
                });
                src.advance(body);
                dst.advance(body);
                copy_scalar(src, rem, dst, op);
                src.advance(rem);
                dst.advance(rem);
                n -= run;
            }
        }
    }
}

#[inline(always)]
unsafe fn inplace_scalar<S, O>(mut seq: S, n: usize, op: &mut O)
where
    S: SequenceMut,
    O: UnaryOp,
{
    for _ in 0..n {
        seq.set(op.apply(seq.get()));
        seq.advance(1);
    }
}

/// `seq[i] = op(seq[i])` for `i in 0..n`.
///
/// # Safety
/// `n` elements must be readable and writable from `seq`.
pub unsafe fn inplace_transform<S, O>(mut seq: S, mut n: usize, op: &mut O)
where
    S: SequenceMut,
    O: UnaryOp,
{
    while n > 0 {
        match plan(seq.supports_fast_processing(), &[seq.address()], || seq.fast_count(n)) {
            Step::Scalar => {
                inplace_scalar(seq, n, op);
                return;
            }
            Step::Peel => {
                inplace_scalar(seq, 1, op);
                seq.advance(1);
                n -= 1;
            }
            Step::Vector(run) => {
                let (body, rem) = unroll_partition_8(run);
                let d = seq.fast_iterator_mut();
                for_each_block(body, |i| {
                    let x0 = d.load2(i);
                    let x1 = d.load2(i + 2);
                    let x2 = d.load2(i + 4);
                    let x3 = d.load2(i + 6);
                    let y0 = op.apply2(x0);
                    let y1 = op.apply2(x1);
                    let y2 = op.apply2(x2);
                    let y3 = op.apply2(x3);
                    d.store2(i, y0);
                    d.store2(i + 2, y1);
                    d.store2(i + 4, y2);
                    d.store2(i + 6, y3);
                });
                seq.advance(body);
                inplace_scalar(seq, rem, op);
                seq.advance(rem);
                n -= run;
            }
        }
    }
}

#[inline(always)]
unsafe fn binary_scalar<A, B, D, O>(mut a: A, mut b: B, n: usize, mut out: D, op: &mut O)
where
    A: Sequence,
    B: Sequence,
    D: SequenceMut,
    O: BinaryOp,
{
    for _ in 0..n {
        out.set(op.apply(a.get(), b.get()));
        a.advance(1);
        b.advance(1);
        out.advance(1);
    }
}

/// `out[i] = op(a[i], b[i])` for `i in 0..n`.
///
/// # Safety
/// `n` elements must be readable from `a` and `b` and writable from `out`.
/// `out` may coincide exactly with `a` or `b`, but must not partially overlap
/// either.
pub unsafe fn binary_transform<A, B, D, O>(mut a: A, mut b: B, mut n: usize, mut out: D, op: &mut O)
where
    A: Sequence,
    B: Sequence,
    D: SequenceMut,
    O: BinaryOp,
{
    while n > 0 {
        let fast = a.supports_fast_processing()
            && b.supports_fast_processing()
            && out.supports_fast_processing();
        match plan(fast, &[a.address(), b.address(), out.address()], || {
            a.fast_count(n).min(b.fast_count(n)).min(out.fast_count(n))
        }) {
            Step::Scalar => {
                binary_scalar(a, b, n, out, op);
                return;
            }
            Step::Peel => {
                binary_scalar(a, b, 1, out, op);
                a.advance(1);
                b.advance(1);
                out.advance(1);
                n -= 1;
            }
            Step::Vector(run) => {
                let (body, rem) = unroll_partition_8(run);
                let fa = a.fast_iterator();
                let fb = b.fast_iterator();
                let d = out.fast_iterator_mut();
                for_each_block(body, |i| {
                    let a0 = fa.load2(i);
                    let a1 = fa.load2(i + 2);
                    let a2 = fa.load2(i + 4);
                    let a3 = fa.load2(i + 6);
                    let b0 = fb.load2(i);
                    let b1 = fb.load2(i + 2);
                    let b2 = fb.load2(i + 4);
                    let b3 = fb.load2(i + 6);
                    let y0 = op.apply2(a0, b0);
                    let y1 = op.apply2(a1, b1);
                    let y2 = op.apply2(a2, b2);
                    let y3 = op.apply2(a3, b3);
                    d.store2(i, y0);
                    d.store2(i + 2, y1);
                    d.store2(i + 4, y2);
                    d.store2(i + 6, y3);
                });
                a.advance(body);
                b.advance(body);
                out.advance(body);
                binary_scalar(a, b, rem, out, op);
                a.advance(rem);
                b.advance(rem);
                out.advance(rem);
                n -= run;
            }
        }
    }
}

#[inline(always)]
unsafe fn ternary_scalar<A, B, C, D, O>(mut a: A, mut b: B, mut c: C, n: usize, mut out: D, op: &mut O)
where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: SequenceMut,
    O: TernaryOp,
{
    for _ in 0..n {
        out.set(op.apply(a.get(), b.get(), c.get()));
        a.advance(1);
        b.advance(1);
        c.advance(1);
        out.advance(1);
    }
}

/// `out[i] = op(a[i], b[i], c[i])` for `i in 0..n`.
///
/// # Safety
/// Same contract as [`binary_transform`], for three inputs.
pub unsafe fn ternary_transform<A, B, C, D, O>(
    mut a: A,
    mut b: B,
    mut c: C,
    mut n: usize,
    mut out: D,
    op: &mut O,
) where
    A: Sequence,
    B: Sequence,
    C: Sequence,
    D: SequenceMut,
    O: TernaryOp,
{
    while n > 0 {
        let fast = a.supports_fast_processing()
            && b.supports_fast_processing()
            && c.supports_fast_processing()
            && out.supports_fast_processing();
        let addresses = [a.address(), b.address(), c.address(), out.address()];
        match plan(fast, &addresses, || {
            a.fast_count(n)
                .min(b.fast_count(n))
                .min(c.fast_count(n))
                .min(out.fast_count(n))
        }) {
            Step::Scalar => {
                ternary_scalar(a, b, c, n, out, op);
                return;
            }
            Step::Peel => {
                ternary_scalar(a, b, c, 1, out, op);
                a.advance(1);
                b.advance(1);
                c.advance(1);
                out.advance(1);
                n -= 1;
            }
            Step::Vector(run) => {
                let (body, rem) = unroll_partition_8(run);
                let fa = a.fast_iterator();
                let fb = b.fast_iterator();
                let fc = c.fast_iterator();
                let d = out.fast_iterator_mut();
                for_each_block(body, |i| {
                    for k in [0, 2, 4, 6] {
                        let y = op.apply2(fa.load2(i + k), fb.load2(i + k), fc.load2(i + k));
                        d.store2(i + k, y);
                    }
                });
                a.advance(body);
                b.advance(body);
                c.advance(body);
                out.advance(body);
                ternary_scalar(a, b, c, rem, out, op);
                a.advance(rem);
                b.advance(rem);
                c.advance(rem);
                out.advance(rem);
                n -= run;
            }
        }
    }
}

/// Transforms `seq` in place and returns what the reduction saw along the way.
///
/// # Safety
/// See [`inplace_transform`].
pub unsafe fn inplace_transform_and_reduce<S, R, RT, T>(
    seq: S,
    n: usize,
    op: &mut TransformReduce<R, RT, T>,
) -> f64
where
    S: SequenceMut,
    R: ReduceOp,
    RT: UnaryOp,
    T: UnaryOp,
{
    inplace_transform(seq, n, op);
    op.reduced()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aligned_vec::{AVec, ConstAlign};
    use approx::assert_relative_eq;

    use crate::functors::binary::{Add, LinearCombinationAdd, Multiply};
    use crate::functors::reduction::MaxValue;
    use crate::functors::transform::{Abs, Clip, MultiplyScalar};
    use crate::iterators::{Circular, Reverse, Stride};
    use crate::ALIGNMENT;

    type Buffer = AVec<f64, ConstAlign<ALIGNMENT>>;

    fn ramp(n: usize) -> Buffer {
        AVec::from_iter(ALIGNMENT, (0..n).map(|i| i as f64 + 1.0))
    }

    #[test_log::test]
    fn test_copy_transform_all_offsets() {
        // every combination of odd/even source and destination starts
        let input = ramp(40);
        for src_offset in 0..2 {
            for dst_offset in 0..2 {
                for n in [0, 1, 2, 7, 8, 9, 17, 31] {
                    let mut output: Buffer = AVec::from_iter(ALIGNMENT, std::iter::repeat(0.0).take(40));
                    unsafe {
                        copy_transform(
                            input.as_ptr().add(src_offset),
                            n,
                            output.as_mut_ptr().add(dst_offset),
                            &mut MultiplyScalar::new(2.0),
                        );
                    }
                    for i in 0..n {
                        assert_eq!(output[dst_offset + i], 2.0 * input[src_offset + i]);
                    }
                    assert!(output[dst_offset + n..].iter().all(|&x| x == 0.0));
                }
            }
        }
    }

    #[test]
    fn test_inplace_transform() {
        let mut data: Buffer = AVec::from_iter(ALIGNMENT, (0..21).map(|i| if i % 2 == 0 { -(i as f64) } else { i as f64 }));
        unsafe { inplace_transform(data.as_mut_ptr().add(1), 19, &mut Abs) };
        assert_eq!(data[0], 0.0);
        for i in 1..20 {
            assert_eq!(data[i], i as f64);
        }
        assert_eq!(data[20], -20.0);
    }

    #[test]
    fn test_binary_transform_inplace_output() {
        let mut a = ramp(19);
        let b = ramp(19);
        let p = a.as_mut_ptr();
        unsafe { binary_transform(p as *const f64, b.as_ptr(), 19, p, &mut Multiply) };
        for i in 0..19 {
            assert_eq!(a[i], ((i + 1) * (i + 1)) as f64);
        }
    }

    #[test]
    fn test_binary_transform_mixed_alignment_falls_back() {
        let a = ramp(20);
        let b = ramp(20);
        let mut out: Buffer = AVec::from_iter(ALIGNMENT, [0.0; 20]);
        unsafe { binary_transform(a.as_ptr(), b.as_ptr().add(1), 19, out.as_mut_ptr(), &mut Add) };
        for i in 0..19 {
            assert_eq!(out[i], a[i] + b[i + 1]);
        }
    }

    #[test]
    fn test_ternary_transform() {
        let a = ramp(13);
        let b = ramp(13);
        let c = ramp(13);
        let mut out: Buffer = AVec::from_iter(ALIGNMENT, [0.0; 13]);
        let mut op = LinearCombinationAdd::new(2.0, -1.0);
        unsafe { ternary_transform(a.as_ptr(), b.as_ptr(), c.as_ptr(), 13, out.as_mut_ptr(), &mut op) };
        for i in 0..13 {
            assert_relative_eq!(out[i], c[i] + 2.0 * a[i] - b[i]);
        }
    }

    #[test]
    fn test_copy_into_ring_across_wrap() {
        let input = ramp(12);
        let mut ring: Buffer = AVec::from_iter(ALIGNMENT, [0.0; 10]);
        let dst = Circular::new(ring.as_mut_ptr(), 6, 10);
        assert_eq!(dst.fast_count(12), 4);
        unsafe { copy_transform(input.as_ptr(), 10, dst, &mut MultiplyScalar::new(1.0)) };
        // slots 6..10 then 0..6
        assert_eq!(&ring[..], &[5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_reverse_source() {
        let input = ramp(18);
        let mut out: Buffer = AVec::from_iter(ALIGNMENT, [0.0; 18]);
        unsafe {
            copy_transform(
                Reverse::from_end(input.as_ptr(), 18),
                18,
                out.as_mut_ptr(),
                &mut MultiplyScalar::new(1.0),
            )
        };
        for i in 0..18 {
            assert_eq!(out[i], input[17 - i]);
        }
    }

    #[test]
    fn test_reversed_ring_at_wrap_point() {
        let ring: Buffer = ramp(8);
        let mut out: Buffer = AVec::from_iter(ALIGNMENT, [0.0; 8]);
        let src = Reverse::new(Circular::new(ring.as_ptr(), 0, 8));
        assert_eq!(src.fast_count(8), 0);
        unsafe { copy_transform(src, 8, out.as_mut_ptr(), &mut MultiplyScalar::new(1.0)) };
        assert_eq!(&out[..], &[8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_strided_operands_run_scalar() {
        let input = ramp(12);
        let mut out = [0.0; 4];
        unsafe { copy_transform(Stride::new(input.as_ptr(), 3), 4, out.as_mut_ptr(), &mut Clip::new(0.0, 8.0)) };
        assert_eq!(out, [1.0, 4.0, 7.0, 8.0]);
    }

    #[test]
    fn test_inplace_transform_and_reduce() {
        let mut data: Buffer = AVec::from_iter(ALIGNMENT, (0..11).map(|i| i as f64 - 7.0));
        let mut op = TransformReduce::new(MaxValue::new(0.0), Abs, Clip::new(-2.0, 2.0));
        let peak = unsafe { inplace_transform_and_reduce(data.as_mut_ptr(), 11, &mut op) };
        assert_eq!(peak, 7.0);
        assert!(data.iter().all(|x| x.abs() <= 2.0));
    }
}
