use crate::ALIGNMENT;

/// Alignment class of an `f64` address relative to the vector width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// On a vector boundary.
    Aligned,
    /// One `f64` past a vector boundary.
    OddAligned,
    Unsupported,
}

#[inline(always)]
pub fn alignment_class(addr: usize) -> Alignment {
    match addr % ALIGNMENT {
        0 => Alignment::Aligned,
        8 => Alignment::OddAligned,
        _ => Alignment::Unsupported,
    }
}

#[inline(always)]
pub fn is_aligned(addr: usize) -> bool {
    addr % ALIGNMENT == 0
}

#[inline(always)]
pub fn is_odd_aligned(addr: usize) -> bool {
    addr % ALIGNMENT == 8
}

/// `true` when both addresses fall in the same alignment class.
#[inline(always)]
pub fn compare_alignment(a: usize, b: usize) -> bool {
    alignment_class(a) == alignment_class(b)
}

/// `true` iff every address has the same class and that class is vectorizable.
#[inline]
pub fn check_alignment(addrs: &[usize]) -> bool {
    let Some((&first, rest)) = addrs.split_first() else {
        return true;
    };
    let class = alignment_class(first);
    class != Alignment::Unsupported && rest.iter().all(|&a| alignment_class(a) == class)
}

// Unrolling helpers, (body, remainder) with body a multiple of the factor.
#[inline(always)]
pub fn unroll_partition_2(n: usize) -> (usize, usize) {
    (n & !1, n & 1)
}

#[inline(always)]
pub fn unroll_partition_4(n: usize) -> (usize, usize) {
    (n & !3, n & 3)
}

#[inline(always)]
pub fn unroll_partition_8(n: usize) -> (usize, usize) {
    (n & !7, n & 7)
}

#[inline(always)]
pub fn unroll_partition_16(n: usize) -> (usize, usize) {
    (n & !15, n & 15)
}

/// What a kernel does next with the remaining elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Finish everything on the scalar path.
    Scalar,
    /// One scalar element, then dispatch again.
    Peel,
    /// A vector run of this many elements.
    Vector(usize),
}

/// Dispatch decision shared by all kernels. `fast` is the conjunction of the
/// operands' `supports_fast_processing`, `fast_count` the minimum of their
/// fast counts; it is only evaluated once alignment has been settled.
#[inline(always)]
pub(crate) fn plan(fast: bool, addresses: &[usize], fast_count: impl FnOnce() -> usize) -> Step {
    if !fast || !check_alignment(addresses) {
        log::trace!("scalar fallback: fast={} addresses={:x?}", fast, addresses);
        return Step::Scalar;
    }
    if addresses.first().is_some_and(|&a| is_odd_aligned(a)) {
        return Step::Peel;
    }
    match fast_count() {
        0 => Step::Peel,
        k => Step::Vector(k),
    }
}
