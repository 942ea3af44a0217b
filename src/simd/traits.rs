// Surface shared by every `F64x2` backend
pub trait Vector2: Copy + Sized {
    fn zero() -> Self;
    fn splat(x: f64) -> Self;
    /// Builds a vector from its low and high lane.
    fn new(lo: f64, hi: f64) -> Self;

    /// Aligned load of two consecutive values.
    ///
    /// # Safety
    /// `ptr` must be valid for two reads and 16-byte aligned.
    unsafe fn load(ptr: *const f64) -> Self;
    /// # Safety
    /// `ptr` must be valid for two reads.
    unsafe fn load_unaligned(ptr: *const f64) -> Self;
    /// Aligned store of both lanes.
    ///
    /// # Safety
    /// `ptr` must be valid for two writes and 16-byte aligned.
    unsafe fn store(self, ptr: *mut f64);
    /// # Safety
    /// `ptr` must be valid for two writes.
    unsafe fn store_unaligned(self, ptr: *mut f64);

    fn negate(self) -> Self;
    fn add(self, other: Self) -> Self;
    fn subtract(self, other: Self) -> Self;
    fn multiply(self, other: Self) -> Self;
    /// Lane-wise `if self < other { self } else { other }`.
    fn minimum(self, other: Self) -> Self;
    /// Lane-wise `if self > other { self } else { other }`.
    fn maximum(self, other: Self) -> Self;
    /// Swaps the two lanes.
    fn rotate(self) -> Self;
    /// `[self.lo, other.lo]`
    fn interleave_lo(self, other: Self) -> Self;
    /// `[self.hi, other.hi]`
    fn interleave_hi(self, other: Self) -> Self;
    /// `[self.lo + self.hi, other.lo + other.hi]`
    fn hadd(self, other: Self) -> Self;
    /// `[self.lo - other.lo, self.hi + other.hi]`
    fn add_hi_sub_lo(self, other: Self) -> Self;
    /// Clears the bits set in `sign_mask`; with a mask of `-0.0` this is `abs`.
    fn abs_masked(self, sign_mask: Self) -> Self;

    fn to_array(self) -> [f64; 2];

    #[inline(always)]
    fn abs(self) -> Self {
        self.abs_masked(Self::splat(-0.0))
    }

    #[inline(always)]
    fn lo(self) -> f64 {
        self.to_array()[0]
    }

    #[inline(always)]
    fn hi(self) -> f64 {
        self.to_array()[1]
    }

    /// Sum of both lanes.
    #[inline(always)]
    fn sum(self) -> f64 {
        let [lo, hi] = self.to_array();
        lo + hi
    }
}
