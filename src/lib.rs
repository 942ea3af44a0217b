pub mod functors;
pub mod generate;
pub mod inline;
pub mod interleave;
pub mod iterators;
pub mod ops;
pub mod reduce;
pub mod sample;
pub mod signals;
pub mod simd;
pub mod traits;
pub mod transform;

pub use sample::Sample;
pub use simd::{Vector2, F64x2};
pub use traits::{
    BinaryOp, FastSequence, FastSequenceMut, Generator, ReduceOp, Sequence, SequenceMut,
    TernaryOp, UnaryOp,
};

// Vector width in bytes: one `F64x2`.
pub const ALIGNMENT: usize = 16;
