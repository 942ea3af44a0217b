//! Sequence adaptors taking part in the fast-path protocol.

mod circular;
mod pointer;
mod reverse;
mod stride;

pub use circular::Circular;
pub use reverse::{Backward, Reverse};
pub use stride::Stride;
