//! Channel layout conversion between planar (one block per channel) and
//! interleaved (one sample per channel per frame) buffers.
//!
//! [`copy`] converts between separate buffers. [`inplace`] converts a single
//! buffer whose planar blocks are adjacent, using only stack memory.
//! [`cycle_leader`] is a linear-time in-place shuffle kept for comparison.

pub mod copy;
pub mod cycle_leader;
pub mod inplace;

pub use copy::{
    check_is_interleaving, deinterleave, deinterleave4, deinterleave_channels, deinterleave_with,
    interleave, interleave4, interleave_channels, interleave_with,
};
pub use inplace::{
    deinterleave_channels_inplace, deinterleave_inplace, interleave_channels_inplace,
    interleave_inplace, Interleaver, DEFAULT_THRESHOLD,
};
