//! Per-element operators handed to the kernels. Each one has a scalar and a
//! vector form that agree lane for lane.

pub mod binary;
pub mod generator;
pub mod reduction;
pub mod transform;
