//! Safe slice entry points over the kernels. Length preconditions are
//! asserted here; the kernels below never see a slice that is too short.

pub mod binary;
pub mod convert;
pub mod fill;
pub mod horizontal;
pub mod unary;
