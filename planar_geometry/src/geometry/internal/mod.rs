//! Internal geometry algorithms made public for benchmarking and testing purposes.
//!
//! Not expected to be used directly as part of the library but may be used to help learn about the
//! algorithms.
pub mod boolean;
pub mod contains;
pub mod widen;
