//! Core module has common/shared math, value types, and traits used by the geometry engine.
pub mod math;
pub mod traits;
