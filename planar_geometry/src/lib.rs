//! 2D vector geometry engine: path geometries built from line, arc, and bezier segments, primitive
//! shapes, boolean combination under a fill rule, flattening, area and bounds measurement,
//! widening, and hit-testing.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;
pub mod core;
mod error;
pub mod geometry;

pub use crate::error::{GeometryError, GeometryResult};
