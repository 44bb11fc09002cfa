#![allow(dead_code)]
mod geometry_properties;
mod shapes;

pub use geometry_properties::*;
pub use shapes::*;
