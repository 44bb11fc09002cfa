//! Core numeric traits for use in planar_geometry.
mod fuzzy;
mod real;

pub use fuzzy::{FuzzyEq, FuzzyOrd};
pub use real::Real;
