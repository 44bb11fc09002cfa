//! Core math: points, sizes, rectangles, affine matrices, and line segment helpers.
mod base_math;
mod line_line_intersect;
mod matrix;
mod point;
mod rect;

pub use base_math::*;
pub use line_line_intersect::{line_line_intr, LineLineIntr};
pub use matrix::Matrix;
pub use point::{point, Point};
pub use rect::{Rect, Size};
