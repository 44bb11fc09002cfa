//! Supporting public types and option structs used by the geometry operations.

use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default absolute flattening tolerance used by every query that is not given an explicit
/// tolerance.
pub const DEFAULT_FLATTENING_TOLERANCE: f64 = 1e-3;

/// Policy determining which regions of a self overlapping path count as inside.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    /// Inside if a ray from the point crosses the boundary an odd number of times.
    #[default]
    EvenOdd,
    /// Inside if the winding number of the boundary around the point is not zero.
    NonZero,
}

impl FillRule {
    /// Returns true if a point with the `winding` number given is inside under this fill rule.
    #[inline]
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            FillRule::EvenOdd => winding % 2 != 0,
            FillRule::NonZero => winding != 0,
        }
    }
}

/// How a numeric tolerance is interpreted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ToleranceType {
    /// Fixed distance in coordinate units.
    #[default]
    Absolute,
    /// Fraction of the local scale (bounding diagonal) of the curve being flattened.
    Relative,
}

/// Direction an elliptical arc is drawn in, positive angle direction is clockwise (y axis down).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SweepDirection {
    #[default]
    Counterclockwise,
    Clockwise,
}

/// Boolean operation applied to the filled regions of two geometries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum GeometryCombineMode {
    /// Region covered by either geometry.
    #[default]
    Union,
    /// Region covered by both geometries.
    Intersect,
    /// Region covered by the first geometry but not the second.
    Exclude,
    /// Region covered by exactly one of the geometries.
    Xor,
}

impl GeometryCombineMode {
    /// Returns true if a point with membership `in_a`, `in_b` is part of the combined region.
    #[inline]
    pub fn keep(self, in_a: bool, in_b: bool) -> bool {
        match self {
            GeometryCombineMode::Union => in_a || in_b,
            GeometryCombineMode::Intersect => in_a && in_b,
            GeometryCombineMode::Exclude => in_a && !in_b,
            GeometryCombineMode::Xor => in_a != in_b,
        }
    }
}

/// Classification of how the filled regions of two geometries relate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum IntersectionDetail {
    #[default]
    NotCalculated,
    /// Regions do not overlap.
    Empty,
    /// Regions partially overlap.
    Intersects,
    /// The geometry tested against fully encloses the other geometry.
    FullyContains,
    /// The geometry tested against is fully enclosed by the other geometry.
    FullyInside,
}

/// Options for flattening curves and for the queries that flatten internally (area, hit-testing).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlattenOptions<T>
where
    T: Real,
{
    /// Maximum allowed distance between a curve and its flattened polyline.
    pub tolerance: T,
    /// How `tolerance` is interpreted.
    pub tolerance_type: ToleranceType,
}

impl<T> FlattenOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            tolerance: T::cast_f64(DEFAULT_FLATTENING_TOLERANCE),
            tolerance_type: ToleranceType::Absolute,
        }
    }

    #[inline]
    pub fn with_tolerance(tolerance: T, tolerance_type: ToleranceType) -> Self {
        Self {
            tolerance,
            tolerance_type,
        }
    }

    /// Returns true if these are the default options (results at the default options are cached).
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::new()
    }
}

impl<T> Default for FlattenOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Options for combining geometries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CombineOptions<T>
where
    T: Real,
{
    /// Flattening tolerance applied to both operands before combining.
    pub tolerance: T,
    /// How `tolerance` is interpreted.
    pub tolerance_type: ToleranceType,
    /// Relative fuzzy comparison epsilon used for determining if two positions are equal, scaled by
    /// the larger of 1 and the largest absolute coordinate of the operands.
    pub pos_equal_eps: T,
}

impl<T> CombineOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            tolerance: T::cast_f64(DEFAULT_FLATTENING_TOLERANCE),
            tolerance_type: ToleranceType::Absolute,
            pos_equal_eps: T::cast_f64(1e-9),
        }
    }

    #[inline]
    pub fn flatten_options(&self) -> FlattenOptions<T> {
        FlattenOptions::with_tolerance(self.tolerance, self.tolerance_type)
    }
}

impl<T> Default for CombineOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
