//! Elliptical arc to cubic bezier conversion.
use super::SweepDirection;
use crate::core::{
    math::{Point, Size},
    traits::Real,
};

/// Result of converting an elliptical arc segment.
#[derive(Debug, Clone, PartialEq)]
pub enum ArcApproximation<T>
where
    T: Real,
{
    /// Start and end point are the same, the arc draws nothing.
    Point,
    /// A radius is zero (or a parameter is not finite), the arc degenerates to a straight line to
    /// the end point.
    Line,
    /// Cubic bezier spans, each given as `[control1, control2, end]`. The end of the last span is
    /// exactly the arc end point.
    Curves(Vec<[Point<T>; 3]>),
}

/// Center parameterization of an elliptical arc.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcCenterParams<T>
where
    T: Real,
{
    pub center: Point<T>,
    /// Radii after scaling up to span the chord.
    pub radius_x: T,
    pub radius_y: T,
    /// Rotation of the ellipse x axis in radians.
    pub rotation: T,
    /// Parametric start angle in radians.
    pub start_angle: T,
    /// Signed parametric sweep in radians (positive is clockwise in y down coordinates).
    pub sweep_angle: T,
}

/// Compute the center parameterization of the arc from `start` to `end`.
///
/// Follows the endpoint to center conversion of the SVG implementation notes: radii are made
/// positive and scaled up if too small to span the chord, the candidate center is selected by
/// `is_large_arc` and `sweep_direction`. Returns `None` if the arc is degenerate (coincident end
/// points, a zero radius, or non-finite parameters).
pub fn arc_center_params<T>(
    start: Point<T>,
    end: Point<T>,
    size: Size<T>,
    rotation_angle: T,
    is_large_arc: bool,
    sweep_direction: SweepDirection,
) -> Option<ArcCenterParams<T>>
where
    T: Real,
{
    let mut rx = size.width.abs();
    let mut ry = size.height.abs();
    if !start.is_finite()
        || !end.is_finite()
        || !rx.is_finite()
        || !ry.is_finite()
        || !rotation_angle.is_finite()
    {
        return None;
    }

    if start.fuzzy_eq(end) || rx.fuzzy_eq_zero() || ry.fuzzy_eq_zero() {
        return None;
    }

    let rotation = rotation_angle.to_radians();
    let (sin_phi, cos_phi) = rotation.sin_cos();

    // rotate the half chord into ellipse local space
    let dx2 = (start.x - end.x) * T::half();
    let dy2 = (start.y - end.y) * T::half();
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // scale up radii if the ellipse cannot span the chord
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > T::one() {
        let s = lambda.sqrt();
        rx = rx * s;
        ry = ry * s;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
    let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
    let sweep_flag = sweep_direction == SweepDirection::Clockwise;
    let sign = if is_large_arc == sweep_flag {
        -T::one()
    } else {
        T::one()
    };

    let coef = sign * num_traits::Float::max(num / den, T::zero()).sqrt();
    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;

    let center = Point::new(
        cos_phi * cxp - sin_phi * cyp + (start.x + end.x) * T::half(),
        sin_phi * cxp + cos_phi * cyp + (start.y + end.y) * T::half(),
    );

    let start_angle = vector_angle(T::one(), T::zero(), (x1p - cxp) / rx, (y1p - cyp) / ry);
    let mut sweep_angle = vector_angle(
        (x1p - cxp) / rx,
        (y1p - cyp) / ry,
        (-x1p - cxp) / rx,
        (-y1p - cyp) / ry,
    );

    if !sweep_flag && sweep_angle > T::zero() {
        sweep_angle = sweep_angle - T::tau();
    } else if sweep_flag && sweep_angle < T::zero() {
        sweep_angle = sweep_angle + T::tau();
    }

    Some(ArcCenterParams {
        center,
        radius_x: rx,
        radius_y: ry,
        rotation,
        start_angle,
        sweep_angle,
    })
}

/// Signed angle from vector `(ux, uy)` to vector `(vx, vy)`.
#[inline]
fn vector_angle<T>(ux: T, uy: T, vx: T, vy: T) -> T
where
    T: Real,
{
    let cross = ux * vy - uy * vx;
    let dot = ux * vx + uy * vy;
    cross.atan2(dot)
}

/// Convert an elliptical arc segment into cubic bezier spans of at most 45 degrees each.
///
/// Each span uses control points at the tangent length `4/3 * tan(sweep / 4)` (the kappa constant
/// ~0.5523 for a quarter turn, ~0.2652 for an eighth turn), which preserves the tangent direction at
/// every span end point. Eighth turn spans keep the radial error below 5e-6 of the radius so areas
/// of flattened arcs stay close to the closed form ellipse area.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// # use planar_geometry::geometry::*;
/// // half circle of radius 5 from (0, 0) to (10, 0)
/// let result = arc_to_beziers(
///     point(0.0, 0.0),
///     point(10.0, 0.0),
///     Size::new(5.0, 5.0),
///     0.0,
///     false,
///     SweepDirection::Clockwise,
/// );
/// if let ArcApproximation::Curves(spans) = result {
///     assert_eq!(spans.len(), 4);
///     assert_eq!(spans[3][2], point(10.0, 0.0));
/// } else {
///     unreachable!("expected curves");
/// }
/// ```
pub fn arc_to_beziers<T>(
    start: Point<T>,
    end: Point<T>,
    size: Size<T>,
    rotation_angle: T,
    is_large_arc: bool,
    sweep_direction: SweepDirection,
) -> ArcApproximation<T>
where
    T: Real,
{
    if start.is_finite() && end.is_finite() && start.fuzzy_eq(end) {
        return ArcApproximation::Point;
    }

    let params = match arc_center_params(
        start,
        end,
        size,
        rotation_angle,
        is_large_arc,
        sweep_direction,
    ) {
        Some(p) => p,
        None => return ArcApproximation::Line,
    };

    let eighth_turn = T::pi() / T::four();
    // small slack so a sweep of exactly 45 degrees is not split in two
    let span_count_f = (params.sweep_angle.abs() / eighth_turn - T::cast_f64(1e-7)).ceil();
    let span_count = span_count_f.as_f64().clamp(1.0, 8.0) as usize;
    let span_sweep = params.sweep_angle / T::cast_f64(span_count as f64);
    let kappa = T::four() / T::cast_f64(3.0) * (span_sweep / T::four()).tan();

    let (sin_phi, cos_phi) = params.rotation.sin_cos();
    let to_world = |ux: T, uy: T| {
        let x = ux * params.radius_x;
        let y = uy * params.radius_y;
        Point::new(
            cos_phi * x - sin_phi * y + params.center.x,
            sin_phi * x + cos_phi * y + params.center.y,
        )
    };

    let mut spans = Vec::with_capacity(span_count);
    let mut angle = params.start_angle;
    for i in 0..span_count {
        let next_angle = angle + span_sweep;
        let (s0, c0) = angle.sin_cos();
        let (s1, c1) = next_angle.sin_cos();
        let control1 = to_world(c0 - kappa * s0, s0 + kappa * c0);
        let control2 = to_world(c1 + kappa * s1, s1 - kappa * c1);
        let span_end = if i + 1 == span_count {
            end
        } else {
            to_world(c1, s1)
        };
        spans.push([control1, control2, span_end]);
        angle = next_angle;
    }

    ArcApproximation::Curves(spans)
}
