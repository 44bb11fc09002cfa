//! Adaptive flattening and exact bounds of line, quadratic, and cubic curve pieces.
use super::{FlattenOptions, ToleranceType};
use crate::core::{
    math::{line_seg_dist, midpoint, Matrix, Point, Rect},
    traits::Real,
};

/// Maximum subdivision depth when flattening a curve, caps output at `2^16` points per curve.
pub const MAX_FLATTEN_DEPTH: u32 = 16;

/// Primitive piece every path segment decomposes into. The start point of the piece is the end
/// point of the previous piece (or the figure start point).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CurvePiece<T>
where
    T: Real,
{
    Line {
        end: Point<T>,
    },
    Quadratic {
        control: Point<T>,
        end: Point<T>,
    },
    Cubic {
        control1: Point<T>,
        control2: Point<T>,
        end: Point<T>,
    },
}

impl<T> CurvePiece<T>
where
    T: Real,
{
    #[inline]
    pub fn end(&self) -> Point<T> {
        match *self {
            CurvePiece::Line { end }
            | CurvePiece::Quadratic { end, .. }
            | CurvePiece::Cubic { end, .. } => end,
        }
    }

    /// Append the flattened points of the piece starting at `start` to `out`, `start` itself is
    /// not appended. At least one point (the end point) is always appended.
    pub fn flatten_into(
        &self,
        start: Point<T>,
        options: &FlattenOptions<T>,
        out: &mut Vec<Point<T>>,
    ) {
        match *self {
            CurvePiece::Line { end } => out.push(end),
            CurvePiece::Quadratic { control, end } => {
                flatten_quadratic(start, control, end, options, out)
            }
            CurvePiece::Cubic {
                control1,
                control2,
                end,
            } => flatten_cubic(start, control1, control2, end, options, out),
        }
    }

    /// Exact axis aligned bounds of the piece starting at `start`.
    pub fn bounds(&self, start: Point<T>) -> Rect<T> {
        match *self {
            CurvePiece::Line { end } => Rect::from_points(start, end),
            CurvePiece::Quadratic { control, end } => quadratic_bounds(start, control, end),
            CurvePiece::Cubic {
                control1,
                control2,
                end,
            } => cubic_bounds(start, control1, control2, end),
        }
    }

    /// Apply an affine transform, curves remain curves of the same degree.
    pub fn transformed(&self, matrix: &Matrix<T>) -> Self {
        match *self {
            CurvePiece::Line { end } => CurvePiece::Line {
                end: matrix.transform_point(end),
            },
            CurvePiece::Quadratic { control, end } => CurvePiece::Quadratic {
                control: matrix.transform_point(control),
                end: matrix.transform_point(end),
            },
            CurvePiece::Cubic {
                control1,
                control2,
                end,
            } => CurvePiece::Cubic {
                control1: matrix.transform_point(control1),
                control2: matrix.transform_point(control2),
                end: matrix.transform_point(end),
            },
        }
    }
}

/// Resolve the absolute tolerance to flatten a curve with the `controls` points given.
///
/// Relative tolerances are scaled by the diagonal of the control point bounding box. Tolerances
/// that are not positive (or NaN) are clamped to the fuzzy epsilon of the numeric type.
fn resolve_tolerance<T>(options: &FlattenOptions<T>, controls: &[Point<T>]) -> T
where
    T: Real,
{
    let tol = match options.tolerance_type {
        ToleranceType::Absolute => options.tolerance,
        ToleranceType::Relative => {
            let extents = controls
                .iter()
                .fold(Rect::empty(), |acc: Rect<T>, &p| acc.union_point(p));
            let diagonal = (extents.width * extents.width + extents.height * extents.height).sqrt();
            options.tolerance * diagonal
        }
    };

    if tol > T::zero() {
        tol
    } else {
        T::fuzzy_epsilon()
    }
}

/// Flatten a cubic bezier by adaptive De Casteljau subdivision, appending the points after `p0`
/// to `out`.
///
/// A piece is considered flat when both inner control points lie within the tolerance of the
/// chord (which bounds the distance of the curve from the chord). Subdivision stops at
/// [MAX_FLATTEN_DEPTH]. Curves with non-finite control points collapse to their end point.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// # use planar_geometry::geometry::*;
/// let mut points = Vec::new();
/// flatten_cubic(
///     point(0.0, 0.0),
///     point(0.0, 10.0),
///     point(10.0, 10.0),
///     point(10.0, 0.0),
///     &FlattenOptions::with_tolerance(0.01, ToleranceType::Absolute),
///     &mut points,
/// );
/// assert!(points.len() > 4);
/// assert_eq!(*points.last().unwrap(), point(10.0, 0.0));
/// ```
pub fn flatten_cubic<T>(
    p0: Point<T>,
    p1: Point<T>,
    p2: Point<T>,
    p3: Point<T>,
    options: &FlattenOptions<T>,
    out: &mut Vec<Point<T>>,
) where
    T: Real,
{
    if !(p0.is_finite() && p1.is_finite() && p2.is_finite() && p3.is_finite()) {
        out.push(p3);
        return;
    }

    let tol = resolve_tolerance(options, &[p0, p1, p2, p3]);
    flatten_cubic_recursive(p0, p1, p2, p3, tol, 0, out);
}

fn flatten_cubic_recursive<T>(
    p0: Point<T>,
    p1: Point<T>,
    p2: Point<T>,
    p3: Point<T>,
    tol: T,
    depth: u32,
    out: &mut Vec<Point<T>>,
) where
    T: Real,
{
    let deviation = num_traits::Float::max(line_seg_dist(p0, p3, p1), line_seg_dist(p0, p3, p2));
    if deviation <= tol {
        out.push(p3);
        return;
    }

    if depth >= MAX_FLATTEN_DEPTH {
        tracing::trace!(?deviation, "cubic flattening reached maximum subdivision depth");
        out.push(p3);
        return;
    }

    let p01 = midpoint(p0, p1);
    let p12 = midpoint(p1, p2);
    let p23 = midpoint(p2, p3);
    let p012 = midpoint(p01, p12);
    let p123 = midpoint(p12, p23);
    let mid = midpoint(p012, p123);

    flatten_cubic_recursive(p0, p01, p012, mid, tol, depth + 1, out);
    flatten_cubic_recursive(mid, p123, p23, p3, tol, depth + 1, out);
}

/// Flatten a quadratic bezier, appending the points after `p0` to `out`.
///
/// Same subdivision and termination rules as [flatten_cubic].
pub fn flatten_quadratic<T>(
    p0: Point<T>,
    p1: Point<T>,
    p2: Point<T>,
    options: &FlattenOptions<T>,
    out: &mut Vec<Point<T>>,
) where
    T: Real,
{
    if !(p0.is_finite() && p1.is_finite() && p2.is_finite()) {
        out.push(p2);
        return;
    }

    let tol = resolve_tolerance(options, &[p0, p1, p2]);
    flatten_quadratic_recursive(p0, p1, p2, tol, 0, out);
}

fn flatten_quadratic_recursive<T>(
    p0: Point<T>,
    p1: Point<T>,
    p2: Point<T>,
    tol: T,
    depth: u32,
    out: &mut Vec<Point<T>>,
) where
    T: Real,
{
    // curve deviates from the chord by at most half the control point distance
    let deviation = line_seg_dist(p0, p2, p1) * T::half();
    if deviation <= tol {
        out.push(p2);
        return;
    }

    if depth >= MAX_FLATTEN_DEPTH {
        tracing::trace!(?deviation, "quadratic flattening reached maximum subdivision depth");
        out.push(p2);
        return;
    }

    let p01 = midpoint(p0, p1);
    let p12 = midpoint(p1, p2);
    let mid = midpoint(p01, p12);

    flatten_quadratic_recursive(p0, p01, mid, tol, depth + 1, out);
    flatten_quadratic_recursive(mid, p12, p2, tol, depth + 1, out);
}

/// Real roots of `a * t^2 + b * t + c = 0` that lie strictly inside (0, 1).
fn unit_interval_roots<T>(a: T, b: T, c: T, scale: T) -> [Option<T>; 2]
where
    T: Real,
{
    let in_range = |t: T| {
        if t > T::zero() && t < T::one() {
            Some(t)
        } else {
            None
        }
    };

    let eps = T::fuzzy_epsilon() * scale;
    if a.abs() <= eps {
        if b.abs() <= eps {
            return [None, None];
        }

        return [in_range(-c / b), None];
    }

    let discriminant = b * b - T::four() * a * c;
    if discriminant < T::zero() {
        return [None, None];
    }

    let sqrt_d = discriminant.sqrt();
    let two_a = T::two() * a;
    [in_range((-b + sqrt_d) / two_a), in_range((-b - sqrt_d) / two_a)]
}

/// Point on the cubic bezier at parametric value `t`.
#[inline]
pub fn cubic_point<T>(p0: Point<T>, p1: Point<T>, p2: Point<T>, p3: Point<T>, t: T) -> Point<T>
where
    T: Real,
{
    let mt = T::one() - t;
    let three = T::cast_f64(3.0);
    p0.scale(mt * mt * mt) + p1.scale(three * mt * mt * t) + p2.scale(three * mt * t * t)
        + p3.scale(t * t * t)
}

/// Point on the quadratic bezier at parametric value `t`.
#[inline]
pub fn quadratic_point<T>(p0: Point<T>, p1: Point<T>, p2: Point<T>, t: T) -> Point<T>
where
    T: Real,
{
    let mt = T::one() - t;
    p0.scale(mt * mt) + p1.scale(T::two() * mt * t) + p2.scale(t * t)
}

/// Exact bounds of a cubic bezier, found from the end points and the roots of the derivative on
/// each axis.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// # use planar_geometry::geometry::*;
/// let bounds = cubic_bounds(point(0.0, 0.0), point(0.0, 4.0), point(4.0, 4.0), point(4.0, 0.0));
/// assert!(bounds.fuzzy_eq(&Rect::new(0.0, 0.0, 4.0, 3.0)));
/// ```
pub fn cubic_bounds<T>(p0: Point<T>, p1: Point<T>, p2: Point<T>, p3: Point<T>) -> Rect<T>
where
    T: Real,
{
    let mut result = Rect::from_points(p0, p3);
    let three = T::cast_f64(3.0);
    let scale = T::one()
        + [p0, p1, p2, p3]
            .iter()
            .fold(T::zero(), |acc, p| num_traits::Float::max(acc, p.x.abs() + p.y.abs()));

    let axis_roots = |c0: T, c1: T, c2: T, c3: T| {
        let a = -c0 + three * c1 - three * c2 + c3;
        let b = T::two() * (c0 - T::two() * c1 + c2);
        let c = c1 - c0;
        unit_interval_roots(a, b, c, scale)
    };

    let x_roots = axis_roots(p0.x, p1.x, p2.x, p3.x);
    let y_roots = axis_roots(p0.y, p1.y, p2.y, p3.y);
    for t in x_roots.iter().chain(y_roots.iter()).flatten() {
        result = result.union_point(cubic_point(p0, p1, p2, p3, *t));
    }

    result
}

/// Exact bounds of a quadratic bezier.
pub fn quadratic_bounds<T>(p0: Point<T>, p1: Point<T>, p2: Point<T>) -> Rect<T>
where
    T: Real,
{
    let mut result = Rect::from_points(p0, p2);
    let axis_root = |c0: T, c1: T, c2: T| {
        let denom = c0 - T::two() * c1 + c2;
        if denom.fuzzy_eq_zero() {
            return None;
        }
        let t = (c0 - c1) / denom;
        if t > T::zero() && t < T::one() {
            Some(t)
        } else {
            None
        }
    };

    for t in [axis_root(p0.x, p1.x, p2.x), axis_root(p0.y, p1.y, p2.y)]
        .iter()
        .flatten()
    {
        result = result.union_point(quadratic_point(p0, p1, p2, *t));
    }

    result
}
