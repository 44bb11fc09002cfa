use super::Point;
use crate::core::traits::Real;

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Point<T>, p1: Point<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Point<T>, p1: Point<T>) -> Point<T>
where
    T: Real,
{
    Point::new((p0.x + p1.x) * T::half(), (p0.y + p1.y) * T::half())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Point<T>, p1: Point<T>, t: T) -> Point<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value of `point` along the line through `p0` and `p1`.
///
/// Assumes `point` lies on the line, the dominant axis of the segment is used to avoid dividing by
/// a near zero extent for vertical and horizontal segments.
#[inline]
pub fn parametric_from_point<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> T
where
    T: Real,
{
    let d = p1 - p0;
    if d.x.abs() >= d.y.abs() {
        (point.x - p0.x) / d.x
    } else {
        (point.y - p0.y) / d.y
    }
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// let cp = line_seg_closest_point(point(0.0, 0.0), point(10.0, 0.0), point(4.0, 3.0));
/// assert!(cp.fuzzy_eq(point(4.0, 0.0)));
/// let cp = line_seg_closest_point(point(0.0, 0.0), point(10.0, 0.0), point(-4.0, 3.0));
/// assert!(cp.fuzzy_eq(point(0.0, 0.0)));
/// ```
#[inline]
pub fn line_seg_closest_point<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> Point<T>
where
    T: Real,
{
    // projection of point onto segment, see: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    p0 + v.scale(c1 / c2)
}

/// Distance from `point` to the line segment from `p0` to `p1`.
#[inline]
pub fn line_seg_dist<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> T
where
    T: Real,
{
    dist_squared(line_seg_closest_point(p0, p1, point), point).sqrt()
}

/// Perpendicular distance from `point` to the infinite line through `p0` and `p1`.
///
/// Falls back to the distance to `p0` when the line is degenerate (`p0 == p1`).
#[inline]
pub fn line_dist<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> T
where
    T: Real,
{
    let d = p1 - p0;
    let len = d.length();
    if len.fuzzy_eq_zero() {
        return (point - p0).length();
    }

    d.perp_dot(point - p0).abs() / len
}

/// Helper function to avoid repeating code for is_left and is_right checks.
#[inline]
fn perp_dot_test_value<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Returns true if `point` is left of the direction vector `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// let p0 = point(1.0, 1.0);
/// let p1 = point(2.0, 2.0);
/// assert!(is_left(p0, p1, point(0.0, 1.0)));
/// assert!(!is_left(p0, p1, point(1.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Point<T>, p1: Point<T>, point: Point<T>) -> bool
where
    T: Real,
{
    perp_dot_test_value(p0, p1, point) > T::zero()
}

/// Signed area of the triangle `p0, p1, p2` times two (positive if counter clockwise).
#[inline]
pub fn double_triangle_area<T>(p0: Point<T>, p1: Point<T>, p2: Point<T>) -> T
where
    T: Real,
{
    perp_dot_test_value(p0, p1, p2)
}
