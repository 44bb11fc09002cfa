use super::{base_math::parametric_from_point, Point};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// No intersect, segments are parallel and not collinear or are collinear and disjoint.
    NoIntersect,
    /// There is a true intersect between the line segments.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Segments overlap each other (are collinear) by some amount.
    Overlapping {
        /// Parametric value for start of coincidence along first segment.
        seg1_t0: T,
        /// Parametric value for end of coincidence along first segment.
        seg1_t1: T,
        /// Parametric value for start of coincidence along second segment.
        seg2_t0: T,
        /// Parametric value for end of coincidence along second segment.
        seg2_t1: T,
    },
    /// There is an intersect between the lines but one or both of the segments must be extended.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

/// Finds the intersects between two lines segments `v1->v2` and `u1->u2`.
///
/// Parametric values use the segment equation `P(t) = p0 + t * (p1 - p0)`. `epsilon` is a
/// distance: segments whose directions deviate by less than `epsilon` over their length are
/// treated as parallel, and parametric range checks are done at the length scale of each segment.
///
/// Degenerate (point) segments are handled: a point lying on the other segment is reported as a
/// `TrueIntersect` with a parametric value of 0 on the point segment.
///
/// For `Overlapping` the parametric values on the second segment are ordered (`seg2_t0 <=
/// seg2_t1`) and the first segment values map the same two positions.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// let v1 = point(0.0, 0.0);
/// let v2 = point(1.0, 0.0);
/// let u1 = point(0.5, -1.0);
/// let u2 = point(0.5, 1.0);
/// if let LineLineIntr::TrueIntersect { seg1_t, seg2_t } = line_line_intr(v1, v2, u1, u2, 1e-5) {
///     assert_eq!(seg1_t, 0.5);
///     assert_eq!(seg2_t, 0.5);
/// } else {
///     unreachable!("expected true intersection between line segments");
/// }
/// ```
pub fn line_line_intr<T>(
    v1: Point<T>,
    v2: Point<T>,
    u1: Point<T>,
    u2: Point<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    // segments are processed in parametric form using perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    use LineLineIntr::*;

    let eps = epsilon;
    let v = v2 - v1;
    let u = u2 - u1;
    let w = v1 - u1;
    let v_pdot_u = v.perp_dot(u);

    let seg1_length = v.length();
    let seg2_length = u.length();
    let max_length = num_traits::Float::max(seg1_length, seg2_length);

    if v_pdot_u.abs() > eps * max_length {
        // segments not parallel or collinear
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps)
            || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps)
        {
            return FalseIntersect { seg1_t, seg2_t };
        }

        return TrueIntersect { seg1_t, seg2_t };
    }

    let v_is_point = seg1_length.fuzzy_eq_zero_eps(eps);
    let u_is_point = seg2_length.fuzzy_eq_zero_eps(eps);

    if v_is_point && u_is_point {
        if v1.fuzzy_eq_eps(u1, eps) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }

        return NoIntersect;
    }

    // parallel, check collinear by distance from each line to the other's start point
    let collinear = if v_is_point {
        (u.perp_dot(w) / seg2_length).fuzzy_eq_zero_eps(eps)
    } else {
        (v.perp_dot(w) / seg1_length).fuzzy_eq_zero_eps(eps)
    };

    if !collinear {
        return NoIntersect;
    }

    if v_is_point {
        let seg2_t = parametric_from_point(u1, u2, v1);
        if (seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t,
            };
        }

        return NoIntersect;
    }

    if u_is_point {
        let seg1_t = parametric_from_point(v1, v2, u1);
        if (seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps) {
            return TrueIntersect {
                seg1_t,
                seg2_t: T::zero(),
            };
        }

        return NoIntersect;
    }

    // collinear, neither segment is a point: project the first segment's end points onto the second
    let mut seg2_t0 = parametric_from_point(u1, u2, v1);
    let mut seg2_t1 = parametric_from_point(u1, u2, v2);
    if seg2_t0 > seg2_t1 {
        std::mem::swap(&mut seg2_t0, &mut seg2_t1);
    }

    // threshold checks make touching segments "sticky" so they are reported as intersecting
    if !(seg2_t0 * seg2_length).fuzzy_lt_eps(seg2_length, eps)
        || !(seg2_t1 * seg2_length).fuzzy_gt_eps(T::zero(), eps)
    {
        return NoIntersect;
    }

    seg2_t0 = num_traits::Float::max(seg2_t0, T::zero());
    seg2_t1 = num_traits::Float::min(seg2_t1, T::one());

    let start = u1 + u.scale(seg2_t0);
    let end = u1 + u.scale(seg2_t1);
    let seg1_t0 = parametric_from_point(v1, v2, start);
    let seg1_t1 = parametric_from_point(v1, v2, end);

    if ((seg2_t1 - seg2_t0) * seg2_length).fuzzy_eq_zero_eps(eps) {
        // segments line up end to end
        return TrueIntersect {
            seg1_t: seg1_t0,
            seg2_t: seg2_t0,
        };
    }

    Overlapping {
        seg1_t0,
        seg1_t1,
        seg2_t0,
        seg2_t1,
    }
}
