//! Conversion of stroked contours into the filled region covered by the stroke.
//!
//! Every stroked edge contributes a rectangle of the pen thickness, every join and cap contributes
//! a small polygon, all pieces are counter clockwise and the union is resolved with the non zero
//! fill rule.
use super::boolean::{absolute_pos_eps, resolve_outline, FillRegion};
use crate::{
    core::{
        math::Point,
        traits::Real,
    },
    geometry::{Contour, FillRule, FlattenOptions, Pen, PenLineCap, PenLineJoin, ToleranceType},
};

/// Closed polygon approximating a circle within the flatten tolerance.
pub fn circle_polygon<T>(center: Point<T>, radius: T, options: &FlattenOptions<T>) -> Contour<T>
where
    T: Real,
{
    let tol = match options.tolerance_type {
        ToleranceType::Absolute => options.tolerance,
        ToleranceType::Relative => options.tolerance * radius * T::two(),
    };

    // chord sagitta radius * (1 - cos(step / 2)) is kept within the tolerance
    let ratio = num_traits::Float::min(tol / radius, T::one());
    let step = if ratio > T::zero() {
        T::two() * (T::one() - ratio).acos()
    } else {
        T::zero()
    };
    let count = if step > T::zero() {
        (T::tau() / step).ceil().as_f64().clamp(8.0, 1024.0) as usize
    } else {
        1024
    };

    Contour::from_points((0..count).map(|i| {
        let angle = T::tau() * T::cast_f64(i as f64) / T::cast_f64(count as f64);
        let (s, c) = angle.sin_cos();
        Point::new(center.x + radius * c, center.y + radius * s)
    }))
}

fn ccw_piece<T>(points: Vec<Point<T>>) -> Contour<T>
where
    T: Real,
{
    let mut c = Contour::from_points(points);
    if c.signed_area() < T::zero() {
        c.vertexes.reverse();
    }
    c
}

fn edge_piece<T>(p0: Point<T>, p1: Point<T>, half_width: T) -> Option<Contour<T>>
where
    T: Real,
{
    let dir = p1 - p0;
    let len = dir.length();
    if len.fuzzy_eq_zero() {
        return None;
    }

    let n = dir.perp().scale(half_width / len);
    Some(ccw_piece(vec![p0 - n, p1 - n, p1 + n, p0 + n]))
}

fn join_piece<T>(
    prev: Point<T>,
    vertex: Point<T>,
    next: Point<T>,
    pen: &Pen<T>,
    options: &FlattenOptions<T>,
) -> Option<Contour<T>>
where
    T: Real,
{
    let h = pen.half_thickness();
    let d0 = (vertex - prev).normalize();
    let d1 = (next - vertex).normalize();
    if !d0.is_finite() || !d1.is_finite() {
        return None;
    }

    let cross = d0.perp_dot(d1);
    let dot = d0.dot(d1);
    if cross.fuzzy_eq_zero() && dot > T::zero() {
        // straight continuation
        return None;
    }

    // outer side of the turn
    let side = if cross > T::zero() { -T::one() } else { T::one() };
    let o0 = d0.perp().scale(side);
    let o1 = d1.perp().scale(side);
    let a = vertex + o0.scale(h);
    let b = vertex + o1.scale(h);
    let bevel = || {
        if cross.fuzzy_eq_zero() {
            None
        } else {
            Some(ccw_piece(vec![vertex, a, b]))
        }
    };

    match pen.line_join {
        PenLineJoin::Bevel => bevel(),
        PenLineJoin::Miter => {
            let m = (o0 + o1).normalize();
            let cos_half = m.dot(o0);
            if !(cos_half > T::zero()) || T::one() / cos_half > pen.miter_limit {
                return bevel();
            }
            let tip = vertex + m.scale(h / cos_half);
            Some(ccw_piece(vec![vertex, a, tip, b]))
        }
        PenLineJoin::Round => {
            let tol = match options.tolerance_type {
                ToleranceType::Absolute => options.tolerance,
                ToleranceType::Relative => options.tolerance * pen.thickness,
            };
            // gap between bevel and arc is h * (1 - cos(turn / 2))
            let cos_half_turn = ((T::one() + dot) * T::half()).sqrt();
            if h * (T::one() - cos_half_turn) <= tol {
                bevel()
            } else {
                Some(circle_polygon(vertex, h, options))
            }
        }
    }
}

fn cap_piece<T>(
    end: Point<T>,
    outward: Point<T>,
    cap: PenLineCap,
    half_width: T,
    options: &FlattenOptions<T>,
) -> Option<Contour<T>>
where
    T: Real,
{
    match cap {
        PenLineCap::Flat => None,
        PenLineCap::Round => Some(circle_polygon(end, half_width, options)),
        PenLineCap::Square => {
            let d = outward.scale(half_width);
            let n = outward.perp().scale(half_width);
            Some(ccw_piece(vec![end - n, end + d - n, end + d + n, end + n]))
        }
    }
}

/// Stroke polygons (before union) for a single contour.
fn contour_pieces<T>(
    contour: &Contour<T>,
    pen: &Pen<T>,
    options: &FlattenOptions<T>,
    out: &mut Vec<Contour<T>>,
) where
    T: Real,
{
    let h = pen.half_thickness();
    let mut points: Vec<Point<T>> = Vec::with_capacity(contour.vertex_count());
    let mut stroked: Vec<bool> = Vec::with_capacity(contour.vertex_count());
    for v in contour.vertexes.iter() {
        if points.last().map_or(false, |p| p.fuzzy_eq(v.pos)) {
            let last = stroked.len() - 1;
            stroked[last] = stroked[last] || v.is_stroked;
            continue;
        }
        points.push(v.pos);
        stroked.push(v.is_stroked);
    }

    let is_closed = contour.is_closed && points.len() > 2;
    if is_closed && points[0].fuzzy_eq(points[points.len() - 1]) {
        points.pop();
        stroked.pop();
    }

    let n = points.len();
    if n == 0 {
        return;
    }

    if n == 1 {
        // zero length figure only draws caps, a square cap has no direction so it is axis aligned
        let outward = Point::new(T::one(), T::zero());
        out.extend(cap_piece(points[0], outward, pen.start_line_cap, h, options));
        return;
    }

    let edge_count = if is_closed { n } else { n - 1 };
    let edge_stroked = |i: usize| stroked[i % n];
    for i in 0..edge_count {
        if edge_stroked(i) {
            out.extend(edge_piece(points[i], points[(i + 1) % n], h));
        }
    }

    // joins between consecutive stroked edges
    let join_count = if is_closed { n } else { n - 2 };
    for k in 0..join_count {
        let i = if is_closed { k } else { k + 1 };
        let prev_edge = (i + n - 1) % n;
        if edge_stroked(prev_edge) && edge_stroked(i) {
            out.extend(join_piece(
                points[prev_edge],
                points[i],
                points[(i + 1) % n],
                pen,
                options,
            ));
        }
    }

    if !is_closed {
        if edge_stroked(0) {
            let outward = (points[0] - points[1]).normalize();
            out.extend(cap_piece(points[0], outward, pen.start_line_cap, h, options));
        }
        if edge_stroked(n - 2) {
            let outward = (points[n - 1] - points[n - 2]).normalize();
            out.extend(cap_piece(points[n - 1], outward, pen.end_line_cap, h, options));
        }
    }
}

/// Widen the stroked edges of `contours` with `pen`, returning the fill rule resolved outline of
/// the region covered by the stroke.
///
/// `pos_equal_eps` is a relative epsilon (see [absolute_pos_eps]) used when resolving the union of
/// the stroke pieces.
pub fn widen_contours<T>(
    contours: &[Contour<T>],
    pen: &Pen<T>,
    options: &FlattenOptions<T>,
    pos_equal_eps: T,
) -> Vec<Contour<T>>
where
    T: Real,
{
    if !(pen.thickness > T::zero()) {
        return Vec::new();
    }

    let mut pieces = Vec::new();
    for c in contours.iter().filter(|c| c.is_finite()) {
        contour_pieces(c, pen, options, &mut pieces);
    }

    tracing::trace!(piece_count = pieces.len(), "widen stroke pieces");
    let region = FillRegion::new(&pieces, FillRule::NonZero);
    let eps = absolute_pos_eps(&[region], pos_equal_eps);
    resolve_outline(region, eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::point;

    fn area(contours: &[Contour<f64>]) -> f64 {
        contours.iter().map(|c| c.signed_area()).sum()
    }

    fn square(x: f64, y: f64, size: f64) -> Contour<f64> {
        Contour::from_points([
            point(x, y),
            point(x + size, y),
            point(x + size, y + size),
            point(x, y + size),
        ])
    }

    #[test]
    fn closed_square_miter() {
        let widened = widen_contours(
            &[square(50.0, 50.0, 70.0)],
            &Pen::new(10.0),
            &FlattenOptions::new(),
            1e-9,
        );
        assert_eq!(widened.len(), 2);
        assert!((area(&widened) - 2800.0).abs() < 1e-6);
    }

    #[test]
    fn closed_square_bevel() {
        let mut pen = Pen::new(10.0);
        pen.line_join = PenLineJoin::Bevel;
        let widened = widen_contours(
            &[square(50.0, 50.0, 70.0)],
            &pen,
            &FlattenOptions::new(),
            1e-9,
        );
        // each corner loses a right triangle of legs 5
        assert!((area(&widened) - (2800.0 - 4.0 * 12.5)).abs() < 1e-6);
    }

    #[test]
    fn open_line_caps() {
        let mut line = Contour::new(false, true);
        line.add(point(0.0, 0.0), true);
        line.add(point(10.0, 0.0), false);

        let pen = Pen::new(2.0);
        let flat = widen_contours(&[line.clone()], &pen, &FlattenOptions::new(), 1e-9);
        assert!((area(&flat) - 20.0).abs() < 1e-6);

        let mut pen = Pen::new(2.0);
        pen.start_line_cap = PenLineCap::Square;
        pen.end_line_cap = PenLineCap::Square;
        let square_caps = widen_contours(&[line.clone()], &pen, &FlattenOptions::new(), 1e-9);
        assert!((area(&square_caps) - 24.0).abs() < 1e-6);

        pen.end_line_cap = PenLineCap::Round;
        let round_end = widen_contours(&[line], &pen, &FlattenOptions::new(), 1e-9);
        let expected = 22.0 + std::f64::consts::PI * 0.5;
        assert!((area(&round_end) - expected).abs() < 0.01);
    }

    #[test]
    fn unstroked_edges_skipped() {
        let mut c = square(0.0, 0.0, 10.0);
        c.vertexes[0].is_stroked = false;
        c.vertexes[2].is_stroked = false;
        let mut pen = Pen::new(2.0);
        pen.line_join = PenLineJoin::Bevel;
        let widened = widen_contours(&[c], &pen, &FlattenOptions::new(), 1e-9);
        // two disjoint vertical bars
        assert_eq!(widened.len(), 2);
        assert!((area(&widened) - 40.0).abs() < 1e-6);
    }

    #[test]
    fn zero_thickness_is_empty() {
        let widened = widen_contours(
            &[square(0.0, 0.0, 10.0)],
            &Pen::new(0.0),
            &FlattenOptions::new(),
            1e-9,
        );
        assert!(widened.is_empty());
    }
}
