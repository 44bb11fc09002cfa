mod test_utils;

use planar_geometry::{
    core::math::{point, Rect},
    geometry::{
        FillRule, FlattenOptions, GeometryGroup, GeometrySource, IntersectionDetail, PathFigure,
        PathGeometry, PathSegment, Pen, PenLineCap, ToleranceType,
    },
    GeometryError,
};
use test_utils::{
    ellipse_geometry, overlapping_rect_group, rect_fuzzy_eq_eps, rect_geometry, square_figure,
};

#[test]
fn fill_contains_boundary_tolerance() {
    let r = rect_geometry(0.0, 0.0, 10.0, 10.0);
    assert!(r.fill_contains(point(10.0, 5.0)));
    assert!(r.fill_contains(point(10.0005, 5.0)));
    assert!(!r.fill_contains(point(10.01, 5.0)));

    let loose = FlattenOptions::with_tolerance(0.1, ToleranceType::Absolute);
    assert!(r.fill_contains_opt(point(10.05, 5.0), &loose));
    let relative = FlattenOptions::with_tolerance(0.01, ToleranceType::Relative);
    // 1% of the bounds diagonal is ~0.14
    assert!(r.fill_contains_opt(point(10.1, 5.0), &relative));
}

#[test]
fn fill_contains_non_finite_point() {
    let r = rect_geometry(0.0, 0.0, 10.0, 10.0);
    assert!(!r.fill_contains(point(f64::NAN, 5.0)));
    assert!(!r.fill_contains(point(f64::INFINITY, 5.0)));
    assert!(!r.stroke_contains(&Pen::new(1.0), point(f64::NAN, 0.0)).unwrap());
}

#[test]
fn fill_contains_follows_fill_rule() {
    let even_odd = overlapping_rect_group(FillRule::EvenOdd);
    let non_zero = overlapping_rect_group(FillRule::NonZero);
    let overlap = point(7.5, 10.0);
    assert!(!even_odd.fill_contains(overlap));
    assert!(non_zero.fill_contains(overlap));
    assert!(even_odd.fill_contains(point(2.0, 10.0)));
}

#[test]
fn stroke_contains_respects_stroke_flags() {
    let figure = PathFigure::new(point(0.0, 0.0))
        .segment(PathSegment::line(point(10.0, 0.0)))
        .segment(PathSegment::line(point(10.0, 10.0)).stroked(false))
        .closed(true);
    let path = PathGeometry::from_figures(vec![figure], FillRule::EvenOdd);
    let pen = Pen::new(2.0);
    assert!(path.stroke_contains(&pen, point(5.0, 0.5)).unwrap());
    assert!(!path.stroke_contains(&pen, point(10.5, 5.0)).unwrap());
    // closing edge of a closed figure is stroked
    assert!(path.stroke_contains(&pen, point(5.0, 5.5)).unwrap());
}

#[test]
fn stroke_contains_invalid_pen() {
    let r = rect_geometry(0.0, 0.0, 10.0, 10.0);
    let err = r
        .stroke_contains(&Pen::new(f64::NAN), point(0.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, GeometryError::InvalidArgument(_)));
    let mut pen = Pen::new(1.0);
    pen.miter_limit = 0.5;
    assert!(r.widened_path_geometry(&pen).is_err());
}

#[test]
fn containment_detail() {
    let big = ellipse_geometry(0.0, 0.0, 50.0, 50.0);
    let small = rect_geometry(-10.0, -10.0, 20.0, 20.0);
    let crossing = rect_geometry(40.0, -5.0, 20.0, 10.0);
    let far = rect_geometry(100.0, 100.0, 5.0, 5.0);

    assert_eq!(
        big.fill_contains_with_detail(&small),
        IntersectionDetail::FullyContains
    );
    assert!(big.fill_contains_geometry(&small));
    assert_eq!(
        small.fill_contains_with_detail(&big),
        IntersectionDetail::FullyInside
    );
    assert_eq!(
        big.fill_contains_with_detail(&crossing),
        IntersectionDetail::Intersects
    );
    assert!(!big.fill_contains_geometry(&crossing));
    assert_eq!(
        big.fill_contains_with_detail(&far),
        IntersectionDetail::Empty
    );

    let coarse = FlattenOptions::with_tolerance(0.5, ToleranceType::Absolute);
    assert_eq!(
        big.fill_contains_with_detail_opt(&small, &coarse),
        IntersectionDetail::FullyContains
    );
}

#[test]
fn render_bounds_inflates_by_half_thickness() {
    let r = rect_geometry(0.0, 0.0, 10.0, 10.0);
    let mut pen = Pen::new(4.0);
    pen.start_line_cap = PenLineCap::Round;
    assert!(rect_fuzzy_eq_eps(
        &r.render_bounds(Some(&pen)),
        &Rect::new(-2.0, -2.0, 14.0, 14.0),
        1e-9
    ));
    assert!(rect_fuzzy_eq_eps(&r.render_bounds(None), &r.bounds(), 1e-9));
    assert!(rect_fuzzy_eq_eps(
        &r.render_bounds(Some(&Pen::new(0.0))),
        &r.bounds(),
        1e-9
    ));
    assert!(rect_fuzzy_eq_eps(
        &r.render_bounds(Some(&Pen::new(f64::INFINITY))),
        &r.bounds(),
        1e-9
    ));

    let empty = GeometryGroup::<f64>::new();
    assert!(empty.render_bounds(Some(&pen)).is_empty());
}

#[test]
fn widened_open_line_hit_testing() {
    let mut path = PathGeometry::new();
    path.add_figure(PathFigure::new(point(0.0, 0.0)).segment(PathSegment::line(point(20.0, 0.0))))
        .unwrap();
    let mut pen = Pen::new(2.0);
    pen.start_line_cap = PenLineCap::Square;
    pen.end_line_cap = PenLineCap::Round;
    let widened = path.widened_path_geometry(&pen).unwrap();

    assert!(widened.fill_contains(point(-0.9, 0.0)));
    assert!(!widened.fill_contains(point(-1.1, 0.0)));
    assert!(widened.fill_contains(point(20.7, 0.0)));
    assert!(!widened.fill_contains(point(20.9, 0.9)));
    let expected = 20.0 * 2.0 + 2.0 + std::f64::consts::PI / 2.0;
    assert!((widened.area() - expected).abs() < 0.01, "{}", widened.area());
}

#[test]
fn unfilled_figures_are_stroke_only() {
    let mut path = PathGeometry::new();
    path.add_figure(square_figure(0.0, 0.0, 10.0).filled(false))
        .unwrap();
    assert!(!path.fill_contains(point(5.0, 5.0)));
    assert!(path
        .stroke_contains(&Pen::new(1.0), point(0.2, 5.0))
        .unwrap());
}
