use planar_geometry::{
    core::math::{point, Point, Rect, Size},
    figure_closed,
    geometry::{
        CombinedGeometry, EllipseGeometry, FillRule, Geometry, GeometryCombineMode, GeometryGroup,
        PathFigure, PathGeometry, PathSegment, RectangleGeometry, SweepDirection,
    },
};

pub fn rect_geometry(x: f64, y: f64, width: f64, height: f64) -> Geometry<f64> {
    RectangleGeometry::new(Rect::new(x, y, width, height)).into()
}

pub fn ellipse_geometry(cx: f64, cy: f64, rx: f64, ry: f64) -> Geometry<f64> {
    EllipseGeometry::new(point(cx, cy), rx, ry).into()
}

/// Closed axis aligned square figure (counter clockwise in y down coordinates).
pub fn square_figure(x: f64, y: f64, size: f64) -> PathFigure<f64> {
    figure_closed![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
}

/// Circle made of two semicircular arc segments.
pub fn two_arc_circle(center: Point<f64>, radius: f64) -> PathGeometry<f64> {
    let left = point(center.x - radius, center.y);
    let right = point(center.x + radius, center.y);
    let size = Size::new(radius, radius);
    let figure = PathFigure::new(left)
        .segment(PathSegment::arc(
            right,
            size,
            0.0,
            false,
            SweepDirection::Clockwise,
        ))
        .segment(PathSegment::arc(
            left,
            size,
            0.0,
            false,
            SweepDirection::Clockwise,
        ))
        .closed(true);

    PathGeometry::from_figures(vec![figure], FillRule::EvenOdd)
}

/// Path with a mix of curve kinds: a rounded tab shape.
pub fn mixed_curve_path() -> PathGeometry<f64> {
    let figure = PathFigure::new(point(0.0, 0.0))
        .segment(PathSegment::line(point(40.0, 0.0)))
        .segment(PathSegment::quadratic_bezier(
            point(60.0, 0.0),
            point(60.0, 20.0),
        ))
        .segment(PathSegment::bezier(
            point(60.0, 40.0),
            point(40.0, 50.0),
            point(20.0, 50.0),
        ))
        .segment(PathSegment::arc(
            point(0.0, 30.0),
            Size::new(20.0, 20.0),
            0.0,
            false,
            SweepDirection::Clockwise,
        ))
        .closed(true);

    PathGeometry::from_figures(vec![figure], FillRule::EvenOdd)
}

/// Group of two overlapping rectangles with `fill_rule`.
pub fn overlapping_rect_group(fill_rule: FillRule) -> GeometryGroup<f64> {
    GeometryGroup::with_children(
        vec![
            rect_geometry(0.0, 0.0, 10.0, 20.0),
            rect_geometry(5.0, 0.0, 10.0, 20.0),
        ],
        fill_rule,
    )
}

pub fn combined(
    mode: GeometryCombineMode,
    geometry1: Geometry<f64>,
    geometry2: Geometry<f64>,
) -> CombinedGeometry<f64> {
    CombinedGeometry::new(mode, geometry1, geometry2)
}

/// Set of assorted geometries used for property tests.
pub fn assorted_geometries() -> Vec<(&'static str, Geometry<f64>)> {
    let mut rotated = EllipseGeometry::new(point(0.0, 0.0), 30.0, 10.0);
    rotated
        .set_transform(planar_geometry::core::math::Matrix::rotation(30.0))
        .unwrap();

    vec![
        ("rectangle", rect_geometry(10.0, 10.0, 100.0, 50.0)),
        (
            "rounded rectangle",
            RectangleGeometry::with_radii(Rect::new(0.0, 0.0, 80.0, 60.0), 15.0, 10.0).into(),
        ),
        ("circle", ellipse_geometry(50.0, 50.0, 40.0, 40.0)),
        ("rotated ellipse", rotated.into()),
        ("two arc circle", two_arc_circle(point(0.0, 0.0), 25.0).into()),
        ("mixed curves", mixed_curve_path().into()),
        ("even odd group", overlapping_rect_group(FillRule::EvenOdd).into()),
        ("non zero group", overlapping_rect_group(FillRule::NonZero).into()),
        (
            "ring",
            combined(
                GeometryCombineMode::Exclude,
                ellipse_geometry(0.0, 0.0, 50.0, 50.0),
                ellipse_geometry(0.0, 0.0, 25.0, 25.0),
            )
            .into(),
        ),
        (
            "union",
            combined(
                GeometryCombineMode::Union,
                rect_geometry(0.0, 0.0, 40.0, 40.0),
                ellipse_geometry(40.0, 40.0, 20.0, 20.0),
            )
            .into(),
        ),
    ]
}
