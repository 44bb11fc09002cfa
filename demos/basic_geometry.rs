use planar_geometry::{
    core::math::{point, Matrix, Rect},
    figure_closed,
    geometry::*,
};

fn main() {
    building_paths();
    primitive_shapes();
    transforms_and_freezing();
}

fn building_paths() {
    println!("Building path geometries...");

    // Square built with the macro, a triangle from segments
    let square = figure_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let triangle = PathFigure::new(point(20.0, 0.0))
        .segment(PathSegment::line(point(30.0, 0.0)))
        .segment(PathSegment::line(point(25.0, 8.0)))
        .closed(true);

    let mut path: PathGeometry = PathGeometry::from_figures(vec![square, triangle], FillRule::EvenOdd);
    assert_eq!(path.figure_count(), 2);
    assert!((path.area() - 140.0).abs() < 1e-9);
    println!("Square and triangle: area = {:.2}", path.area());

    // Same shape from markup
    let parsed: PathGeometry = "M0,0 L10,0 10,10 0,10 z M20,0 L30,0 25,8 z".parse().unwrap();
    assert!((parsed.area() - path.area()).abs() < 1e-9);
    println!("Parsed markup round trips as: {parsed}");

    // Curves
    path.add_figure(
        PathFigure::new(point(0.0, 20.0))
            .segment(PathSegment::bezier(
                point(0.0, 30.0),
                point(10.0, 30.0),
                point(10.0, 20.0),
            ))
            .closed(true),
    )
    .unwrap();
    assert!(path.may_have_curves());
    println!(
        "With a bezier figure: area = {:.3}, bounds = {:?}",
        path.area(),
        path.bounds()
    );

    println!("Path building completed successfully!\n");
}

fn primitive_shapes() {
    println!("Primitive shapes...");

    let ellipse: EllipseGeometry = EllipseGeometry::new(point(0.0, 0.0), 20.0, 10.0);
    let exact = std::f64::consts::PI * 200.0;
    assert!((ellipse.area() - exact).abs() < 1e-9);
    let options = FlattenOptions::with_tolerance(0.01, ToleranceType::Absolute);
    let flattened = ellipse.area_opt(&options);
    println!(
        "Ellipse: exact area = {:.4}, flattened area = {:.4}",
        ellipse.area(),
        flattened
    );

    let rounded: RectangleGeometry = RectangleGeometry::with_radii(Rect::new(0.0, 0.0, 40.0, 20.0), 5.0, 5.0);
    println!("Rounded rectangle: area = {:.4}", rounded.area());
    assert!(rounded.area() < 800.0);

    let line: LineGeometry = LineGeometry::new(point(0.0, 0.0), point(10.0, 10.0));
    assert_eq!(line.area(), 0.0);
    println!("Line bounds = {:?}", line.bounds());

    println!("Primitive shapes completed successfully!\n");
}

fn transforms_and_freezing() {
    println!("Transforms and freezing...");

    let mut rect: RectangleGeometry = RectangleGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    rect.set_transform(Matrix::scaling(2.0, 3.0)).unwrap();
    assert!((rect.area() - 600.0).abs() < 1e-9);
    println!("Scaled rectangle: area = {:.2}", rect.area());

    rect.freeze();
    match rect.set_transform(Matrix::identity()) {
        Err(e) => println!("Mutating a frozen geometry fails: {e}"),
        Ok(()) => unreachable!("frozen geometry accepted a mutation"),
    }

    println!("Transforms and freezing completed successfully!\n");
}
