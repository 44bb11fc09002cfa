use planar_geometry::{
    core::math::{point, Rect},
    geometry::*,
};

fn main() {
    combine_modes();
    curved_operands();
    nested_combination();
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> RectangleGeometry {
    RectangleGeometry::new(Rect::new(x, y, w, h))
}

fn combine_modes() {
    println!("Combining overlapping rectangles...");

    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);

    let expected = [
        (GeometryCombineMode::Union, 175.0),
        (GeometryCombineMode::Intersect, 25.0),
        (GeometryCombineMode::Xor, 150.0),
        (GeometryCombineMode::Exclude, 75.0),
    ];

    for (mode, area) in expected {
        let result = a.combine_with(&b, mode);
        assert!(
            (result.area() - area).abs() < 1e-6,
            "{mode:?} area should be {area}"
        );
        println!(
            "{mode:?}: area = {:.2}, figures = {}, markup = {result}",
            result.area(),
            result.figure_count()
        );
    }

    // Disjoint operands
    let far = rect(50.0, 50.0, 10.0, 10.0);
    assert!(a.combine_with(&far, GeometryCombineMode::Intersect).is_empty());
    assert_eq!(
        a.combine_with(&far, GeometryCombineMode::Union).figure_count(),
        2
    );

    println!("Combine modes completed successfully!\n");
}

fn curved_operands() {
    println!("Combining curved operands...");

    let circle: EllipseGeometry = EllipseGeometry::new(point(0.0, 0.0), 10.0, 10.0);
    let hole: EllipseGeometry = EllipseGeometry::new(point(0.0, 0.0), 5.0, 5.0);
    let ring = circle.combine_with(&hole, GeometryCombineMode::Exclude);
    let expected = std::f64::consts::PI * (100.0 - 25.0);
    assert!((ring.area() - expected).abs() < 0.1);
    assert!(!ring.fill_contains(point(0.0, 0.0)));
    assert!(ring.fill_contains(point(7.5, 0.0)));
    println!(
        "Ring: area = {:.4} (exact {:.4}), loops = {}",
        ring.area(),
        expected,
        ring.figure_count()
    );

    println!("Curved operands completed successfully!\n");
}

fn nested_combination() {
    println!("Lazily combined geometries...");

    let bars = CombinedGeometry::new(
        GeometryCombineMode::Union,
        rect(0.0, 0.0, 10.0, 30.0).into(),
        rect(20.0, 0.0, 10.0, 30.0).into(),
    );
    let mut cut = CombinedGeometry::new(
        GeometryCombineMode::Exclude,
        bars.into(),
        rect(-5.0, 10.0, 40.0, 10.0).into(),
    );
    assert!((cut.area() - 400.0).abs() < 1e-6);
    println!("Two bars with a band removed: area = {:.2}", cut.area());

    cut.set_combine_mode(GeometryCombineMode::Intersect).unwrap();
    assert!((cut.area() - 200.0).abs() < 1e-6);
    println!("Only the band: area = {:.2}", cut.area());

    println!("Nested combination completed successfully!\n");
}
