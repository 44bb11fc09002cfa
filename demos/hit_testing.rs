use planar_geometry::{
    core::math::{point, Rect},
    geometry::*,
};

fn main() {
    point_hit_testing();
    stroke_hit_testing();
    geometry_containment();
}

fn point_hit_testing() {
    println!("Point hit testing...");

    let donut: PathGeometry = "M0,0 L30,0 30,30 0,30 z M10,10 L20,10 20,20 10,20 z"
        .parse()
        .unwrap();
    for (p, inside) in [
        (point(5.0, 5.0), true),
        (point(15.0, 15.0), false),
        (point(40.0, 15.0), false),
        (point(0.0, 15.0), true),
    ] {
        assert_eq!(donut.fill_contains(p), inside);
        println!("  {p:?} inside = {inside}");
    }

    assert!(!donut.fill_contains(point(f64::NAN, 0.0)));

    println!("Point hit testing completed successfully!\n");
}

fn stroke_hit_testing() {
    println!("Stroke hit testing...");

    let circle: EllipseGeometry = EllipseGeometry::new(point(0.0, 0.0), 10.0, 10.0);
    let pen = Pen::new(2.0);
    assert!(circle.stroke_contains(&pen, point(10.5, 0.0)).unwrap());
    assert!(!circle.stroke_contains(&pen, point(0.0, 0.0)).unwrap());
    assert!(circle.stroke_contains(&Pen::new(-1.0), point(0.0, 0.0)).is_err());

    println!("Stroke hit testing completed successfully!\n");
}

fn geometry_containment() {
    println!("Geometry containment...");

    let outer: RectangleGeometry = RectangleGeometry::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let cases = [
        (Rect::new(10.0, 10.0, 20.0, 20.0), IntersectionDetail::FullyContains),
        (Rect::new(90.0, 90.0, 20.0, 20.0), IntersectionDetail::Intersects),
        (Rect::new(200.0, 0.0, 20.0, 20.0), IntersectionDetail::Empty),
        (Rect::new(-10.0, -10.0, 200.0, 200.0), IntersectionDetail::FullyInside),
    ];

    for (rect, expected) in cases {
        let other = RectangleGeometry::new(rect);
        let detail = outer.fill_contains_with_detail(&other);
        assert_eq!(detail, expected);
        println!("  {rect:?}: {detail:?}");
    }

    println!("Geometry containment completed successfully!\n");
}
