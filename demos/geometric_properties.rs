use planar_geometry::{
    core::math::{point, Rect},
    geometry::*,
};

fn main() {
    area_and_bounds();
    fill_rules();
    widening();
}

fn area_and_bounds() {
    println!("Area and bounds...");

    let path: PathGeometry = "M0,0 L40,0 Q60,0 60,20 C60,40 40,50 20,50 L0,50 z"
        .parse()
        .unwrap();
    println!(
        "Curved tab: area = {:.4}, bounds = {:?}",
        path.area(),
        path.bounds()
    );

    // Coarser tolerance trades accuracy for fewer points
    for tolerance in [1.0, 0.1, 0.001] {
        let options = FlattenOptions::with_tolerance(tolerance, ToleranceType::Absolute);
        let points: usize = path
            .flatten_contours_opt(&options)
            .iter()
            .map(|c| c.vertex_count())
            .sum();
        println!(
            "  tolerance {tolerance}: area = {:.4}, flattened points = {points}",
            path.area_opt(&options)
        );
    }

    let empty = PathGeometry::<f64>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.area(), 0.0);

    println!("Area and bounds completed successfully!\n");
}

fn fill_rules() {
    println!("Fill rules...");

    let mut group: GeometryGroup = GeometryGroup::new();
    group
        .add_child(RectangleGeometry::new(Rect::new(0.0, 0.0, 20.0, 20.0)))
        .unwrap();
    group
        .add_child(RectangleGeometry::new(Rect::new(5.0, 5.0, 10.0, 10.0)))
        .unwrap();

    assert!((group.area() - 300.0).abs() < 1e-6);
    assert!(!group.fill_contains(point(10.0, 10.0)));
    println!("EvenOdd nested squares: area = {:.2}", group.area());

    group.set_fill_rule(FillRule::NonZero).unwrap();
    assert!((group.area() - 400.0).abs() < 1e-6);
    assert!(group.fill_contains(point(10.0, 10.0)));
    println!("NonZero nested squares: area = {:.2}", group.area());

    println!("Fill rules completed successfully!\n");
}

fn widening() {
    println!("Widening...");

    let open: PathGeometry = "M0,0 L100,0".parse().unwrap();
    let pen = Pen::new(10.0);
    let widened = open.widened_path_geometry(&pen).unwrap();
    assert!((widened.area() - 1000.0).abs() < 1e-6);
    println!(
        "Widened line: area = {:.2}, render bounds = {:?}",
        widened.area(),
        open.render_bounds(Some(&pen))
    );

    let mut round = Pen::new(10.0);
    round.start_line_cap = PenLineCap::Round;
    round.end_line_cap = PenLineCap::Round;
    let capped = open.widened_path_geometry(&round).unwrap();
    println!("With round caps: area = {:.2}", capped.area());
    assert!(capped.area() > widened.area());

    println!("Widening completed successfully!\n");
}
