mod test_utils;

use std::{sync::Arc, thread};

use planar_geometry::{
    core::math::{point, Matrix, Rect},
    geometry::{
        CombinedGeometry, EllipseGeometry, FillRule, Geometry, GeometryCombineMode, GeometryGroup,
        GeometrySource, LineGeometry, PathGeometry,
    },
    GeometryError,
};
use test_utils::{assorted_geometries, ellipse_geometry, rect_geometry, square_figure};

#[test]
fn frozen_geometries_reject_mutation() {
    let mut path = PathGeometry::new();
    path.add_figure(square_figure(0.0, 0.0, 10.0)).unwrap();
    path.freeze();
    assert_eq!(path.set_fill_rule(FillRule::NonZero), Err(GeometryError::Frozen));
    assert_eq!(
        path.set_transform(Matrix::identity()),
        Err(GeometryError::Frozen)
    );
    assert_eq!(path.remove_figure(0), Err(GeometryError::Frozen));
    assert_eq!(
        path.add_geometry(&rect_geometry(0.0, 0.0, 1.0, 1.0)),
        Err(GeometryError::Frozen)
    );

    let mut line = LineGeometry::new(point(0.0, 0.0), point(1.0, 1.0));
    line.freeze();
    assert!(line.set_end_point(point(2.0, 2.0)).is_err());
    assert_eq!(line.end_point(), point(1.0, 1.0));

    let mut ellipse = EllipseGeometry::new(point(0.0, 0.0), 1.0, 1.0);
    ellipse.freeze();
    assert!(ellipse.set_radius_x(2.0).is_err());
    assert_eq!(ellipse.radius_x(), 1.0);
}

#[test]
fn freeze_cascades_to_children() {
    let mut group = GeometryGroup::new();
    group.add_child(rect_geometry(0.0, 0.0, 1.0, 1.0)).unwrap();
    group
        .add_child(CombinedGeometry::new(
            GeometryCombineMode::Union,
            rect_geometry(0.0, 0.0, 1.0, 1.0),
            ellipse_geometry(0.0, 0.0, 1.0, 1.0),
        ))
        .unwrap();

    let mut g: Geometry<f64> = group.into();
    g.freeze();
    let Geometry::Group(group) = &g else {
        panic!("expected group");
    };
    assert!(group.children().iter().all(|c| c.is_frozen()));
    let Geometry::Combined(combined) = &group.children()[1] else {
        panic!("expected combined");
    };
    assert!(combined.geometry1().is_frozen());
    assert!(combined.geometry2().is_frozen());
}

#[test]
fn mutation_invalidates_cached_queries() {
    let mut ellipse = EllipseGeometry::new(point(0.0, 0.0), 10.0, 10.0);
    let before = ellipse.bounds();
    let flattened_before = ellipse.flatten_contours()[0].vertex_count();
    assert!(!ellipse.cache().is_clear());

    ellipse.set_radius_x(20.0).unwrap();
    assert!(ellipse.cache().is_clear());
    assert!(ellipse.bounds().width > before.width);
    assert!(ellipse.flatten_contours()[0].vertex_count() > flattened_before);
    assert!(ellipse.fill_contains(point(15.0, 0.0)));

    let mut combined = CombinedGeometry::new(
        GeometryCombineMode::Intersect,
        rect_geometry(0.0, 0.0, 10.0, 10.0),
        rect_geometry(5.0, 0.0, 10.0, 10.0),
    );
    assert!((combined.area() - 50.0).abs() < 1e-9);
    combined
        .set_geometry2(rect_geometry(8.0, 0.0, 10.0, 10.0))
        .unwrap();
    assert!((combined.area() - 20.0).abs() < 1e-9);
}

#[test]
fn add_geometry_converts_and_transforms() {
    let mut ellipse = EllipseGeometry::new(point(0.0, 0.0), 5.0, 5.0);
    ellipse.set_transform(Matrix::translation(50.0, 0.0)).unwrap();

    let mut path = PathGeometry::new();
    path.add_geometry(&ellipse).unwrap();
    path.add_geometry(&rect_geometry(0.0, 0.0, 10.0, 10.0)).unwrap();
    // zero extent geometry contributes no figures
    path.add_geometry(&rect_geometry(3.0, 3.0, 0.0, 0.0)).unwrap();
    path.add_geometry(&EllipseGeometry::new(point(1.0, 1.0), 0.0, 0.0))
        .unwrap();

    assert_eq!(path.figure_count(), 2);
    assert!(path.bounds().fuzzy_eq(&Rect::new(0.0, -5.0, 55.0, 15.0)));
    assert!(path.fill_contains(point(50.0, 0.0)));
    assert!(path.may_have_curves());
}

#[test]
fn concurrent_queries_on_frozen_geometries() {
    let geometries: Vec<Geometry<f64>> = assorted_geometries()
        .into_iter()
        .map(|(_, mut g)| {
            g.freeze();
            g
        })
        .collect();
    let expected: Vec<(f64, Rect<f64>)> = geometries
        .iter()
        .map(|g| (g.clone().area(), g.clone().bounds()))
        .collect();
    let shared = Arc::new(geometries);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                shared
                    .iter()
                    .map(|g| (g.area(), g.bounds()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        let results = h.join().unwrap();
        assert_eq!(results, expected);
    }
}

#[test]
fn empty_geometries() {
    let path = PathGeometry::<f64>::new();
    assert!(path.is_empty());
    assert_eq!(path.area(), 0.0);
    assert!(path.bounds().is_empty());
    assert!(!path.fill_contains(point(0.0, 0.0)));
    assert!(path.outline_contours().is_empty());
    assert!(path.to_string().is_empty());

    let group = GeometryGroup::<f64>::new();
    assert!(group.is_empty());
    assert!(!group.may_have_curves());
}
