mod test_utils;

use planar_geometry::{
    geometry::{parse_path_markup, to_markup, FillRule, Geometry, GeometrySource, PathGeometry},
    GeometryError,
};
use test_utils::{assorted_geometries, mixed_curve_path, rect_fuzzy_eq_eps};

#[test]
fn round_trip_preserves_bounds_and_area() {
    for (name, g) in assorted_geometries() {
        let markup = g.to_string();
        let parsed: PathGeometry = markup
            .parse()
            .unwrap_or_else(|e| panic!("{name}: {e} in '{markup}'"));

        assert_eq!(parsed.fill_rule(), g.fill_rule(), "{name}");
        assert!(
            rect_fuzzy_eq_eps(&parsed.bounds(), &g.bounds(), 1e-9),
            "{name}: {:?} vs {:?}",
            parsed.bounds(),
            g.bounds()
        );

        // primitives report a closed form area, the parsed path a flattened one
        let expected = g.area_opt(&Default::default());
        assert!(
            (parsed.area() - expected).abs() < 1e-9,
            "{name}: {} vs {expected}",
            parsed.area()
        );

        // writing the parsed geometry reproduces the markup
        assert_eq!(parsed.to_string(), markup, "{name}");
    }
}

#[test]
fn path_round_trip_is_exact() {
    let path = mixed_curve_path();
    let parsed = parse_path_markup::<f64>(&to_markup(&path)).unwrap();
    assert_eq!(parsed.bounds(), path.bounds());
    assert_eq!(parsed.area(), path.area());
}

#[test]
fn fill_rule_token() {
    let g: Geometry<f64> = "F1 M0,0 L10,0 L10,10 z".parse().unwrap();
    assert_eq!(g.fill_rule(), FillRule::NonZero);
    let g: Geometry<f64> = "F0 M0,0 L10,0 L10,10 z".parse().unwrap();
    assert_eq!(g.fill_rule(), FillRule::EvenOdd);
    assert!(!g.to_string().starts_with('F'));
}

#[test]
fn malformed_markup_errors() {
    let cases = [
        ("M", 1),
        ("M0,0 L", 6),
        ("M0,0 K1,1", 5),
        ("10,10", 0),
        ("M0,0 A5,5 0 2 1 10,0", 12),
        ("M0,0 L1e,5", 7),
    ];
    for (markup, position) in cases {
        match parse_path_markup::<f64>(markup) {
            Err(GeometryError::Parse { position: p, .. }) => {
                assert_eq!(p, position, "'{markup}'")
            }
            other => panic!("'{markup}': expected parse error, got {other:?}"),
        }
    }
}

#[test]
fn whitespace_and_separators() {
    let a = parse_path_markup::<f64>("M0,0L10,0L10,10Z").unwrap();
    let b = parse_path_markup::<f64>("  M 0 0 , L 10 0 L 10 , 10 z  ").unwrap();
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a.to_string(), "M0,0 L10,0 L10,10 z");
}
