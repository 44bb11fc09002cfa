use planar_geometry::{
    core::{
        math::{point, Rect},
        traits::FuzzyEq,
    },
    geometry::GeometrySource,
};

/// Fuzzy compare rectangles, two empty rectangles compare equal.
pub fn rect_fuzzy_eq_eps(a: &Rect<f64>, b: &Rect<f64>, eps: f64) -> bool {
    a.fuzzy_eq_eps(b, eps)
}

/// Holds a set of properties of a geometry for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct GeometryProperties {
    pub figure_count: usize,
    pub area: f64,
    pub bounds: Rect<f64>,
}

impl GeometryProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-5;

    pub fn new(figure_count: usize, area: f64, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            figure_count,
            area,
            bounds: Rect::new(x, y, width, height),
        }
    }

    pub fn from_geometry<G>(geometry: &G) -> Self
    where
        G: GeometrySource<Num = f64> + ?Sized,
    {
        Self {
            figure_count: geometry.figures().len(),
            area: geometry.area(),
            bounds: geometry.bounds(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.figure_count == other.figure_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && rect_fuzzy_eq_eps(&self.bounds, &other.bounds, eps)
    }
}

pub fn properties_match(result: &GeometryProperties, expected: &GeometryProperties) -> bool {
    let matched = result.fuzzy_eq_eps(expected, GeometryProperties::PROP_CMP_EPS);
    if !matched {
        eprintln!("result: {result:?}\nexpected: {expected:?}");
    }

    matched
}

/// Result of sampling fill containment on a grid covering the bounds of a geometry.
#[derive(Debug, Copy, Clone)]
pub struct HitTestEstimate {
    pub hits: usize,
    pub probes: usize,
    pub bounds_area: f64,
}

impl HitTestEstimate {
    /// Area estimated from the fraction of probes inside the fill.
    pub fn area(&self) -> f64 {
        if self.probes == 0 {
            return 0.0;
        }

        self.hits as f64 / self.probes as f64 * self.bounds_area
    }
}

/// Sample a `resolution` x `resolution` grid of cell centers within the bounds of `geometry` and
/// count the points inside the fill.
pub fn hit_test_grid<G>(geometry: &G, resolution: usize) -> HitTestEstimate
where
    G: GeometrySource<Num = f64> + ?Sized,
{
    let bounds = geometry.bounds();
    if bounds.is_empty() {
        return HitTestEstimate {
            hits: 0,
            probes: 0,
            bounds_area: 0.0,
        };
    }

    let step_x = bounds.width / resolution as f64;
    let step_y = bounds.height / resolution as f64;
    let mut hits = 0;
    for i in 0..resolution {
        for j in 0..resolution {
            let p = point(
                bounds.x + (i as f64 + 0.5) * step_x,
                bounds.y + (j as f64 + 0.5) * step_y,
            );
            if geometry.fill_contains(p) {
                hits += 1;
            }
        }
    }

    HitTestEstimate {
        hits,
        probes: resolution * resolution,
        bounds_area: bounds.area(),
    }
}

/// Assert the area of `geometry` agrees with a 100 x 100 hit-test estimate within a tenth of the
/// bounds area.
pub fn assert_area_matches_hit_test<G>(geometry: &G, name: &str)
where
    G: GeometrySource<Num = f64> + ?Sized,
{
    let estimate = hit_test_grid(geometry, 100);
    let area = geometry.area();
    let margin = estimate.bounds_area * 0.1;
    assert!(
        (area - estimate.area()).abs() <= margin,
        "{name}: area {area}, hit-test estimate {}, margin {margin}",
        estimate.area()
    );
}
