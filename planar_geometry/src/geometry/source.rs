use super::{
    internal::{
        boolean::{absolute_pos_eps, combine_outlines, resolve_outline, FillRegion},
        contains::intersection_detail,
        widen::widen_contours,
    },
    CombineOptions, Contour, FillRule, FlattenOptions, GeometryCache, GeometryCombineMode,
    IntersectionDetail, PathFigure, PathGeometry, Pen, ToleranceType,
};
use crate::{
    core::{
        math::{Matrix, Point, Rect},
        traits::Real,
    },
    GeometryResult,
};
use std::borrow::Cow;

/// Relative epsilon used for position equality when resolving outlines for queries.
pub const DEFAULT_POS_EQUAL_EPS: f64 = 1e-9;

/// Trait for reading the figures, fill rule, and transform of a geometry. All of the geometric
/// queries (bounds, area, hit-testing, outline, widening, and combination) are provided in terms of
/// the required methods.
///
/// Results computed at the default [FlattenOptions] are cached in [GeometrySource::cache] so
/// repeated queries (on a frozen geometry shared across threads in particular) do not recompute.
pub trait GeometrySource {
    /// Numeric type used for the geometry.
    type Num: Real;

    /// Fill rule used to decide which areas enclosed by the figures are interior.
    fn fill_rule(&self) -> FillRule;

    /// Transform applied to the figures, identity if none.
    fn transform(&self) -> Matrix<Self::Num>;

    /// Figures of the geometry in local (untransformed) coordinates.
    fn figures(&self) -> Cow<'_, [PathFigure<Self::Num>]>;

    /// Lazily computed derived state of the geometry.
    fn cache(&self) -> &GeometryCache<Self::Num>;

    /// Returns true if the geometry has been frozen (immutable).
    fn is_frozen(&self) -> bool;

    /// Closed form area before the transform is applied, if the geometry has one.
    #[inline]
    fn exact_area(&self) -> Option<Self::Num> {
        None
    }

    /// Figures with the transform applied.
    fn transformed_figures(&self) -> Vec<PathFigure<Self::Num>> {
        let matrix = self.transform();
        self.figures()
            .iter()
            .map(|f| f.transformed(&matrix))
            .collect()
    }

    /// Convert to a [PathGeometry] holding the transformed figures (the returned geometry has an
    /// identity transform).
    fn to_path_geometry(&self) -> PathGeometry<Self::Num> {
        PathGeometry::from_figures(self.transformed_figures(), self.fill_rule())
    }

    /// Transformed figures flattened at the default tolerance (cached).
    fn flatten_contours(&self) -> &[Contour<Self::Num>] {
        self.cache()
            .flattened(|| self.flatten_contours_opt(&FlattenOptions::new()))
    }

    /// Transformed figures flattened with `options`.
    fn flatten_contours_opt(&self, options: &FlattenOptions<Self::Num>) -> Vec<Contour<Self::Num>> {
        self.transformed_figures()
            .iter()
            .map(|f| f.flatten(options))
            .collect()
    }

    /// Exact axis aligned bounds of the transformed curves (cached), [Rect::empty] if the geometry
    /// has no figures.
    fn bounds(&self) -> Rect<Self::Num> {
        self.cache().bounds(|| {
            self.transformed_figures()
                .iter()
                .fold(Rect::empty(), |acc, f| acc.union(&f.bounds()))
        })
    }

    /// Returns true if the geometry has no figures.
    #[inline]
    fn is_empty(&self) -> bool {
        self.bounds().is_empty()
    }

    /// Returns true if any segment of the geometry is a curve.
    fn may_have_curves(&self) -> bool {
        self.figures().iter().any(|f| f.may_have_curves())
    }

    /// Fill rule resolved outline at the default tolerance (cached). Outer loops are counter
    /// clockwise and holes are clockwise.
    fn outline_contours(&self) -> &[Contour<Self::Num>] {
        self.cache()
            .outline(|| outline_from_flattened(self.flatten_contours(), self.fill_rule()))
    }

    /// Fill rule resolved outline flattened with `options`.
    fn outline_contours_opt(&self, options: &FlattenOptions<Self::Num>) -> Vec<Contour<Self::Num>> {
        if options.is_default() {
            return self.outline_contours().to_vec();
        }

        outline_from_flattened(&self.flatten_contours_opt(options), self.fill_rule())
    }

    /// Filled area of the geometry.
    ///
    /// Uses the closed form area of primitives when available, otherwise the area of the outline
    /// flattened at the default tolerance.
    fn area(&self) -> Self::Num {
        match self.exact_area() {
            Some(a) => a * num_traits::Float::abs(self.transform().determinant()),
            None => contours_area(self.outline_contours()),
        }
    }

    /// Filled area of the outline flattened with `options`.
    fn area_opt(&self, options: &FlattenOptions<Self::Num>) -> Self::Num {
        if options.is_default() {
            return contours_area(self.outline_contours());
        }

        contours_area(&self.outline_contours_opt(options))
    }

    /// Geometry of straight line figures approximating this geometry at the default tolerance.
    /// Fill rule and stroke flags are preserved.
    fn flattened_path_geometry(&self) -> PathGeometry<Self::Num> {
        self.flattened_path_geometry_opt(&FlattenOptions::new())
    }

    fn flattened_path_geometry_opt(
        &self,
        options: &FlattenOptions<Self::Num>,
    ) -> PathGeometry<Self::Num> {
        let contours = flattened_cow(self, options);
        PathGeometry::from_contours(&contours, self.fill_rule())
    }

    /// Geometry of non overlapping closed loops covering exactly the filled area of this geometry.
    fn outlined_path_geometry(&self) -> PathGeometry<Self::Num> {
        PathGeometry::from_contours(self.outline_contours(), FillRule::NonZero)
    }

    fn outlined_path_geometry_opt(
        &self,
        options: &FlattenOptions<Self::Num>,
    ) -> PathGeometry<Self::Num> {
        PathGeometry::from_contours(&self.outline_contours_opt(options), FillRule::NonZero)
    }

    /// Returns true if `point` is inside the filled area of the geometry (points on the boundary,
    /// within the default tolerance, count as inside).
    #[inline]
    fn fill_contains(&self, point: Point<Self::Num>) -> bool {
        self.fill_contains_opt(point, &FlattenOptions::new())
    }

    /// Returns true if `point` is inside the filled area of the geometry flattened with `options`.
    fn fill_contains_opt(
        &self,
        point: Point<Self::Num>,
        options: &FlattenOptions<Self::Num>,
    ) -> bool {
        if !point.is_finite() {
            return false;
        }

        let contours = flattened_cow(self, options);
        let winding: i32 = contours
            .iter()
            .filter(|c| c.is_filled)
            .map(|c| c.winding_number(point))
            .sum();

        if self.fill_rule().is_inside(winding) {
            return true;
        }

        let tol = absolute_tolerance(options, self.bounds());
        contours
            .iter()
            .filter(|c| c.is_filled)
            .any(|c| c.distance_to_edges(point, false) <= tol)
    }

    /// Returns true if `point` is on the stroke drawn by `pen` along the stroked edges of the
    /// geometry.
    #[inline]
    fn stroke_contains(
        &self,
        pen: &Pen<Self::Num>,
        point: Point<Self::Num>,
    ) -> GeometryResult<bool> {
        self.stroke_contains_opt(pen, point, &FlattenOptions::new())
    }

    fn stroke_contains_opt(
        &self,
        pen: &Pen<Self::Num>,
        point: Point<Self::Num>,
        options: &FlattenOptions<Self::Num>,
    ) -> GeometryResult<bool> {
        pen.validate()?;
        if !point.is_finite() {
            return Ok(false);
        }

        let reach = pen.half_thickness() + absolute_tolerance(options, self.bounds());
        let contours = flattened_cow(self, options);
        Ok(contours
            .iter()
            .any(|c| c.distance_to_edges(point, true) <= reach))
    }

    /// Returns true if this geometry fully contains the filled area of `other`.
    #[inline]
    fn fill_contains_geometry<G>(&self, other: &G) -> bool
    where
        G: GeometrySource<Num = Self::Num> + ?Sized,
    {
        self.fill_contains_with_detail(other) == IntersectionDetail::FullyContains
    }

    /// Classify how the filled area of this geometry relates to the filled area of `other`.
    #[inline]
    fn fill_contains_with_detail<G>(&self, other: &G) -> IntersectionDetail
    where
        G: GeometrySource<Num = Self::Num> + ?Sized,
    {
        self.fill_contains_with_detail_opt(other, &FlattenOptions::new())
    }

    fn fill_contains_with_detail_opt<G>(
        &self,
        other: &G,
        options: &FlattenOptions<Self::Num>,
    ) -> IntersectionDetail
    where
        G: GeometrySource<Num = Self::Num> + ?Sized,
    {
        let (target, other): (Cow<[Contour<Self::Num>]>, Cow<[Contour<Self::Num>]>) =
            if options.is_default() {
                (
                    Cow::Borrowed(self.outline_contours()),
                    Cow::Borrowed(other.outline_contours()),
                )
            } else {
                (
                    Cow::Owned(self.outline_contours_opt(options)),
                    Cow::Owned(other.outline_contours_opt(options)),
                )
            };

        let target = FillRegion::new(&target, FillRule::NonZero);
        let other = FillRegion::new(&other, FillRule::NonZero);
        let eps = absolute_pos_eps(&[target, other], Self::Num::cast_f64(DEFAULT_POS_EQUAL_EPS));
        intersection_detail(target, other, eps)
    }

    /// Bounds of the geometry when stroked with `pen`, plain [GeometrySource::bounds] if no pen is
    /// given or it has no thickness.
    fn render_bounds(&self, pen: Option<&Pen<Self::Num>>) -> Rect<Self::Num> {
        let bounds = self.bounds();
        match pen {
            Some(pen)
                if pen.thickness > <Self::Num as num_traits::Zero>::zero()
                    && num_traits::Float::is_finite(pen.thickness) =>
            {
                let h = pen.half_thickness();
                bounds.inflate(h, h)
            }
            _ => bounds,
        }
    }

    /// Geometry of the area covered by stroking the stroked edges of this geometry with `pen`.
    #[inline]
    fn widened_path_geometry(
        &self,
        pen: &Pen<Self::Num>,
    ) -> GeometryResult<PathGeometry<Self::Num>> {
        self.widened_path_geometry_opt(pen, &FlattenOptions::new())
    }

    fn widened_path_geometry_opt(
        &self,
        pen: &Pen<Self::Num>,
        options: &FlattenOptions<Self::Num>,
    ) -> GeometryResult<PathGeometry<Self::Num>> {
        pen.validate()?;
        let contours = flattened_cow(self, options);
        let outline = widen_contours(
            &contours,
            pen,
            options,
            Self::Num::cast_f64(DEFAULT_POS_EQUAL_EPS),
        );

        Ok(PathGeometry::from_contours(&outline, FillRule::NonZero))
    }

    /// Combine this geometry with `other` at the default options.
    #[inline]
    fn combine_with<G>(&self, other: &G, mode: GeometryCombineMode) -> PathGeometry<Self::Num>
    where
        G: GeometrySource<Num = Self::Num> + ?Sized,
    {
        self.combine_with_opt(other, mode, None, &CombineOptions::new())
    }

    /// Combine this geometry with `other`, see [combine_geometries].
    #[inline]
    fn combine_with_opt<G>(
        &self,
        other: &G,
        mode: GeometryCombineMode,
        transform: Option<&Matrix<Self::Num>>,
        options: &CombineOptions<Self::Num>,
    ) -> PathGeometry<Self::Num>
    where
        G: GeometrySource<Num = Self::Num> + ?Sized,
    {
        combine_geometries(self, other, mode, transform, options)
    }
}

/// Combine the filled areas of two geometries with `mode`.
///
/// Both geometries are flattened (with their transforms applied) at `options` tolerance and
/// resolved into outlines per their own fill rules (cached outlines are reused for the default
/// options), then the outlines are combined. The result holds non crossing closed loops with the
/// [FillRule::NonZero] fill rule and `transform` (if given) as its transform.
pub fn combine_geometries<G1, G2>(
    geometry1: &G1,
    geometry2: &G2,
    mode: GeometryCombineMode,
    transform: Option<&Matrix<G1::Num>>,
    options: &CombineOptions<G1::Num>,
) -> PathGeometry<G1::Num>
where
    G1: GeometrySource + ?Sized,
    G2: GeometrySource<Num = G1::Num> + ?Sized,
{
    let outline1 = combine_operand_outline(geometry1, options);
    let outline2 = combine_operand_outline(geometry2, options);
    let region1 = FillRegion::new(&outline1, FillRule::NonZero);
    let region2 = FillRegion::new(&outline2, FillRule::NonZero);
    let eps = absolute_pos_eps(&[region1, region2], options.pos_equal_eps);

    let loops = combine_outlines(&outline1, &outline2, |a, b| mode.keep(a, b), eps);
    tracing::debug!(?mode, loop_count = loops.len(), "combined geometries");

    let mut result = PathGeometry::from_contours(&loops, FillRule::NonZero);
    match transform {
        Some(m) => result.set_transform_unchecked(*m),
        // loops are the resolved outline of the untransformed result
        None => result.cache().prime_outline(loops),
    }

    result
}

/// Fill rule resolved outline of a combine operand, borrowed from the cache for default options.
fn combine_operand_outline<'a, G>(
    geometry: &'a G,
    options: &CombineOptions<G::Num>,
) -> Cow<'a, [Contour<G::Num>]>
where
    G: GeometrySource + ?Sized,
{
    let flatten_options = options.flatten_options();
    if flatten_options.is_default()
        && options.pos_equal_eps == G::Num::cast_f64(DEFAULT_POS_EQUAL_EPS)
    {
        return Cow::Borrowed(geometry.outline_contours());
    }

    let contours = flattened_cow(geometry, &flatten_options);
    let region = FillRegion::new(&contours, geometry.fill_rule());
    let eps = absolute_pos_eps(&[region], options.pos_equal_eps);
    Cow::Owned(resolve_outline(region, eps))
}

/// Flattened contours of `geometry`, borrowed from the cache for default options.
pub(crate) fn flattened_cow<'a, G>(
    geometry: &'a G,
    options: &FlattenOptions<G::Num>,
) -> Cow<'a, [Contour<G::Num>]>
where
    G: GeometrySource + ?Sized,
{
    if options.is_default() {
        Cow::Borrowed(geometry.flatten_contours())
    } else {
        Cow::Owned(geometry.flatten_contours_opt(options))
    }
}

fn outline_from_flattened<T>(contours: &[Contour<T>], fill_rule: FillRule) -> Vec<Contour<T>>
where
    T: Real,
{
    let region = FillRegion::new(contours, fill_rule);
    let eps = absolute_pos_eps(&[region], T::cast_f64(DEFAULT_POS_EQUAL_EPS));
    resolve_outline(region, eps)
}

fn contours_area<T>(contours: &[Contour<T>]) -> T
where
    T: Real,
{
    let total = contours
        .iter()
        .fold(T::zero(), |acc, c| acc + c.signed_area());
    num_traits::Float::max(total, T::zero())
}

fn absolute_tolerance<T>(options: &FlattenOptions<T>, bounds: Rect<T>) -> T
where
    T: Real,
{
    match options.tolerance_type {
        ToleranceType::Absolute => options.tolerance,
        ToleranceType::Relative => {
            if bounds.is_empty() {
                options.tolerance
            } else {
                options.tolerance * bounds.size().width.hypot(bounds.size().height)
            }
        }
    }
}
