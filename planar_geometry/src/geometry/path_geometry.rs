use super::{Contour, FillRule, GeometryCache, GeometrySource, PathFigure};
use crate::{
    core::{math::Matrix, traits::Real},
    GeometryError, GeometryResult,
};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns [GeometryError::Frozen] if `frozen` is true.
#[inline]
pub(crate) fn ensure_mutable(frozen: bool) -> GeometryResult<()> {
    if frozen {
        return Err(GeometryError::Frozen);
    }

    Ok(())
}

/// Geometry built from an ordered list of figures.
///
/// All mutation goes through methods that fail with [GeometryError::Frozen] once the geometry has
/// been frozen and clear the cached derived state otherwise.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// # use planar_geometry::geometry::*;
/// # use planar_geometry::figure_closed;
/// let mut path: PathGeometry = PathGeometry::new();
/// path.add_figure(figure_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
///     .unwrap();
/// assert!((path.area() - 100.0).abs() < 1e-9);
/// assert!(path.fill_contains(point(5.0, 5.0)));
/// path.freeze();
/// assert!(path.set_fill_rule(FillRule::NonZero).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct PathGeometry<T = f64>
where
    T: Real,
{
    figures: Vec<PathFigure<T>>,
    fill_rule: FillRule,
    transform: Matrix<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    frozen: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    cache: GeometryCache<T>,
}

impl<T> PathGeometry<T>
where
    T: Real,
{
    /// Create an empty geometry with the [FillRule::EvenOdd] fill rule.
    #[inline]
    pub fn new() -> Self {
        Self::from_figures(Vec::new(), FillRule::EvenOdd)
    }

    #[inline]
    pub fn from_figures(figures: Vec<PathFigure<T>>, fill_rule: FillRule) -> Self {
        Self {
            figures,
            fill_rule,
            transform: Matrix::identity(),
            frozen: false,
            cache: GeometryCache::new(),
        }
    }

    /// Create a geometry of straight line figures from flattened contours.
    pub fn from_contours(contours: &[Contour<T>], fill_rule: FillRule) -> Self {
        let figures = contours
            .iter()
            .filter(|c| !c.is_empty())
            .map(PathFigure::from_contour)
            .collect();
        Self::from_figures(figures, fill_rule)
    }

    #[inline]
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Consume the geometry returning its figures (without the transform applied).
    #[inline]
    pub fn into_figures(self) -> Vec<PathFigure<T>> {
        self.figures
    }

    #[inline]
    pub fn figure(&self, index: usize) -> Option<&PathFigure<T>> {
        self.figures.get(index)
    }

    pub fn set_fill_rule(&mut self, fill_rule: FillRule) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.fill_rule = fill_rule;
        self.cache.reset();
        Ok(())
    }

    pub fn set_transform(&mut self, transform: Matrix<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.set_transform_unchecked(transform);
        Ok(())
    }

    #[inline]
    pub(crate) fn set_transform_unchecked(&mut self, transform: Matrix<T>) {
        self.transform = transform;
        self.cache.reset();
    }

    pub fn add_figure(&mut self, figure: PathFigure<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.figures.push(figure);
        self.cache.reset();
        Ok(())
    }

    /// Replace the figure at `index`, returning the figure replaced.
    pub fn set_figure(
        &mut self,
        index: usize,
        figure: PathFigure<T>,
    ) -> GeometryResult<PathFigure<T>> {
        ensure_mutable(self.frozen)?;
        let len = self.figures.len();
        let slot = self
            .figures
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfRange { index, len })?;
        let old = std::mem::replace(slot, figure);
        self.cache.reset();
        Ok(old)
    }

    pub fn remove_figure(&mut self, index: usize) -> GeometryResult<PathFigure<T>> {
        ensure_mutable(self.frozen)?;
        let len = self.figures.len();
        if index >= len {
            return Err(GeometryError::IndexOutOfRange { index, len });
        }

        self.cache.reset();
        Ok(self.figures.remove(index))
    }

    pub fn clear(&mut self) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.figures.clear();
        self.cache.reset();
        Ok(())
    }

    /// Append the figures of `other` (with the transform of `other` applied). Figures without any
    /// spatial extent are skipped.
    pub fn add_geometry<G>(&mut self, other: &G) -> GeometryResult<()>
    where
        G: GeometrySource<Num = T> + ?Sized,
    {
        ensure_mutable(self.frozen)?;
        let before = self.figures.len();
        self.figures.extend(
            other
                .transformed_figures()
                .into_iter()
                .filter(|f| !f.is_point_like()),
        );
        tracing::trace!(
            added = self.figures.len() - before,
            "appended geometry figures"
        );
        self.cache.reset();
        Ok(())
    }

    /// Make the geometry immutable. A frozen geometry may be shared across threads and queried
    /// concurrently.
    #[inline]
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Clone of the geometry that is not frozen.
    pub fn clone_unfrozen(&self) -> Self {
        let mut result = self.clone();
        result.frozen = false;
        result
    }
}

impl<T> GeometrySource for PathGeometry<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    #[inline]
    fn transform(&self) -> Matrix<T> {
        self.transform
    }

    #[inline]
    fn figures(&self) -> Cow<'_, [PathFigure<T>]> {
        Cow::Borrowed(&self.figures)
    }

    #[inline]
    fn cache(&self) -> &GeometryCache<T> {
        &self.cache
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn transformed_figures(&self) -> Vec<PathFigure<T>> {
        if self.transform.is_identity() {
            return self.figures.clone();
        }

        self.figures
            .iter()
            .map(|f| f.transformed(&self.transform))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{math::point, traits::FuzzyEq};
    use crate::geometry::{FlattenOptions, PathSegment, Pen, ToleranceType};

    fn square(x: f64, y: f64, size: f64) -> PathFigure<f64> {
        figure_closed![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
    }

    #[test]
    fn mutation_resets_cache() {
        let mut path = PathGeometry::new();
        path.add_figure(square(0.0, 0.0, 10.0)).unwrap();
        assert_fuzzy_eq!(path.area(), 100.0);
        assert!(!path.cache().is_clear());

        path.add_figure(square(20.0, 0.0, 10.0)).unwrap();
        assert!(path.cache().is_clear());
        assert_fuzzy_eq!(path.area(), 200.0);

        path.set_transform(Matrix::scaling(2.0, 1.0)).unwrap();
        assert_fuzzy_eq!(path.area(), 400.0);
        assert_fuzzy_eq!(path.bounds().width, 60.0);
    }

    #[test]
    fn frozen_rejects_mutation() {
        let mut path = PathGeometry::new();
        path.add_figure(square(0.0, 0.0, 10.0)).unwrap();
        path.freeze();
        assert!(path.is_frozen());
        assert_eq!(
            path.add_figure(square(0.0, 0.0, 1.0)),
            Err(GeometryError::Frozen)
        );
        assert_eq!(path.clear(), Err(GeometryError::Frozen));
        assert_eq!(path.figure_count(), 1);

        let mut copy = path.clone_unfrozen();
        assert!(copy.clear().is_ok());
    }

    #[test]
    fn index_errors() {
        let mut path = PathGeometry::<f64>::new();
        assert_eq!(
            path.remove_figure(0),
            Err(GeometryError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(path.set_figure(3, square(0.0, 0.0, 1.0)).is_err());
    }

    #[test]
    fn add_geometry_skips_point_like() {
        let mut source = PathGeometry::new();
        source.add_figure(square(0.0, 0.0, 10.0)).unwrap();
        source.add_figure(PathFigure::new(point(5.0, 5.0))).unwrap();
        source
            .set_transform(Matrix::translation(100.0, 0.0))
            .unwrap();

        let mut target = PathGeometry::new();
        target.add_geometry(&source).unwrap();
        assert_eq!(target.figure_count(), 1);
        assert_fuzzy_eq!(target.bounds().x, 100.0);
    }

    #[test]
    fn fill_rule_changes_area() {
        let mut path = PathGeometry::new();
        path.add_figure(square(0.0, 0.0, 20.0)).unwrap();
        path.add_figure(square(5.0, 5.0, 10.0)).unwrap();
        assert_fuzzy_eq!(path.area(), 300.0);
        path.set_fill_rule(FillRule::NonZero).unwrap();
        assert_fuzzy_eq!(path.area(), 400.0);
    }

    #[test]
    fn hit_testing() {
        let mut path = PathGeometry::new();
        path.add_figure(square(0.0, 0.0, 10.0)).unwrap();
        assert!(path.fill_contains(point(5.0, 5.0)));
        assert!(path.fill_contains(point(10.0, 5.0)));
        assert!(!path.fill_contains(point(11.0, 5.0)));
        assert!(!path.fill_contains(point(f64::NAN, 5.0)));

        let pen = Pen::new(2.0);
        assert!(path.stroke_contains(&pen, point(10.5, 5.0)).unwrap());
        assert!(!path.stroke_contains(&pen, point(5.0, 5.0)).unwrap());
        assert!(path
            .stroke_contains(&Pen::new(-1.0), point(0.0, 0.0))
            .is_err());

        let options = FlattenOptions::with_tolerance(0.1, ToleranceType::Absolute);
        assert!(path.fill_contains_opt(point(10.05, 5.0), &options));
    }

    #[test]
    fn unfilled_figures_do_not_fill() {
        let mut path = PathGeometry::new();
        path.add_figure(square(0.0, 0.0, 10.0).filled(false))
            .unwrap();
        assert_fuzzy_eq!(path.area(), 0.0);
        assert!(!path.fill_contains(point(5.0, 5.0)));
        assert!(!path.is_empty());
    }

    #[test]
    fn flattened_preserves_stroke_flags() {
        let figure = PathFigure::new(point(0.0, 0.0))
            .segment(PathSegment::line(point(10.0, 0.0)))
            .segment(PathSegment::line(point(10.0, 10.0)).stroked(false))
            .segment(PathSegment::line(point(0.0, 10.0)).stroked(false));
        let path = PathGeometry::from_figures(vec![figure], FillRule::EvenOdd);
        let flattened = path.flattened_path_geometry();
        let f = flattened.figure(0).unwrap();
        assert_eq!(f.segments.len(), 2);
        assert!(f.segments[0].is_stroked);
        assert!(!f.segments[1].is_stroked);
        assert_fuzzy_eq!(flattened.area(), 100.0);
    }
}
