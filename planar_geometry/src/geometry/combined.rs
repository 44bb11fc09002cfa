use super::{
    path_geometry::ensure_mutable, source::combine_geometries, CombineOptions, FillRule, Geometry,
    GeometryCache, GeometryCombineMode, GeometrySource, PathFigure,
};
use crate::{
    core::{math::Matrix, traits::Real},
    GeometryResult,
};
use std::{borrow::Cow, sync::OnceLock};

/// Boolean combination of two geometries, evaluated lazily on first query.
///
/// The result figures are non crossing closed loops filled with [FillRule::NonZero].
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// # use planar_geometry::geometry::*;
/// let a: RectangleGeometry = RectangleGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0));
/// let b = RectangleGeometry::new(Rect::new(5.0, 0.0, 10.0, 10.0));
/// let union = CombinedGeometry::new(GeometryCombineMode::Union, a.into(), b.into());
/// assert!((union.area() - 150.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CombinedGeometry<T = f64>
where
    T: Real,
{
    geometry1: Box<Geometry<T>>,
    geometry2: Box<Geometry<T>>,
    combine_mode: GeometryCombineMode,
    transform: Matrix<T>,
    frozen: bool,
    cache: GeometryCache<T>,
    result: OnceLock<Vec<PathFigure<T>>>,
}

impl<T> CombinedGeometry<T>
where
    T: Real,
{
    pub fn new(
        combine_mode: GeometryCombineMode,
        geometry1: Geometry<T>,
        geometry2: Geometry<T>,
    ) -> Self {
        Self {
            geometry1: Box::new(geometry1),
            geometry2: Box::new(geometry2),
            combine_mode,
            transform: Matrix::identity(),
            frozen: false,
            cache: GeometryCache::new(),
            result: OnceLock::new(),
        }
    }

    #[inline]
    pub fn geometry1(&self) -> &Geometry<T> {
        &self.geometry1
    }

    #[inline]
    pub fn geometry2(&self) -> &Geometry<T> {
        &self.geometry2
    }

    #[inline]
    pub fn combine_mode(&self) -> GeometryCombineMode {
        self.combine_mode
    }

    fn reset(&mut self) {
        self.cache.reset();
        self.result = OnceLock::new();
    }

    pub fn set_geometry1(&mut self, geometry: Geometry<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        *self.geometry1 = geometry;
        self.reset();
        Ok(())
    }

    pub fn set_geometry2(&mut self, geometry: Geometry<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        *self.geometry2 = geometry;
        self.reset();
        Ok(())
    }

    pub fn set_combine_mode(&mut self, combine_mode: GeometryCombineMode) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.combine_mode = combine_mode;
        self.reset();
        Ok(())
    }

    /// Transform applied to the combined result (the operands keep their own transforms).
    pub fn set_transform(&mut self, transform: Matrix<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.transform = transform;
        self.cache.reset();
        Ok(())
    }

    /// Freeze this geometry and both operands.
    pub fn freeze(&mut self) {
        self.geometry1.freeze();
        self.geometry2.freeze();
        self.frozen = true;
    }
}

impl<T> GeometrySource for CombinedGeometry<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn fill_rule(&self) -> FillRule {
        FillRule::NonZero
    }

    #[inline]
    fn transform(&self) -> Matrix<T> {
        self.transform
    }

    fn figures(&self) -> Cow<'_, [PathFigure<T>]> {
        let figures = self.result.get_or_init(|| {
            combine_geometries(
                &*self.geometry1,
                &*self.geometry2,
                self.combine_mode,
                None,
                &CombineOptions::new(),
            )
            .into_figures()
        });

        Cow::Borrowed(figures)
    }

    #[inline]
    fn cache(&self) -> &GeometryCache<T> {
        &self.cache
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        math::{point, Rect},
        traits::FuzzyEq,
    };
    use crate::geometry::{EllipseGeometry, IntersectionDetail, RectangleGeometry};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Geometry<f64> {
        RectangleGeometry::new(Rect::new(x, y, w, h)).into()
    }

    #[test]
    fn combine_modes() {
        let mut g = CombinedGeometry::new(
            GeometryCombineMode::Union,
            rect(0.0, 0.0, 10.0, 10.0),
            rect(5.0, 5.0, 10.0, 10.0),
        );
        assert_fuzzy_eq!(g.area(), 175.0);
        assert!(g.bounds().fuzzy_eq(&Rect::new(0.0, 0.0, 15.0, 15.0)));

        g.set_combine_mode(GeometryCombineMode::Intersect).unwrap();
        assert_fuzzy_eq!(g.area(), 25.0);
        assert!(g.bounds().fuzzy_eq(&Rect::new(5.0, 5.0, 5.0, 5.0)));

        g.set_combine_mode(GeometryCombineMode::Exclude).unwrap();
        assert_fuzzy_eq!(g.area(), 75.0);
        assert!(!g.fill_contains(point(7.0, 7.0)));
        assert!(g.fill_contains(point(2.0, 2.0)));

        g.set_combine_mode(GeometryCombineMode::Xor).unwrap();
        assert_fuzzy_eq!(g.area(), 150.0);
    }

    #[test]
    fn operand_transforms_apply() {
        let mut moved = RectangleGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        moved.set_transform(Matrix::translation(5.0, 0.0)).unwrap();
        let mut g = CombinedGeometry::new(
            GeometryCombineMode::Intersect,
            rect(0.0, 0.0, 10.0, 10.0),
            moved.into(),
        );
        assert_fuzzy_eq!(g.area(), 50.0);

        g.set_transform(Matrix::scaling(2.0, 2.0)).unwrap();
        assert_fuzzy_eq!(g.area(), 200.0);
        assert!(g.bounds().fuzzy_eq(&Rect::new(10.0, 0.0, 10.0, 20.0)));
    }

    #[test]
    fn nested_combination() {
        let inner = CombinedGeometry::new(
            GeometryCombineMode::Union,
            rect(0.0, 0.0, 10.0, 10.0),
            rect(20.0, 0.0, 10.0, 10.0),
        );
        let g = CombinedGeometry::new(
            GeometryCombineMode::Intersect,
            inner.into(),
            rect(5.0, 0.0, 20.0, 10.0),
        );
        assert_fuzzy_eq!(g.area(), 100.0);
        assert_eq!(g.figures().len(), 2);
    }

    #[test]
    fn curved_operands() {
        let circle = EllipseGeometry::new(point(0.0, 0.0), 10.0, 10.0);
        let g = CombinedGeometry::new(
            GeometryCombineMode::Exclude,
            circle.into(),
            rect(0.0, -20.0, 20.0, 40.0),
        );
        let half = 50.0 * std::f64::consts::PI;
        assert!((g.area() - half).abs() < 0.1, "{}", g.area());
        assert_eq!(
            g.fill_contains_with_detail(&rect(-20.0, -20.0, 40.0, 40.0)),
            IntersectionDetail::FullyInside
        );
    }

    #[test]
    fn frozen_combined() {
        let mut g = CombinedGeometry::new(
            GeometryCombineMode::Union,
            rect(0.0, 0.0, 10.0, 10.0),
            rect(5.0, 5.0, 10.0, 10.0),
        );
        g.freeze();
        assert!(g.geometry1().is_frozen());
        assert!(g.set_combine_mode(GeometryCombineMode::Xor).is_err());
        assert_fuzzy_eq!(g.area(), 175.0);
    }
}
