//! Primitive shapes, each exposed through [GeometrySource] as the equivalent path figures.
use super::{
    path_geometry::ensure_mutable, FillRule, GeometryCache, GeometrySource, PathFigure, PathSegment,
};
use crate::{
    core::{
        math::{point, Matrix, Point, Rect},
        traits::Real,
    },
    GeometryResult,
};
use std::borrow::Cow;

/// Tangent length factor for approximating an eighth of an ellipse with a cubic bezier.
#[inline]
fn eighth_kappa<T>() -> T
where
    T: Real,
{
    // 4/3 * tan(pi / 16)
    T::cast_f64(0.265_216_489_839_544)
}

/// Tangent length factor for approximating a quarter ellipse with a cubic bezier.
#[inline]
fn quarter_kappa<T>() -> T
where
    T: Real,
{
    // 4/3 * (sqrt(2) - 1)
    T::cast_f64(0.552_284_749_830_793_4)
}

/// Straight line between two points. Has no fill area.
#[derive(Debug, Clone, Default)]
pub struct LineGeometry<T = f64>
where
    T: Real,
{
    start_point: Point<T>,
    end_point: Point<T>,
    transform: Matrix<T>,
    frozen: bool,
    cache: GeometryCache<T>,
}

impl<T> LineGeometry<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start_point: Point<T>, end_point: Point<T>) -> Self {
        Self {
            start_point,
            end_point,
            transform: Matrix::identity(),
            frozen: false,
            cache: GeometryCache::new(),
        }
    }

    #[inline]
    pub fn start_point(&self) -> Point<T> {
        self.start_point
    }

    #[inline]
    pub fn end_point(&self) -> Point<T> {
        self.end_point
    }

    pub fn set_start_point(&mut self, start_point: Point<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.start_point = start_point;
        self.cache.reset();
        Ok(())
    }

    pub fn set_end_point(&mut self, end_point: Point<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.end_point = end_point;
        self.cache.reset();
        Ok(())
    }

    pub fn set_transform(&mut self, transform: Matrix<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.transform = transform;
        self.cache.reset();
        Ok(())
    }

    #[inline]
    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}

impl<T> GeometrySource for LineGeometry<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn fill_rule(&self) -> FillRule {
        FillRule::EvenOdd
    }

    #[inline]
    fn transform(&self) -> Matrix<T> {
        self.transform
    }

    fn figures(&self) -> Cow<'_, [PathFigure<T>]> {
        Cow::Owned(vec![PathFigure::new(self.start_point)
            .segment(PathSegment::line(self.end_point))])
    }

    #[inline]
    fn cache(&self) -> &GeometryCache<T> {
        &self.cache
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[inline]
    fn exact_area(&self) -> Option<T> {
        Some(T::zero())
    }
}

/// Axis aligned ellipse given by its center and radii.
#[derive(Debug, Clone, Default)]
pub struct EllipseGeometry<T = f64>
where
    T: Real,
{
    center: Point<T>,
    radius_x: T,
    radius_y: T,
    transform: Matrix<T>,
    frozen: bool,
    cache: GeometryCache<T>,
}

impl<T> EllipseGeometry<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Point<T>, radius_x: T, radius_y: T) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            transform: Matrix::identity(),
            frozen: false,
            cache: GeometryCache::new(),
        }
    }

    /// Ellipse inscribed in `rect`.
    #[inline]
    pub fn from_rect(rect: Rect<T>) -> Self {
        Self::new(rect.center(), rect.width / T::two(), rect.height / T::two())
    }

    #[inline]
    pub fn center(&self) -> Point<T> {
        self.center
    }

    #[inline]
    pub fn radius_x(&self) -> T {
        self.radius_x
    }

    #[inline]
    pub fn radius_y(&self) -> T {
        self.radius_y
    }

    pub fn set_center(&mut self, center: Point<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.center = center;
        self.cache.reset();
        Ok(())
    }

    pub fn set_radius_x(&mut self, radius_x: T) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.radius_x = radius_x;
        self.cache.reset();
        Ok(())
    }

    pub fn set_radius_y(&mut self, radius_y: T) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.radius_y = radius_y;
        self.cache.reset();
        Ok(())
    }

    pub fn set_transform(&mut self, transform: Matrix<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.transform = transform;
        self.cache.reset();
        Ok(())
    }

    #[inline]
    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}

impl<T> GeometrySource for EllipseGeometry<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn fill_rule(&self) -> FillRule {
        FillRule::EvenOdd
    }

    #[inline]
    fn transform(&self) -> Matrix<T> {
        self.transform
    }

    /// Eight cubic beziers (one per eighth turn) starting at the rightmost point.
    fn figures(&self) -> Cow<'_, [PathFigure<T>]> {
        let rx = self.radius_x.abs();
        let ry = self.radius_y.abs();
        let c = self.center;
        if !(rx.is_finite() && ry.is_finite() && c.is_finite()) {
            return Cow::Owned(Vec::new());
        }

        let step = T::pi() / T::four();
        let kappa = eighth_kappa::<T>();
        let on_ellipse = |cos: T, sin: T| point(c.x + rx * cos, c.y + ry * sin);

        let mut figure = PathFigure::new(point(c.x + rx, c.y)).closed(true);
        for i in 0..8 {
            let a0 = step * T::cast_f64(i as f64);
            let a1 = a0 + step;
            let (s0, c0) = a0.sin_cos();
            let (s1, c1) = a1.sin_cos();
            let end = if i == 7 {
                figure.start_point
            } else {
                on_ellipse(c1, s1)
            };
            figure.segments.push(PathSegment::bezier(
                on_ellipse(c0 - kappa * s0, s0 + kappa * c0),
                on_ellipse(c1 + kappa * s1, s1 - kappa * c1),
                end,
            ));
        }

        Cow::Owned(vec![figure])
    }

    #[inline]
    fn cache(&self) -> &GeometryCache<T> {
        &self.cache
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn exact_area(&self) -> Option<T> {
        let a = T::pi() * self.radius_x.abs() * self.radius_y.abs();
        a.is_finite().then_some(a)
    }
}

/// Axis aligned rectangle, with rounded corners when both radii are greater than zero.
///
/// Radii are clamped to half the width and half the height of the rectangle.
#[derive(Debug, Clone, Default)]
pub struct RectangleGeometry<T = f64>
where
    T: Real,
{
    rect: Rect<T>,
    radius_x: T,
    radius_y: T,
    transform: Matrix<T>,
    frozen: bool,
    cache: GeometryCache<T>,
}

impl<T> RectangleGeometry<T>
where
    T: Real,
{
    #[inline]
    pub fn new(rect: Rect<T>) -> Self {
        Self::with_radii(rect, T::zero(), T::zero())
    }

    #[inline]
    pub fn with_radii(rect: Rect<T>, radius_x: T, radius_y: T) -> Self {
        Self {
            rect,
            radius_x,
            radius_y,
            transform: Matrix::identity(),
            frozen: false,
            cache: GeometryCache::new(),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect<T> {
        self.rect
    }

    #[inline]
    pub fn radius_x(&self) -> T {
        self.radius_x
    }

    #[inline]
    pub fn radius_y(&self) -> T {
        self.radius_y
    }

    pub fn set_rect(&mut self, rect: Rect<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.rect = rect;
        self.cache.reset();
        Ok(())
    }

    pub fn set_radius_x(&mut self, radius_x: T) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.radius_x = radius_x;
        self.cache.reset();
        Ok(())
    }

    pub fn set_radius_y(&mut self, radius_y: T) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.radius_y = radius_y;
        self.cache.reset();
        Ok(())
    }

    pub fn set_transform(&mut self, transform: Matrix<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.transform = transform;
        self.cache.reset();
        Ok(())
    }

    #[inline]
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Corner radii after clamping, `None` if the corners are square.
    fn clamped_radii(&self) -> Option<(T, T)> {
        let rx = num_traits::Float::min(self.radius_x.abs(), self.rect.width / T::two());
        let ry = num_traits::Float::min(self.radius_y.abs(), self.rect.height / T::two());
        if rx > T::zero() && ry > T::zero() {
            Some((rx, ry))
        } else {
            None
        }
    }
}

impl<T> GeometrySource for RectangleGeometry<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn fill_rule(&self) -> FillRule {
        FillRule::EvenOdd
    }

    #[inline]
    fn transform(&self) -> Matrix<T> {
        self.transform
    }

    fn figures(&self) -> Cow<'_, [PathFigure<T>]> {
        let r = &self.rect;
        if r.is_empty() || !(r.x.is_finite() && r.y.is_finite()) {
            return Cow::Owned(Vec::new());
        }

        let (left, top, right, bottom) = (r.left(), r.top(), r.right(), r.bottom());
        let figure = match self.clamped_radii() {
            None => figure_closed![(left, top), (right, top), (right, bottom), (left, bottom)],
            Some((rx, ry)) => {
                let kx = rx * quarter_kappa();
                let ky = ry * quarter_kappa();
                PathFigure::new(point(left + rx, top))
                    .segment(PathSegment::line(point(right - rx, top)))
                    .segment(PathSegment::bezier(
                        point(right - rx + kx, top),
                        point(right, top + ry - ky),
                        point(right, top + ry),
                    ))
                    .segment(PathSegment::line(point(right, bottom - ry)))
                    .segment(PathSegment::bezier(
                        point(right, bottom - ry + ky),
                        point(right - rx + kx, bottom),
                        point(right - rx, bottom),
                    ))
                    .segment(PathSegment::line(point(left + rx, bottom)))
                    .segment(PathSegment::bezier(
                        point(left + rx - kx, bottom),
                        point(left, bottom - ry + ky),
                        point(left, bottom - ry),
                    ))
                    .segment(PathSegment::line(point(left, top + ry)))
                    .segment(PathSegment::bezier(
                        point(left, top + ry - ky),
                        point(left + rx - kx, top),
                        point(left + rx, top),
                    ))
                    .closed(true)
            }
        };

        Cow::Owned(vec![figure])
    }

    #[inline]
    fn cache(&self) -> &GeometryCache<T> {
        &self.cache
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn exact_area(&self) -> Option<T> {
        if self.rect.is_empty() {
            return Some(T::zero());
        }

        let full = self.rect.width * self.rect.height;
        let a = match self.clamped_radii() {
            None => full,
            Some((rx, ry)) => full - (T::four() - T::pi()) * rx * ry,
        };

        a.is_finite().then_some(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use crate::geometry::FlattenOptions;
    use std::f64::consts::PI;

    #[test]
    fn ellipse_area_and_bounds() {
        let e = EllipseGeometry::new(point(10.0, 20.0), 5.0, 3.0);
        assert_fuzzy_eq!(e.area(), PI * 15.0);
        assert!(e.bounds().fuzzy_eq(&Rect::new(5.0, 17.0, 10.0, 6.0)));
        // flattened polygon area approaches the exact area
        let flat = e.area_opt(&FlattenOptions::new());
        assert!((flat - PI * 15.0).abs() < 0.05, "{flat}");
        assert!(e.fill_contains(point(10.0, 20.0)));
        assert!(!e.fill_contains(point(14.9, 22.9)));
    }

    #[test]
    fn ellipse_transformed_area() {
        let mut e = EllipseGeometry::new(point(0.0, 0.0), 2.0, 2.0);
        e.set_transform(Matrix::scaling(3.0, 1.0)).unwrap();
        assert_fuzzy_eq!(e.area(), PI * 12.0);
        assert_fuzzy_eq!(e.bounds().width, 12.0);
        // mirroring flips the determinant sign but not the area
        e.set_transform(Matrix::scaling(-3.0, 1.0)).unwrap();
        assert_fuzzy_eq!(e.area(), PI * 12.0);
    }

    #[test]
    fn rectangle_area() {
        let r = RectangleGeometry::new(Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_fuzzy_eq!(r.area(), 200.0);
        let rounded = RectangleGeometry::with_radii(Rect::new(0.0, 0.0, 10.0, 20.0), 2.0, 3.0);
        assert_fuzzy_eq!(rounded.area(), 200.0 - (4.0 - PI) * 6.0);
        assert!(rounded.bounds().fuzzy_eq(&Rect::new(0.0, 0.0, 10.0, 20.0)));
        let flat = rounded.area_opt(&FlattenOptions::new());
        assert!((flat - rounded.area()).abs() < 0.05, "{flat}");
        assert!(!rounded.fill_contains(point(0.1, 0.1)));
        assert!(rounded.fill_contains(point(5.0, 0.1)));
    }

    #[test]
    fn rectangle_radii_clamped() {
        let r = RectangleGeometry::with_radii(Rect::new(0.0, 0.0, 10.0, 10.0), 50.0, 50.0);
        // fully rounded into a circle of radius 5
        assert_fuzzy_eq!(r.area(), PI * 25.0);
    }

    #[test]
    fn degenerate_primitives() {
        let empty = RectangleGeometry::new(Rect::<f64>::empty());
        assert!(empty.is_empty());
        assert_eq!(empty.area(), 0.0);
        assert!(empty.figures().is_empty());

        let zero = EllipseGeometry::new(point(5.0, 5.0), 0.0, 0.0);
        assert_eq!(zero.area(), 0.0);
        assert!(zero.bounds().fuzzy_eq(&Rect::new(5.0, 5.0, 0.0, 0.0)));
        assert!(zero.figures()[0].is_point_like());

        let line = LineGeometry::new(point(0.0, 0.0), point(10.0, 10.0));
        assert_eq!(line.area(), 0.0);
        assert!(line.bounds().fuzzy_eq(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!line.fill_contains(point(5.0, 6.0)));
        assert!(line
            .stroke_contains(&crate::geometry::Pen::new(1.0), point(5.0, 5.2))
            .unwrap());
    }

    #[test]
    fn frozen_primitive() {
        let mut r = RectangleGeometry::new(Rect::new(0.0, 0.0, 1.0, 1.0));
        r.freeze();
        assert!(r.is_frozen());
        assert!(r.set_radius_x(1.0).is_err());
        assert_fuzzy_eq!(r.area(), 1.0);
    }
}
