use super::{
    parse_path_markup, CombinedGeometry, EllipseGeometry, FillRule, GeometryCache, GeometryGroup,
    GeometrySource, LineGeometry, PathFigure, PathGeometry, RectangleGeometry,
};
use crate::{
    core::{math::Matrix, traits::Real},
    GeometryError, GeometryResult,
};
use std::borrow::Cow;

/// Any geometry kind, used for the operands of [CombinedGeometry] and the children of
/// [GeometryGroup].
#[derive(Debug, Clone)]
pub enum Geometry<T = f64>
where
    T: Real,
{
    Path(PathGeometry<T>),
    Line(LineGeometry<T>),
    Ellipse(EllipseGeometry<T>),
    Rectangle(RectangleGeometry<T>),
    Combined(CombinedGeometry<T>),
    Group(GeometryGroup<T>),
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            Geometry::Path($g) => $body,
            Geometry::Line($g) => $body,
            Geometry::Ellipse($g) => $body,
            Geometry::Rectangle($g) => $body,
            Geometry::Combined($g) => $body,
            Geometry::Group($g) => $body,
        }
    };
}

impl<T> Geometry<T>
where
    T: Real,
{
    /// Parse path markup into a [Geometry::Path].
    #[inline]
    pub fn parse(markup: &str) -> GeometryResult<Self> {
        parse_path_markup(markup).map(Geometry::Path)
    }

    /// Freeze the geometry (and any nested geometries).
    pub fn freeze(&mut self) {
        dispatch!(self, g => g.freeze())
    }

    /// Set the transform of the geometry.
    pub fn set_transform(&mut self, transform: Matrix<T>) -> GeometryResult<()> {
        dispatch!(self, g => g.set_transform(transform))
    }
}

impl<T> GeometrySource for Geometry<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn fill_rule(&self) -> FillRule {
        dispatch!(self, g => g.fill_rule())
    }

    #[inline]
    fn transform(&self) -> Matrix<T> {
        dispatch!(self, g => g.transform())
    }

    #[inline]
    fn figures(&self) -> Cow<'_, [PathFigure<T>]> {
        dispatch!(self, g => g.figures())
    }

    #[inline]
    fn cache(&self) -> &GeometryCache<T> {
        dispatch!(self, g => g.cache())
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        dispatch!(self, g => g.is_frozen())
    }

    #[inline]
    fn exact_area(&self) -> Option<T> {
        dispatch!(self, g => g.exact_area())
    }

    #[inline]
    fn transformed_figures(&self) -> Vec<PathFigure<T>> {
        dispatch!(self, g => g.transformed_figures())
    }
}

impl<T> std::str::FromStr for Geometry<T>
where
    T: Real,
{
    type Err = GeometryError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident => $ty:ident),+) => {
        $(
            impl<T> From<$ty<T>> for Geometry<T>
            where
                T: Real,
            {
                #[inline]
                fn from(g: $ty<T>) -> Self {
                    Geometry::$variant(g)
                }
            }
        )+
    };
}

impl_from_kind!(
    Path => PathGeometry,
    Line => LineGeometry,
    Ellipse => EllipseGeometry,
    Rectangle => RectangleGeometry,
    Combined => CombinedGeometry,
    Group => GeometryGroup
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        math::{point, Rect},
        traits::FuzzyEq,
    };

    #[test]
    fn dispatches_to_kind() {
        let mut g: Geometry<f64> = EllipseGeometry::new(point(0.0, 0.0), 2.0, 1.0).into();
        assert_fuzzy_eq!(g.area(), 2.0 * std::f64::consts::PI);
        g.set_transform(Matrix::scaling(2.0, 2.0)).unwrap();
        assert_fuzzy_eq!(g.area(), 8.0 * std::f64::consts::PI);
        g.freeze();
        assert!(g.is_frozen());
        assert_eq!(
            g.set_transform(Matrix::identity()),
            Err(GeometryError::Frozen)
        );
    }

    #[test]
    fn parse_to_path() {
        let g: Geometry<f64> = "M0,0 L4,0 L4,4 z".parse().unwrap();
        assert!(matches!(g, Geometry::Path(_)));
        assert_fuzzy_eq!(g.area(), 8.0);
        assert!(g.bounds().fuzzy_eq(&Rect::new(0.0, 0.0, 4.0, 4.0)));
    }

    #[test]
    fn frozen_geometry_is_shareable() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Geometry<f64>>();

        let mut g: Geometry<f64> = RectangleGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0)).into();
        g.freeze();
        let g = std::sync::Arc::new(g);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let g = g.clone();
                std::thread::spawn(move || {
                    let p = point(i as f64 * 4.0, 5.0);
                    (g.area(), g.fill_contains(p))
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let (area, inside) = h.join().unwrap();
            assert_fuzzy_eq!(area, 100.0);
            assert_eq!(inside, i < 3);
        }
    }
}
