use super::{
    path_geometry::ensure_mutable, FillRule, Geometry, GeometryCache, GeometrySource, PathFigure,
};
use crate::{
    core::{math::Matrix, traits::Real},
    GeometryError, GeometryResult,
};
use std::borrow::Cow;

/// Ordered collection of child geometries filled together under one fill rule.
///
/// The figures of all children (with their own transforms applied) are treated as the figures of
/// a single path, so overlapping children cancel under [FillRule::EvenOdd] and merge under
/// [FillRule::NonZero].
#[derive(Debug, Clone, Default)]
pub struct GeometryGroup<T = f64>
where
    T: Real,
{
    children: Vec<Geometry<T>>,
    fill_rule: FillRule,
    transform: Matrix<T>,
    frozen: bool,
    cache: GeometryCache<T>,
}

impl<T> GeometryGroup<T>
where
    T: Real,
{
    /// Create an empty group with the [FillRule::EvenOdd] fill rule.
    #[inline]
    pub fn new() -> Self {
        Self::with_children(Vec::new(), FillRule::EvenOdd)
    }

    #[inline]
    pub fn with_children(children: Vec<Geometry<T>>, fill_rule: FillRule) -> Self {
        Self {
            children,
            fill_rule,
            transform: Matrix::identity(),
            frozen: false,
            cache: GeometryCache::new(),
        }
    }

    #[inline]
    pub fn children(&self) -> &[Geometry<T>] {
        &self.children
    }

    pub fn add_child(&mut self, child: impl Into<Geometry<T>>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.children.push(child.into());
        self.cache.reset();
        Ok(())
    }

    pub fn remove_child(&mut self, index: usize) -> GeometryResult<Geometry<T>> {
        ensure_mutable(self.frozen)?;
        let len = self.children.len();
        if index >= len {
            return Err(GeometryError::IndexOutOfRange { index, len });
        }

        self.cache.reset();
        Ok(self.children.remove(index))
    }

    pub fn clear(&mut self) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.children.clear();
        self.cache.reset();
        Ok(())
    }

    pub fn set_fill_rule(&mut self, fill_rule: FillRule) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.fill_rule = fill_rule;
        self.cache.reset();
        Ok(())
    }

    pub fn set_transform(&mut self, transform: Matrix<T>) -> GeometryResult<()> {
        ensure_mutable(self.frozen)?;
        self.transform = transform;
        self.cache.reset();
        Ok(())
    }

    /// Freeze this group and all children.
    pub fn freeze(&mut self) {
        for c in self.children.iter_mut() {
            c.freeze();
        }
        self.frozen = true;
    }
}

impl<T> GeometrySource for GeometryGroup<T>
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

    fn figures(&self) -> Cow<'_, [PathFigure<T>]> {
        Cow::Owned(
            self.children
                .iter()
                .flat_map(|c| c.transformed_figures())
                .collect(),
        )
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
