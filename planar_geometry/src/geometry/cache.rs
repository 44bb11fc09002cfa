use super::Contour;
use crate::core::{math::Rect, traits::Real};
use std::sync::OnceLock;

/// Lazily computed derived state of a geometry.
///
/// Slots are filled on first query and cleared by [GeometryCache::reset] whenever the owning
/// geometry is mutated. Once the geometry is frozen the cache only ever fills, so concurrent
/// queries from multiple threads are safe.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache<T>
where
    T: Real,
{
    flattened: OnceLock<Vec<Contour<T>>>,
    outline: OnceLock<Vec<Contour<T>>>,
    bounds: OnceLock<Rect<T>>,
}

impl<T> GeometryCache<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            flattened: OnceLock::new(),
            outline: OnceLock::new(),
            bounds: OnceLock::new(),
        }
    }

    /// Contours flattened at the default tolerance.
    #[inline]
    pub fn flattened<F>(&self, init: F) -> &[Contour<T>]
    where
        F: FnOnce() -> Vec<Contour<T>>,
    {
        self.flattened.get_or_init(init)
    }

    /// Fill rule resolved outline at the default tolerance.
    #[inline]
    pub fn outline<F>(&self, init: F) -> &[Contour<T>]
    where
        F: FnOnce() -> Vec<Contour<T>>,
    {
        self.outline.get_or_init(init)
    }

    /// Fill the outline slot with an already resolved outline, no effect if the outline has been
    /// computed before.
    #[inline]
    pub fn prime_outline(&self, outline: Vec<Contour<T>>) {
        let _ = self.outline.set(outline);
    }

    #[inline]
    pub fn bounds<F>(&self, init: F) -> Rect<T>
    where
        F: FnOnce() -> Rect<T>,
    {
        *self.bounds.get_or_init(init)
    }

    /// Clear all cached values.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns true if nothing has been computed yet.
    pub fn is_clear(&self) -> bool {
        self.flattened.get().is_none()
            && self.outline.get().is_none()
            && self.bounds.get().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_once_and_resets() {
        let mut cache = GeometryCache::<f64>::new();
        assert!(cache.is_clear());
        let b = cache.bounds(|| Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(b, Rect::new(0.0, 0.0, 1.0, 1.0));
        // second initializer is not run
        let b = cache.bounds(|| Rect::new(5.0, 5.0, 1.0, 1.0));
        assert_eq!(b, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(!cache.is_clear());
        cache.reset();
        assert!(cache.is_clear());
    }

    #[test]
    fn primed_outline_is_returned_without_computing() {
        let cache = GeometryCache::<f64>::new();
        let square = Contour::from_points([
            crate::core::math::point(0.0, 0.0),
            crate::core::math::point(1.0, 0.0),
            crate::core::math::point(1.0, 1.0),
        ]);
        cache.prime_outline(vec![square.clone()]);
        let outline = cache.outline(|| panic!("outline was primed"));
        assert_eq!(outline, &[square][..]);
        // priming again does not replace the outline
        cache.prime_outline(Vec::new());
        assert_eq!(cache.outline(Vec::new).len(), 1);
    }
}
