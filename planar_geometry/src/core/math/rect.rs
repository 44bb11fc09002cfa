use super::{Matrix, Point};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height pair.
///
/// Negative, NaN, or infinite values are representable and are treated as degenerate by the
/// geometries that consume them (never as an error).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Size<T = f64> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T>
where
    T: Real,
{
    #[inline]
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    /// Returns true if either dimension is zero, negative, NaN, or infinite.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > T::zero()
            && self.height > T::zero()
            && self.width.is_finite()
            && self.height.is_finite())
    }
}

/// Axis aligned rectangle defined by its top left corner (`x`, `y`) and extent.
///
/// [Rect::empty] is the distinguished "no extent" value (`x = y = +inf`, `width = height = -inf`)
/// and is not the same as a zero sized rectangle at the origin: union with empty yields the other
/// rectangle and intersection with empty yields empty.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// let empty: Rect = Rect::empty();
/// let zero = Rect::new(0.0, 0.0, 0.0, 0.0);
/// assert_ne!(empty, zero);
/// assert!(empty.is_empty());
/// assert!(!zero.is_empty());
///
/// let r = Rect::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(empty.union(&r), r);
/// assert!(empty.intersect(&r).is_empty());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Default for Rect<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Rect<T>
where
    T: Real,
{
    /// Create a new rectangle. A negative or NaN `width`/`height` yields [Rect::empty].
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        if !(width >= T::zero()) || !(height >= T::zero()) {
            return Self::empty();
        }

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing both points.
    #[inline]
    pub fn from_points(p1: Point<T>, p2: Point<T>) -> Self {
        let min = p1.min(p2);
        let max = p1.max(p2);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Rectangle with the given top left point and size.
    #[inline]
    pub fn from_origin_size(origin: Point<T>, size: Size<T>) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// The distinguished empty rectangle.
    #[inline]
    pub fn empty() -> Self {
        Rect {
            x: T::infinity(),
            y: T::infinity(),
            width: T::neg_infinity(),
            height: T::neg_infinity(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width >= T::zero())
    }

    #[inline]
    pub fn left(&self) -> T {
        self.x
    }

    #[inline]
    pub fn top(&self) -> T {
        self.y
    }

    #[inline]
    pub fn right(&self) -> T {
        if self.is_empty() {
            return T::neg_infinity();
        }
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> T {
        if self.is_empty() {
            return T::neg_infinity();
        }
        self.y + self.height
    }

    #[inline]
    pub fn top_left(&self) -> Point<T> {
        Point::new(self.left(), self.top())
    }

    #[inline]
    pub fn bottom_right(&self) -> Point<T> {
        Point::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn center(&self) -> Point<T> {
        Point::new(
            self.x + self.width * T::half(),
            self.y + self.height * T::half(),
        )
    }

    #[inline]
    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    /// Area of the rectangle (zero for empty).
    #[inline]
    pub fn area(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        self.width * self.height
    }

    /// Smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let left = num_traits::Float::min(self.left(), other.left());
        let top = num_traits::Float::min(self.top(), other.top());
        let right = num_traits::Float::max(self.right(), other.right());
        let bottom = num_traits::Float::max(self.bottom(), other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Smallest rectangle containing this rectangle and `point`.
    #[inline]
    pub fn union_point(&self, point: Point<T>) -> Self {
        self.union(&Rect::from_points(point, point))
    }

    /// Overlapping region of both rectangles. Touching rectangles yield a zero sized rectangle,
    /// disjoint rectangles yield empty.
    pub fn intersect(&self, other: &Self) -> Self {
        if !self.intersects_with(other) {
            return Self::empty();
        }

        let left = num_traits::Float::max(self.left(), other.left());
        let top = num_traits::Float::max(self.top(), other.top());
        let right = num_traits::Float::min(self.right(), other.right());
        let bottom = num_traits::Float::min(self.bottom(), other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Returns true if the rectangles overlap or touch.
    #[inline]
    pub fn intersects_with(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        other.left() <= self.right()
            && other.right() >= self.left()
            && other.top() <= self.bottom()
            && other.bottom() >= self.top()
    }

    /// Returns true if `point` lies inside or on the border of the rectangle.
    #[inline]
    pub fn contains_point(&self, point: Point<T>) -> bool {
        if self.is_empty() {
            return false;
        }

        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Returns true if `other` lies entirely within this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.contains_point(other.top_left()) && self.contains_point(other.bottom_right())
    }

    /// Grow (or shrink for negative values) the rectangle by `dx` on the left and right and `dy`
    /// on the top and bottom. Shrinking past zero extent yields empty.
    pub fn inflate(&self, dx: T, dy: T) -> Self {
        if self.is_empty() {
            return *self;
        }

        Rect::new(
            self.x - dx,
            self.y - dy,
            self.width + dx + dx,
            self.height + dy + dy,
        )
    }

    /// Axis aligned bounding box of the four transformed corners.
    pub fn transform(&self, matrix: &Matrix<T>) -> Self {
        if self.is_empty() || matrix.is_identity() {
            return *self;
        }

        let corners = [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ];

        corners
            .iter()
            .map(|&c| matrix.transform_point(c))
            .fold(Self::empty(), |acc, p| acc.union_point(p))
    }

    /// Fuzzy compare with another rectangle, two empty rectangles always compare equal.
    pub fn fuzzy_eq_eps(&self, other: &Self, eps: T) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }

        self.x.fuzzy_eq_eps(other.x, eps)
            && self.y.fuzzy_eq_eps(other.y, eps)
            && self.width.fuzzy_eq_eps(other.width, eps)
            && self.height.fuzzy_eq_eps(other.height, eps)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
