use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable 2D coordinate (also used as a 2D vector for differences and directions).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Real,
{
    /// Create a new point with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Create the origin point (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Uniformly scale the components by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        point(scale_factor * self.x, scale_factor * self.y)
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize to unit length. A zero length vector normalizes to NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Counter clockwise perpendicular (rotated 90 degrees).
    #[inline]
    pub fn perp(&self) -> Self {
        point(-self.y, self.x)
    }

    #[inline]
    pub fn unit_perp(&self) -> Self {
        self.perp().normalize()
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    #[inline]
    pub fn lerp(&self, other: Self, t: T) -> Self {
        *self + (other - *self).scale(t)
    }

    /// Component wise minimum.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        point(
            num_traits::Float::min(self.x, other.x),
            num_traits::Float::min(self.y, other.y),
        )
    }

    /// Component wise maximum.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        point(
            num_traits::Float::max(self.x, other.x),
            num_traits::Float::max(self.y, other.y),
        )
    }

    /// Returns true if neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Shorthand for [Point::new].
#[inline(always)]
pub fn point<T>(x: T, y: T) -> Point<T>
where
    T: Real,
{
    Point::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            #[inline]
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Point<T>> for Point<T> {
            type Output = Point<T>;
            #[inline]
            fn $op_func(self, rhs: &Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Point<T>> for &Point<T> {
            type Output = Point<T>;
            #[inline]
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Mul<T> for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn ops() {
        let p1 = point(4.0, 5.0);
        let p2 = point(1.0, 2.0);
        assert!((p1 + p2).fuzzy_eq(point(5.0, 7.0)));
        assert!((&p1 - p2).fuzzy_eq(point(3.0, 3.0)));
        assert!((p1 - &p2).fuzzy_eq(point(3.0, 3.0)));
        assert!((-p2).fuzzy_eq(point(-1.0, -2.0)));
        assert!((p2 * 3.0).fuzzy_eq(point(3.0, 6.0)));
    }

    #[test]
    fn perp_and_length() {
        let v = point(3.0, 4.0);
        assert!(v.length().fuzzy_eq(5.0));
        assert!(v.perp().fuzzy_eq(point(-4.0, 3.0)));
        assert!(v.perp_dot(v.perp()).fuzzy_eq(25.0));
        assert!(v.unit_perp().length().fuzzy_eq(1.0));
    }

    #[test]
    fn finiteness() {
        assert!(point(1.0, 2.0).is_finite());
        assert!(!point(f64::NAN, 2.0).is_finite());
        assert!(!point(1.0, f64::INFINITY).is_finite());
    }
}
