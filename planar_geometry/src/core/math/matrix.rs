use super::Point;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D affine transform using the row vector convention:
///
/// ```text
/// [x' y' 1] = [x y 1] * | m11      m12      0 |
///                       | m21      m22      0 |
///                       | offset_x offset_y 1 |
/// ```
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::math::*;
/// let m = Matrix::translation(10.0, 0.0).append(&Matrix::scaling(2.0, 2.0));
/// // translate first then scale
/// assert!(m.transform_point(point(1.0, 1.0)).fuzzy_eq(point(22.0, 2.0)));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    pub m11: T,
    pub m12: T,
    pub m21: T,
    pub m22: T,
    pub offset_x: T,
    pub offset_y: T,
}

impl<T> Default for Matrix<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Matrix<T>
where
    T: Real,
{
    #[inline]
    pub fn new(m11: T, m12: T, m21: T, m22: T, offset_x: T, offset_y: T) -> Self {
        Matrix {
            m11,
            m12,
            m21,
            m22,
            offset_x,
            offset_y,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            T::one(),
            T::zero(),
            T::zero(),
            T::one(),
            T::zero(),
            T::zero(),
        )
    }

    #[inline]
    pub fn translation(dx: T, dy: T) -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), dx, dy)
    }

    #[inline]
    pub fn scaling(sx: T, sy: T) -> Self {
        Self::new(sx, T::zero(), T::zero(), sy, T::zero(), T::zero())
    }

    /// Scale about the point (`cx`, `cy`).
    #[inline]
    pub fn scaling_at(sx: T, sy: T, cx: T, cy: T) -> Self {
        Self::new(
            sx,
            T::zero(),
            T::zero(),
            sy,
            cx - sx * cx,
            cy - sy * cy,
        )
    }

    /// Rotation by `angle_degrees` (positive angles rotate x toward y).
    #[inline]
    pub fn rotation(angle_degrees: T) -> Self {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        Self::new(c, s, -s, c, T::zero(), T::zero())
    }

    /// Rotation by `angle_degrees` about the point (`cx`, `cy`).
    #[inline]
    pub fn rotation_at(angle_degrees: T, cx: T, cy: T) -> Self {
        Self::translation(-cx, -cy)
            .append(&Self::rotation(angle_degrees))
            .append(&Self::translation(cx, cy))
    }

    /// Returns the transform that applies `self` followed by `other`.
    pub fn append(&self, other: &Self) -> Self {
        Self::new(
            self.m11 * other.m11 + self.m12 * other.m21,
            self.m11 * other.m12 + self.m12 * other.m22,
            self.m21 * other.m11 + self.m22 * other.m21,
            self.m21 * other.m12 + self.m22 * other.m22,
            self.offset_x * other.m11 + self.offset_y * other.m21 + other.offset_x,
            self.offset_x * other.m12 + self.offset_y * other.m22 + other.offset_y,
        )
    }

    /// Returns the transform that applies `other` followed by `self`.
    #[inline]
    pub fn prepend(&self, other: &Self) -> Self {
        other.append(self)
    }

    #[inline]
    pub fn transform_point(&self, p: Point<T>) -> Point<T> {
        Point::new(
            p.x * self.m11 + p.y * self.m21 + self.offset_x,
            p.x * self.m12 + p.y * self.m22 + self.offset_y,
        )
    }

    /// Transform a direction vector (offsets are ignored).
    #[inline]
    pub fn transform_vector(&self, v: Point<T>) -> Point<T> {
        Point::new(
            v.x * self.m11 + v.y * self.m21,
            v.x * self.m12 + v.y * self.m22,
        )
    }

    #[inline]
    pub fn determinant(&self) -> T {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// Inverse transform, `None` if the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det.fuzzy_eq_zero() || !det.is_finite() {
            return None;
        }

        let inv = T::one() / det;
        Some(Self::new(
            self.m22 * inv,
            -self.m12 * inv,
            -self.m21 * inv,
            self.m11 * inv,
            (self.m21 * self.offset_y - self.m22 * self.offset_x) * inv,
            (self.m12 * self.offset_x - self.m11 * self.offset_y) * inv,
        ))
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
