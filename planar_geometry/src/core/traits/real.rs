use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate type.
///
/// Bundles floating point math (including NaN/infinity handling, which degenerate geometry relies
/// on), fuzzy comparison, and the bounds required to load values into a
/// [static_aabb2d_index::StaticAABB2DIndex]. Implemented for `f32` and `f64`.
pub trait Real:
    num_traits::Float
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::cast_f64(std::f64::consts::PI)
    }

    #[inline]
    fn tau() -> Self {
        Self::cast_f64(std::f64::consts::TAU)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Convert an `f64` literal into `Self`, yielding NaN if the value cannot be represented.
    #[inline]
    fn cast_f64(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Lossy conversion to `f64` (NaN if the value cannot be represented).
    #[inline]
    fn as_f64(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn cast_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
