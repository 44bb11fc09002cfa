//! Fuzzy comparison of coordinate values.
//!
//! Coordinates produced by flattening, arc conversion, and boolean combination are rarely exactly
//! equal to hand computed values, so equality and ordering tests are made within an epsilon.
use num_traits::Float;

/// Fuzzy equality for floating point coordinates.
///
/// # Examples
///
/// ```
/// # use planar_geometry::core::traits::*;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
/// assert!(1e-10f64.fuzzy_eq_zero());
/// assert!(!1e-3f64.fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Float {
    /// Epsilon used by the comparisons that do not take one.
    fn fuzzy_epsilon() -> Self;

    /// `|self - other| < fuzzy_epsilon`.
    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
        (*self - other).abs() < fuzzy_epsilon
    }

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// `|self| < fuzzy_epsilon`.
    #[inline]
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
        self.abs() < fuzzy_epsilon
    }

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

impl FuzzyEq for f32 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1.0e-6
    }
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1.0e-8
    }
}

/// Fuzzy ordering, available for every [FuzzyEq] type.
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other - fuzzy_epsilon`.
    #[inline]
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
        *self + fuzzy_epsilon > other
    }

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// `self < other + fuzzy_epsilon`.
    #[inline]
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
        *self < other + fuzzy_epsilon
    }

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` lies in `[min, max]` widened by `fuzzy_epsilon` on both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geometry::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(!0.9f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(2.0f64.fuzzy_in_range(1.0, 2.0));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

impl<T> FuzzyOrd for T where T: FuzzyEq {}
