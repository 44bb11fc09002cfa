use crate::{core::traits::Real, GeometryError, GeometryResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape drawn at the vertexes where two stroked segments meet.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PenLineJoin {
    /// Outer edges are extended until they meet, falls back to bevel past the miter limit.
    #[default]
    Miter,
    /// Outer corners are connected by a straight line.
    Bevel,
    /// Circular arc of radius half the pen thickness.
    Round,
}

/// Shape drawn at the ends of open stroked figures.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PenLineCap {
    /// Stroke ends exactly at the end point.
    #[default]
    Flat,
    /// Stroke extends past the end point by half the pen thickness.
    Square,
    /// Half disk of radius half the pen thickness centered at the end point.
    Round,
}

/// Stroke description used by widening, stroke hit-testing, and render bounds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen<T = f64>
where
    T: Real,
{
    pub thickness: T,
    pub line_join: PenLineJoin,
    pub start_line_cap: PenLineCap,
    pub end_line_cap: PenLineCap,
    /// Limit on the ratio of miter length to half the thickness.
    pub miter_limit: T,
}

impl<T> Pen<T>
where
    T: Real,
{
    pub fn new(thickness: T) -> Self {
        Self {
            thickness,
            line_join: PenLineJoin::Miter,
            start_line_cap: PenLineCap::Flat,
            end_line_cap: PenLineCap::Flat,
            miter_limit: T::cast_f64(10.0),
        }
    }

    #[inline]
    pub fn half_thickness(&self) -> T {
        self.thickness * T::half()
    }

    /// Returns an error if the thickness is negative, NaN, or infinite, or if the miter limit is
    /// NaN or less than 1.
    pub fn validate(&self) -> GeometryResult<()> {
        if !(self.thickness >= T::zero() && self.thickness.is_finite()) {
            return Err(GeometryError::InvalidArgument(format!(
                "pen thickness must be finite and non-negative, got {:?}",
                self.thickness
            )));
        }

        if !(self.miter_limit >= T::one()) {
            return Err(GeometryError::InvalidArgument(format!(
                "pen miter limit must be at least 1, got {:?}",
                self.miter_limit
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert!(Pen::new(2.0).validate().is_ok());
        assert!(Pen::new(0.0).validate().is_ok());
        assert!(Pen::new(-1.0).validate().is_err());
        assert!(Pen::new(f64::NAN).validate().is_err());
        assert!(Pen::new(f64::INFINITY).validate().is_err());

        let mut pen = Pen::new(1.0);
        pen.miter_limit = 0.5;
        assert!(matches!(
            pen.validate(),
            Err(GeometryError::InvalidArgument(_))
        ));
    }
}
