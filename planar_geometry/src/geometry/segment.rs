use super::{arc_to_beziers, ArcApproximation, CurvePiece, FlattenOptions, SweepDirection};
use crate::core::{
    math::{Matrix, Point, Size},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segment geometry, each variant is drawn from the end point of the previous segment (or the figure
/// start point).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentData<T = f64>
where
    T: Real,
{
    /// Straight line to `point`.
    Line { point: Point<T> },
    /// Elliptical arc to `point`, `rotation_angle` is the ellipse x axis rotation in degrees.
    Arc {
        point: Point<T>,
        size: Size<T>,
        rotation_angle: T,
        is_large_arc: bool,
        sweep_direction: SweepDirection,
    },
    /// Cubic bezier with control points `point1` and `point2` ending at `point3`.
    Bezier {
        point1: Point<T>,
        point2: Point<T>,
        point3: Point<T>,
    },
    /// Quadratic bezier with control point `point1` ending at `point2`.
    QuadraticBezier { point1: Point<T>, point2: Point<T> },
    /// Connected straight lines through each point.
    PolyLine { points: Vec<Point<T>> },
    /// Connected cubic beziers, each consecutive group of three points is one curve. An incomplete
    /// trailing group is ignored.
    PolyBezier { points: Vec<Point<T>> },
    /// Connected quadratic beziers, each consecutive pair of points is one curve. An incomplete
    /// trailing pair is ignored.
    PolyQuadraticBezier { points: Vec<Point<T>> },
}

/// A path segment with its stroke flags.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment<T = f64>
where
    T: Real,
{
    pub data: SegmentData<T>,
    /// If false the segment is excluded from stroking (widening and stroke hit-testing), it still
    /// takes part in filling.
    pub is_stroked: bool,
    /// Tangent continuity hint with the previous segment, has no effect on the computed geometry.
    pub is_smooth_join: bool,
}

impl<T> PathSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(data: SegmentData<T>) -> Self {
        Self {
            data,
            is_stroked: true,
            is_smooth_join: false,
        }
    }

    #[inline]
    pub fn line(point: Point<T>) -> Self {
        Self::new(SegmentData::Line { point })
    }

    #[inline]
    pub fn arc(
        point: Point<T>,
        size: Size<T>,
        rotation_angle: T,
        is_large_arc: bool,
        sweep_direction: SweepDirection,
    ) -> Self {
        Self::new(SegmentData::Arc {
            point,
            size,
            rotation_angle,
            is_large_arc,
            sweep_direction,
        })
    }

    #[inline]
    pub fn bezier(point1: Point<T>, point2: Point<T>, point3: Point<T>) -> Self {
        Self::new(SegmentData::Bezier {
            point1,
            point2,
            point3,
        })
    }

    #[inline]
    pub fn quadratic_bezier(point1: Point<T>, point2: Point<T>) -> Self {
        Self::new(SegmentData::QuadraticBezier { point1, point2 })
    }

    #[inline]
    pub fn poly_line(points: Vec<Point<T>>) -> Self {
        Self::new(SegmentData::PolyLine { points })
    }

    #[inline]
    pub fn poly_bezier(points: Vec<Point<T>>) -> Self {
        Self::new(SegmentData::PolyBezier { points })
    }

    #[inline]
    pub fn poly_quadratic_bezier(points: Vec<Point<T>>) -> Self {
        Self::new(SegmentData::PolyQuadraticBezier { points })
    }

    /// Builder style setter for [PathSegment::is_stroked].
    #[inline]
    pub fn stroked(mut self, is_stroked: bool) -> Self {
        self.is_stroked = is_stroked;
        self
    }

    /// Builder style setter for [PathSegment::is_smooth_join].
    #[inline]
    pub fn smooth_join(mut self, is_smooth_join: bool) -> Self {
        self.is_smooth_join = is_smooth_join;
        self
    }

    /// Returns true if the segment kind may contain curves.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geometry::core::math::*;
    /// # use planar_geometry::geometry::*;
    /// assert!(!PathSegment::line(point(1.0, 1.0)).is_curved());
    /// assert!(PathSegment::quadratic_bezier(point(1.0, 1.0), point(2.0, 0.0)).is_curved());
    /// ```
    #[inline]
    pub fn is_curved(&self) -> bool {
        !matches!(
            self.data,
            SegmentData::Line { .. } | SegmentData::PolyLine { .. }
        )
    }

    /// End point of the segment, `None` for a poly segment without any complete curve.
    pub fn end_point(&self) -> Option<Point<T>> {
        match &self.data {
            SegmentData::Line { point } | SegmentData::Arc { point, .. } => Some(*point),
            SegmentData::Bezier { point3, .. } => Some(*point3),
            SegmentData::QuadraticBezier { point2, .. } => Some(*point2),
            SegmentData::PolyLine { points } => points.last().copied(),
            SegmentData::PolyBezier { points } => {
                let n = points.len() / 3 * 3;
                if n == 0 {
                    None
                } else {
                    Some(points[n - 1])
                }
            }
            SegmentData::PolyQuadraticBezier { points } => {
                let n = points.len() / 2 * 2;
                if n == 0 {
                    None
                } else {
                    Some(points[n - 1])
                }
            }
        }
    }

    /// Decompose the segment starting at `start` into line, quadratic, and cubic pieces, appending
    /// them to `out`. Arcs are converted to cubic beziers, degenerate arcs to a line (or nothing
    /// when start and end coincide).
    pub fn append_pieces(&self, start: Point<T>, out: &mut Vec<CurvePiece<T>>) {
        match &self.data {
            SegmentData::Line { point } => out.push(CurvePiece::Line { end: *point }),
            SegmentData::Arc {
                point,
                size,
                rotation_angle,
                is_large_arc,
                sweep_direction,
            } => match arc_to_beziers(
                start,
                *point,
                *size,
                *rotation_angle,
                *is_large_arc,
                *sweep_direction,
            ) {
                ArcApproximation::Point => {}
                ArcApproximation::Line => out.push(CurvePiece::Line { end: *point }),
                ArcApproximation::Curves(spans) => {
                    out.extend(spans.iter().map(|s| CurvePiece::Cubic {
                        control1: s[0],
                        control2: s[1],
                        end: s[2],
                    }));
                }
            },
            SegmentData::Bezier {
                point1,
                point2,
                point3,
            } => out.push(CurvePiece::Cubic {
                control1: *point1,
                control2: *point2,
                end: *point3,
            }),
            SegmentData::QuadraticBezier { point1, point2 } => out.push(CurvePiece::Quadratic {
                control: *point1,
                end: *point2,
            }),
            SegmentData::PolyLine { points } => {
                out.extend(points.iter().map(|&end| CurvePiece::Line { end }))
            }
            SegmentData::PolyBezier { points } => {
                out.extend(points.chunks_exact(3).map(|c| CurvePiece::Cubic {
                    control1: c[0],
                    control2: c[1],
                    end: c[2],
                }))
            }
            SegmentData::PolyQuadraticBezier { points } => {
                out.extend(points.chunks_exact(2).map(|c| CurvePiece::Quadratic {
                    control: c[0],
                    end: c[1],
                }))
            }
        }
    }

    /// Flatten the segment starting at `start` into points (not including `start`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geometry::core::math::*;
    /// # use planar_geometry::geometry::*;
    /// let seg = PathSegment::poly_line(vec![point(1.0, 0.0), point(1.0, 1.0)]);
    /// let points = seg.flatten(point(0.0, 0.0), &FlattenOptions::new());
    /// assert_eq!(points, vec![point(1.0, 0.0), point(1.0, 1.0)]);
    /// ```
    pub fn flatten(&self, start: Point<T>, options: &FlattenOptions<T>) -> Vec<Point<T>> {
        let mut pieces = Vec::new();
        self.append_pieces(start, &mut pieces);
        let mut result = Vec::new();
        let mut current = start;
        for piece in pieces {
            piece.flatten_into(current, options, &mut result);
            current = piece.end();
        }

        result
    }

    /// Return the segment transformed by `matrix`, the segment starts at `start` (untransformed).
    ///
    /// Arcs are kept as arcs under pure translation, otherwise they are converted to a poly bezier
    /// since a general affine transform does not map the arc parameters directly.
    pub fn transformed(&self, start: Point<T>, matrix: &Matrix<T>) -> Self {
        let tp = |p: &Point<T>| matrix.transform_point(*p);
        let data = match &self.data {
            SegmentData::Line { point } => SegmentData::Line { point: tp(point) },
            SegmentData::Arc {
                point,
                size,
                rotation_angle,
                is_large_arc,
                sweep_direction,
            } if is_translation(matrix) => SegmentData::Arc {
                point: tp(point),
                size: *size,
                rotation_angle: *rotation_angle,
                is_large_arc: *is_large_arc,
                sweep_direction: *sweep_direction,
            },
            SegmentData::Arc { point, .. } => {
                let mut pieces = Vec::new();
                self.append_pieces(start, &mut pieces);
                if !pieces.is_empty()
                    && pieces.iter().all(|p| matches!(p, CurvePiece::Cubic { .. }))
                {
                    let mut points = Vec::with_capacity(pieces.len() * 3);
                    for p in pieces {
                        if let CurvePiece::Cubic {
                            control1,
                            control2,
                            end,
                        } = p
                        {
                            points.extend([tp(&control1), tp(&control2), tp(&end)]);
                        }
                    }
                    SegmentData::PolyBezier { points }
                } else {
                    SegmentData::Line { point: tp(point) }
                }
            }
            SegmentData::Bezier {
                point1,
                point2,
                point3,
            } => SegmentData::Bezier {
                point1: tp(point1),
                point2: tp(point2),
                point3: tp(point3),
            },
            SegmentData::QuadraticBezier { point1, point2 } => SegmentData::QuadraticBezier {
                point1: tp(point1),
                point2: tp(point2),
            },
            SegmentData::PolyLine { points } => SegmentData::PolyLine {
                points: points.iter().map(tp).collect(),
            },
            SegmentData::PolyBezier { points } => SegmentData::PolyBezier {
                points: points.iter().map(tp).collect(),
            },
            SegmentData::PolyQuadraticBezier { points } => SegmentData::PolyQuadraticBezier {
                points: points.iter().map(tp).collect(),
            },
        };

        Self {
            data,
            is_stroked: self.is_stroked,
            is_smooth_join: self.is_smooth_join,
        }
    }
}

#[inline]
fn is_translation<T>(matrix: &Matrix<T>) -> bool
where
    T: Real,
{
    matrix.m11 == T::one()
        && matrix.m12 == T::zero()
        && matrix.m21 == T::zero()
        && matrix.m22 == T::one()
}
