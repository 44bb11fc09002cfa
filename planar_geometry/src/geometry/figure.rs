use super::{Contour, CurvePiece, FlattenOptions, PathSegment};
use crate::core::{
    math::{Matrix, Point, Rect},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of segments drawn from a start point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathFigure<T = f64>
where
    T: Real,
{
    pub start_point: Point<T>,
    pub segments: Vec<PathSegment<T>>,
    /// If true an implicit line connects the last point back to the start point.
    pub is_closed: bool,
    /// If true the figure takes part in filling (area, fill hit-testing, and combination).
    pub is_filled: bool,
}

impl<T> PathFigure<T>
where
    T: Real,
{
    /// Create an open, filled figure without any segments.
    #[inline]
    pub fn new(start_point: Point<T>) -> Self {
        Self {
            start_point,
            segments: Vec::new(),
            is_closed: false,
            is_filled: true,
        }
    }

    #[inline]
    pub fn with_segments(
        start_point: Point<T>,
        segments: Vec<PathSegment<T>>,
        is_closed: bool,
    ) -> Self {
        Self {
            start_point,
            segments,
            is_closed,
            is_filled: true,
        }
    }

    /// Builder style append of a segment.
    #[inline]
    pub fn segment(mut self, segment: PathSegment<T>) -> Self {
        self.segments.push(segment);
        self
    }

    /// Builder style setter for [PathFigure::is_closed].
    #[inline]
    pub fn closed(mut self, is_closed: bool) -> Self {
        self.is_closed = is_closed;
        self
    }

    /// Builder style setter for [PathFigure::is_filled].
    #[inline]
    pub fn filled(mut self, is_filled: bool) -> Self {
        self.is_filled = is_filled;
        self
    }

    /// Last point reached by the segments (the start point if there are none).
    pub fn end_point(&self) -> Point<T> {
        self.segments
            .iter()
            .rev()
            .find_map(|s| s.end_point())
            .unwrap_or(self.start_point)
    }

    /// Returns true if any segment may contain curves.
    #[inline]
    pub fn may_have_curves(&self) -> bool {
        self.segments.iter().any(|s| s.is_curved())
    }

    /// Visit every curve piece of the figure along with the start point of the piece and the
    /// stroke flag of its segment.
    pub fn visit_pieces<F>(&self, mut visitor: F)
    where
        F: FnMut(Point<T>, &CurvePiece<T>, bool),
    {
        let mut current = self.start_point;
        let mut pieces = Vec::new();
        for seg in self.segments.iter() {
            pieces.clear();
            seg.append_pieces(current, &mut pieces);
            for piece in pieces.iter() {
                visitor(current, piece, seg.is_stroked);
                current = piece.end();
            }
        }
    }

    /// Exact bounds of the figure (empty bounds are never returned, a figure without segments
    /// yields the zero sized rectangle at the start point).
    pub fn bounds(&self) -> Rect<T> {
        let mut result = Rect::from_points(self.start_point, self.start_point);
        self.visit_pieces(|start, piece, _| result = result.union(&piece.bounds(start)));
        result
    }

    /// Flatten the figure into a [Contour].
    ///
    /// Consecutive duplicate points are skipped and, for closed figures, a last point equal to the
    /// start point is dropped (the implicit closing edge covers it).
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geometry::core::math::*;
    /// # use planar_geometry::geometry::*;
    /// # use planar_geometry::figure_closed;
    /// let figure = figure_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)];
    /// let contour = figure.flatten(&FlattenOptions::new());
    /// assert_eq!(contour.vertex_count(), 3);
    /// assert!(contour.signed_area() > 0.0);
    /// ```
    pub fn flatten(&self, options: &FlattenOptions<T>) -> Contour<T> {
        let mut contour = Contour::new(self.is_closed, self.is_filled);
        contour.add(self.start_point, false);
        let mut points = Vec::new();
        self.visit_pieces(|start, piece, is_stroked| {
            points.clear();
            piece.flatten_into(start, options, &mut points);
            for &p in points.iter() {
                let last = contour.vertexes.len() - 1;
                if contour.vertexes[last].pos == p {
                    continue;
                }
                contour.vertexes[last].is_stroked = is_stroked;
                contour.add(p, false);
            }
        });

        if self.is_closed {
            let n = contour.vertexes.len();
            if n > 1 && contour.vertexes[n - 1].pos == self.start_point {
                contour.vertexes.pop();
            } else {
                contour.vertexes[n - 1].is_stroked = true;
            }
        }

        contour
    }

    /// Return the figure transformed by `matrix`, see [PathSegment::transformed].
    pub fn transformed(&self, matrix: &Matrix<T>) -> Self {
        if matrix.is_identity() {
            return self.clone();
        }

        let mut current = self.start_point;
        let segments = self
            .segments
            .iter()
            .map(|s| {
                let t = s.transformed(current, matrix);
                if let Some(end) = s.end_point() {
                    current = end;
                }
                t
            })
            .collect();

        Self {
            start_point: matrix.transform_point(self.start_point),
            segments,
            is_closed: self.is_closed,
            is_filled: self.is_filled,
        }
    }

    /// Create a figure of straight lines from a flattened contour, consecutive edges with the same
    /// stroke flag are grouped into one poly line segment.
    pub fn from_contour(contour: &Contour<T>) -> Self {
        let mut figure = PathFigure::new(
            contour
                .vertexes
                .first()
                .map(|v| v.pos)
                .unwrap_or_else(Point::zero),
        )
        .closed(contour.is_closed)
        .filled(contour.is_filled);

        let mut run: Vec<Point<T>> = Vec::new();
        let mut run_stroked = true;
        let mut flush = |run: &mut Vec<Point<T>>, is_stroked: bool| {
            let seg = match run.len() {
                0 => return,
                1 => PathSegment::line(run[0]),
                _ => PathSegment::poly_line(std::mem::take(run)),
            };
            run.clear();
            figure.segments.push(seg.stroked(is_stroked));
        };

        for w in contour.vertexes.windows(2) {
            if !run.is_empty() && w[0].is_stroked != run_stroked {
                flush(&mut run, run_stroked);
            }
            run_stroked = w[0].is_stroked;
            run.push(w[1].pos);
        }
        flush(&mut run, run_stroked);

        figure
    }

    /// Returns true if the figure has no spatial extent (all points coincide).
    pub fn is_point_like(&self) -> bool {
        let b = self.bounds();
        b.width.fuzzy_eq_zero() && b.height.fuzzy_eq_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use crate::core::math::{point, Size};
    use crate::geometry::SweepDirection;

    #[test]
    fn stroke_flags_follow_segments() {
        let figure = PathFigure::new(point(0.0, 0.0))
            .segment(PathSegment::line(point(10.0, 0.0)))
            .segment(PathSegment::line(point(10.0, 10.0)).stroked(false))
            .segment(PathSegment::line(point(0.0, 10.0)))
            .closed(true);
        let contour = figure.flatten(&FlattenOptions::new());
        let flags: Vec<_> = contour.vertexes.iter().map(|v| v.is_stroked).collect();
        assert_eq!(flags, vec![true, false, true, true]);
    }

    #[test]
    fn open_figure_last_vertex_unstroked() {
        let figure = PathFigure::new(point(0.0, 0.0))
            .segment(PathSegment::line(point(10.0, 0.0)))
            .segment(PathSegment::line(point(10.0, 10.0)));
        let contour = figure.flatten(&FlattenOptions::new());
        assert_eq!(contour.vertex_count(), 3);
        assert!(!contour.vertexes[2].is_stroked);
        assert_eq!(contour.iter_stroke_edges().count(), 2);
    }

    #[test]
    fn half_circle_bounds() {
        let figure: PathFigure<f64> = PathFigure::new(point(0.0, 0.0)).segment(PathSegment::arc(
            point(10.0, 0.0),
            Size::new(5.0, 5.0),
            0.0,
            false,
            SweepDirection::Clockwise,
        ));
        let b = figure.bounds();
        assert!(b.x.fuzzy_eq(0.0));
        assert!(b.width.fuzzy_eq(10.0));
        assert!((b.height - 5.0).abs() < 0.01);
        assert!(figure.may_have_curves());
    }

    #[test]
    fn transform_moves_start_and_segments() {
        let figure = PathFigure::new(point(1.0, 1.0)).segment(PathSegment::line(point(2.0, 1.0)));
        let moved = figure.transformed(&Matrix::scaling(2.0, 3.0));
        assert_eq!(moved.start_point, point(2.0, 3.0));
        assert_eq!(moved.end_point(), point(4.0, 3.0));
    }
}
