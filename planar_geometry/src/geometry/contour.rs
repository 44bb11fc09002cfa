//! Flattened polygon representation shared by area, bounds, hit-testing, and combination.
use crate::core::{
    math::{dist_squared, is_left, line_seg_closest_point, Point, Rect},
    traits::Real,
};
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex of a [Contour].
///
/// `is_stroked` describes the edge that starts at this vertex (going to the next vertex).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContourVertex<T = f64>
where
    T: Real,
{
    pub pos: Point<T>,
    pub is_stroked: bool,
}

impl<T> ContourVertex<T>
where
    T: Real,
{
    #[inline]
    pub fn new(pos: Point<T>, is_stroked: bool) -> Self {
        Self { pos, is_stroked }
    }
}

/// Flattened figure: a polygon with per edge stroke flags.
///
/// For fill purposes (area, winding number, combination) a contour is always treated as closed
/// (an open figure is filled as if closed with a straight line). `is_closed` only affects which
/// edges are stroked.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour<T = f64>
where
    T: Real,
{
    pub vertexes: Vec<ContourVertex<T>>,
    pub is_closed: bool,
    pub is_filled: bool,
}

impl<T> Contour<T>
where
    T: Real,
{
    #[inline]
    pub fn new(is_closed: bool, is_filled: bool) -> Self {
        Self {
            vertexes: Vec::new(),
            is_closed,
            is_filled,
        }
    }

    /// Create a closed, filled, fully stroked contour from polygon points.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point<T>>,
    {
        Self {
            vertexes: points
                .into_iter()
                .map(|p| ContourVertex::new(p, true))
                .collect(),
            is_closed: true,
            is_filled: true,
        }
    }

    #[inline]
    pub fn add(&mut self, pos: Point<T>, is_stroked: bool) {
        self.vertexes.push(ContourVertex::new(pos, is_stroked));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertexes.is_empty()
    }

    #[inline]
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.vertexes.iter().map(|v| v.pos)
    }

    /// Returns true if all vertex positions are finite.
    pub fn is_finite(&self) -> bool {
        self.vertexes.iter().all(|v| v.pos.is_finite())
    }

    /// Iterate all edges of the implicitly closed polygon as `(start, end)` pairs.
    pub fn iter_fill_edges(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let n = self.vertexes.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.vertexes[i].pos, self.vertexes[(i + 1) % n].pos))
    }

    /// Iterate the stroked edges as `(start, end)` pairs, the closing edge is only included if
    /// [Contour::is_closed] is true. A single vertex contour yields one zero length edge so it can
    /// still be hit by a stroke.
    pub fn iter_stroke_edges(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let n = self.vertexes.len();
        let count = match n {
            0 => 0,
            1 => 1,
            _ if self.is_closed => n,
            _ => n - 1,
        };

        (0..count).filter_map(move |i| {
            let v1 = self.vertexes[i];
            if !v1.is_stroked && n > 1 {
                return None;
            }
            Some((v1.pos, self.vertexes[(i + 1) % n].pos))
        })
    }

    /// Compute the signed area of the implicitly closed polygon using the shoelace formula.
    ///
    /// Counter clockwise (y axis up) contours have positive area.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geometry::core::math::*;
    /// # use planar_geometry::geometry::*;
    /// let c = Contour::from_points([point(0.0, 0.0), point(2.0, 0.0), point(2.0, 3.0)]);
    /// assert_eq!(c.signed_area(), 3.0);
    /// let c = Contour::from_points([point(2.0, 3.0), point(2.0, 0.0), point(0.0, 0.0)]);
    /// assert_eq!(c.signed_area(), -3.0);
    /// ```
    pub fn signed_area(&self) -> T {
        // https://en.wikipedia.org/wiki/Shoelace_formula
        let double_total_area = self
            .iter_fill_edges()
            .fold(T::zero(), |acc, (v1, v2)| acc + v1.x * v2.y - v1.y * v2.x);

        double_total_area / T::two()
    }

    /// Calculate the winding number for a `point` relative to the implicitly closed polygon.
    ///
    /// Uses a half open crossing rule so a point exactly at a vertex height is counted once. If the
    /// point lies directly on an edge the result is not defined, use [Contour::distance_to_edges]
    /// to detect that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geometry::core::math::*;
    /// # use planar_geometry::geometry::*;
    /// let c = Contour::from_points([
    ///     point(0.0, 0.0),
    ///     point(2.0, 0.0),
    ///     point(2.0, 2.0),
    ///     point(0.0, 2.0),
    /// ]);
    /// assert_eq!(c.winding_number(point(1.0, 1.0)), 1);
    /// assert_eq!(c.winding_number(point(3.0, 1.0)), 0);
    /// ```
    pub fn winding_number(&self, point: Point<T>) -> i32 {
        self.iter_fill_edges()
            .map(|(v1, v2)| edge_winding(v1, v2, point))
            .sum()
    }

    /// Axis aligned bounding box of all vertexes, empty if there are no vertexes.
    pub fn extents(&self) -> Rect<T> {
        self.vertexes
            .iter()
            .fold(Rect::empty(), |acc, v| acc.union_point(v.pos))
    }

    /// Shortest distance from `point` to the polygon edges (all fill edges, or only the stroked
    /// edges when `stroked_only` is true). Returns infinity if there are no edges.
    pub fn distance_to_edges(&self, point: Point<T>, stroked_only: bool) -> T {
        let closest = |acc: T, (v1, v2): (Point<T>, Point<T>)| {
            let cp = line_seg_closest_point(v1, v2, point);
            num_traits::Float::min(acc, dist_squared(cp, point))
        };

        let dist2 = if stroked_only {
            self.iter_stroke_edges().fold(T::infinity(), closest)
        } else if self.vertexes.len() == 1 {
            dist_squared(self.vertexes[0].pos, point)
        } else {
            self.iter_fill_edges().fold(T::infinity(), closest)
        };

        dist2.sqrt()
    }

    /// Remove consecutive vertexes (including last to first) that are within `pos_equal_eps` of
    /// each other.
    pub fn remove_repeat_positions(&mut self, pos_equal_eps: T) {
        self.vertexes
            .dedup_by(|b, a| a.pos.fuzzy_eq_eps(b.pos, pos_equal_eps));
        while self.vertexes.len() > 1 {
            let first = self.vertexes[0].pos;
            let last = self.vertexes[self.vertexes.len() - 1].pos;
            if !first.fuzzy_eq_eps(last, pos_equal_eps) {
                break;
            }
            self.vertexes.pop();
        }
    }

    /// Creates a spatial index of all the fill edges, the edge start vertex index is the key.
    pub fn create_aabb_index(&self) -> StaticAABB2DIndex<T> {
        let n = self.vertexes.len();
        if n < 2 {
            return unwrap_spatial_index(StaticAABB2DIndexBuilder::new(0));
        }

        let mut builder = StaticAABB2DIndexBuilder::new(n);
        for (v1, v2) in self.iter_fill_edges() {
            builder.add(
                num_traits::Float::min(v1.x, v2.x),
                num_traits::Float::min(v1.y, v2.y),
                num_traits::Float::max(v1.x, v2.x),
                num_traits::Float::max(v1.y, v2.y),
            );
        }

        unwrap_spatial_index(builder)
    }
}

/// Winding number contribution of the edge `v1 -> v2` for `point`.
#[inline]
pub(crate) fn edge_winding<T>(v1: Point<T>, v2: Point<T>, point: Point<T>) -> i32
where
    T: Real,
{
    if v1.y <= point.y {
        if v2.y > point.y && is_left(v1, v2, point) {
            // left and upward crossing
            return 1;
        }
    } else if v2.y <= point.y && !is_left(v1, v2, point) {
        // right and downward crossing
        return -1;
    }

    0
}

pub(crate) fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast numeric type: {e}")
            }
        },
    }
}
