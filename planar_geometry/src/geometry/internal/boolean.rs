//! Boolean combination of filled regions over flattened contours.
//!
//! Each operand is first resolved into its outline: every edge is split at all self intersects,
//! coincident vertexes are merged, each sub edge is classified by sampling the fill membership just
//! left and right of it, and the edges separating filled from unfilled space are stitched into
//! closed loops (oriented so filled space is on the left).
//!
//! Two outlines are then combined the same way, except only loops touching or crossing the other
//! operand are split and sampled. Loops without intersects are classified whole from one
//! containment test.
//!
//! Output loops never cross, outer loops are counter clockwise (positive area) and holes are
//! clockwise, so the result can be filled with either fill rule.
use crate::{
    core::{
        math::{line_dist, line_line_intr, LineLineIntr, Point, Rect},
        traits::Real,
    },
    geometry::{contour::edge_winding, contour::unwrap_spatial_index, Contour, FillRule},
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};
use std::collections::HashMap;

/// Operand of a boolean operation: contours filled under a fill rule.
#[derive(Debug, Copy, Clone)]
pub struct FillRegion<'a, T>
where
    T: Real,
{
    pub contours: &'a [Contour<T>],
    pub fill_rule: FillRule,
}

impl<'a, T> FillRegion<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new(contours: &'a [Contour<T>], fill_rule: FillRule) -> Self {
        Self {
            contours,
            fill_rule,
        }
    }
}

/// Convert a relative position epsilon into an absolute one for the `regions` given.
pub fn absolute_pos_eps<T>(regions: &[FillRegion<T>], relative_eps: T) -> T
where
    T: Real,
{
    let max_coord = regions
        .iter()
        .flat_map(|r| r.contours.iter())
        .flat_map(|c| c.points())
        .filter(|p| p.is_finite())
        .fold(T::one(), |acc, p| {
            num_traits::Float::max(acc, num_traits::Float::max(p.x.abs(), p.y.abs()))
        });

    relative_eps * max_coord
}

/// Filled edges of one operand with a spatial index for fast winding number queries.
struct Operand<T>
where
    T: Real,
{
    edges: Vec<(Point<T>, Point<T>)>,
    index: StaticAABB2DIndex<T>,
    extents: Rect<T>,
    fill_rule: FillRule,
}

impl<T> Operand<T>
where
    T: Real,
{
    fn new(region: &FillRegion<T>, pos_equal_eps: T) -> Self {
        let mut edges = Vec::new();
        for c in region.contours.iter() {
            if !c.is_filled || c.vertex_count() < 3 || !c.is_finite() {
                continue;
            }

            let c_extents = c.extents();
            if c_extents.width <= pos_equal_eps || c_extents.height <= pos_equal_eps {
                // no fill area
                continue;
            }

            edges.extend(c.iter_fill_edges().filter(|(v1, v2)| v1 != v2));
        }

        Self::from_edges(edges, region.fill_rule)
    }

    fn from_edges(edges: Vec<(Point<T>, Point<T>)>, fill_rule: FillRule) -> Self {
        let mut extents = Rect::empty();
        let mut builder = StaticAABB2DIndexBuilder::new(edges.len());
        for &(v1, v2) in edges.iter() {
            let edge_extents = Rect::from_points(v1, v2);
            extents = extents.union(&edge_extents);
            builder.add(
                edge_extents.left(),
                edge_extents.top(),
                edge_extents.right(),
                edge_extents.bottom(),
            );
        }

        Self {
            edges,
            index: unwrap_spatial_index(builder),
            extents,
            fill_rule,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn contains(&self, point: Point<T>, query_stack: &mut Vec<usize>) -> bool {
        if !self.extents.contains_point(point) {
            return false;
        }

        let mut winding = 0;
        let mut query_visitor = |i: usize| {
            let (v1, v2) = self.edges[i];
            winding += edge_winding(v1, v2, point);
        };

        // only edges crossing the horizontal ray going right contribute
        self.index.visit_query_with_stack(
            point.x,
            point.y,
            self.extents.right(),
            point.y,
            &mut query_visitor,
            query_stack,
        );

        self.fill_rule.is_inside(winding)
    }
}

/// Loops of a fill rule resolved outline (kept space left of every edge) with their extents.
struct OutlineLoops<T>
where
    T: Real,
{
    loops: Vec<Vec<Point<T>>>,
    loop_extents: Vec<Rect<T>>,
    extents: Rect<T>,
}

impl<T> OutlineLoops<T>
where
    T: Real,
{
    fn new(outline: &[Contour<T>]) -> Self {
        let mut loops = Vec::new();
        let mut loop_extents = Vec::new();
        let mut extents = Rect::empty();
        for c in outline.iter() {
            if !c.is_filled || c.vertex_count() < 3 || !c.is_finite() {
                continue;
            }

            let points: Vec<Point<T>> = c
                .iter_fill_edges()
                .filter(|(v1, v2)| v1 != v2)
                .map(|(v1, _)| v1)
                .collect();
            if points.len() < 3 {
                continue;
            }

            let c_extents = c.extents();
            extents = extents.union(&c_extents);
            loops.push(points);
            loop_extents.push(c_extents);
        }

        Self {
            loops,
            loop_extents,
            extents,
        }
    }

    fn loop_edges(&self, loop_idx: usize) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let points = &self.loops[loop_idx];
        let n = points.len();
        (0..n).map(move |i| (points[i], points[(i + 1) % n]))
    }
}

/// Resolve the fill rule of a single region into non crossing loops (outer loops counter clockwise,
/// holes clockwise).
///
/// `pos_equal_eps` is an absolute epsilon, see [absolute_pos_eps].
pub fn resolve_outline<T>(region: FillRegion<T>, pos_equal_eps: T) -> Vec<Contour<T>>
where
    T: Real,
{
    let operand = Operand::new(&region, pos_equal_eps);
    if operand.is_empty() {
        return Vec::new();
    }

    resolve_core(&operand, pos_equal_eps)
}

/// Combine two regions with `keep` deciding membership of the result from the membership of
/// each operand.
///
/// Each region is resolved into its outline first, then the outlines are combined with
/// [combine_outlines]. `pos_equal_eps` is an absolute epsilon, see [absolute_pos_eps].
pub fn combine_regions<T, F>(
    region1: FillRegion<T>,
    region2: FillRegion<T>,
    keep: F,
    pos_equal_eps: T,
) -> Vec<Contour<T>>
where
    T: Real,
    F: Fn(bool, bool) -> bool,
{
    let outline1 = resolve_outline(region1, pos_equal_eps);
    let outline2 = resolve_outline(region2, pos_equal_eps);
    combine_outlines(&outline1, &outline2, keep, pos_equal_eps)
}

/// Combine two fill rule resolved outlines (as returned by [resolve_outline] or a previous
/// combine) with `keep` deciding membership of the result from the membership of each operand.
///
/// Only loops which touch or cross a loop of the other operand are split and have their sub edges
/// classified. Every other loop is kept (reversed if needed) or dropped after a single containment
/// test against the other operand. `pos_equal_eps` is an absolute epsilon, see [absolute_pos_eps].
pub fn combine_outlines<T, F>(
    outline1: &[Contour<T>],
    outline2: &[Contour<T>],
    keep: F,
    pos_equal_eps: T,
) -> Vec<Contour<T>>
where
    T: Real,
    F: Fn(bool, bool) -> bool,
{
    let eps = pos_equal_eps;
    let operands = [OutlineLoops::new(outline1), OutlineLoops::new(outline2)];
    let keep_membership = |m: [bool; 2]| keep(m[0], m[1]);

    // loops whose extents come within sampling reach of the other operand are candidates for
    // intersects and the only ones contributing to containment queries
    let reach = max_sample_offset(eps) * T::two();
    let mut candidate_edges: [Vec<(Point<T>, Point<T>)>; 2] = [Vec::new(), Vec::new()];
    let mut candidate_edge_loops: [Vec<usize>; 2] = [Vec::new(), Vec::new()];
    let mut is_candidate: [Vec<bool>; 2] = [Vec::new(), Vec::new()];
    for k in 0..2 {
        let other_extents = operands[1 - k].extents;
        for (l, loop_extents) in operands[k].loop_extents.iter().enumerate() {
            let candidate = loop_extents
                .inflate(reach, reach)
                .intersects_with(&other_extents);
            is_candidate[k].push(candidate);
            if candidate {
                for edge in operands[k].loop_edges(l) {
                    candidate_edges[k].push(edge);
                    candidate_edge_loops[k].push(l);
                }
            }
        }
    }

    let [edges1, edges2] = candidate_edges;
    let regions = [
        Operand::from_edges(edges1, FillRule::NonZero),
        Operand::from_edges(edges2, FillRule::NonZero),
    ];

    // intersects between the candidate edges of both operands
    let mut splits: [Vec<Vec<(T, Point<T>)>>; 2] = [
        vec![Vec::new(); regions[0].edges.len()],
        vec![Vec::new(); regions[1].edges.len()],
    ];
    let mut is_involved: [Vec<bool>; 2] = [
        vec![false; operands[0].loops.len()],
        vec![false; operands[1].loops.len()],
    ];
    let mut query_stack = Vec::new();
    let mut query_results = Vec::new();
    let mut intersect_count = 0usize;
    let search_eps = eps + eps;
    let [splits1, splits2] = &mut splits;
    for (i, &(v1, v2)) in regions[0].edges.iter().enumerate() {
        query_results.clear();
        let mut query_visitor = |j: usize| query_results.push(j);
        regions[1].index.visit_query_with_stack(
            num_traits::Float::min(v1.x, v2.x) - search_eps,
            num_traits::Float::min(v1.y, v2.y) - search_eps,
            num_traits::Float::max(v1.x, v2.x) + search_eps,
            num_traits::Float::max(v1.y, v2.y) + search_eps,
            &mut query_visitor,
            &mut query_stack,
        );

        for &j in query_results.iter() {
            let (u1, u2) = regions[1].edges[j];
            let found = push_intersect_splits(
                (v1, v2),
                (u1, u2),
                eps,
                &mut splits1[i],
                &mut splits2[j],
            );
            if found > 0 {
                intersect_count += found;
                is_involved[0][candidate_edge_loops[0][i]] = true;
                is_involved[1][candidate_edge_loops[1][j]] = true;
            }
        }
    }

    let mut result = Vec::new();

    // loops without intersects have constant membership in the other operand along them
    let mut untouched_count = 0usize;
    for k in 0..2 {
        for (l, points) in operands[k].loops.iter().enumerate() {
            if is_involved[k][l] {
                continue;
            }
            untouched_count += 1;

            let in_other = is_candidate[k][l] && {
                let mid = points[0] + (points[1] - points[0]).scale(T::half());
                regions[1 - k].contains(mid, &mut query_stack)
            };

            let mut left_membership = [false; 2];
            let mut right_membership = [false; 2];
            left_membership[k] = true;
            left_membership[1 - k] = in_other;
            right_membership[1 - k] = in_other;
            let keep_left = keep_membership(left_membership);
            let keep_right = keep_membership(right_membership);
            if keep_left == keep_right {
                continue;
            }

            let mut points = points.clone();
            if !keep_left {
                points.reverse();
            }
            result.extend(clean_loop(points, eps));
        }
    }

    // split the edges of involved loops and classify the sub edges
    let mut edges = Vec::new();
    let mut owners = Vec::new();
    let mut edge_splits = Vec::new();
    for k in 0..2 {
        for (i, &edge) in regions[k].edges.iter().enumerate() {
            if is_involved[k][candidate_edge_loops[k][i]] {
                edges.push(edge);
                owners.push(k);
                edge_splits.push(std::mem::take(&mut splits[k][i]));
            }
        }
    }

    let (positions, merged_edges) = split_and_merge(&edges, &owners, &mut edge_splits, eps);
    let mut kept_edges: Vec<(usize, usize)> = Vec::new();
    for &(a, b, owner) in merged_edges.iter() {
        let (left, right) = sample_points(positions[a], positions[b], eps);
        let mut left_membership = [false; 2];
        let mut right_membership = [false; 2];
        for k in 0..2 {
            if owner == Some(k) {
                // kept space of an outline is on the left of its edges
                left_membership[k] = true;
                right_membership[k] = false;
            } else {
                left_membership[k] = regions[k].contains(left, &mut query_stack);
                right_membership[k] = regions[k].contains(right, &mut query_stack);
            }
        }

        let keep_left = keep_membership(left_membership);
        let keep_right = keep_membership(right_membership);
        if keep_left == keep_right {
            continue;
        }

        if keep_left {
            kept_edges.push((a, b));
        } else {
            kept_edges.push((b, a));
        }
    }

    let loops = stitch_loops(&positions, &kept_edges);

    tracing::trace!(
        loop_count1 = operands[0].loops.len(),
        loop_count2 = operands[1].loops.len(),
        untouched_count,
        intersect_count,
        kept_edge_count = kept_edges.len(),
        "boolean combine"
    );

    result.extend(loops.into_iter().filter_map(|l| clean_loop(l, eps)));
    result
}

fn find_root(parents: &mut [usize], mut i: usize) -> usize {
    while parents[i] != i {
        parents[i] = parents[parents[i]];
        i = parents[i];
    }
    i
}

/// Record the intersects of `edge1` and `edge2` as split points on both, returns the number of
/// split points added to each edge.
fn push_intersect_splits<T>(
    edge1: (Point<T>, Point<T>),
    edge2: (Point<T>, Point<T>),
    eps: T,
    splits1: &mut Vec<(T, Point<T>)>,
    splits2: &mut Vec<(T, Point<T>)>,
) -> usize
where
    T: Real,
{
    let (v1, v2) = edge1;
    let (u1, u2) = edge2;
    match line_line_intr(v1, v2, u1, u2, eps) {
        LineLineIntr::TrueIntersect { seg1_t, seg2_t } => {
            let t = num_traits::Float::min(num_traits::Float::max(seg1_t, T::zero()), T::one());
            let pt = v1 + (v2 - v1).scale(t);
            splits1.push((t, pt));
            splits2.push((seg2_t, pt));
            1
        }
        LineLineIntr::Overlapping {
            seg1_t0,
            seg1_t1,
            seg2_t0,
            seg2_t1,
        } => {
            let pt0 = u1 + (u2 - u1).scale(seg2_t0);
            let pt1 = u1 + (u2 - u1).scale(seg2_t1);
            splits1.push((seg1_t0, pt0));
            splits1.push((seg1_t1, pt1));
            splits2.push((seg2_t0, pt0));
            splits2.push((seg2_t1, pt1));
            2
        }
        LineLineIntr::NoIntersect | LineLineIntr::FalseIntersect { .. } => 0,
    }
}

/// Split `edges` at their `splits` and merge coincident vertexes.
///
/// Returns the vertex positions and the unique sub edges as `(start, end, owner)`, the owner is
/// taken from `owners` (parallel to `edges`) and is `None` if the sub edge coincides with a sub
/// edge of another owner.
#[allow(clippy::type_complexity)]
fn split_and_merge<T>(
    edges: &[(Point<T>, Point<T>)],
    owners: &[usize],
    splits: &mut [Vec<(T, Point<T>)>],
    eps: T,
) -> (Vec<Point<T>>, Vec<(usize, usize, Option<usize>)>)
where
    T: Real,
{
    let mut positions: Vec<Point<T>> = Vec::new();
    let mut sub_edges: Vec<(usize, usize, usize)> = Vec::new();
    for (i, &(v1, v2)) in edges.iter().enumerate() {
        let edge_splits = &mut splits[i];
        edge_splits.sort_unstable_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut prev = positions.len();
        positions.push(v1);
        for &(_, pt) in edge_splits.iter() {
            let next = positions.len();
            positions.push(pt);
            sub_edges.push((prev, next, owners[i]));
            prev = next;
        }
        let last = positions.len();
        positions.push(v2);
        sub_edges.push((prev, last, owners[i]));
    }

    let mut builder = StaticAABB2DIndexBuilder::new(positions.len());
    for p in positions.iter() {
        builder.add(p.x, p.y, p.x, p.y);
    }
    let point_index = unwrap_spatial_index(builder);
    let mut parents: Vec<usize> = (0..positions.len()).collect();
    let mut query_stack = Vec::new();
    let mut query_results = Vec::new();
    for (i, p) in positions.iter().enumerate() {
        query_results.clear();
        let mut query_visitor = |j: usize| {
            if j != i {
                query_results.push(j);
            }
        };
        point_index.visit_query_with_stack(
            p.x - eps,
            p.y - eps,
            p.x + eps,
            p.y + eps,
            &mut query_visitor,
            &mut query_stack,
        );
        for &j in query_results.iter() {
            let ri = find_root(&mut parents, i);
            let rj = find_root(&mut parents, j);
            if ri != rj {
                // smallest index is the representative
                let (lo, hi) = if ri < rj { (ri, rj) } else { (rj, ri) };
                parents[hi] = lo;
            }
        }
    }

    let mut unique_edges: HashMap<(usize, usize), usize> = HashMap::with_capacity(sub_edges.len());
    let mut merged_edges: Vec<(usize, usize, Option<usize>)> = Vec::with_capacity(sub_edges.len());
    for &(a, b, owner) in sub_edges.iter() {
        let ra = find_root(&mut parents, a);
        let rb = find_root(&mut parents, b);
        if ra == rb {
            continue;
        }
        let key = if ra < rb { (ra, rb) } else { (rb, ra) };
        match unique_edges.get(&key) {
            Some(&existing) => {
                if merged_edges[existing].2 != Some(owner) {
                    merged_edges[existing].2 = None;
                }
            }
            None => {
                unique_edges.insert(key, merged_edges.len());
                merged_edges.push((ra, rb, Some(owner)));
            }
        }
    }

    (positions, merged_edges)
}

#[inline]
fn max_sample_offset<T>(eps: T) -> T
where
    T: Real,
{
    eps * T::cast_f64(1000.0)
}

/// Points just left and right of the middle of the edge from `pa` to `pb`.
fn sample_points<T>(pa: Point<T>, pb: Point<T>, eps: T) -> (Point<T>, Point<T>)
where
    T: Real,
{
    let dir = pb - pa;
    let len = dir.length();
    let offset = num_traits::Float::max(
        eps * T::cast_f64(100.0),
        num_traits::Float::min(len * T::cast_f64(0.01), max_sample_offset(eps)),
    );
    let normal = dir.perp().scale(offset / len);
    let mid = pa + dir.scale(T::half());
    (mid + normal, mid - normal)
}

fn resolve_core<T>(operand: &Operand<T>, pos_equal_eps: T) -> Vec<Contour<T>>
where
    T: Real,
{
    let eps = pos_equal_eps;
    let edges = &operand.edges;

    // find all self intersects between edges
    let mut builder = StaticAABB2DIndexBuilder::new(edges.len());
    for (v1, v2) in edges.iter() {
        builder.add(
            num_traits::Float::min(v1.x, v2.x) - eps,
            num_traits::Float::min(v1.y, v2.y) - eps,
            num_traits::Float::max(v1.x, v2.x) + eps,
            num_traits::Float::max(v1.y, v2.y) + eps,
        );
    }
    let edge_index = unwrap_spatial_index(builder);

    let mut splits: Vec<Vec<(T, Point<T>)>> = vec![Vec::new(); edges.len()];
    let mut query_stack = Vec::new();
    let mut query_results = Vec::new();
    let mut intersect_count = 0usize;
    for (i, &(v1, v2)) in edges.iter().enumerate() {
        query_results.clear();
        let mut query_visitor = |j: usize| {
            if j > i {
                query_results.push(j);
            }
        };
        edge_index.visit_query_with_stack(
            num_traits::Float::min(v1.x, v2.x) - eps,
            num_traits::Float::min(v1.y, v2.y) - eps,
            num_traits::Float::max(v1.x, v2.x) + eps,
            num_traits::Float::max(v1.y, v2.y) + eps,
            &mut query_visitor,
            &mut query_stack,
        );

        for &j in query_results.iter() {
            // j > i so the two split lists are disjoint borrows
            let (head, tail) = splits.split_at_mut(j);
            intersect_count +=
                push_intersect_splits((v1, v2), edges[j], eps, &mut head[i], &mut tail[0]);
        }
    }

    let owners = vec![0; edges.len()];
    let (positions, merged_edges) = split_and_merge(edges, &owners, &mut splits, eps);

    // keep the sub edges separating filled from unfilled space with filled space on the left
    let mut kept_edges: Vec<(usize, usize)> = Vec::new();
    for &(a, b, _) in merged_edges.iter() {
        let (left, right) = sample_points(positions[a], positions[b], eps);
        let keep_left = operand.contains(left, &mut query_stack);
        let keep_right = operand.contains(right, &mut query_stack);
        if keep_left == keep_right {
            continue;
        }

        if keep_left {
            kept_edges.push((a, b));
        } else {
            kept_edges.push((b, a));
        }
    }

    let loops = stitch_loops(&positions, &kept_edges);

    tracing::trace!(
        edge_count = edges.len(),
        intersect_count,
        kept_edge_count = kept_edges.len(),
        loop_count = loops.len(),
        "resolve outline"
    );

    loops
        .into_iter()
        .filter_map(|l| clean_loop(l, eps))
        .collect()
}

/// Stitch directed edges into closed loops. At vertexes with multiple outgoing edges the leftmost
/// turn is taken so loops touching at a vertex stay separate.
fn stitch_loops<T>(positions: &[Point<T>], kept_edges: &[(usize, usize)]) -> Vec<Vec<Point<T>>>
where
    T: Real,
{
    let mut outgoing: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, &(a, _)) in kept_edges.iter().enumerate() {
        outgoing.entry(a).or_default().push(i);
    }

    let mut visited = vec![false; kept_edges.len()];
    let mut result = Vec::new();
    let max_loop_count = kept_edges.len() + 1;
    for start_idx in 0..kept_edges.len() {
        if visited[start_idx] {
            continue;
        }
        visited[start_idx] = true;

        let (start_vertex, _) = kept_edges[start_idx];
        let mut chain = vec![positions[start_vertex]];
        let mut current = start_idx;
        let mut loop_count = 0;
        loop {
            if loop_count > max_loop_count {
                tracing::debug!(
                    chain_len = chain.len(),
                    "loop count exceeded while stitching boolean result, dropping chain"
                );
                break;
            }
            loop_count += 1;

            let (from, to) = kept_edges[current];
            if to == start_vertex {
                result.push(chain);
                break;
            }
            chain.push(positions[to]);

            let incoming = positions[to] - positions[from];
            let next = outgoing.get(&to).and_then(|candidates| {
                candidates
                    .iter()
                    .copied()
                    .filter(|&c| !visited[c])
                    .map(|c| {
                        let outgoing_dir = positions[kept_edges[c].1] - positions[to];
                        let turn = incoming
                            .perp_dot(outgoing_dir)
                            .atan2(incoming.dot(outgoing_dir));
                        (c, turn)
                    })
                    .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|(c, _)| c)
            });

            match next {
                Some(c) => {
                    visited[c] = true;
                    current = c;
                }
                None => {
                    // may arrive here due to epsilon merging around near coincident edges
                    tracing::debug!(
                        chain_len = chain.len(),
                        "unable to close chain while stitching boolean result, dropping chain"
                    );
                    break;
                }
            }
        }
    }

    result
}

/// Remove collinear and spike vertexes, returns `None` if nothing with area remains.
fn clean_loop<T>(mut points: Vec<Point<T>>, eps: T) -> Option<Contour<T>>
where
    T: Real,
{
    let mut changed = true;
    while changed && points.len() >= 3 {
        changed = false;
        let mut i = 0;
        while i < points.len() && points.len() >= 3 {
            let n = points.len();
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            if line_dist(prev, next, cur) <= eps {
                points.remove(i);
                changed = true;
            } else {
                i += 1;
            }
        }
    }

    if points.len() < 3 {
        return None;
    }

    let contour = Contour::from_points(points);
    if contour.signed_area().abs() <= eps * eps {
        return None;
    }

    Some(contour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::point;
    use crate::geometry::GeometryCombineMode;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Contour<f64> {
        Contour::from_points([
            point(x, y),
            point(x + w, y),
            point(x + w, y + h),
            point(x, y + h),
        ])
    }

    fn area(contours: &[Contour<f64>]) -> f64 {
        contours.iter().map(|c| c.signed_area()).sum()
    }

    fn combine(
        a: &[Contour<f64>],
        b: &[Contour<f64>],
        mode: GeometryCombineMode,
    ) -> Vec<Contour<f64>> {
        combine_regions(
            FillRegion::new(a, FillRule::EvenOdd),
            FillRegion::new(b, FillRule::EvenOdd),
            |x, y| mode.keep(x, y),
            1e-7,
        )
    }

    #[test]
    fn overlapping_rects_all_modes() {
        let a = [rect(0.0, 0.0, 10.0, 10.0)];
        let b = [rect(5.0, 5.0, 10.0, 10.0)];
        let union = combine(&a, &b, GeometryCombineMode::Union);
        assert_eq!(union.len(), 1);
        assert_eq!(union[0].vertex_count(), 8);
        assert!((area(&union) - 175.0).abs() < 1e-9);

        let intersect = combine(&a, &b, GeometryCombineMode::Intersect);
        assert_eq!(intersect.len(), 1);
        assert_eq!(intersect[0].vertex_count(), 4);
        assert!((area(&intersect) - 25.0).abs() < 1e-9);

        let exclude = combine(&a, &b, GeometryCombineMode::Exclude);
        assert!((area(&exclude) - 75.0).abs() < 1e-9);

        let xor = combine(&a, &b, GeometryCombineMode::Xor);
        assert!((area(&xor) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn hole_from_exclude() {
        let a = [rect(45.0, 45.0, 80.0, 80.0)];
        let b = [rect(55.0, 55.0, 60.0, 60.0)];
        let result = combine(&a, &b, GeometryCombineMode::Exclude);
        assert_eq!(result.len(), 2);
        assert!((area(&result) - 2800.0).abs() < 1e-9);
        // outer is counter clockwise, hole is clockwise
        assert!(result.iter().any(|c| c.signed_area() > 0.0));
        assert!(result.iter().any(|c| c.signed_area() < 0.0));
    }

    #[test]
    fn shared_edge_union_merges() {
        let a = [rect(0.0, 0.0, 10.0, 10.0)];
        let b = [rect(10.0, 0.0, 10.0, 10.0)];
        let union = combine(&a, &b, GeometryCombineMode::Union);
        assert_eq!(union.len(), 1);
        assert_eq!(union[0].vertex_count(), 4);
        assert!((area(&union) - 200.0).abs() < 1e-9);

        let intersect = combine(&a, &b, GeometryCombineMode::Intersect);
        assert!(intersect.is_empty());
    }

    #[test]
    fn corner_touching_union_stays_separate() {
        let a = [rect(0.0, 0.0, 10.0, 10.0)];
        let b = [rect(10.0, 10.0, 10.0, 10.0)];
        let union = combine(&a, &b, GeometryCombineMode::Union);
        assert_eq!(union.len(), 2);
        assert!((area(&union) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_short_circuit() {
        let a = [rect(0.0, 0.0, 10.0, 10.0)];
        let b = [rect(20.0, 0.0, 10.0, 10.0)];
        assert_eq!(combine(&a, &b, GeometryCombineMode::Union).len(), 2);
        assert!(combine(&a, &b, GeometryCombineMode::Intersect).is_empty());
        let exclude = combine(&a, &b, GeometryCombineMode::Exclude);
        assert_eq!(exclude.len(), 1);
        assert!((area(&exclude) - 100.0).abs() < 1e-9);
        assert!(combine(&[], &b, GeometryCombineMode::Exclude).is_empty());
    }

    #[test]
    fn untouched_loops_classified_whole() {
        let mut hole = rect(40.0, 40.0, 20.0, 20.0);
        hole.vertexes.reverse();
        let ring = [rect(0.0, 0.0, 100.0, 100.0), hole];
        let in_hole = [rect(45.0, 45.0, 5.0, 5.0)];
        let outside = [rect(200.0, 0.0, 10.0, 10.0)];

        let union = combine_outlines(&ring, &in_hole, |a, b| a || b, 1e-7);
        assert_eq!(union.len(), 3);
        assert!((area(&union) - (10000.0 - 400.0 + 25.0)).abs() < 1e-9);

        assert!(combine_outlines(&ring, &in_hole, |a, b| a && b, 1e-7).is_empty());

        // the square sits in the hole so nothing of it is removed
        let exclude = combine_outlines(&in_hole, &ring, |a, b| a && !b, 1e-7);
        assert_eq!(exclude.len(), 1);
        assert!((area(&exclude) - 25.0).abs() < 1e-9);
        let exclude = combine_outlines(&ring, &outside, |a, b| a && !b, 1e-7);
        assert_eq!(exclude.len(), 2);
        assert!((area(&exclude) - 9600.0).abs() < 1e-9);
    }

    #[test]
    fn fill_rule_resolution() {
        // two overlapping rects in one region
        let contours = [rect(0.0, 0.0, 10.0, 20.0), rect(5.0, 0.0, 10.0, 20.0)];
        let even_odd = resolve_outline(FillRegion::new(&contours, FillRule::EvenOdd), 1e-7);
        let non_zero = resolve_outline(FillRegion::new(&contours, FillRule::NonZero), 1e-7);
        assert!((area(&even_odd) - 200.0).abs() < 1e-9);
        assert!((area(&non_zero) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn self_intersecting_bowtie() {
        let bowtie = [Contour::from_points([
            point(0.0, 0.0),
            point(10.0, 10.0),
            point(10.0, 0.0),
            point(0.0, 10.0),
        ])];
        let outline = resolve_outline(FillRegion::new(&bowtie, FillRule::NonZero), 1e-7);
        assert_eq!(outline.len(), 2);
        assert!((area(&outline) - 50.0).abs() < 1e-9);
    }
}
