//! Classification of how two filled regions relate.
use super::boolean::{combine_outlines, FillRegion};
use crate::{
    core::{
        math::{line_line_intr, LineLineIntr, Point, Rect},
        traits::Real,
    },
    geometry::{contour::unwrap_spatial_index, Contour, IntersectionDetail},
};
use static_aabb2d_index::StaticAABB2DIndexBuilder;

fn region_contains<T>(region: &FillRegion<T>, point: Point<T>) -> bool
where
    T: Real,
{
    let winding = region
        .contours
        .iter()
        .filter(|c| c.is_filled)
        .map(|c| c.winding_number(point))
        .sum();
    region.fill_rule.is_inside(winding)
}

fn region_area<T>(contours: &[Contour<T>]) -> T
where
    T: Real,
{
    contours
        .iter()
        .fold(T::zero(), |acc, c| acc + c.signed_area())
}

/// Returns true if any boundary edge of `region1` touches or crosses a boundary edge of `region2`.
pub fn boundaries_intersect<T>(
    region1: &FillRegion<T>,
    region2: &FillRegion<T>,
    pos_equal_eps: T,
) -> bool
where
    T: Real,
{
    let edges1: Vec<_> = region1
        .contours
        .iter()
        .flat_map(|c| c.iter_fill_edges())
        .collect();
    if edges1.is_empty() {
        return false;
    }

    let eps = pos_equal_eps;
    let mut builder = StaticAABB2DIndexBuilder::new(edges1.len());
    for (v1, v2) in edges1.iter() {
        builder.add(
            num_traits::Float::min(v1.x, v2.x) - eps,
            num_traits::Float::min(v1.y, v2.y) - eps,
            num_traits::Float::max(v1.x, v2.x) + eps,
            num_traits::Float::max(v1.y, v2.y) + eps,
        );
    }
    let index = unwrap_spatial_index(builder);

    let mut query_stack = Vec::new();
    for (u1, u2) in region2.contours.iter().flat_map(|c| c.iter_fill_edges()) {
        let mut found = false;
        let mut query_visitor = |i: usize| {
            if found {
                return;
            }
            let (v1, v2) = edges1[i];
            found = matches!(
                line_line_intr(v1, v2, u1, u2, eps),
                LineLineIntr::TrueIntersect { .. } | LineLineIntr::Overlapping { .. }
            );
        };
        index.visit_query_with_stack(
            num_traits::Float::min(u1.x, u2.x),
            num_traits::Float::min(u1.y, u2.y),
            num_traits::Float::max(u1.x, u2.x),
            num_traits::Float::max(u1.y, u2.y),
            &mut query_visitor,
            &mut query_stack,
        );

        if found {
            return true;
        }
    }

    false
}

/// Classify how `other` relates to `target`.
///
/// Both regions are expected to be fill rule resolved outlines. Uses a bounds pre-check, then a
/// boundary intersect test: without boundary intersects one point of every loop is tested for
/// containment in each direction, otherwise (boundaries touch or cross) the classification falls
/// back to comparing the areas of the intersect and of both exclusions.
pub fn intersection_detail<T>(
    target: FillRegion<T>,
    other: FillRegion<T>,
    pos_equal_eps: T,
) -> IntersectionDetail
where
    T: Real,
{
    let extents = |r: &FillRegion<T>| {
        r.contours
            .iter()
            .fold(Rect::empty(), |acc, c| acc.union(&c.extents()))
    };

    let target_extents = extents(&target);
    let other_extents = extents(&other);
    if target.contours.is_empty()
        || other.contours.is_empty()
        || !target_extents.intersects_with(&other_extents)
    {
        return IntersectionDetail::Empty;
    }

    if !boundaries_intersect(&target, &other, pos_equal_eps) {
        let loop_point = |c: &Contour<T>| c.vertexes[0].pos;
        let other_in_target: Vec<bool> = other
            .contours
            .iter()
            .map(|c| region_contains(&target, loop_point(c)))
            .collect();
        let target_in_other: Vec<bool> = target
            .contours
            .iter()
            .map(|c| region_contains(&other, loop_point(c)))
            .collect();

        let any_other_in_target = other_in_target.iter().any(|&x| x);
        let any_target_in_other = target_in_other.iter().any(|&x| x);
        if other_in_target.iter().all(|&x| x) && !any_target_in_other {
            return IntersectionDetail::FullyContains;
        }
        if target_in_other.iter().all(|&x| x) && !any_other_in_target {
            return IntersectionDetail::FullyInside;
        }
        if !any_other_in_target && !any_target_in_other {
            return IntersectionDetail::Empty;
        }

        return IntersectionDetail::Intersects;
    }

    let target_area = region_area(target.contours).abs();
    let other_area = region_area(other.contours).abs();
    let area_eps = num_traits::Float::min(target_area, other_area) * T::cast_f64(1e-6);

    let intersect =
        combine_outlines(target.contours, other.contours, |a, b| a && b, pos_equal_eps);
    if region_area(&intersect) <= area_eps {
        return IntersectionDetail::Empty;
    }

    let other_outside =
        combine_outlines(other.contours, target.contours, |a, b| a && !b, pos_equal_eps);
    if region_area(&other_outside) <= area_eps {
        return IntersectionDetail::FullyContains;
    }

    let target_outside =
        combine_outlines(target.contours, other.contours, |a, b| a && !b, pos_equal_eps);
    if region_area(&target_outside) <= area_eps {
        return IntersectionDetail::FullyInside;
    }

    IntersectionDetail::Intersects
}
