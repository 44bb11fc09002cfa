use planar_geometry::{
    core::{
        math::{point, Point, Size},
        traits::Real,
    },
    geometry::{FillRule, PathFigure, PathGeometry, PathSegment, SweepDirection},
};

fn point_on_circle<T>(radius: T, center: Point<T>, angle: T) -> Point<T>
where
    T: Real,
{
    point(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Closed star of `vertex_count` points alternating between two radii, joined by arcs that bulge
/// alternately in and out.
pub fn arc_star<T>(vertex_count: usize) -> PathGeometry<T>
where
    T: Real,
{
    let outer = T::cast_f64(40.0);
    let inner = T::cast_f64(25.0);
    let center = point(T::zero(), T::zero());
    let n = T::cast_f64(vertex_count as f64);
    let vertex = |i: usize| {
        let angle = T::cast_f64(i as f64) * T::tau() / n;
        let r = if i % 2 == 0 { outer } else { inner };
        point_on_circle(r, center, angle)
    };

    let mut figure = PathFigure::new(vertex(0));
    for i in 1..=vertex_count {
        let p = vertex(i % vertex_count);
        let sweep = if i % 2 == 0 {
            SweepDirection::Clockwise
        } else {
            SweepDirection::Counterclockwise
        };
        figure = figure.segment(PathSegment::arc(
            p,
            Size::new(inner, inner),
            T::zero(),
            false,
            sweep,
        ));
    }

    PathGeometry::from_figures(vec![figure.closed(true)], FillRule::NonZero)
}

/// Grid of `count * count` overlapping squares, each a separate figure.
pub fn square_grid<T>(count: usize) -> PathGeometry<T>
where
    T: Real,
{
    let size = T::cast_f64(10.0);
    let step = T::cast_f64(7.0);
    let mut result = PathGeometry::new();
    result
        .set_fill_rule(FillRule::NonZero)
        .expect("new geometry is not frozen");
    for i in 0..count {
        for j in 0..count {
            let x = T::cast_f64(i as f64) * step;
            let y = T::cast_f64(j as f64) * step;
            let figure = PathFigure::new(point(x, y))
                .segment(PathSegment::poly_line(vec![
                    point(x + size, y),
                    point(x + size, y + size),
                    point(x, y + size),
                ]))
                .closed(true);
            result
                .add_figure(figure)
                .expect("new geometry is not frozen");
        }
    }

    result
}
