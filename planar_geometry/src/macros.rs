/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct an open figure of line segments from a list of (x, y) tuples. The first tuple is the
/// start point of the figure.
///
/// # Examples
///
/// ```
/// # use planar_geometry::figure_open;
/// # use planar_geometry::geometry::*;
/// let figure = figure_open![(0.0, 0.0), (10.0, 0.0), (10.0, 5.0)];
/// assert!(!figure.is_closed);
/// assert_eq!(figure.segments.len(), 2);
/// ```
#[macro_export]
macro_rules! figure_open {
    (($x0:expr, $y0:expr) $(, ($x:expr, $y:expr))* $(,)?) => {
        {
            use $crate::geometry::*;
            use $crate::core::math::point;
            let mut figure = PathFigure::new(point($x0, $y0));
            $(
                figure.segments.push(PathSegment::line(point($x, $y)));
            )*
            figure
        }
    };
}

/// Construct a closed figure of line segments from a list of (x, y) tuples. The first tuple is the
/// start point of the figure, the closing line back to it is implied.
///
/// # Examples
///
/// ```
/// # use planar_geometry::figure_closed;
/// # use planar_geometry::geometry::*;
/// let figure = figure_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 5.0)];
/// assert!(figure.is_closed);
/// assert!(figure.is_filled);
/// assert_eq!(figure.segments.len(), 2);
/// ```
#[macro_export]
macro_rules! figure_closed {
    ($( $t:tt )*) => {
        {
            let mut figure = $crate::figure_open![$( $t )*];
            figure.is_closed = true;
            figure
        }
    };
}
