//! Path markup text format (the SVG style path mini language with a leading fill rule token).
//!
//! Written output has the form `F1 M0,0 L10,0 10,10 z`. `F1` selects [FillRule::NonZero] and is
//! only written for that fill rule (`F0`, [FillRule::EvenOdd], is the default when parsing). Stroke
//! and fill flags of segments and figures are not part of the format.
use super::{
    FillRule, GeometrySource, PathFigure, PathGeometry, PathSegment, SegmentData, SweepDirection,
};
use crate::{
    core::{
        math::{point, Point, Size},
        traits::Real,
    },
    GeometryError, GeometryResult,
};
use std::fmt;

/// Write `figures` as path markup.
pub fn write_markup<W, T>(
    out: &mut W,
    fill_rule: FillRule,
    figures: &[PathFigure<T>],
) -> fmt::Result
where
    W: fmt::Write,
    T: Real,
{
    let mut first = true;
    let mut sep = |out: &mut W| -> fmt::Result {
        if !first {
            out.write_char(' ')?;
        }
        first = false;
        Ok(())
    };

    if fill_rule == FillRule::NonZero {
        sep(out)?;
        out.write_str("F1")?;
    }

    for figure in figures {
        sep(out)?;
        out.write_char('M')?;
        write_point(out, figure.start_point)?;
        for seg in figure.segments.iter() {
            if segment_is_empty(seg) {
                continue;
            }
            sep(out)?;
            write_segment(out, seg)?;
        }

        if figure.is_closed {
            sep(out)?;
            out.write_char('z')?;
        }
    }

    Ok(())
}

/// Path markup of the transformed figures of `geometry`.
pub fn to_markup<G>(geometry: &G) -> String
where
    G: GeometrySource + ?Sized,
{
    let mut result = String::new();
    // writing to a String does not fail
    let _ = write_markup(&mut result, geometry.fill_rule(), &geometry.transformed_figures());
    result
}

fn write_point<W, T>(out: &mut W, p: Point<T>) -> fmt::Result
where
    W: fmt::Write,
    T: Real,
{
    write!(out, "{},{}", p.x.as_f64(), p.y.as_f64())
}

fn write_points<W, T>(out: &mut W, points: &[Point<T>]) -> fmt::Result
where
    W: fmt::Write,
    T: Real,
{
    for (i, p) in points.iter().enumerate() {
        if i != 0 {
            out.write_char(' ')?;
        }
        write_point(out, *p)?;
    }

    Ok(())
}

fn segment_is_empty<T>(seg: &PathSegment<T>) -> bool
where
    T: Real,
{
    match &seg.data {
        SegmentData::PolyLine { points } => points.is_empty(),
        SegmentData::PolyBezier { points } => points.len() < 3,
        SegmentData::PolyQuadraticBezier { points } => points.len() < 2,
        _ => false,
    }
}

fn write_segment<W, T>(out: &mut W, seg: &PathSegment<T>) -> fmt::Result
where
    W: fmt::Write,
    T: Real,
{
    match &seg.data {
        SegmentData::Line { point } => {
            out.write_char('L')?;
            write_point(out, *point)
        }
        SegmentData::PolyLine { points } => {
            out.write_char('L')?;
            write_points(out, points)
        }
        SegmentData::Bezier {
            point1,
            point2,
            point3,
        } => {
            out.write_char('C')?;
            write_points(out, &[*point1, *point2, *point3])
        }
        SegmentData::PolyBezier { points } => {
            out.write_char('C')?;
            write_points(out, &points[..points.len() - points.len() % 3])
        }
        SegmentData::QuadraticBezier { point1, point2 } => {
            out.write_char('Q')?;
            write_points(out, &[*point1, *point2])
        }
        SegmentData::PolyQuadraticBezier { points } => {
            out.write_char('Q')?;
            write_points(out, &points[..points.len() - points.len() % 2])
        }
        SegmentData::Arc {
            point,
            size,
            rotation_angle,
            is_large_arc,
            sweep_direction,
        } => {
            write!(
                out,
                "A{},{} {} {} {} ",
                size.width.as_f64(),
                size.height.as_f64(),
                rotation_angle.as_f64(),
                u8::from(*is_large_arc),
                u8::from(*sweep_direction == SweepDirection::Clockwise)
            )?;
            write_point(out, *point)
        }
    }
}

/// Parse path markup into a [PathGeometry].
///
/// Supports the absolute and relative forms of the move, line, horizontal line, vertical line,
/// cubic, quadratic, smooth cubic, smooth quadratic, arc, and close commands with implicit command
/// repetition. Repeated line, cubic, and quadratic coordinates after a single command become one
/// poly segment.
///
/// # Examples
///
/// ```
/// # use planar_geometry::geometry::*;
/// let path: PathGeometry = parse_path_markup("F1 M0,0 L10,0 10,10 z").unwrap();
/// assert_eq!(path.fill_rule(), FillRule::NonZero);
/// assert_eq!(path.figure_count(), 1);
/// assert!((path.area() - 50.0).abs() < 1e-9);
/// assert_eq!(path.to_string(), "F1 M0,0 L10,0 10,10 z");
///
/// let err = parse_path_markup::<f64>("M0,0 L10").unwrap_err();
/// assert!(matches!(err, GeometryError::Parse { .. }));
/// # use planar_geometry::GeometryError;
/// ```
pub fn parse_path_markup<T>(markup: &str) -> GeometryResult<PathGeometry<T>>
where
    T: Real,
{
    MarkupParser::new(markup).parse().inspect_err(|e| {
        tracing::debug!(error = %e, "path markup parse failed");
    })
}

struct MarkupParser<'a, T>
where
    T: Real,
{
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    figures: Vec<PathFigure<T>>,
    figure: Option<PathFigure<T>>,
    last_start: Option<Point<T>>,
    current: Point<T>,
    last_cubic_control: Option<Point<T>>,
    last_quadratic_control: Option<Point<T>>,
}

impl<'a, T> MarkupParser<'a, T>
where
    T: Real,
{
    fn new(markup: &'a str) -> Self {
        Self {
            text: markup,
            bytes: markup.as_bytes(),
            pos: 0,
            figures: Vec::new(),
            figure: None,
            last_start: None,
            current: Point::zero(),
            last_cubic_control: None,
            last_quadratic_control: None,
        }
    }

    fn error<V>(&self, message: impl Into<String>) -> GeometryResult<V> {
        Err(GeometryError::Parse {
            position: self.pos,
            message: message.into(),
        })
    }

    /// Character starting at the current position (positions only ever advance over ascii).
    fn current_char(&self) -> char {
        self.text
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace() || c == b',') {
            self.pos += 1;
        }
    }

    fn at_number(&mut self) -> bool {
        self.skip_separators();
        matches!(self.peek(), Some(b'0'..=b'9' | b'.' | b'+' | b'-'))
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn read_number(&mut self) -> GeometryResult<T> {
        self.skip_separators();
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let mut digits = self.eat_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.eat_digits();
        }

        if digits == 0 {
            self.pos = start;
            return self.error("expected number");
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mantissa_end = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                self.pos = mantissa_end;
            }
        }

        // only ascii bytes were consumed
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap_or_default();
        match text.parse::<f64>() {
            Ok(v) => Ok(T::cast_f64(v)),
            Err(_) => {
                self.pos = start;
                self.error(format!("invalid number '{text}'"))
            }
        }
    }

    fn read_flag(&mut self) -> GeometryResult<bool> {
        self.skip_separators();
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            _ => self.error("expected flag (0 or 1)"),
        }
    }

    /// Read a point, offset by `base` for relative commands.
    fn read_point(&mut self, relative: bool, base: Point<T>) -> GeometryResult<Point<T>> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        let p = point(x, y);
        Ok(if relative { p + base } else { p })
    }

    fn finish_figure(&mut self) {
        if let Some(f) = self.figure.take() {
            self.figures.push(f);
        }
    }

    fn start_figure(&mut self, start: Point<T>) {
        self.finish_figure();
        self.figure = Some(PathFigure::new(start));
        self.last_start = Some(start);
        self.current = start;
    }

    /// Push a segment onto the current figure, starting a new figure at the last start point
    /// after a close command.
    fn push_segment(&mut self, segment: PathSegment<T>) -> GeometryResult<()> {
        if self.figure.is_none() {
            match self.last_start {
                Some(start) => self.start_figure(start),
                None => return self.error("path markup must start with a move command"),
            }
        }

        if let Some(end) = segment.end_point() {
            self.current = end;
        }

        if let Some(f) = self.figure.as_mut() {
            f.segments.push(segment);
        }

        Ok(())
    }

    fn read_point_run(&mut self, relative: bool, group: usize) -> GeometryResult<Vec<Point<T>>> {
        let mut points = Vec::new();
        let mut base = self.current;
        loop {
            for _ in 0..group {
                points.push(self.read_point(relative, base)?);
            }
            base = points[points.len() - 1];
            if !self.at_number() {
                break;
            }
        }

        Ok(points)
    }

    fn command(&mut self, cmd: u8) -> GeometryResult<()> {
        let relative = cmd.is_ascii_lowercase();
        let upper = cmd.to_ascii_uppercase();
        if upper != b'C' && upper != b'S' {
            self.last_cubic_control = None;
        }
        if upper != b'Q' && upper != b'T' {
            self.last_quadratic_control = None;
        }

        match upper {
            b'M' => {
                let start = self.read_point(relative, self.current)?;
                self.start_figure(start);
                if self.at_number() {
                    let points = self.read_point_run(relative, 1)?;
                    self.push_lines(points)?;
                }
            }
            b'L' => {
                let points = self.read_point_run(relative, 1)?;
                self.push_lines(points)?;
            }
            b'H' | b'V' => loop {
                let v = self.read_number()?;
                let c = self.current;
                let p = match (upper, relative) {
                    (b'H', true) => point(c.x + v, c.y),
                    (b'H', false) => point(v, c.y),
                    (_, true) => point(c.x, c.y + v),
                    _ => point(c.x, v),
                };
                self.push_segment(PathSegment::line(p))?;
                if !self.at_number() {
                    break;
                }
            },
            b'C' => {
                let points = self.read_point_run(relative, 3)?;
                self.last_cubic_control = Some(points[points.len() - 2]);
                let seg = if points.len() == 3 {
                    PathSegment::bezier(points[0], points[1], points[2])
                } else {
                    PathSegment::poly_bezier(points)
                };
                self.push_segment(seg)?;
            }
            b'Q' => {
                let points = self.read_point_run(relative, 2)?;
                self.last_quadratic_control = Some(points[points.len() - 2]);
                let seg = if points.len() == 2 {
                    PathSegment::quadratic_bezier(points[0], points[1])
                } else {
                    PathSegment::poly_quadratic_bezier(points)
                };
                self.push_segment(seg)?;
            }
            b'S' => loop {
                let c = self.current;
                let control1 = self.last_cubic_control.map_or(c, |p| c + (c - p));
                let control2 = self.read_point(relative, c)?;
                let end = self.read_point(relative, c)?;
                self.push_segment(PathSegment::bezier(control1, control2, end))?;
                self.last_cubic_control = Some(control2);
                if !self.at_number() {
                    break;
                }
            },
            b'T' => loop {
                let c = self.current;
                let control = self.last_quadratic_control.map_or(c, |p| c + (c - p));
                let end = self.read_point(relative, c)?;
                self.push_segment(PathSegment::quadratic_bezier(control, end))?;
                self.last_quadratic_control = Some(control);
                if !self.at_number() {
                    break;
                }
            },
            b'A' => loop {
                let rx = self.read_number()?;
                let ry = self.read_number()?;
                let rotation = self.read_number()?;
                let is_large_arc = self.read_flag()?;
                let sweep_direction = if self.read_flag()? {
                    SweepDirection::Clockwise
                } else {
                    SweepDirection::Counterclockwise
                };
                let end = self.read_point(relative, self.current)?;
                self.push_segment(PathSegment::arc(
                    end,
                    Size::new(rx, ry),
                    rotation,
                    is_large_arc,
                    sweep_direction,
                ))?;
                if !self.at_number() {
                    break;
                }
            },
            b'Z' => {
                if let Some(mut f) = self.figure.take() {
                    f.is_closed = true;
                    self.current = f.start_point;
                    self.figures.push(f);
                }
            }
            _ => {
                self.pos -= 1;
                return self.error(format!("unknown command '{}'", self.current_char()));
            }
        }

        Ok(())
    }

    fn push_lines(&mut self, points: Vec<Point<T>>) -> GeometryResult<()> {
        let seg = if points.len() == 1 {
            PathSegment::line(points[0])
        } else {
            PathSegment::poly_line(points)
        };
        self.push_segment(seg)
    }

    fn parse(mut self) -> GeometryResult<PathGeometry<T>> {
        self.skip_whitespace();
        let mut fill_rule = FillRule::EvenOdd;
        if self.peek() == Some(b'F') {
            self.pos += 1;
            self.skip_whitespace();
            fill_rule = match self.peek() {
                Some(b'0') => FillRule::EvenOdd,
                Some(b'1') => FillRule::NonZero,
                _ => return self.error("expected fill rule (F0 or F1)"),
            };
            self.pos += 1;
        }

        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                break;
            };

            if !c.is_ascii_alphabetic() {
                return self.error(format!("expected command, found '{}'", self.current_char()));
            }

            self.pos += 1;
            self.command(c)?;
        }

        self.finish_figure();
        tracing::trace!(figure_count = self.figures.len(), "parsed path markup");
        Ok(PathGeometry::from_figures(self.figures, fill_rule))
    }
}

impl<T> std::str::FromStr for PathGeometry<T>
where
    T: Real,
{
    type Err = GeometryError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path_markup(s)
    }
}

macro_rules! impl_markup_display {
    ($($ty:ident),+) => {
        $(
            impl<T> fmt::Display for super::$ty<T>
            where
                T: Real,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_markup(f, self.fill_rule(), &self.transformed_figures())
                }
            }
        )+
    };
}

impl_markup_display!(
    PathGeometry,
    LineGeometry,
    EllipseGeometry,
    RectangleGeometry,
    CombinedGeometry,
    GeometryGroup,
    Geometry
);
