//! Argument validation
//!
//! Commands arrive as strings. These checks run before any operation touches
//! the grid and turn the raw arguments into typed coordinates, so the drawing
//! code never re-parses or re-checks anything.

use super::error::{DrawError, Result};
use super::grid::{is_single_cell, Grid};

/// A content coordinate, already checked against the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Two endpoints of a line or two opposite corners of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Fails with `NoCanvas` until a canvas has been created.
///
/// Works on shared and exclusive borrows alike, so callers can validate and
/// then draw through the same reference.
pub fn require_canvas<G>(grid: Option<G>) -> Result<G> {
    grid.ok_or(DrawError::NoCanvas)
}

pub fn require_arg_count<S: AsRef<str>>(
    args: &[S],
    expected: usize,
    usage: &'static str,
) -> Result<()> {
    if args.len() != expected {
        return Err(DrawError::ArgumentCount {
            expected,
            got: args.len(),
            usage,
        });
    }
    Ok(())
}

/// Parse every argument as an integer (sign allowed)
pub fn require_numeric<S: AsRef<str>>(args: &[S]) -> Result<Vec<i64>> {
    args.iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.parse::<i64>()
                .map_err(|_| DrawError::InvalidArgument(arg.to_string(), "not an integer"))
        })
        .collect()
}

/// Parse every argument as an integer of at least 1
pub fn require_numeric_positive<S: AsRef<str>>(args: &[S]) -> Result<Vec<usize>> {
    let values = require_numeric(args)?;
    values
        .into_iter()
        .zip(args)
        .map(|(value, arg)| {
            usize::try_from(value)
                .ok()
                .filter(|v| *v >= 1)
                .ok_or_else(|| {
                    DrawError::InvalidArgument(arg.as_ref().to_string(), "must be at least 1")
                })
        })
        .collect()
}

/// `xs[i]` and `ys[i]` form one coordinate. The lower bound is already
/// enforced by `require_numeric_positive`.
pub fn require_within_bounds(xs: &[usize], ys: &[usize], grid: &Grid) -> Result<()> {
    let (width, height) = grid.dimensions();
    match xs.iter().zip(ys).find(|(x, y)| **x > width || **y > height) {
        Some((&x, &y)) => Err(DrawError::OutOfBounds {
            x,
            y,
            width,
            height,
        }),
        None => Ok(()),
    }
}

/// A fill color is exactly one printable, single-column character
pub fn require_color(arg: &str) -> Result<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if is_single_cell(ch) => Ok(ch),
        (Some(_), None) => Err(DrawError::InvalidArgument(
            arg.to_string(),
            "color must be a printable single-width character",
        )),
        _ => Err(DrawError::InvalidArgument(
            arg.to_string(),
            "color must be exactly one character",
        )),
    }
}

/// Parse `x1 y1 x2 y2`. The canvas is not consulted yet.
fn parse_segment<S: AsRef<str>>(args: &[S], usage: &'static str) -> Result<Segment> {
    require_arg_count(args, 4, usage)?;
    let v = require_numeric_positive(args)?;
    Ok(Segment::new(Point::new(v[0], v[1]), Point::new(v[2], v[3])))
}

fn require_segment_within_bounds(segment: &Segment, grid: &Grid) -> Result<()> {
    let Segment { from, to } = segment;
    require_within_bounds(&[from.x, to.x], &[from.y, to.y], grid)
}

/// Validate line endpoints. A diagonal is rejected before bounds are checked.
pub fn line_segment<S: AsRef<str>>(
    args: &[S],
    grid: &Grid,
    usage: &'static str,
) -> Result<Segment> {
    let segment = parse_segment(args, usage)?;
    segment.orientation()?;
    require_segment_within_bounds(&segment, grid)?;
    Ok(segment)
}

/// Validate two opposite rectangle corners, all four corners up front
pub fn rectangle_corners<S: AsRef<str>>(
    args: &[S],
    grid: &Grid,
    usage: &'static str,
) -> Result<Segment> {
    let corners = parse_segment(args, usage)?;
    require_segment_within_bounds(&corners, grid)?;
    Ok(corners)
}

/// Validate an `x y` seed coordinate against the canvas
pub fn point<S: AsRef<str>>(args: &[S], grid: &Grid, usage: &'static str) -> Result<Point> {
    require_arg_count(args, 2, usage)?;
    let values = require_numeric_positive(args)?;
    require_within_bounds(&[values[0]], &[values[1]], grid)?;
    Ok(Point::new(values[0], values[1]))
}
