//! Drawing operations: canvas creation, lines and rectangles
//!
//! Inputs are validated coordinates (see `validate`). The only check left to
//! this module is geometry: lines must be axis-aligned.

use tracing::debug;

use super::error::{DrawError, Result};
use super::grid::{Glyphs, Grid};
use super::validate::{Point, Segment};

/// Optional upper bound on canvas size. Unbounded by default; a canvas too
/// large to allocate is rejected by `Grid` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<usize>,
    pub max_height: Option<usize>,
}

impl Limits {
    fn exceeded_by(&self, width: i64, height: i64) -> bool {
        exceeds(width, self.max_width) || exceeds(height, self.max_height)
    }
}

fn exceeds(value: i64, max: Option<usize>) -> bool {
    match (usize::try_from(value), max) {
        (Ok(value), Some(max)) => value > max,
        _ => false,
    }
}

/// Line direction. A single point counts as vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Segment {
    /// Vertical is tested first, so `x1 == x2 && y1 == y2` is vertical
    pub fn orientation(&self) -> Result<Orientation> {
        if self.from.x == self.to.x {
            Ok(Orientation::Vertical)
        } else if self.from.y == self.to.y {
            Ok(Orientation::Horizontal)
        } else {
            Err(DrawError::UnsupportedGeometry)
        }
    }

    /// The four edges of the rectangle spanned by this segment's corners
    pub fn edges(&self) -> [Segment; 4] {
        let Point { x: x1, y: y1 } = self.from;
        let Point { x: x2, y: y2 } = self.to;
        [
            Segment::new(Point::new(x1, y1), Point::new(x1, y2)),
            Segment::new(Point::new(x1, y1), Point::new(x2, y1)),
            Segment::new(Point::new(x2, y1), Point::new(x2, y2)),
            Segment::new(Point::new(x1, y2), Point::new(x2, y2)),
        ]
    }
}

/// Build a fresh canvas. Prior content is never reused.
pub fn create_canvas(width: i64, height: i64, glyphs: Glyphs, limits: Limits) -> Result<Grid> {
    if limits.exceeded_by(width, height) {
        return Err(DrawError::InvalidDimension {
            width,
            height,
            reason: "canvas is larger than the configured maximum",
        });
    }
    let grid = Grid::with_glyphs(width, height, glyphs)?;
    debug!("Created {}x{} canvas", width, height);
    Ok(grid)
}

/// Draw an axis-aligned line in the ink glyph.
///
/// Endpoint order does not matter. Nothing is written if the line is diagonal.
pub fn line(grid: &mut Grid, segment: Segment) -> Result<()> {
    let orientation = segment.orientation()?;
    let ink = grid.glyphs().ink;
    let Segment { from, to } = segment;

    match orientation {
        Orientation::Vertical => {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                grid.set(from.x, y, ink)?;
            }
        }
        Orientation::Horizontal => {
            for x in from.x.min(to.x)..=from.x.max(to.x) {
                grid.set(x, from.y, ink)?;
            }
        }
    }

    debug!(?orientation, ?from, ?to, "Drew line");
    Ok(())
}

/// Draw a rectangle as four lines. Corners may be given in any order.
pub fn rectangle(grid: &mut Grid, corners: Segment) -> Result<()> {
    for edge in corners.edges() {
        line(grid, edge)?;
    }
    Ok(())
}
