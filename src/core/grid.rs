//! Canvas grid
//!
//! The grid is a `(height + 2) x (width + 2)` character buffer. The outer
//! ring is the border; the inner `height x width` region is the drawable
//! content. Coordinates are 1-indexed for content, so `(0, _)`, `(width + 1, _)`,
//! `(_, 0)` and `(_, height + 1)` address the border.

use std::fmt;

use unicode_width::UnicodeWidthChar;

use super::error::{DrawError, Result};

/// Characters used to paint a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Unpainted content cell
    pub empty: char,
    /// Line and rectangle ink
    pub ink: char,
    /// Top and bottom border rows (including corners)
    pub horizontal: char,
    /// Left and right border columns
    pub vertical: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: ' ',
            ink: 'x',
            horizontal: '-',
            vertical: '|',
        }
    }
}

/// Whether `ch` occupies exactly one terminal column and is printable.
///
/// Anything wider (or zero-width) would break the row alignment of the
/// rendered canvas.
pub fn is_single_cell(ch: char) -> bool {
    !ch.is_control() && ch.width() == Some(1)
}

/// Bordered character grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    glyphs: Glyphs,
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Create a grid with the given glyph set.
    ///
    /// Fails with `InvalidDimension` for sizes below 1 or too large to allocate.
    pub fn with_glyphs(width: i64, height: i64, glyphs: Glyphs) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(DrawError::InvalidDimension {
                width,
                height,
                reason: "width and height must be at least 1",
            });
        }
        let too_large = || DrawError::InvalidDimension {
            width,
            height,
            reason: "canvas is too large to allocate",
        };
        let outer_width = usize::try_from(width)
            .ok()
            .and_then(|w| w.checked_add(2))
            .ok_or_else(too_large)?;
        let outer_height = usize::try_from(height)
            .ok()
            .and_then(|h| h.checked_add(2))
            .ok_or_else(too_large)?;
        if outer_width.checked_mul(outer_height).is_none() {
            return Err(too_large());
        }
        let (width, height) = (outer_width - 2, outer_height - 2);

        let mut rows = Vec::new();
        rows.try_reserve_exact(outer_height).map_err(|_| too_large())?;
        for y in 0..outer_height {
            let mut row = Vec::new();
            row.try_reserve_exact(outer_width).map_err(|_| too_large())?;
            row.extend((0..outer_width).map(|x| {
                if y == 0 || y == height + 1 {
                    glyphs.horizontal
                } else if x == 0 || x == width + 1 {
                    glyphs.vertical
                } else {
                    glyphs.empty
                }
            }));
            rows.push(row);
        }

        Ok(Self {
            width,
            height,
            glyphs,
            rows,
        })
    }

    /// Content size as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Read a cell. Border cells are readable.
    pub fn get(&self, x: usize, y: usize) -> Result<char> {
        self.check_bounds(x, y)?;
        Ok(self.rows[y][x])
    }

    /// Write a single cell. Border cells are writable here; drawing
    /// operations restrict themselves to content coordinates.
    pub fn set(&mut self, x: usize, y: usize, value: char) -> Result<()> {
        self.check_bounds(x, y)?;
        self.rows[y][x] = value;
        Ok(())
    }

    /// Whether `(x, y)` lies in the drawable region
    pub fn is_content(&self, x: usize, y: usize) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    /// Row-major view including the border
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x > self.width + 1 || y > self.height + 1 {
            return Err(DrawError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
