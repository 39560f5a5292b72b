//! Canvas renderer using crossterm
//!
//! Prints a grid row by row. In styled mode the frame, ink and fill colors
//! each get their own foreground color; in plain mode the output is exactly
//! the grid's `Display` text.

use std::fmt;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};

use crate::config::{Color, ColorScheme};
use crate::core::Grid;

/// What a cell shows, for coloring purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Border,
    Empty,
    Ink,
    Fill,
}

/// Canvas renderer
pub struct Renderer {
    scheme: ColorScheme,
    styled: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::plain()
    }
}

impl Renderer {
    pub fn new(scheme: ColorScheme, styled: bool) -> Self {
        Self { scheme, styled }
    }

    /// Renderer without escape sequences
    pub fn plain() -> Self {
        Self::new(ColorScheme::default(), false)
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Render the whole grid, border included
    pub fn render<W: Write>(&self, out: &mut W, grid: &Grid) -> io::Result<()> {
        if !self.styled {
            write!(out, "{}", grid)?;
            return out.flush();
        }

        let (width, height) = grid.dimensions();
        for (y, row) in grid.rows().enumerate() {
            let mut current: Option<Color> = None;
            for (x, &ch) in row.iter().enumerate() {
                let on_border = y == 0 || y == height + 1 || x == 0 || x == width + 1;
                let color = self.color_for(classify(grid, ch, on_border));
                if color != current {
                    match color {
                        Some(c) => queue!(out, SetForegroundColor(c.to_crossterm()))?,
                        None => queue!(out, ResetColor)?,
                    }
                    current = color;
                }
                queue!(out, Print(ch))?;
            }
            if current.is_some() {
                queue!(out, ResetColor)?;
            }
            queue!(out, Print('\n'))?;
        }
        out.flush()
    }

    /// Render a rejected command
    pub fn render_error<W: Write>(&self, out: &mut W, err: &dyn fmt::Display) -> io::Result<()> {
        if self.styled {
            queue!(
                out,
                SetForegroundColor(self.scheme.error.to_crossterm()),
                Print(format!("Error: {}", err)),
                ResetColor,
                Print('\n')
            )?;
        } else {
            writeln!(out, "Error: {}", err)?;
        }
        out.flush()
    }

    fn color_for(&self, kind: CellKind) -> Option<Color> {
        match kind {
            CellKind::Border => Some(self.scheme.border),
            CellKind::Empty => None,
            CellKind::Ink => Some(self.scheme.ink),
            CellKind::Fill => Some(self.scheme.fill),
        }
    }
}

fn classify(grid: &Grid, ch: char, on_border: bool) -> CellKind {
    let glyphs = grid.glyphs();
    if on_border {
        CellKind::Border
    } else if ch == glyphs.empty {
        CellKind::Empty
    } else if ch == glyphs.ink {
        CellKind::Ink
    } else {
        CellKind::Fill
    }
}
