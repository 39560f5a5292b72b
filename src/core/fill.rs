//! Bucket fill
//!
//! 4-connected flood fill over the content region, driven by an explicit
//! stack so region size is bounded by the heap and not the call stack.

use tracing::debug;

use super::error::Result;
use super::grid::Grid;
use super::validate::Point;

/// Paint the region containing `seed` with `color`.
///
/// Returns the number of cells painted. If the seed already holds `color`
/// the grid is left untouched and 0 is returned.
pub fn fill(grid: &mut Grid, seed: Point, color: char) -> Result<usize> {
    let target = grid.get(seed.x, seed.y)?;
    if target == color {
        debug!(?seed, %color, "Fill is a no-op, seed already holds the color");
        return Ok(0);
    }

    // Cells are painted when pushed, so each one enters the stack at most once
    grid.set(seed.x, seed.y, color)?;
    let mut stack = vec![seed];
    let mut painted = 1;

    while let Some(Point { x, y }) = stack.pop() {
        let neighbors = [
            (x, y + 1),
            (x, y.wrapping_sub(1)),
            (x + 1, y),
            (x.wrapping_sub(1), y),
        ];
        for (nx, ny) in neighbors {
            if !grid.is_content(nx, ny) || grid.get(nx, ny)? != target {
                continue;
            }
            grid.set(nx, ny, color)?;
            stack.push(Point::new(nx, ny));
            painted += 1;
        }
    }

    debug!(?seed, %color, painted, "Filled region");
    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draw::{line, rectangle};
    use crate::core::grid::Glyphs;
    use crate::core::validate::Segment;

    fn seg(x1: usize, y1: usize, x2: usize, y2: usize) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_fill_empty_canvas() {
        let mut grid = Grid::with_glyphs(5, 3, Glyphs::default()).unwrap();
        let painted = fill(&mut grid, Point::new(3, 2), 'o').unwrap();
        assert_eq!(painted, 15);
        assert_eq!(grid.to_string(), "-------\n|ooooo|\n|ooooo|\n|ooooo|\n-------\n");
    }

    #[test]
    fn test_fill_noop_when_color_matches() {
        let mut grid = Grid::with_glyphs(6, 6, Glyphs::default()).unwrap();
        rectangle(&mut grid, seg(2, 2, 5, 5)).unwrap();
        let before = grid.clone();

        assert_eq!(fill(&mut grid, Point::new(2, 2), 'x').unwrap(), 0);
        assert_eq!(grid, before);
        assert_eq!(fill(&mut grid, Point::new(1, 1), ' ').unwrap(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_stays_inside_region() {
        let mut grid = Grid::with_glyphs(7, 7, Glyphs::default()).unwrap();
        rectangle(&mut grid, seg(2, 2, 6, 6)).unwrap();

        let painted = fill(&mut grid, Point::new(4, 4), '*').unwrap();
        assert_eq!(painted, 9);
        for y in 1..=7 {
            for x in 1..=7 {
                let inside = (3..=5).contains(&x) && (3..=5).contains(&y);
                let on_edge = !inside
                    && (2..=6).contains(&x)
                    && (2..=6).contains(&y);
                let expected = if inside {
                    '*'
                } else if on_edge {
                    'x'
                } else {
                    ' '
                };
                assert_eq!(grid.get(x, y).unwrap(), expected, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_is_four_connected() {
        // Two cells touching only diagonally are separate regions
        let mut grid = Grid::with_glyphs(3, 3, Glyphs::default()).unwrap();
        line(&mut grid, seg(2, 1, 2, 3)).unwrap();
        line(&mut grid, seg(1, 2, 3, 2)).unwrap();

        fill(&mut grid, Point::new(1, 1), 'o').unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), 'o');
        assert_eq!(grid.get(3, 1).unwrap(), ' ');
        assert_eq!(grid.get(1, 3).unwrap(), ' ');
        assert_eq!(grid.get(3, 3).unwrap(), ' ');
    }

    #[test]
    fn test_fill_recolors_ink() {
        let mut grid = Grid::with_glyphs(5, 5, Glyphs::default()).unwrap();
        line(&mut grid, seg(1, 3, 5, 3)).unwrap();
        let painted = fill(&mut grid, Point::new(5, 3), '#').unwrap();
        assert_eq!(painted, 5);
        assert_eq!(grid.get(1, 3).unwrap(), '#');
        assert_eq!(grid.get(1, 2).unwrap(), ' ');
    }

    #[test]
    fn test_fill_never_writes_border() {
        let mut grid = Grid::with_glyphs(4, 2, Glyphs::default()).unwrap();
        fill(&mut grid, Point::new(1, 1), '|').unwrap();
        // Border-colored content must not let a second fill escape
        fill(&mut grid, Point::new(1, 1), 'o').unwrap();

        assert_eq!(grid.to_string(), "------\n|oooo|\n|oooo|\n------\n");
    }

    #[test]
    fn test_fill_large_canvas() {
        let mut grid = Grid::with_glyphs(500, 500, Glyphs::default()).unwrap();
        let painted = fill(&mut grid, Point::new(250, 250), 'o').unwrap();
        assert_eq!(painted, 250_000);
    }
}
