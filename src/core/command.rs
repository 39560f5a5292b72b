//! Command parsing and dispatch
//!
//! A command line is a verb followed by whitespace-separated arguments:
//!
//! | Verb | Args          | Effect                                  |
//! |------|---------------|-----------------------------------------|
//! | `C`  | `w h`         | New canvas of width w and height h      |
//! | `L`  | `x1 y1 x2 y2` | Horizontal or vertical line             |
//! | `R`  | `x1 y1 x2 y2` | Rectangle with opposite corners         |
//! | `B`  | `x y c`       | Bucket fill the area around (x, y)      |
//! | `Q`  | none          | Discard the canvas                      |
//!
//! Verbs are case-insensitive. Dispatch is a plain lookup: each operation
//! validates its own arguments and errors are passed through untouched.

use tracing::debug;

use super::draw;
use super::error::{DrawError, Result};
use super::fill;
use super::session::Session;
use super::validate::{self, require_arg_count, require_canvas};

const USAGE_CANVAS: &str = "C w h";
const USAGE_LINE: &str = "L x1 y1 x2 y2";
const USAGE_RECT: &str = "R x1 y1 x2 y2";
const USAGE_FILL: &str = "B x y c";
const USAGE_QUIT: &str = "Q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    CreateCanvas,
    Line,
    Rectangle,
    Fill,
    Quit,
}

impl Verb {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "c" => Some(Verb::CreateCanvas),
            "l" => Some(Verb::Line),
            "r" => Some(Verb::Rectangle),
            "b" => Some(Verb::Fill),
            "q" => Some(Verb::Quit),
            _ => None,
        }
    }
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub args: Vec<String>,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let token = tokens.next().unwrap_or_default();
        let verb = Verb::from_token(token)
            .ok_or_else(|| DrawError::UnknownCommand(token.to_string()))?;
        Ok(Self {
            verb,
            args: tokens.map(str::to_string).collect(),
        })
    }
}

/// What a successful command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The canvas changed
    Drawn,
    /// Accepted, nothing to redraw
    Unchanged,
    /// The session ended
    Quit,
}

pub fn dispatch(session: &mut Session, cmd: &Command) -> Result<Outcome> {
    debug!(verb = ?cmd.verb, args = ?cmd.args, "Dispatching");
    let args = cmd.args.as_slice();

    match cmd.verb {
        Verb::CreateCanvas => {
            require_arg_count(args, 2, USAGE_CANVAS)?;
            let size = validate::require_numeric(args)?;
            let grid = draw::create_canvas(size[0], size[1], session.glyphs(), session.limits())?;
            session.replace_grid(grid);
            Ok(Outcome::Drawn)
        }
        Verb::Line => {
            let grid = require_canvas(session.grid_mut())?;
            let segment = validate::line_segment(args, grid, USAGE_LINE)?;
            draw::line(grid, segment)?;
            Ok(Outcome::Drawn)
        }
        Verb::Rectangle => {
            let grid = require_canvas(session.grid_mut())?;
            let corners = validate::rectangle_corners(args, grid, USAGE_RECT)?;
            draw::rectangle(grid, corners)?;
            Ok(Outcome::Drawn)
        }
        Verb::Fill => {
            let grid = require_canvas(session.grid_mut())?;
            require_arg_count(args, 3, USAGE_FILL)?;
            let seed = validate::point(&args[..2], grid, USAGE_FILL)?;
            let color = validate::require_color(&args[2])?;
            match fill::fill(grid, seed, color)? {
                0 => Ok(Outcome::Unchanged),
                _ => Ok(Outcome::Drawn),
            }
        }
        Verb::Quit => {
            require_arg_count(args, 0, USAGE_QUIT)?;
            session.quit();
            Ok(Outcome::Quit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{Glyphs, Grid};

    fn session() -> Session {
        let mut session = Session::default();
        session.start();
        session
    }

    fn canvas(session: &Session) -> String {
        session.grid().map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn test_parse_verbs() {
        let cmd = Command::parse("  l 1 2   6 2 ").unwrap();
        assert_eq!(cmd.verb, Verb::Line);
        assert_eq!(cmd.args, vec!["1", "2", "6", "2"]);

        for (token, verb) in [
            ("C", Verb::CreateCanvas),
            ("r", Verb::Rectangle),
            ("B", Verb::Fill),
            ("q", Verb::Quit),
        ] {
            assert_eq!(Command::parse(token).unwrap().verb, verb);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("X 1 2"),
            Err(DrawError::UnknownCommand("X".to_string()))
        );
        assert_eq!(
            Command::parse("   "),
            Err(DrawError::UnknownCommand(String::new()))
        );
        assert!(Command::parse("CC 1 2").is_err());
    }

    #[test]
    fn test_canonical_scenario() {
        let mut s = session();
        for line in ["C 20 4", "L 1 2 6 2", "L 6 3 6 4", "R 15 1 18 3"] {
            assert_eq!(s.execute(line), Ok(Outcome::Drawn));
        }
        assert_eq!(
            canvas(&s),
            "----------------------\n\
             |              xxxx  |\n\
             |xxxxxx        x  x  |\n\
             |     x        xxxx  |\n\
             |     x              |\n\
             ----------------------\n"
        );

        assert_eq!(s.execute("B 10 3 o"), Ok(Outcome::Drawn));
        assert_eq!(
            canvas(&s),
            "----------------------\n\
             |ooooooooooooooxxxxoo|\n\
             |xxxxxxoooooooox  xoo|\n\
             |     xooooooooxxxxoo|\n\
             |     xoooooooooooooo|\n\
             ----------------------\n"
        );
    }

    #[test]
    fn test_commands_need_canvas() {
        let mut s = session();
        assert_eq!(s.execute("L 1 1 1 3"), Err(DrawError::NoCanvas));
        assert_eq!(s.execute("R 1 1 3 3"), Err(DrawError::NoCanvas));
        assert_eq!(s.execute("B 1 1 o"), Err(DrawError::NoCanvas));
    }

    #[test]
    fn test_create_canvas_errors() {
        let mut s = session();
        s.execute("C 4 4").unwrap();
        let before = canvas(&s);

        assert!(matches!(s.execute("C 0 4"), Err(DrawError::InvalidDimension { .. })));
        assert!(matches!(s.execute("C 4 -3"), Err(DrawError::InvalidDimension { .. })));
        assert!(matches!(s.execute("C a 4"), Err(DrawError::InvalidArgument(..))));
        assert!(matches!(s.execute("C 4"), Err(DrawError::ArgumentCount { .. })));
        assert_eq!(canvas(&s), before);
    }

    #[test]
    fn test_create_canvas_replaces_content() {
        let mut s = session();
        s.execute("C 3 3").unwrap();
        s.execute("B 1 1 o").unwrap();
        s.execute("C 3 3").unwrap();
        let blank = Grid::with_glyphs(3, 3, Glyphs::default()).unwrap();
        assert_eq!(canvas(&s), blank.to_string());
    }

    #[test]
    fn test_line_rejections_leave_canvas() {
        let mut s = session();
        s.execute("C 20 4").unwrap();
        let before = canvas(&s);

        assert!(matches!(s.execute("L 1 1 25 1"), Err(DrawError::OutOfBounds { x: 25, .. })));
        assert_eq!(s.execute("L 1 1 5 5"), Err(DrawError::UnsupportedGeometry));
        assert_eq!(s.execute("L 3 1 25 9"), Err(DrawError::UnsupportedGeometry));
        assert!(matches!(s.execute("L 0 1 5 1"), Err(DrawError::InvalidArgument(..))));
        assert!(matches!(s.execute("L 1 1 5"), Err(DrawError::ArgumentCount { .. })));
        assert!(matches!(s.execute("R 1 1 5 9"), Err(DrawError::OutOfBounds { .. })));
        assert_eq!(canvas(&s), before);
    }

    #[test]
    fn test_fill_arguments() {
        let mut s = session();
        s.execute("C 5 5").unwrap();
        let before = canvas(&s);

        assert!(matches!(s.execute("B 1 1"), Err(DrawError::ArgumentCount { .. })));
        assert!(matches!(s.execute("B 1 1 oo"), Err(DrawError::InvalidArgument(..))));
        assert!(matches!(s.execute("B 0 1 o"), Err(DrawError::InvalidArgument(..))));
        assert!(matches!(s.execute("B 6 1 o"), Err(DrawError::OutOfBounds { .. })));
        assert_eq!(canvas(&s), before);

        assert_eq!(s.execute("b 1 1 o"), Ok(Outcome::Drawn));
        assert_eq!(s.execute("B 3 3 o"), Ok(Outcome::Unchanged));
    }

    #[test]
    fn test_quit_takes_no_arguments() {
        let mut s = session();
        assert!(matches!(s.execute("Q now"), Err(DrawError::ArgumentCount { .. })));
        assert_eq!(s.execute("q"), Ok(Outcome::Quit));
    }
}
