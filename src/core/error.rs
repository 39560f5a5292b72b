//! Drawing errors
//!
//! Every error here is a user input error. They are all raised before the
//! grid is touched, so a failed command never leaves a half-drawn canvas.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Create a canvas first, e.g. C 20 4")]
    NoCanvas,

    #[error("Press start before drawing")]
    NotReady,

    #[error("Wrong number of arguments: expected {expected}, got {got}. Format: {usage}")]
    ArgumentCount {
        expected: usize,
        got: usize,
        usage: &'static str,
    },

    #[error("Invalid argument '{0}': {1}")]
    InvalidArgument(String, &'static str),

    #[error("Invalid canvas size {width}x{height}: {reason}")]
    InvalidDimension {
        width: i64,
        height: i64,
        reason: &'static str,
    },

    #[error("({x}, {y}) is outside the canvas ({width}x{height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Only horizontal or vertical lines are supported")]
    UnsupportedGeometry,

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, DrawError>;
