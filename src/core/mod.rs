//! Core drawing engine.
//!
//! This module contains everything that touches the canvas:
//!
//! - **grid**: bordered character buffer with bounds-checked access
//! - **validate**: argument checks that run before any mutation
//! - **draw**: canvas creation, lines and rectangles
//! - **fill**: 4-connected bucket fill
//! - **command**: verb parsing and dispatch
//! - **session**: owns the canvas between commands
//!
//! # Architecture
//!
//! ```text
//! Session
//! ├── Grid (current canvas, cached canvas after quit)
//! └── execute(line)
//!     └── Command::parse -> dispatch
//!         ├── validate (canvas, arg count, numbers, geometry, bounds)
//!         └── draw / fill (mutate Grid)
//! ```

pub mod command;
pub mod draw;
pub mod error;
pub mod fill;
pub mod grid;
pub mod session;
pub mod validate;

pub use command::Outcome;
pub use grid::{Glyphs, Grid};
pub use session::Session;
