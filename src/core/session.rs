//! Drawing session
//!
//! Owns the canvas between commands. A session starts out not ready; once
//! started it accepts commands until `Q`, which discards the canvas but keeps
//! a copy around so the last picture can still be shown.

use tracing::{info, warn};

use super::command::{self, Command, Outcome};
use super::draw::Limits;
use super::error::{DrawError, Result};
use super::grid::{Glyphs, Grid};

pub struct Session {
    /// Current canvas, if one has been created
    grid: Option<Grid>,
    /// Canvas as it was at the last quit
    cached: Option<Grid>,
    /// Whether commands are accepted
    ready: bool,
    glyphs: Glyphs,
    limits: Limits,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Glyphs::default(), Limits::default())
    }
}

impl Session {
    pub fn new(glyphs: Glyphs, limits: Limits) -> Self {
        Self {
            grid: None,
            cached: None,
            ready: false,
            glyphs,
            limits,
        }
    }

    /// Start (or restart) accepting commands
    pub fn start(&mut self) {
        info!("Session started");
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Parse and run one command line
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        if !self.is_ready() {
            return Err(DrawError::NotReady);
        }
        let result = Command::parse(line).and_then(|cmd| command::dispatch(self, &cmd));
        if let Err(ref e) = result {
            warn!("Rejected '{}': {}", line.trim(), e);
        }
        result
    }

    /// Discard the canvas, keeping a copy for display
    pub fn quit(&mut self) {
        info!("Session quit");
        self.cached = self.grid.take();
        self.ready = false;
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        self.grid.as_mut()
    }

    /// Install a freshly created canvas, dropping the previous one
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = Some(grid);
    }

    /// The canvas to show: the live one while ready, else the one left at quit
    pub fn visible_grid(&self) -> Option<&Grid> {
        if self.ready {
            self.grid.as_ref()
        } else {
            self.cached.as_ref()
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }
}
