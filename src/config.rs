//! Configuration and color scheme management for textdraw.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.textdraw/config.toml`
//! - Glyph overrides for the canvas border, ink and empty cells
//! - Built-in color schemes for the terminal renderer
//!
//! # Configuration File
//!
//! ```toml
//! # Colored output (ignored when stdout is not a terminal)
//! color = true
//!
//! # Color scheme: default, nord, dracula, gruvbox-dark
//! color_scheme = "nord"
//!
//! # Log level when RUST_LOG is not set
//! log_level = "info"
//!
//! [glyphs]
//! empty = " "
//! ink = "x"
//! horizontal = "-"
//! vertical = "|"
//!
//! # Optional canvas size cap; unbounded when absent
//! [canvas]
//! max_width = 500
//! max_height = 500
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::draw::Limits;
use crate::core::grid::is_single_cell;
use crate::core::Glyphs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Glyph '{name}' must be a single printable character, got {value:?}")]
    Glyph { name: &'static str, value: String },

    #[error("Glyphs '{first}' and '{second}' must differ, both are {value:?}")]
    GlyphConflict {
        first: &'static str,
        second: &'static str,
        value: char,
    },

    #[error("Canvas limits must be at least 1")]
    Limits,
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colored output
    pub color: bool,
    /// Color scheme name
    pub color_scheme: String,
    /// Default log filter
    pub log_level: String,
    /// Canvas glyphs
    pub glyphs: GlyphConfig,
    /// Canvas size limits
    pub canvas: CanvasConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            color_scheme: "default".to_string(),
            log_level: "info".to_string(),
            glyphs: GlyphConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }
}

/// Glyph configuration. Each entry is a one-character string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub empty: String,
    pub ink: String,
    pub horizontal: String,
    pub vertical: String,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        Self {
            empty: glyphs.empty.to_string(),
            ink: glyphs.ink.to_string(),
            horizontal: glyphs.horizontal.to_string(),
            vertical: glyphs.vertical.to_string(),
        }
    }
}

impl GlyphConfig {
    /// Empty and ink cells must be distinguishable from each other and from
    /// the border, or fill would run through lines and frame.
    pub fn to_glyphs(&self) -> Result<Glyphs, ConfigError> {
        let glyphs = Glyphs {
            empty: glyph("empty", &self.empty)?,
            ink: glyph("ink", &self.ink)?,
            horizontal: glyph("horizontal", &self.horizontal)?,
            vertical: glyph("vertical", &self.vertical)?,
        };

        let pairs = [
            ("empty", glyphs.empty, "ink", glyphs.ink),
            ("empty", glyphs.empty, "horizontal", glyphs.horizontal),
            ("empty", glyphs.empty, "vertical", glyphs.vertical),
            ("ink", glyphs.ink, "horizontal", glyphs.horizontal),
            ("ink", glyphs.ink, "vertical", glyphs.vertical),
        ];
        match pairs.into_iter().find(|(_, a, _, b)| a == b) {
            Some((first, value, second, _)) => Err(ConfigError::GlyphConflict {
                first,
                second,
                value,
            }),
            None => Ok(glyphs),
        }
    }
}

fn glyph(name: &'static str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if is_single_cell(ch) => Ok(ch),
        _ => Err(ConfigError::Glyph {
            name,
            value: value.to_string(),
        }),
    }
}

/// Canvas configuration. No cap unless set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<usize>,
}

impl CanvasConfig {
    pub fn to_limits(&self) -> Result<Limits, ConfigError> {
        if self.max_width == Some(0) || self.max_height == Some(0) {
            return Err(ConfigError::Limits);
        }
        Ok(Limits {
            max_width: self.max_width,
            max_height: self.max_height,
        })
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and check a specific configuration file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.glyphs.to_glyphs()?;
        self.canvas.to_limits()?;
        Ok(())
    }

    /// Directory holding the config and log files
    pub fn data_dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".textdraw"))
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get the color scheme
    pub fn get_color_scheme(&self) -> ColorScheme {
        ColorScheme::by_name(&self.color_scheme)
    }
}

/// Color definition (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to crossterm Color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Color scheme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    /// Canvas frame
    pub border: Color,
    /// Lines and rectangles
    pub ink: Color,
    /// Bucket fill colors
    pub fill: Color,
    /// Error messages
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}

impl ColorScheme {
    /// Default color scheme
    pub fn default_scheme() -> Self {
        Self {
            name: "default".to_string(),
            border: Color::new(110, 110, 110),
            ink: Color::new(255, 255, 255),
            fill: Color::new(100, 150, 255),
            error: Color::new(220, 60, 60),
        }
    }

    /// Nord scheme
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            border: Color::new(76, 86, 106),
            ink: Color::new(236, 239, 244),
            fill: Color::new(136, 192, 208),
            error: Color::new(191, 97, 106),
        }
    }

    /// Dracula scheme
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            border: Color::new(98, 114, 164),
            ink: Color::new(248, 248, 242),
            fill: Color::new(189, 147, 249),
            error: Color::new(255, 85, 85),
        }
    }

    /// Gruvbox Dark scheme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "gruvbox-dark".to_string(),
            border: Color::new(102, 92, 84),
            ink: Color::new(235, 219, 178),
            fill: Color::new(215, 153, 33),
            error: Color::new(204, 36, 29),
        }
    }

    /// Get scheme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "gruvbox-dark" | "gruvbox_dark" | "gruvbox" => Self::gruvbox_dark(),
            _ => Self::default_scheme(),
        }
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec!["default", "nord", "dracula", "gruvbox-dark"]
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
