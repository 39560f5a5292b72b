//! User interface rendering.
//!
//! - **renderer**: prints the canvas and error messages, colored or plain

pub mod renderer;

pub use renderer::Renderer;
