/// Centralized error handling for pagehead
pub mod render;

pub use render::{RenderError, Result};
