/// Unified error type for template rendering
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    // I/O errors, for template implementations that load resources
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Template errors
    #[error("Template error: {0}")]
    Template(String),

    // Generic error for implementation-defined failures
    #[error("{0}")]
    Other(String),
}

/// Result type alias using RenderError
pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    /// Create a template error
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

// Conversion from String for convenience
impl From<String> for RenderError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

// Conversion from &str for convenience
impl From<&str> for RenderError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}
