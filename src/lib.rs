pub mod component;
pub mod error;
pub mod template;
pub mod util;

// Re-export commonly used types
pub use component::{Component, HtmlHeaders};
pub use error::{RenderError, Result};
pub use template::{HtmlPage, Template, render_page};
