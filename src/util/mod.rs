// Shared helpers for markup assembly

pub mod attrs;
pub mod html;

pub use attrs::HtmlAttrs;
pub use html::HtmlEscape;
