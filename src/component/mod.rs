// UI components that render themselves to markup

pub mod headers;

pub use headers::HtmlHeaders;

/// A self-contained piece of UI able to render itself to HTML.
pub trait Component {
    /// Render the component to its HTML text.
    fn html(&self) -> String;
}
