/// HTML escaping utilities
pub struct HtmlEscape;

impl HtmlEscape {
    /// Escape HTML attribute values
    /// Escapes: &, ", <, >
    /// Note: emitted attributes are always double-quoted, so ' is left alone
    pub fn escape_attribute(text: &str) -> String {
        text.replace("&", "&amp;")
            .replace("\"", "&quot;")
            .replace("<", "&lt;")
            .replace(">", "&gt;")
    }

    /// Escape HTML text content (for character data between tags)
    /// Escapes: &, <, >
    pub fn escape_text(text: &str) -> String {
        text.replace("&", "&amp;")
            .replace("<", "&lt;")
            .replace(">", "&gt;")
    }
}
