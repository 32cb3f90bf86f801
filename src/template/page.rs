use super::Template;
use crate::component::HtmlHeaders;
use crate::error::Result;
use crate::util::html::HtmlEscape;
use tracing::debug;

/// Basic HTML document shell.
///
/// Renders the chrome around a body supplied elsewhere: doctype and
/// `<html>`, a `<head>` carrying the charset, the title and every
/// collected head fragment, and the matching closing tags.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    language: String,
    charset: String,
    headers: HtmlHeaders,
}

impl HtmlPage {
    /// Create a page shell with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: "en".to_string(),
            charset: "UTF-8".to_string(),
            headers: HtmlHeaders::new(),
        }
    }

    /// Set the document language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the document charset.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Replace the head fragment collection.
    pub fn with_headers(mut self, headers: HtmlHeaders) -> Self {
        self.headers = headers;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Head fragments rendered into `<head>`.
    pub fn headers(&self) -> &HtmlHeaders {
        &self.headers
    }

    /// Mutable access for callers that keep adding fragments.
    pub fn headers_mut(&mut self) -> &mut HtmlHeaders {
        &mut self.headers
    }
}

impl Template for HtmlPage {
    fn render_header(&self) -> Result<String> {
        debug!(
            "Rendering page head with {} collected fragments",
            self.headers.len()
        );

        let mut html = String::new();
        html += "<!DOCTYPE html>\n";
        html += &format!(
            "<html lang=\"{}\">\n",
            HtmlEscape::escape_attribute(&self.language)
        );
        html += "  <head>\n";
        html += &format!(
            "    <meta charset=\"{}\">\n",
            HtmlEscape::escape_attribute(&self.charset)
        );
        html += &format!("    <title>{}</title>\n", HtmlEscape::escape_text(&self.title));
        for fragment in &self.headers {
            html += &format!("    {fragment}\n");
        }
        html += "  </head>\n";
        html += "  <body>\n";
        Ok(html)
    }

    fn render_footer(&self) -> Result<String> {
        Ok("  </body>\n</html>\n".to_string())
    }
}
