// Template contracts for page chrome
// A template renders the markup that opens and closes a page region;
// the body in between comes from the caller.

pub mod page;

pub use page::HtmlPage;

use crate::error::Result;

/// Two-part page template.
///
/// `render_header` produces the markup that begins the template region
/// (typically the document shell up to and including the opening body
/// tag, head fragments included) and `render_footer` the markup that
/// closes it. Both return the produced markup; a failed render must
/// abort the surrounding pipeline rather than emit partial output.
pub trait Template {
    /// Render the opening markup of the template.
    fn render_header(&self) -> Result<String>;

    /// Render the closing markup of the template.
    fn render_footer(&self) -> Result<String>;
}

/// Render a complete page: header, then `body`, then footer.
///
/// Returns the first error unchanged, with no partial markup.
pub fn render_page(template: &dyn Template, body: &str) -> Result<String> {
    let mut html = template.render_header()?;
    html.push_str(body);
    html.push_str(&template.render_footer()?);
    Ok(html)
}
