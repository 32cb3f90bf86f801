// Integration tests for the template contract and the page shell
use pagehead::error::{RenderError, Result};
use pagehead::{HtmlHeaders, HtmlPage, Template, render_page};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

struct SectionTemplate {
    heading: String,
}

impl Template for SectionTemplate {
    fn render_header(&self) -> Result<String> {
        Ok(format!("<section><h1>{}</h1>", self.heading))
    }

    fn render_footer(&self) -> Result<String> {
        Ok("</section>".to_string())
    }
}

struct FailingTemplate {
    fail_footer: bool,
}

impl Template for FailingTemplate {
    fn render_header(&self) -> Result<String> {
        if self.fail_footer {
            Ok("<div>".to_string())
        } else {
            Err(RenderError::template("header failed"))
        }
    }

    fn render_footer(&self) -> Result<String> {
        Err("footer failed".into())
    }
}

#[test]
fn test_page_header_contains_collected_fragments() {
    init_tracing();

    let mut page = HtmlPage::new("Example");
    page.headers_mut()
        .add_stylesheet("main.css")
        .add_script("main.js");

    let header = page.render_header().expect("header render failed");

    assert!(header.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
    assert!(header.contains("    <meta charset=\"UTF-8\">\n"));
    assert!(header.contains("    <title>Example</title>\n"));
    assert!(
        header.contains("    <link rel=\"stylesheet\" type=\"text/css\" href=\"main.css\">\n")
    );
    assert!(header.contains("    <script src=\"main.js\"></script>\n"));
    assert!(header.ends_with("  </head>\n  <body>\n"));
}

#[test]
fn test_page_fragments_keep_insertion_order() {
    let headers: HtmlHeaders = ["<!-- a -->", "<!-- b -->"].into_iter().collect();
    let page = HtmlPage::new("Ordered").with_headers(headers);

    let header = page.render_header().expect("header render failed");
    let a = header.find("<!-- a -->").expect("first fragment missing");
    let b = header.find("<!-- b -->").expect("second fragment missing");

    assert!(a < b);
}

#[test]
fn test_page_escapes_title_and_language() {
    let page = HtmlPage::new("Rust & <You>").with_language("en\">");

    let header = page.render_header().expect("header render failed");

    assert!(header.contains("<title>Rust &amp; &lt;You&gt;</title>"));
    assert!(header.contains("<html lang=\"en&quot;&gt;\">"));
}

#[test]
fn test_page_footer_closes_document() {
    let page = HtmlPage::new("Example");

    let footer = page.render_footer().expect("footer render failed");

    assert_eq!(footer, "  </body>\n</html>\n");
}

#[test]
fn test_render_page_assembles_in_order() {
    let mut page = HtmlPage::new("Example");
    page.headers_mut().add_inline_style("body { margin: 0; }");

    let html = render_page(&page, "<p>Hello</p>").expect("page render failed");

    let head = html.find("</head>").expect("head missing");
    let body = html.find("<p>Hello</p>").expect("body missing");
    let end = html.find("</html>").expect("closing tag missing");
    assert!(head < body && body < end);
}

#[test]
fn test_render_page_with_custom_template() {
    let template = SectionTemplate {
        heading: "News".to_string(),
    };

    let html = render_page(&template, "<p>item</p>").expect("render failed");

    assert_eq!(html, "<section><h1>News</h1><p>item</p></section>");
}

#[test]
fn test_render_page_aborts_on_header_failure() {
    let template = FailingTemplate { fail_footer: false };

    let result = render_page(&template, "<p>never</p>");

    let err = result.expect_err("render should fail");
    assert!(matches!(err, RenderError::Template(_)));
    assert_eq!(err.to_string(), "Template error: header failed");
}

#[test]
fn test_render_page_aborts_on_footer_failure() {
    let template = FailingTemplate { fail_footer: true };

    let result = render_page(&template, "<p>never</p>");

    // No partial markup escapes, only the error
    let err = result.expect_err("render should fail");
    assert!(matches!(err, RenderError::Other(_)));
}

#[test]
fn test_page_builder_accessors() {
    let mut page = HtmlPage::new("Example").with_charset("ISO-8859-1");
    page.headers_mut().add_stylesheet("a.css");

    assert_eq!(page.title(), "Example");
    assert_eq!(page.headers().len(), 1);

    let header = page.render_header().expect("header render failed");
    assert!(header.contains("<meta charset=\"ISO-8859-1\">"));
}
