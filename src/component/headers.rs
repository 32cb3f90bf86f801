//! Ordered collection of HTML `<head>` fragments.
//!
//! Fragments are stored as plain strings in insertion order, duplicates
//! allowed. An entry is immutable once appended; the only way to remove
//! one is to rebuild the collection. No synchronization is provided,
//! so sharing a collection across threads for mutation requires an
//! external lock.

use crate::component::Component;
use crate::util::attrs::HtmlAttrs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collected `<head>` fragments for an HTML document.
///
/// The `add_*` builders escape attribute values before appending. `add`
/// itself stores text verbatim; callers passing raw markup are
/// responsible for its safety.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlHeaders {
    entries: Vec<String>,
}

impl HtmlHeaders {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a single pre-built fragment, verbatim.
    pub fn add(&mut self, entry: impl Into<String>) -> &mut Self {
        self.entries.push(entry.into());
        self
    }

    /// Append every element of an iterable, preserving iteration order.
    ///
    /// Each element is converted to text through its `Display`
    /// implementation (numbers and booleans stringify as usual); types
    /// without a textual representation are rejected at compile time.
    pub fn add_all<I, S>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        for entry in entries {
            self.entries.push(entry.to_string());
        }
        self
    }

    /// Append a `<link>` element loading an external stylesheet.
    pub fn add_stylesheet(&mut self, url: &str) -> &mut Self {
        self.add_stylesheet_with(url, "text/css", "stylesheet")
    }

    /// Append a `<link>` element with an explicit MIME type and relation.
    pub fn add_stylesheet_with(
        &mut self,
        url: &str,
        mime_type: &str,
        relation: &str,
    ) -> &mut Self {
        let mut attrs = HtmlAttrs::new();
        attrs.set("rel", relation);
        attrs.set("type", mime_type);
        attrs.set("href", url);
        self.add(format!("<link{attrs}>"))
    }

    /// Append an inline `<style>` block.
    ///
    /// The CSS body is embedded verbatim since it is raw CSS, not attribute
    /// text.
    pub fn add_inline_style(&mut self, css: &str) -> &mut Self {
        self.add_inline_style_with(css, "text/css")
    }

    /// Append an inline `<style>` block with an explicit MIME type.
    pub fn add_inline_style_with(&mut self, css: &str, mime_type: &str) -> &mut Self {
        let mut attrs = HtmlAttrs::new();
        attrs.set("type", mime_type);
        self.add(format!("<style{attrs}>{css}</style>"))
    }

    /// Append a `<script>` element loading an external script.
    pub fn add_script(&mut self, url: &str) -> &mut Self {
        self.add_script_with(url, None, None)
    }

    /// Append a `<script>` element with subresource integrity attributes.
    ///
    /// `integrity` and `cross_origin` are included only when present and
    /// non-empty; an empty string counts as absent.
    pub fn add_script_with(
        &mut self,
        url: &str,
        integrity: Option<&str>,
        cross_origin: Option<&str>,
    ) -> &mut Self {
        let mut attrs = HtmlAttrs::new();
        attrs.set("src", url);
        attrs.set_opt("integrity", integrity);
        attrs.set_opt("crossorigin", cross_origin);
        self.add(format!("<script{attrs}></script>"))
    }

    /// Append an inline `<script>` block. The script body is embedded
    /// verbatim.
    pub fn add_inline_script(&mut self, js: &str) -> &mut Self {
        self.add(format!("<script>{js}</script>"))
    }

    /// Snapshot of all entries in insertion order.
    ///
    /// The returned vector is independent of the collection.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// Join all entries with `separator`. An empty collection yields `""`.
    pub fn join(&self, separator: &str) -> String {
        self.entries.join(separator)
    }

    /// Iterate over the entries in insertion order.
    ///
    /// Each call starts a fresh traversal over the collection as it is
    /// at call time.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no fragment has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HtmlHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for HtmlHeaders {
    fn from(entry: &str) -> Self {
        let mut headers = Self::new();
        headers.add(entry);
        headers
    }
}

impl From<String> for HtmlHeaders {
    fn from(entry: String) -> Self {
        let mut headers = Self::new();
        headers.add(entry);
        headers
    }
}

impl<S: ToString> FromIterator<S> for HtmlHeaders {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut headers = Self::new();
        headers.add_all(iter);
        headers
    }
}

impl<S: ToString> Extend<S> for HtmlHeaders {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a> IntoIterator for &'a HtmlHeaders {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for HtmlHeaders {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for HtmlHeaders {
    /// All entries joined with newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("\n"))
    }
}

impl Component for HtmlHeaders {
    fn html(&self) -> String {
        self.join("\n")
    }
}
