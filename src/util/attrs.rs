//! Ordered attribute lists for building HTML elements.
//!
//! Attributes are kept in an insertion-ordered map and rendered in that
//! order, because attribute order is part of the produced markup. Names
//! are emitted verbatim and must come from trusted code; values are
//! stored raw and attribute-escaped when the list is rendered.

use crate::util::html::HtmlEscape;
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered set of HTML attributes.
#[derive(Debug, Clone)]
pub struct HtmlAttrs {
    attrs: IndexMap<String, String>,
}

impl HtmlAttrs {
    pub fn new() -> Self {
        Self {
            attrs: IndexMap::new(),
        }
    }

    /// Set an attribute value.
    ///
    /// Re-setting an existing name replaces the value but keeps the
    /// attribute's original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when a non-empty value is present.
    ///
    /// `None` and `Some("")` both leave the attribute out.
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.attrs.insert(name.into(), value.to_string());
            }
        }
        self
    }

    /// Get the raw (unescaped) value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Default for HtmlAttrs {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HtmlAttrs {
    /// Renders ` name="value"` per attribute, values escaped, leading
    /// space included so the list can be appended to a tag name directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, HtmlEscape::escape_attribute(value))?;
        }
        Ok(())
    }
}
