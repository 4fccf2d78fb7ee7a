//! HTML helper functions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Escape HTML special characters
///
/// Installed as the template engine's escape function, so every plain
/// string interpolated into a page goes through it.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML that is written to the page as-is
///
/// Templates must only mark a value `| safe` when it comes from a field of
/// this type. Producing one is an explicit statement that the markup has
/// already been sanitized or rendered by something trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup that is known to be safe
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escape plain text so it can be embedded as HTML
    pub fn from_text(text: &str) -> Self {
        Self(html_escape(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
