//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::helpers::{display_date, source_date, TrustedHtml};

/// A blog post, ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Short description used for meta tags, may be empty
    #[serde(default)]
    pub summary: String,

    /// URL-safe identifier
    pub slug: String,

    /// Publication date
    pub date: NaiveDate,

    /// Rendered HTML body
    #[serde(default)]
    pub contents: TrustedHtml,

    /// File the post was loaded from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Post {
    /// Create a post with an empty summary and body
    pub fn new(title: impl Into<String>, slug: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            summary: String::new(),
            slug: slug.into(),
            date,
            contents: TrustedHtml::default(),
            source: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_contents(mut self, contents: TrustedHtml) -> Self {
        self.contents = contents;
        self
    }

    /// Date as shown to readers, e.g. "May 04, 2023"
    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }

    /// Date as used in source file names, e.g. "2023-05-04"
    pub fn source_date(&self) -> String {
        source_date(&self.date)
    }

    /// Source file stem, `<YYYY-MM-DD>.<slug>`
    pub fn source_stem(&self) -> String {
        format!("{}.{}", self.source_date(), self.slug)
    }
}
