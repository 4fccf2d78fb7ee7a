//! Front-matter parsing

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::helpers::parse_source_date;

/// Front-matter data from a post file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        // YAML front-matter (---)
        if trimmed.starts_with("---") {
            return Self::parse_yaml(trimmed);
        }

        // JSON front-matter (;;;)
        if trimmed.starts_with(";;;") {
            return Self::parse_json(trimmed);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        // An empty block closes immediately
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else {
            let end_pos = rest
                .find("\n---")
                .ok_or_else(|| anyhow!("Unterminated YAML front-matter"))?;
            (&rest[..end_pos], &rest[end_pos + 4..])
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter =
            serde_yaml::from_str(yaml_content).context("Failed to parse YAML front-matter")?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..];
        let end_pos = rest
            .find(";;;")
            .ok_or_else(|| anyhow!("Unterminated JSON front-matter"))?;

        let json_content = &rest[..end_pos];
        let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

        let fm: FrontMatter =
            serde_json::from_str(json_content).context("Failed to parse JSON front-matter")?;
        Ok((fm, remaining))
    }

    /// Parse the date string into a calendar date
    pub fn parse_date(&self) -> Result<Option<NaiveDate>> {
        match self.date.as_deref() {
            None => Ok(None),
            Some(s) => parse_source_date(s)
                .map(Some)
                .ok_or_else(|| anyhow!("Invalid date '{}', expected YYYY-MM-DD", s)),
        }
    }
}
