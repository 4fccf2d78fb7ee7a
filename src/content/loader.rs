//! Post loader - reads `YYYY-MM-DD.<slug>.html` files into [`Post`]s

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::helpers::{parse_source_date, TrustedHtml};

lazy_static! {
    static ref POST_FILE_NAME: Regex =
        Regex::new(r"^(\d{4}-\d{2}-\d{2})\.([^./\\]+)\.html$").unwrap();
}

/// Date and slug encoded in a post file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameParts {
    pub date: Option<NaiveDate>,
    pub slug: String,
}

/// Split `2023-05-04.hello-world.html` into its date and slug
pub fn parse_file_name(name: &str) -> Option<FileNameParts> {
    let caps = POST_FILE_NAME.captures(name)?;
    Some(FileNameParts {
        date: parse_source_date(&caps[1]),
        slug: caps[2].to_string(),
    })
}

/// Load a single post from a file
///
/// Front-matter values win over what the file name says. A post without a
/// usable slug falls back to the slugified title.
pub fn load_post(path: &Path) -> Result<Post> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read post {:?}", path))?;
    let (fm, body) =
        FrontMatter::parse(&content).with_context(|| format!("Invalid front-matter in {:?}", path))?;

    let from_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(parse_file_name);

    let title = fm
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("Post {:?} has no title", path))?
        .to_string();

    let date = match fm.parse_date().with_context(|| format!("In post {:?}", path))? {
        Some(date) => date,
        None => from_name
            .as_ref()
            .and_then(|parts| parts.date)
            .ok_or_else(|| anyhow!("Post {:?} has no date", path))?,
    };

    let slug = fm
        .slug
        .clone()
        .or_else(|| from_name.map(|parts| parts.slug))
        .unwrap_or_else(|| slug::slugify(&title));
    if !is_valid_slug(&slug) {
        bail!(
            "Post {:?} has slug {:?}, expected a single URL-safe path segment",
            path,
            slug
        );
    }

    tracing::debug!("Loaded post '{}' from {:?}", slug, path);

    let mut post = Post::new(title, slug, date)
        .with_summary(fm.summary.unwrap_or_default())
        .with_contents(TrustedHtml::new(body));
    post.source = Some(path.to_path_buf());
    Ok(post)
}

/// Whether `slug` can serve as one URL path segment and one directory name
///
/// Only ASCII letters, digits, `-`, `_` and `.` are allowed, and the slug
/// may not start with a dot, so `..` and hidden names are out.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Expand the given paths into post files, walking directories
///
/// Walked directories only yield files named like posts, so rendered pages
/// sitting next to the sources are never picked up. Paths given explicitly
/// are taken as-is.
pub fn collect_post_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .map(|e| e.into_path())
                .filter(|p| p.is_file() && is_post_file(p))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    files
}

/// Load every post under the given paths, skipping files that fail to load
pub fn load_posts(paths: &[PathBuf]) -> Vec<Post> {
    collect_post_files(paths)
        .into_iter()
        .filter_map(|path| match load_post(&path) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                None
            }
        })
        .collect()
}

fn is_post_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(parse_file_name)
        .is_some()
}
