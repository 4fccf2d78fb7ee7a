//! URL helper functions and the route/asset resolvers handed to templates

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::error::{RenderError, Result};

/// Characters escaped when a route parameter is placed in a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Resolves named routes to absolute URLs
pub trait RouteResolver: Send + Sync {
    fn route(&self, name: &str, params: &[&str]) -> Result<String>;
}

/// Resolves static asset paths to absolute URLs
pub trait AssetResolver: Send + Sync {
    fn asset(&self, path: &str) -> String;
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for("/blog/", "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com", "/blog/", "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(base: &str, root: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), url_for(root, path))
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Resolvers backed by the site configuration
#[derive(Debug, Clone)]
pub struct SiteUrls {
    url: String,
    root: String,
    asset_url: Option<String>,
    routes: BTreeMap<String, String>,
}

impl SiteUrls {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            url: config.url.clone(),
            root: config.root.clone(),
            asset_url: config.asset_url.clone(),
            routes: config.routes.clone(),
        }
    }

    /// Substitute `{placeholder}`s in a route pattern, in order
    fn expand(&self, name: &str, pattern: &str, params: &[&str]) -> Result<String> {
        let mut params = params.iter();
        let mut path = String::with_capacity(pattern.len());
        let mut rest = pattern;

        while let Some(start) = rest.find('{') {
            let end = rest[start..]
                .find('}')
                .map(|i| start + i)
                .ok_or_else(|| RenderError::MalformedRoute {
                    route: name.to_string(),
                    pattern: pattern.to_string(),
                })?;

            let placeholder = &rest[start + 1..end];
            let value = params
                .next()
                .ok_or_else(|| RenderError::MissingRouteParameter {
                    route: name.to_string(),
                    parameter: placeholder.to_string(),
                })?;

            path.push_str(&rest[..start]);
            path.push_str(&encode_segment(value));
            rest = &rest[end + 1..];
        }
        path.push_str(rest);

        let unused = params.count();
        if unused > 0 {
            return Err(RenderError::UnusedRouteParameters {
                route: name.to_string(),
                count: unused,
            });
        }

        Ok(path)
    }
}

impl RouteResolver for SiteUrls {
    fn route(&self, name: &str, params: &[&str]) -> Result<String> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| RenderError::UnknownRoute(name.to_string()))?;
        let path = self.expand(name, pattern, params)?;
        Ok(full_url_for(&self.url, &self.root, &path))
    }
}

impl AssetResolver for SiteUrls {
    fn asset(&self, path: &str) -> String {
        match &self.asset_url {
            Some(base) => full_url_for(base, "/", path),
            None => full_url_for(&self.url, &self.root, path),
        }
    }
}
