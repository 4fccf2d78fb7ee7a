//! Site configuration (_config.yml / _config.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Identity
    pub info: InfoConfig,

    // URL
    pub url: String,
    pub root: String,
    /// Base for static assets, falls back to `url`
    pub asset_url: Option<String>,
    /// Named route patterns, e.g. `post: /blog/{slug}`, layered over the defaults
    #[serde(deserialize_with = "merge_routes")]
    pub routes: BTreeMap<String, String>,

    // Where post sources are published
    pub source: SourceConfig,
}

/// Routes every site has; the nav and sidebar link to `home`
fn default_routes() -> BTreeMap<String, String> {
    let mut routes = BTreeMap::new();
    routes.insert("home".to_string(), "/".to_string());
    routes.insert("post".to_string(), "/blog/{slug}".to_string());
    routes
}

/// Configured routes override the defaults one by one
fn merge_routes<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut routes = default_routes();
    routes.extend(BTreeMap::<String, String>::deserialize(deserializer)?);
    Ok(routes)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            info: InfoConfig::default(),
            url: "http://example.com".to_string(),
            root: "/".to_string(),
            asset_url: None,
            routes: default_routes(),
            source: SourceConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, TOML for `.toml` and YAML otherwise
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;

        let config: SiteConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML in {:?}", path))?,
            _ => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML in {:?}", path))?,
        };

        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Site name, shown in titles and as the article author
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Twitter handle as written in the config, usually with a leading `@`
    pub fn twitter_username(&self) -> &str {
        &self.info.social.twitter.username
    }
}

/// `info.*` keys
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoConfig {
    pub name: String,
    pub social: SocialConfig,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            social: SocialConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: TwitterConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    pub username: String,
}

/// GitHub location of the post sources, used for the "edit this post" link
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// `<org>/<repo>`
    pub repository: String,
    pub branch: String,
    pub directory: String,
    pub extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repository: "example/blog".to_string(),
            branch: "master".to_string(),
            directory: "posts".to_string(),
            extension: "md".to_string(),
        }
    }
}

impl SourceConfig {
    /// GitHub blob URL of a post source named `<stem>.<extension>`
    pub fn blob_url(&self, stem: &str) -> String {
        format!(
            "https://github.com/{}/blob/{}/{}/{}.{}",
            self.repository.trim_matches('/'),
            self.branch,
            self.directory.trim_matches('/'),
            stem,
            self.extension
        )
    }
}
